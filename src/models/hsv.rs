//! Model a color with the HSV notation of an RGB color space.

use crate::color::Component;
use crate::models::Rgb;

perceptual_color_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue in degrees, [0, 360). Achromatic colors report 0.
        pub hue: Component,
        /// The saturation, [0, 1].
        pub saturation: Component,
        /// The value, [0, 1].
        pub value: Component,
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue && self.saturation == other.saturation && self.value == other.value
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let Rgb {
            red, green, blue, ..
        } = rgb;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta != 0.0 {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            0.0
        };

        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Hsv::new(crate::math::normalize_hue(hue), saturation, max)
    }
}
