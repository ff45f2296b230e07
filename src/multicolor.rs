//! A color with every representation the engine works with, computed once.

use crate::{
    boundary::GamutBoundary,
    color::Component,
    models::{Hsv, Lab, Lch, Rgb},
};

/// What to do with a perceptual color that the device cannot display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutOfGamutBehaviour {
    /// Keep the perceptual coordinates as given. The device color is a
    /// clamped approximation, good enough for display.
    Preserve,
    /// Move the color into the gamut first by reducing chroma, keeping hue
    /// and (where possible) lightness.
    SacrificeChroma,
}

/// A color stored in every representation: device RGB (also as 8-bit
/// values), HSV, CIE-Lab and CIE-LCh, plus alpha.
///
/// Equality compares every stored field exactly; `h == 0` and `h == 360` are
/// different values here.
///
/// ```rust
/// use perceptual_color::{GamutBoundary, MultiColor, OutOfGamutBehaviour, Lch};
///
/// let boundary = GamutBoundary::srgb().unwrap();
/// let color = MultiColor::from_lch(
///     &boundary,
///     &Lch::new(50.0, 500.0, 0.0),
///     1.0,
///     OutOfGamutBehaviour::SacrificeChroma,
/// );
/// assert!(boundary.is_in_gamut(color.lch()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MultiColor {
    rgb: Rgb,
    rgb_bytes: [u8; 3],
    hsv: Hsv,
    lab: Lab,
    lch: Lch,
    alpha: Component,
    valid: bool,
}

fn clamp_alpha(alpha: Component) -> Component {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}

impl MultiColor {
    /// Create a color from a device color. Channels are clamped into [0, 1];
    /// every device color is in gamut.
    pub fn from_rgb(boundary: &GamutBoundary, rgb: &Rgb, alpha: Component) -> Self {
        let rgb = rgb.clip();
        let lab = boundary.to_lab(&rgb);
        Self::from_parts(rgb, lab, lab.to_lch(), alpha)
    }

    /// Create a color from CIE-Lab.
    pub fn from_lab(
        boundary: &GamutBoundary,
        lab: &Lab,
        alpha: Component,
        behaviour: OutOfGamutBehaviour,
    ) -> Self {
        match behaviour {
            OutOfGamutBehaviour::Preserve => {
                let rgb = boundary.to_device_color_bounded(*lab);
                Self::from_parts(rgb, *lab, lab.to_lch(), alpha)
            }
            OutOfGamutBehaviour::SacrificeChroma => {
                let lch = boundary.nearest_in_gamut(&lab.to_lch());
                Self::from_mapped(boundary, lch, alpha)
            }
        }
    }

    /// Create a color from CIE-LCh. Chroma and hue are normalized first.
    pub fn from_lch(
        boundary: &GamutBoundary,
        lch: &Lch,
        alpha: Component,
        behaviour: OutOfGamutBehaviour,
    ) -> Self {
        match behaviour {
            OutOfGamutBehaviour::Preserve => {
                let lch = lch.normalized();
                let lab = lch.to_lab();
                let rgb = boundary.to_device_color_bounded(lab);
                Self::from_parts(rgb, lab, lch, alpha)
            }
            OutOfGamutBehaviour::SacrificeChroma => {
                let lch = boundary.nearest_in_gamut(lch);
                Self::from_mapped(boundary, lch, alpha)
            }
        }
    }

    fn from_mapped(boundary: &GamutBoundary, lch: Lch, alpha: Component) -> Self {
        let lab = lch.to_lab();
        // In gamut by construction; the bounded conversion only guards
        // against rounding at the very edge.
        let rgb = boundary
            .to_device_color_unbounded(lab)
            .unwrap_or_else(|| boundary.to_device_color_bounded(lab));
        Self::from_parts(rgb, lab, lch, alpha)
    }

    fn from_parts(rgb: Rgb, lab: Lab, lch: Lch, alpha: Component) -> Self {
        Self {
            rgb,
            rgb_bytes: rgb.to_bytes(),
            hsv: Hsv::from(rgb),
            lab,
            lch,
            alpha: clamp_alpha(alpha),
            valid: true,
        }
    }

    /// The device color, every channel in [0, 1].
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The device color as 8-bit values.
    pub fn rgb_bytes(&self) -> [u8; 3] {
        self.rgb_bytes
    }

    /// The device color in HSV notation.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The color in CIE-Lab.
    pub fn lab(&self) -> Lab {
        self.lab
    }

    /// The color in CIE-LCh.
    pub fn lch(&self) -> Lch {
        self.lch
    }

    /// Opacity, 0 (transparent) to 1 (opaque).
    pub fn alpha(&self) -> Component {
        self.alpha
    }

    /// Change the opacity, clamped into [0, 1]. No other representation
    /// changes.
    pub fn set_alpha(&mut self, alpha: Component) {
        self.alpha = clamp_alpha(alpha);
    }

    /// Returns false for a default constructed color.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The device color as `#RRGGBB`.
    pub fn hex_string(&self) -> String {
        let [red, green, blue] = self.rgb_bytes;
        format!("#{red:02X}{green:02X}{blue:02X}")
    }
}

impl Default for MultiColor {
    fn default() -> Self {
        Self {
            rgb: Rgb::new(0.0, 0.0, 0.0),
            rgb_bytes: [0, 0, 0],
            hsv: Hsv::new(0.0, 0.0, 0.0),
            lab: Lab::new(0.0, 0.0, 0.0),
            lch: Lch::new(0.0, 0.0, 0.0),
            alpha: 0.0,
            valid: false,
        }
    }
}

impl PartialEq for MultiColor {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
            && self.rgb_bytes == other.rgb_bytes
            && self.hsv == other.hsv
            && self.lab == other.lab
            && self.lch.has_same_coordinates(&other.lch)
            && self.alpha == other.alpha
            && self.valid == other.valid
    }
}
