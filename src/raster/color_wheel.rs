use std::sync::Arc;

use image::RgbaImage;

use super::{
    clip_to_ring, opaque, physical, sanitize_device_pixel_ratio, sanitize_length, Cache, OVERLAP,
};
use crate::{
    boundary::{GamutBoundary, HUMAN_MAXIMUM_CHROMA},
    color::Component,
    models::Lch,
    polar::PolarPoint,
};

/// A ring of every hue at one lightness and chroma. Hue 0 points right and
/// grows counter-clockwise. Hues whose color is out of gamut show the nearest
/// in-gamut color of the same hue, so the ring has no gaps.
#[derive(Debug)]
pub struct ColorWheelImage {
    boundary: Arc<GamutBoundary>,
    size: u32,
    border: Component,
    device_pixel_ratio: Component,
    thickness: Component,
    lightness: Component,
    chroma: Component,
    cache: Cache,
}

impl ColorWheelImage {
    /// Create an empty (0 x 0) wheel, 20 pixels thick, at lightness 50 and
    /// the maximum chroma of the gamut.
    pub fn new(boundary: Arc<GamutBoundary>) -> Self {
        let chroma = boundary.maximum_chroma().clamp(0.0, HUMAN_MAXIMUM_CHROMA);
        Self {
            boundary,
            size: 0,
            border: 0.0,
            device_pixel_ratio: 1.0,
            thickness: 20.0,
            lightness: 50.0,
            chroma,
            cache: Cache::new("color-wheel"),
        }
    }

    /// Width and height in logical pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Set width and height in logical pixels.
    pub fn set_size(&mut self, size: u32) {
        self.cache.update(&mut self.size, size);
    }

    /// Transparent margin around the wheel, in logical pixels.
    pub fn border(&self) -> Component {
        self.border
    }

    /// Set the margin. Negative values become 0.
    pub fn set_border(&mut self, border: Component) {
        self.cache.update(&mut self.border, sanitize_length(border));
    }

    /// Physical pixels per logical pixel.
    pub fn device_pixel_ratio(&self) -> Component {
        self.device_pixel_ratio
    }

    /// Set the device pixel ratio. Values below 1 become 1.
    pub fn set_device_pixel_ratio(&mut self, ratio: Component) {
        self.cache
            .update(&mut self.device_pixel_ratio, sanitize_device_pixel_ratio(ratio));
    }

    /// Width of the ring in logical pixels.
    pub fn thickness(&self) -> Component {
        self.thickness
    }

    /// Set the width of the ring. Negative values become 0.
    pub fn set_thickness(&mut self, thickness: Component) {
        self.cache.update(&mut self.thickness, sanitize_length(thickness));
    }

    /// The lightness of the ring colors.
    pub fn lightness(&self) -> Component {
        self.lightness
    }

    /// Set the lightness, clamped into [0, 100].
    pub fn set_lightness(&mut self, lightness: Component) {
        let lightness = if lightness.is_nan() {
            0.0
        } else {
            lightness.clamp(0.0, 100.0)
        };
        self.cache.update(&mut self.lightness, lightness);
    }

    /// The chroma the ring colors have where the gamut allows it.
    pub fn chroma(&self) -> Component {
        self.chroma
    }

    /// Set the chroma, clamped into [0, [`HUMAN_MAXIMUM_CHROMA`]].
    pub fn set_chroma(&mut self, chroma: Component) {
        let chroma = if chroma.is_nan() {
            0.0
        } else {
            chroma.clamp(0.0, HUMAN_MAXIMUM_CHROMA)
        };
        self.cache.update(&mut self.chroma, chroma);
    }

    /// Returns true if the bitmap is cached and `image()` will not render.
    pub fn is_cached(&self) -> bool {
        self.cache.is_cached()
    }

    /// The hue shown at the physical pixel `(x, y)`.
    pub fn hue_at(&self, x: u32, y: u32) -> Component {
        let center = physical(self.size, self.device_pixel_ratio) as Component / 2.0;
        hue_at(x, y, center)
    }

    /// The rendered wheel, from the cache if possible.
    pub fn image(&mut self) -> &RgbaImage {
        let size = physical(self.size, self.device_pixel_ratio);
        let border = self.border * self.device_pixel_ratio;
        let thickness = self.thickness * self.device_pixel_ratio;
        let (lightness, chroma) = (self.lightness, self.chroma);
        let boundary = &self.boundary;

        self.cache.get_or_render(|| {
            let mut image = RgbaImage::new(size, size);

            let center = size as Component / 2.0;
            let outer_radius = center - border;
            if outer_radius < 0.5 {
                return image;
            }
            let inner_radius = (outer_radius - thickness).max(0.0);

            for (x, y, pixel) in image.enumerate_pixels_mut() {
                let dx = x as Component + 0.5 - center;
                let dy = y as Component + 0.5 - center;
                let distance = dx.hypot(dy);
                if distance > outer_radius + OVERLAP || distance < inner_radius - OVERLAP {
                    continue;
                }

                let lch = Lch::new(lightness, chroma, hue_at(x, y, center));
                let mapped = boundary.nearest_in_gamut(&lch);
                *pixel = opaque(&boundary.to_device_color_bounded(mapped));
            }

            clip_to_ring(&mut image, center, outer_radius, inner_radius);
            image
        })
    }
}

fn hue_at(x: u32, y: u32, center: Component) -> Component {
    // Image rows grow downwards; hue grows counter-clockwise.
    PolarPoint::from_cartesian(x as Component + 0.5 - center, center - (y as Component + 0.5))
        .angle_degree()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srgb_wheel(size: u32) -> ColorWheelImage {
        let mut wheel = ColorWheelImage::new(Arc::new(GamutBoundary::srgb().unwrap()));
        wheel.set_size(size);
        wheel
    }

    #[test]
    fn hue_orientation() {
        let wheel = srgb_wheel(100);
        approx::assert_abs_diff_eq!(wheel.hue_at(99, 49), 0.0, epsilon = 1.0);
        approx::assert_abs_diff_eq!(wheel.hue_at(49, 0), 90.0, epsilon = 1.0);
        approx::assert_abs_diff_eq!(wheel.hue_at(0, 49), 180.0, epsilon = 1.0);
        approx::assert_abs_diff_eq!(wheel.hue_at(49, 99), 270.0, epsilon = 1.0);
    }

    #[test]
    fn ring_has_no_gaps_and_a_transparent_hole() {
        let mut wheel = srgb_wheel(64);
        wheel.set_thickness(10.0);
        let image = wheel.image();

        assert_eq!(image.get_pixel(32, 32).0[3], 0);
        assert_eq!(image.get_pixel(0, 0).0[3], 0);

        // Pixel centers 5 pixels inside of the outer edge, all around.
        for (x, y) in [(59, 32), (32, 4), (4, 32), (32, 59), (51, 12), (12, 51)] {
            assert_eq!(image.get_pixel(x, y).0[3], 255, "pixel {x}, {y}");
        }
    }

    #[test]
    fn ring_colors_keep_their_hue() {
        let boundary = GamutBoundary::srgb().unwrap();
        let mut wheel = srgb_wheel(64);
        wheel.set_thickness(10.0);
        wheel.set_chroma(30.0);
        let hue = wheel.hue_at(59, 32);
        let pixel = *wheel.image().get_pixel(59, 32);

        let rgb = crate::models::Rgb::from_bytes(pixel.0[0], pixel.0[1], pixel.0[2]);
        let lch = boundary.to_lch(&rgb);
        approx::assert_abs_diff_eq!(lch.l, 50.0, epsilon = 1.0);
        approx::assert_abs_diff_eq!(lch.c, 30.0, epsilon = 1.5);
        approx::assert_abs_diff_eq!(lch.h, hue, epsilon = 3.0);
    }

    #[test]
    fn cache_is_kept_for_same_values() {
        let mut wheel = srgb_wheel(32);
        wheel.image();
        wheel.set_thickness(20.0);
        wheel.set_lightness(50.0);
        wheel.set_chroma(wheel.chroma());
        assert!(wheel.is_cached());
        wheel.set_thickness(-1.0);
        assert_eq!(wheel.thickness(), 0.0);
        assert!(!wheel.is_cached());
    }

    #[test]
    fn device_pixel_ratio_scales_the_bitmap() {
        let mut wheel = srgb_wheel(20);
        wheel.set_thickness(5.0);
        wheel.set_device_pixel_ratio(2.0);
        let image = wheel.image();
        assert_eq!(image.dimensions(), (40, 40));
        // The ring is 10 physical pixels thick, the hole starts at radius 10.
        assert_eq!(image.get_pixel(35, 20).0[3], 255);
        assert_eq!(image.get_pixel(20, 20).0[3], 0);
    }

    #[test]
    fn degenerate_sizes_are_transparent() {
        let mut wheel = srgb_wheel(0);
        assert_eq!(wheel.image().dimensions(), (0, 0));

        let mut wheel = srgb_wheel(8);
        wheel.set_border(4.0);
        assert!(wheel.image().pixels().all(|p| p.0[3] == 0));
    }
}
