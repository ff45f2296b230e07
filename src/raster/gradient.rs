use std::sync::Arc;

use image::{Rgba, RgbaImage};

use super::{physical, sanitize_device_pixel_ratio, sanitize_length, Cache};
use crate::{
    boundary::GamutBoundary,
    color::Component,
    interpolate::{Lcha, LchaGradient},
};

const CHECKERBOARD_LIGHT: Component = 255.0;
const CHECKERBOARD_DARK: Component = 153.0;

/// A horizontal gradient between two colors, as shown by a slider. Every
/// color is mapped into the gamut by reducing chroma; transparent colors are
/// drawn over a checkerboard.
#[derive(Debug)]
pub struct GradientImage {
    boundary: Arc<GamutBoundary>,
    length: u32,
    thickness: Component,
    device_pixel_ratio: Component,
    first: Lcha,
    second: Lcha,
    cache: Cache,
}

impl GradientImage {
    /// Create an empty (0 x 0) gradient from opaque black to opaque white.
    pub fn new(boundary: Arc<GamutBoundary>) -> Self {
        Self {
            boundary,
            length: 0,
            thickness: 0.0,
            device_pixel_ratio: 1.0,
            first: Lcha::new(0.0, 0.0, 0.0, 1.0),
            second: Lcha::new(100.0, 0.0, 0.0, 1.0),
            cache: Cache::new("gradient"),
        }
    }

    /// Length of the gradient in logical pixels.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Set the length of the gradient in logical pixels.
    pub fn set_length(&mut self, length: u32) {
        self.cache.update(&mut self.length, length);
    }

    /// Thickness of the gradient in logical pixels.
    pub fn thickness(&self) -> Component {
        self.thickness
    }

    /// Set the thickness of the gradient in logical pixels. Negative values
    /// become 0.
    pub fn set_thickness(&mut self, thickness: Component) {
        self.cache.update(&mut self.thickness, sanitize_length(thickness));
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

    /// The color at the left end.
    pub fn first_color(&self) -> Lcha {
        self.first
    }

    /// Set the color at the left end.
    pub fn set_first_color(&mut self, color: Lcha) {
        if !self.first.has_same_coordinates(&color) {
            self.first = color;
            self.cache.invalidate();
        }
    }

    /// The color at the right end.
    pub fn second_color(&self) -> Lcha {
        self.second
    }

    /// Set the color at the right end.
    pub fn set_second_color(&mut self, color: Lcha) {
        if !self.second.has_same_coordinates(&color) {
            self.second = color;
            self.cache.invalidate();
        }
    }

    /// Returns true if the bitmap is cached and `image()` will not render.
    pub fn is_cached(&self) -> bool {
        self.cache.is_cached()
    }

    /// The rendered gradient, from the cache if possible.
    pub fn image(&mut self) -> &RgbaImage {
        let width = physical(self.length, self.device_pixel_ratio);
        let height = (self.thickness * self.device_pixel_ratio).round() as u32;
        let gradient = LchaGradient::new(self.first, self.second);
        let boundary = &self.boundary;

        self.cache.get_or_render(|| {
            let mut image = RgbaImage::new(width, height);
            if width == 0 || height == 0 {
                return image;
            }

            let cell = (height / 2).max(1);
            let columns: Vec<([Component; 3], Component)> = (0..width)
                .map(|x| {
                    let color = gradient.color_at((x as Component + 0.5) / width as Component);
                    let mapped = boundary.nearest_in_gamut(&color.lch);
                    let rgb = boundary.to_device_color_bounded(mapped);
                    ([rgb.red, rgb.green, rgb.blue], color.alpha)
                })
                .collect();

            for (x, y, pixel) in image.enumerate_pixels_mut() {
                let (rgb, alpha) = columns[x as usize];
                let backdrop = if (x / cell + y / cell) % 2 == 0 {
                    CHECKERBOARD_LIGHT
                } else {
                    CHECKERBOARD_DARK
                };
                let blend =
                    |v: Component| (v * 255.0 * alpha + backdrop * (1.0 - alpha)).round() as u8;
                *pixel = Rgba([blend(rgb[0]), blend(rgb[1]), blend(rgb[2]), 255]);
            }

            image
        })
    }
}
