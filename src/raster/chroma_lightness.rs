use std::sync::Arc;

use image::{Rgba, RgbaImage};

use super::{opaque, physical, sanitize_device_pixel_ratio, sanitize_length, Cache};
use crate::{boundary::GamutBoundary, color::Component, math::normalize_hue, models::Lch};

/// A vertical slice through the gamut at one hue. Lightness runs from 100 at
/// the top to 0 at the bottom, chroma from 0 at the left edge to the right,
/// on the same scale as lightness.
///
/// Inside the plotted area, out of gamut colors show the background color;
/// the border around it is transparent.
#[derive(Debug)]
pub struct ChromaLightnessImage {
    boundary: Arc<GamutBoundary>,
    width: u32,
    height: u32,
    border: Component,
    device_pixel_ratio: Component,
    hue: Component,
    background: Rgba<u8>,
    cache: Cache,
}

impl ChromaLightnessImage {
    /// Create an empty (0 x 0) image at hue 0 with a neutral gray
    /// background.
    pub fn new(boundary: Arc<GamutBoundary>) -> Self {
        Self {
            boundary,
            width: 0,
            height: 0,
            border: 0.0,
            device_pixel_ratio: 1.0,
            hue: 0.0,
            background: Rgba([128, 128, 128, 255]),
            cache: Cache::new("chroma-lightness"),
        }
    }

    /// Width and height in logical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Set width and height in logical pixels.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.cache.update(&mut self.width, width);
        self.cache.update(&mut self.height, height);
    }

    /// Transparent margin around the plotted area, in logical pixels.
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

    /// The hue of every color in the slice.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// Set the hue in degrees. It is normalized into [0, 360).
    pub fn set_hue(&mut self, hue: Component) {
        let hue = if hue.is_finite() {
            normalize_hue(hue)
        } else {
            0.0
        };
        self.cache.update(&mut self.hue, hue);
    }

    /// The color of in-area pixels that are out of gamut.
    pub fn background(&self) -> Rgba<u8> {
        self.background
    }

    /// Set the color of in-area pixels that are out of gamut.
    pub fn set_background(&mut self, background: Rgba<u8>) {
        self.cache.update(&mut self.background, background);
    }

    /// Returns true if the bitmap is cached and `image()` will not render.
    pub fn is_cached(&self) -> bool {
        self.cache.is_cached()
    }

    /// The LCh coordinate sampled for the physical pixel `(x, y)`. `None` if
    /// the plotted area has no area.
    pub fn lch_at(&self, x: u32, y: u32) -> Option<Lch> {
        self.mapping().map(|mapping| mapping.lch_at(x, y))
    }

    fn physical_size(&self) -> (u32, u32) {
        (
            physical(self.width, self.device_pixel_ratio),
            physical(self.height, self.device_pixel_ratio),
        )
    }

    fn mapping(&self) -> Option<Mapping> {
        let (width, height) = self.physical_size();
        let border = self.border * self.device_pixel_ratio;
        let plot_width = width as Component - 2.0 * border;
        let plot_height = height as Component - 2.0 * border;
        if plot_width < 1.0 || plot_height < 1.0 {
            return None;
        }

        Some(Mapping {
            border,
            right: width as Component - border,
            bottom: height as Component - border,
            scale: 100.0 / plot_height,
            hue: self.hue,
        })
    }

    /// The rendered slice, from the cache if possible.
    pub fn image(&mut self) -> &RgbaImage {
        let (width, height) = self.physical_size();
        let mapping = self.mapping();
        let boundary = &self.boundary;
        let background = self.background;

        self.cache.get_or_render(|| {
            let mut image = RgbaImage::new(width, height);
            let Some(mapping) = mapping else {
                return image;
            };

            for (x, y, pixel) in image.enumerate_pixels_mut() {
                if !mapping.is_plotted(x, y) {
                    continue;
                }

                *pixel = boundary
                    .to_device_color_unbounded(mapping.lch_at(x, y))
                    .map_or(background, |rgb| opaque(&rgb));
            }

            image
        })
    }
}

/// Maps physical pixels to LCh coordinates.
struct Mapping {
    border: Component,
    right: Component,
    bottom: Component,
    scale: Component,
    hue: Component,
}

impl Mapping {
    fn lch_at(&self, x: u32, y: u32) -> Lch {
        let l = 100.0 - (y as Component + 0.5 - self.border) * self.scale;
        let c = (x as Component + 0.5 - self.border) * self.scale;
        Lch::new(l, c, self.hue)
    }

    /// Returns true if the pixel center lies inside of the border.
    fn is_plotted(&self, x: u32, y: u32) -> bool {
        let (x, y) = (x as Component + 0.5, y as Component + 0.5);
        x >= self.border && x <= self.right && y >= self.border && y <= self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn srgb_slice(width: u32, height: u32) -> ChromaLightnessImage {
        let mut slice = ChromaLightnessImage::new(Arc::new(GamutBoundary::srgb().unwrap()));
        slice.set_size(width, height);
        slice
    }

    #[test]
    fn axes() {
        let slice = srgb_slice(100, 100);
        let top_left = slice.lch_at(0, 0).unwrap();
        assert!(top_left.l > 99.0);
        assert!(top_left.c < 1.0);
        let bottom_right = slice.lch_at(99, 99).unwrap();
        assert!(bottom_right.l < 1.0);
        assert!(bottom_right.c > 99.0);
    }

    #[test]
    fn gray_axis_is_painted_and_far_chroma_is_background() {
        let mut slice = srgb_slice(100, 100);
        let image = slice.image();
        let gray = image.get_pixel(0, 50);
        assert_eq!(gray.0[3], 255);
        assert!((gray.0[0] as i32 - gray.0[1] as i32).abs() <= 2);
        assert_eq!(image.get_pixel(99, 50), &Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn border_is_transparent() {
        let mut slice = srgb_slice(40, 30);
        slice.set_border(5.0);
        let image = slice.image();
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        assert_eq!(image.get_pixel(39, 29).0[3], 0);
        assert_eq!(image.get_pixel(4, 15).0[3], 0);
        assert_eq!(image.get_pixel(20, 15).0[3], 255);
    }

    #[test]
    fn hue_is_normalized_and_cache_is_kept() {
        let mut slice = srgb_slice(10, 10);
        slice.set_hue(370.0);
        assert_eq!(slice.hue(), 10.0);
        slice.image();
        slice.set_hue(10.0);
        slice.set_size(10, 10);
        slice.set_background(Rgba([128, 128, 128, 255]));
        assert!(slice.is_cached());
        slice.set_background(Rgba([0, 0, 0, 255]));
        assert!(!slice.is_cached());
    }

    #[test]
    fn device_pixel_ratio_scales_the_bitmap() {
        let mut slice = srgb_slice(20, 10);
        slice.set_device_pixel_ratio(2.0);
        assert_eq!(slice.image().dimensions(), (40, 20));

        slice.set_device_pixel_ratio(1.5);
        assert_eq!(slice.image().dimensions(), (30, 15));
    }

    #[test]
    fn degenerate_sizes_do_not_divide_by_zero() {
        let mut slice = srgb_slice(10, 0);
        assert_eq!(slice.image().dimensions(), (10, 0));
        assert!(slice.lch_at(0, 0).is_none());

        let mut slice = srgb_slice(10, 10);
        slice.set_border(6.0);
        assert!(slice.image().pixels().all(|p| p.0[3] == 0));
    }
}
