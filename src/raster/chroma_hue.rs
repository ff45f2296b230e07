use std::sync::Arc;

use image::RgbaImage;

use super::{
    clip_to_ring, opaque, physical, sanitize_device_pixel_ratio, sanitize_length, Cache, OVERLAP,
};
use crate::{
    boundary::{GamutBoundary, HUMAN_MAXIMUM_CHROMA},
    color::Component,
    models::Lab,
};

/// A disc showing every in-gamut color of one lightness. The center is the
/// achromatic axis, the angle is the hue and the distance from the center is
/// the chroma. Pixels outside of the disc or out of gamut are transparent.
///
/// ```rust
/// use std::sync::Arc;
/// use perceptual_color::{ChromaHueImage, GamutBoundary};
///
/// let boundary = Arc::new(GamutBoundary::srgb().unwrap());
/// let mut disc = ChromaHueImage::new(boundary);
/// disc.set_size(64);
/// assert_eq!(disc.image().dimensions(), (64, 64));
/// ```
#[derive(Debug)]
pub struct ChromaHueImage {
    boundary: Arc<GamutBoundary>,
    size: u32,
    border: Component,
    device_pixel_ratio: Component,
    lightness: Component,
    chroma_range: Component,
    cache: Cache,
}

/// Maps physical pixels to Lab coordinates.
struct Mapping {
    border: Component,
    scale: Component,
    chroma_range: Component,
    lightness: Component,
}

impl Mapping {
    fn lab_at(&self, x: u32, y: u32) -> Lab {
        let a = (x as Component + 0.5 - self.border) * self.scale - self.chroma_range;
        let b = self.chroma_range - (y as Component + 0.5 - self.border) * self.scale;
        Lab::new(self.lightness, a, b)
    }
}

impl ChromaHueImage {
    /// Create an empty (0 x 0) image at lightness 50, with the maximum chroma
    /// of the gamut as chroma range.
    pub fn new(boundary: Arc<GamutBoundary>) -> Self {
        let chroma_range = boundary.maximum_chroma().clamp(0.0, HUMAN_MAXIMUM_CHROMA);
        Self {
            boundary,
            size: 0,
            border: 0.0,
            device_pixel_ratio: 1.0,
            lightness: 50.0,
            chroma_range,
            cache: Cache::new("chroma-hue"),
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

    /// Transparent margin around the disc, in logical pixels.
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

    /// The lightness of every color on the disc.
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

    /// The chroma at the edge of the disc.
    pub fn chroma_range(&self) -> Component {
        self.chroma_range
    }

    /// Set the chroma at the edge of the disc, clamped into
    /// [0, [`HUMAN_MAXIMUM_CHROMA`]].
    pub fn set_chroma_range(&mut self, chroma_range: Component) {
        let chroma_range = if chroma_range.is_nan() {
            0.0
        } else {
            chroma_range.clamp(0.0, HUMAN_MAXIMUM_CHROMA)
        };
        self.cache.update(&mut self.chroma_range, chroma_range);
    }

    /// Returns true if the bitmap is cached and `image()` will not render.
    pub fn is_cached(&self) -> bool {
        self.cache.is_cached()
    }

    /// The Lab coordinate sampled for the physical pixel `(x, y)`. `None` if
    /// the disc has no area.
    pub fn lab_at(&self, x: u32, y: u32) -> Option<Lab> {
        self.mapping().map(|mapping| mapping.lab_at(x, y))
    }

    fn physical_size(&self) -> u32 {
        physical(self.size, self.device_pixel_ratio)
    }

    fn mapping(&self) -> Option<Mapping> {
        let border = self.border * self.device_pixel_ratio;
        let diameter = self.physical_size() as Component - 2.0 * border;
        if diameter < 1.0 {
            return None;
        }

        Some(Mapping {
            border,
            scale: 2.0 * self.chroma_range / diameter,
            chroma_range: self.chroma_range,
            lightness: self.lightness,
        })
    }

    /// The rendered disc, from the cache if possible.
    pub fn image(&mut self) -> &RgbaImage {
        let size = self.physical_size();
        let mapping = self.mapping();
        let boundary = &self.boundary;
        let border = self.border * self.device_pixel_ratio;

        self.cache.get_or_render(|| {
            let mut image = RgbaImage::new(size, size);
            let Some(mapping) = mapping else {
                return image;
            };

            let center = size as Component / 2.0;
            let radius = center - border;

            for (x, y, pixel) in image.enumerate_pixels_mut() {
                let dx = x as Component + 0.5 - center;
                let dy = y as Component + 0.5 - center;
                if dx.hypot(dy) > radius + OVERLAP {
                    continue;
                }

                if let Some(rgb) = boundary.to_device_color_unbounded(mapping.lab_at(x, y)) {
                    *pixel = opaque(&rgb);
                }
            }

            clip_to_ring(&mut image, center, radius, 0.0);
            image
        })
    }
}
