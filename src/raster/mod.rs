//! Raster images of slices through a gamut.
//!
//! Every image keeps its parameters and a cached bitmap. Setters only drop
//! the cache when the value actually changes; the bitmap is rendered again on
//! the next call to `image()`.

use image::{Rgba, RgbaImage};

use crate::{color::Component, models::Rgb};

mod chroma_hue;
mod chroma_lightness;
mod color_wheel;
mod gradient;

pub use chroma_hue::ChromaHueImage;
pub use chroma_lightness::ChromaLightnessImage;
pub use color_wheel::ColorWheelImage;
pub use gradient::GradientImage;

/// Extra distance in pixels, added to the circle tests of the circular
/// images, so pixels on the anti-aliased edge are painted before they are
/// clipped. Covers the diagonal distance between pixel centers.
pub const OVERLAP: Component = 2.0;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// The cached bitmap of an image.
#[derive(Debug)]
struct Cache {
    variant: &'static str,
    image: Option<RgbaImage>,
}

impl Cache {
    fn new(variant: &'static str) -> Self {
        Self {
            variant,
            image: None,
        }
    }

    fn is_cached(&self) -> bool {
        self.image.is_some()
    }

    fn invalidate(&mut self) {
        if self.image.take().is_some() {
            tracing::trace!(variant = self.variant, "image cache invalidated");
        }
    }

    /// Store `value` in `field`, dropping the cached bitmap if it changed.
    fn update<T: PartialEq>(&mut self, field: &mut T, value: T) {
        if *field != value {
            *field = value;
            self.invalidate();
        }
    }

    fn get_or_render(&mut self, render: impl FnOnce() -> RgbaImage) -> &RgbaImage {
        let variant = self.variant;
        self.image.get_or_insert_with(|| {
            let image = render();
            tracing::trace!(
                variant,
                width = image.width(),
                height = image.height(),
                "image rendered"
            );
            image
        })
    }
}

/// Lengths in logical pixels; anything negative or not finite becomes 0.
fn sanitize_length(value: Component) -> Component {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Device pixel ratios below 1 (or not finite) become 1.
fn sanitize_device_pixel_ratio(value: Component) -> Component {
    if value.is_finite() && value > 1.0 {
        value
    } else {
        1.0
    }
}

/// Size of the backing bitmap for a logical length.
fn physical(length: u32, device_pixel_ratio: Component) -> u32 {
    (length as Component * device_pixel_ratio).round() as u32
}

fn opaque(rgb: &Rgb) -> Rgba<u8> {
    let [red, green, blue] = rgb.to_bytes();
    Rgba([red, green, blue, 255])
}

/// Fraction of a pixel covered by a shape, given the signed distance of the
/// pixel center to the shape's edge (positive inside).
fn coverage(inside: Component) -> Component {
    (inside + 0.5).clamp(0.0, 1.0)
}

/// Anti-aliased clip to a disc, or to an annulus when `inner_radius` is
/// positive. Alpha of every pixel is scaled by its coverage; pixels outside
/// become fully transparent.
fn clip_to_ring(
    image: &mut RgbaImage,
    center: Component,
    outer_radius: Component,
    inner_radius: Component,
) {
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = x as Component + 0.5 - center;
        let dy = y as Component + 0.5 - center;
        let distance = dx.hypot(dy);

        let mut covered = coverage(outer_radius - distance);
        if inner_radius > 0.0 {
            covered *= coverage(distance - inner_radius);
        }

        if covered <= 0.0 {
            *pixel = TRANSPARENT;
        } else if covered < 1.0 {
            let alpha = (pixel.0[3] as Component * covered).round() as u8;
            if alpha == 0 {
                *pixel = TRANSPARENT;
            } else {
                pixel.0[3] = alpha;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_are_sanitized() {
        assert_eq!(sanitize_length(-3.0), 0.0);
        assert_eq!(sanitize_length(Component::NAN), 0.0);
        assert_eq!(sanitize_length(2.5), 2.5);
        assert_eq!(sanitize_device_pixel_ratio(0.5), 1.0);
        assert_eq!(sanitize_device_pixel_ratio(Component::NAN), 1.0);
        assert_eq!(sanitize_device_pixel_ratio(2.0), 2.0);
    }

    #[test]
    fn physical_size_scales_with_ratio() {
        assert_eq!(physical(100, 1.0), 100);
        assert_eq!(physical(100, 1.5), 150);
        assert_eq!(physical(0, 3.0), 0);
    }

    #[test]
    fn clip_keeps_the_disc() {
        let mut image = RgbaImage::from_pixel(20, 20, Rgba([10, 20, 30, 255]));
        clip_to_ring(&mut image, 10.0, 10.0, 0.0);
        assert_eq!(image.get_pixel(0, 0), &TRANSPARENT);
        assert_eq!(image.get_pixel(10, 10), &Rgba([10, 20, 30, 255]));
        let edge = image.get_pixel(10, 0).0[3];
        assert!(edge > 0);
    }

    #[test]
    fn clip_removes_the_hole_of_a_ring() {
        let mut image = RgbaImage::from_pixel(40, 40, Rgba([1, 2, 3, 255]));
        clip_to_ring(&mut image, 20.0, 20.0, 10.0);
        assert_eq!(image.get_pixel(20, 20), &TRANSPARENT);
        assert_eq!(image.get_pixel(20, 4).0[3], 255);
    }

    #[test]
    fn cache_update_only_invalidates_on_change() {
        let mut cache = Cache::new("test");
        let mut field = 1;
        cache.get_or_render(|| RgbaImage::new(1, 1));
        cache.update(&mut field, 1);
        assert!(cache.is_cached());
        cache.update(&mut field, 2);
        assert!(!cache.is_cached());
        assert_eq!(field, 2);
    }
}
