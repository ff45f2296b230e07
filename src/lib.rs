//! perceptual-color maps colors between the perceptual CIE-Lab/LCh color
//! space and the gamut of RGB devices.
//!
//! The central type is [`GamutBoundary`]: it wraps a device profile, knows
//! which perceptual colors the device can display and finds the nearest
//! displayable color for those it can't by reducing chroma. On top of it sit
//! raster images of gamut slices ([`ChromaHueImage`],
//! [`ChromaLightnessImage`], [`ColorWheelImage`], [`GradientImage`]) and
//! [`MultiColor`], a color stored in every representation at once.
//!
//! ```rust
//! use perceptual_color::{GamutBoundary, Lch};
//!
//! let boundary = GamutBoundary::srgb().unwrap();
//! let vivid = Lch::new(50.0, 500.0, 0.0);
//! assert!(!boundary.is_in_gamut(vivid));
//!
//! let displayable = boundary.nearest_in_gamut(&vivid);
//! assert!(boundary.is_in_gamut(displayable));
//! assert!(displayable.c < 100.0);
//! ```

#![deny(missing_docs)]

mod boundary;
mod color;
mod error;
mod gamut;
mod interpolate;
mod math;
mod models;
mod multicolor;
mod polar;
mod profile;
mod raster;

#[cfg(test)]
mod test;

pub use boundary::{GamutBoundary, GAMUT_PRECISION, HUMAN_MAXIMUM_CHROMA};
pub use color::{Component, Components};
pub use error::{Error, Result};
pub use interpolate::{Lcha, LchaGradient};
pub use models::{
    Clipped, Hsv, Lab, Lch, Rgb, ToXyz, TransferCurve, TransferWhitePoint, WhitePoint, Xyz,
    XyzD50, XyzD65, D50, D65,
};
pub use multicolor::{MultiColor, OutOfGamutBehaviour};
pub use polar::PolarPoint;
pub use profile::{MatrixProfile, ProfileTransform};
pub use raster::{ChromaHueImage, ChromaLightnessImage, ColorWheelImage, GradientImage, OVERLAP};
