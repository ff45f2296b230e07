//! Models are structs that represent a color in a specified color space or
//! form. Conversions are only implemented where they are meaningful, so the
//! conversion paths of the gamut engine stay explicit.

mod hsv;
mod lab;
mod rgb;
mod xyz;

pub use hsv::Hsv;
pub use lab::{Lab, Lch};
pub use rgb::{Clipped, Rgb, TransferCurve};
pub use xyz::{ToXyz, TransferWhitePoint, WhitePoint, Xyz, XyzD50, XyzD65, D50, D65};
