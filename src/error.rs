//! Errors of the gamut engine.
//!
//! Converting a single color that has no representation in a gamut is not an
//! error: those conversions return `None`. Errors are reserved for setting up
//! the engine itself.

use thiserror::Error;

use crate::color::Component;

/// Errors returned while setting up the gamut engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The profile has no usable range of in-gamut grays: the darkest
    /// in-gamut gray is not darker than the lightest one. Such a profile is
    /// broken and can not be used.
    #[error("degenerate gamut: blackpoint L*={blackpoint} is not below whitepoint L*={whitepoint}")]
    DegenerateGamut {
        /// The lowest lightness found on the achromatic axis.
        blackpoint: Component,
        /// The highest lightness found on the achromatic axis.
        whitepoint: Component,
    },

    /// No built-in profile is known under the given name.
    #[error("unknown color profile: {0}")]
    UnknownProfile(String),
}

/// Result type of the gamut engine.
pub type Result<T> = std::result::Result<T, Error>;
