//! Gamut mapping by sacrificing chroma.
//!
//! An out of gamut color is moved towards the achromatic axis along a line
//! of constant hue and lightness until it fits into the gamut. Hue is always
//! kept; lightness is kept unless even the gray of that lightness is out of
//! gamut.

use crate::{
    boundary::{GamutBoundary, GAMUT_PRECISION},
    color::Component,
    models::{Lab, Lch},
};

impl GamutBoundary {
    /// Return the nearest in-gamut color that has the same hue and, where
    /// possible, the same lightness. Uses [`GAMUT_PRECISION`].
    ///
    /// ```rust
    /// use perceptual_color::{GamutBoundary, Lch};
    /// let boundary = GamutBoundary::srgb().unwrap();
    /// let mapped = boundary.nearest_in_gamut(&Lch::new(50.0, 500.0, 0.0));
    /// assert!(boundary.is_in_gamut(mapped));
    /// assert_eq!(mapped.l, 50.0);
    /// assert_eq!(mapped.h, 0.0);
    /// ```
    pub fn nearest_in_gamut(&self, lch: &Lch) -> Lch {
        self.nearest_in_gamut_with_precision(lch, GAMUT_PRECISION)
    }

    /// Like [`GamutBoundary::nearest_in_gamut`], with the width at which the
    /// chroma bisection stops. A precision that is not a positive finite
    /// number falls back to [`GAMUT_PRECISION`].
    pub fn nearest_in_gamut_with_precision(&self, lch: &Lch, precision: Component) -> Lch {
        let precision = if precision.is_finite() && precision > 0.0 {
            precision
        } else {
            GAMUT_PRECISION
        };

        let finite_or_zero = |v: Component| if v.is_finite() { v } else { 0.0 };
        let origin = Lch::new(lch.l, finite_or_zero(lch.c), finite_or_zero(lch.h)).normalized();

        if !origin.l.is_finite() {
            let l = if origin.l == Component::INFINITY {
                self.whitepoint_l()
            } else {
                self.blackpoint_l()
            };
            return Lch::new(l, 0.0, origin.h);
        }

        // Local optimization: nothing to search for if the color is already
        // in gamut.
        if self.is_in_gamut(origin) {
            return origin;
        }

        let gray = Lch::new(origin.l, 0.0, origin.h);
        if !self.is_in_gamut(gray) {
            // Lightness is outside of the achromatic range; only the nearest
            // end of the gray axis can be displayed.
            let to_black = (origin.l - self.blackpoint_l()).abs();
            let to_white = (origin.l - self.whitepoint_l()).abs();
            let l = if to_black <= to_white {
                self.blackpoint_l()
            } else {
                self.whitepoint_l()
            };
            return Lch::new(l, 0.0, origin.h);
        }

        // `lower` is always in gamut, `upper` always out of gamut.
        let mut lower: Component = 0.0;
        let mut upper = origin.c;
        let mut candidate = gray;

        while upper - lower > precision {
            let chroma = (lower + upper) / 2.0;
            // Adjacent floats: the interval can not shrink any further.
            if chroma <= lower || chroma >= upper {
                break;
            }
            candidate.c = chroma;
            if self.is_in_gamut(candidate) {
                lower = chroma;
            } else {
                upper = chroma;
            }
        }

        Lch::new(origin.l, lower, origin.h)
    }

    /// [`GamutBoundary::nearest_in_gamut`] for colors given in CIE-Lab.
    pub fn nearest_in_gamut_lab(&self, lab: &Lab) -> Lab {
        self.nearest_in_gamut(&lab.to_lch()).to_lab()
    }
}
