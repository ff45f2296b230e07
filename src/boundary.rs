//! The gamut boundary of an RGB device: the single place that decides
//! whether a perceptual color can be displayed, and that converts between
//! perceptual and device colors.

use std::fmt;

use crate::{
    color::Component,
    error::{Error, Result},
    models::{Lab, Lch, Rgb},
    profile::{MatrixProfile, ProfileTransform},
};

/// Step width of the achromatic lightness scan and termination width of the
/// chroma bisection.
pub const GAMUT_PRECISION: Component = 0.001;

/// A practical upper limit of chroma for colors humans can perceive.
pub const HUMAN_MAXIMUM_CHROMA: Component = 200.0;

/// Number of samples per edge of the RGB cube used to measure the maximum
/// chroma of a profile.
const CHROMA_SAMPLES_PER_EDGE: u16 = 17;

/// Wraps a [`ProfileTransform`] and caches the lightness range of its
/// achromatic axis.
///
/// Construction is expensive compared to any single query. Build one per
/// profile and share it, for example through an `Arc`.
///
/// ```rust
/// use perceptual_color::{GamutBoundary, Lch};
/// let boundary = GamutBoundary::srgb().unwrap();
/// assert!(!boundary.is_in_gamut(Lch::new(50.0, 500.0, 0.0)));
/// assert!(boundary.is_in_gamut(Lch::new(50.0, 10.0, 0.0)));
/// ```
pub struct GamutBoundary {
    profile: Box<dyn ProfileTransform>,
    blackpoint_l: Component,
    whitepoint_l: Component,
    maximum_chroma: Component,
}

impl GamutBoundary {
    /// Create the boundary of the given profile.
    ///
    /// Fails with [`Error::DegenerateGamut`] if the profile has no range of
    /// in-gamut grays. Nothing else in the engine works for such a profile.
    pub fn new(profile: impl ProfileTransform + 'static) -> Result<Self> {
        Self::from_boxed(Box::new(profile))
    }

    /// Create the boundary of the built-in sRGB profile.
    pub fn srgb() -> Result<Self> {
        Self::new(MatrixProfile::srgb())
    }

    /// Create the boundary of an already boxed profile.
    pub fn from_boxed(profile: Box<dyn ProfileTransform>) -> Result<Self> {
        let steps = (100.0 / GAMUT_PRECISION).round() as u32;
        let lightness_at = |step: u32| step as Component * 100.0 / steps as Component;
        let gray_in_gamut = |step: &u32| {
            profile
                .lab_to_rgb(&Lab::new(lightness_at(*step), 0.0, 0.0))
                .is_some()
        };

        let blackpoint_l = (0..=steps)
            .find(gray_in_gamut)
            .map_or(100.0, lightness_at);
        let whitepoint_l = (0..=steps)
            .rev()
            .find(gray_in_gamut)
            .map_or(0.0, lightness_at);

        if whitepoint_l <= blackpoint_l {
            return Err(Error::DegenerateGamut {
                blackpoint: blackpoint_l,
                whitepoint: whitepoint_l,
            });
        }

        let maximum_chroma = measure_maximum_chroma(profile.as_ref());

        tracing::debug!(
            profile = profile.name(),
            blackpoint_l,
            whitepoint_l,
            maximum_chroma,
            "gamut boundary ready"
        );

        Ok(Self {
            profile,
            blackpoint_l,
            whitepoint_l,
            maximum_chroma,
        })
    }

    /// The wrapped device profile.
    pub fn profile(&self) -> &dyn ProfileTransform {
        self.profile.as_ref()
    }

    /// The lowest lightness of an in-gamut gray.
    pub fn blackpoint_l(&self) -> Component {
        self.blackpoint_l
    }

    /// The highest lightness of an in-gamut gray.
    pub fn whitepoint_l(&self) -> Component {
        self.whitepoint_l
    }

    /// The largest chroma any color of this profile has.
    pub fn maximum_chroma(&self) -> Component {
        self.maximum_chroma
    }

    /// Returns true if the color has a representation on the device, that
    /// is every RGB channel is within [0, 1].
    pub fn is_in_gamut(&self, color: impl Into<Lab>) -> bool {
        self.profile.lab_to_rgb(&color.into()).is_some()
    }

    /// Convert to a device color. Out of gamut colors are clamped channel
    /// by channel, which is fast but does not give the perceptually closest
    /// color. Use it for display only.
    pub fn to_device_color_bounded(&self, color: impl Into<Lab>) -> Rgb {
        self.profile.lab_to_rgb_clamped(&color.into())
    }

    /// Convert to a device color, `None` if the color is out of gamut.
    pub fn to_device_color_unbounded(&self, color: impl Into<Lab>) -> Option<Rgb> {
        self.profile.lab_to_rgb(&color.into())
    }

    /// Convert a device color to CIE-Lab. The channels are clamped into
    /// [0, 1] first.
    pub fn to_lab(&self, rgb: &Rgb) -> Lab {
        self.profile.rgb_to_lab(&rgb.clip())
    }

    /// Convert a device color to CIE-LCh. The channels are clamped into
    /// [0, 1] first.
    pub fn to_lch(&self, rgb: &Rgb) -> Lch {
        self.to_lab(rgb).to_lch()
    }
}

impl fmt::Debug for GamutBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamutBoundary")
            .field("profile", &self.profile.name())
            .field("blackpoint_l", &self.blackpoint_l)
            .field("whitepoint_l", &self.whitepoint_l)
            .field("maximum_chroma", &self.maximum_chroma)
            .finish()
    }
}

/// Sample every face of the RGB cube and return the largest chroma found.
fn measure_maximum_chroma(profile: &dyn ProfileTransform) -> Component {
    let last = (CHROMA_SAMPLES_PER_EDGE - 1) as Component;
    let mut maximum: Component = 0.0;

    for fixed in [0.0, 1.0] {
        for i in 0..CHROMA_SAMPLES_PER_EDGE {
            for j in 0..CHROMA_SAMPLES_PER_EDGE {
                let u = i as Component / last;
                let v = j as Component / last;
                for rgb in [
                    Rgb::new(fixed, u, v),
                    Rgb::new(u, fixed, v),
                    Rgb::new(u, v, fixed),
                ] {
                    let chroma = profile.rgb_to_lab(&rgb).to_lch().c;
                    if chroma.is_finite() {
                        maximum = maximum.max(chroma);
                    }
                }
            }
        }
    }

    maximum
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A profile whose gamut contains nothing at all.
    struct EmptyProfile;

    impl ProfileTransform for EmptyProfile {
        fn name(&self) -> &str {
            "empty"
        }

        fn lab_to_rgb(&self, _lab: &Lab) -> Option<Rgb> {
            None
        }

        fn lab_to_rgb_clamped(&self, _lab: &Lab) -> Rgb {
            Rgb::new(0.0, 0.0, 0.0)
        }

        fn rgb_to_lab(&self, _rgb: &Rgb) -> Lab {
            Lab::new(0.0, 0.0, 0.0)
        }
    }

    /// A profile whose only in-gamut gray is L = 50.
    struct SingleGrayProfile;

    impl ProfileTransform for SingleGrayProfile {
        fn name(&self) -> &str {
            "single gray"
        }

        fn lab_to_rgb(&self, lab: &Lab) -> Option<Rgb> {
            ((lab.l - 50.0).abs() < GAMUT_PRECISION / 2.0).then(|| Rgb::new(0.5, 0.5, 0.5))
        }

        fn lab_to_rgb_clamped(&self, _lab: &Lab) -> Rgb {
            Rgb::new(0.5, 0.5, 0.5)
        }

        fn rgb_to_lab(&self, _rgb: &Rgb) -> Lab {
            Lab::new(50.0, 0.0, 0.0)
        }
    }

    #[test]
    fn srgb_achromatic_range() {
        let boundary = GamutBoundary::srgb().unwrap();
        assert!(boundary.blackpoint_l() < 0.1);
        assert!(boundary.whitepoint_l() > 99.9);
        assert!(boundary.whitepoint_l() <= 100.0);
        assert!(boundary.is_in_gamut(Lab::new(boundary.blackpoint_l(), 0.0, 0.0)));
        assert!(boundary.is_in_gamut(Lab::new(boundary.whitepoint_l(), 0.0, 0.0)));
    }

    #[test]
    fn srgb_maximum_chroma_is_blue() {
        let boundary = GamutBoundary::srgb().unwrap();
        let blue = boundary.to_lch(&Rgb::new(0.0, 0.0, 1.0)).c;
        approx::assert_abs_diff_eq!(boundary.maximum_chroma(), blue, epsilon = 1.0e-3);
        assert!(boundary.maximum_chroma() > 120.0);
        assert!(boundary.maximum_chroma() < HUMAN_MAXIMUM_CHROMA);
    }

    #[test]
    fn empty_gamut_is_degenerate() {
        let err = GamutBoundary::new(EmptyProfile).unwrap_err();
        assert!(matches!(err, Error::DegenerateGamut { .. }));
    }

    #[test]
    fn single_gray_is_degenerate() {
        match GamutBoundary::new(SingleGrayProfile) {
            Err(Error::DegenerateGamut {
                blackpoint,
                whitepoint,
            }) => {
                approx::assert_abs_diff_eq!(blackpoint, 50.0, epsilon = 1.0e-3);
                approx::assert_abs_diff_eq!(whitepoint, 50.0, epsilon = 1.0e-3);
            }
            other => panic!("expected a degenerate gamut, got {other:?}"),
        }
    }

    #[test]
    fn strict_and_bounded_conversion() {
        let boundary = GamutBoundary::srgb().unwrap();
        let out = Lch::new(50.0, 500.0, 0.0);
        assert!(boundary.to_device_color_unbounded(out).is_none());
        assert!(boundary.to_device_color_bounded(out).is_in_range());

        let inside = Lab::new(50.0, 10.0, -10.0);
        let rgb = boundary.to_device_color_unbounded(inside).unwrap();
        assert_eq!(rgb, boundary.to_device_color_bounded(inside));
    }

    #[test]
    fn lab_and_lch_agree() {
        let boundary = GamutBoundary::srgb().unwrap();
        for &(l, c, h) in &[(50.0, 40.0, 30.0), (70.0, 90.0, 140.0), (20.0, 60.0, 300.0)] {
            let lch = Lch::new(l, c, h);
            assert_eq!(boundary.is_in_gamut(lch), boundary.is_in_gamut(lch.to_lab()));
        }
    }
}
