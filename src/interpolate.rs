use crate::{
    color::Component,
    math::{lerp, lerp_hue},
    models::Lch,
};

/// A CIE-LCh color with an alpha channel.
#[derive(Clone, Copy, Debug)]
pub struct Lcha {
    /// The color.
    pub lch: Lch,
    /// Opacity, 0 (transparent) to 1 (opaque).
    pub alpha: Component,
}

impl Lcha {
    /// Create a new color. Alpha is clamped into [0, 1], NaN becomes 0.
    pub fn new(l: Component, c: Component, h: Component, alpha: Component) -> Self {
        Self {
            lch: Lch::new(l, c, h),
            alpha: if alpha.is_nan() {
                0.0
            } else {
                alpha.clamp(0.0, 1.0)
            },
        }
    }

    /// Strict comparison of every stored field.
    pub fn has_same_coordinates(&self, other: &Lcha) -> bool {
        self.lch.has_same_coordinates(&other.lch) && self.alpha == other.alpha
    }
}

/// A linear gradient between two [`Lcha`] colors. The hue travels along the
/// shorter arc of the hue circle.
#[derive(Clone, Copy, Debug)]
pub struct LchaGradient {
    first: Lcha,
    second: Lcha,
}

impl LchaGradient {
    /// Create a gradient going from `first` to `second`. Both colors are
    /// normalized.
    pub fn new(first: Lcha, second: Lcha) -> Self {
        let normalize = |color: Lcha| Lcha {
            lch: color.lch.normalized(),
            alpha: color.alpha,
        };
        Self {
            first: normalize(first),
            second: normalize(second),
        }
    }

    /// The color at position `t`, where 0 is the first and 1 the second
    /// color. `t` is clamped into [0, 1].
    pub fn color_at(&self, t: Component) -> Lcha {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let (a, b) = (&self.first, &self.second);

        Lcha {
            lch: Lch::new(
                lerp(a.lch.l, b.lch.l, t),
                lerp(a.lch.c, b.lch.c, t),
                lerp_hue(a.lch.h, b.lch.h, t),
            ),
            alpha: lerp(a.alpha, b.alpha, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn basic() {
        let gradient = LchaGradient::new(
            Lcha::new(20.0, 10.0, 40.0, 0.0),
            Lcha::new(60.0, 30.0, 80.0, 1.0),
        );
        let mixed = gradient.color_at(0.5);
        assert_component_eq!(mixed.lch.l, 40.0);
        assert_component_eq!(mixed.lch.c, 20.0);
        assert_component_eq!(mixed.lch.h, 60.0);
        assert_component_eq!(mixed.alpha, 0.5);
    }

    #[test]
    fn hue_takes_the_shorter_arc() {
        let gradient = LchaGradient::new(
            Lcha::new(50.0, 20.0, 350.0, 1.0),
            Lcha::new(50.0, 20.0, 30.0, 1.0),
        );
        assert_component_eq!(gradient.color_at(0.25).lch.h, 0.0);
        assert_component_eq!(gradient.color_at(0.5).lch.h, 10.0);
    }

    #[test]
    fn ends_are_the_input_colors() {
        let first = Lcha::new(10.0, 5.0, 100.0, 0.25);
        let second = Lcha::new(90.0, 50.0, 200.0, 0.75);
        let gradient = LchaGradient::new(first, second);
        assert!(gradient.color_at(0.0).has_same_coordinates(&first));
        assert!(gradient.color_at(-3.0).has_same_coordinates(&first));
        assert!(gradient.color_at(7.0).has_same_coordinates(&second));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Lcha::new(50.0, 0.0, 0.0, 2.0).alpha, 1.0);
        assert_eq!(Lcha::new(50.0, 0.0, 0.0, -1.0).alpha, 0.0);
        assert_eq!(Lcha::new(50.0, 0.0, 0.0, Component::NAN).alpha, 0.0);
    }
}
