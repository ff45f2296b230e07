//! Models for the rectangular (CIE-Lab) and polar (CIE-LCh) forms of the
//! CIE-Lab color space. Both always use a D50 reference white.

use crate::{
    color::{Component, Components},
    models::xyz::{ToXyz, WhitePoint, XyzD50, D50},
    polar::PolarPoint,
};

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

perceptual_color_macros::gen_model! {
    /// A color in the CIE-Lab color space. `a` and `b` are unbounded: values
    /// outside of any device gamut are still valid coordinates.
    pub struct Lab {
        /// The lightness component, 0 (black) to 100 (diffuse white).
        pub l: Component,
        /// The green-red opponent axis.
        pub a: Component,
        /// The blue-yellow opponent axis.
        pub b: Component,
    }
}

impl Lab {
    /// Convert to the polar form. `(a, b) == (0, 0)` gives a hue of 0.
    pub fn to_lch(&self) -> Lch {
        let polar = PolarPoint::from_cartesian(self.a, self.b);
        Lch::new(self.l, polar.radial(), polar.angle_degree())
    }
}

impl PartialEq for Lab {
    fn eq(&self, other: &Self) -> bool {
        self.l == other.l && self.a == other.a && self.b == other.b
    }
}

impl ToXyz<D50> for Lab {
    fn to_xyz(&self) -> XyzD50 {
        // To avoid accessing the values through self all the time.
        let (lightness, a, b) = (self.l, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        XyzD50::new(
            x * D50::WHITE_POINT.0,
            y * D50::WHITE_POINT.1,
            z * D50::WHITE_POINT.2,
        )
    }
}

impl From<XyzD50> for Lab {
    fn from(value: XyzD50) -> Self {
        let adapted = Components(
            value.x / D50::WHITE_POINT.0,
            value.y / D50::WHITE_POINT.1,
            value.z / D50::WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}

perceptual_color_macros::gen_model! {
    /// A color in the CIE-LCh color space, the polar form of [`Lab`].
    ///
    /// There is deliberately no `PartialEq`: at `c == 0` the hue is
    /// meaningless and different hues may denote the same color. Use
    /// [`Lch::has_same_coordinates`] for strict field comparison.
    pub struct Lch {
        /// The lightness component, identical to [`Lab::l`].
        pub l: Component,
        /// The chroma component, distance from the achromatic axis.
        pub c: Component,
        /// The hue component, in degrees.
        pub h: Component,
    }
}

impl Lch {
    /// Convert to the rectangular form.
    pub fn to_lab(&self) -> Lab {
        let (a, b) = PolarPoint::new(self.c, self.h).to_cartesian();
        Lab::new(self.l, a, b)
    }

    /// Return a copy with non-negative chroma and a hue in [0, 360). A
    /// negative chroma is flipped and the hue turned by 180°.
    pub fn normalized(&self) -> Lch {
        let polar = PolarPoint::new(self.c, self.h);
        Lch::new(self.l, polar.radial(), polar.angle_degree())
    }

    /// Strict comparison of the stored fields, without any normalization.
    pub fn has_same_coordinates(&self, other: &Lch) -> bool {
        self.l == other.l && self.c == other.c && self.h == other.h
    }
}

impl From<Lch> for Lab {
    fn from(value: Lch) -> Self {
        value.to_lab()
    }
}

impl From<&Lch> for Lab {
    fn from(value: &Lch) -> Self {
        value.to_lab()
    }
}

impl From<&Lab> for Lab {
    fn from(value: &Lab) -> Self {
        *value
    }
}
