//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
};

/// A reference white of the CIE-XYZ color space.
pub trait WhitePoint {
    /// The XYZ coordinates of the reference white, normalized to `Y = 1`.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D50 white point reference.
#[derive(Clone, Copy, Debug)]
pub struct D50;

impl WhitePoint for D50 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9642956764295677, 1.0, 0.8251046025104602);
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Copy, Debug)]
pub struct D65;

impl WhitePoint for D65 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

/// Chromatic adaptation from one white point to another (Bradford).
pub trait TransferWhitePoint<To: WhitePoint>: WhitePoint {
    /// Adapt the given XYZ components to the `To` white point.
    fn transfer(from: Components) -> Components;
}

impl<W: WhitePoint> TransferWhitePoint<W> for W {
    fn transfer(from: Components) -> Components {
        from
    }
}

impl TransferWhitePoint<D65> for D50 {
    fn transfer(from: Components) -> Components {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const MAT: Transform = transform_3x3(
             0.9554734527042182,   -0.028369706963208136,  0.012314001688319899,
            -0.023098536874261423,  1.0099954580058226,   -0.020507696433477912,
             0.0632593086610217,    0.021041398966943008,  1.3303659366080753,
        );

        transform(&MAT, from)
    }
}

impl TransferWhitePoint<D50> for D65 {
    fn transfer(from: Components) -> Components {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const MAT: Transform = transform_3x3(
             1.0479298208405488,    0.029627815688159344, -0.009243058152591178,
             0.022946793341019088,  0.990434484573249,     0.015055144896577895,
            -0.05019222954313557,  -0.01707382502938514,   0.7518742899580008,
        );

        transform(&MAT, from)
    }
}

perceptual_color_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl<W: WhitePoint> Xyz<W> {
    /// Adapt this color to another white point.
    pub fn transfer<To: WhitePoint>(&self) -> Xyz<To>
    where
        W: TransferWhitePoint<To>,
    {
        <W as TransferWhitePoint<To>>::transfer(self.to_components()).into()
    }
}

/// Model for a color in the CIE-XYZ color space with a D50 white point.
pub type XyzD50 = Xyz<D50>;

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_points_adapt_onto_each_other() {
        let d50 = XyzD50::from(D50::WHITE_POINT);
        let d65 = d50.transfer::<D65>();
        assert_component_eq!(d65.x, D65::WHITE_POINT.0);
        assert_component_eq!(d65.y, D65::WHITE_POINT.1);
        assert_component_eq!(d65.z, D65::WHITE_POINT.2);

        let back = d65.transfer::<D50>();
        assert_component_eq!(back.x, D50::WHITE_POINT.0);
        assert_component_eq!(back.y, D50::WHITE_POINT.1);
        assert_component_eq!(back.z, D50::WHITE_POINT.2);
    }

    #[test]
    fn transfer_to_same_white_point_is_identity() {
        let xyz = XyzD65::new(0.1, 0.2, 0.3);
        let same = xyz.transfer::<D65>();
        assert_eq!(same.to_components(), xyz.to_components());
    }
}
