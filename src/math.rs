//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from a 3x3 matrix. The values are laid out the way
/// euclid expects them: every row of arguments is a column of the
/// conventional matrix.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Vector { x, y, z, .. } =
        transform.transform_vector3d(Vector::new(components.0, components.1, components.2));
    Components(x, y, z)
}

/// Wrap an angle in degrees into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid may round tiny negative values up to exactly 360.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Interpolate between two hues in degrees, always travelling along the
/// shorter arc of the circle. The result is normalized.
pub fn lerp_hue(a: Component, b: Component, t: Component) -> Component {
    let a = normalize_hue(a);
    let mut b = normalize_hue(b);
    if (b - a).abs() > 180.0 {
        if b > a {
            b -= 360.0;
        } else {
            b += 360.0;
        }
    }
    normalize_hue(lerp(a, b, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn hue_wraps_around() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(720.0), 0.0);
        assert_eq!(normalize_hue(-1.0), 359.0);
        assert_eq!(normalize_hue(359.9), 359.9);
        assert_eq!(normalize_hue(0.0), 0.0);
        assert!(normalize_hue(-1.0e-9) < 360.0);
    }

    #[test]
    fn identity_transform() {
        let t = transform_3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
        let c = transform(&t, Components(0.25, 0.5, 0.75));
        assert_eq!(c, Components(0.25, 0.5, 0.75));
    }

    #[test]
    fn hue_interpolation_takes_shorter_arc() {
        assert_component_eq!(lerp_hue(350.0, 10.0, 0.5), 0.0);
        assert_component_eq!(lerp_hue(10.0, 350.0, 0.25), 5.0);
        assert_component_eq!(lerp_hue(10.0, 50.0, 0.5), 30.0);
        assert_component_eq!(lerp_hue(0.0, 180.0, 0.5), 90.0);
        assert_component_eq!(lerp_hue(350.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn plain_lerp() {
        assert_eq!(lerp(0.0_f64, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0_f32, 4.0, 0.0), 2.0);
    }
}
