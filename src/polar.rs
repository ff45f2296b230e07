//! A point in a two dimensional polar coordinate system.
//!
//! Chroma and hue of [`Lch`](crate::Lch) are such a pair, so every place that
//! converts between `(a, b)` and `(c, h)` goes through [`PolarPoint`] to get
//! the same normalization everywhere.

use euclid::{default::Vector2D, Angle};

use crate::color::Component;
use crate::math::normalize_hue;

/// A normalized polar point: the radial is never negative and the angle (in
/// degrees) is always in the range [0, 360).
///
/// ```rust
/// use perceptual_color::PolarPoint;
/// let p = PolarPoint::new(-5.0, 10.0);
/// assert_eq!(p, PolarPoint::new(5.0, 190.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarPoint {
    radial: Component,
    angle_degree: Component,
}

impl PolarPoint {
    /// Create a new point from polar coordinates. A negative radial is made
    /// positive by turning the angle by 180°. A radial of zero keeps the given
    /// angle.
    pub fn new(radial: Component, angle_degree: Component) -> Self {
        if radial < 0.0 {
            Self {
                radial: -radial,
                angle_degree: normalize_hue(angle_degree + 180.0),
            }
        } else {
            Self {
                radial,
                angle_degree: normalize_hue(angle_degree),
            }
        }
    }

    /// Create a new point from cartesian coordinates. The origin gets the
    /// angle 0.
    pub fn from_cartesian(x: Component, y: Component) -> Self {
        let radial = x.hypot(y);
        if radial == 0.0 {
            return Self {
                radial: 0.0,
                angle_degree: 0.0,
            };
        }

        let angle = Vector2D::new(x, y).angle_from_x_axis();
        Self {
            radial,
            angle_degree: normalize_hue(angle.to_degrees()),
        }
    }

    /// The distance from the origin.
    pub fn radial(&self) -> Component {
        self.radial
    }

    /// The angle in degrees, counter-clockwise from the positive x axis.
    pub fn angle_degree(&self) -> Component {
        self.angle_degree
    }

    /// Convert to cartesian coordinates `(x, y)`.
    pub fn to_cartesian(&self) -> (Component, Component) {
        let v = Vector2D::from_angle_and_length(
            Angle::degrees(self.angle_degree),
            self.radial,
        );
        (v.x, v.y)
    }

    /// Returns true if both points describe the same geometric point. At the
    /// origin the angle carries no information and is ignored.
    pub fn is_same_point(&self, other: &PolarPoint) -> bool {
        if self.radial == 0.0 && other.radial == 0.0 {
            return true;
        }
        self.radial == other.radial && self.angle_degree == other.angle_degree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn negative_radial_turns_angle() {
        assert_eq!(PolarPoint::new(-5.0, 10.0), PolarPoint::new(5.0, 190.0));
        assert_eq!(PolarPoint::new(-2.0, -357.0), PolarPoint::new(2.0, 183.0));
        assert_eq!(PolarPoint::new(-1.0, 270.0).angle_degree(), 90.0);
    }

    #[test]
    fn angles_are_normalized() {
        assert_eq!(PolarPoint::new(1.0, 360.0).angle_degree(), 0.0);
        assert_eq!(PolarPoint::new(1.0, 720.0).angle_degree(), 0.0);
        assert_eq!(PolarPoint::new(1.0, -1.0).angle_degree(), 359.0);
        assert_eq!(PolarPoint::new(1.0, 359.9).angle_degree(), 359.9);
    }

    #[test]
    fn zero_radial_keeps_angle() {
        let p = PolarPoint::new(0.0, 150.0);
        assert_eq!(p.angle_degree(), 150.0);
        assert!(p.is_same_point(&PolarPoint::new(0.0, 9999.0)));
    }

    #[test]
    fn origin_from_cartesian_has_zero_angle() {
        let p = PolarPoint::from_cartesian(0.0, 0.0);
        assert_eq!(p.radial(), 0.0);
        assert_eq!(p.angle_degree(), 0.0);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        for &(radial, angle) in &[(-3.0, -725.0), (4.0, 1000.0), (0.0, -90.0), (7.5, 359.5)] {
            let once = PolarPoint::new(radial, angle);
            let twice = PolarPoint::new(once.radial(), once.angle_degree());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn cartesian_round_trip() {
        for &(radial, angle) in &[(1.0, 0.0), (2.5, 45.0), (10.0, 135.0), (3.0, 200.0), (0.5, 359.0)] {
            let p = PolarPoint::new(radial, angle);
            let (x, y) = p.to_cartesian();
            let back = PolarPoint::from_cartesian(x, y);
            assert_abs_diff_eq!(back.radial(), p.radial(), epsilon = 1.0e-4);
            assert_abs_diff_eq!(back.angle_degree(), p.angle_degree(), epsilon = 1.0e-3);
        }
    }

    #[test]
    fn cartesian_quadrants() {
        assert_abs_diff_eq!(PolarPoint::from_cartesian(0.0, 1.0).angle_degree(), 90.0, epsilon = 1.0e-4);
        assert_abs_diff_eq!(PolarPoint::from_cartesian(-1.0, 0.0).angle_degree(), 180.0, epsilon = 1.0e-4);
        assert_abs_diff_eq!(PolarPoint::from_cartesian(0.0, -1.0).angle_degree(), 270.0, epsilon = 1.0e-4);
        assert_abs_diff_eq!(PolarPoint::from_cartesian(3.0, 4.0).radial(), 5.0, epsilon = 1.0e-5);
    }

    #[test]
    fn same_point_needs_matching_angle_away_from_origin() {
        let a = PolarPoint::new(1.0, 10.0);
        assert!(a.is_same_point(&PolarPoint::new(1.0, 370.0)));
        assert!(!a.is_same_point(&PolarPoint::new(1.0, 11.0)));
        assert!(!a.is_same_point(&PolarPoint::new(0.0, 10.0)));
    }
}
