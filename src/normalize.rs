//! Reference-frame normalization.
//!
//! Re-expresses an arbitrary reference-point configuration in a canonical
//! frame where the multilateration algebra simplifies: the first point lands
//! on the origin, the second on the x-axis, the third in the x-y plane. The
//! forward map is built from a translation and three axis rotations; the
//! inverse undoes each elementary step in reverse order.

use std::f64::consts::FRAC_PI_2;

use crate::math::{Point3, TOLERANCE};
use crate::transform::Transform;

/// Forward/inverse transform pair produced by [`compute_normalization`].
///
/// `from_normal.apply(to_normal.apply(p)) == p` for every point, up to
/// floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationPair {
    /// World frame → canonical frame.
    pub to_normal: Transform,
    /// Canonical frame → world frame.
    pub from_normal: Transform,
}

/// Errors that can occur during normalization.
#[derive(Debug)]
pub enum NormalizeError {
    /// The three reference points are colinear or coincident, leaving the
    /// canonical frame underdetermined.
    DegenerateReferenceConfiguration,
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::DegenerateReferenceConfiguration => {
                write!(f, "Reference points are colinear or coincident")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// −1 for negative input, +1 otherwise. Zero input is not meaningful.
fn sign(num: f64) -> f64 {
    if num < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Rotation angle that zeroes `num` against `den`, falling back to ±π/2
/// (by the sign of the numerator) when the denominator vanishes.
fn axis_angle(num: f64, den: f64) -> f64 {
    if den.abs() > TOLERANCE {
        (num / den).atan()
    } else {
        sign(num) * FRAC_PI_2
    }
}

/// Build the transform pair that carries `a` onto the origin, `b` onto the
/// x-axis, and `c` into the x-y plane.
///
/// Fails if `a`, `b`, `c` do not span a proper triangle.
pub fn compute_normalization(
    a: Point3,
    b: Point3,
    c: Point3,
) -> Result<NormalizationPair, NormalizeError> {
    if (b - a).cross(&(c - a)).norm() <= TOLERANCE {
        return Err(NormalizeError::DegenerateReferenceConfiguration);
    }

    // Translate a onto the origin.
    let to_origin = Transform::translation(-a.coords);

    // Two rotations carry b onto the x-axis: first about x into the x-y
    // plane, then about z onto the axis itself.
    let b1 = to_origin.apply(b);
    let theta1 = axis_angle(b1.z, b1.y);
    let rot1 = Transform::rotation_x(theta1);

    let b2 = rot1.apply(b1);
    let theta2 = axis_angle(b2.y, b2.x);
    let rot2 = Transform::rotation_z(theta2);

    let ab_map = rot2.compose(&rot1).compose(&to_origin);

    // A final rotation about x (which b now lies on) drops c into the x-y
    // plane without disturbing a or b.
    let c1 = ab_map.apply(c);
    let theta3 = axis_angle(c1.z, c1.y);

    let to_normal = Transform::rotation_x(theta3).compose(&ab_map);

    let from_normal = Transform::translation(a.coords)
        .compose(&Transform::rotation_x(-theta1))
        .compose(&Transform::rotation_z(-theta2))
        .compose(&Transform::rotation_x(-theta3));

    Ok(NormalizationPair { to_normal, from_normal })
}
