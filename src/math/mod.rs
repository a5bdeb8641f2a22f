//! Linear algebra type aliases and geometric tolerances.

pub type Point3 = nalgebra::Point3<f64>;
pub type Vector3 = nalgebra::Vector3<f64>;
pub type Vector4 = nalgebra::Vector4<f64>;
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Geometric degeneracy threshold (colinearity, vanishing rotation and
/// solver denominators). Floating-point arithmetic rarely lands on an exact
/// zero, so anything below this magnitude is treated as degenerate. Sized
/// for coordinates on the centimeter scale of an ultrasonic room setup.
pub const TOLERANCE: f64 = 1e-9;

/// Euclidean distance between two points.
pub fn distance(p1: Point3, p2: Point3) -> f64 {
    (p2 - p1).norm()
}
