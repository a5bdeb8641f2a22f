//! Closed-form ultrasonic multilateration.
//!
//! Computes a receiver's 3D position from time-of-flight range measurements
//! to four fixed reference points, without iterative optimization. A
//! normalization step re-expresses the reference configuration in a canonical
//! frame (first point at the origin, second on the x-axis, third in the x-y
//! plane) where the algebra simplifies; the solver then finds the position
//! and a shared range bias in closed form, and the inverse transform maps the
//! fix back to world coordinates.
//!
//! ```
//! use echoloc::math::{distance, Point3};
//! use echoloc::{locate, RangeMeasurement, ReferenceSet, SolutionBranch};
//!
//! let refs = ReferenceSet {
//!     a: Point3::new(0.0, 0.0, 0.0),
//!     b: Point3::new(100.0, 0.0, 0.0),
//!     c: Point3::new(0.0, 100.0, 0.0),
//!     d: Point3::new(0.0, 0.0, 100.0),
//! };
//! let target = Point3::new(400.0, 500.0, 600.0);
//! let ranges = RangeMeasurement {
//!     ar: distance(refs.a, target),
//!     br: distance(refs.b, target),
//!     cr: distance(refs.c, target),
//!     dr: distance(refs.d, target),
//! };
//! let fix = locate(&refs, &ranges, SolutionBranch::Two).unwrap();
//! assert!((fix.position - target).norm() < 1e-6);
//! ```

pub mod config;
pub mod locate;
pub mod math;
pub mod normalize;
pub mod solver;
pub mod transform;

pub use config::RangingConfig;
pub use locate::{locate, LocateError, RangeMeasurement, ReferenceSet};
pub use normalize::{compute_normalization, NormalizationPair, NormalizeError};
pub use solver::{multilaterate, PositionEstimate, SolutionBranch, SolveError};
pub use transform::Transform;
