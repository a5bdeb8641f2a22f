//! End-to-end position fix: normalize the reference configuration, solve in
//! the canonical frame, map the result back to world coordinates.

use crate::math::Point3;
use crate::normalize::{compute_normalization, NormalizeError};
use crate::solver::{multilaterate, PositionEstimate, SolutionBranch, SolveError};

/// Four fixed reference points in world coordinates.
///
/// `a`, `b`, `c` must span a proper triangle; `d` must sit off the plane
/// they define.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceSet {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
    pub d: Point3,
}

/// Measured ranges to the four references, in the same order and units as
/// the reference coordinates. Each may carry a shared additive bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMeasurement {
    pub ar: f64,
    pub br: f64,
    pub cr: f64,
    pub dr: f64,
}

/// Errors that can occur during a full fix.
#[derive(Debug)]
pub enum LocateError {
    /// The reference configuration could not be normalized.
    Normalize(NormalizeError),
    /// The canonical-frame solve failed.
    Solve(SolveError),
}

impl std::fmt::Display for LocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocateError::Normalize(e) => write!(f, "{e}"),
            LocateError::Solve(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LocateError {}

impl From<NormalizeError> for LocateError {
    fn from(e: NormalizeError) -> Self {
        LocateError::Normalize(e)
    }
}

impl From<SolveError> for LocateError {
    fn from(e: SolveError) -> Self {
        LocateError::Solve(e)
    }
}

/// Compute a world-frame position fix from ranges to four references.
///
/// Normalizes the configuration, carries b, c, d into the canonical frame
/// (a lands on the origin by construction), solves there, and maps the
/// position back out. Ranges pass through untouched: the normalization is
/// rigid, so distances are frame-invariant. The bias is frame-independent.
pub fn locate(
    refs: &ReferenceSet,
    ranges: &RangeMeasurement,
    branch: SolutionBranch,
) -> Result<PositionEstimate, LocateError> {
    let frames = compute_normalization(refs.a, refs.b, refs.c)?;

    let b = frames.to_normal.apply(refs.b);
    let c = frames.to_normal.apply(refs.c);
    let d = frames.to_normal.apply(refs.d);

    // A d coplanar with the reference triangle surfaces here as a vanishing
    // dz divisor in the solver.
    let fix = multilaterate(
        ranges.ar, ranges.br, b.x, ranges.cr, c.x, c.y, ranges.dr, d.x, d.y, d.z, branch,
    )?;

    Ok(PositionEstimate {
        position: frames.from_normal.apply(fix.position),
        bias: fix.bias,
    })
}
