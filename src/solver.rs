// Closed-form multilateration in the canonical reference frame.
//
// Each reference point i satisfies range_i = |p - p_i| + e, where e is an
// offset shared by all four measurements (an unsynchronized clock shifts
// every time-of-flight reading by the same amount). Subtracting the
// equation for the origin reference from the other three cancels the square
// roots and leaves x, y and z affine in e; substituting those back into the
// origin equation yields a single quadratic in e whose two roots are the
// mirror-image candidate positions.
//
// The coefficient arrangement below follows the Maxima derivation of the
// quadratic verbatim and is not optimised for readability. The sign choice
// in the root formula fixes the public branch numbering.

use crate::math::{Point3, TOLERANCE};

/// Which root of the position quadratic to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionBranch {
    /// The −√ root.
    One,
    /// The +√ root.
    Two,
}

impl SolutionBranch {
    /// Map the numeric selector {1, 2} onto a branch. Any other value is an
    /// error, never a silent default.
    pub fn from_number(n: i32) -> Result<Self, SolveError> {
        match n {
            1 => Ok(SolutionBranch::One),
            2 => Ok(SolutionBranch::Two),
            other => Err(SolveError::InvalidBranchSelector(other)),
        }
    }
}

/// A solved fix: receiver position plus the recovered common-mode range
/// bias. Produced fresh per call; carries no state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionEstimate {
    pub position: Point3,
    pub bias: f64,
}

/// Errors that can occur while solving.
#[derive(Debug)]
pub enum SolveError {
    /// Branch selector outside {1, 2}.
    InvalidBranchSelector(i32),
    /// A denominator vanished; the reference configuration cannot resolve a
    /// position.
    DegenerateGeometry,
    /// Negative discriminant: no position is consistent with the measured
    /// ranges.
    NoRealSolution,
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::InvalidBranchSelector(n) => {
                write!(f, "Solution branch selector must be 1 or 2, got {n}")
            }
            SolveError::DegenerateGeometry => {
                write!(f, "Reference geometry is degenerate")
            }
            SolveError::NoRealSolution => {
                write!(f, "Ranges are inconsistent; no real solution")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Solve for position and bias from ranges to four references expressed in
/// the canonical frame: a at the origin (implicit), b = (bx, 0, 0),
/// c = (cx, cy, 0), d = (dx, dy, dz) off the x-y plane.
///
/// `ar`, `br`, `cr`, `dr` are the measured ranges to a, b, c, d; each may
/// carry the shared additive bias that the solve recovers as `e`.
pub fn multilaterate(
    ar: f64,
    br: f64,
    bx: f64,
    cr: f64,
    cx: f64,
    cy: f64,
    dr: f64,
    dx: f64,
    dy: f64,
    dz: f64,
    branch: SolutionBranch,
) -> Result<PositionEstimate, SolveError> {
    // bx, cy and dz divide the coefficients below; a vanishing one means b,
    // c or d violates its frame constraint (b on the origin, c on the
    // x-axis, d in the x-y plane).
    if bx.abs() <= TOLERANCE || cy.abs() <= TOLERANCE || dz.abs() <= TOLERANCE {
        return Err(SolveError::DegenerateGeometry);
    }

    // Coefficients of x, y and z as affine functions of e.
    let x_p1 = (br - ar) / bx;
    let x_p0 = -(br * br - bx * bx - ar * ar) / (2.0 * bx);
    let y_p1 = -(cx * x_p1 - cr + ar) / cy;
    let y_p0 = -(2.0 * cx * x_p0 + cr * cr - cy * cy - cx * cx - ar * ar) / (2.0 * cy);
    let z_p1 = -(dy * y_p1 + dx * x_p1 - dr + ar) / dz;
    let z_p0 = -(2.0 * dy * y_p0 + 2.0 * dx * x_p0 + dr * dr - dz * dz - dy * dy - dx * dx
        - ar * ar)
        / (2.0 * dz);

    let denominator = z_p1 * z_p1 + y_p1 * y_p1 + x_p1 * x_p1 - 1.0;
    if denominator.abs() <= TOLERANCE {
        return Err(SolveError::DegenerateGeometry);
    }

    let discriminant = (-y_p0 * y_p0 - x_p0 * x_p0 + ar * ar) * z_p1 * z_p1
        + (2.0 * y_p0 * y_p1 + 2.0 * x_p0 * x_p1 + 2.0 * ar) * z_p0 * z_p1
        + (-y_p1 * y_p1 - x_p1 * x_p1 + 1.0) * z_p0 * z_p0
        + (ar * ar - x_p0 * x_p0) * y_p1 * y_p1
        + (2.0 * x_p0 * x_p1 + 2.0 * ar) * y_p0 * y_p1
        + (1.0 - x_p1 * x_p1) * y_p0 * y_p0
        + ar * ar * x_p1 * x_p1
        + 2.0 * ar * x_p0 * x_p1
        + x_p0 * x_p0;
    if discriminant < 0.0 {
        return Err(SolveError::NoRealSolution);
    }
    let root = discriminant.sqrt();

    let e = match branch {
        SolutionBranch::One => {
            -(root + z_p0 * z_p1 + y_p0 * y_p1 + x_p0 * x_p1 + ar) / denominator
        }
        SolutionBranch::Two => {
            (root - z_p0 * z_p1 - y_p0 * y_p1 - x_p0 * x_p1 - ar) / denominator
        }
    };

    Ok(PositionEstimate {
        position: Point3::new(e * x_p1 + x_p0, e * y_p1 + y_p0, e * z_p1 + z_p0),
        bias: e,
    })
}
