use tracing::trace;

use crate::error::{InputError, Result};
use crate::math::distance_2d::turn_angle_deg;
use crate::math::Point2;

use super::{copy_points, is_enabled};

/// Upper bound on angle refinement passes.
///
/// A midpoint insertion can leave a residual violation at the new vertex;
/// the cap keeps output size predictable on dense zig-zags.
pub const MAX_ANGLE_PASSES: usize = 2;

/// Inserts a midpoint after every vertex whose turn angle exceeds
/// `angle_limit_deg`.
///
/// Runs at most [`MAX_ANGLE_PASSES`] passes and stops early after a pass
/// with no insertion. Vertices created in a pass are only examined by the
/// next pass. Endpoints are preserved verbatim.
///
/// Returns a copy of `points` when there are 2 or fewer points or
/// `angle_limit_deg <= 0`.
///
/// # Errors
///
/// Returns `InputError::AllocationFailure` if a pass buffer cannot be allocated.
pub fn refine_by_angle(points: &[Point2], angle_limit_deg: f64) -> Result<Vec<Point2>> {
    refine_by_angle_counted(points, angle_limit_deg).map(|(pts, _)| pts)
}

/// Same as [`refine_by_angle`], also returning the number of passes run.
pub(crate) fn refine_by_angle_counted(
    points: &[Point2],
    angle_limit_deg: f64,
) -> Result<(Vec<Point2>, usize)> {
    if points.len() <= 2 || !is_enabled(angle_limit_deg) {
        return Ok((copy_points(points)?, 0));
    }

    let (mut pts, mut inserted) = refine_pass(points, angle_limit_deg)?;
    let mut passes = 1;
    trace!(pass = passes, inserted, points = pts.len(), "angle refinement pass");

    while inserted > 0 && passes < MAX_ANGLE_PASSES {
        passes += 1;
        let (next, count) = refine_pass(&pts, angle_limit_deg)?;
        trace!(pass = passes, inserted = count, points = next.len(), "angle refinement pass");
        pts = next;
        inserted = count;
    }

    Ok((pts, passes))
}

/// One traversal: returns the refined sequence and the number of midpoints added.
fn refine_pass(pts: &[Point2], angle_limit_deg: f64) -> Result<(Vec<Point2>, usize)> {
    let mut out = Vec::new();
    let capacity = pts.len().saturating_mul(2);
    out.try_reserve(capacity)
        .map_err(|_| InputError::AllocationFailure { points: capacity })?;

    let mut inserted = 0;
    out.push(pts[0]);
    for w in pts.windows(3) {
        let (prev, curr, next) = (&w[0], &w[1], &w[2]);
        out.push(*curr);
        if turn_angle_deg(prev, curr, next) > angle_limit_deg {
            out.push(Point2::new((curr.x + next.x) * 0.5, (curr.y + next.y) * 0.5));
            inserted += 1;
        }
    }
    out.push(pts[pts.len() - 1]);

    Ok((out, inserted))
}
