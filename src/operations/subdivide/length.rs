use tracing::trace;

use crate::error::{InputError, Result};
use crate::math::distance_2d::distance;
use crate::math::Point2;

use super::{copy_points, is_enabled};

/// Splits every segment longer than `max_segment_len` into equal parts.
///
/// A segment of length `len` receives `ceil(len / max_segment_len) - 1`
/// interior points at equal parametric spacing, so each resulting piece is
/// at most `max_segment_len` long. Inserted points lie on the source segment
/// and the last input point is appended verbatim.
///
/// Returns a copy of `points` when there are fewer than 2 points or
/// `max_segment_len <= 0`.
///
/// # Errors
///
/// Returns `InputError::AllocationFailure` if the inserted points do not fit
/// in memory (a tiny threshold against a huge segment).
pub fn subdivide_long_segments(points: &[Point2], max_segment_len: f64) -> Result<Vec<Point2>> {
    let Some(last) = points.last() else {
        return Ok(Vec::new());
    };
    if points.len() <= 1 || !is_enabled(max_segment_len) {
        return copy_points(points);
    }

    let mut out = Vec::new();
    out.try_reserve(points.len())
        .map_err(|_| InputError::AllocationFailure {
            points: points.len(),
        })?;
    let mut inserted = 0_usize;

    for pair in points.windows(2) {
        let a = pair[0];
        let b = pair[1];
        out.push(a);

        let len = distance(&a, &b);
        // NaN and infinite lengths are left alone; they cannot be split evenly.
        if !len.is_finite() || len <= max_segment_len {
            continue;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let splits = (len / max_segment_len).ceil() as usize - 1;
        if splits == 0 {
            continue;
        }

        #[allow(clippy::cast_precision_loss)]
        let step = 1.0 / (splits + 1) as f64;
        out.try_reserve(splits)
            .map_err(|_| InputError::AllocationFailure {
                points: out.len().saturating_add(splits),
            })?;
        for k in 1..=splits {
            #[allow(clippy::cast_precision_loss)]
            let t = step * k as f64;
            out.push(a + (b - a) * t);
        }
        inserted += splits;
    }

    out.push(*last);
    trace!(input = points.len(), inserted, "length subdivision");
    Ok(out)
}
