mod angle;
mod length;
mod params;
mod paths;

pub use angle::{refine_by_angle, MAX_ANGLE_PASSES};
pub use length::subdivide_long_segments;
pub use params::{ParamRange, SubdivideParams, ANGLE_LIMIT_RANGE, MAX_SEGMENT_LEN_RANGE};
pub use paths::SubdividePaths;

use tracing::debug;

use crate::error::{InputError, Result};
use crate::geometry::Polyline;
use crate::math::Point2;

/// Point counts recorded while subdividing one path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubdivideStats {
    /// Points in the input path.
    pub input_points: usize,
    /// Points after length subdivision.
    pub length_points: usize,
    /// Points in the output path.
    pub output_points: usize,
    /// Angle refinement passes run (0 when the stage is disabled).
    pub angle_passes: usize,
}

/// Refines a polyline so segments stay short and turns stay shallow.
///
/// # Algorithm
///
/// 1. **Length stage**: segments longer than `max_segment_len` are split
///    into equal pieces ([`subdivide_long_segments`]).
/// 2. **Angle stage**: vertices turning more than `angle_limit_deg` get a
///    midpoint on their outgoing segment, for at most
///    [`MAX_ANGLE_PASSES`] passes ([`refine_by_angle`]).
///
/// Existing points are never moved and both endpoints are kept verbatim.
#[derive(Debug)]
pub struct SubdividePath {
    polyline: Polyline,
    params: SubdivideParams,
}

impl SubdividePath {
    /// Creates a new subdivision operation.
    #[must_use]
    pub fn new(polyline: Polyline, params: SubdivideParams) -> Self {
        Self { polyline, params }
    }

    /// Consumes the operation, returning the unrefined input.
    #[must_use]
    pub fn into_polyline(self) -> Polyline {
        self.polyline
    }

    /// Executes the operation, returning the refined polyline.
    ///
    /// # Errors
    ///
    /// Returns `InputError::AllocationFailure` if the refined path does not
    /// fit in memory.
    pub fn execute(&self) -> Result<Polyline> {
        self.execute_with_stats().map(|(pline, _)| pline)
    }

    /// Executes the operation, also returning per-stage point counts.
    ///
    /// # Errors
    ///
    /// Same as [`SubdividePath::execute`].
    pub fn execute_with_stats(&self) -> Result<(Polyline, SubdivideStats)> {
        let input = &self.polyline.points;
        let step1 = subdivide_long_segments(input, self.params.max_segment_len)?;
        let (step2, angle_passes) =
            angle::refine_by_angle_counted(&step1, self.params.angle_limit_deg)?;

        let stats = SubdivideStats {
            input_points: input.len(),
            length_points: step1.len(),
            output_points: step2.len(),
            angle_passes,
        };
        debug!(
            segments = self.polyline.segment_count(),
            input = stats.input_points,
            after_length = stats.length_points,
            output = stats.output_points,
            passes = stats.angle_passes,
            "subdivided path"
        );

        Ok((Polyline::new(step2), stats))
    }
}

/// A threshold enables its stage only when strictly positive.
fn is_enabled(threshold: f64) -> bool {
    threshold > 0.0
}

/// Copies `points` into a new buffer, reporting allocation failure.
fn copy_points(points: &[Point2]) -> Result<Vec<Point2>> {
    let mut out = Vec::new();
    out.try_reserve_exact(points.len())
        .map_err(|_| InputError::AllocationFailure {
            points: points.len(),
        })?;
    out.extend_from_slice(points);
    Ok(out)
}
