use crate::error::{InputError, Result};
use crate::math::Point2;

/// An ordered sequence of 2D points connected by straight segments.
///
/// Duplicate and coincident points are allowed; consumers treat them as
/// zero-length segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Reads `n_pts` points from an interleaved `[x0, y0, x1, y1, ...]` buffer.
    ///
    /// Values past the first `2 * n_pts` are ignored.
    ///
    /// # Errors
    ///
    /// - `InputError::InvalidInput` if `xy` holds fewer than `2 * n_pts` values
    /// - `InputError::AllocationFailure` if the points cannot be allocated
    pub fn from_flat(xy: &[f64], n_pts: usize) -> Result<Self> {
        let needed = n_pts.checked_mul(2).ok_or_else(|| {
            InputError::InvalidInput(format!("point count {n_pts} overflows buffer size"))
        })?;
        if xy.len() < needed {
            return Err(InputError::InvalidInput(format!(
                "{n_pts} points need {needed} coordinates, buffer has {}",
                xy.len()
            ))
            .into());
        }
        let mut points = Vec::new();
        points
            .try_reserve_exact(n_pts)
            .map_err(|_| InputError::AllocationFailure { points: n_pts })?;
        points.extend(xy[..needed].chunks_exact(2).map(|c| Point2::new(c[0], c[1])));
        Ok(Self { points })
    }

    /// Writes the polyline into a newly allocated interleaved buffer.
    ///
    /// # Errors
    ///
    /// Returns `InputError::AllocationFailure` if the buffer cannot be allocated.
    pub fn to_flat(&self) -> Result<Vec<f64>> {
        let points = self.points.len();
        let mut flat = Vec::new();
        points
            .checked_mul(2)
            .and_then(|len| flat.try_reserve_exact(len).ok())
            .ok_or(InputError::AllocationFailure { points })?;
        for p in &self.points {
            flat.push(p.x);
            flat.push(p.y);
        }
        Ok(flat)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of segments (`len - 1`, or 0 when shorter than 2).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the first vertex, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Returns the last vertex, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }
}

impl From<Vec<Point2>> for Polyline {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}
