use tracing::warn;

use crate::error::{InputError, Result};
use crate::geometry::Polyline;
use crate::operations::subdivide::{SubdividePath, SubdivideParams};

/// A refined path as an interleaved `[x0, y0, x1, y1, ...]` buffer.
///
/// The caller owns exactly one output buffer, handed over with
/// [`FlatPath::into_coords`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatPath {
    coords: Option<Vec<f64>>,
    point_count: usize,
}

impl FlatPath {
    /// The empty result: no buffer, zero points.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of points in the buffer.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    /// Returns `true` if there is no buffer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_none()
    }

    /// Borrows the interleaved coordinates.
    #[must_use]
    pub fn coords(&self) -> Option<&[f64]> {
        self.coords.as_deref()
    }

    /// Takes ownership of the interleaved coordinates.
    #[must_use]
    pub fn into_coords(self) -> Option<Vec<f64>> {
        self.coords
    }
}

/// Subdivides a path given as interleaved coordinates.
///
/// `n_pts` is the number of points to read from `xy`. Invalid input (no
/// buffer, `n_pts <= 0`, or a buffer shorter than `2 * n_pts`) and
/// allocation failure both yield [`FlatPath::empty`]; use
/// [`try_subdivide_path`] to tell them apart.
///
/// Thresholds are used as given: a value `<= 0` disables its stage.
#[must_use]
pub fn subdivide_path(
    xy: Option<&[f64]>,
    n_pts: i32,
    angle_limit_deg: f64,
    max_segment_len: f64,
) -> FlatPath {
    match try_subdivide_path(xy, n_pts, angle_limit_deg, max_segment_len) {
        Ok(flat) => flat,
        Err(err) => {
            warn!(%err, n_pts, "path subdivision rejected");
            FlatPath::empty()
        }
    }
}

/// Fallible form of [`subdivide_path`].
///
/// # Errors
///
/// - `InputError::InvalidInput` if `xy` is `None`, `n_pts <= 0`, or `xy`
///   holds fewer than `2 * n_pts` values
/// - `InputError::AllocationFailure` if the output buffer cannot be allocated
pub fn try_subdivide_path(
    xy: Option<&[f64]>,
    n_pts: i32,
    angle_limit_deg: f64,
    max_segment_len: f64,
) -> Result<FlatPath> {
    let xy =
        xy.ok_or_else(|| InputError::InvalidInput("missing coordinate buffer".to_owned()))?;
    let n = usize::try_from(n_pts)
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| {
            InputError::InvalidInput(format!("point count must be positive, got {n_pts}"))
        })?;

    let polyline = Polyline::from_flat(xy, n)?;
    let params = SubdivideParams {
        angle_limit_deg,
        max_segment_len,
    };
    let refined = SubdividePath::new(polyline, params).execute()?;
    let coords = refined.to_flat()?;

    Ok(FlatPath {
        coords: Some(coords),
        point_count: refined.len(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::SubdivideError;

    #[test]
    fn refines_interleaved_input() {
        let flat = subdivide_path(Some([0.0, 0.0, 10.0, 0.0].as_slice()), 2, 0.0, 3.0);
        assert_eq!(flat.point_count(), 5);
        assert_eq!(
            flat.coords().unwrap(),
            &[0.0, 0.0, 2.5, 0.0, 5.0, 0.0, 7.5, 0.0, 10.0, 0.0]
        );
    }

    #[test]
    fn pass_through_when_disabled() {
        let xy = [1.0, 2.0, 30.0, -4.0, 0.5, 0.5];
        let flat = subdivide_path(Some(xy.as_slice()), 3, 0.0, 0.0);
        assert_eq!(flat.point_count(), 3);
        assert_eq!(flat.into_coords().unwrap(), xy.to_vec());
    }

    #[test]
    fn single_point() {
        let flat = subdivide_path(Some([7.0, 8.0].as_slice()), 1, 10.0, 2.0);
        assert_eq!(flat.point_count(), 1);
        assert_eq!(flat.coords().unwrap(), &[7.0, 8.0]);
    }

    #[test]
    fn missing_buffer_is_empty() {
        let flat = subdivide_path(None, 4, 10.0, 2.0);
        assert!(flat.is_empty());
        assert_eq!(flat.point_count(), 0);
        assert!(flat.coords().is_none());
    }

    #[test]
    fn zero_and_negative_counts_are_empty() {
        for n in [0, -1, i32::MIN] {
            let flat = subdivide_path(Some([0.0, 0.0, 1.0, 1.0].as_slice()), n, 10.0, 2.0);
            assert_eq!(flat, FlatPath::empty());
        }
    }

    #[test]
    fn short_buffer_is_empty() {
        let flat = subdivide_path(Some([0.0, 0.0, 1.0].as_slice()), 2, 10.0, 2.0);
        assert!(flat.is_empty());
    }

    #[test]
    fn try_form_reports_invalid_input() {
        let err = try_subdivide_path(None, 2, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            SubdivideError::Input(InputError::InvalidInput(_))
        ));

        let err = try_subdivide_path(Some(&[][..]), 0, 0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn try_form_reports_allocation_failure() {
        let xy = [0.0, 0.0, 1e150, 0.0];
        let err = try_subdivide_path(Some(xy.as_slice()), 2, 0.0, 1e-150).unwrap_err();
        assert!(matches!(
            err,
            SubdivideError::Input(InputError::AllocationFailure { .. })
        ));
        let flat = subdivide_path(Some(xy.as_slice()), 2, 0.0, 1e-150);
        assert!(flat.is_empty());
        assert_eq!(flat.point_count(), 0);
    }
}
