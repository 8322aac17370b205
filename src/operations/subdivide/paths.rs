use tracing::{debug, warn};

use crate::geometry::Polyline;

use super::{SubdividePath, SubdivideParams};

/// Subdivides a batch of paths with one shared parameter set.
///
/// Parameters are sanitized on construction: NaN or negative thresholds
/// disable their stage instead of failing. Output order matches input order
/// and empty paths come back unchanged. A path that cannot be refined is
/// kept as given; the other paths are unaffected.
#[derive(Debug)]
pub struct SubdividePaths {
    paths: Vec<Polyline>,
    params: SubdivideParams,
}

impl SubdividePaths {
    /// Creates a new batch subdivision operation.
    #[must_use]
    pub fn new(paths: Vec<Polyline>, params: SubdivideParams) -> Self {
        Self {
            paths,
            params: params.to_sanitized(),
        }
    }

    /// Returns the effective (sanitized) parameters.
    #[must_use]
    pub fn params(&self) -> SubdivideParams {
        self.params
    }

    /// Executes the operation, returning one path per input path.
    #[must_use]
    pub fn execute(self) -> Vec<Polyline> {
        if self.params.is_pass_through() {
            return self.paths;
        }

        let params = self.params;
        let out: Vec<Polyline> = self
            .paths
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                if path.is_empty() {
                    return path;
                }
                let op = SubdividePath::new(path, params);
                match op.execute() {
                    Ok(refined) => refined,
                    Err(err) => {
                        warn!(%err, index, "keeping path unrefined");
                        op.into_polyline()
                    }
                }
            })
            .collect();

        debug!(
            paths = out.len(),
            points = out.iter().map(Polyline::len).sum::<usize>(),
            "subdivided paths"
        );
        out
    }
}
