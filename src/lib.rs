pub mod error;
pub mod flat;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, SubdivideError};
pub use flat::{subdivide_path, try_subdivide_path, FlatPath};
pub use geometry::Polyline;
pub use math::Point2;
pub use operations::subdivide::{SubdividePath, SubdividePaths, SubdivideParams, SubdivideStats};
