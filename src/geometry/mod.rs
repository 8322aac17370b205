pub mod polyline;

pub use polyline::Polyline;
