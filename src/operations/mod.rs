pub mod subdivide;
