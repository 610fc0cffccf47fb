mod geometry;
mod mesh;
mod vertex;

pub use geometry::{MeshData, Rgb, CUBE_EDGE};
pub use mesh::Mesh;
pub use vertex::ColorVertex;
