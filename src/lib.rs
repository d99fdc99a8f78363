mod config;
mod container;
mod coordinate;
mod error;
pub mod from_wkt;
mod index;
mod linear;
mod quadtree;
mod rectangle;

pub use config::{QuadTreeConfig, DEFAULT_MAX_DEPTH};
pub use container::{IndexedContainer, ItemKey, Iter};
pub use coordinate::Coordinate;
pub use error::IndexError;
pub use index::SpatialIndex;
pub use linear::LinearIndex;
pub use quadtree::{QuadTree, TreeStats};
pub use rectangle::{HasEnvelope, Rect};
