mod bounding_box;
mod error;
mod vector3;

pub use bounding_box::{BoundingBox, ContainmentType};
pub use error::{BoundsError, BoundsResult};
pub use vector3::Vector3;
