pub mod shapelist;

pub use shapelist::{ClosestHit, ShapeList};
