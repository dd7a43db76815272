pub mod aggregate;
pub mod background;
pub mod camera;
pub mod color;
pub mod error;
pub mod integrators;
pub mod light;
pub mod material;
pub mod math;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shape;
pub mod utils;

pub use error::ConfigError;
