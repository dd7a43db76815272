//! Built-in scenes, each coming with a point of view.

mod empty;
mod glass;
mod hall;
mod spheres;

pub use empty::EmptyScene;
pub use glass::GlassScene;
pub use hall::HallScene;
pub use spheres::SpheresScene;

use crate::{camera::ViewBox, error::ConfigError, scene::Scene};

pub trait ExampleScene {
    fn insert_into(scene: &mut Scene) -> Result<(), ConfigError>;

    /// Point of view for an image of the given width / height ratio
    fn view_box(aspect_ratio: f32) -> ViewBox;

    fn build() -> Result<Scene, ConfigError> {
        let mut scene = Scene::new();
        Self::insert_into(&mut scene)?;
        Ok(scene)
    }
}
