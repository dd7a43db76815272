use glam::Vec3;

use crate::{
    camera::ViewBox,
    color::Rgb,
    error::ConfigError,
    light::PointLight,
    math::point::Point,
    scene::Scene,
};

use super::ExampleScene;

/// Nothing but a light, showing the background and its halo.
pub struct EmptyScene;

impl ExampleScene for EmptyScene {
    fn insert_into(scene: &mut Scene) -> Result<(), ConfigError> {
        scene.insert_light(PointLight {
            position: Point::new(2.0, 10.0, 3.0),
            color: Rgb::from_array([1.0, 0.9, 0.6]),
        });
        Ok(())
    }

    fn view_box(aspect_ratio: f32) -> ViewBox {
        ViewBox::look_at(
            Point::new(0.0, -5.0, 1.0),
            Point::new(0.0, 0.0, 1.0),
            Vec3::Z,
            f32::to_radians(70.),
            aspect_ratio,
        )
    }
}
