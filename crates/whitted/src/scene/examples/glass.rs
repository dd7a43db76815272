use glam::Vec3;

use crate::{
    camera::ViewBox,
    color::Rgb,
    error::ConfigError,
    light::DirectionalLight,
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::Sphere,
};

use super::ExampleScene;

/// A glass ball in front of a row of colored ones, lit by the sun.
pub struct GlassScene;

impl ExampleScene for GlassScene {
    fn insert_into(scene: &mut Scene) -> Result<(), ConfigError> {
        scene.insert_object(Sphere::new(
            Point::new(0.0, -1.0, 0.8),
            0.8,
            Material::glass(),
        )?);

        let behind = [
            (-1.5, Material::red_plastic()),
            (0.0, Material::white_plastic()),
            (1.5, Material::mix(0.5, &Material::emerald(), &Material::bronze())),
        ];
        for (x, material) in behind {
            scene.insert_object(Sphere::new(Point::new(x, 2.5, 0.5), 0.5, material)?);
        }

        scene.insert_light(DirectionalLight {
            direction: Vec3::new(-0.5, -1.0, 1.5),
            color: Rgb::from_array([1.0, 0.95, 0.85]),
        });
        Ok(())
    }

    fn view_box(aspect_ratio: f32) -> ViewBox {
        ViewBox::look_at(
            Point::new(0.0, -6.0, 1.2),
            Point::new(0.0, 0.0, 0.6),
            Vec3::Z,
            f32::to_radians(45.),
            aspect_ratio,
        )
    }
}
