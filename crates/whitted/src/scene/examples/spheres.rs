use glam::Vec3;

use crate::{
    camera::ViewBox,
    color::{self, Rgb},
    error::ConfigError,
    light::PointLight,
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::Sphere,
};

use super::ExampleScene;

/// Four spheres of different materials floating above the checkered ground.
pub struct SpheresScene;

impl ExampleScene for SpheresScene {
    fn insert_into(scene: &mut Scene) -> Result<(), ConfigError> {
        scene.insert_object(Sphere::new(
            Point::new(-1.6, 1.0, 0.6),
            0.6,
            Material::red_plastic(),
        )?);
        scene.insert_object(Sphere::new(
            Point::new(0.0, 2.0, 1.0),
            1.0,
            Material::mirror(),
        )?);
        scene.insert_object(Sphere::new(
            Point::new(1.5, 0.5, 0.5),
            0.5,
            Material::bronze(),
        )?);
        scene.insert_object(Sphere::new(
            Point::new(0.4, -0.6, 0.3),
            0.3,
            Material::emerald(),
        )?);

        scene.insert_light(PointLight {
            position: Point::new(-4.0, -3.0, 6.0),
            color: color::WHITE,
        });
        scene.insert_light(PointLight {
            position: Point::new(5.0, 1.0, 2.0),
            color: Rgb::gray(0.4),
        });
        Ok(())
    }

    fn view_box(aspect_ratio: f32) -> ViewBox {
        ViewBox::look_at(
            Point::new(0.0, -6.0, 1.5),
            Point::new(0.0, 0.0, 0.6),
            Vec3::Z,
            f32::to_radians(50.),
            aspect_ratio,
        )
    }
}
