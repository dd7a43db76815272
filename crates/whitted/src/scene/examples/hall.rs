use glam::Vec3;

use crate::{
    camera::ViewBox,
    color::{self, Rgb},
    error::ConfigError,
    light::PointLight,
    material::Material,
    math::point::Point,
    scene::Scene,
    shape::{PeriodicPlane, Sphere},
};

use super::ExampleScene;

/// A tiled floor and a mirror wall, with a few spheres in between.
pub struct HallScene;

impl ExampleScene for HallScene {
    fn insert_into(scene: &mut Scene) -> Result<(), ConfigError> {
        let grout = Material {
            ambient: Rgb::gray(0.02),
            ..Material::black_matter()
        };

        scene.insert_object(PeriodicPlane::new(
            Point::ORIGIN,
            Vec3::X,
            Vec3::Y,
            Material::white_plastic(),
            grout,
            0.05,
        )?);
        scene.insert_object(PeriodicPlane::new(
            Point::new(0.0, 5.0, 0.0),
            2.0 * Vec3::Z,
            2.0 * Vec3::X,
            Material::mirror(),
            Material::bronze(),
            0.1,
        )?);

        scene.insert_object(Sphere::new(
            Point::new(-1.2, 1.5, 0.7),
            0.7,
            Material::glass(),
        )?);
        scene.insert_object(Sphere::new(
            Point::new(1.0, 2.5, 0.5),
            0.5,
            Material::red_plastic(),
        )?);
        scene.insert_object(Sphere::new(
            Point::new(0.3, 0.0, 0.25),
            0.25,
            Material::emerald(),
        )?);

        scene.insert_light(PointLight {
            position: Point::new(0.0, -2.0, 4.0),
            color: color::WHITE,
        });
        scene.insert_light(PointLight {
            position: Point::new(-3.0, 3.0, 1.5),
            color: Rgb::from_array([0.3, 0.3, 0.5]),
        });
        Ok(())
    }

    fn view_box(aspect_ratio: f32) -> ViewBox {
        ViewBox::look_at(
            Point::new(1.5, -4.0, 2.0),
            Point::new(0.0, 2.0, 0.5),
            Vec3::Z,
            f32::to_radians(60.),
            aspect_ratio,
        )
    }
}
