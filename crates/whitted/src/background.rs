//! Colors given to rays leaving the scene without hitting anything.

use glam::Vec3;

use crate::{
    color::{self, Rgb},
    math::float::fract_floor,
    ray::Ray,
    scene::Scene,
};

pub trait Background: Sync + Send {
    fn color(&self, scene: &Scene, ray: &Ray) -> Rgb;
}

/// The same color in every direction
#[derive(Debug, Clone, Copy)]
pub struct UniformBackground(pub Rgb);

impl Background for UniformBackground {
    fn color(&self, _scene: &Scene, _ray: &Ray) -> Rgb {
        self.0
    }
}

/// A sky over an infinite checkered ground, with a halo around every light.
///
/// `z` is the up axis.
#[derive(Debug, Clone, Copy)]
pub struct SkyBackground {
    pub sky: Rgb,
    pub horizon: Rgb,
    pub dark_tile: Rgb,
    pub light_tile: Rgb,
    /// Distance of the ground below the ray origin
    pub ground_depth: f32,
    /// Distance at which the ground is completely fogged
    pub fog_distance: f32,
}

impl Default for SkyBackground {
    fn default() -> Self {
        Self {
            sky: color::BLUE,
            horizon: color::WHITE,
            dark_tile: Rgb::gray(0.2),
            light_tile: Rgb::gray(0.4),
            ground_depth: 0.5,
            fog_distance: 30.0,
        }
    }
}

/// Cosine of the half angle of the halo around lights, about 8°
pub const HALO_COS_THRESHOLD: f32 = 0.99;

impl SkyBackground {
    /// Glow added when looking right at a light
    pub fn halos(&self, scene: &Scene, ray: &Ray) -> Rgb {
        let half_angle = HALO_COS_THRESHOLD.acos();

        let mut result = color::BLACK;
        for light in scene.lights.iter() {
            let cos = ray.direction.dot(light.direction(ray.origin));
            if cos > HALO_COS_THRESHOLD {
                let angle = cos.min(1.0).acos();
                let falloff = (1.0 - angle / half_angle).max(0.0);
                result += falloff * falloff * light.color(ray.origin);
            }
        }
        result
    }

    /// Sky and ground, without the lights
    pub fn environment(&self, direction: Vec3) -> Rgb {
        if direction.z >= 0.0 {
            return self.horizon.lerp(self.sky, direction.z.min(1.0));
        }

        // Where the ray meets the ground plane
        let x = -self.ground_depth * direction.x / direction.z;
        let y = -self.ground_depth * direction.y / direction.z;
        let d = f32::sqrt(x * x + y * y);
        let fog = d.min(self.fog_distance) / self.fog_distance;

        let same_parity = (fract_floor(x) >= 0.5) == (fract_floor(y) >= 0.5);
        let tile = if same_parity {
            self.dark_tile
        } else {
            self.light_tile
        };
        tile.lerp(color::WHITE, fog)
    }
}

impl Background for SkyBackground {
    fn color(&self, scene: &Scene, ray: &Ray) -> Rgb {
        self.halos(scene, ray) + self.environment(ray.direction)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{Background, SkyBackground, UniformBackground};
    use crate::{
        color::{self, Rgb},
        light::DirectionalLight,
        math::point::Point,
        ray::Ray,
        scene::Scene,
    };

    fn assert_rgb_eq(a: Rgb, b: Rgb) {
        for (a, b) in a.0.iter().zip(b.0.iter()) {
            assert!((a - b).abs() < 1e-4, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn uniform() {
        let bg = UniformBackground(color::GREEN);
        let ray = Ray::new(Point::ORIGIN, Vec3::X, 0);
        assert_eq!(bg.color(&Scene::new(), &ray), color::GREEN);
    }

    #[test]
    fn sky_gradient() {
        let bg = SkyBackground::default();
        assert_rgb_eq(bg.environment(Vec3::X), color::WHITE);
        assert_rgb_eq(bg.environment(Vec3::Z), color::BLUE);

        let mid = bg.environment(Vec3::new(1.0, 0.0, 1.0).normalize());
        let z = std::f32::consts::FRAC_1_SQRT_2;
        assert_rgb_eq(mid, Rgb::from_array([1.0 - z, 1.0 - z, 1.0]));
    }

    #[test]
    fn ground_checker_and_fog() {
        let bg = SkyBackground::default();

        // straight down: (0, 0) on the ground, both coordinates in the lower half cell
        assert_rgb_eq(bg.environment(Vec3::NEG_Z), Rgb::gray(0.2));

        // x = 0.75, y = 0.25: different parities
        let d = Vec3::new(1.5, 0.5, -1.0);
        let fog = f32::sqrt(0.75 * 0.75 + 0.25 * 0.25) / 30.0;
        assert_rgb_eq(bg.environment(d), Rgb::gray(0.4).lerp(color::WHITE, fog));

        // far away, completely fogged
        let far = Vec3::new(100.0, 0.0, -0.1);
        assert_rgb_eq(bg.environment(far), color::WHITE);
    }

    #[test]
    fn halo_only_near_lights() {
        let mut scene = Scene::new();
        scene.insert_light(DirectionalLight {
            direction: Vec3::new(0.0, 1.0, 0.0),
            color: color::RED,
        });
        let bg = SkyBackground::default();

        let at_light = Ray::new(Point::ORIGIN, Vec3::Y, 0);
        assert_rgb_eq(bg.halos(&scene, &at_light), color::RED);

        let near_light = Ray::new(Point::ORIGIN, Vec3::new(0.05, 1.0, 0.0), 0);
        let halo = bg.halos(&scene, &near_light);
        assert!(halo.0[0] > 0.0 && halo.0[0] < 1.0);
        assert_eq!(halo.0[1], 0.0);

        let away = Ray::new(Point::ORIGIN, Vec3::new(1.0, 1.0, 0.0), 0);
        assert_eq!(bg.halos(&scene, &away), color::BLACK);

        // halos add up with the environment
        assert_rgb_eq(
            bg.color(&scene, &at_light),
            color::RED + bg.environment(Vec3::Y),
        );
    }
}
