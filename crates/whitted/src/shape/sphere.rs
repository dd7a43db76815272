use glam::Vec3;

use crate::{
    error::ConfigError,
    material::Material,
    math::{point::Point, vec::Vec3NormalizeExt},
    ray::Ray,
};

use super::{IntersectionResult, RayIntersection, Shape};

/// A simple sphere shape, with a constant material.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Point, radius: f32, material: Material) -> Result<Self, ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Point of the sphere at the given latitude and longitude, in degrees.
    ///
    /// Latitude goes from -90 (south pole) to 90 (north pole) along the `z` axis.
    pub fn localize(&self, latitude: f32, longitude: f32) -> Point {
        let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();
        self.center + self.radius * Vec3::new(cos_lon * cos_lat, sin_lon * cos_lat, sin_lat)
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> IntersectionResult {
        // Project the center on the line of the ray
        let to_center = self.center - ray.origin;
        let along = to_center.dot(ray.direction);
        let perpendicular = to_center - along * ray.direction;

        let r2 = self.radius * self.radius;
        let perpendicular2 = perpendicular.length_squared();
        if perpendicular2 > r2 {
            return IntersectionResult::miss(perpendicular2 - r2);
        }

        // A tangent ray gives a zero half chord, both roots are then the same
        let half_chord = f32::sqrt((r2 - perpendicular2).max(0.0));
        let (entry, exit) = (along - half_chord, along + half_chord);

        // When the origin is inside the sphere, the exit point is the hit
        let t = if entry >= 0.0 {
            entry
        } else if exit >= 0.0 {
            exit
        } else {
            // The sphere is behind the ray
            return IntersectionResult::miss(to_center.length() - self.radius);
        };

        IntersectionResult::Intersection(RayIntersection {
            t,
            pos: ray.at(t),
        })
    }

    fn normal(&self, p: Point) -> Vec3 {
        (p - self.center).normalize_or_self()
    }

    fn material(&self, _p: Point) -> Material {
        self.material
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::Sphere;
    use crate::{
        error::ConfigError,
        material::Material,
        math::point::Point,
        ray::Ray,
        shape::{IntersectionResult, Shape},
    };

    fn sphere(center: Point, radius: f32) -> Sphere {
        Sphere::new(center, radius, Material::white_plastic()).unwrap()
    }

    #[test]
    fn front_hit() {
        let r = 1.5;
        let sphere = sphere(Point::ORIGIN, r);
        let ray = Ray::new(Point::new(0.0, 0.0, -2.0 * r), Vec3::Z, 0);

        let result = sphere.intersect(&ray);
        assert!(result.signed_distance() <= 0.0);
        let hit = result.intersection().unwrap();
        assert!(hit.pos.vec().abs_diff_eq(Vec3::new(0.0, 0.0, -r), 1e-5));
        assert!((hit.t - r).abs() < 1e-5);
        assert!(sphere.normal(hit.pos).abs_diff_eq(Vec3::NEG_Z, 1e-5));
    }

    #[test]
    fn miss_when_line_is_too_far() {
        let sphere = sphere(Point::ORIGIN, 1.0);
        let ray = Ray::new(Point::new(0.0, 1.5, -5.0), Vec3::Z, 0);

        let result = sphere.intersect(&ray);
        assert!(!result.is_intersection());
        assert!(result.signed_distance() > 0.0);
        // 1.5² - 1²
        assert!((result.signed_distance() - 1.25).abs() < 1e-5);
    }

    #[test]
    fn inside_hits_the_exit_point() {
        let sphere = sphere(Point::new(1.0, 1.0, 1.0), 2.0);
        let ray = Ray::new(Point::new(1.0, 1.0, 1.5), Vec3::Z, 0);

        let hit = sphere.intersect(&ray).intersection().unwrap();
        assert!(hit.pos.vec().abs_diff_eq(Vec3::new(1.0, 1.0, 3.0), 1e-5));
        assert!(hit.t >= 0.0);
    }

    #[test]
    fn behind_the_ray_is_a_miss() {
        let sphere = sphere(Point::ORIGIN, 1.0);
        let ray = Ray::new(Point::new(0.0, 0.0, 3.0), Vec3::Z, 0);

        let result = sphere.intersect(&ray);
        assert!(!result.is_intersection());
        assert!(result.signed_distance() > 0.0);
    }

    #[test]
    fn tangent_ray_is_a_single_hit() {
        let sphere = sphere(Point::ORIGIN, 1.0);
        let ray = Ray::new(Point::new(0.0, 1.0, -4.0), Vec3::Z, 0);

        let hit = sphere.intersect(&ray).intersection().unwrap();
        assert!(hit.pos.vec().abs_diff_eq(Vec3::Y, 1e-4));
    }

    #[test]
    fn degenerate_normal_does_not_divide_by_zero() {
        let sphere = sphere(Point::new(2.0, 0.0, 0.0), 1.0);
        assert_eq!(sphere.normal(Point::new(2.0, 0.0, 0.0)), Vec3::ZERO);
    }

    #[test]
    fn localize_poles_and_equator() {
        let sphere = sphere(Point::new(0.0, 0.0, 1.0), 2.0);
        assert!(sphere
            .localize(90.0, 0.0)
            .vec()
            .abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1e-5));
        assert!(sphere
            .localize(0.0, 90.0)
            .vec()
            .abs_diff_eq(Vec3::new(0.0, 2.0, 1.0), 1e-5));
        let p = sphere.localize(-30.0, 123.0);
        assert!(((p - sphere.center).length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn rejects_bad_radius() {
        assert_eq!(
            Sphere::new(Point::ORIGIN, 0.0, Material::default()).unwrap_err(),
            ConfigError::InvalidRadius(0.0)
        );
        assert!(Sphere::new(Point::ORIGIN, -1.0, Material::default()).is_err());
        assert!(Sphere::new(Point::ORIGIN, f32::NAN, Material::default()).is_err());
    }
}
