use glam::Vec3;

use crate::{
    error::ConfigError,
    material::Material,
    math::{float::fract_floor, point::Point, vec::Vec3AsNonZero},
    ray::Ray,
};

use super::{IntersectionResult, RayIntersection, Shape};

/// An infinite plane going through `origin`, tangent to `u` and `v`.
///
/// The plane is striped: a point whose coordinates `(x, y)` in the `(u, v)` frame have
/// a fractional part below `band_width` gets `band_material`, every other point gets `main_material`.
#[derive(Debug, Clone)]
pub struct PeriodicPlane {
    pub origin: Point,
    pub u: Vec3,
    pub v: Vec3,
    pub main_material: Material,
    pub band_material: Material,
    pub band_width: f32,
    normal: Vec3,
}

impl PeriodicPlane {
    pub fn new(
        origin: Point,
        u: Vec3,
        v: Vec3,
        main_material: Material,
        band_material: Material,
        band_width: f32,
    ) -> Result<Self, ConfigError> {
        let normal = u
            .cross(v)
            .into_non_zero(1e-6)
            .ok_or(ConfigError::DegeneratePlane)?
            .normalize();
        Ok(Self {
            origin,
            u,
            v,
            main_material,
            band_material,
            band_width,
            normal,
        })
    }

    /// Coordinates `(x, y)` such that `p = origin + x * u + y * v`, for `p` on the plane
    pub fn coordinates(&self, p: Point) -> (f32, f32) {
        let w = p - self.origin;
        let (uu, uv, vv) = (self.u.dot(self.u), self.u.dot(self.v), self.v.dot(self.v));
        let (wu, wv) = (w.dot(self.u), w.dot(self.v));
        // u and v are not colinear, thus the determinant is not 0
        let det = uu * vv - uv * uv;
        ((wu * vv - wv * uv) / det, (wv * uu - wu * uv) / det)
    }
}

impl Shape for PeriodicPlane {
    fn intersect(&self, ray: &Ray) -> IntersectionResult {
        let height = (ray.origin - self.origin).dot(self.normal);
        let speed = ray.direction.dot(self.normal);

        // Parallel to the plane
        if speed.abs() < 1e-6 {
            return IntersectionResult::miss(height.abs());
        }

        let t = -height / speed;
        if t < 0.0 {
            return IntersectionResult::miss(height.abs());
        }

        IntersectionResult::Intersection(RayIntersection {
            t,
            pos: ray.at(t),
        })
    }

    fn normal(&self, _p: Point) -> Vec3 {
        self.normal
    }

    fn material(&self, p: Point) -> Material {
        let (x, y) = self.coordinates(p);
        if fract_floor(x) < self.band_width || fract_floor(y) < self.band_width {
            self.band_material
        } else {
            self.main_material
        }
    }
}
