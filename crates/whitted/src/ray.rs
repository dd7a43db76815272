use crate::{
    math::{
        point::Point,
        vec::{Vec3, Vec3NormalizeExt},
    },
    utils::log_once::warn_once,
};

/// A half line starting at `origin`, carrying the number of secondary bounces it may still spawn.
///
/// Rays are never mutated once built, child rays (reflected, refracted, shadow) are new values.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    /// Unit length, except for a degenerate zero direction
    pub direction: Vec3,
    /// Remaining recursion depth, a ray of depth 0 spawns no reflected or refracted ray
    pub depth: u32,
}

impl Ray {
    pub fn new(origin: Point, direction: Vec3, depth: u32) -> Self {
        if direction == Vec3::ZERO {
            warn_once!("a ray has been built with a zero-length direction");
        }
        Self {
            origin,
            direction: direction.normalize_or_self(),
            depth,
        }
    }

    /// A ray of depth `self.depth - 1` starting at `origin`, offset by `eps` along `direction`
    pub fn child(&self, origin: Point, direction: Vec3, eps: f32) -> Self {
        let direction = direction.normalize_or_self();
        Self::new(
            origin + eps * direction,
            direction,
            self.depth.saturating_sub(1),
        )
    }

    pub fn at(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::math::point::Point;

    use super::Ray;

    #[test]
    fn ray() {
        let eps = 0.01;
        let ray = Ray::new(Point::new(1., 0., 0.), Vec3::new(-1., 1., 0.), 3);

        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!(ray.at(0.0).distance_squared(ray.origin) < eps);
        assert!(ray.at(1.0).vec().distance_squared(ray.origin.vec() + ray.direction) < eps);
    }

    #[test]
    fn child_ray() {
        let ray = Ray::new(Point::ORIGIN, Vec3::X, 2);
        let child = ray.child(Point::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0), 0.5);

        assert_eq!(child.depth, 1);
        assert_eq!(child.direction, Vec3::Y);
        assert_eq!(child.origin, Point::new(1.0, 0.5, 0.0));
        // the parent is untouched
        assert_eq!(ray.depth, 2);

        let terminal = Ray::new(Point::ORIGIN, Vec3::X, 0).child(Point::ORIGIN, Vec3::X, 0.0);
        assert_eq!(terminal.depth, 0);
    }

    #[test]
    fn zero_direction_is_kept() {
        let ray = Ray::new(Point::ORIGIN, Vec3::ZERO, 1);
        assert_eq!(ray.direction, Vec3::ZERO);
    }
}
