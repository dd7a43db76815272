//! Contains the objects that are meant to be renderered:
//! - Spheres
//! - Periodic planes
//!
//! Every shape answers where a ray first hits it, and what the surface looks like
//! (normal and material) at a given point of its surface.

pub mod plane;
pub mod sphere;

pub use plane::PeriodicPlane;
pub use sphere::Sphere;

use glam::Vec3;

use crate::{material::Material, math::point::Point, ray::Ray};

/// An abstracted shape to be rendered by raytracing.
///
/// To render a shape we only need to know whether a ray intersect it and if so,
/// some information about the shape at the intersection point
pub trait Shape: Sync + Send {
    /// Check whether `ray` intersect the shape defined by `self`.
    ///
    /// When it does, the reported point is the first one at a non-negative distance along the ray.
    fn intersect(&self, ray: &Ray) -> IntersectionResult;

    /// Outward unit normal at `p`, `p` being on the surface
    fn normal(&self, p: Point) -> Vec3;

    /// Material at `p`, `p` being on the surface
    fn material(&self, p: Point) -> Material;
}

/// Holds the point and the time of a colision between a ray and a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayIntersection {
    pub t: f32,
    pub pos: Point,
}

/// A `Result`-like type that takes care of intersections data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionResult {
    Intersection(RayIntersection),
    /// `miss_distance` is strictly positive and grows as the ray passes further from the shape.
    /// It is only a heuristic.
    NoIntersection { miss_distance: f32 },
}

impl IntersectionResult {
    pub fn miss(miss_distance: f32) -> Self {
        Self::NoIntersection {
            miss_distance: miss_distance.max(f32::MIN_POSITIVE),
        }
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }

    /// Negative or zero when there is a hit, strictly positive otherwise
    pub fn signed_distance(&self) -> f32 {
        match self {
            Self::Intersection(RayIntersection { t, .. }) => -t * t,
            Self::NoIntersection { miss_distance } => *miss_distance,
        }
    }

    pub fn intersection(self) -> Option<RayIntersection> {
        match self {
            Self::Intersection(i) => Some(i),
            Self::NoIntersection { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IntersectionResult, RayIntersection};
    use crate::math::point::Point;

    #[test]
    fn signed_distance_sign() {
        let hit = IntersectionResult::Intersection(RayIntersection {
            t: 2.0,
            pos: Point::ORIGIN,
        });
        assert!(hit.signed_distance() <= 0.0);

        let grazing = IntersectionResult::Intersection(RayIntersection {
            t: 0.0,
            pos: Point::ORIGIN,
        });
        assert!(grazing.signed_distance() <= 0.0);

        assert!(IntersectionResult::miss(0.0).signed_distance() > 0.0);
        assert!(IntersectionResult::miss(-3.0).signed_distance() > 0.0);
        assert_eq!(IntersectionResult::miss(4.0).signed_distance(), 4.0);
        assert_eq!(IntersectionResult::miss(4.0).intersection(), None);
    }
}
