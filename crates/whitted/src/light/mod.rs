//! Light sources. A light only needs to tell where it is seen from a point, and how bright it is there.

use glam::Vec3;

use crate::{
    color::Rgb,
    math::{point::Point, vec::Vec3NormalizeExt},
};

pub trait Light: Sync + Send {
    /// Unit direction from `p` toward the light
    fn direction(&self, p: Point) -> Vec3;

    /// Color and intensity of the light received at `p`, shadows not accounted for
    fn color(&self, p: Point) -> Rgb;
}

/// A light located at a point, emitting the same color in all directions
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Point,
    pub color: Rgb,
}

impl Light for PointLight {
    fn direction(&self, p: Point) -> Vec3 {
        (self.position - p).normalize_or_self()
    }

    fn color(&self, _p: Point) -> Rgb {
        self.color
    }
}

/// A light at infinity, like the sun
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    /// Direction pointing toward the light
    pub direction: Vec3,
    pub color: Rgb,
}

impl Light for DirectionalLight {
    fn direction(&self, _p: Point) -> Vec3 {
        self.direction.normalize_or_self()
    }

    fn color(&self, _p: Point) -> Rgb {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{DirectionalLight, Light, PointLight};
    use crate::{color, math::point::Point};

    #[test]
    fn point_light_direction() {
        let light = PointLight {
            position: Point::new(0.0, 0.0, 10.0),
            color: color::WHITE,
        };
        assert!(light
            .direction(Point::new(0.0, 0.0, 1.0))
            .abs_diff_eq(Vec3::Z, 1e-6));
        assert!(light
            .direction(Point::new(10.0, 0.0, 10.0))
            .abs_diff_eq(Vec3::NEG_X, 1e-6));
        assert_eq!(light.color(Point::ORIGIN), color::WHITE);
    }

    #[test]
    fn directional_light_is_uniform() {
        let light = DirectionalLight {
            direction: Vec3::new(0.0, 3.0, 4.0),
            color: color::RED,
        };
        let expected = Vec3::new(0.0, 0.6, 0.8);
        assert!(light.direction(Point::ORIGIN).abs_diff_eq(expected, 1e-6));
        assert!(light
            .direction(Point::new(-7.0, 2.0, 1.0))
            .abs_diff_eq(expected, 1e-6));
        assert_eq!(light.color(Point::ORIGIN), color::RED);
    }
}
