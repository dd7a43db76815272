use glam::Vec3;

use crate::{
    error::ConfigError,
    math::{
        float::FloatAsExt,
        point::Point,
        vec::{Vec3AsNonZero, Vec3NormalizeExt},
    },
    ray::Ray,
};

/// The viewing frustum: an eye point and the directions of the rays going through the four image corners.
#[derive(Debug, Clone, Copy)]
pub struct ViewBox {
    pub origin: Point,
    /// (origin, origin + dir_ul) goes through the upper-left corner pixel, i.e. pixel (0, 0)
    pub dir_ul: Vec3,
    /// (origin, origin + dir_ur) goes through the upper-right corner pixel, i.e. pixel (width - 1, 0)
    pub dir_ur: Vec3,
    /// (origin, origin + dir_ll) goes through the lower-left corner pixel, i.e. pixel (0, height - 1)
    pub dir_ll: Vec3,
    /// (origin, origin + dir_lr) goes through the lower-right corner pixel
    pub dir_lr: Vec3,
}

impl ViewBox {
    /// Build the corner directions of a camera at `origin` looking at `target`.
    ///
    /// `vfov` is the vertical field of view in radians, `aspect_ratio` is width / height.
    pub fn look_at(origin: Point, target: Point, up: Vec3, vfov: f32, aspect_ratio: f32) -> Self {
        let forward = (target - origin).normalize_or_zero();
        let right = forward.cross(up).normalize_or_zero();
        let up = right.cross(forward);

        let half_height = f32::tan(vfov / 2.);
        let half_width = half_height * aspect_ratio;
        let vertical = half_height * up;
        let horizontal = half_width * right;

        Self {
            origin,
            dir_ul: forward + vertical - horizontal,
            dir_ur: forward + vertical + horizontal,
            dir_ll: forward - vertical - horizontal,
            dir_lr: forward - vertical + horizontal,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let corners = [
            ("upper-left", self.dir_ul),
            ("upper-right", self.dir_ur),
            ("lower-left", self.dir_ll),
            ("lower-right", self.dir_lr),
        ];
        for (corner, dir) in corners {
            let valid = dir
                .length_squared()
                .into_finite()
                .and_then(|l2| l2.into_non_zero(f32::EPSILON));
            if valid.is_none() {
                return Err(ConfigError::DegenerateViewDirection { corner });
            }
        }
        Ok(())
    }

    /// Directions of the left and right image edges, `ty` going from 0 at the top to 1 at the bottom
    fn edges(&self, ty: f32) -> (Vec3, Vec3) {
        (
            self.dir_ul.lerp(self.dir_ll, ty),
            self.dir_ur.lerp(self.dir_lr, ty),
        )
    }
}

/// A pinhole camera producing one ray per pixel.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub view_box: ViewBox,
    /// width of the image, in pixel
    pub width: u32,
    /// height of the image, in pixel
    pub height: u32,
}

impl Camera {
    pub fn new(view_box: ViewBox, width: u32, height: u32) -> Result<Self, ConfigError> {
        if width < 2 || height < 2 {
            return Err(ConfigError::InvalidResolution { width, height });
        }
        view_box.validate()?;

        let camera = Self {
            view_box,
            width,
            height,
        };
        for row in 0..height {
            let (left, right) = view_box.edges(camera.ty(row));
            let (Some(left), Some(right)) = (left.into_non_zero(1e-6), right.into_non_zero(1e-6))
            else {
                return Err(ConfigError::DegenerateViewBox { row });
            };
            if left.normalize().dot(right.normalize()) < -1.0 + 1e-6 {
                return Err(ConfigError::DegenerateViewBox { row });
            }
        }

        Ok(camera)
    }

    fn ty(&self, y: u32) -> f32 {
        y as f32 / (self.height - 1) as f32
    }

    /// Primary ray going through pixel `(x, y)`, `(0, 0)` being the top left corner.
    ///
    /// The direction is a bilinear interpolation of the four corner directions: down the left
    /// and right edges first, then across the normalized edge directions.
    pub fn ray(&self, x: u32, y: u32, depth: u32) -> Ray {
        let tx = x as f32 / (self.width - 1) as f32;
        let (dir_left, dir_right) = self.view_box.edges(self.ty(y));
        let direction = dir_left
            .normalize_or_self()
            .lerp(dir_right.normalize_or_self(), tx);

        Ray::new(self.view_box.origin, direction, depth)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{Camera, ViewBox};
    use crate::{error::ConfigError, math::point::Point};

    fn view_box() -> ViewBox {
        ViewBox::look_at(
            Point::new(0.0, -5.0, 0.0),
            Point::ORIGIN,
            Vec3::Z,
            f32::to_radians(90.),
            2.0,
        )
    }

    #[test]
    fn corners_and_center() {
        let camera = Camera::new(view_box(), 3, 3).unwrap();

        let center = camera.ray(1, 1, 4);
        assert!(center.direction.abs_diff_eq(Vec3::Y, 1e-5));
        assert_eq!(center.origin, Point::new(0.0, -5.0, 0.0));
        assert_eq!(center.depth, 4);

        // up left: up is +z, right is +x
        let ul = camera.ray(0, 0, 0).direction;
        assert!(ul.abs_diff_eq(Vec3::new(-2.0, 1.0, 1.0).normalize(), 1e-5));
        let lr = camera.ray(2, 2, 0).direction;
        assert!(lr.abs_diff_eq(Vec3::new(2.0, 1.0, -1.0).normalize(), 1e-5));
    }

    #[test]
    fn directions_are_unit() {
        let camera = Camera::new(view_box(), 7, 5).unwrap();
        for x in 0..7 {
            for y in 0..5 {
                assert!((camera.ray(x, y, 0).direction.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn invalid_configuration_fails_fast() {
        assert_eq!(
            Camera::new(view_box(), 1, 10).unwrap_err(),
            ConfigError::InvalidResolution {
                width: 1,
                height: 10
            }
        );
        assert!(Camera::new(view_box(), 10, 0).is_err());

        let degenerate = ViewBox {
            dir_lr: Vec3::ZERO,
            ..view_box()
        };
        assert_eq!(
            Camera::new(degenerate, 10, 10).unwrap_err(),
            ConfigError::DegenerateViewDirection {
                corner: "lower-right"
            }
        );

        let nan = ViewBox {
            dir_ul: Vec3::new(f32::NAN, 0.0, 1.0),
            ..view_box()
        };
        assert!(Camera::new(nan, 10, 10).is_err());
    }

    #[test]
    fn corners_are_interpolated_before_normalizing() {
        let view_box = ViewBox {
            origin: Point::ORIGIN,
            dir_ul: Vec3::new(0.0, 1.0, 1.0),
            dir_ur: Vec3::new(0.0, 1.0, 1.0),
            dir_ll: Vec3::new(0.0, -3.0, 3.0),
            dir_lr: Vec3::new(0.0, -3.0, 3.0),
        };
        let camera = Camera::new(view_box, 3, 3).unwrap();

        let center = camera.ray(1, 1, 0).direction;
        assert!(center.abs_diff_eq(Vec3::new(0.0, -1.0, 2.0).normalize(), 1e-5));
        let top = camera.ray(1, 0, 0).direction;
        assert!(top.abs_diff_eq(Vec3::new(0.0, 1.0, 1.0).normalize(), 1e-5));
    }

    #[test]
    fn folded_view_box_fails_fast() {
        let vertical = ViewBox {
            origin: Point::ORIGIN,
            dir_ul: Vec3::Y,
            dir_ur: Vec3::Y,
            dir_ll: Vec3::NEG_Y,
            dir_lr: Vec3::NEG_Y,
        };
        // the middle row would look nowhere
        assert_eq!(
            Camera::new(vertical, 3, 3).unwrap_err(),
            ConfigError::DegenerateViewBox { row: 1 }
        );
        let camera = Camera::new(vertical, 2, 2).unwrap();
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert!(camera.ray(x, y, 0).direction.is_finite());
        }

        let horizontal = ViewBox {
            origin: Point::ORIGIN,
            dir_ul: Vec3::NEG_X,
            dir_ur: Vec3::X,
            dir_ll: Vec3::NEG_X,
            dir_lr: Vec3::X,
        };
        assert_eq!(
            Camera::new(horizontal, 4, 4).unwrap_err(),
            ConfigError::DegenerateViewBox { row: 0 }
        );
    }
}
