pub use glam::Vec3;

use crate::{color::Rgb, utils::log_once::warn_once};

use super::float::FloatAsExt;

pub trait RgbAsVec3Ext {
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb {
    fn vec(&self) -> Vec3 {
        Vec3::from_array(self.0)
    }
}

pub trait RefrReflVecExt {
    /// Refract `self` through a surface of outward `normal` separating a medium of
    /// index `ior_outside` from a medium of index `ior_inside`.
    ///
    /// Whether the vector enters or exits is given by the sign of `self.dot(normal)`.
    /// Returns None on total internal reflection.
    fn refract(self, normal: Vec3, ior_outside: f32, ior_inside: f32) -> Option<Vec3>;
    fn reflect(self, normal: Vec3) -> Vec3;
}

impl RefrReflVecExt for Vec3 {
    fn reflect(self, normal: Vec3) -> Vec3 {
        self - (2.0 * self.dot(normal) * normal)
    }

    fn refract(self, mut normal: Vec3, ior_outside: f32, ior_inside: f32) -> Option<Vec3> {
        let mut cosi = self.dot(normal);
        let (mut etai, mut etat) = (ior_outside, ior_inside);
        if cosi < 0.0 {
            cosi = -cosi;
        } else {
            // leaving the object
            (etat, etai) = (etai, etat);
            normal = -normal;
        }
        let eta = etai / etat;
        let k = 1. - eta * eta * (1. - cosi * cosi);

        if k < 0. {
            None
        } else {
            Some(eta * self + (eta * cosi - f32::sqrt(k)) * normal)
        }
    }
}

pub trait Vec3AsNonZero: Sized {
    fn into_non_zero(self, eps: f32) -> Option<Self>;
}

impl Vec3AsNonZero for Vec3 {
    fn into_non_zero(self, eps: f32) -> Option<Self> {
        self.length_squared().into_non_zero(eps * eps).and(Some(self))
    }
}

pub trait Vec3NormalizeExt {
    /// Normalize `self`, leaving a zero-length vector untouched
    fn normalize_or_self(self) -> Self;
}

impl Vec3NormalizeExt for Vec3 {
    fn normalize_or_self(self) -> Self {
        let l2 = self.length_squared();
        if l2 != 0.0 {
            self / l2.sqrt()
        } else {
            warn_once!("normalizing a zero-length vector, keeping it as is");
            self
        }
    }
}
