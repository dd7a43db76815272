//! Surface description used by the Phong-like local illumination model.

use crate::color::Rgb;

/// How a surface reacts to light.
///
/// Energy conservation between the diffuse, reflected and refracted parts is not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Added once per shading point, independent of lights and shadows
    pub ambient: Rgb,
    pub diffuse: Rgb,
    pub specular: Rgb,
    /// Exponent of the specular lobe, the higher the sharper
    pub shininess: f32,
    /// 0 is no reflection, 1 is a perfect mirror
    pub reflection: f32,
    /// 0 is opaque, transmissive otherwise
    pub refraction: f32,
    /// Refractive index inside the object
    pub in_refractive_index: f32,
    /// Refractive index outside the object
    pub out_refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Rgb::gray(0.0),
            diffuse: Rgb::gray(0.0),
            specular: Rgb::gray(0.0),
            shininess: 1.0,
            reflection: 0.0,
            refraction: 0.0,
            in_refractive_index: 1.0,
            out_refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Weight of the local illumination for secondary rays
    pub fn diffusion(&self) -> f32 {
        (1.0 - self.reflection - self.refraction).max(0.0)
    }

    /// Linear interpolation between `a` (`t = 0`) and `b` (`t = 1`)
    pub fn mix(t: f32, a: &Material, b: &Material) -> Material {
        let lerp = |x: f32, y: f32| (1.0 - t) * x + t * y;
        Material {
            ambient: a.ambient.lerp(b.ambient, t),
            diffuse: a.diffuse.lerp(b.diffuse, t),
            specular: a.specular.lerp(b.specular, t),
            shininess: lerp(a.shininess, b.shininess),
            reflection: lerp(a.reflection, b.reflection),
            refraction: lerp(a.refraction, b.refraction),
            in_refractive_index: lerp(a.in_refractive_index, b.in_refractive_index),
            out_refractive_index: lerp(a.out_refractive_index, b.out_refractive_index),
        }
    }

    pub fn white_plastic() -> Self {
        Self {
            ambient: Rgb::gray(0.1),
            diffuse: Rgb::gray(0.7),
            specular: Rgb::gray(1.0),
            shininess: 5.0,
            ..Default::default()
        }
    }

    pub fn red_plastic() -> Self {
        Self {
            ambient: Rgb::from_array([0.1, 0.0, 0.0]),
            diffuse: Rgb::from_array([0.85, 0.05, 0.05]),
            specular: Rgb::gray(1.0),
            shininess: 5.0,
            ..Default::default()
        }
    }

    pub fn glass() -> Self {
        Self {
            ambient: Rgb::gray(0.0),
            diffuse: Rgb::gray(0.95),
            specular: Rgb::gray(1.0),
            shininess: 80.0,
            reflection: 0.02,
            refraction: 0.98,
            in_refractive_index: 1.5,
            out_refractive_index: 1.0,
        }
    }

    pub fn mirror() -> Self {
        Self {
            ambient: Rgb::gray(0.0),
            diffuse: Rgb::gray(0.0),
            specular: Rgb::gray(1.0),
            shininess: 80.0,
            reflection: 0.98,
            ..Default::default()
        }
    }

    pub fn bronze() -> Self {
        Self {
            ambient: Rgb::from_array([0.1, 0.1, 0.0]),
            diffuse: Rgb::from_array([0.8, 0.6, 0.0]),
            specular: Rgb::from_array([1.0, 1.0, 0.98]),
            shininess: 100.0,
            reflection: 0.5,
            ..Default::default()
        }
    }

    pub fn emerald() -> Self {
        Self {
            ambient: Rgb::from_array([0.0, 0.1, 0.0]),
            diffuse: Rgb::from_array([0.2, 1.0, 0.2]),
            specular: Rgb::gray(0.9),
            shininess: 20.0,
            reflection: 0.2,
            refraction: 0.4,
            in_refractive_index: 1.5,
            out_refractive_index: 1.0,
        }
    }

    pub fn black_matter() -> Self {
        Self {
            ambient: Rgb::gray(0.0),
            diffuse: Rgb::gray(0.01),
            specular: Rgb::gray(0.1),
            shininess: 5.0,
            ..Default::default()
        }
    }
}
