use crate::{
    color::{self, Rgb},
    counter,
    material::Material,
    math::{
        point::Point,
        vec::{RefrReflVecExt, Vec3},
    },
    ray::Ray,
    renderer::Renderer,
};

use super::Integrator;

/// Offset applied along secondary rays to avoid hitting the surface they start from
const SECONDARY_RAY_OFFSET: f32 = 1e-3;
/// Distance walked past an occluder before looking for the next one
const SHADOW_STEP: f32 = 1e-3;
/// Below this, a light is considered fully shadowed
const SHADOW_THRESHOLD: f32 = 0.003;

/// Recursive ray tracer: reflection, refraction, Phong shading and colored shadows.
pub struct WhittedIntegrator {
    pub max_depth: u32,
}

impl Integrator for WhittedIntegrator {
    fn max_depth(&self) -> u32 {
        self.max_depth
    }

    fn trace(&self, renderer: &Renderer, ray: Ray) -> Rgb {
        let Some(hit) = renderer.scene.ray_intersection(&ray) else {
            return renderer.background.color(&renderer.scene, &ray);
        };

        let material = hit.shape.material(hit.pos);
        let normal = hit.shape.normal(hit.pos);
        let mut color = color::BLACK;

        if ray.depth > 0 && material.reflection > 0.0 {
            counter!("Reflected rays");
            let reflected = ray.direction.reflect(normal);
            let reflected_ray = ray.child(hit.pos, reflected, SECONDARY_RAY_OFFSET);

            color += material.reflection * material.specular * self.trace(renderer, reflected_ray);
        }

        if ray.depth > 0 && material.refraction > 0.0 {
            counter!("Refracted rays");
            let transmitted = ray
                .direction
                .refract(
                    normal,
                    material.out_refractive_index,
                    material.in_refractive_index,
                )
                .unwrap_or_else(|| ray.direction.reflect(normal));
            let transmitted_ray = ray.child(hit.pos, transmitted, SECONDARY_RAY_OFFSET);

            color += material.refraction * material.diffuse * self.trace(renderer, transmitted_ray);
        }

        let local = self.local_illumination(renderer, &ray, hit.pos, normal, &material);
        if ray.depth == self.max_depth {
            color += local;
        } else {
            color += material.diffusion() * local;
        }

        color
    }
}

impl WhittedIntegrator {
    /// Phong diffuse and specular terms of every light, each attenuated by its shadow, plus ambient.
    fn local_illumination(
        &self,
        renderer: &Renderer,
        ray: &Ray,
        pos: Point,
        normal: Vec3,
        material: &Material,
    ) -> Rgb {
        let view_reflected = ray.direction.reflect(normal);
        let mut color = color::BLACK;

        for light in renderer.scene.lights.iter() {
            let light_dir = light.direction(pos);
            let light_color = light.color(pos);

            let mut lit = light_dir.dot(normal).max(0.0) * material.diffuse * light_color;
            let cos_specular = light_dir.dot(view_reflected);
            if cos_specular >= 0.0 {
                lit += cos_specular.powf(material.shininess) * material.specular * light_color;
            }

            color += lit * self.shadow(renderer, pos, light_dir, light_color);
        }

        color + material.ambient
    }

    /// What is left of `light_color` after crossing every occluder between `pos` and the light.
    ///
    /// Opaque occluders stop the light, transmissive ones tint it by their diffuse color.
    fn shadow(
        &self,
        renderer: &Renderer,
        pos: Point,
        light_dir: Vec3,
        light_color: Rgb,
    ) -> Rgb {
        let mut attenuated = light_color;
        let mut pos = pos;

        while attenuated.max() >= SHADOW_THRESHOLD {
            counter!("Shadow steps");
            let shadow_ray = Ray::new(pos + SHADOW_STEP * light_dir, light_dir, 0);
            let Some(occluder) = renderer.scene.ray_intersection(&shadow_ray) else {
                break;
            };

            let occluder_material = occluder.shape.material(occluder.pos);
            attenuated *= occluder_material.refraction * occluder_material.diffuse;
            pos = occluder.pos;
        }

        attenuated
    }
}
