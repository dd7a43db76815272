use crate::{
    color::{self, Rgb},
    ray::Ray,
    renderer::Renderer,
};

use super::Integrator;

/// Direct lighting only: no shadow, no reflection, no refraction.
pub struct BasicIntegrator;

impl Integrator for BasicIntegrator {
    fn max_depth(&self) -> u32 {
        0
    }

    fn trace(&self, renderer: &Renderer, ray: Ray) -> Rgb {
        let Some(hit) = renderer.scene.ray_intersection(&ray) else {
            return renderer.background.color(&renderer.scene, &ray);
        };

        let material = hit.shape.material(hit.pos);
        let normal = hit.shape.normal(hit.pos);

        let mut color = color::BLACK;
        for light in renderer.scene.lights.iter() {
            let cos = light.direction(hit.pos).dot(normal).max(0.0);
            color += cos * material.diffuse * light.color(hit.pos);
        }

        color + material.ambient
    }
}
