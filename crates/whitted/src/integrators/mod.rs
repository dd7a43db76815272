use crate::{color::Rgb, ray::Ray, renderer::Renderer};

mod basic;
mod whitted;

pub trait Integrator: Send + Sync {
    /// Depth given to primary rays
    fn max_depth(&self) -> u32;

    /// Color seen along `ray`, unclamped
    fn trace(&self, renderer: &Renderer, ray: Ray) -> Rgb;
}

pub use basic::BasicIntegrator;
pub use whitted::WhittedIntegrator;
