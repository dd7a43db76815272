pub mod examples;

use crate::{
    aggregate::{ClosestHit, ShapeList},
    light::Light,
    ray::Ray,
    shape::Shape,
};

/// A collection of shapes and lights.
///
/// The scene owns everything inserted into it.
#[derive(Default)]
pub struct Scene {
    pub objects: ShapeList,
    pub lights: Vec<Box<dyn Light>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object in the scene
    pub fn insert_object<T: Shape + 'static>(&mut self, object: T) {
        self.objects.push(object)
    }

    /// Insert a light in the scene
    pub fn insert_light<T: Light + 'static>(&mut self, light: T) {
        self.lights.push(Box::new(light))
    }

    /// The object hit first by `ray`, with the hit point
    pub fn ray_intersection(&self, ray: &Ray) -> Option<ClosestHit<'_>> {
        self.objects.closest_hit(ray)
    }
}
