use image::Rgb32FImage;

use crate::{
    background::Background,
    camera::Camera,
    color::Rgb,
    integrators::Integrator,
    ray::Ray,
    scene::Scene,
    utils::log_once::error_once,
};

/// Everything needed to turn a scene into an image.
///
/// The background is owned for the whole lifetime of the renderer.
pub struct Renderer {
    pub scene: Scene,
    pub camera: Camera,
    pub background: Box<dyn Background>,
    pub integrator: Box<dyn Integrator>,
}

impl Renderer {
    pub fn new(
        scene: Scene,
        camera: Camera,
        background: Box<dyn Background>,
        integrator: Box<dyn Integrator>,
    ) -> Self {
        Self {
            scene,
            camera,
            background,
            integrator,
        }
    }

    /// Color seen along `ray`, unclamped
    pub fn trace(&self, ray: Ray) -> Rgb {
        self.integrator.trace(self, ray)
    }

    /// Clamped color of the pixel `(x, y)`, `(0, 0)` being the top left corner
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let ray = self.camera.ray(x, y, self.integrator.max_depth());
        let color = self.trace(ray);

        if color.0.iter().any(|c| !c.is_finite()) {
            error_once!("non finite color {:?} at pixel ({}, {})", color, x, y);
        }

        color.clamp()
    }

    /// Render every pixel, row by row from the top.
    ///
    /// `progress` is called after each scanline with the fraction of the image done.
    pub fn render(&self, mut progress: impl FnMut(f32)) -> Rgb32FImage {
        let Camera { width, height, .. } = self.camera;
        log::info!(
            "rendering {}x{} pixels, {} objects, {} lights",
            width,
            height,
            self.scene.objects.len(),
            self.scene.lights.len()
        );
        if self.scene.objects.is_empty() {
            log::warn!("the scene has no object, only the background will be visible");
        }

        let mut image = Rgb32FImage::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.put_pixel(x, y, self.pixel(x, y).into());
            }

            log::trace!("scanline {} done", y);
            progress((y + 1) as f32 / height as f32);
        }

        log::info!("rendering done");
        image
    }
}
