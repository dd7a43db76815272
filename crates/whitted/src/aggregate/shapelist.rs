use crate::{counter, math::point::Point, ray::Ray, shape::Shape};

/// A plain list of shapes, queried by scanning every one of them.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Shape>>);

/// The shape nearest to the origin of a ray, among the ones it hits.
#[derive(Clone, Copy)]
pub struct ClosestHit<'a> {
    pub shape: &'a dyn Shape,
    pub pos: Point,
    /// Squared distance between the ray origin and `pos`
    pub distance_squared: f32,
}

impl std::fmt::Debug for ClosestHit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosestHit")
            .field("shape", &"<shape>")
            .field("pos", &self.pos)
            .field("distance_squared", &self.distance_squared)
            .finish()
    }
}

impl ShapeList {
    pub fn push<T: Shape + 'static>(&mut self, shape: T) {
        self.0.push(Box::new(shape))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Shape> {
        self.0.iter().map(|shape| shape.as_ref())
    }

    /// Scans every shape and keeps the hit point nearest to the ray origin.
    ///
    /// On equal distances the first shape in the list wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<ClosestHit<'_>> {
        counter!("Closest hit queries");

        let mut closest: Option<ClosestHit> = None;
        for shape in self.iter() {
            let Some(intersection) = shape.intersect(ray).intersection() else {
                continue;
            };

            let distance_squared = intersection.pos.distance_squared(ray.origin);
            if closest.map_or(true, |c| distance_squared < c.distance_squared) {
                closest = Some(ClosestHit {
                    shape,
                    pos: intersection.pos,
                    distance_squared,
                });
            }
        }
        closest
    }
}
