use super::viewport::Viewport;
use crate::catalog::{StarCatalog, StarEntity};
use crate::flight_control::CameraRig;
use nalgebra::{Vector2, Vector3};
use std::sync::Arc;

/// Resolves a viewport position to at most one star.
pub trait PickingService {
    fn pick(&self, camera: &CameraRig, viewport: &Viewport, ndc: Vector2<f64>) -> Option<Arc<StarEntity>>;
}

/// Ray caster hitting stars by their display spheres.
#[derive(Debug, Clone)]
pub struct RayPicker {
    catalog: Arc<StarCatalog>,
}

impl RayPicker {
    pub fn new(catalog: Arc<StarCatalog>) -> Self { Self { catalog } }

    pub fn catalog(&self) -> &Arc<StarCatalog> { &self.catalog }

    /// Distance along a normalized ray to its first hit with a sphere.
    fn intersect_sphere(
        origin: &Vector3<f64>,
        dir: &Vector3<f64>,
        center: &Vector3<f64>,
        radius: f64,
    ) -> Option<f64> {
        let oc = origin - center;
        let b = oc.dot(dir);
        let c = oc.norm_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let near = -b - sqrt_disc;
        let far = -b + sqrt_disc;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            // origin inside the sphere
            Some(far)
        } else {
            None
        }
    }
}

impl PickingService for RayPicker {
    fn pick(&self, camera: &CameraRig, viewport: &Viewport, ndc: Vector2<f64>) -> Option<Arc<StarEntity>> {
        let origin = camera.position();
        let dir = viewport.ray_direction(camera, &ndc);
        self.catalog
            .iter()
            .filter_map(|star| {
                Self::intersect_sphere(&origin, &dir, &star.position(), star.display_radius())
                    .filter(|d| (viewport.near()..=viewport.far()).contains(d))
                    .map(|d| (d, star))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, star)| Arc::clone(star))
    }
}
