use crate::flight_control::CameraRig;
use nalgebra::{Vector2, Vector3};

/// Screen area and perspective projection of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    /// Vertical field of view in degrees.
    fov_y: f64,
    near: f64,
    far: f64,
}

impl Viewport {
    pub const DEFAULT_FOV_Y: f64 = 75.0;
    pub const DEFAULT_NEAR: f64 = 0.1;
    pub const DEFAULT_FAR: f64 = 2000.0;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            fov_y: Self::DEFAULT_FOV_Y,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
        }
    }

    pub fn size(&self) -> (u32, u32) { (self.width, self.height) }
    pub fn fov_y(&self) -> f64 { self.fov_y }
    pub fn near(&self) -> f64 { self.near }
    pub fn far(&self) -> f64 { self.far }

    pub fn aspect(&self) -> f64 { f64::from(self.width) / f64::from(self.height) }

    /// Applies a new window size. Zero sizes are raised to one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Pixel coordinates (origin top-left) to normalized device coordinates in `[-1, 1]`.
    pub fn to_ndc(&self, px: f64, py: f64) -> Vector2<f64> {
        Vector2::new(
            px / f64::from(self.width) * 2.0 - 1.0,
            -(py / f64::from(self.height)) * 2.0 + 1.0,
        )
    }

    /// Normalized device coordinates back to pixel coordinates.
    pub fn to_pixels(&self, ndc: &Vector2<f64>) -> (f64, f64) {
        (
            (ndc.x + 1.0) / 2.0 * f64::from(self.width),
            (1.0 - ndc.y) / 2.0 * f64::from(self.height),
        )
    }

    /// World-space direction of the ray through `ndc`, as seen by `camera`.
    pub fn ray_direction(&self, camera: &CameraRig, ndc: &Vector2<f64>) -> Vector3<f64> {
        let half_h = (self.fov_y.to_radians() / 2.0).tan();
        let local = Vector3::new(ndc.x * half_h * self.aspect(), ndc.y * half_h, -1.0);
        (camera.orientation() * local).normalize()
    }

    /// Pixel position of a world point.
    ///
    /// # Returns
    /// - `None` if the point lies outside the near/far range in front of the camera.
    pub fn project(&self, camera: &CameraRig, world: &Vector3<f64>) -> Option<(f64, f64)> {
        let local = camera.orientation().inverse() * (world - camera.position());
        let depth = -local.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let half_h = (self.fov_y.to_radians() / 2.0).tan();
        let ndc = Vector2::new(local.x / (depth * half_h * self.aspect()), local.y / (depth * half_h));
        Some(self.to_pixels(&ndc))
    }

    /// Whether a pixel position lies on screen.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        (0.0..=f64::from(self.width)).contains(&px) && (0.0..=f64::from(self.height)).contains(&py)
    }
}
