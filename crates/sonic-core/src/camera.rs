//! Camera shared by the front-ends.
//!
//! Free of platform APIs so both web and native can use it for projecting
//! nodes to the surface and for turning pointer positions into picking rays.

use crate::constants::{anchor_vec3, CAMERA_EYE};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_EYE),
            target: anchor_vec3(),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 500.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Project a world point to pixel coordinates. Returns the pixel position
    /// and the view depth, or `None` for points behind the camera.
    pub fn world_to_screen(&self, p: Vec3, width: f32, height: f32) -> Option<(Vec2, f32)> {
        let clip = self.view_proj() * p.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let sx = (ndc.x + 1.0) * 0.5 * width;
        let sy = (1.0 - ndc.y) * 0.5 * height;
        Some((Vec2::new(sx, sy), clip.w))
    }

    /// Compute a world-space ray from pixel coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)` in world space.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }

    /// Pixel size of a world-space length at distance `depth`.
    pub fn pixels_per_unit(&self, depth: f32, height: f32) -> f32 {
        let half = (self.fovy_radians * 0.5).tan();
        height / (2.0 * half * depth.max(self.znear))
    }
}
