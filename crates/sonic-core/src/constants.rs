use glam::Vec3;

// Shared layout/interaction tuning constants used by both web and native frontends.

// Scene layout
pub const TARGET_RADIUS: f32 = 35.0; // max horizontal distance of a match from the seed
pub const ELEVATION: f32 = 1.5; // height of the layout plane

// Connection lines
pub const LINE_BASELINE_OPACITY: f32 = 0.2;
pub const LINE_EMPHASIS_OPACITY: f32 = 1.0;

// Visual sizing
pub const MATCH_SCALE: f32 = 1.0; // idle marker size
pub const HOVER_SCALE: f32 = 1.5; // hovered marker size
pub const SEED_SCALE: f32 = 2.0;

// Emissive intensity
pub const MATCH_EMISSIVE: f32 = 0.2;
pub const HOVER_EMISSIVE: f32 = 0.8;
pub const SEED_EMISSIVE: f32 = 0.6;

// Palette
pub const SEED_COLOR: [f32; 3] = [0.976, 0.451, 0.086]; // orange
pub const MATCH_COLOR: [f32; 3] = [0.133, 0.827, 0.933]; // cyan
pub const HOVER_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LINE_COLOR: [f32; 3] = [0.133, 0.827, 0.933];
pub const LINE_EMPHASIS_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

pub const SEED_LABEL: &str = "Input Signal";

// Playback
pub const PREVIEW_VOLUME: f32 = 0.5;
pub const NO_PREVIEW_NOTICE: &str = "No preview available for this track";
pub const PREVIEW_PATH_SEGMENT: &str = "songs";

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 1.6; // world-space radius of a match marker for picking

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 55.0, 60.0];

#[inline]
pub fn anchor_vec3() -> Vec3 {
    Vec3::new(0.0, ELEVATION, 0.0)
}
