use glam::{Vec2, Vec3};
use sonic_core::{Camera, NormalizedItem};
use web_sys as web;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the closest sphere hit along the ray, if any.
///
/// `spheres` yields `(center, radius)` pairs in node order.
pub fn pick_nearest(
    ray_origin: Vec3,
    ray_dir: Vec3,
    spheres: impl IntoIterator<Item = (Vec3, f32)>,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in spheres.into_iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Node under the canvas pixel `px` on a `width` x `height` surface.
///
/// The seed's pick sphere is `seed_multiplier` times larger.
pub fn pick_node_at(
    px: Vec2,
    width: f32,
    height: f32,
    nodes: &[NormalizedItem],
    radius: f32,
    seed_multiplier: f32,
) -> Option<usize> {
    let mut camera = Camera::default();
    camera.set_viewport(width, height);
    let (ro, rd) = camera.screen_to_world_ray(px.x, px.y, width, height);
    pick_nearest(
        ro,
        rd,
        nodes.iter().map(|n| {
            let r = if n.is_seed { radius * seed_multiplier } else { radius };
            (n.render_position, r)
        }),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    StopPlayback,
    /// Same as clicking the hovered node.
    ToggleHovered,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "Escape" | "s" | "S" => Some(KeyAction::StopPlayback),
        " " | "Enter" => Some(KeyAction::ToggleHovered),
        _ => None,
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
