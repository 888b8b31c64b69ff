//! Canvas2D painter for a `RenderDescription`.
//!
//! Nodes are projected with the shared `Camera` and drawn back to front so
//! nearer markers overlap farther ones. Only the hovered node's tooltip is
//! drawn.

use crate::constants::*;
use crate::dom;
use sonic_core::{Camera, ConnectionDescriptor, NodeDescriptor, RenderDescription};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn css_rgba(rgb: [f32; 3], alpha: f32) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{:.3})",
        c(rgb[0]),
        c(rgb[1]),
        c(rgb[2]),
        alpha.clamp(0.0, 1.0)
    )
}

pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
    canvas: web::HtmlCanvasElement,
    camera: Camera,
}

impl Painter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        let mut camera = Camera::default();
        camera.set_viewport(canvas.width() as f32, canvas.height() as f32);
        Ok(Self {
            ctx,
            canvas,
            camera,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn paint(&mut self, desc: &RenderDescription) {
        let (w, h) = self.size();
        self.camera.set_viewport(w, h);
        let dpr = dom::device_pixel_ratio();

        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str(BACKGROUND_CSS);
        self.ctx.fill_rect(0.0, 0.0, f64::from(w), f64::from(h));

        for c in &desc.connections {
            self.draw_connection(c, w, h, dpr);
        }

        let mut projected: Vec<(&NodeDescriptor, f32, f32, f32)> = desc
            .nodes
            .iter()
            .filter_map(|n| {
                let (p, depth) = self.camera.world_to_screen(n.position, w, h)?;
                Some((n, p.x, p.y, depth))
            })
            .collect();
        // far to near
        projected.sort_by(|a, b| b.3.total_cmp(&a.3));

        for &(node, sx, sy, depth) in &projected {
            self.draw_node(node, sx, sy, depth, h);
        }
        for &(node, sx, sy, _) in projected.iter().filter(|p| p.0.tooltip_visible) {
            self.draw_tooltip(node, sx, sy, dpr);
        }
    }

    fn draw_connection(&self, c: &ConnectionDescriptor, w: f32, h: f32, dpr: f32) {
        let (Some((a, _)), Some((b, _))) = (
            self.camera.world_to_screen(c.from, w, h),
            self.camera.world_to_screen(c.to, w, h),
        ) else {
            return;
        };
        let width = if c.emphasized {
            LINE_EMPHASIS_WIDTH_PX
        } else {
            LINE_WIDTH_PX
        };
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_stroke_style_str(&css_rgba(c.color, c.opacity));
        self.ctx.set_line_width(f64::from(width * dpr));
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(a.x), f64::from(a.y));
        self.ctx.line_to(f64::from(b.x), f64::from(b.y));
        self.ctx.stroke();
    }

    fn draw_node(&self, node: &NodeDescriptor, sx: f32, sy: f32, depth: f32, h: f32) {
        let e = &node.emphasis;
        let radius = (MARKER_RADIUS_WORLD * e.scale * self.camera.pixels_per_unit(depth, h))
            .max(MARKER_MIN_PX);
        let color = css_rgba(e.color, 1.0);
        self.ctx.set_shadow_color(&color);
        self.ctx.set_shadow_blur(f64::from(GLOW_BLUR_PX * e.emissive));
        self.ctx.set_fill_style_str(&color);
        self.ctx.begin_path();
        self.ctx
            .arc(
                f64::from(sx),
                f64::from(sy),
                f64::from(radius),
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.fill();

        if node.playing {
            self.ctx.set_shadow_blur(0.0);
            self.ctx.set_stroke_style_str(&css_rgba(e.color, 0.8));
            self.ctx.set_line_width(2.0);
            self.ctx.begin_path();
            self.ctx
                .arc(
                    f64::from(sx),
                    f64::from(sy),
                    f64::from(radius * 1.8),
                    0.0,
                    std::f64::consts::TAU,
                )
                .ok();
            self.ctx.stroke();
        }
    }

    fn draw_tooltip(&self, node: &NodeDescriptor, sx: f32, sy: f32, dpr: f32) {
        let t = &node.tooltip;
        let mut lines: Vec<(&str, &str, &str)> =
            vec![(t.title.as_str(), TOOLTIP_FONT, TOOLTIP_TEXT_CSS)];
        if let Some(sub) = t.subtitle.as_deref() {
            lines.push((sub, TOOLTIP_SUB_FONT, TOOLTIP_TEXT_CSS));
        }
        let score_line = t.score.as_deref().map(|s| format!("{s} Similarity"));
        if let Some(s) = score_line.as_deref() {
            lines.push((s, TOOLTIP_SUB_FONT, TOOLTIP_SCORE_CSS));
        }

        let mut width = 0.0_f32;
        for (text, font, _) in &lines {
            self.ctx.set_font(font);
            if let Ok(m) = self.ctx.measure_text(text) {
                width = width.max(m.width() as f32);
            }
        }
        let pad = TOOLTIP_PADDING_PX;
        let line_h = TOOLTIP_LINE_PX;
        let box_w = width + pad * 2.0;
        let box_h = line_h * lines.len() as f32 + pad * 2.0;
        let x = sx - box_w * 0.5;
        let y = sy + TOOLTIP_OFFSET_PX * dpr;

        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str(TOOLTIP_BG_CSS);
        self.ctx
            .fill_rect(f64::from(x), f64::from(y), f64::from(box_w), f64::from(box_h));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("top");
        for (i, (text, font, css)) in lines.iter().enumerate() {
            self.ctx.set_font(font);
            self.ctx.set_fill_style_str(css);
            self.ctx
                .fill_text(text, f64::from(sx), f64::from(y + pad + line_h * i as f32))
                .ok();
        }
    }
}
