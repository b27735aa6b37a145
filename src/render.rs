use crate::assets::ImageSlots;
use glam::DVec2;
use heart_core::{Surface, TextStyle};
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use web_sys as web;

/// [`Surface`] over the page's 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    size: DVec2,
    images: Rc<RefCell<ImageSlots>>,
}

impl CanvasSurface {
    pub fn new(
        canvas: &web::HtmlCanvasElement,
        ctx: web::CanvasRenderingContext2d,
        images: Rc<RefCell<ImageSlots>>,
    ) -> Self {
        Self {
            ctx,
            size: DVec2::new(canvas.width() as f64, canvas.height() as f64),
            images,
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.size.x, self.size.y);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_polyline(&mut self, points: &[DVec2], color: &str, width: f64) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: DVec2, style: TextStyle<'_>) {
        self.ctx.set_font(style.font);
        self.ctx.set_fill_style_str(style.color);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        _ = self.ctx.fill_text(text, at.x, at.y);
    }

    fn draw_image_centered(&mut self, slot: usize, center: DVec2, alpha: f64) {
        let images = self.images.borrow();
        let Some(img) = images.get(slot) else {
            return;
        };
        let w = img.natural_width() as f64;
        let h = img.natural_height() as f64;
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        _ = self
            .ctx
            .draw_image_with_html_image_element(img, center.x - w / 2.0, center.y - h / 2.0);
        self.ctx.restore();
    }
}
