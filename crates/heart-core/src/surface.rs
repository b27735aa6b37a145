//! Drawing boundary between the show and whatever paints pixels.
//!
//! The browser front-end implements [`Surface`] over a 2D canvas context;
//! [`RecordingSurface`] keeps the calls in memory for headless runs.

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle<'a> {
    pub font: &'a str,
    pub color: &'a str,
}

pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str);
    /// Stroke consecutive points as one path of line segments.
    fn stroke_polyline(&mut self, points: &[DVec2], color: &str, width: f64);
    /// Text centered horizontally and vertically on `at`.
    fn fill_text(&mut self, text: &str, at: DVec2, style: TextStyle<'_>);
    /// Blit image `slot` centered on `center`. Slots that are not loaded are
    /// skipped without error.
    fn draw_image_centered(&mut self, slot: usize, center: DVec2, alpha: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Circle {
        center: DVec2,
        radius: f64,
        color: String,
    },
    Polyline {
        points: Vec<DVec2>,
        color: String,
        width: f64,
    },
    Text {
        text: String,
        at: DVec2,
        font: String,
        color: String,
    },
    Image {
        slot: usize,
        center: DVec2,
        alpha: f64,
    },
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: DVec2,
    loaded: Vec<bool>,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Surface where every image slot counts as loaded. Recorded coordinates
    /// are never clipped to the size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            loaded: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Only the slots flagged `true` are drawable.
    pub fn with_loaded_images(mut self, loaded: Vec<bool>) -> Self {
        self.loaded = loaded;
        self
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Ops since the most recent clear.
    pub fn last_frame(&self) -> &[DrawOp] {
        match self.ops.iter().rposition(|op| *op == DrawOp::Clear) {
            Some(i) => &self.ops[i + 1..],
            None => &self.ops,
        }
    }

    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Clear).count()
    }

    fn image_loaded(&self, slot: usize) -> bool {
        self.loaded.is_empty() || self.loaded.get(slot).copied().unwrap_or(false)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: &str) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn stroke_polyline(&mut self, points: &[DVec2], color: &str, width: f64) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            color: color.to_string(),
            width,
        });
    }

    fn fill_text(&mut self, text: &str, at: DVec2, style: TextStyle<'_>) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            font: style.font.to_string(),
            color: style.color.to_string(),
        });
    }

    fn draw_image_centered(&mut self, slot: usize, center: DVec2, alpha: f64) {
        if !self.image_loaded(slot) {
            return;
        }
        self.ops.push(DrawOp::Image {
            slot,
            center,
            alpha,
        });
    }
}
