//! Heart outline, flower ring and caption.

use crate::constants::*;
use crate::geometry::scale_about;
use crate::surface::{Surface, TextStyle};
use glam::DVec2;
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Rotation and palette position shared by all flowers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowerState {
    pub rotation: f64,
    pub color_index: usize,
}

impl FlowerState {
    pub fn color(&self) -> &'static str {
        FLOWER_PALETTE[self.color_index % FLOWER_PALETTE.len()]
    }

    pub fn next_color(&mut self) {
        self.color_index = self.color_index.wrapping_add(1);
    }
}

/// Cursor for the segment-by-segment first draw of the outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutlineReveal {
    cursor: usize,
}

impl OutlineReveal {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reveal one more segment. Returns `false` once the cursor already sits
    /// on the last point, leaving it there.
    pub fn step(&mut self, point_count: usize) -> bool {
        if self.cursor + 1 < point_count {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn is_complete(&self, point_count: usize) -> bool {
        self.cursor + 1 >= point_count
    }
}

/// Full outline, scaled about `center` (1.0 draws the base shape).
pub fn draw_heart_outline<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[DVec2],
    center: DVec2,
    scale_factor: f64,
) {
    if points.len() < 2 {
        return;
    }
    let scaled: Vec<DVec2> = points
        .iter()
        .map(|&p| scale_about(p, center, scale_factor))
        .collect();
    surface.stroke_polyline(&scaled, OUTLINE_COLOR, OUTLINE_WIDTH);
}

/// Segments revealed so far: points `0..=cursor`.
pub fn draw_outline_progress<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[DVec2],
    reveal: &OutlineReveal,
) {
    let end = (reveal.cursor() + 1).min(points.len());
    if end < 2 {
        return;
    }
    surface.stroke_polyline(&points[..end], REVEAL_COLOR, REVEAL_WIDTH);
}

/// Petal offsets around a flower center for the given rotation.
pub fn petal_offsets(rotation: f64) -> SmallVec<[DVec2; PETAL_COUNT]> {
    let spin = DVec2::from_angle(rotation);
    (0..PETAL_COUNT)
        .map(|j| {
            let angle = j as f64 * TAU / PETAL_COUNT as f64;
            spin.rotate(PETAL_DISTANCE * DVec2::from_angle(angle))
        })
        .collect()
}

pub fn flower_centers(center: DVec2) -> impl Iterator<Item = DVec2> {
    (0..FLOWER_COUNT).map(move |i| {
        center + DVec2::new(FLOWER_X_OFFSET + i as f64 * FLOWER_SPACING, FLOWER_Y_OFFSET)
    })
}

/// Draw the flower ring and advance its spin.
pub fn draw_flowers<S: Surface + ?Sized>(surface: &mut S, center: DVec2, state: &mut FlowerState) {
    let color = state.color();
    let petals = petal_offsets(state.rotation);
    for origin in flower_centers(center) {
        surface.fill_circle(origin, FLOWER_CENTER_RADIUS, color);
        for offset in &petals {
            surface.fill_circle(origin + *offset, PETAL_RADIUS, color);
        }
    }
    state.rotation += FLOWER_SPIN_PER_DRAW;
}

pub fn draw_caption<S: Surface + ?Sized>(surface: &mut S, center: DVec2, text: &str) {
    surface.fill_text(
        text,
        center,
        TextStyle {
            font: CAPTION_FONT,
            color: CAPTION_COLOR,
        },
    );
}
