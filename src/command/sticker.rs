use egui::Color32;

use crate::canvas::{DrawingContext, Point};

/// A glyph placed on the canvas. Dragging replaces its position.
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPlacement {
    position: Point,
    glyph: String,
    size: f32,
}

impl StickerPlacement {
    pub fn new(position: Point, glyph: impl Into<String>, size: f32) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            size,
        }
    }

    pub fn move_to(&mut self, point: Point) {
        self.position = point;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn render<C: DrawingContext + ?Sized>(&self, ctx: &mut C) {
        ctx.fill_text(&self.glyph, self.position, self.size, Color32::BLACK);
    }
}
