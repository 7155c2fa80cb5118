use egui::Color32;

use crate::canvas::{DrawingContext, Point};

/// Outline width of the marker ring
pub const RING_WIDTH: f32 = 1.0;

/// Translucent tint used for the ghost sticker
pub const GHOST_COLOR: Color32 = Color32::from_rgba_premultiplied(96, 96, 96, 96);

/// Hint of what the next pointer-down would draw, following the cursor.
/// Never part of the history.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Marker tools show a ring as wide as the stroke would be
    Ring {
        center: Point,
        radius: f32,
        color: Color32,
    },
    /// Sticker tools show a faded copy of the glyph
    Ghost {
        center: Point,
        glyph: String,
        size: f32,
    },
}

impl Preview {
    pub fn center(&self) -> Point {
        match self {
            Preview::Ring { center, .. } | Preview::Ghost { center, .. } => *center,
        }
    }

    pub fn render<C: DrawingContext + ?Sized>(&self, ctx: &mut C) {
        match self {
            Preview::Ring {
                center,
                radius,
                color,
            } => ctx.stroke_circle(*center, *radius, RING_WIDTH, *color),
            Preview::Ghost { center, glyph, size } => {
                ctx.fill_text(glyph, *center, *size, GHOST_COLOR)
            }
        }
    }
}
