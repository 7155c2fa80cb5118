mod history;
mod line_stroke;
mod sticker;

use crate::canvas::{DrawingContext, Point};

pub use history::CommandHistory;
pub use line_stroke::LineStroke;
pub use sticker::StickerPlacement;

/// A recorded drawing action that can be replayed onto a canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A freehand marker stroke
    LineStroke(LineStroke),
    /// A sticker glyph placed (and possibly dragged) on the canvas
    Sticker(StickerPlacement),
}

impl Command {
    /// Draw this command's current state
    pub fn render<C: DrawingContext + ?Sized>(&self, ctx: &mut C) {
        match self {
            Command::LineStroke(stroke) => stroke.render(ctx),
            Command::Sticker(sticker) => sticker.render(ctx),
        }
    }

    /// Apply a pointer drag to this command.
    ///
    /// Strokes grow by one point; stickers jump to the new position.
    pub fn drag_to(&mut self, point: Point) {
        match self {
            Command::LineStroke(stroke) => stroke.extend(point),
            Command::Sticker(sticker) => sticker.move_to(point),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::LineStroke(_) => "Line Stroke",
            Command::Sticker(_) => "Sticker",
        }
    }
}

impl From<LineStroke> for Command {
    fn from(stroke: LineStroke) -> Self {
        Command::LineStroke(stroke)
    }
}

impl From<StickerPlacement> for Command {
    fn from(sticker: StickerPlacement) -> Self {
        Command::Sticker(sticker)
    }
}
