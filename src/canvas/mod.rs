use egui::{Color32, Pos2, Rect};

mod painter;
mod recording;

pub use painter::PainterContext;
pub use recording::{DrawOp, RecordingContext};

/// A position in canvas space.
pub type Point = Pos2;

/// The primitive 2D operations commands and previews draw with.
///
/// Coordinates are always in canvas space; implementations map them onto
/// whatever surface they wrap.
pub trait DrawingContext {
    /// Wipe a rectangular region back to the background.
    fn clear(&mut self, rect: Rect);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    fn move_to(&mut self, point: Point);

    fn line_to(&mut self, point: Point);

    /// Stroke the current path.
    fn stroke(&mut self, width: f32, color: Color32);

    /// Draw a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color32);

    /// Draw a glyph string centred on `center`.
    fn fill_text(&mut self, text: &str, center: Point, size: f32, color: Color32);
}
