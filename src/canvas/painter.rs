use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{DrawingContext, Point};

/// Draws onto an egui [`Painter`], offsetting canvas coordinates by the
/// screen position of the canvas.
pub struct PainterContext<'a> {
    painter: &'a Painter,
    origin: Vec2,
    background: Color32,
    subpaths: Vec<Vec<Pos2>>,
}

impl<'a> PainterContext<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, background: Color32) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
            background,
            subpaths: Vec::new(),
        }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        point + self.origin
    }
}

impl DrawingContext for PainterContext<'_> {
    fn clear(&mut self, rect: Rect) {
        self.painter.rect_filled(rect.translate(self.origin), 0.0, self.background);
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, point: Point) {
        let point = self.to_screen(point);
        self.subpaths.push(vec![point]);
    }

    fn line_to(&mut self, point: Point) {
        let point = self.to_screen(point);
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            // A line with no starting point behaves like move_to
            None => self.subpaths.push(vec![point]),
        }
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        for subpath in &self.subpaths {
            let Some(&first) = subpath.first() else {
                continue;
            };
            // egui draws nothing for a zero-length line, so a lone point
            // becomes a dot as wide as the stroke.
            if subpath.iter().all(|p| *p == first) {
                self.painter.circle_filled(first, width / 2.0, color);
            } else {
                self.painter.add(Shape::line(subpath.clone(), Stroke::new(width, color)));
            }
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color32) {
        self.painter.circle_stroke(self.to_screen(center), radius, Stroke::new(width, color));
    }

    fn fill_text(&mut self, text: &str, center: Point, size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(size),
            color,
        );
    }
}
