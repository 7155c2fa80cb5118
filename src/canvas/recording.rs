use egui::{Color32, Rect};

use super::{DrawingContext, Point};

/// One call made against a [`RecordingContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rect),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Stroke { width: f32, color: Color32 },
    StrokeCircle {
        center: Point,
        radius: f32,
        width: f32,
        color: Color32,
    },
    FillText {
        text: String,
        center: Point,
        size: f32,
        color: Color32,
    },
}

/// Drawing context that records every call instead of drawing.
///
/// Two frames that produce the same ops produce the same pixels, which makes
/// this the way to compare render output by value.
#[derive(Debug, Default, Clone)]
pub struct RecordingContext {
    ops: Vec<DrawOp>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded ops, leaving the recorder empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Issue the recorded calls again, in order, against another context.
    pub fn replay<C: DrawingContext + ?Sized>(&self, ctx: &mut C) {
        for op in &self.ops {
            match op {
                DrawOp::Clear(rect) => ctx.clear(*rect),
                DrawOp::BeginPath => ctx.begin_path(),
                DrawOp::MoveTo(point) => ctx.move_to(*point),
                DrawOp::LineTo(point) => ctx.line_to(*point),
                DrawOp::Stroke { width, color } => ctx.stroke(*width, *color),
                DrawOp::StrokeCircle {
                    center,
                    radius,
                    width,
                    color,
                } => ctx.stroke_circle(*center, *radius, *width, *color),
                DrawOp::FillText {
                    text,
                    center,
                    size,
                    color,
                } => ctx.fill_text(text, *center, *size, *color),
            }
        }
    }

    /// Points passed to `move_to`/`line_to`, in call order.
    pub fn path_points(&self) -> Vec<Point> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::MoveTo(p) | DrawOp::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Widths of every `stroke` call.
    pub fn stroke_widths(&self) -> Vec<f32> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { width, .. } => Some(*width),
                _ => None,
            })
            .collect()
    }
}

impl DrawingContext for RecordingContext {
    fn clear(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(DrawOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(DrawOp::LineTo(point));
    }

    fn stroke(&mut self, width: f32, color: Color32) {
        self.ops.push(DrawOp::Stroke { width, color });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Color32) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, center: Point, size: f32, color: Color32) {
        self.ops.push(DrawOp::FillText {
            text: text.to_owned(),
            center,
            size,
            color,
        });
    }
}
