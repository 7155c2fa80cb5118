use egui::Color32;

use crate::canvas::{DrawingContext, Point};

/// Marker stroke: a polyline drawn at the thickness chosen when it started
#[derive(Debug, Clone, PartialEq)]
pub struct LineStroke {
    points: Vec<Point>,
    thickness: f32,
    color: Color32,
}

impl LineStroke {
    /// Start a stroke at `start`.
    pub fn new(start: Point, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    /// Start a stroke with no points yet.
    pub fn empty(thickness: f32, color: Color32) -> Self {
        Self {
            points: Vec::new(),
            thickness,
            color,
        }
    }

    /// Append a point to the end of the stroke
    pub fn extend(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn render<C: DrawingContext + ?Sized>(&self, ctx: &mut C) {
        let Some((&first, rest)) = self.points.split_first() else {
            return;
        };

        ctx.begin_path();
        ctx.move_to(first);
        if rest.is_empty() {
            // zero-length segment so a single click still leaves a dot
            ctx.line_to(first);
        }
        for &point in rest {
            ctx.line_to(point);
        }
        ctx.stroke(self.thickness, self.color);
    }
}
