use egui::{Rect, Vec2};

use crate::canvas::{DrawingContext, RecordingContext};
use crate::sketchpad::Sketchpad;

/// Full-canvas redraw from history and preview state
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    bounds: Rect,
}

impl Renderer {
    /// Creates a renderer for a canvas of the given size
    pub fn new(canvas_size: Vec2) -> Self {
        Self {
            bounds: Rect::from_min_size(egui::Pos2::ZERO, canvas_size),
        }
    }

    /// The canvas area, in canvas coordinates
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Repaint everything.
    ///
    /// Clears the surface, replays committed commands oldest first, then draws
    /// the tool preview on top unless a gesture is in progress. Output depends
    /// only on `pad`, so repeated calls draw the same frame.
    pub fn redraw<C: DrawingContext + ?Sized>(&self, ctx: &mut C, pad: &Sketchpad) {
        ctx.clear(self.bounds);

        for command in pad.history().commands() {
            command.render(ctx);
        }

        if !pad.cursor().is_active() {
            if let Some(preview) = pad.tools().preview() {
                preview.render(ctx);
            }
        }
    }
}

/// The last full redraw, kept until the sketchpad asks for another.
///
/// egui paints every frame; the recorded ops are replayed each time and only
/// rebuilt when the redraw flag is set.
#[derive(Debug, Default, Clone)]
pub struct FrameCache {
    frame: RecordingContext,
    valid: bool,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the cached frame if the sketchpad changed since the last call.
    /// Returns true when it was rebuilt.
    pub fn refresh(&mut self, renderer: &Renderer, pad: &mut Sketchpad) -> bool {
        let changed = pad.take_redraw_request();
        if !changed && self.valid {
            return false;
        }
        self.frame.take_ops();
        renderer.redraw(&mut self.frame, pad);
        self.valid = true;
        true
    }

    pub fn paint<C: DrawingContext + ?Sized>(&self, ctx: &mut C) {
        self.frame.replay(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawOp;
    use crate::input::InputEvent;
    use egui::vec2;

    #[test]
    fn test_empty_canvas_only_clears() {
        let renderer = Renderer::new(vec2(256.0, 256.0));
        let pad = Sketchpad::default();
        let mut ctx = RecordingContext::new();
        renderer.redraw(&mut ctx, &pad);
        assert_eq!(ctx.ops(), &[DrawOp::Clear(renderer.bounds())]);
    }

    #[test]
    fn test_preview_drawn_after_commands() {
        let renderer = Renderer::new(vec2(64.0, 64.0));
        let mut pad = Sketchpad::default();
        pad.handle_input(InputEvent::PointerDown(egui::pos2(2.0, 2.0)));
        pad.handle_input(InputEvent::PointerMove(egui::pos2(8.0, 2.0)));
        pad.handle_input(InputEvent::PointerUp);

        let mut ctx = RecordingContext::new();
        renderer.redraw(&mut ctx, &pad);

        let ops = ctx.ops();
        assert_eq!(ops.first(), Some(&DrawOp::Clear(renderer.bounds())));
        assert_eq!(ctx.stroke_widths(), vec![2.0]);
        assert!(matches!(
            ops.last(),
            Some(DrawOp::StrokeCircle { center, radius, .. })
                if *center == egui::pos2(8.0, 2.0) && *radius == 2.0
        ));
    }

    #[test]
    fn test_frame_cache_rebuilds_only_on_request() {
        let renderer = Renderer::new(vec2(64.0, 64.0));
        let mut pad = Sketchpad::default();
        let mut cache = FrameCache::new();

        assert!(cache.refresh(&renderer, &mut pad));
        assert!(!cache.refresh(&renderer, &mut pad));

        pad.handle_input(InputEvent::PointerDown(egui::pos2(1.0, 1.0)));
        assert!(cache.refresh(&renderer, &mut pad));
        assert!(!cache.refresh(&renderer, &mut pad));

        let mut cached = RecordingContext::new();
        cache.paint(&mut cached);
        let mut fresh = RecordingContext::new();
        renderer.redraw(&mut fresh, &pad);
        assert_eq!(cached.ops(), fresh.ops());
    }
}
