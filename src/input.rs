use egui::{Context, Pos2, Rect};

use crate::canvas::Point;
use crate::tools::MarkerWidth;

/// Pointer activity on the canvas, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown(Point),
    /// Pointer moved (with or without the button held)
    PointerMove(Point),
    /// Primary button released
    PointerUp,
}

/// Discrete actions triggered from the tool panel
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SelectMarker(MarkerWidth),
    SelectSticker(String),
    /// Add a glyph to the sticker palette and select it
    AddSticker(String),
    Clear,
    Undo,
    Redo,
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// Set while a press that started on the canvas is held
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            pressed_on_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Point {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (hover_pos, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });
        self.translate(hover_pos, pressed, released)
    }

    /// Turn one frame of pointer state into events.
    ///
    /// Moves outside the canvas are ignored unless a press that began on the
    /// canvas is still held.
    pub fn translate(
        &mut self,
        hover_pos: Option<Pos2>,
        pressed: bool,
        released: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if let Some(pos) = hover_pos {
            let in_canvas = self.canvas_rect.contains(pos);
            if pressed && in_canvas {
                events.push(InputEvent::PointerDown(self.to_canvas(pos)));
                self.pressed_on_canvas = true;
            } else if Some(pos) != self.last_pointer_pos && (in_canvas || self.pressed_on_canvas) {
                events.push(InputEvent::PointerMove(self.to_canvas(pos)));
            }
        }
        self.last_pointer_pos = hover_pos;

        if released && self.pressed_on_canvas {
            events.push(InputEvent::PointerUp);
            self.pressed_on_canvas = false;
        }

        events
    }
}
