use crate::canvas::Point;
use crate::command::CommandHistory;
use crate::config::SketchpadConfig;
use crate::event::{RedrawObserver, RedrawSignal};
use crate::input::{InputEvent, UiAction};
use crate::state::{CursorState, EditorState};
use crate::tools::ToolState;

/// All mutable sketchpad state, and the rules for changing it.
///
/// Pointer events and panel actions come in through [`Sketchpad::handle_input`]
/// and [`Sketchpad::apply`]. Every one of them raises the redraw signal; what
/// gets drawn is decided by [`crate::Renderer`] from this state alone.
#[derive(Debug, Default)]
pub struct Sketchpad {
    history: CommandHistory,
    tools: ToolState,
    cursor: CursorState,
    redraw: RedrawSignal,
    /// Set while the last committed command belongs to the current gesture.
    /// Undo, redo and clear end the edit even though the button stays down.
    editing: bool,
}

impl Sketchpad {
    pub fn new(config: &SketchpadConfig) -> Self {
        Self {
            history: CommandHistory::new(),
            tools: ToolState::new(config),
            cursor: CursorState::default(),
            redraw: RedrawSignal::new(),
            editing: false,
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn editor_state(&self) -> EditorState {
        self.cursor.editor_state()
    }

    /// Call `observer` every time the canvas needs redrawing
    pub fn subscribe(&mut self, observer: impl RedrawObserver + 'static) {
        self.redraw.subscribe(observer);
    }

    /// Returns whether a redraw was requested since the last call
    pub fn take_redraw_request(&mut self) -> bool {
        self.redraw.take()
    }

    pub fn redraw_signal(&self) -> &RedrawSignal {
        &self.redraw
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(at) => self.pointer_down(at),
            InputEvent::PointerMove(at) => self.pointer_move(at),
            InputEvent::PointerUp => self.pointer_up(),
        }
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::SelectMarker(width) => self.tools.select_marker(width),
            UiAction::SelectSticker(glyph) => self.tools.select_sticker(glyph),
            UiAction::AddSticker(glyph) => {
                if !self.tools.add_sticker(&glyph) {
                    log::debug!("Ignoring blank custom sticker");
                }
            }
            UiAction::Clear => {
                self.editing = false;
                self.history.clear();
            }
            UiAction::Undo => {
                self.editing = false;
                if !self.history.undo() {
                    log::debug!("Nothing to undo");
                }
            }
            UiAction::Redo => {
                self.editing = false;
                if !self.history.redo() {
                    log::debug!("Nothing to redo");
                }
            }
        }
        self.redraw.request();
    }

    fn pointer_down(&mut self, at: Point) {
        if self.cursor.is_active() {
            log::warn!("Pointer down while already drawing, starting a new command");
        }
        self.cursor.press(at);
        let command = self.tools.create_command(at);
        self.history.commit(command);
        self.editing = true;
        self.redraw.request();
    }

    fn pointer_move(&mut self, at: Point) {
        self.cursor.move_to(at);
        if self.editing {
            if let Some(command) = self.history.last_mut() {
                command.drag_to(at);
            }
        }
        // Refreshed even while drawing so it is current once the gesture ends
        self.tools.update_preview(at);
        self.redraw.request();
    }

    fn pointer_up(&mut self) {
        self.cursor.release();
        self.editing = false;
        self.redraw.request();
    }
}
