use crate::canvas::Point;

/// Whether a drawing gesture is in progress
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing,
}

/// Pointer activity and the last position the pointer was seen at
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorState {
    active: bool,
    position: Option<Point>,
}

impl CursorState {
    pub fn press(&mut self, at: Point) {
        self.active = true;
        self.position = Some(at);
    }

    pub fn move_to(&mut self, at: Point) {
        self.position = Some(at);
    }

    /// End the gesture. The last position is kept for the preview.
    pub fn release(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn editor_state(&self) -> EditorState {
        if self.active {
            EditorState::Drawing
        } else {
            EditorState::Idle
        }
    }
}
