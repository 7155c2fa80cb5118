use super::Command;

/// Committed drawing commands plus the commands undo has set aside
#[derive(Debug, Default, Clone)]
pub struct CommandHistory {
    /// Commands currently on the canvas, oldest first
    undo_stack: Vec<Command>,
    /// Undone commands, most recently undone last
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Append a command to the drawing. Anything waiting to be redone is lost.
    pub fn commit(&mut self, command: Command) {
        log::debug!(
            "Commit {} (dropping {} redoable)",
            command.name(),
            self.redo_stack.len()
        );
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Move the most recent command to the redo stack.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(command) => {
                log::debug!("Undo {}", command.name());
                self.redo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently undone command.
    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                log::debug!("Redo {}", command.name());
                self.undo_stack.push(command);
                true
            }
            None => false,
        }
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        log::debug!(
            "Clear history ({} committed, {} redoable)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// The most recently committed command, for in-progress edits
    pub fn last_mut(&mut self) -> Option<&mut Command> {
        self.undo_stack.last_mut()
    }

    /// Committed commands in drawing order
    pub fn commands(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_buffer(&self) -> &[Command] {
        &self.redo_stack
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }
}
