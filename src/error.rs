use thiserror::Error;

/// Errors surfaced while setting the sketchpad up.
///
/// Nothing a user does on the canvas produces one of these: undo/redo on an
/// empty history and empty strokes are defined no-ops.
#[derive(Debug, Error)]
pub enum SketchpadError {
    /// The window or its drawing surface could not be created.
    #[error("Drawing context unavailable: {0}")]
    ContextUnavailable(String),

    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for setup operations
pub type SketchpadResult<T> = Result<T, SketchpadError>;
