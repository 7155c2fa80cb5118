#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod tools;

pub use app::SketchpadApp;
pub use canvas::{DrawingContext, Point};
pub use command::{Command, CommandHistory};
pub use config::SketchpadConfig;
pub use error::{SketchpadError, SketchpadResult};
pub use input::{InputEvent, UiAction};
pub use renderer::Renderer;
pub use sketchpad::Sketchpad;
pub use tools::{MarkerWidth, Tool, ToolState};
