use egui::Color32;

use crate::canvas::Point;
use crate::command::{Command, LineStroke, StickerPlacement};
use crate::config::SketchpadConfig;

mod preview;

pub use preview::{Preview, GHOST_COLOR, RING_WIDTH};

/// The two marker sizes offered in the tool panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerWidth {
    Thin,
    Thick,
}

impl MarkerWidth {
    pub fn thickness(self) -> f32 {
        match self {
            MarkerWidth::Thin => 2.0,
            MarkerWidth::Thick => 6.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MarkerWidth::Thin => "Thin",
            MarkerWidth::Thick => "Thick",
        }
    }
}

/// What pointer-down will create next
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker(MarkerWidth),
    Sticker(String),
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Marker(MarkerWidth::Thin)
    }
}

impl Tool {
    pub fn name(&self) -> &str {
        match self {
            Tool::Marker(width) => width.label(),
            Tool::Sticker(glyph) => glyph,
        }
    }
}

/// The selected tool, the sticker palette and the cursor preview
#[derive(Debug, Clone)]
pub struct ToolState {
    tool: Tool,
    stickers: Vec<String>,
    sticker_size: f32,
    ink: Color32,
    preview: Option<Preview>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(&SketchpadConfig::default())
    }
}

impl ToolState {
    pub fn new(config: &SketchpadConfig) -> Self {
        let mut stickers: Vec<String> = Vec::new();
        for glyph in &config.stickers {
            let glyph = glyph.trim();
            if !glyph.is_empty() && !stickers.iter().any(|s| s == glyph) {
                stickers.push(glyph.to_owned());
            }
        }

        Self {
            tool: Tool::default(),
            stickers,
            sticker_size: config.sticker_size,
            ink: config.ink_color(),
            preview: None,
        }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    pub fn ink(&self) -> Color32 {
        self.ink
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn select_marker(&mut self, width: MarkerWidth) {
        self.set_tool(Tool::Marker(width));
    }

    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        self.set_tool(Tool::Sticker(glyph.into()));
    }

    /// Add a glyph to the palette and select it.
    ///
    /// Blank input is ignored and returns false. A glyph already in the
    /// palette is selected without being added twice.
    pub fn add_sticker(&mut self, glyph: &str) -> bool {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return false;
        }
        if !self.stickers.iter().any(|s| s == glyph) {
            log::debug!("Adding custom sticker {}", glyph);
            self.stickers.push(glyph.to_owned());
        }
        self.select_sticker(glyph);
        true
    }

    fn set_tool(&mut self, tool: Tool) {
        log::debug!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        self.tool = tool;
        // Keep the preview where it was but give it the new tool's shape
        if let Some(center) = self.preview.as_ref().map(Preview::center) {
            self.update_preview(center);
        }
    }

    /// Build the command pointer-down at `at` should commit.
    ///
    /// Thickness, glyph and size are copied out of the current tool, so later
    /// tool changes never reach a command that already exists.
    pub fn create_command(&self, at: Point) -> Command {
        match &self.tool {
            Tool::Marker(width) => LineStroke::new(at, width.thickness(), self.ink).into(),
            Tool::Sticker(glyph) => {
                StickerPlacement::new(at, glyph.clone(), self.sticker_size).into()
            }
        }
    }

    /// Replace the preview with one for the current tool at `at`.
    pub fn update_preview(&mut self, at: Point) {
        self.preview = Some(match &self.tool {
            Tool::Marker(width) => Preview::Ring {
                center: at,
                radius: width.thickness(),
                color: self.ink,
            },
            Tool::Sticker(glyph) => Preview::Ghost {
                center: at,
                glyph: glyph.clone(),
                size: self.sticker_size,
            },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_default_tool_is_thin_marker() {
        let tools = ToolState::default();
        assert_eq!(tools.tool(), &Tool::Marker(MarkerWidth::Thin));
        assert!(tools.preview().is_none());
    }

    #[test]
    fn test_command_captures_tool() {
        let mut tools = ToolState::default();
        tools.select_marker(MarkerWidth::Thick);
        let command = tools.create_command(pos2(1.0, 2.0));
        tools.select_marker(MarkerWidth::Thin);

        match command {
            Command::LineStroke(stroke) => {
                assert_eq!(stroke.thickness(), 6.0);
                assert_eq!(stroke.points(), &[pos2(1.0, 2.0)]);
            }
            other => panic!("expected a stroke, got {:?}", other),
        }
    }

    #[test]
    fn test_sticker_command_uses_glyph_and_size() {
        let mut tools = ToolState::default();
        tools.select_sticker("🌮");
        match tools.create_command(pos2(3.0, 3.0)) {
            Command::Sticker(sticker) => {
                assert_eq!(sticker.glyph(), "🌮");
                assert_eq!(sticker.size(), 32.0);
            }
            other => panic!("expected a sticker, got {:?}", other),
        }
    }

    #[test]
    fn test_preview_follows_tool() {
        let mut tools = ToolState::default();
        tools.update_preview(pos2(10.0, 10.0));
        assert!(matches!(tools.preview(), Some(Preview::Ring { radius, .. }) if *radius == 2.0));

        tools.select_sticker("⭐");
        assert_eq!(
            tools.preview(),
            Some(&Preview::Ghost {
                center: pos2(10.0, 10.0),
                glyph: "⭐".to_owned(),
                size: 32.0,
            })
        );
    }

    #[test]
    fn test_add_sticker() {
        let mut tools = ToolState::default();
        let before = tools.stickers().len();

        assert!(!tools.add_sticker("   "));
        assert_eq!(tools.stickers().len(), before);

        assert!(tools.add_sticker(" 🎈 "));
        assert_eq!(tools.stickers().len(), before + 1);
        assert_eq!(tools.tool(), &Tool::Sticker("🎈".to_owned()));

        assert!(tools.add_sticker("🎈"));
        assert_eq!(tools.stickers().len(), before + 1);
    }
}
