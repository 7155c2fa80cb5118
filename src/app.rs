use crate::config::SketchpadConfig;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::{FrameCache, Renderer};
use crate::sketchpad::Sketchpad;

/// The eframe application: tool panel on the left, canvas in the middle.
#[derive(Debug)]
pub struct SketchpadApp {
    pad: Sketchpad,
    renderer: Renderer,
    frame: FrameCache,
    input: InputHandler,
    background: egui::Color32,
    /// Text typed into the custom sticker box
    custom_sticker: String,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &SketchpadConfig) -> Self {
        let mut app = Self::from_config(config);

        let egui_ctx = cc.egui_ctx.clone();
        app.pad.subscribe(move || egui_ctx.request_repaint());

        app
    }

    /// Build the app without a window, e.g. for tests.
    pub fn from_config(config: &SketchpadConfig) -> Self {
        let renderer = Renderer::new(egui::Vec2::from(config.canvas_size));
        Self {
            pad: Sketchpad::new(config),
            input: InputHandler::new(renderer.bounds()),
            renderer,
            frame: FrameCache::new(),
            background: config.background_color(),
            custom_sticker: String::new(),
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.pad
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = panels::keyboard_shortcuts(ctx);
        actions.extend(panels::tools_panel(&self.pad, &mut self.custom_sticker, ctx));
        for action in actions {
            self.pad.apply(action);
        }

        panels::central_panel(
            &mut self.pad,
            &mut self.input,
            &self.renderer,
            &mut self.frame,
            self.background,
            ctx,
        );
    }
}
