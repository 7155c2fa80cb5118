use egui::Color32;

use crate::canvas::PainterContext;
use crate::input::InputHandler;
use crate::renderer::{FrameCache, Renderer};
use crate::sketchpad::Sketchpad;

/// The drawing canvas: feeds pointer input to the sketchpad, then repaints it.
pub fn central_panel(
    pad: &mut Sketchpad,
    input: &mut InputHandler,
    renderer: &Renderer,
    frame: &mut FrameCache,
    background: Color32,
    ctx: &egui::Context,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(renderer.bounds().size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        input.set_canvas_rect(canvas_rect);
        for event in input.process_input(ctx) {
            pad.handle_input(event);
        }

        if frame.refresh(renderer, pad) {
            log::trace!("Canvas frame rebuilt");
        }
        let mut surface = PainterContext::new(&painter, canvas_rect.min, background);
        frame.paint(&mut surface);

        if pad.cursor().is_active() || response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }
    });
}
