use egui::{Key, KeyboardShortcut, Modifiers};

use crate::input::UiAction;
use crate::sketchpad::Sketchpad;
use crate::tools::{MarkerWidth, Tool};

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);

/// Side panel with markers, stickers and history controls.
///
/// Returns the actions the user triggered this frame; nothing is applied here.
pub fn tools_panel(
    pad: &Sketchpad,
    custom_sticker: &mut String,
    ctx: &egui::Context,
) -> Vec<UiAction> {
    let mut actions = Vec::new();

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Markers");
            let current = pad.tools().tool();
            ui.horizontal(|ui| {
                for width in [MarkerWidth::Thin, MarkerWidth::Thick] {
                    let selected = *current == Tool::Marker(width);
                    if ui.selectable_label(selected, width.label()).clicked() {
                        log::info!("Marker selected from UI: {}", width.label());
                        actions.push(UiAction::SelectMarker(width));
                    }
                }
            });

            ui.separator();
            ui.heading("Stickers");
            ui.horizontal_wrapped(|ui| {
                for glyph in pad.tools().stickers() {
                    let selected = matches!(current, Tool::Sticker(g) if g == glyph);
                    let label = egui::RichText::new(glyph.as_str()).size(20.0);
                    if ui.selectable_label(selected, label).clicked() {
                        log::info!("Sticker selected from UI: {}", glyph);
                        actions.push(UiAction::SelectSticker(glyph.clone()));
                    }
                }
            });
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(custom_sticker)
                        .hint_text("Custom")
                        .desired_width(80.0),
                );
                let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                if ui.button("Add").clicked() || submitted {
                    actions.push(UiAction::AddSticker(std::mem::take(custom_sticker)));
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                let history = pad.history();
                if ui.add_enabled(history.can_undo(), egui::Button::new("Undo")).clicked() {
                    actions.push(UiAction::Undo);
                }
                if ui.add_enabled(history.can_redo(), egui::Button::new("Redo")).clicked() {
                    actions.push(UiAction::Redo);
                }
                if ui.button("Clear").clicked() {
                    actions.push(UiAction::Clear);
                }
            });

            ui.separator();
            let history = pad.history();
            ui.label(format!("Commands: {}", history.len()));
            ui.label(format!("Redoable: {}", history.redo_buffer().len()));
        });

    actions
}

/// Undo/redo shortcuts. Ignored while a text field has focus, so Ctrl+Z
/// there edits the text instead of the canvas.
pub fn keyboard_shortcuts(ctx: &egui::Context) -> Vec<UiAction> {
    let text_focused = ctx.wants_keyboard_input();
    ctx.input_mut(|input| shortcut_actions(input, text_focused))
}

/// Redo is checked first since it also holds the undo modifier.
fn shortcut_actions(input: &mut egui::InputState, text_focused: bool) -> Vec<UiAction> {
    let mut actions = Vec::new();
    if text_focused {
        return actions;
    }
    if input.consume_shortcut(&REDO_SHORTCUT) {
        actions.push(UiAction::Redo);
    }
    if input.consume_shortcut(&UNDO_SHORTCUT) {
        actions.push(UiAction::Undo);
    }
    actions
}
