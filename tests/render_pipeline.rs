use egui::{Color32, pos2, vec2};
use sticker_sketchpad::canvas::{DrawOp, RecordingContext};
use sticker_sketchpad::tools::{GHOST_COLOR, RING_WIDTH};
use sticker_sketchpad::{InputEvent, MarkerWidth, Renderer, Sketchpad, SketchpadConfig, UiAction};

fn renderer() -> Renderer {
    Renderer::new(vec2(256.0, 256.0))
}

fn frame(pad: &Sketchpad) -> Vec<DrawOp> {
    let mut ctx = RecordingContext::new();
    renderer().redraw(&mut ctx, pad);
    ctx.take_ops()
}

#[test]
fn test_thick_stroke_unaffected_by_later_tool_change() {
    let mut pad = Sketchpad::new(&SketchpadConfig::default());
    pad.apply(UiAction::SelectMarker(MarkerWidth::Thick));
    pad.handle_input(InputEvent::PointerDown(pos2(0.0, 0.0)));
    pad.handle_input(InputEvent::PointerMove(pos2(10.0, 0.0)));
    pad.handle_input(InputEvent::PointerMove(pos2(10.0, 10.0)));
    pad.apply(UiAction::SelectMarker(MarkerWidth::Thin));
    pad.handle_input(InputEvent::PointerUp);

    let mut ctx = RecordingContext::new();
    pad.history().commands()[0].render(&mut ctx);

    assert_eq!(
        ctx.path_points(),
        vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)]
    );
    assert_eq!(ctx.stroke_widths(), vec![6.0]);
}

#[test]
fn test_redraw_is_idempotent() {
    let mut pad = Sketchpad::default();
    pad.handle_input(InputEvent::PointerDown(pos2(5.0, 5.0)));
    pad.handle_input(InputEvent::PointerMove(pos2(6.0, 7.0)));
    pad.handle_input(InputEvent::PointerUp);
    pad.apply(UiAction::SelectSticker("⭐".to_owned()));
    pad.handle_input(InputEvent::PointerMove(pos2(50.0, 50.0)));

    let first = frame(&pad);
    let second = frame(&pad);
    assert_eq!(first, second);
}

#[test]
fn test_commands_drawn_oldest_first_after_clear() {
    let mut pad = Sketchpad::default();
    pad.handle_input(InputEvent::PointerDown(pos2(1.0, 1.0)));
    pad.handle_input(InputEvent::PointerUp);
    pad.apply(UiAction::SelectSticker("🐱".to_owned()));
    pad.handle_input(InputEvent::PointerDown(pos2(20.0, 20.0)));
    pad.handle_input(InputEvent::PointerUp);

    let ops = frame(&pad);
    assert_eq!(ops[0], DrawOp::Clear(renderer().bounds()));

    let stroke_at = ops
        .iter()
        .position(|op| matches!(op, DrawOp::Stroke { .. }))
        .unwrap();
    let sticker_at = ops
        .iter()
        .position(|op| matches!(op, DrawOp::FillText { text, .. } if text == "🐱"))
        .unwrap();
    assert!(stroke_at < sticker_at);
}

#[test]
fn test_preview_hidden_while_drawing() {
    let mut pad = Sketchpad::default();
    pad.handle_input(InputEvent::PointerMove(pos2(3.0, 3.0)));
    pad.handle_input(InputEvent::PointerDown(pos2(3.0, 3.0)));
    pad.handle_input(InputEvent::PointerMove(pos2(8.0, 3.0)));

    let ops = frame(&pad);
    assert!(!ops.iter().any(|op| matches!(op, DrawOp::StrokeCircle { .. })));
}

#[test]
fn test_ghost_hidden_while_placing_sticker() {
    let mut pad = Sketchpad::default();
    pad.apply(UiAction::SelectSticker("🐱".to_owned()));
    pad.handle_input(InputEvent::PointerMove(pos2(3.0, 3.0)));
    pad.handle_input(InputEvent::PointerDown(pos2(3.0, 3.0)));
    pad.handle_input(InputEvent::PointerMove(pos2(8.0, 3.0)));

    let glyphs: Vec<(Color32, egui::Pos2)> = frame(&pad)
        .into_iter()
        .filter_map(|op| match op {
            DrawOp::FillText { color, center, .. } => Some((color, center)),
            _ => None,
        })
        .collect();
    assert_eq!(glyphs, vec![(Color32::BLACK, pos2(8.0, 3.0))]);
    assert!(glyphs.iter().all(|(color, _)| *color != GHOST_COLOR));
}

#[test]
fn test_ring_preview_when_idle() {
    let mut pad = Sketchpad::default();
    pad.apply(UiAction::SelectMarker(MarkerWidth::Thick));
    pad.handle_input(InputEvent::PointerMove(pos2(40.0, 30.0)));

    let ops = frame(&pad);
    assert_eq!(
        ops.last(),
        Some(&DrawOp::StrokeCircle {
            center: pos2(40.0, 30.0),
            radius: 6.0,
            width: RING_WIDTH,
            color: Color32::BLACK,
        })
    );
}

#[test]
fn test_ghost_preview_after_switching_to_sticker() {
    let mut pad = Sketchpad::default();
    pad.handle_input(InputEvent::PointerMove(pos2(40.0, 30.0)));
    pad.apply(UiAction::SelectSticker("🌮".to_owned()));

    let ops = frame(&pad);
    assert_eq!(
        ops.last(),
        Some(&DrawOp::FillText {
            text: "🌮".to_owned(),
            center: pos2(40.0, 30.0),
            size: 32.0,
            color: GHOST_COLOR,
        })
    );
}

#[test]
fn test_preview_returns_after_pointer_up() {
    let mut pad = Sketchpad::default();
    pad.handle_input(InputEvent::PointerDown(pos2(0.0, 0.0)));
    pad.handle_input(InputEvent::PointerMove(pos2(9.0, 9.0)));
    pad.handle_input(InputEvent::PointerUp);

    let ops = frame(&pad);
    assert!(matches!(
        ops.last(),
        Some(DrawOp::StrokeCircle { center, .. }) if *center == pos2(9.0, 9.0)
    ));
}

#[test]
fn test_no_preview_before_first_move() {
    let pad = Sketchpad::default();
    assert_eq!(frame(&pad), vec![DrawOp::Clear(renderer().bounds())]);
}
