use egui::{pos2, vec2, Color32, Modifiers, Pos2, Vec2};
use paintboard::command::Command;
use paintboard::document::Document;
use paintboard::element::{factory, FigureKind, FreehandKind, Shape, ShapeId, ShapeStyle};
use paintboard::id_generator::generate_id;
use paintboard::input::delete_command;
use paintboard::tools::{SelectTool, Tool, ToolSettings};

fn style() -> ShapeStyle {
    ShapeStyle::new(Color32::BLUE, 2.0, 1.0)
}

fn add_rect(doc: &mut Document, origin: Pos2, size: Vec2) -> ShapeId {
    let id = generate_id();
    doc.add_shape(factory::figure(id, FigureKind::Rect, origin, size, style()));
    id
}

fn add_stroke(doc: &mut Document, points: Vec<Pos2>) -> ShapeId {
    let id = generate_id();
    doc.add_shape(factory::freehand(id, FreehandKind::Pen, points, style()));
    id
}

fn exec(doc: &mut Document, cmds: Vec<Command>) {
    for cmd in cmds {
        cmd.apply(doc);
    }
}

/// Run a full down -> moves -> up gesture through the select tool.
fn gesture(doc: &mut Document, tool: &mut SelectTool, down: Pos2, moves: &[Pos2], up: Pos2) {
    let settings = ToolSettings::default();
    let cmds = tool.on_pointer_down(down, Modifiers::NONE, doc, &settings);
    exec(doc, cmds);
    for pos in moves {
        let cmds = tool.on_pointer_move(*pos, doc, &settings);
        exec(doc, cmds);
    }
    let cmds = tool.on_pointer_up(up, doc, &settings);
    exec(doc, cmds);
}

#[test]
fn click_selects_topmost_and_replaces_selection() {
    let mut doc = Document::new();
    let bottom = add_rect(&mut doc, pos2(0.0, 0.0), vec2(50.0, 50.0));
    let top = add_rect(&mut doc, pos2(25.0, 25.0), vec2(50.0, 50.0));
    doc.replace_selection(vec![bottom]);

    let mut tool = SelectTool::new();
    gesture(&mut doc, &mut tool, pos2(40.0, 40.0), &[], pos2(40.0, 40.0));

    assert_eq!(doc.selection(), &[top]);
}

#[test]
fn pure_click_changes_selection_without_moving_anything() {
    let mut doc = Document::new();
    let id = add_rect(&mut doc, pos2(10.0, 10.0), vec2(30.0, 30.0));

    let mut tool = SelectTool::new();
    gesture(&mut doc, &mut tool, pos2(20.0, 20.0), &[], pos2(20.0, 20.0));

    assert_eq!(doc.selection(), &[id]);
    match &doc.shapes()[0] {
        Shape::Figure(figure) => assert_eq!(figure.origin(), pos2(10.0, 10.0)),
        other => panic!("expected a figure, got {other:?}"),
    }
}

#[test]
fn shift_click_toggles_membership() {
    let mut doc = Document::new();
    let a = add_rect(&mut doc, pos2(0.0, 0.0), vec2(20.0, 20.0));
    let b = add_rect(&mut doc, pos2(100.0, 0.0), vec2(20.0, 20.0));
    let settings = ToolSettings::default();

    let mut tool = SelectTool::new();
    gesture(&mut doc, &mut tool, pos2(10.0, 10.0), &[], pos2(10.0, 10.0));
    assert_eq!(doc.selection(), &[a]);

    let cmds = tool.on_pointer_down(pos2(110.0, 10.0), Modifiers::SHIFT, &doc, &settings);
    exec(&mut doc, cmds);
    let cmds = tool.on_pointer_up(pos2(110.0, 10.0), &doc, &settings);
    exec(&mut doc, cmds);
    assert_eq!(doc.selection(), &[a, b]);

    let cmds = tool.on_pointer_down(pos2(10.0, 10.0), Modifiers::SHIFT, &doc, &settings);
    exec(&mut doc, cmds);
    let cmds = tool.on_pointer_up(pos2(10.0, 10.0), &doc, &settings);
    exec(&mut doc, cmds);
    assert_eq!(doc.selection(), &[b]);
}

#[test]
fn drag_translates_every_selected_shape() {
    let mut doc = Document::new();
    let rect = add_rect(&mut doc, pos2(10.0, 10.0), vec2(20.0, 20.0));
    let stroke = add_stroke(&mut doc, vec![pos2(100.0, 100.0), pos2(120.0, 110.0)]);
    doc.replace_selection(vec![rect, stroke]);

    let mut tool = SelectTool::new();
    gesture(
        &mut doc,
        &mut tool,
        pos2(20.0, 20.0),
        &[pos2(25.0, 28.0), pos2(30.0, 35.0)],
        pos2(30.0, 35.0),
    );

    match &doc.shapes()[0] {
        Shape::Figure(figure) => assert_eq!(figure.origin(), pos2(20.0, 25.0)),
        other => panic!("expected a figure, got {other:?}"),
    }
    match &doc.shapes()[1] {
        Shape::Freehand(s) => {
            assert_eq!(s.points(), &[pos2(110.0, 115.0), pos2(130.0, 125.0)]);
        }
        other => panic!("expected a freehand stroke, got {other:?}"),
    }
    // Dragging keeps the multi-selection.
    assert_eq!(doc.selection(), &[rect, stroke]);
}

#[test]
fn marquee_selects_by_anchor_only() {
    let mut doc = Document::new();
    // Fully inside the marquee.
    let a = add_rect(&mut doc, pos2(10.0, 10.0), vec2(20.0, 20.0));
    let b = add_stroke(&mut doc, vec![pos2(40.0, 40.0), pos2(60.0, 55.0)]);
    // Overlaps the marquee but its anchor (the drag origin) is outside.
    let c = add_rect(&mut doc, pos2(150.0, 50.0), vec2(-100.0, 20.0));

    let mut tool = SelectTool::new();
    gesture(
        &mut doc,
        &mut tool,
        pos2(0.0, 0.0),
        &[pos2(60.0, 60.0), pos2(100.0, 100.0)],
        pos2(100.0, 100.0),
    );

    assert_eq!(doc.selection(), &[a, b]);
    assert!(!doc.is_selected(c));
}

#[test]
fn marquee_end_to_end_replaces_selection() {
    let mut doc = Document::new();
    let near = add_rect(&mut doc, pos2(10.0, 10.0), vec2(20.0, 20.0));
    let far = add_rect(&mut doc, pos2(200.0, 200.0), vec2(20.0, 20.0));
    doc.replace_selection(vec![far]);

    let mut tool = SelectTool::new();
    gesture(
        &mut doc,
        &mut tool,
        pos2(0.0, 0.0),
        &[pos2(100.0, 100.0)],
        pos2(100.0, 100.0),
    );

    assert_eq!(doc.selection(), &[near]);
}

#[test]
fn nw_resize_keeps_se_corner_and_clamps() {
    let mut doc = Document::new();
    let id = add_rect(&mut doc, pos2(10.0, 10.0), vec2(40.0, 40.0));
    doc.replace_selection(vec![id]);

    let mut tool = SelectTool::new();
    let settings = ToolSettings::default();

    // Pointer-down lands on the north-west handle.
    let cmds = tool.on_pointer_down(pos2(10.0, 10.0), Modifiers::NONE, &doc, &settings);
    exec(&mut doc, cmds);

    let cmds = tool.on_pointer_move(pos2(16.0, 14.0), &doc, &settings);
    exec(&mut doc, cmds);
    {
        let bounds = doc.shape(id).unwrap().bounding_rect();
        assert_eq!(bounds.min, pos2(16.0, 14.0));
        assert_eq!(bounds.max, pos2(50.0, 50.0));
    }

    // Dragging far past the opposite corner clamps at the minimum size.
    let cmds = tool.on_pointer_move(pos2(200.0, 200.0), &doc, &settings);
    exec(&mut doc, cmds);
    let cmds = tool.on_pointer_up(pos2(200.0, 200.0), &doc, &settings);
    exec(&mut doc, cmds);

    let bounds = doc.shape(id).unwrap().bounding_rect();
    assert_eq!(bounds.max, pos2(50.0, 50.0));
    assert_eq!(bounds.width(), 5.0);
    assert_eq!(bounds.height(), 5.0);
}

#[test]
fn resize_needs_exactly_one_selected_shape() {
    let mut doc = Document::new();
    let a = add_rect(&mut doc, pos2(10.0, 10.0), vec2(40.0, 40.0));
    let b = add_rect(&mut doc, pos2(100.0, 10.0), vec2(40.0, 40.0));
    doc.replace_selection(vec![a, b]);

    let mut tool = SelectTool::new();
    // Down on what would be `a`'s NW handle; with two shapes selected this
    // is a plain drag instead.
    gesture(&mut doc, &mut tool, pos2(10.0, 10.0), &[pos2(15.0, 15.0)], pos2(15.0, 15.0));

    let bounds = doc.shape(a).unwrap().bounding_rect();
    assert_eq!(bounds.size(), vec2(40.0, 40.0));
    assert_eq!(bounds.min, pos2(15.0, 15.0));
}

#[test]
fn delete_respects_text_editing_guard() {
    let mut doc = Document::new();
    let id = generate_id();
    doc.add_shape(factory::text(id, pos2(10.0, 10.0), 15.0, style()));
    doc.replace_selection(vec![id]);

    // Editing in progress: Delete belongs to the text field.
    assert!(delete_command(&doc, Some(id)).is_none());
    assert_eq!(doc.len(), 1);

    // Edit finished: Delete removes the selection.
    let cmd = delete_command(&doc, None).expect("selection is deletable");
    cmd.apply(&mut doc);
    assert!(doc.is_empty());
    assert!(doc.selection().is_empty());
}

#[test]
fn empty_space_click_clears_selection() {
    let mut doc = Document::new();
    let id = add_rect(&mut doc, pos2(10.0, 10.0), vec2(20.0, 20.0));
    doc.replace_selection(vec![id]);

    let mut tool = SelectTool::new();
    gesture(&mut doc, &mut tool, pos2(300.0, 300.0), &[], pos2(300.0, 300.0));

    assert!(doc.selection().is_empty());
}
