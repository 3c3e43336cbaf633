use egui::{pos2, vec2, Color32, Pos2, Vec2};
use paintboard::command::Command;
use paintboard::document::Document;
use paintboard::element::{factory, FigureKind, FreehandKind, ShapeId, ShapeStyle};
use paintboard::id_generator::generate_id;

fn style() -> ShapeStyle {
    ShapeStyle::new(Color32::RED, 2.0, 1.0)
}

fn add_rect(doc: &mut Document, origin: Pos2, size: Vec2) -> ShapeId {
    let id = generate_id();
    doc.add_shape(factory::figure(id, FigureKind::Rect, origin, size, style()));
    id
}

fn add_stroke(doc: &mut Document, points: Vec<Pos2>) -> ShapeId {
    let id = generate_id();
    doc.add_shape(factory::freehand(id, FreehandKind::Pencil, points, style()));
    id
}

#[test]
fn add_preserves_call_order() {
    let mut doc = Document::new();
    let a = add_rect(&mut doc, pos2(0.0, 0.0), vec2(10.0, 10.0));
    let b = add_rect(&mut doc, pos2(20.0, 0.0), vec2(10.0, 10.0));
    let c = add_stroke(&mut doc, vec![pos2(40.0, 0.0), pos2(50.0, 10.0)]);

    assert_eq!(doc.len(), 3);
    let order: Vec<ShapeId> = doc.shapes().iter().map(|s| s.id()).collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn reverse_order_is_an_involution() {
    let mut doc = Document::new();
    let a = add_rect(&mut doc, pos2(0.0, 0.0), vec2(10.0, 10.0));
    let b = add_rect(&mut doc, pos2(20.0, 0.0), vec2(10.0, 10.0));
    let c = add_rect(&mut doc, pos2(40.0, 0.0), vec2(10.0, 10.0));
    doc.replace_selection(vec![b]);

    doc.reverse_order();
    let reversed: Vec<ShapeId> = doc.shapes().iter().map(|s| s.id()).collect();
    assert_eq!(reversed, vec![c, b, a]);
    // Selection is by id and survives reordering.
    assert!(doc.is_selected(b));

    doc.reverse_order();
    let restored: Vec<ShapeId> = doc.shapes().iter().map(|s| s.id()).collect();
    assert_eq!(restored, vec![a, b, c]);
}

#[test]
fn removed_shape_is_unhittable_and_unselected() {
    let mut doc = Document::new();
    let id = add_rect(&mut doc, pos2(10.0, 10.0), vec2(30.0, 30.0));
    doc.replace_selection(vec![id]);

    Command::RemoveShapes(vec![id]).apply(&mut doc);

    assert!(doc.is_empty());
    assert!(doc.selection().is_empty());
    assert_eq!(doc.hit_test(pos2(25.0, 25.0)), None);
}

#[test]
fn hit_test_returns_topmost_overlap() {
    let mut doc = Document::new();
    let bottom = add_rect(&mut doc, pos2(0.0, 0.0), vec2(50.0, 50.0));
    let top = add_rect(&mut doc, pos2(25.0, 25.0), vec2(50.0, 50.0));

    // Overlap region belongs to the later (topmost) shape.
    assert_eq!(doc.hit_test(pos2(30.0, 30.0)), Some(top));
    assert_eq!(doc.hit_test(pos2(5.0, 5.0)), Some(bottom));

    doc.reverse_order();
    assert_eq!(doc.hit_test(pos2(30.0, 30.0)), Some(bottom));
}

#[test]
fn negative_extent_rect_is_hit_inside_normalized_bounds() {
    let mut doc = Document::new();
    // Dragged up-left: anchor at the bottom-right.
    let id = add_rect(&mut doc, pos2(100.0, 80.0), vec2(-40.0, -30.0));

    assert_eq!(doc.hit_test(pos2(70.0, 60.0)), Some(id));
    assert_eq!(doc.hit_test(pos2(110.0, 90.0)), None);
}

#[test]
fn freehand_hit_region_is_expanded_by_tolerance() {
    let mut doc = Document::new();
    let id = add_stroke(&mut doc, vec![pos2(20.0, 20.0), pos2(60.0, 20.0)]);

    // Inside the 10-unit expansion of the point bounds.
    assert_eq!(doc.hit_test(pos2(65.0, 25.0)), Some(id));
    // Beyond it.
    assert_eq!(doc.hit_test(pos2(75.0, 20.0)), None);
}

#[test]
fn clear_all_empties_document_and_selection() {
    let mut doc = Document::new();
    let a = add_rect(&mut doc, pos2(0.0, 0.0), vec2(10.0, 10.0));
    add_stroke(&mut doc, vec![pos2(0.0, 0.0), pos2(5.0, 5.0)]);
    doc.replace_selection(vec![a]);

    Command::ClearAll.apply(&mut doc);

    assert!(doc.is_empty());
    assert!(doc.selection().is_empty());
}

#[test]
fn selection_never_references_missing_shapes() {
    let mut doc = Document::new();
    let live = add_rect(&mut doc, pos2(0.0, 0.0), vec2(10.0, 10.0));
    let dead = generate_id();

    doc.replace_selection(vec![dead, live, live]);

    assert_eq!(doc.selection(), &[live]);
}

#[test]
fn version_increments_on_every_mutation() {
    let mut doc = Document::new();
    let v0 = doc.version();
    let id = add_rect(&mut doc, pos2(0.0, 0.0), vec2(10.0, 10.0));
    let v1 = doc.version();
    assert_ne!(v0, v1);

    doc.replace_selection(vec![id]);
    assert_ne!(doc.version(), v1);
}
