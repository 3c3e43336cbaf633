use egui::epaint::EllipseShape;
use egui::{Align2, Color32, Context, FontId, Painter, Rect, Stroke};

use crate::document::Document;
use crate::element::{FreehandKind, Shape, ShapeId};
use crate::widgets::Handle;

const SELECTION_OUTLINE: Color32 = Color32::from_rgb(30, 120, 255);
const DASH_LENGTH: f32 = 4.0;
const GAP_LENGTH: f32 = 4.0;

/// Two-layer renderer over one canvas area.
///
/// The committed layer is a cached shape list rebuilt only when the document
/// version, the canvas rect, or the skipped (text-editing) shape changes.
/// The live layer (preview stroke + marquee) is re-emitted every frame and
/// never accumulates state.
pub struct Renderer {
    committed: Vec<egui::Shape>,
    cache_key: Option<(u64, Rect, Option<ShapeId>)>,
    preview: Option<Shape>,
    marquee: Option<Rect>,
    backdrop: Color32,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            cache_key: None,
            preview: None,
            marquee: None,
            backdrop: Color32::from_gray(248),
        }
    }

    /// Color the board paints beneath all shapes. The eraser composites by
    /// painting in this color.
    pub fn backdrop(&self) -> Color32 {
        self.backdrop
    }

    pub fn set_preview(&mut self, preview: Option<Shape>) {
        self.preview = preview;
    }

    pub fn set_marquee(&mut self, marquee: Option<Rect>) {
        self.marquee = marquee;
    }

    /// Paint the frame: backdrop, committed layer (cached), then the live
    /// layer. Requests a repaint so the live layer runs continuously.
    pub fn render(
        &mut self,
        ctx: &Context,
        painter: &Painter,
        canvas_rect: Rect,
        doc: &Document,
        skip: Option<ShapeId>,
    ) {
        painter.rect_filled(canvas_rect, 0.0, self.backdrop);

        let key = (doc.version(), canvas_rect, skip);
        if self.cache_key != Some(key) {
            self.rebuild_committed(ctx, doc, skip);
            self.cache_key = Some(key);
        }
        painter.extend(self.committed.iter().cloned());

        let mut live = Vec::new();
        if let Some(preview) = &self.preview {
            Self::paint_shape(ctx, &mut live, preview, self.backdrop);
        }
        if let Some(marquee) = self.marquee {
            Self::push_dashed_rect(&mut live, marquee, Stroke::new(1.0, SELECTION_OUTLINE));
        }
        painter.extend(live);

        ctx.request_repaint();
    }

    fn rebuild_committed(&mut self, ctx: &Context, doc: &Document, skip: Option<ShapeId>) {
        self.committed.clear();

        for shape in doc.shapes() {
            if Some(shape.id()) == skip {
                continue;
            }
            Self::paint_shape(ctx, &mut self.committed, shape, self.backdrop);
        }

        // Selection chrome sits above all committed content.
        for id in doc.selection() {
            let Some(shape) = doc.shape(*id) else { continue };
            let rect = shape.bounding_rect();
            if !rect.is_positive() {
                continue;
            }
            Self::push_dashed_rect(&mut self.committed, rect, Stroke::new(1.0, SELECTION_OUTLINE));
        }

        if let Some(id) = doc.single_selection() {
            if let Some(shape) = doc.shape(id) {
                let rect = shape.bounding_rect();
                if rect.is_positive() {
                    for handle in Handle::ALL {
                        Handle::push_marker(&mut self.committed, handle.position(rect));
                    }
                }
            }
        }
    }

    /// Per-variant draw routine, shared by the committed and live layers.
    fn paint_shape(ctx: &Context, out: &mut Vec<egui::Shape>, shape: &Shape, backdrop: Color32) {
        match shape {
            Shape::Freehand(s) => {
                if !s.is_renderable() {
                    return;
                }
                let style = s.style();
                let points = s.points().to_vec();
                match s.kind() {
                    FreehandKind::Eraser => {
                        // Punches through everything painted below it.
                        out.push(egui::Shape::line(points, Stroke::new(style.thickness, backdrop)));
                    }
                    FreehandKind::Marker => {
                        let tint = style.color.gamma_multiply(style.opacity * 0.5);
                        out.push(egui::Shape::line(points, Stroke::new(style.thickness, tint)));
                    }
                    FreehandKind::Brush => {
                        let tinted = style.tinted();
                        out.push(egui::Shape::line(
                            points.clone(),
                            Stroke::new(style.thickness * 2.2, tinted.gamma_multiply(0.25)),
                        ));
                        out.push(egui::Shape::line(points, Stroke::new(style.thickness, tinted)));
                    }
                    FreehandKind::Pencil | FreehandKind::Pen => {
                        out.push(egui::Shape::line(points, Stroke::new(style.thickness, style.tinted())));
                    }
                }
            }
            Shape::Figure(s) => {
                let rect = s.bounds();
                let style = s.style();
                let stroke = Stroke::new(style.thickness, style.tinted());
                match s.kind() {
                    crate::element::FigureKind::Rect => {
                        out.push(egui::Shape::rect_stroke(rect, 0.0, stroke));
                    }
                    crate::element::FigureKind::Ellipse => {
                        out.push(egui::Shape::Ellipse(EllipseShape::stroke(
                            rect.center(),
                            rect.size() * 0.5,
                            stroke,
                        )));
                    }
                }
            }
            Shape::Text(s) => {
                if s.content().is_empty() {
                    return;
                }
                let text = ctx.fonts(|fonts| {
                    egui::Shape::text(
                        fonts,
                        s.origin(),
                        Align2::LEFT_TOP,
                        s.content(),
                        FontId::proportional(s.font_size()),
                        s.style().tinted(),
                    )
                });
                out.push(text);
            }
        }
    }

    fn push_dashed_rect(out: &mut Vec<egui::Shape>, rect: Rect, stroke: Stroke) {
        let outline = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        out.extend(egui::Shape::dashed_line(&outline, stroke, DASH_LENGTH, GAP_LENGTH));
    }

    #[cfg(test)]
    pub(crate) fn cached_key(&self) -> Option<(u64, Rect, Option<ShapeId>)> {
        self.cache_key
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
