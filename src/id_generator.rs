use std::sync::atomic::{AtomicUsize, Ordering};

use crate::element::ShapeId;

// Single static counter for all shapes. Ids start at 1; 0 is the preview
// sentinel and must never be handed out.
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> ShapeId {
    ShapeId(NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst))
}
