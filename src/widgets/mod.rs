mod resize_handle;

pub use resize_handle::{handle_at, Handle, HANDLE_MARKER_RADIUS};
