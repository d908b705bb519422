//! Modal overlay helpers

mod overlay;

pub use overlay::with_modal_overlay;
