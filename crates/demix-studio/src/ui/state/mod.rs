//! Application state modules

pub mod mix_modal;

pub use mix_modal::{MixModalState, ModalPhase, SubmitOutcome, EXIT_ANIMATION};
