//! User interface modules for demix-studio

pub mod app;
pub mod handlers;
pub mod message;
pub mod mix_modal;
pub mod modals;
pub mod state;
pub mod track_table;

pub use app::DemixApp;
