//! Message handlers organized by feature domain
//!
//! Each sub-module provides handler methods on DemixApp.

pub mod mix_modal;
pub mod tracks;
