//! Demix Studio - desktop front-end for the separation service
//!
//! Lets the user browse their source tracks and submit "dynamic mix"
//! (stem separation) jobs through a modal dialog:
//!
//! 1. **Track table**: source tracks fetched from the service, one
//!    "Dynamic Mix" action per row.
//!
//! 2. **Dynamic mix modal**: parameter editing with inline validation, a
//!    single-flight creation request, and an animation-gated close lifecycle.

pub mod api;
pub mod config;
pub mod ui;
