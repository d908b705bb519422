//! Demix core - domain types for dynamic mix creation
//!
//! A "dynamic mix" is a source-separation job submitted to the separation
//! service for a single track. This crate holds everything the UI needs that
//! is independent of any widget toolkit:
//!
//! 1. **Separator catalogue**: the available separation models and output
//!    bitrates, with their wire representations.
//!
//! 2. **Mix parameters**: the user-editable configuration with documented
//!    defaults.
//!
//! 3. **Validation**: a pure function deriving submit-eligibility and
//!    advisories from the current parameters.
//!
//! 4. **API wire types**: the request/response bodies exchanged with the
//!    separation service.

pub mod api;
pub mod params;
pub mod separator;
pub mod validate;

pub use api::{CreateMixRequest, ErrorBody, MixCreated, SeparatorArgs, TrackRef};
pub use params::MixParams;
pub use separator::{Bitrate, SeparatorModel};
pub use validate::{derive_status, MixStatus, ValidationNote};
