//! Wire types for the separation service API
//!
//! Covers the two endpoints the studio talks to:
//! - `POST /api/mix/dynamic/` - create a dynamic mix (these request/response
//!   bodies)
//! - `GET /api/track/` - list source tracks (`TrackRef`)

use serde::{Deserialize, Serialize};

use crate::params::MixParams;
use crate::separator::{Bitrate, SeparatorModel};

/// A source track as reported by the service
///
/// Read-only from the modal's point of view: the caller selects one and the
/// modal only echoes its id back in the creation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackRef {
    /// Server-side track identifier
    pub id: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub title: String,
}

impl TrackRef {
    /// "Artist - Title" label for display
    pub fn display_name(&self) -> String {
        match (self.artist.is_empty(), self.title.is_empty()) {
            (false, false) => format!("{} - {}", self.artist, self.title),
            (true, false) => self.title.clone(),
            (false, true) => self.artist.clone(),
            (true, true) => self.id.clone(),
        }
    }
}

/// Model-specific arguments nested in a creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparatorArgs {
    pub random_shifts: u32,
    pub iterations: u32,
    pub softmask: bool,
    pub alpha: f32,
}

/// Body of `POST /api/mix/dynamic/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMixRequest {
    /// Id of the track to separate
    pub source_track: String,
    pub separator: SeparatorModel,
    pub separator_args: SeparatorArgs,
    pub bitrate: Bitrate,
}

impl CreateMixRequest {
    /// Build a request from a parameter snapshot
    ///
    /// The request owns copies of everything, so edits to the parameter store
    /// after this point cannot alter an in-flight payload.
    pub fn new(source_track: &str, params: &MixParams) -> Self {
        Self {
            source_track: source_track.to_string(),
            separator: params.model,
            separator_args: SeparatorArgs {
                random_shifts: params.random_shifts,
                iterations: params.em_iterations,
                softmask: params.softmask,
                alpha: params.softmask_alpha,
            },
            bitrate: params.bitrate,
        }
    }
}

/// Success body of `POST /api/mix/dynamic/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixCreated {
    /// Echo of the requested track id
    pub source_track: String,
    /// Identifier of the newly created mix
    pub id: String,
}

/// Failure body of `POST /api/mix/dynamic/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Human-readable complaints, displayed verbatim and in order
    #[serde(default)]
    pub errors: Vec<String>,
}
