//! Application messages

use demix_core::api::{MixCreated, TrackRef};
use demix_core::{Bitrate, SeparatorModel};

use crate::api::SubmitFailure;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Track table
    RefreshTracks,
    TracksLoaded(Result<Vec<TrackRef>, String>),
    /// Open the dynamic mix modal for a track (by table index)
    OpenMixModal(usize),

    // Dynamic mix modal
    MixModal(MixModalMessage),
}

/// Messages scoped to the dynamic mix modal
#[derive(Debug, Clone)]
pub enum MixModalMessage {
    // Parameter edits, one per field
    SetModel(SeparatorModel),
    SetRandomShifts(u32),
    SetEmIterations(u32),
    SetSoftmask(bool),
    SetAlphaInput(String),
    SetBitrate(Bitrate),

    /// Primary action pressed
    Submit,
    /// Creation request finished; epoch identifies the modal instance it
    /// belongs to so late responses can be dropped
    SubmitFinished {
        epoch: u64,
        result: Result<MixCreated, SubmitFailure>,
    },
    /// User asked to close (cancel button, ×, or backdrop)
    HideRequested,
    /// Close animation interval elapsed
    ExitFinished,
}
