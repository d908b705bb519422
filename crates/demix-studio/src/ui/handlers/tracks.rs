//! Track table message handlers
//!
//! Handles: RefreshTracks, TracksLoaded.

use std::sync::Arc;

use iced::Task;

use demix_core::api::TrackRef;

use super::super::app::DemixApp;
use super::super::message::Message;

impl DemixApp {
    /// Handle RefreshTracks message
    pub fn handle_refresh_tracks(&mut self) -> Task<Message> {
        self.loading_tracks = true;
        self.tracks_error = None;
        let client = Arc::clone(&self.client);
        Task::perform(
            async move { client.list_tracks().map_err(|e| e.to_string()) },
            Message::TracksLoaded,
        )
    }

    /// Handle TracksLoaded message
    pub fn handle_tracks_loaded(
        &mut self,
        result: Result<Vec<TrackRef>, String>,
    ) -> Task<Message> {
        self.loading_tracks = false;
        match result {
            Ok(tracks) => {
                log::info!("Loaded {} tracks", tracks.len());
                self.tracks = tracks;
                self.tracks_error = None;
            }
            Err(e) => {
                log::warn!("Failed to load tracks: {}", e);
                self.tracks_error = Some(e);
            }
        }
        Task::none()
    }
}
