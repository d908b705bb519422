//! Main application state and iced implementation

use std::sync::Arc;

use iced::{Element, Task, Theme};

use demix_core::api::{MixCreated, TrackRef};

use crate::api::MixClient;
use crate::config::Config;

use super::message::{Message, MixModalMessage};
use super::modals::with_modal_overlay;
use super::state::MixModalState;
use super::{mix_modal, track_table};

/// Application state
pub struct DemixApp {
    /// Separation service client, shared with background tasks
    pub client: Arc<MixClient>,
    /// Source tracks fetched from the service
    pub tracks: Vec<TrackRef>,
    /// Whether a track fetch is in progress
    pub loading_tracks: bool,
    /// Error from the last track fetch, if any
    pub tracks_error: Option<String>,
    /// Dynamic mix modal state
    pub mix_modal: MixModalState,
    /// Most recently created mix, shown in the status line
    pub last_created: Option<MixCreated>,
}

impl DemixApp {
    /// Create the application and kick off the initial track fetch
    pub fn new() -> (Self, Task<Message>) {
        let config = match crate::config::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config, using defaults: {:#}", e);
                Config::default()
            }
        };
        log::info!("Separation service at {}", config.api.base_url);

        let app = Self {
            client: Arc::new(MixClient::new(&config.api)),
            tracks: Vec::new(),
            loading_tracks: false,
            tracks_error: None,
            mix_modal: MixModalState::default(),
            last_created: None,
        };

        let cmd = Task::perform(async {}, |_| Message::RefreshTracks);
        (app, cmd)
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RefreshTracks => self.handle_refresh_tracks(),
            Message::TracksLoaded(result) => self.handle_tracks_loaded(result),
            Message::OpenMixModal(index) => self.handle_open_mix_modal(index),
            Message::MixModal(msg) => self.handle_mix_modal(msg),
        }
    }

    /// Render the application
    pub fn view(&self) -> Element<'_, Message> {
        let base = track_table::view(self);

        if !self.mix_modal.is_open() {
            return base;
        }

        // Backdrop dismissal is suppressed while a submission is outstanding
        let close_message = if self.mix_modal.is_submitting() {
            None
        } else {
            Some(Message::MixModal(MixModalMessage::HideRequested))
        };

        with_modal_overlay(base, mix_modal::view(&self.mix_modal), close_message)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
