//! Dynamic mix modal message handlers
//!
//! Handles: OpenMixModal and every MixModalMessage. Transitions live on
//! `MixModalState`; this layer only wires them to background tasks (the
//! creation request and the close-animation timer).

use std::sync::Arc;

use iced::Task;

use super::super::app::DemixApp;
use super::super::message::{Message, MixModalMessage};
use super::super::state::{SubmitOutcome, EXIT_ANIMATION};

impl DemixApp {
    /// Handle OpenMixModal message
    pub fn handle_open_mix_modal(&mut self, index: usize) -> Task<Message> {
        let Some(track) = self.tracks.get(index) else {
            log::warn!("OpenMixModal for unknown track index {}", index);
            return Task::none();
        };
        self.mix_modal.open(track.clone());
        Task::none()
    }

    /// Handle all MixModalMessage variants
    pub fn handle_mix_modal(&mut self, message: MixModalMessage) -> Task<Message> {
        match message {
            MixModalMessage::SetModel(model) => {
                self.mix_modal.set_model(model);
            }
            MixModalMessage::SetRandomShifts(shifts) => {
                self.mix_modal.set_random_shifts(shifts);
            }
            MixModalMessage::SetEmIterations(iterations) => {
                self.mix_modal.set_em_iterations(iterations);
            }
            MixModalMessage::SetSoftmask(enabled) => {
                self.mix_modal.set_softmask(enabled);
            }
            MixModalMessage::SetAlphaInput(text) => {
                self.mix_modal.set_alpha_input(text);
            }
            MixModalMessage::SetBitrate(bitrate) => {
                self.mix_modal.set_bitrate(bitrate);
            }

            MixModalMessage::Submit => {
                // begin_submit refuses when blocked, busy, or targetless, so
                // a stray press while disabled stays a no-op
                if let Some((epoch, request)) = self.mix_modal.begin_submit() {
                    let client = Arc::clone(&self.client);
                    return Task::perform(
                        async move {
                            let result = client.create_dynamic_mix(&request);
                            (epoch, result)
                        },
                        |(epoch, result)| {
                            Message::MixModal(MixModalMessage::SubmitFinished { epoch, result })
                        },
                    );
                }
            }

            MixModalMessage::SubmitFinished { epoch, result } => {
                match self.mix_modal.apply_submit_result(epoch, result) {
                    SubmitOutcome::Created(created) => {
                        // Caller-side reaction to the new mix, then close
                        self.last_created = Some(created);
                        return Self::exit_timer();
                    }
                    SubmitOutcome::Failed | SubmitOutcome::Stale => {}
                }
            }

            MixModalMessage::HideRequested => {
                if self.mix_modal.request_hide() {
                    return Self::exit_timer();
                }
            }

            MixModalMessage::ExitFinished => {
                self.mix_modal.finish_exit();
            }
        }
        Task::none()
    }

    /// Fire ExitFinished once the close transition has run its course
    fn exit_timer() -> Task<Message> {
        Task::perform(tokio::time::sleep(EXIT_ANIMATION), |_| {
            Message::MixModal(MixModalMessage::ExitFinished)
        })
    }
}
