//! Dynamic mix modal state
//!
//! The modal owns its parameter store and submission state exclusively; all
//! mutation goes through the methods here, driven one message at a time by
//! the update loop. The phase machine is:
//!
//! `Closed -> Editing -> Submitting -> {Editing (with errors) | Exiting} -> Closed`
//!
//! Parameters and errors reset to defaults only in `finish_exit`, after the
//! close animation interval has elapsed, so the form contents never change
//! while the dialog is still on screen.

use std::time::Duration;

use demix_core::api::{CreateMixRequest, MixCreated, TrackRef};
use demix_core::params::MixParams;
use demix_core::validate::{derive_status, MixStatus};

use crate::api::SubmitFailure;

/// How long the modal close transition runs before state may be reset
pub const EXIT_ANIMATION: Duration = Duration::from_millis(200);

/// Lifecycle phase of the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    /// Not shown. Re-enterable.
    #[default]
    Closed,
    /// Shown, accepting edits
    Editing,
    /// Shown, one creation request outstanding
    Submitting,
    /// Close transition running; contents still visible, not yet reset
    Exiting,
}

/// What became of a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Mix created; the caller should react (e.g. navigate to it)
    Created(MixCreated),
    /// Rejected or failed; errors are now displayed, modal stays open
    Failed,
    /// Response for a superseded or closed modal instance, dropped unapplied
    Stale,
}

/// State for the dynamic mix modal
#[derive(Debug, Default)]
pub struct MixModalState {
    /// Current lifecycle phase
    pub phase: ModalPhase,
    /// Track the mix is being created for; set at open, cleared at close
    pub target: Option<TrackRef>,
    /// User-editable parameters
    pub params: MixParams,
    /// Raw text of the alpha field, so partial input like "-" survives typing
    pub alpha_input: String,
    /// Server-reported errors from the last failed attempt
    pub errors: Vec<String>,
    /// Bumped at every open; responses carrying an older epoch are dropped
    epoch: u64,
}

impl MixModalState {
    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// True exactly while a creation request is outstanding
    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    /// Validation of the current parameters, recomputed on every call
    pub fn status(&self) -> MixStatus {
        derive_status(&self.params)
    }

    /// Whether the primary action is currently allowed
    pub fn can_submit(&self) -> bool {
        self.phase == ModalPhase::Editing && self.target.is_some() && !self.status().blocking()
    }

    /// Show the modal for a target track
    ///
    /// Parameters are at defaults here: the previous close already reset them,
    /// and a fresh state starts from `Default`.
    pub fn open(&mut self, target: TrackRef) {
        if self.phase != ModalPhase::Closed {
            log::warn!("Ignoring open request while modal is in {:?}", self.phase);
            return;
        }
        log::info!("Opening dynamic mix modal for track {}", target.id);
        self.target = Some(target);
        self.alpha_input = self.params.softmask_alpha.to_string();
        self.phase = ModalPhase::Editing;
        self.epoch += 1;
    }

    // Field setters. Each replaces exactly one field; applicability and
    // validity are the validator's concern, not theirs.

    pub fn set_model(&mut self, model: demix_core::SeparatorModel) {
        self.params.model = model;
    }

    pub fn set_random_shifts(&mut self, shifts: u32) {
        self.params.random_shifts = shifts;
    }

    pub fn set_em_iterations(&mut self, iterations: u32) {
        self.params.em_iterations = iterations;
    }

    pub fn set_softmask(&mut self, enabled: bool) {
        self.params.softmask = enabled;
    }

    pub fn set_bitrate(&mut self, bitrate: demix_core::Bitrate) {
        self.params.bitrate = bitrate;
    }

    /// Record alpha field text; the stored float follows every parsable value
    pub fn set_alpha_input(&mut self, text: String) {
        if let Ok(alpha) = text.trim().parse::<f32>() {
            self.params.softmask_alpha = alpha;
        }
        self.alpha_input = text;
    }

    /// Start a submission if allowed
    ///
    /// Returns the epoch and the payload snapshot to send, or `None` when the
    /// attempt is refused (no target, blocked by validation, or a request is
    /// already outstanding - at most one per modal instance).
    pub fn begin_submit(&mut self) -> Option<(u64, CreateMixRequest)> {
        if !self.can_submit() {
            log::debug!("Submit refused in phase {:?}", self.phase);
            return None;
        }
        let target = self.target.as_ref()?;
        let request = CreateMixRequest::new(&target.id, &self.params);
        self.errors.clear();
        self.phase = ModalPhase::Submitting;
        Some((self.epoch, request))
    }

    /// Apply the result of a finished submission
    pub fn apply_submit_result(
        &mut self,
        epoch: u64,
        result: Result<MixCreated, SubmitFailure>,
    ) -> SubmitOutcome {
        if epoch != self.epoch || self.phase != ModalPhase::Submitting {
            log::debug!("Dropping stale submission response (epoch {})", epoch);
            return SubmitOutcome::Stale;
        }
        match result {
            Ok(created) => {
                log::info!(
                    "Dynamic mix {} created for track {}",
                    created.id,
                    created.source_track
                );
                // Begin closing immediately; reset waits for finish_exit
                self.phase = ModalPhase::Exiting;
                SubmitOutcome::Created(created)
            }
            Err(failure) => {
                log::warn!("Mix creation failed: {:?}", failure.errors);
                self.errors = failure.errors;
                self.phase = ModalPhase::Editing;
                SubmitOutcome::Failed
            }
        }
    }

    /// User asked to close (cancel button, ×, or backdrop)
    ///
    /// Refused while a submission is outstanding. Returns whether the close
    /// transition started, so the caller can schedule the exit timer.
    pub fn request_hide(&mut self) -> bool {
        match self.phase {
            ModalPhase::Editing => {
                self.phase = ModalPhase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Close transition finished; the one place state resets to defaults
    pub fn finish_exit(&mut self) {
        if self.phase != ModalPhase::Exiting {
            log::warn!("finish_exit in phase {:?}", self.phase);
        }
        self.phase = ModalPhase::Closed;
        self.target = None;
        self.reset();
    }

    /// Restore parameters and submission state to defaults
    pub fn reset(&mut self) {
        self.params = MixParams::default();
        self.alpha_input.clear();
        self.errors.clear();
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use demix_core::{Bitrate, SeparatorModel};

    fn track(id: &str) -> TrackRef {
        TrackRef {
            id: id.to_string(),
            artist: String::from("Artist"),
            title: String::from("Title"),
        }
    }

    fn open_modal() -> MixModalState {
        let mut state = MixModalState::default();
        state.open(track("s1"));
        state
    }

    fn created(source: &str, id: &str) -> MixCreated {
        MixCreated {
            source_track: source.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_defaults_submit_enabled_no_warnings() {
        // Scenario A
        let state = open_modal();
        assert!(state.can_submit());
        assert!(state.status().notes.is_empty());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_closed_modal_refuses_everything() {
        let mut state = MixModalState::default();
        assert!(!state.can_submit());
        assert!(state.begin_submit().is_none());
        assert!(!state.request_hide());
    }

    #[test]
    fn test_blocking_alpha_disables_and_reenables_submit() {
        // Scenario B
        let mut state = open_modal();
        state.set_model(SeparatorModel::Xumx);
        state.set_softmask(true);
        state.set_alpha_input(String::from("-0.5"));

        assert_eq!(state.params.softmask_alpha, -0.5);
        assert!(state.status().blocking());
        assert!(!state.can_submit());
        assert!(state.begin_submit().is_none());

        state.set_alpha_input(String::from("0.5"));
        assert!(!state.status().blocking());
        assert!(state.can_submit());
    }

    #[test]
    fn test_advisory_warning_keeps_submit_enabled() {
        // Scenario C
        let mut state = open_modal();
        state.set_model(SeparatorModel::D3Net);
        let status = state.status();
        assert!(status.has(demix_core::ValidationNote::SlowCpuModel));
        assert!(!status.blocking());
        assert!(state.can_submit());
    }

    #[test]
    fn test_success_path_closes_and_reports_mix() {
        // Scenario D
        let mut state = open_modal();
        let (epoch, request) = state.begin_submit().expect("submit should start");
        assert!(state.is_submitting());
        assert_eq!(request.source_track, "s1");

        let outcome = state.apply_submit_result(epoch, Ok(created("s1", "m1")));
        assert_eq!(outcome, SubmitOutcome::Created(created("s1", "m1")));
        assert_eq!(state.phase, ModalPhase::Exiting);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_failure_path_keeps_modal_open_with_errors() {
        // Scenario E
        let mut state = open_modal();
        let (epoch, _) = state.begin_submit().unwrap();

        let failure = SubmitFailure {
            errors: vec![String::from("bitrate not supported")],
        };
        let outcome = state.apply_submit_result(epoch, Err(failure));
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(state.phase, ModalPhase::Editing);
        assert_eq!(state.errors, vec!["bitrate not supported"]);
        assert!(!state.is_submitting());

        // Resubmission is possible and clears the old errors
        let (epoch, _) = state.begin_submit().unwrap();
        assert!(state.errors.is_empty());
        state.apply_submit_result(epoch, Ok(created("s1", "m2")));
    }

    #[test]
    fn test_reset_fires_only_after_exit_completes() {
        // Scenario F
        let mut state = open_modal();
        state.set_model(SeparatorModel::Demucs);
        state.set_random_shifts(5);
        state.set_bitrate(Bitrate::Kbps320);

        assert!(state.request_hide());
        // Still exiting: contents untouched so the close animation shows them
        assert_eq!(state.phase, ModalPhase::Exiting);
        assert_eq!(state.params.random_shifts, 5);
        assert!(state.target.is_some());

        state.finish_exit();
        assert_eq!(state.phase, ModalPhase::Closed);
        assert!(state.target.is_none());
        assert_eq!(state.params, MixParams::default());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = open_modal();
        state.set_softmask(true);
        state.set_alpha_input(String::from("2.5"));
        state.reset();
        let once = (state.params.clone(), state.alpha_input.clone());
        state.reset();
        assert_eq!((state.params.clone(), state.alpha_input.clone()), once);
        assert_eq!(state.params, MixParams::default());
    }

    #[test]
    fn test_second_submit_while_busy_is_a_noop() {
        let mut state = open_modal();
        let first = state.begin_submit();
        assert!(first.is_some());
        assert!(state.begin_submit().is_none());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_hide_refused_while_submitting() {
        let mut state = open_modal();
        state.begin_submit().unwrap();
        assert!(!state.request_hide());
        assert_eq!(state.phase, ModalPhase::Submitting);
    }

    #[test]
    fn test_edits_during_flight_do_not_touch_payload() {
        let mut state = open_modal();
        let (_, request) = state.begin_submit().unwrap();

        state.set_model(SeparatorModel::Xumx);
        state.set_em_iterations(2);

        assert_eq!(request.separator, SeparatorModel::Spleeter);
        assert_eq!(request.separator_args.iterations, 1);
        // The edits did land in the store for a later attempt
        assert_eq!(state.params.model, SeparatorModel::Xumx);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = open_modal();
        let (epoch, _) = state.begin_submit().unwrap();

        // Modal torn down and reopened before the response lands
        state.phase = ModalPhase::Exiting;
        state.finish_exit();
        state.open(track("s2"));

        let outcome = state.apply_submit_result(epoch, Ok(created("s1", "m1")));
        assert_eq!(outcome, SubmitOutcome::Stale);
        assert_eq!(state.phase, ModalPhase::Editing);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_response_after_close_is_dropped() {
        let mut state = open_modal();
        let (epoch, _) = state.begin_submit().unwrap();
        state.phase = ModalPhase::Exiting;
        state.finish_exit();

        let outcome = state.apply_submit_result(
            epoch,
            Err(SubmitFailure {
                errors: vec![String::from("late failure")],
            }),
        );
        assert_eq!(outcome, SubmitOutcome::Stale);
        assert!(state.errors.is_empty());
        assert_eq!(state.phase, ModalPhase::Closed);
    }

    #[test]
    fn test_softmask_toggle_preserves_alpha() {
        let mut state = open_modal();
        state.set_model(SeparatorModel::Xumx);
        state.set_softmask(true);
        state.set_alpha_input(String::from("-0.5"));
        assert!(state.status().blocking());

        // Unchecking only changes whether alpha is considered
        state.set_softmask(false);
        assert_eq!(state.params.softmask_alpha, -0.5);
        assert!(!state.status().blocking());
    }

    #[test]
    fn test_partial_alpha_input_keeps_last_value() {
        let mut state = open_modal();
        state.set_alpha_input(String::from("0.7"));
        state.set_alpha_input(String::from("-"));
        assert_eq!(state.params.softmask_alpha, 0.7);
        assert_eq!(state.alpha_input, "-");
    }
}
