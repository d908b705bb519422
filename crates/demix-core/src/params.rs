//! User-editable mix parameters

use serde::{Deserialize, Serialize};

use crate::separator::{Bitrate, SeparatorModel};

/// Default alpha value for softmask refinement
pub const DEFAULT_SOFTMASK_ALPHA: f32 = 1.0;

/// Random shift counts offered in the UI (Demucs)
pub const RANDOM_SHIFT_CHOICES: &[u32] = &[0, 1, 2, 5, 10];

/// EM iteration counts offered in the UI (X-UMX)
pub const EM_ITERATION_CHOICES: &[u32] = &[1, 2];

/// Configuration for a dynamic mix creation request
///
/// Every field has a default; the modal restores these defaults whenever it
/// fully closes. Fields that do not apply to the selected model keep their
/// values - applicability only gates whether they are sent any attention
/// during validation and shown in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixParams {
    /// Which separation model to run
    pub model: SeparatorModel,
    /// Random shifts for the shift trick (Demucs). Non-negative.
    pub random_shifts: u32,
    /// Expectation-maximization iterations (X-UMX). Positive.
    pub em_iterations: u32,
    /// Whether to apply softmask refinement (X-UMX)
    pub softmask: bool,
    /// Softmask alpha; only considered while `softmask` is enabled
    pub softmask_alpha: f32,
    /// Output bitrate for the rendered stems
    pub bitrate: Bitrate,
}

impl Default for MixParams {
    fn default() -> Self {
        Self {
            model: SeparatorModel::default(),
            random_shifts: 0,
            em_iterations: 1,
            softmask: false,
            softmask_alpha: DEFAULT_SOFTMASK_ALPHA,
            bitrate: Bitrate::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = MixParams::default();
        assert_eq!(params.model, SeparatorModel::Spleeter);
        assert_eq!(params.random_shifts, 0);
        assert_eq!(params.em_iterations, 1);
        assert!(!params.softmask);
        assert_eq!(params.softmask_alpha, DEFAULT_SOFTMASK_ALPHA);
        assert_eq!(params.bitrate, Bitrate::Kbps256);
    }

    #[test]
    fn test_field_edits_are_independent() {
        // Replacing one field leaves every other field untouched
        let defaults = MixParams::default();

        let mut params = defaults.clone();
        params.softmask = true;
        assert_eq!(params.model, defaults.model);
        assert_eq!(params.softmask_alpha, defaults.softmask_alpha);

        params.model = SeparatorModel::Xumx;
        assert!(params.softmask);
        assert_eq!(params.em_iterations, defaults.em_iterations);

        // Toggling softmask back off does not clear the alpha value
        params.softmask_alpha = -0.5;
        params.softmask = false;
        assert_eq!(params.softmask_alpha, -0.5);
    }
}
