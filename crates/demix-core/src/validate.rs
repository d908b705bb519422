//! Parameter validation
//!
//! `derive_status` is a pure function of the current parameters. It is cheap
//! and is recomputed on every read instead of cached, so a blocking condition
//! clears the instant the offending parameter changes.

use crate::params::MixParams;
use crate::separator::SeparatorModel;

/// A single validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationNote {
    /// Softmask is enabled for X-UMX with a negative alpha. Blocks submission.
    InvalidSoftmaskAlpha,
    /// The selected model is known to take very long on CPU. Advisory only.
    SlowCpuModel,
}

impl ValidationNote {
    /// Whether this note disables the submit action
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::InvalidSoftmaskAlpha)
    }

    /// Message shown inline in the modal
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidSoftmaskAlpha => "Softmask alpha must be greater than 0.",
            Self::SlowCpuModel => "This model has very long CPU separation times.",
        }
    }
}

/// Result of validating a parameter set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixStatus {
    /// Findings in display order
    pub notes: Vec<ValidationNote>,
}

impl MixStatus {
    /// True when any note blocks submission
    pub fn blocking(&self) -> bool {
        self.notes.iter().any(ValidationNote::is_blocking)
    }

    /// Whether a specific note is present
    pub fn has(&self, note: ValidationNote) -> bool {
        self.notes.contains(&note)
    }
}

/// Derive submit-eligibility and advisories from the current parameters
pub fn derive_status(params: &MixParams) -> MixStatus {
    let mut notes = Vec::new();

    if params.model.is_slow_on_cpu() {
        notes.push(ValidationNote::SlowCpuModel);
    }

    let invalid_alpha =
        params.model == SeparatorModel::Xumx && params.softmask && params.softmask_alpha < 0.0;
    if invalid_alpha {
        notes.push(ValidationNote::InvalidSoftmaskAlpha);
    }

    MixStatus { notes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xumx_params(softmask: bool, alpha: f32) -> MixParams {
        MixParams {
            model: SeparatorModel::Xumx,
            softmask,
            softmask_alpha: alpha,
            ..MixParams::default()
        }
    }

    #[test]
    fn test_defaults_are_clean() {
        let status = derive_status(&MixParams::default());
        assert!(status.notes.is_empty());
        assert!(!status.blocking());
    }

    #[test]
    fn test_blocking_iff_xumx_softmask_negative_alpha() {
        assert!(derive_status(&xumx_params(true, -0.5)).blocking());

        // Each leg of the conjunction individually clears the block
        assert!(!derive_status(&xumx_params(false, -0.5)).blocking());
        assert!(!derive_status(&xumx_params(true, 0.5)).blocking());
        assert!(!derive_status(&MixParams {
            model: SeparatorModel::Demucs,
            softmask: true,
            softmask_alpha: -0.5,
            ..MixParams::default()
        })
        .blocking());

        // Zero is not negative
        assert!(!derive_status(&xumx_params(true, 0.0)).blocking());
    }

    #[test]
    fn test_slow_cpu_advisory_is_model_only() {
        for model in [SeparatorModel::Xumx, SeparatorModel::D3Net] {
            let status = derive_status(&MixParams {
                model,
                ..MixParams::default()
            });
            assert!(status.has(ValidationNote::SlowCpuModel));
            assert!(!status.blocking());
        }

        // Independent of the softmask fields
        let mut params = xumx_params(true, -0.5);
        let status = derive_status(&params);
        assert!(status.has(ValidationNote::SlowCpuModel));
        params.softmask = false;
        assert!(derive_status(&params).has(ValidationNote::SlowCpuModel));

        for model in [SeparatorModel::Spleeter, SeparatorModel::Demucs] {
            let status = derive_status(&MixParams {
                model,
                ..MixParams::default()
            });
            assert!(!status.has(ValidationNote::SlowCpuModel));
        }
    }

    #[test]
    fn test_derive_status_is_pure() {
        let params = xumx_params(true, -0.5);
        let first = derive_status(&params);
        let second = derive_status(&params);
        assert_eq!(first, second);
        // Input untouched
        assert_eq!(params, xumx_params(true, -0.5));
    }

    #[test]
    fn test_model_change_clears_stale_block() {
        let mut params = xumx_params(true, -0.5);
        assert!(derive_status(&params).blocking());

        params.model = SeparatorModel::Spleeter;
        assert!(!derive_status(&params).blocking());
    }
}
