//! Separator model and output format catalogue

use serde::{Deserialize, Serialize};

/// Available separation models
///
/// The wire name (lowercase variant name) is what the separation service
/// expects in the `separator` field of a creation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorModel {
    /// Deezer Spleeter - fast, the service default
    #[default]
    Spleeter,
    /// Facebook Demucs - waveform-domain, supports random shifts
    Demucs,
    /// Sony X-UMX - supports EM iterations and softmask refinement
    Xumx,
    /// Sony D3Net - spectrogram-domain
    D3Net,
}

impl SeparatorModel {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Spleeter => "Spleeter",
            Self::Demucs => "Demucs",
            Self::Xumx => "X-UMX",
            Self::D3Net => "D3Net",
        }
    }

    /// All models (for UI enumeration)
    pub fn all() -> &'static [Self] {
        &[Self::Spleeter, Self::Demucs, Self::Xumx, Self::D3Net]
    }

    /// Whether the random shifts parameter applies to this model
    pub fn uses_random_shifts(&self) -> bool {
        matches!(self, Self::Demucs)
    }

    /// Whether EM iterations and softmask parameters apply to this model
    pub fn uses_softmask(&self) -> bool {
        matches!(self, Self::Xumx)
    }

    /// Whether separation with this model is known to be very slow on CPU
    pub fn is_slow_on_cpu(&self) -> bool {
        matches!(self, Self::Xumx | Self::D3Net)
    }
}

impl std::fmt::Display for SeparatorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Output MP3 bitrate
///
/// Serialized as a bare integer (kbps) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(into = "u32", try_from = "u32")]
pub enum Bitrate {
    Kbps192,
    #[default]
    Kbps256,
    Kbps320,
}

impl Bitrate {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Kbps192 => "192 kbps",
            Self::Kbps256 => "256 kbps",
            Self::Kbps320 => "320 kbps",
        }
    }

    /// All bitrates (for UI enumeration)
    pub fn all() -> &'static [Self] {
        &[Self::Kbps192, Self::Kbps256, Self::Kbps320]
    }

    /// Value in kbps as sent on the wire
    pub fn kbps(&self) -> u32 {
        match self {
            Self::Kbps192 => 192,
            Self::Kbps256 => 256,
            Self::Kbps320 => 320,
        }
    }
}

impl From<Bitrate> for u32 {
    fn from(bitrate: Bitrate) -> u32 {
        bitrate.kbps()
    }
}

impl TryFrom<u32> for Bitrate {
    type Error = String;

    fn try_from(kbps: u32) -> Result<Self, Self::Error> {
        match kbps {
            192 => Ok(Self::Kbps192),
            256 => Ok(Self::Kbps256),
            320 => Ok(Self::Kbps320),
            other => Err(format!("unsupported bitrate: {}", other)),
        }
    }
}

impl std::fmt::Display for Bitrate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_wire_names() {
        assert_eq!(
            serde_json::to_string(&SeparatorModel::Spleeter).unwrap(),
            "\"spleeter\""
        );
        assert_eq!(
            serde_json::to_string(&SeparatorModel::Xumx).unwrap(),
            "\"xumx\""
        );
        assert_eq!(
            serde_json::to_string(&SeparatorModel::D3Net).unwrap(),
            "\"d3net\""
        );
    }

    #[test]
    fn test_parameter_applicability() {
        assert!(SeparatorModel::Demucs.uses_random_shifts());
        assert!(!SeparatorModel::Xumx.uses_random_shifts());
        assert!(SeparatorModel::Xumx.uses_softmask());
        assert!(!SeparatorModel::D3Net.uses_softmask());
    }

    #[test]
    fn test_bitrate_wire_value() {
        assert_eq!(serde_json::to_string(&Bitrate::Kbps256).unwrap(), "256");
        assert_eq!(
            serde_json::from_str::<Bitrate>("320").unwrap(),
            Bitrate::Kbps320
        );
        assert!(serde_json::from_str::<Bitrate>("128").is_err());
    }
}
