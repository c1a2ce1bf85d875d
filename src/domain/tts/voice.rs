use super::dto::RANDOM_VOICE;
use super::error::TtsServiceError;
use crate::infrastructure::repositories::VoiceCatalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One reference clip for a voice, mono, samples in [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSample {
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

/// Precomputed speaker embeddings for the autoregressive and diffusion models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditioningLatents {
    pub autoregressive: Vec<f32>,
    pub diffusion: Vec<f32>,
}

/// Conditioning inputs for one request. Both halves absent means the engine
/// picks a random speaker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceConditioning {
    pub voice_samples: Option<Vec<VoiceSample>>,
    pub conditioning_latents: Option<ConditioningLatents>,
}

impl VoiceConditioning {
    pub fn random() -> Self {
        Self::default()
    }

    pub fn is_random(&self) -> bool {
        self.voice_samples.is_none() && self.conditioning_latents.is_none()
    }
}

/// Maps a voice identifier to conditioning inputs read from the catalog.
pub struct VoiceResolver {
    catalog: Arc<dyn VoiceCatalog>,
}

impl VoiceResolver {
    pub fn new(catalog: Arc<dyn VoiceCatalog>) -> Self {
        Self { catalog }
    }

    /// `"random"` (exact, case-sensitive) never touches the catalog. Any other
    /// identifier must resolve completely or the request stops here.
    pub fn resolve(&self, voice: &str) -> Result<VoiceConditioning, TtsServiceError> {
        if voice == RANDOM_VOICE {
            return Ok(VoiceConditioning::random());
        }

        let conditioning = self
            .catalog
            .load_voice(voice)
            .map_err(TtsServiceError::VoiceResolution)?;

        if conditioning.is_random() {
            return Err(TtsServiceError::VoiceResolution(format!(
                "voice '{}' has no samples or conditioning latents",
                voice
            )));
        }

        Ok(conditioning)
    }

    pub fn list_voices(&self) -> Result<Vec<String>, TtsServiceError> {
        self.catalog.list_voices().map_err(TtsServiceError::Catalog)
    }
}
