use super::synthesis_engine_repository::SynthesisEngine;
use crate::domain::tts::{
    ConditioningLatents, ResolvedConfiguration, SynthesisResult, VoiceConditioning, VoiceSample,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Body of `POST {base}/tts_with_preset`
#[derive(Debug, Serialize)]
struct TtsWithPresetRequest<'a> {
    text: &'a str,
    voice_samples: Option<&'a [VoiceSample]>,
    conditioning_latents: Option<&'a ConditioningLatents>,
    settings: &'a ResolvedConfiguration,
}

#[derive(Debug, Deserialize)]
struct TtsWithPresetResponse {
    sample_rate: u32,
    audio: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct SamplersResponse {
    samplers: Vec<String>,
}

/// Synthesis engine reached over HTTP.
///
/// The model runs in a separate inference worker that owns the accelerator.
/// Requests carry no timeout: a generation runs until the worker answers.
pub struct HttpSynthesisEngine {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpSynthesisEngine {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl SynthesisEngine for HttpSynthesisEngine {
    async fn tts_with_preset(
        &self,
        text: &str,
        voice: &VoiceConditioning,
        settings: &ResolvedConfiguration,
    ) -> Result<SynthesisResult, String> {
        let body = TtsWithPresetRequest {
            text,
            voice_samples: voice.voice_samples.as_deref(),
            conditioning_latents: voice.conditioning_latents.as_ref(),
            settings,
        };

        let text_preview: String = text.chars().take(200).collect();
        tracing::info!(
            engine_url = %self.base_url,
            preset = %settings.preset,
            text_length = text.len(),
            text_preview = %text_preview,
            "Calling inference worker tts_with_preset"
        );

        let response = self
            .http_client
            .post(self.url("tts_with_preset"))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, engine_url = %self.base_url, "Inference worker unreachable");
                format!("Inference worker request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status.as_u16(),
                error = %error_text,
                "Inference worker rejected tts_with_preset"
            );
            return Err(format!("Inference worker returned {}: {}", status, error_text));
        }

        let generated = response
            .json::<TtsWithPresetResponse>()
            .await
            .map_err(|e| format!("Failed to parse inference worker response: {}", e))?;

        tracing::debug!(
            sample_rate = generated.sample_rate,
            sample_count = generated.audio.len(),
            "Inference worker audio received"
        );

        Ok(SynthesisResult {
            sample_rate: generated.sample_rate,
            samples: generated.audio,
        })
    }

    async fn samplers(&self) -> Result<Vec<String>, String> {
        let response = self
            .http_client
            .get(self.url("samplers"))
            .send()
            .await
            .map_err(|e| format!("Inference worker request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Inference worker returned {}", status));
        }

        response
            .json::<SamplersResponse>()
            .await
            .map(|r| r.samplers)
            .map_err(|e| format!("Failed to parse samplers: {}", e))
    }
}
