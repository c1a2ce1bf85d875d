use super::dto::SynthesisRequest;
use super::encoder::{encode_wav, AudioPayload};
use super::error::TtsServiceError;
use super::settings::ResolvedConfiguration;
use super::voice::VoiceResolver;
use crate::infrastructure::repositories::{SynthesisEngine, VoiceCatalog};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Lifecycle of one synthesis request, used for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStage {
    Received,
    VoiceResolved,
    ConfigMerged,
    Synthesizing,
    Encoded,
}

impl fmt::Display for RequestStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestStage::Received => "received",
            RequestStage::VoiceResolved => "voice_resolved",
            RequestStage::ConfigMerged => "config_merged",
            RequestStage::Synthesizing => "synthesizing",
            RequestStage::Encoded => "encoded",
        };
        f.write_str(name)
    }
}

pub struct TtsService {
    voice_resolver: VoiceResolver,
    engine: Arc<dyn SynthesisEngine>,
}

impl TtsService {
    pub fn new(voice_catalog: Arc<dyn VoiceCatalog>, engine: Arc<dyn SynthesisEngine>) -> Self {
        Self {
            voice_resolver: VoiceResolver::new(voice_catalog),
            engine,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech
    ///
    /// This operation:
    /// - Resolves the requested voice against the catalog
    /// - Merges caller tuning over the engine defaults
    /// - Calls the engine exactly once (no retry)
    /// - Encodes the waveform as WAV
    async fn synthesize(&self, request: SynthesisRequest) -> Result<AudioPayload, TtsServiceError>;

    /// Identifiers of every voice in the catalog
    async fn list_voices(&self) -> Result<Vec<String>, TtsServiceError>;

    /// Sampler names supported by the engine
    async fn list_samplers(&self) -> Result<Vec<String>, String>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<AudioPayload, TtsServiceError> {
        tracing::info!(
            stage = %RequestStage::Received,
            voice = %request.voice,
            preset = %request.preset,
            text_length = request.text.len(),
            "TTS synthesis request"
        );

        // 1. Resolve voice (no engine call if this fails)
        let conditioning = self.voice_resolver.resolve(&request.voice)?;
        tracing::debug!(
            stage = %RequestStage::VoiceResolved,
            voice = %request.voice,
            sample_count = conditioning.voice_samples.as_ref().map_or(0, |s| s.len()),
            has_latents = conditioning.conditioning_latents.is_some(),
            "Voice resolved"
        );

        // 2. Merge settings
        let settings = ResolvedConfiguration::merge(&request);
        tracing::debug!(
            stage = %RequestStage::ConfigMerged,
            settings = ?settings.keys(),
            "Generation settings resolved"
        );

        // 3. Synthesize
        tracing::info!(stage = %RequestStage::Synthesizing, "Calling synthesis engine");
        let start_time = std::time::Instant::now();
        let result = self
            .engine
            .tts_with_preset(&request.text, &conditioning, &settings)
            .await
            .map_err(TtsServiceError::Synthesis)?;
        let latency = start_time.elapsed();

        // 4. Encode
        let payload = encode_wav(&result)?;

        tracing::info!(
            stage = %RequestStage::Encoded,
            latency_ms = latency.as_millis(),
            audio_duration_secs = format!("{:.2}", result.duration_secs()),
            audio_size_bytes = payload.bytes.len(),
            "TTS synthesis completed"
        );

        Ok(payload)
    }

    async fn list_voices(&self) -> Result<Vec<String>, TtsServiceError> {
        self.voice_resolver.list_voices()
    }

    async fn list_samplers(&self) -> Result<Vec<String>, String> {
        self.engine.samplers().await
    }
}
