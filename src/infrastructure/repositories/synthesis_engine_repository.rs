use crate::domain::tts::{ResolvedConfiguration, SynthesisResult, VoiceConditioning};
use async_trait::async_trait;

/// The speech synthesis model.
///
/// A single instance is created at startup and shared by every request.
/// Implementations must not retry: one call here is one generation.
#[async_trait]
pub trait SynthesisEngine: Send + Sync {
    /// Generate speech for `text` using the named preset and overrides in `settings`
    ///
    /// # Arguments
    /// * `text` - Text to speak
    /// * `voice` - Conditioning inputs; both halves absent means a random voice
    /// * `settings` - Preset, seed and any caller-set tuning parameters
    ///
    /// # Errors
    /// Returns error if the engine rejects the settings or fails internally
    async fn tts_with_preset(
        &self,
        text: &str,
        voice: &VoiceConditioning,
        settings: &ResolvedConfiguration,
    ) -> Result<SynthesisResult, String>;

    /// Diffusion sampler names the engine accepts
    async fn samplers(&self) -> Result<Vec<String>, String>;
}
