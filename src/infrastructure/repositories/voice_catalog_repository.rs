use crate::domain::tts::VoiceConditioning;

/// Read-only catalog of reference voices.
///
/// Lookups are synchronous: resolving a voice never yields to the runtime, so
/// the engine call stays the only suspension point of a request.
pub trait VoiceCatalog: Send + Sync {
    /// Identifiers of every voice in the catalog
    fn list_voices(&self) -> Result<Vec<String>, String>;

    /// Load the reference clips and/or precomputed latents for `voice`
    ///
    /// # Errors
    /// Returns error if the voice does not exist or its files cannot be read
    fn load_voice(&self, voice: &str) -> Result<VoiceConditioning, String>;
}
