use serde::{Deserialize, Serialize};

pub const RANDOM_VOICE: &str = "random";
pub const DEFAULT_PRESET: &str = "fast";

fn default_voice() -> String {
    RANDOM_VOICE.to_string()
}

fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}

/// Request for POST /tts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(flatten)]
    pub tuning: TuningParameters,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: default_voice(),
            preset: default_preset(),
            seed: None,
            tuning: TuningParameters::default(),
        }
    }
}

/// Optional engine tuning knobs. `None` means "let the engine decide"; a
/// present value, including `0` or `false`, is always forwarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TuningParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_autoregressive_samples: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_mel_tokens: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvvp_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffusion_iterations: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cond_free: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cond_free_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diffusion_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampler: Option<String>,
}

/// Response for GET /voices
#[derive(Debug, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub voices: Vec<String>,
}

/// Response for GET /presets
#[derive(Debug, Serialize, Deserialize)]
pub struct PresetsResponse {
    pub presets: Vec<String>,
}

/// Response for GET /samplers
#[derive(Debug, Serialize, Deserialize)]
pub struct SamplersResponse {
    pub samplers: Vec<String>,
}
