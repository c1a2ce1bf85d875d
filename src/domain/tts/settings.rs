use super::dto::{SynthesisRequest, TuningParameters};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub const PRESET_KEY: &str = "preset";
pub const SEED_KEY: &str = "use_deterministic_seed";

/// The closed set of tuning parameters that may be forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TuningParam {
    NumAutoregressiveSamples,
    Temperature,
    LengthPenalty,
    RepetitionPenalty,
    TopP,
    MaxMelTokens,
    CvvpAmount,
    DiffusionIterations,
    CondFree,
    CondFreeK,
    DiffusionTemperature,
    Sampler,
}

impl TuningParam {
    pub const ALL: [TuningParam; 12] = [
        TuningParam::NumAutoregressiveSamples,
        TuningParam::Temperature,
        TuningParam::LengthPenalty,
        TuningParam::RepetitionPenalty,
        TuningParam::TopP,
        TuningParam::MaxMelTokens,
        TuningParam::CvvpAmount,
        TuningParam::DiffusionIterations,
        TuningParam::CondFree,
        TuningParam::CondFreeK,
        TuningParam::DiffusionTemperature,
        TuningParam::Sampler,
    ];

    /// Keyword name understood by the engine
    pub fn as_str(&self) -> &'static str {
        match self {
            TuningParam::NumAutoregressiveSamples => "num_autoregressive_samples",
            TuningParam::Temperature => "temperature",
            TuningParam::LengthPenalty => "length_penalty",
            TuningParam::RepetitionPenalty => "repetition_penalty",
            TuningParam::TopP => "top_p",
            TuningParam::MaxMelTokens => "max_mel_tokens",
            TuningParam::CvvpAmount => "cvvp_amount",
            TuningParam::DiffusionIterations => "diffusion_iterations",
            TuningParam::CondFree => "cond_free",
            TuningParam::CondFreeK => "cond_free_k",
            TuningParam::DiffusionTemperature => "diffusion_temperature",
            TuningParam::Sampler => "sampler",
        }
    }
}

impl fmt::Display for TuningParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied tuning value.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Serialize for TuningValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TuningValue::Int(v) => serializer.serialize_i64(*v),
            TuningValue::Float(v) => serializer.serialize_f64(*v),
            TuningValue::Bool(v) => serializer.serialize_bool(*v),
            TuningValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

impl TuningParameters {
    /// Value the caller set for `param`, if any.
    pub fn get(&self, param: TuningParam) -> Option<TuningValue> {
        match param {
            TuningParam::NumAutoregressiveSamples => {
                self.num_autoregressive_samples.map(TuningValue::Int)
            }
            TuningParam::Temperature => self.temperature.map(TuningValue::Float),
            TuningParam::LengthPenalty => self.length_penalty.map(TuningValue::Float),
            TuningParam::RepetitionPenalty => self.repetition_penalty.map(TuningValue::Float),
            TuningParam::TopP => self.top_p.map(TuningValue::Float),
            TuningParam::MaxMelTokens => self.max_mel_tokens.map(TuningValue::Int),
            TuningParam::CvvpAmount => self.cvvp_amount.map(TuningValue::Float),
            TuningParam::DiffusionIterations => self.diffusion_iterations.map(TuningValue::Int),
            TuningParam::CondFree => self.cond_free.map(TuningValue::Bool),
            TuningParam::CondFreeK => self.cond_free_k.map(TuningValue::Float),
            TuningParam::DiffusionTemperature => {
                self.diffusion_temperature.map(TuningValue::Float)
            }
            TuningParam::Sampler => self.sampler.clone().map(TuningValue::Text),
        }
    }
}

/// Fully-resolved generation settings handed to the engine.
///
/// `preset` and `use_deterministic_seed` are always present (the seed may be
/// null). Tuning parameters appear only when the caller set them, so the
/// engine's own defaults apply to everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfiguration {
    pub preset: String,
    pub use_deterministic_seed: Option<i64>,
    overrides: BTreeMap<TuningParam, TuningValue>,
}

impl ResolvedConfiguration {
    /// Overlay the request's explicitly-set tuning parameters onto the
    /// mandatory entries. The request is left untouched.
    pub fn merge(request: &SynthesisRequest) -> Self {
        let overrides = TuningParam::ALL
            .iter()
            .filter_map(|param| request.tuning.get(*param).map(|value| (*param, value)))
            .collect();

        Self {
            preset: request.preset.clone(),
            use_deterministic_seed: request.seed,
            overrides,
        }
    }

    pub fn get(&self, param: TuningParam) -> Option<&TuningValue> {
        self.overrides.get(&param)
    }

    /// Every key of the resolved mapping, mandatory entries first.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec![PRESET_KEY, SEED_KEY];
        keys.extend(self.overrides.keys().map(TuningParam::as_str));
        keys
    }

    pub fn entry_count(&self) -> usize {
        2 + self.overrides.len()
    }
}

impl Serialize for ResolvedConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entry_count()))?;
        map.serialize_entry(PRESET_KEY, &self.preset)?;
        map.serialize_entry(SEED_KEY, &self.use_deterministic_seed)?;
        for (param, value) in &self.overrides {
            map.serialize_entry(param.as_str(), value)?;
        }
        map.end()
    }
}
