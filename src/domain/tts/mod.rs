pub mod dto;
pub mod encoder;
pub mod error;
pub mod presets;
pub mod reclaimer;
pub mod service;
pub mod settings;
pub mod voice;

pub use dto::{SynthesisRequest, TuningParameters};
pub use encoder::{encode_wav, AudioPayload, SynthesisResult};
pub use error::TtsServiceError;
pub use reclaimer::ResourceReclaimer;
pub use service::{TtsService, TtsServiceApi};
pub use settings::{ResolvedConfiguration, TuningParam, TuningValue};
pub use voice::{ConditioningLatents, VoiceConditioning, VoiceResolver, VoiceSample};
