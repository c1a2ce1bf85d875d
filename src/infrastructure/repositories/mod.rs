pub mod accelerator_repository;
pub mod fs_voice_catalog_repository;
pub mod http_synthesis_engine_repository;
pub mod synthesis_engine_repository;
pub mod voice_catalog_repository;

pub use accelerator_repository::{
    AcceleratorRuntime, HttpAcceleratorRuntime, NoopAcceleratorRuntime,
};
pub use fs_voice_catalog_repository::FsVoiceCatalog;
pub use http_synthesis_engine_repository::HttpSynthesisEngine;
pub use synthesis_engine_repository::SynthesisEngine;
pub use voice_catalog_repository::VoiceCatalog;
