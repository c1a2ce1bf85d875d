use super::voice_catalog_repository::VoiceCatalog;
use crate::domain::tts::{ConditioningLatents, VoiceConditioning, VoiceSample};
use std::fs;
use std::path::{Path, PathBuf};

const LATENTS_FILE: &str = "latents.json";

/// Voice catalog backed by a directory tree:
///
/// ```text
/// <root>/<voice>/*.wav          reference clips
/// <root>/<voice>/latents.json   precomputed conditioning latents (optional)
/// ```
pub struct FsVoiceCatalog {
    root: PathBuf,
}

impl FsVoiceCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for `voice`, refusing anything that could escape the root
    fn voice_dir(&self, voice: &str) -> Result<PathBuf, String> {
        let is_plain_name = !voice.is_empty()
            && voice != "."
            && voice != ".."
            && !voice.contains(['/', '\\']);
        if !is_plain_name {
            return Err(format!("voice '{}' not found", voice));
        }

        let dir = self.root.join(voice);
        if !dir.is_dir() {
            return Err(format!("voice '{}' not found", voice));
        }
        Ok(dir)
    }

    fn read_samples(dir: &Path) -> Result<Vec<VoiceSample>, String> {
        let mut clips: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|e| format!("Failed to read voice directory {}: {}", dir.display(), e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .map(|ext| ext.eq_ignore_ascii_case("wav"))
                        .unwrap_or(false)
            })
            .collect();
        clips.sort();

        clips.iter().map(|path| read_wav(path)).collect()
    }

    fn read_latents(dir: &Path) -> Result<Option<ConditioningLatents>, String> {
        let path = dir.join(LATENTS_FILE);
        if !path.is_file() {
            return Ok(None);
        }

        let raw = fs::read(&path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let latents = serde_json::from_slice(&raw)
            .map_err(|e| format!("Invalid latents file {}: {}", path.display(), e))?;
        Ok(Some(latents))
    }
}

impl VoiceCatalog for FsVoiceCatalog {
    fn list_voices(&self) -> Result<Vec<String>, String> {
        let entries = fs::read_dir(&self.root)
            .map_err(|e| format!("{}: {}", self.root.display(), e))?;

        let mut voices: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        voices.sort();

        Ok(voices)
    }

    fn load_voice(&self, voice: &str) -> Result<VoiceConditioning, String> {
        let dir = self.voice_dir(voice)?;

        let samples = Self::read_samples(&dir)?;
        let latents = Self::read_latents(&dir)?;

        tracing::debug!(
            voice = voice,
            clip_count = samples.len(),
            has_latents = latents.is_some(),
            "Voice loaded from catalog"
        );

        Ok(VoiceConditioning {
            voice_samples: if samples.is_empty() { None } else { Some(samples) },
            conditioning_latents: latents,
        })
    }
}

/// Decode a WAV clip into mono f32 samples in [-1, 1]
fn read_wav(path: &Path) -> Result<VoiceSample, String> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| format!("Failed to open {}: {}", path.display(), e))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()
                .map_err(|e| format!("Failed to decode {}: {}", path.display(), e))?
        }
    };

    let channels = usize::from(spec.channels.max(1));
    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    Ok(VoiceSample {
        sample_rate: spec.sample_rate,
        samples,
    })
}
