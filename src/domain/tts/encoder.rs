use super::error::TtsServiceError;
use std::io::Cursor;

pub const WAV_CONTENT_TYPE: &str = "audio/wav";

/// Raw waveform produced by the engine for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl SynthesisResult {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Encoded audio ready to be written to the response body
#[derive(Debug, Clone)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Encode a synthesis result as a mono 16-bit PCM WAV file.
pub fn encode_wav(result: &SynthesisResult) -> Result<AudioPayload, TtsServiceError> {
    if result.sample_rate == 0 {
        return Err(TtsServiceError::Encoding(
            "sample rate must be greater than zero".to_string(),
        ));
    }
    if result.samples.is_empty() {
        return Err(TtsServiceError::Encoding(
            "synthesis produced no audio".to_string(),
        ));
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: result.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buf = Cursor::new(Vec::<u8>::new());
    {
        let mut writer = hound::WavWriter::new(&mut buf, spec)
            .map_err(|e| TtsServiceError::Encoding(e.to_string()))?;
        for &sample in &result.samples {
            writer
                .write_sample(to_pcm16(sample))
                .map_err(|e| TtsServiceError::Encoding(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| TtsServiceError::Encoding(e.to_string()))?;
    }

    Ok(AudioPayload {
        bytes: buf.into_inner(),
        content_type: WAV_CONTENT_TYPE,
    })
}

fn to_pcm16(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    let x = sample.clamp(-1.0, 1.0);
    // -1.0 -> -32768, +1.0 -> 32767
    if x >= 0.0 {
        (x * 32767.0).round() as i16
    } else {
        (x * 32768.0).round() as i16
    }
}
