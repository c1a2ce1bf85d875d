use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Voice catalog lives in <models_dir>/voices
    pub models_dir: PathBuf,
    // Inference worker
    pub engine_url: String,
    pub accelerator: AcceleratorMode,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// How accelerator memory is reclaimed after each synthesis
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AcceleratorMode {
    /// Ask the inference worker to empty its device cache
    Engine,
    /// Nothing to reclaim (CPU worker)
    None,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            models_dir: env::var("TORTOISE_MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("models")),
            engine_url: env::var("ENGINE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
            accelerator: match env::var("ACCELERATOR")
                .map(|s| s.to_lowercase())
                .as_deref()
            {
                Ok("none") => AcceleratorMode::None,
                _ => AcceleratorMode::Engine,
            },
        };

        Ok(config)
    }

    pub fn voices_dir(&self) -> PathBuf {
        self.models_dir.join("voices")
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
