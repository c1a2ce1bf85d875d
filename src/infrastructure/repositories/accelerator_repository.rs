use async_trait::async_trait;

/// Device runtime that holds cached memory between generations.
#[async_trait]
pub trait AcceleratorRuntime: Send + Sync {
    /// Release cached device memory
    async fn empty_cache(&self) -> Result<(), String>;
}

/// Asks the inference worker to release its device cache
pub struct HttpAcceleratorRuntime {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpAcceleratorRuntime {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AcceleratorRuntime for HttpAcceleratorRuntime {
    async fn empty_cache(&self) -> Result<(), String> {
        let response = self
            .http_client
            .post(format!("{}/empty_cache", self.base_url))
            .send()
            .await
            .map_err(|e| format!("empty_cache request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("empty_cache returned {}", response.status()));
        }
        Ok(())
    }
}

/// For CPU-only workers with nothing to release
pub struct NoopAcceleratorRuntime;

#[async_trait]
impl AcceleratorRuntime for NoopAcceleratorRuntime {
    async fn empty_cache(&self) -> Result<(), String> {
        Ok(())
    }
}
