use crate::infrastructure::repositories::AcceleratorRuntime;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Releases accelerator memory cached by a finished synthesis call.
///
/// Reclamation is best-effort: it runs on its own task, off the request path,
/// and its failures are logged and dropped.
#[derive(Clone)]
pub struct ResourceReclaimer {
    accelerator: Arc<dyn AcceleratorRuntime>,
}

impl ResourceReclaimer {
    pub fn new(accelerator: Arc<dyn AcceleratorRuntime>) -> Self {
        Self { accelerator }
    }

    /// Spawn a reclamation task and return immediately.
    pub fn schedule(&self) -> JoinHandle<()> {
        let accelerator = self.accelerator.clone();
        tokio::spawn(async move {
            let start_time = std::time::Instant::now();
            match accelerator.empty_cache().await {
                Ok(()) => tracing::debug!(
                    latency_ms = start_time.elapsed().as_millis(),
                    "Accelerator cache released"
                ),
                Err(e) => tracing::warn!(
                    error = %e,
                    "Accelerator cache release failed, ignoring"
                ),
            }
        })
    }
}
