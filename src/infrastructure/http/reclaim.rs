use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::domain::tts::ResourceReclaimer;

/// Response extension set by handlers whose work left accelerator memory behind
#[derive(Debug, Clone, Copy)]
pub struct ReclaimAccelerator;

/// Post-response hook: once the handler has produced its response, schedule
/// accelerator reclamation if the response asks for it. Scheduling happens
/// before the body is written to the client; the spawned task is never awaited.
pub async fn reclaim_after_response(
    State(reclaimer): State<ResourceReclaimer>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if response
        .extensions_mut()
        .remove::<ReclaimAccelerator>()
        .is_some()
    {
        reclaimer.schedule();
    }

    response
}
