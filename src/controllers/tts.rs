use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    domain::tts::{
        dto::{PresetsResponse, SamplersResponse, SynthesisRequest, VoicesResponse},
        presets::list_presets,
        TtsServiceApi,
    },
    error::{AppError, AppResult},
    infrastructure::http::ReclaimAccelerator,
};

pub struct TtsController {
    tts_service: Arc<dyn TtsServiceApi>,
}

impl TtsController {
    pub fn new(tts_service: Arc<dyn TtsServiceApi>) -> Self {
        Self { tts_service }
    }

    /// POST /tts - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        request: Result<Json<SynthesisRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, HeaderMap, Extension<ReclaimAccelerator>, Body)> {
        let Json(request) = request?;
        if request.text.trim().is_empty() {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }

        let payload = controller
            .tts_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(payload.content_type),
        );

        // Cache release is scheduled once the response has passed back
        // through the middleware, before the body is streamed to the client
        Ok((
            StatusCode::OK,
            headers,
            Extension(ReclaimAccelerator),
            Body::from(payload.bytes),
        ))
    }

    /// GET /voices - List voice identifiers in the catalog
    pub async fn list_voices(
        State(controller): State<Arc<TtsController>>,
    ) -> AppResult<Json<VoicesResponse>> {
        let voices = controller
            .tts_service
            .list_voices()
            .await
            .map_err(AppError::from)?;

        Ok(Json(VoicesResponse { voices }))
    }

    /// GET /presets - List preset names
    pub async fn list_presets() -> Json<PresetsResponse> {
        Json(PresetsResponse {
            presets: list_presets(),
        })
    }

    /// GET /samplers - List diffusion samplers supported by the engine
    pub async fn list_samplers(
        State(controller): State<Arc<TtsController>>,
    ) -> AppResult<Json<SamplersResponse>> {
        let samplers = controller
            .tts_service
            .list_samplers()
            .await
            .map_err(AppError::Samplers)?;

        Ok(Json(SamplersResponse { samplers }))
    }
}
