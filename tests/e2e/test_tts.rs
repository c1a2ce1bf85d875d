use crate::e2e::helpers;

use helpers::mocks::EngineBehavior;
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::Ordering;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_with_random_voice(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({ "text": "hello", "voice": "random", "preset": "fast" }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/wav");
    assert_eq!(&response.body_bytes[..4], b"RIFF");
    assert_eq!(&response.body_bytes[8..12], b"WAVE");

    let calls = ctx.engine.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].text, "hello");
    assert!(calls[0].voice.is_random());
    assert_eq!(
        calls[0].settings,
        json!({ "preset": "fast", "use_deterministic_seed": null })
    );

    // The catalog is never consulted for the random voice
    assert_eq!(ctx.catalog.lookups.load(Ordering::SeqCst), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_defaults_when_only_text_is_given(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "defaults please" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let calls = ctx.engine.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].voice.is_random());
    assert_eq!(calls[0].settings["preset"], json!("fast"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_voice_samples_for_named_voice(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hi there", "voice": "tom" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let calls = ctx.engine.calls();
    assert_eq!(calls.len(), 1);
    let samples = calls[0].voice.voice_samples.as_ref().expect("samples forwarded");
    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].sample_rate, 22050);
    assert!(calls[0].voice.conditioning_latents.is_none());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_latents_for_latent_only_voice(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hi there", "voice": "pat" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let calls = ctx.engine.calls();
    assert!(calls[0].voice.voice_samples.is_none());
    assert!(calls[0].voice.conditioning_latents.is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_unknown_voice_without_calling_engine(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hi", "voice": "nonexistent_id" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail_contains("nonexistent_id");
    assert_eq!(ctx.engine.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_when_catalog_is_unavailable(ctx: &TestContext) {
    ctx.catalog.unavailable.store(true, Ordering::SeqCst);

    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hi", "voice": "tom" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail_contains("unreadable");
    assert_eq!(ctx.engine.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_keep_zero_temperature(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hello", "temperature": 0.0 }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let settings = &ctx.engine.calls()[0].settings;
    assert_eq!(settings["temperature"], json!(0.0));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forward_only_explicitly_set_parameters(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "text": "hello",
                "preset": "ultra_fast",
                "seed": 1234,
                "cond_free": false,
                "diffusion_iterations": 0,
                "top_p": null,
                "sampler": "ddim",
                "not_a_tortoise_option": "ignored"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    assert_eq!(
        ctx.engine.calls()[0].settings,
        json!({
            "preset": "ultra_fast",
            "use_deterministic_seed": 1234,
            "cond_free": false,
            "diffusion_iterations": 0,
            "sampler": "ddim"
        })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_leave_count_validation_to_engine(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({ "text": "hello", "num_autoregressive_samples": -1 }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.engine.call_count(), 1);
    assert_eq!(
        ctx.engine.calls()[0].settings["num_autoregressive_samples"],
        json!(-1)
    );

    ctx.engine
        .set_behavior(EngineBehavior::Fail("max_mel_tokens out of range".to_string()));

    let response = ctx
        .client
        .post(
            "/tts",
            &json!({ "text": "hello", "max_mel_tokens": 5_000_000_000i64 }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail_contains("max_mel_tokens out of range");
    assert_eq!(ctx.engine.call_count(), 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_engine_rejection_as_500(ctx: &TestContext) {
    ctx.engine
        .set_behavior(EngineBehavior::Fail("unknown sampler 'euler'".to_string()));

    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hello", "sampler": "euler" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail_contains("unknown sampler 'euler'");

    // No retry
    assert_eq!(ctx.engine.call_count(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_when_engine_returns_no_audio(ctx: &TestContext) {
    ctx.engine.set_behavior(EngineBehavior::Silent);

    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_detail_contains("no audio");
    assert_eq!(ctx.engine.call_count(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "   " }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_detail_contains("empty");
    assert_eq!(ctx.engine.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_body(ctx: &TestContext) {
    let response = ctx.client.post_raw("/tts", "{\"text\": ").await.unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_detail_contains("Invalid request body");
    assert_eq!(ctx.engine.call_count(), 0);

    let response = ctx
        .client
        .post("/tts", &json!({ "voice": "tom" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY)
        .assert_detail_contains("text");
    assert_eq!(ctx.engine.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reclaim_accelerator_memory_after_success(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hello" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.wait_for_clears(1).await, 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_reclaim_after_failure(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hi", "voice": "nonexistent_id" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    assert_eq!(ctx.accelerator.clear_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ignore_reclamation_failures(ctx: &TestContext) {
    ctx.accelerator.fail.store(true, Ordering::SeqCst);

    let response = ctx
        .client
        .post("/tts", &json!({ "text": "hello" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/wav");
    assert_eq!(ctx.wait_for_clears(1).await, 1);

    // The service keeps working afterwards
    let response = ctx
        .client
        .post("/tts", &json!({ "text": "again" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_call_engine_once_per_concurrent_request(ctx: &TestContext) {
    let mut futures = Vec::new();
    for i in 0..8 {
        let client = ctx.client.clone();
        futures.push(async move {
            client
                .post("/tts", &json!({ "text": format!("request {}", i) }))
                .await
        });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        result.unwrap().assert_status(StatusCode::OK);
    }
    assert_eq!(ctx.engine.call_count(), 8);
    assert_eq!(ctx.wait_for_clears(8).await, 8);
}
