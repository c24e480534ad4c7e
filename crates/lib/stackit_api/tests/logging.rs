//! Integration test — capture the events emitted while serving requests.
//!
//! Kept in its own test binary so the thread-local subscriber only sees
//! these requests.

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use stackit_api::{AppState, config::ApiConfig};
use stackit_core::completion::{ChatMessage, CompletionError, CompletionProvider};
use tower::ServiceExt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Clone)]
struct Captured {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Captured>>>);

impl Recorder {
    fn events(&self) -> Vec<Captured> {
        self.0.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

struct Failing;

#[async_trait]
impl CompletionProvider for Failing {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, CompletionError> {
        Err(CompletionError::EmptyResponse)
    }
}

struct Echo;

#[async_trait]
impl CompletionProvider for Echo {
    async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, CompletionError> {
        Ok("done".to_string())
    }
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn upstream_failure_logs_exactly_one_error() {
    let recorder = Recorder::default();
    let _guard = tracing_subscriber::registry()
        .with(recorder.clone())
        .set_default();

    let app = stackit_api::router(AppState {
        config: ApiConfig::default(),
        completion: Arc::new(Failing),
    });

    let resp = app
        .oneshot(post_json("/api/chat", r#"{"message": "hi"}"#))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let errors: Vec<Captured> = recorder
        .events()
        .into_iter()
        .filter(|e| e.level == Level::ERROR)
        .collect();
    assert_eq!(errors.len(), 1, "error events: {errors:?}");
    assert!(errors[0].message.contains("upstream completion failed"));
}

#[tokio::test]
async fn enhance_text_logs_length_in_bytes() {
    let recorder = Recorder::default();
    let _guard = tracing_subscriber::registry()
        .with(recorder.clone())
        .set_default();

    let app = stackit_api::router(AppState {
        config: ApiConfig::default(),
        completion: Arc::new(Echo),
    });

    // Multi-byte text, so bytes and chars differ.
    let resp = app
        .oneshot(post_json(
            "/api/enhance-text",
            r#"{"type": "casual", "text": "héllö wörld"}"#,
        ))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let event = recorder
        .events()
        .into_iter()
        .find(|e| e.message.contains("enhancing text"))
        .expect("enhancing text event");
    let bytes = event
        .fields
        .iter()
        .find(|(name, _)| name == "bytes")
        .map(|(_, value)| value.as_str());
    assert_eq!(bytes, Some("héllö wörld".len().to_string().as_str()));
    assert!(event.fields.iter().all(|(name, _)| name != "chars"));
}
