//! HTTP服务：调研接口以NDJSON流的形式返回事件

use anyhow::{Context, Result};
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderValue, Method, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info};

use crate::generator::context::GeneratorContext;
use crate::generator::outlet::{NdjsonChannelOutlet, ResearchOutlet};
use crate::generator::research::spawn_research;
use crate::types::StreamMessage;

/// 响应体通道的缓冲行数
const STREAM_BUFFER: usize = 64;

#[derive(Debug, Deserialize)]
struct ResearchRequest {
    #[serde(default)]
    destination: Option<String>,
}

pub fn router(context: GeneratorContext) -> Router {
    Router::new()
        .route("/api/research", post(research))
        .route("/health", get(health))
        .layer(cors_layer())
        .with_state(context)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// 监听配置的地址直到进程退出
pub async fn serve(context: GeneratorContext) -> Result<()> {
    let address = context.config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .context(format!("Failed to bind {}", address))?;

    info!("🌐 YouTravel 服务已启动: http://{}", address);
    axum::serve(listener, router(context))
        .await
        .context("HTTP server stopped unexpectedly")
}

async fn research(State(context): State<GeneratorContext>, body: Bytes) -> Response {
    let (outlet, receiver) = NdjsonChannelOutlet::channel(STREAM_BUFFER);
    let outlet: Arc<dyn ResearchOutlet> = Arc::new(outlet);

    match serde_json::from_slice::<ResearchRequest>(&body) {
        Ok(request) => {
            let destination = request.destination.unwrap_or_default();
            debug!("收到调研请求: {:?}", destination);
            spawn_research(context, destination, outlet);
        }
        Err(e) => {
            debug!("请求体无法解析: {}", e);
            tokio::spawn(async move {
                let _ = outlet
                    .emit(StreamMessage::error("Invalid request body"))
                    .await;
            });
        }
    }

    stream_response(receiver)
}

fn stream_response(receiver: mpsc::Receiver<Bytes>) -> Response {
    let stream = futures::stream::unfold(receiver, |mut receiver| async move {
        receiver
            .recv()
            .await
            .map(|chunk| (Ok::<Bytes, Infallible>(chunk), receiver))
    });

    let mut response = Body::from_stream(stream).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/event-stream"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    response
}

async fn health(State(context): State<GeneratorContext>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "cache": context.cache.generate_performance_report(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::generator::research::registry::ToolRegistry;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let mut config = Config::default();
        config.research.step_delay_ms = 0;
        config.llm.enabled = false;
        let context = GeneratorContext::with_registry(config, ToolRegistry::new()).unwrap();
        router(context)
    }

    async fn post_research(body: &'static str) -> (Response, Vec<Value>) {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/research")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let (parts, body) = response.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let events = std::str::from_utf8(&bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (Response::from_parts(parts, Body::empty()), events)
    }

    #[tokio::test]
    async fn test_missing_destination_streams_single_error() {
        let (response, events) = post_research("{}").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            HeaderValue::from_static("text/event-stream")
        );
        assert_eq!(response.headers()["cache-control"], "no-cache");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["type"], "error");
        assert_eq!(events[0]["data"]["error"], "Destination is required");
    }

    #[tokio::test]
    async fn test_malformed_body_streams_single_error() {
        let (response, events) = post_research("{not json").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["data"]["error"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_research_stream_ends_with_complete() {
        let (_, events) = post_research(r#"{"destination":"Nowhereland123"}"#).await;

        assert_eq!(events[0]["type"], "step");
        assert_eq!(events[1]["data"]["progress"], 5);
        let last = events.last().unwrap();
        assert_eq!(last["type"], "complete");
        assert_eq!(last["data"]["guide"]["destination"], "Nowhereland123");
        assert_eq!(
            events.iter().filter(|e| e["type"] == "complete").count(),
            1
        );
    }

    #[tokio::test]
    async fn test_health_reports_cache() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert!(body.get("cache").is_some());
    }
}
