use axum::{
    body::Body,
    extract::Extension,
    http::{Request, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower::util::ServiceExt; // for `oneshot`

use api_ingress::request_id::XRequestId;
use api_ingress::{ApiIngress, ApiIngressConfig};

#[tokio::test]
async fn generates_request_id_when_missing() {
    let app = test_app(ApiIngressConfig::default());

    let response = app
        .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert!(request_id.is_some(), "x-request-id should be generated");
    let request_id = request_id.unwrap();
    assert!(!request_id.is_empty(), "request_id should not be empty");

    // handlers see the same id the client gets back
    let body = json_body(response).await;
    assert_eq!(body["request_id"], request_id.as_str());
}

#[tokio::test]
async fn preserves_incoming_request_id() {
    let app = test_app(ApiIngressConfig::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/test")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok());
    assert_eq!(request_id, Some("abc-123"));
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = test_app(ApiIngressConfig::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nope")
                .header("x-request-id", "missing-456")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("missing-456")
    );
    assert_eq!(json_body(response).await, json!({"message": "route not found"}));
}

#[tokio::test]
async fn health_endpoints() {
    let app = test_app(ApiIngressConfig::default());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");

    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn openapi_served_only_when_docs_enabled() {
    let disabled = test_app(ApiIngressConfig::default());
    let response = disabled
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let enabled = test_app(ApiIngressConfig {
        enable_docs: true,
        ..Default::default()
    });
    let response = enabled
        .oneshot(Request::builder().uri("/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["info"]["title"], "ingress-test");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = test_app(ApiIngressConfig {
        body_limit_bytes: 8,
        ..Default::default()
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .header("content-length", "64")
                .body(Body::from("x".repeat(64)))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// Ingress-wrapped test app with a couple of plain routes
fn test_app(config: ApiIngressConfig) -> Router {
    let routes = Router::new()
        .route("/test", get(success_handler))
        .route("/echo", post(echo_handler));

    let openapi = utoipa::openapi::OpenApiBuilder::new()
        .info(utoipa::openapi::InfoBuilder::new().title("ingress-test").version("0.0.0"))
        .build();

    ApiIngress::new(config)
        .build_router(routes, Some(openapi))
        .unwrap()
}

async fn success_handler(
    Extension(XRequestId(request_id)): Extension<XRequestId>,
) -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "request_id": request_id}))
}

async fn echo_handler(body: String) -> String {
    body
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
