use crate::companion::CompanionService;
use crate::cli::Args;
use crate::models::chat::{
    AnalyzeRequest,
    AnalyzeResponse,
    ChatRequest,
    ErrorResponse,
    RespondRequest,
    RespondResponse,
    StatusResponse,
};
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use axum::{
    routing::{ get, post },
    Router,
    Json,
    extract::{ State, rejection::JsonRejection },
    response::{ IntoResponse, Response },
    http::{ header, Method, StatusCode },
};
use tower_http::cors::{ Any, CorsLayer };
use uuid::Uuid;
use log::{ info, error, debug };

#[derive(Clone)]
struct AppState {
    service: Arc<CompanionService>,
}

/// Request-level failures. Everything reaching the client as an error is a
/// flat 500 carrying the message text.
#[derive(Debug)]
pub enum ApiError {
    InvalidBody(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::InvalidBody(message) => message,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: message })).into_response()
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600))
}

pub fn router(service: CompanionService) -> Router {
    let state = AppState { service: Arc::new(service) };

    Router::new()
        .route("/", get(index_handler))
        .route("/test", get(test_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/models", get(models_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/respond", post(respond_handler))
        // Answers every OPTIONS request itself, before routing.
        .layer(cors_layer())
        .with_state(state)
}

pub async fn start_http_server(
    service: CompanionService,
    args: Args,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = args.server_addr.parse::<SocketAddr>()
        .map_err(|e| format!("Invalid server address '{}': {}", args.server_addr, e))?;
    let app = router(service);

    if args.enable_tls {
        let (cert_path, key_path) = match (&args.tls_cert_path, &args.tls_key_path) {
            (Some(cert), Some(key)) => (cert, key),
            _ => {
                error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
                return Err("TLS enabled without cert/key".into());
            }
        };
        info!("TLS enabled. Loading certificate from '{}' and key from '{}'", cert_path, key_path);
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            cert_path,
            key_path
        ).await?;

        info!("Starting HTTPS API server on: https://{}", addr);
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await
            .map_err(|e| format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e))?;
        info!("Starting HTTP API server on: http://{}", addr);
        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;
    }

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn index_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
        message: "Journal companion service".into(),
    })
}

async fn test_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
        message: "Test route working".into(),
    })
}

async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(req) = body.map_err(|e| {
        error!("[{}] Error in /api/chat: {}", request_id, e.body_text());
        ApiError::from(e)
    })?;
    info!("[{}] POST /api/chat", request_id);

    let result = state.service.chat(&req).await;
    debug!("[{}] Final response from {}: {}", request_id, result.model, result.response);
    Ok(Json(result))
}

async fn models_handler(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/models");
    Json(state.service.models().await)
}

async fn analyze_handler(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(req) = body.map_err(|e| {
        error!("[{}] Error in /api/analyze: {}", request_id, e.body_text());
        ApiError::from(e)
    })?;
    info!("[{}] POST /api/analyze", request_id);

    let analysis = state.service.analyze(&req).await;
    Ok(Json(AnalyzeResponse { analysis }))
}

async fn respond_handler(
    State(state): State<AppState>,
    body: Result<Json<RespondRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let Json(req) = body.map_err(|e| {
        error!("[{}] Error in /api/respond: {}", request_id, e.body_text());
        ApiError::from(e)
    })?;
    info!(
        "[{}] POST /api/respond advisor={:?} recipient={:?}",
        request_id,
        req.advisor_perspective,
        req.recipient
    );

    let response = state.service.respond(&req).await;
    debug!("[{}] Final response: {}", request_id, response);
    Ok(Json(RespondResponse { response }))
}
