//! HTTP transport: multipart upload in, analysis report out.

mod config;

pub use config::{DEFAULT_LISTEN_ADDR, DEFAULT_MAX_UPLOAD_BYTES, ServerConfig};

use std::net::SocketAddr;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        DefaultBodyLimit, Multipart, Query, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::analyzer::{Detail, analyze_with};
use crate::upload::{UploadError, decode_upload};

pub const WORDS_PATH: &str = "/words";
pub const HEALTHZ_PATH: &str = "/healthz";
const HEALTHZ_STATUS: &str = "ok";
/// Multipart part that carries the uploaded text
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq)]
struct HealthzResponse {
    status: &'static str,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ShutdownEvent {
    CtrlC,
    SigTerm,
    ListenerFailed,
}

#[derive(Debug, Default, Deserialize)]
struct WordsQuery {
    detail: Option<Detail>,
}

#[derive(Debug, Copy, Clone)]
struct AppState {
    detail: Detail,
    max_upload_bytes: usize,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("listen address may not be empty")]
    EmptyListenAddr,
    #[error("invalid listen address `{address}`: {source}")]
    InvalidListenAddr {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to determine local address: {source}")]
    LocalAddr {
        #[source]
        source: std::io::Error,
    },
    #[error("axum server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

pub fn build_router(config: &ServerConfig) -> Router {
    let state = AppState {
        detail: config.detail,
        max_upload_bytes: config.max_upload_bytes,
    };

    Router::new()
        .route(WORDS_PATH, post(upload_words))
        .route(HEALTHZ_PATH, get(healthz))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let listen_addr = parse_listen_addr(&config.listen_addr)?;

    let listener = TcpListener::bind(listen_addr)
        .await
        .map_err(|source| ServerError::Bind {
            address: listen_addr.to_string(),
            source,
        })?;

    let local_addr = listener
        .local_addr()
        .map_err(|source| ServerError::LocalAddr { source })?;
    tracing::info!(%local_addr, detail = ?config.detail, "wordstat server listening");

    let app = build_router(&config);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let event = wait_for_shutdown().await;
            tracing::info!(?event, "shutdown signal received");
        })
        .await
        .map_err(|source| ServerError::Serve { source })?;

    tracing::info!("server shutdown complete");
    Ok(())
}

fn parse_listen_addr(raw: &str) -> Result<SocketAddr, ServerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ServerError::EmptyListenAddr);
    }

    trimmed
        .parse()
        .map_err(|source| ServerError::InvalidListenAddr {
            address: trimmed.to_string(),
            source,
        })
}

async fn healthz() -> impl IntoResponse {
    Json(HealthzResponse {
        status: HEALTHZ_STATUS,
    })
}

async fn upload_words(
    State(state): State<AppState>,
    Query(query): Query<WordsQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let detail = query.detail.unwrap_or(state.detail);

    let bytes = match read_file_field(multipart, state.max_upload_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => return upload_error_response(err),
    };

    let text = match decode_upload(bytes.as_deref()) {
        Ok(text) => text,
        Err(err) => return upload_error_response(err),
    };

    let report = analyze_with(text, detail);
    tracing::info!(
        bytes = text.len(),
        total_words = report.total_words(),
        distinct_words = report.frequencies().len(),
        ?detail,
        "analyzed upload"
    );

    Json(report).into_response()
}

/// Pull the `file` part out of the form. A body that is not multipart at all
/// is treated the same as a form without that part.
async fn read_file_field(
    multipart: Result<Multipart, MultipartRejection>,
    max_upload_bytes: usize,
) -> Result<Option<Bytes>, UploadError> {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(%rejection, "request is not a multipart upload");
            return Ok(None);
        }
    };

    let to_upload_error = |err: MultipartError| {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge {
                max: max_upload_bytes,
            }
        } else {
            UploadError::Io(err.body_text())
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(to_upload_error)? {
        if field.name() == Some(UPLOAD_FIELD) {
            let bytes = field.bytes().await.map_err(to_upload_error)?;
            return Ok(Some(bytes));
        }
    }

    Ok(None)
}

fn upload_error_response(err: UploadError) -> Response {
    let status = match err {
        UploadError::Missing | UploadError::Empty => StatusCode::BAD_REQUEST,
        UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        UploadError::Decode(_) | UploadError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if err.is_client_error() {
        tracing::debug!(%err, %status, "rejected upload");
    } else {
        tracing::warn!(%err, %status, "failed to process upload");
    }

    (status, err.to_string()).into_response()
}

async fn wait_for_shutdown() -> ShutdownEvent {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ShutdownEvent::CtrlC,
            Err(error) => {
                tracing::warn!(%error, "failed to capture Ctrl+C signal");
                ShutdownEvent::ListenerFailed
            }
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => match term.recv().await {
                Some(_) => ShutdownEvent::SigTerm,
                None => ShutdownEvent::ListenerFailed,
            },
            Err(error) => {
                tracing::warn!(%error, "failed to capture SIGTERM");
                ShutdownEvent::ListenerFailed
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<ShutdownEvent>();

    tokio::select! {
        event = ctrl_c => event,
        event = sigterm => event,
    }
}
