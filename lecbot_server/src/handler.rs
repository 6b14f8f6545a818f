use axum::Json;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use lecbot_core::ResponsePayload;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::io::ReaderStream;
use tracing::{info, warn};

use crate::{AppState, Error, Result};

/// Body of `POST /request`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestBody {
    pub message: String,
}

/// Resolve a chat message to a download link or an error payload.
pub async fn handle_request(
    State(state): State<AppState>,
    Json(body): Json<RequestBody>,
) -> Result<Json<ResponsePayload>> {
    info!("Message: {}", body.message);

    let resolver = Arc::clone(&state.resolver);
    let payload = tokio::task::spawn_blocking(move || resolver.resolve(&body.message)).await?;

    info!("Response: {}", payload.message());
    Ok(Json(payload))
}

/// Stream a catalog file as an attachment.
pub async fn handle_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response> {
    let resolver = Arc::clone(&state.resolver);
    let name = filename.clone();
    let opened = tokio::task::spawn_blocking(move || {
        let store = resolver.store();
        if !store.exists(&name) {
            return None;
        }
        let file = store
            .open(&name)
            .map_err(|e| warn!("Failed to open {name}: {e}"))
            .ok()?;
        let len = file.metadata().map(|m| m.len()).ok();
        Some((file, len))
    })
    .await?;

    let Some((file, len)) = opened else {
        warn!("Download of unknown file: {filename}");
        return Err(Error::FileNotFound(filename));
    };

    info!("Serving {filename} ({} bytes)", len.unwrap_or_default());

    let stream = ReaderStream::new(tokio::fs::File::from_std(file));
    let mut response = Body::from_stream(stream).into_response();
    let headers = response.headers_mut();
    if let Some(len) = len {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    }
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type(&filename)),
    );
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok(response)
}

fn content_type(filename: &str) -> &'static str {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("pptx") => {
            "application/vnd.openxmlformats-officedocument.presentationml.presentation"
        }
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("zip") => "application/zip",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}
