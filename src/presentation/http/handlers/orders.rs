use crate::{
    domain::order::{
        entity::{MAX_ATTACHMENT_BYTES, MAX_ATTACHMENTS, OrderSubmission, StoredAttachment},
        errors::DomainError,
    },
    infrastructure::{pdf::summary, storage::filename},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Multipart, State},
    http::{HeaderMap, header},
};
use bytes::Bytes;
use chrono::Utc;

/// One `files` part, buffered until the whole submission has been validated.
struct UploadedFile {
    original_name: String,
    data: Bytes,
}

/// Scheme of the inbound request as seen by the client, honoring the first
/// `x-forwarded-proto` entry when the service sits behind a proxy.
fn request_scheme(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("http")
}

/// Host the client addressed, falling back to the configured bind address
/// when the `Host` header is missing.
fn request_host(headers: &HeaderMap, state: &AppState) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}:{}", state.config.host, state.config.port))
}

/// Attachments written before a later step failed are kept on disk; the
/// upload area is append-only and a compensating delete could race a
/// concurrent download of the same file. Surface them instead.
fn log_orphaned_attachments(stored: &[StoredAttachment]) {
    if !stored.is_empty() {
        let names: Vec<&str> = stored.iter().map(|a| a.stored_name.as_str()).collect();
        tracing::warn!(
            orphaned = ?names,
            "summary document failed after attachments were written; files kept"
        );
    }
}

pub async fn submit_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut order = OrderSubmission::default();
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Field error".into()))?
    {
        match field.name().unwrap_or("") {
            "files" => {
                if files.len() == MAX_ATTACHMENTS {
                    return Err(DomainError::TooManyAttachments {
                        limit: MAX_ATTACHMENTS,
                    }
                    .into());
                }
                let original_name = field.file_name().unwrap_or("file").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::BadRequest("Byte error".into()))?;
                if data.len() > MAX_ATTACHMENT_BYTES {
                    return Err(DomainError::AttachmentTooLarge {
                        name: original_name,
                        limit: MAX_ATTACHMENT_BYTES,
                    }
                    .into());
                }
                files.push(UploadedFile {
                    original_name,
                    data,
                });
            }
            "service" => order.service = field.text().await.unwrap_or_default(),
            "pages" => order.pages = field.text().await.unwrap_or_default(),
            "language" => order.language = field.text().await.unwrap_or_default(),
            "topic" => order.topic = field.text().await.unwrap_or_default(),
            "details" => order.details = field.text().await.unwrap_or_default(),
            "phone" => order.phone = field.text().await.unwrap_or_default(),
            _ => {}
        }
    }

    // The whole submission is validated before the first byte hits disk.
    let mut stored = Vec::with_capacity(files.len());
    for file in files {
        let attachment = state
            .attachments
            .store(&file.original_name, file.data)
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?;
        stored.push(attachment);
    }

    let document_name = filename::document_name(&order.topic, Utc::now());
    let pdf = match summary::render_summary(&order, &stored) {
        Ok(bytes) => bytes,
        Err(e) => {
            log_orphaned_attachments(&stored);
            return Err(AppError::Rendering(e.to_string()));
        }
    };

    // Respond only once the document write has been flushed; every
    // attachment referenced by the PDF is already durable at this point.
    if let Err(e) = state.documents.persist(&document_name, pdf).await {
        log_orphaned_attachments(&stored);
        return Err(AppError::Storage(e.to_string()));
    }

    let pdf_url = format!(
        "{}://{}{}",
        request_scheme(&headers),
        request_host(&headers, &state),
        state.documents.public_path(&document_name)
    );
    tracing::debug!(document = %document_name, attachments = stored.len(), "order accepted");

    Ok(Json(
        serde_json::json!({ "success": true, "pdfUrl": pdf_url }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn scheme_defaults_to_http() {
        assert_eq!(request_scheme(&HeaderMap::new()), "http");
    }

    #[test]
    fn scheme_honors_first_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https, http"));
        assert_eq!(request_scheme(&headers), "https");
    }

    #[test]
    fn blank_forwarded_proto_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-proto", HeaderValue::from_static("  "));
        assert_eq!(request_scheme(&headers), "http");
    }
}
