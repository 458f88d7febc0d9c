use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State},
};
use tracing::{debug, info, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::state::HandlerState;
use crate::pipeline::CheckReport;

/// Successful check response body.
#[derive(Debug, serde::Serialize)]
pub struct CheckResponse {
    pub message: String,
    pub document_id: i64,
    pub filename: String,
    pub upload_timestamp: String,
    pub similarity_score: f32,
    pub similarity_percentage: String,
    pub file_hash: String,
    pub text_extracted_length: usize,
}

impl CheckResponse {
    fn from_report(report: CheckReport, uploaded_filename: String) -> Self {
        Self {
            message: "Plagiarism check completed successfully".to_string(),
            document_id: report.record.id,
            filename: uploaded_filename,
            upload_timestamp: report.record.uploaded_at.to_rfc3339(),
            similarity_score: report.similarity_score,
            similarity_percentage: format!("{:.2}%", report.similarity_score),
            file_hash: report.fingerprint,
            text_extracted_length: report.text_length,
        }
    }
}

/// `POST /check-plagiarism/` — multipart upload with a `file` field.
#[instrument(skip(state, multipart))]
pub async fn check_plagiarism_handler(
    State(state): State<HandlerState>,
    mut multipart: Multipart,
) -> Result<Json<CheckResponse>, GatewayError> {
    let (filename, bytes) = read_upload_field(&mut multipart).await?;
    debug!(filename = %filename, size = bytes.len(), "Received upload");

    let pipeline = state.pipeline.clone();
    let check_filename = filename.clone();
    let report = tokio::task::spawn_blocking(move || pipeline.check(&check_filename, &bytes))
        .await
        .map_err(|e| GatewayError::Internal(format!("pipeline task failed: {e}")))??;

    info!(
        document_id = report.record.id,
        score = report.similarity_score,
        duplicate = report.previously_seen,
        "Plagiarism check completed"
    );

    Ok(Json(CheckResponse::from_report(report, filename)))
}

/// Pulls the `file` field out of the multipart body.
async fn read_upload_field(multipart: &mut Multipart) -> Result<(String, Bytes), GatewayError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::InvalidRequest(format!("malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                GatewayError::InvalidRequest("upload field is missing a filename".to_string())
            })?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| GatewayError::InvalidRequest(format!("failed to read upload: {e}")))?;

        return Ok((filename, bytes));
    }

    Err(GatewayError::InvalidRequest(
        "missing multipart field `file`".to_string(),
    ))
}
