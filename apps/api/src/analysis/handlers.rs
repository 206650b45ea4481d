//! Axum route handlers for the analysis API.
//!
//! Every action posts the whole form as `multipart/form-data`: the resume PDF is
//! extracted on each request, nothing is kept between requests.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::prompts::AnalysisKind;
use crate::analysis::runner::{run_analysis, run_query};
use crate::errors::AppError;
use crate::extractor::{extract_text_async, is_pdf};
use crate::state::AppState;

pub const UPLOAD_SUCCESS: &str = "Resume Uploaded Successfully";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct ResumeUpload {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Fields of the page form. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct SubmittedForm {
    pub job_description: String,
    pub analysis_kind: Option<String>,
    pub query: String,
    pub resume: Option<ResumeUpload>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisKindInfo {
    pub kind: AnalysisKind,
    pub label: &'static str,
    pub instruction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub resume_text: String,
    pub characters: usize,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub kind: AnalysisKind,
    pub label: &'static str,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub response: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Form handling
// ────────────────────────────────────────────────────────────────────────────

pub async fn read_form(mut multipart: Multipart) -> Result<SubmittedForm, AppError> {
    let mut form = SubmittedForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => form.job_description = field.text().await?,
            "analysis_kind" => form.analysis_kind = Some(field.text().await?),
            "query" => form.query = field.text().await?,
            "resume" => {
                let content_type = field.content_type().map(String::from);
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was chosen.
                if !bytes.is_empty() {
                    form.resume = Some(ResumeUpload {
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Extracts the resume text, or returns `""` when no file was uploaded so the
/// usual missing-input warning applies.
async fn resume_text(upload: Option<ResumeUpload>) -> Result<String, AppError> {
    let Some(upload) = upload else {
        return Ok(String::new());
    };

    if !is_pdf(upload.content_type.as_deref(), &upload.bytes) {
        return Err(AppError::Validation(
            "The resume must be uploaded as a PDF file.".to_string(),
        ));
    }

    let size = upload.bytes.len();
    let text = extract_text_async(upload.bytes).await?;
    info!(
        "Extracted resume text ({} chars from {} bytes)",
        text.chars().count(),
        size
    );
    Ok(text)
}

fn parse_kind(raw: Option<&str>) -> Result<AnalysisKind, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        // The page preselects the first option, so a missing choice means ATS score.
        None => Ok(AnalysisKind::AtsScore),
        Some(raw) => AnalysisKind::parse(raw)
            .ok_or_else(|| AppError::Validation(format!("Unknown analysis kind '{raw}'"))),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/analysis-kinds
pub async fn handle_list_kinds() -> Json<Vec<AnalysisKindInfo>> {
    Json(
        AnalysisKind::ALL
            .into_iter()
            .map(|kind| AnalysisKindInfo {
                kind,
                label: kind.label(),
                instruction: kind.instruction(),
            })
            .collect(),
    )
}

/// POST /api/v1/resume/extract
///
/// Extracts and returns the resume text so the page can confirm the upload.
pub async fn handle_extract(multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let form = read_form(multipart).await?;
    if form.resume.is_none() {
        return Err(AppError::Validation(
            "Please upload your resume as a PDF.".to_string(),
        ));
    }

    let resume_text = resume_text(form.resume).await?;
    Ok(Json(ExtractResponse {
        characters: resume_text.chars().count(),
        resume_text,
        message: UPLOAD_SUCCESS,
    }))
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(multipart).await?;
    let kind = parse_kind(form.analysis_kind.as_deref())?;
    let resume_text = resume_text(form.resume).await?;

    let response = run_analysis(
        state.generator.as_ref(),
        kind,
        &form.job_description,
        &resume_text,
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        kind,
        label: kind.label(),
        response,
    }))
}

/// POST /api/v1/query
pub async fn handle_query(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<QueryResponse>, AppError> {
    let form = read_form(multipart).await?;
    let resume_text = resume_text(form.resume).await?;

    let response = run_query(
        state.generator.as_ref(),
        &form.query,
        &form.job_description,
        &resume_text,
    )
    .await?;

    Ok(Json(QueryResponse { response }))
}
