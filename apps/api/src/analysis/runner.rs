//! Request pipeline shared by the HTTP handlers: validate → build prompt → generate.
//!
//! Validation runs first; a rejected request never reaches the generation service.

use tracing::info;

use crate::analysis::prompts::{build_analysis_prompt, build_query_prompt, AnalysisKind};
use crate::analysis::validation::{validate_analysis, validate_query};
use crate::errors::AppError;
use crate::llm_client::GenerationService;

pub async fn run_analysis(
    service: &dyn GenerationService,
    kind: AnalysisKind,
    job_description: &str,
    resume_text: &str,
) -> Result<String, AppError> {
    validate_analysis(job_description, resume_text)?;

    let prompt = build_analysis_prompt(kind, job_description, resume_text);
    info!(
        "Running {} analysis (prompt_chars={}, model={})",
        kind.wire_name(),
        prompt.len(),
        service.model()
    );

    Ok(service.generate(&prompt).await?)
}

pub async fn run_query(
    service: &dyn GenerationService,
    query: &str,
    job_description: &str,
    resume_text: &str,
) -> Result<String, AppError> {
    validate_query(query, job_description, resume_text)?;

    let prompt = build_query_prompt(query, job_description, resume_text);
    info!(
        "Answering free-form query (prompt_chars={}, model={})",
        prompt.len(),
        service.model()
    );

    Ok(service.generate(&prompt).await?)
}
