use crate::errors::AppError;

pub const ANALYSIS_WARNING: &str = "Please upload a resume and enter a job description.";
pub const QUERY_WARNING: &str =
    "Please enter a query, upload a resume, and provide a job description.";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// The analysis path needs a job description and non-empty resume text.
pub fn validate_analysis(job_description: &str, resume_text: &str) -> Result<(), AppError> {
    if is_blank(job_description) || is_blank(resume_text) {
        return Err(AppError::Validation(ANALYSIS_WARNING.to_string()));
    }
    Ok(())
}

/// The query path additionally needs a question.
pub fn validate_query(query: &str, job_description: &str, resume_text: &str) -> Result<(), AppError> {
    if is_blank(query) || is_blank(job_description) || is_blank(resume_text) {
        return Err(AppError::Validation(QUERY_WARNING.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_analysis_requires_both_documents() {
        assert!(validate_analysis("Rust engineer", "Rust, Go").is_ok());
        assert_eq!(warning(validate_analysis("", "Rust, Go")), ANALYSIS_WARNING);
        assert_eq!(warning(validate_analysis("Rust engineer", "")), ANALYSIS_WARNING);
        assert_eq!(warning(validate_analysis(" \n\t", "Rust")), ANALYSIS_WARNING);
    }

    #[test]
    fn test_query_requires_question_and_documents() {
        assert!(validate_query("Any gaps?", "JD", "CV").is_ok());
        assert_eq!(warning(validate_query("", "JD", "CV")), QUERY_WARNING);
        assert_eq!(warning(validate_query("   ", "JD", "CV")), QUERY_WARNING);
        assert_eq!(warning(validate_query("Any gaps?", "", "CV")), QUERY_WARNING);
        assert_eq!(warning(validate_query("Any gaps?", "JD", "")), QUERY_WARNING);
    }
}
