//! Prompt templates for resume analysis and free-form questions.

use serde::Serialize;

/// The analyses a user can request. Each kind owns one fixed instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    AtsScore,
    StrengthsWeaknesses,
    MissingKeywords,
    CourseSuggestions,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::AtsScore,
        AnalysisKind::StrengthsWeaknesses,
        AnalysisKind::MissingKeywords,
        AnalysisKind::CourseSuggestions,
    ];

    pub fn instruction(self) -> &'static str {
        match self {
            AnalysisKind::AtsScore => {
                "Analyze the resume against the job description and provide an ATS score (0-100%)."
            }
            AnalysisKind::StrengthsWeaknesses => {
                "Analyze the resume for strengths and weaknesses compared to the job description."
            }
            AnalysisKind::MissingKeywords => {
                "List important keywords missing from the resume that are present in the job description."
            }
            AnalysisKind::CourseSuggestions => {
                "Suggest 3-5 online courses that can help the candidate improve their skills \
                 based on the missing qualifications in the resume."
            }
        }
    }

    /// Human-facing label, as shown on the page.
    pub fn label(self) -> &'static str {
        match self {
            AnalysisKind::AtsScore => "ATS Score",
            AnalysisKind::StrengthsWeaknesses => "Strengths & Weaknesses",
            AnalysisKind::MissingKeywords => "Missing Keywords",
            AnalysisKind::CourseSuggestions => "Course Suggestions",
        }
    }

    /// Stable name used in form fields and JSON.
    pub fn wire_name(self) -> &'static str {
        match self {
            AnalysisKind::AtsScore => "ats_score",
            AnalysisKind::StrengthsWeaknesses => "strengths_weaknesses",
            AnalysisKind::MissingKeywords => "missing_keywords",
            AnalysisKind::CourseSuggestions => "course_suggestions",
        }
    }

    /// Accepts either the wire name or the display label.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.wire_name() == raw || k.label().eq_ignore_ascii_case(raw))
    }
}

/// Opening line of the free-form question prompt.
pub const QUERY_ROLE: &str = "You are an AI assistant helping with resume and job applications.";

/// Closing line of the free-form question prompt.
pub const QUERY_CLOSING: &str =
    "Answer in a helpful and detailed manner based on the provided job description and resume.";

pub fn build_analysis_prompt(kind: AnalysisKind, job_description: &str, resume_text: &str) -> String {
    format!(
        "{}\n\nJob Description:\n{job_description}\n\nResume:\n{resume_text}",
        kind.instruction()
    )
}

pub fn build_query_prompt(query: &str, job_description: &str, resume_text: &str) -> String {
    format!(
        "{QUERY_ROLE}\n\n\
         Here is the Job Description:\n{job_description}\n\n\
         Here is the Resume:\n{resume_text}\n\n\
         Question: {query}\n\n\
         {QUERY_CLOSING}"
    )
}
