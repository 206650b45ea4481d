// Resume analysis: prompt templates, input validation, and the request pipeline
// (validate → build prompt → generation service).
// All generation calls go through llm_client — no provider calls here.

pub mod handlers;
pub mod prompts;
pub mod runner;
pub mod validation;
