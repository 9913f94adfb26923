// Post generation: prompt building, the single completion call, HTTP handlers.
// All completion calls go through llm_client — no direct API calls here.

pub mod generator;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
