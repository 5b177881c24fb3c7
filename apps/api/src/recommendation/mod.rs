// Recommendation engine: option gathering, prompt building, fallback rendering
// and the per-request orchestration that ties them together.
// All generator calls go through llm_client, never direct HTTP calls here.

pub mod fallback;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod render;
