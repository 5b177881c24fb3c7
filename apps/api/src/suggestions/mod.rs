//! Suggestion Orchestrator: short autocomplete hints for one form field.
//!
//! Valid queries always get 1–5 suggestions: generated when possible, a
//! deterministic template list otherwise.

pub mod handlers;
pub mod prompts;

use tracing::{error, info, warn};

use crate::llm_client::TextGenerator;
use crate::suggestions::prompts::build_suggestion_prompt;

pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_SUGGESTIONS: usize = 5;
/// Parsed generator output shorter than this is discarded.
const MIN_PARSED_SUGGESTIONS: usize = 3;

const BULLET_MARKERS: &[char] = &['-', '*', '•'];

/// Served when the request itself could not be read.
pub const DEFAULT_SUGGESTIONS: [&str; 5] = [
    "Explore your interests deeper",
    "Build practical skills",
    "Network with professionals",
    "Gain hands-on experience",
    "Consider interdisciplinary approaches",
];

const GENERIC_CAREER_SUGGESTIONS: [&str; 5] = [
    "Explore career opportunities in your field",
    "Build expertise through hands-on projects",
    "Network with industry professionals",
    "Pursue continuous learning and skill development",
    "Consider leadership roles in your domain",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionField {
    Goals,
    Interests,
    Other(String),
}

impl SuggestionField {
    pub fn parse(field: &str) -> Self {
        match field.trim().to_lowercase().as_str() {
            "goals" => Self::Goals,
            "interests" | "interests-value" => Self::Interests,
            other => Self::Other(other.to_string()),
        }
    }
}

fn goal_templates(query: &str) -> Vec<String> {
    vec![
        format!("Become a {query} specialist in leading tech companies"),
        format!("Start an innovative {query} startup company"),
        format!("Pursue advanced research in {query} field"),
        format!("Work on cutting-edge {query} projects globally"),
        format!("Lead {query} teams in Fortune 500 companies"),
    ]
}

fn query_templates(query: &str) -> Vec<String> {
    vec![
        format!("Specialize in {query} technology"),
        format!("Lead {query} projects in industry"),
        format!("Research and develop {query} solutions"),
        format!("Consult on {query} implementations"),
        format!("Build {query}-focused products"),
    ]
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// List used when the generator is unconfigured or the call failed.
pub fn static_suggestions(field: &SuggestionField, query: &str) -> Vec<String> {
    match field {
        SuggestionField::Goals => goal_templates(query),
        _ => to_owned_list(&GENERIC_CAREER_SUGGESTIONS),
    }
}

/// List used when generated output had too few usable lines.
fn sparse_output_suggestions(field: &SuggestionField, query: &str) -> Vec<String> {
    match field {
        SuggestionField::Goals => goal_templates(query),
        _ => query_templates(query),
    }
}

/// Keeps bullet lines (`-`, `*`, `•`), strips the marker, drops empties,
/// keeps at most `MAX_SUGGESTIONS`.
pub fn parse_bullet_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix(BULLET_MARKERS))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

/// Suggestions for `field` given the partial `query`.
/// Missing field or a query under `MIN_QUERY_CHARS` yields an empty list.
pub async fn suggest(
    generator: &dyn TextGenerator,
    field: Option<&str>,
    query: Option<&str>,
) -> Vec<String> {
    let field = field.map(str::trim).unwrap_or_default();
    let query = query.map(str::trim).unwrap_or_default();
    if field.is_empty() || query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let field = SuggestionField::parse(field);

    if !generator.is_configured() {
        warn!("Generator not configured, using fallback suggestions");
        return static_suggestions(&field, query);
    }

    let prompt = build_suggestion_prompt(&field, query);
    match generator.generate(&prompt).await {
        Ok(text) => {
            let parsed = parse_bullet_lines(&text);
            info!("Suggestions generated for {field:?}: {query}");
            if parsed.len() < MIN_PARSED_SUGGESTIONS {
                warn!(
                    "Generator returned {} usable suggestion lines, using templates",
                    parsed.len()
                );
                return sparse_output_suggestions(&field, query);
            }
            parsed
        }
        Err(e) => {
            error!("Generator error while suggesting for {field:?}: {e}");
            static_suggestions(&field, query)
        }
    }
}
