// Prompt templates for autocomplete suggestions. Replace `{query}` before sending.

use crate::llm_client::prompts::{ADVISOR_PERSONA, BULLET_LIST_INSTRUCTION};
use crate::suggestions::SuggestionField;

pub const GOALS_PROMPT_TEMPLATE: &str = r#"Generate 5 concise, relevant career goal suggestions for a college student interested in: '{query}'.
Focus on realistic, achievable career paths and professional development goals.
Example:
- Become a data scientist at a tech company
- Start a fintech startup
- Pursue a PhD in machine learning
- Work as an AI consultant for Fortune 500 companies
- Lead data teams at innovative companies"#;

pub const INTERESTS_PROMPT_TEMPLATE: &str = r#"Generate 5 concise academic interest areas related to: '{query}' that a college student could explore through electives, clubs or projects.
Example:
- Machine Learning
- Computer Vision
- Natural Language Processing
- Robotics
- Data Visualization"#;

pub const GENERIC_PROMPT_TEMPLATE: &str = r#"Generate 5 short, relevant suggestions for the '{field}' field of a college student's academic profile, starting from: '{query}'."#;

pub fn build_suggestion_prompt(field: &SuggestionField, query: &str) -> String {
    let body = match field {
        SuggestionField::Goals => GOALS_PROMPT_TEMPLATE.to_string(),
        SuggestionField::Interests => INTERESTS_PROMPT_TEMPLATE.to_string(),
        SuggestionField::Other(name) => GENERIC_PROMPT_TEMPLATE.replace("{field}", name),
    };
    format!(
        "{ADVISOR_PERSONA}\n\n{}\n\n{BULLET_LIST_INSTRUCTION}",
        body.replace("{query}", query)
    )
}
