// Shared prompt fragments.
// Each feature that calls the generator defines its own prompts.rs alongside it;
// this file holds the pieces they have in common.

/// Persona line that opens every prompt.
pub const ADVISOR_PERSONA: &str = "You are an expert college academic advisor \
    helping engineering and science students plan electives, clubs and internships.";

/// Appended to prompts whose output is shown as a plain bullet list.
pub const BULLET_LIST_INSTRUCTION: &str = "Return only a simple list, one item per line, \
    each line starting with \"- \". Do not add headings, numbering, explanations or extra formatting.";

/// Appended to prompts whose output is rendered as markdown in the UI.
pub const MARKDOWN_ONLY_INSTRUCTION: &str = "Respond with markdown only. \
    Do NOT wrap the answer in code fences. \
    Do NOT add any text before the first heading.";
