// Prompt template for the recommendation generator.
// Headings come from render.rs so generated documents share the fallback outline.

use crate::llm_client::prompts::{ADVISOR_PERSONA, MARKDOWN_ONLY_INSTRUCTION};
use crate::models::options::{BranchOptions, NamedOption};
use crate::models::profile::BranchProfile;
use crate::recommendation::render::{
    ACTION_PLAN_HEADING, ADDITIONAL_HEADING, CLUB_HEADING, ELECTIVES_HEADING, INTERNSHIP_HEADING,
    PROFILE_HEADING, TITLE_HEADING,
};

/// Slots: {persona}, {markdown_instruction}, {electives}, {clubs}, {internships},
/// the {*_heading} slots, {branch}, {year}, {interests}, {goals}.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = r####"{persona} Create comprehensive, personalized recommendations for this student.

STUDENT PROFILE:
- Branch: {branch}
- Year: {year}
- Interests: {interests}
- Career Goals: {goals}

AVAILABLE OPTIONS (recommend ONLY from these, using the exact names):
Electives:
{electives}
Clubs:
{clubs}
Internships:
{internships}

Write the recommendation using EXACTLY this outline and these headings:

{title_heading}

{profile_heading}
[Repeat the branch, year, interests and career goals, then briefly analyse how the interests align with the goals]

{electives_heading}
[Three entries "### 1. <elective name>" to "### 3. <elective name>", each with **Why This Fits:**, **Key Benefits:** (three bullets) and **Prerequisites:**]

{club_heading}
["### <club name>" with **Why This Club:** and **Activities & Benefits:** bullets]

{internship_heading}
["### <internship name>" with **Perfect Match Because:**, **What You'll Gain:** bullets, **Required Skills:** and an application strategy]

{action_plan_heading}
[Immediate steps, 3-6 month goals and a 1-2 year vision, three numbered items each]

{additional_heading}
[Skill development priorities, networking approach and portfolio building advice]

Make every recommendation specific to the interests ({interests}) and career goals ({goals}). Be actionable and practical.

{markdown_instruction}"####;

fn name_list<T: NamedOption>(options: &[T]) -> String {
    options
        .iter()
        .map(|o| format!("- {}", o.name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Substitutes every `{slot}` in `template` in a single left-to-right scan.
/// Replacement text is never rescanned; unknown slots are left as written.
fn fill_slots(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let value = after_open.find('}').and_then(|close| {
            let name = &after_open[..close];
            slots
                .iter()
                .find(|(slot, _)| *slot == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Fills the template with the profile and the gathered option names.
pub fn build_recommendation_prompt(profile: &BranchProfile, options: &BranchOptions) -> String {
    let electives = name_list(&options.electives);
    let clubs = name_list(&options.clubs);
    let internships = name_list(&options.internships);

    fill_slots(
        RECOMMENDATION_PROMPT_TEMPLATE,
        &[
            ("persona", ADVISOR_PERSONA),
            ("markdown_instruction", MARKDOWN_ONLY_INSTRUCTION),
            ("title_heading", TITLE_HEADING),
            ("profile_heading", PROFILE_HEADING),
            ("electives_heading", ELECTIVES_HEADING),
            ("club_heading", CLUB_HEADING),
            ("internship_heading", INTERNSHIP_HEADING),
            ("action_plan_heading", ACTION_PLAN_HEADING),
            ("additional_heading", ADDITIONAL_HEADING),
            ("electives", electives.as_str()),
            ("clubs", clubs.as_str()),
            ("internships", internships.as_str()),
            ("branch", profile.branch.as_str()),
            ("year", profile.year.as_str()),
            ("interests", profile.interests.as_str()),
            ("goals", profile.goals.as_str()),
        ],
    )
}
