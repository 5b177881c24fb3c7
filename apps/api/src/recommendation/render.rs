//! Fallback rendering: the recommendation document built from local data only.
//!
//! The section headings are shared with the generation prompt so generated and
//! fallback documents have the same outline. Rendering is a pure function of
//! its inputs.

use crate::models::options::{BranchOptions, ClubOption, ElectiveOption, InternshipOption};
use crate::models::profile::BranchProfile;

pub const TITLE_HEADING: &str = "# 🎓 Personalized Academic & Career Recommendations";
pub const PROFILE_HEADING: &str = "## 📋 Your Profile";
pub const ELECTIVES_HEADING: &str = "## 🎓 Recommended Electives";
pub const CLUB_HEADING: &str = "## 🏛️ Recommended Club";
pub const INTERNSHIP_HEADING: &str = "## 💼 Recommended Internship";
pub const ACTION_PLAN_HEADING: &str = "## 🎯 Action Plan";
pub const ADDITIONAL_HEADING: &str = "## 📈 Additional Recommendations";

/// Why the local document is being served instead of generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No generator credential: the normal offline path.
    GeneratorUnconfigured,
    /// The generator was called and failed; the document says so.
    GeneratorFailed,
}

const LIMITED_ASSISTANCE_NOTE: &str = "*Note: This recommendation was generated with limited AI \
    assistance. For more detailed guidance, ensure your system configuration is complete.*";

const CLOSING_LINE: &str = "*Remember: Success comes from consistent effort and strategic \
    choices. Focus on quality over quantity and always align decisions with your long-term \
    career goals.*";

/// Key benefits for the three elective entries, by position.
const ELECTIVE_BENEFITS: [[&str; 3]; 3] = [
    [
        "Develops critical skills relevant to your field",
        "Provides hands-on experience with industry tools",
        "Opens pathways to specialized career opportunities",
    ],
    [
        "Enhances problem-solving capabilities",
        "Provides theoretical foundation for practical applications",
        "Builds a portfolio of relevant projects",
    ],
    [
        "Exposure to cutting-edge technologies",
        "Networking opportunities with professionals",
        "Capstone project experience",
    ],
];

fn elective_rationale(position: usize, profile: &BranchProfile) -> String {
    match position {
        0 => format!(
            "This course aligns with your interests in {} and supports your goal: {}.",
            profile.primary_interest(),
            profile.goals
        ),
        1 => format!(
            "Complements your interest in {} while building analytical and technical skills.",
            profile.primary_interest()
        ),
        _ => "Bridges the gap between academic knowledge and real-world applications.".to_string(),
    }
}

fn push_line(doc: &mut String, line: &str) {
    doc.push_str(line);
    doc.push('\n');
}

fn push_bullets(doc: &mut String, items: &[&str]) {
    for item in items {
        doc.push_str(&format!("- {item}\n"));
    }
}

fn render_profile(doc: &mut String, profile: &BranchProfile) {
    push_line(doc, PROFILE_HEADING);
    doc.push_str(&format!("- **Branch:** {}\n", profile.branch));
    doc.push_str(&format!("- **Year:** {}\n", profile.year));
    doc.push_str(&format!("- **Interests:** {}\n", profile.interests));
    doc.push_str(&format!("- **Career Goals:** {}\n\n", profile.goals));
}

fn render_electives(doc: &mut String, profile: &BranchProfile, electives: &[ElectiveOption]) {
    push_line(doc, ELECTIVES_HEADING);
    doc.push('\n');
    for (index, (elective, benefits)) in electives.iter().zip(ELECTIVE_BENEFITS).enumerate() {
        let why = elective_rationale(index, profile);
        doc.push_str(&format!("### {}. {}\n", index + 1, elective.name));
        doc.push_str(&format!("**Why This Fits:** {why}\n\n"));
        doc.push_str(&format!("**About:** {}\n\n", elective.description));
        push_line(doc, "**Key Benefits:**");
        push_bullets(doc, &benefits);
        doc.push_str(&format!("\n**Prerequisites:** {}\n\n", elective.prerequisites));
    }
}

fn render_club(doc: &mut String, profile: &BranchProfile, club: Option<&ClubOption>) {
    push_line(doc, CLUB_HEADING);
    doc.push('\n');
    let Some(club) = club else { return };
    doc.push_str(&format!("### {}\n", club.name));
    doc.push_str(&format!(
        "**Why This Club:** A strong match for your interests and career aspirations in {}.\n\n",
        profile.branch
    ));
    doc.push_str(&format!("**About:** {}\n\n", club.description));
    push_line(doc, "**Activities & Benefits:**");
    doc.push_str(&format!("- {}\n", club.activities));
    push_bullets(
        doc,
        &[
            "Technical workshops and skill development",
            "Networking with alumni and industry professionals",
            "Leadership development opportunities",
        ],
    );
    doc.push('\n');
}

fn render_internship(
    doc: &mut String,
    profile: &BranchProfile,
    internship: Option<&InternshipOption>,
) {
    push_line(doc, INTERNSHIP_HEADING);
    doc.push('\n');
    let Some(internship) = internship else { return };
    doc.push_str(&format!("### {}\n", internship.name));
    doc.push_str(&format!(
        "**Perfect Match Because:** Aligns with your interests in {} and your career goals.\n\n",
        profile.primary_interest()
    ));
    doc.push_str(&format!(
        "**About:** {} ({})\n\n",
        internship.description, internship.company_type
    ));
    push_line(doc, "**What You'll Gain:**");
    push_bullets(
        doc,
        &[
            "Real-world application of academic knowledge",
            "Industry-specific tools and technology experience",
            "Professional network and mentorship opportunities",
            "Resume-building practical experience",
        ],
    );
    doc.push_str(&format!(
        "\n**Required Skills:** {}\n\n",
        internship.skills_required
    ));
}

fn render_action_plan(doc: &mut String) {
    push_line(doc, ACTION_PLAN_HEADING);
    doc.push('\n');
    push_line(doc, "**Immediate Steps (This Semester):**");
    push_line(doc, "1. Enroll in the top recommended elective for next semester");
    push_line(doc, "2. Join the recommended club and attend orientation sessions");
    push_line(doc, "3. Start building relevant skills through online courses\n");
    push_line(doc, "**Medium-term Goals (Next 6-12 months):**");
    push_line(doc, "1. Complete at least 2 recommended electives");
    push_line(doc, "2. Take an active role in club activities and projects");
    push_line(doc, "3. Begin the internship application process early\n");
    push_line(doc, "**Long-term Vision (1-2 years):**");
    push_line(doc, "1. Secure an internship in your field");
    push_line(doc, "2. Build a strong professional network");
    push_line(doc, "3. Develop expertise that sets you apart\n");
}

fn render_additional(doc: &mut String, profile: &BranchProfile) {
    push_line(doc, ADDITIONAL_HEADING);
    doc.push('\n');
    push_line(doc, "**Skill Development Focus:**");
    doc.push_str(&format!(
        "- Technical skills related to {}\n",
        profile.primary_interest()
    ));
    push_bullets(
        doc,
        &[
            "Communication and presentation skills",
            "Project management and teamwork",
        ],
    );
    doc.push('\n');
    push_line(doc, "**Networking Strategy:**");
    push_bullets(
        doc,
        &[
            "Attend industry conferences and webinars",
            "Connect with alumni in your field",
            "Join professional associations",
        ],
    );
    doc.push('\n');
    push_line(doc, "**Portfolio Building:**");
    push_bullets(
        doc,
        &[
            "Document all projects and achievements",
            "Create an online presence (LinkedIn, GitHub, personal website)",
            "Collect recommendations from professors and supervisors",
        ],
    );
    doc.push('\n');
}

/// Renders the full recommendation document from the profile and gathered options.
pub fn render_fallback(
    profile: &BranchProfile,
    options: &BranchOptions,
    reason: FallbackReason,
) -> String {
    let mut doc = String::new();
    push_line(&mut doc, TITLE_HEADING);
    doc.push('\n');

    render_profile(&mut doc, profile);
    render_electives(&mut doc, profile, &options.electives);
    render_club(&mut doc, profile, options.clubs.first());
    render_internship(&mut doc, profile, options.internships.first());
    render_action_plan(&mut doc);
    render_additional(&mut doc, profile);

    push_line(&mut doc, "---");
    push_line(&mut doc, CLOSING_LINE);
    if reason == FallbackReason::GeneratorFailed {
        doc.push('\n');
        push_line(&mut doc, LIMITED_ASSISTANCE_NOTE);
    }
    doc
}
