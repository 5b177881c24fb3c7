//! Fallback Content Provider: static, branch-keyed options.
//!
//! Used as the whole data source when the store is down, and per category when
//! the store has fewer than `OPTIONS_PER_CATEGORY` rows for a branch.

use std::collections::HashSet;

use crate::models::options::{
    BranchOptions, ClubOption, ElectiveOption, InternshipOption, NamedOption, OPTIONS_PER_CATEGORY,
};

/// Keyword families a branch name is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchFamily {
    Computing,
    Mechanical,
    Electrical,
    Other,
}

const COMPUTING_KEYWORDS: &[&str] = &["computer", "software", "information technology"];
const MECHANICAL_KEYWORDS: &[&str] = &["mechanical", "automobile", "automotive"];
const ELECTRICAL_KEYWORDS: &[&str] = &["electrical", "electronics"];

/// Case-insensitive family lookup. "IT" only counts as a standalone word so
/// that branches like "Architecture" are not classed as computing.
pub fn classify_branch(branch: &str) -> BranchFamily {
    let lower = branch.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));
    let has_it_word = lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "it");

    if contains_any(COMPUTING_KEYWORDS) || has_it_word {
        BranchFamily::Computing
    } else if contains_any(MECHANICAL_KEYWORDS) {
        BranchFamily::Mechanical
    } else if contains_any(ELECTRICAL_KEYWORDS) {
        BranchFamily::Electrical
    } else {
        BranchFamily::Other
    }
}

fn elective(name: &str, prerequisites: &str, description: &str) -> ElectiveOption {
    ElectiveOption {
        name: name.to_string(),
        prerequisites: prerequisites.to_string(),
        description: description.to_string(),
    }
}

fn fallback_electives(branch: &str) -> Vec<ElectiveOption> {
    match classify_branch(branch) {
        BranchFamily::Computing => vec![
            elective(
                "Advanced Algorithms & Data Structures",
                "Basic programming, DSA fundamentals",
                "Deep dive into complex algorithms and optimization",
            ),
            elective(
                "Machine Learning & AI",
                "Statistics, Python programming",
                "Hands-on ML projects and AI applications",
            ),
            elective(
                "Cloud Computing & DevOps",
                "Basic networking, Linux",
                "AWS/Azure certification and deployment strategies",
            ),
        ],
        BranchFamily::Mechanical => vec![
            elective(
                "Advanced CAD & Simulation",
                "Engineering graphics, basic CAD",
                "SolidWorks, ANSYS simulation projects",
            ),
            elective(
                "Renewable Energy Systems",
                "Thermodynamics, fluid mechanics",
                "Solar, wind, and hybrid energy solutions",
            ),
            elective(
                "Robotics & Automation",
                "Control systems, programming",
                "Industrial robotics and automation projects",
            ),
        ],
        BranchFamily::Electrical => vec![
            elective(
                "Embedded Systems Design",
                "Microprocessors, C programming",
                "IoT projects and embedded applications",
            ),
            elective(
                "Power Systems & Smart Grid",
                "Circuit analysis, power electronics",
                "Modern power distribution and smart grid tech",
            ),
            elective(
                "VLSI Design",
                "Digital electronics, HDL",
                "Chip design and semiconductor applications",
            ),
        ],
        BranchFamily::Other => vec![
            elective(
                &format!("Advanced {branch} Applications"),
                "Core subject completion",
                "Specialized applications in your field",
            ),
            elective(
                "Research Methodology",
                "Basic coursework",
                "Scientific research and publication techniques",
            ),
            elective(
                "Industry Integration",
                "Foundational knowledge",
                "Real-world applications and case studies",
            ),
        ],
    }
}

fn fallback_clubs(branch: &str) -> Vec<ClubOption> {
    vec![
        ClubOption {
            name: format!("{branch} Professional Society"),
            description: format!("Professional development in {branch}"),
            activities: "Industry workshops, guest lectures, networking events".to_string(),
        },
        ClubOption {
            name: "Innovation & Entrepreneurship Club".to_string(),
            description: "Startup incubation and innovation projects".to_string(),
            activities: "Pitch competitions, business plan development, mentorship".to_string(),
        },
        ClubOption {
            name: "Technical Research Club".to_string(),
            description: "Academic research and publication support".to_string(),
            activities: "Research projects, paper presentations, conference participation"
                .to_string(),
        },
    ]
}

fn fallback_internships(branch: &str) -> Vec<InternshipOption> {
    vec![
        InternshipOption {
            name: format!("Industry Internship - {branch}"),
            skills_required: "Technical skills, communication, teamwork".to_string(),
            description: format!("Practical experience in {branch} industry"),
            company_type: "Industry".to_string(),
        },
        InternshipOption {
            name: "Research Internship".to_string(),
            skills_required: "Analytical thinking, research methodology".to_string(),
            description: "Academic research with faculty guidance".to_string(),
            company_type: "Research Institute".to_string(),
        },
        InternshipOption {
            name: "Startup Internship".to_string(),
            skills_required: "Adaptability, multi-tasking, innovation mindset".to_string(),
            description: "Dynamic startup environment experience".to_string(),
            company_type: "Startup".to_string(),
        },
    ]
}

/// Static options for any branch: exactly three per category, all fields filled.
pub fn fallback_options(branch: &str) -> BranchOptions {
    BranchOptions {
        electives: fallback_electives(branch),
        clubs: fallback_clubs(branch),
        internships: fallback_internships(branch),
    }
}

/// Stored entries first (deduplicated by name), then fallback entries with
/// names not already present, cut to exactly `OPTIONS_PER_CATEGORY`.
fn backfill<T: NamedOption>(stored: Vec<T>, fallback: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    stored
        .into_iter()
        .chain(fallback)
        .filter(|option| seen.insert(option.name().to_lowercase()))
        .take(OPTIONS_PER_CATEGORY)
        .collect()
}

/// Merges what the store returned with the fallback tables, per category.
pub fn gather_options(branch: &str, stored: BranchOptions) -> BranchOptions {
    let fallback = fallback_options(branch);
    BranchOptions {
        electives: backfill(stored.electives, fallback.electives),
        clubs: backfill(stored.clubs, fallback.clubs),
        internships: backfill(stored.internships, fallback.internships),
    }
}
