use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Number of options every category must carry once gathered.
pub const OPTIONS_PER_CATEGORY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectiveOption {
    pub name: String,
    pub prerequisites: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubOption {
    pub name: String,
    pub description: String,
    pub activities: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipOption {
    pub name: String,
    pub skills_required: String,
    pub description: String,
    pub company_type: String,
}

/// The three option categories for one branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOptions {
    pub electives: Vec<ElectiveOption>,
    pub clubs: Vec<ClubOption>,
    pub internships: Vec<InternshipOption>,
}

/// Anything with a display name, so categories can be merged generically.
pub trait NamedOption {
    fn name(&self) -> &str;
}

impl NamedOption for ElectiveOption {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedOption for ClubOption {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedOption for InternshipOption {
    fn name(&self) -> &str {
        &self.name
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Database rows (nullable columns) and their normalisation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, FromRow)]
pub struct ElectiveRow {
    pub name: String,
    pub prerequisites: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ClubRow {
    pub name: String,
    pub description: Option<String>,
    pub activities: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct InternshipRow {
    pub name: String,
    pub skills_required: Option<String>,
    pub description: Option<String>,
    pub company_type: Option<String>,
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => placeholder.to_string(),
    }
}

/// Rows with a blank name carry nothing displayable and are dropped.
fn clean_name(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

impl ElectiveRow {
    pub fn into_option(self) -> Option<ElectiveOption> {
        Some(ElectiveOption {
            name: clean_name(&self.name)?,
            prerequisites: or_placeholder(self.prerequisites, "None"),
            description: or_placeholder(
                self.description,
                "Course details are available from your department",
            ),
        })
    }
}

impl ClubRow {
    pub fn into_option(self) -> Option<ClubOption> {
        Some(ClubOption {
            name: clean_name(&self.name)?,
            description: or_placeholder(
                self.description,
                "Student-run community for peer learning",
            ),
            activities: or_placeholder(self.activities, "Meetups, workshops and projects"),
        })
    }
}

impl InternshipRow {
    pub fn into_option(self) -> Option<InternshipOption> {
        Some(InternshipOption {
            name: clean_name(&self.name)?,
            skills_required: or_placeholder(
                self.skills_required,
                "Core coursework, communication, teamwork",
            ),
            description: or_placeholder(self.description, "Hands-on industry experience"),
            company_type: or_placeholder(self.company_type, "Industry"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_prerequisites_become_none() {
        let row = ElectiveRow {
            name: "Compilers".to_string(),
            prerequisites: None,
            description: Some("Front to back".to_string()),
        };
        let option = row.into_option().unwrap();
        assert_eq!(option.prerequisites, "None");
        assert_eq!(option.description, "Front to back");
    }

    #[test]
    fn test_blank_fields_get_placeholders() {
        let row = InternshipRow {
            name: "  Firmware Intern ".to_string(),
            skills_required: Some("   ".to_string()),
            description: None,
            company_type: Some(String::new()),
        };
        let option = row.into_option().unwrap();
        assert_eq!(option.name, "Firmware Intern");
        assert!(!option.skills_required.is_empty());
        assert!(!option.description.is_empty());
        assert_eq!(option.company_type, "Industry");
    }

    #[test]
    fn test_blank_name_row_is_dropped() {
        let row = ClubRow {
            name: " ".to_string(),
            description: Some("x".to_string()),
            activities: Some("y".to_string()),
        };
        assert!(row.into_option().is_none());
    }
}
