use serde::Deserialize;

use crate::errors::AppError;

pub const DEFAULT_YEAR: &str = "2nd Year";

pub const MISSING_FIELDS_MESSAGE: &str =
    "Please fill all required fields including selecting at least one interest.";

/// Raw `POST /get_recommendations` form body. Every field is optional here;
/// `BranchProfile::from_form` decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationForm {
    pub branch: Option<String>,
    pub year: Option<String>,
    #[serde(rename = "interests-value")]
    pub interests: Option<String>,
    pub goals: Option<String>,
}

/// A validated student profile. All fields are trimmed; branch, interests and
/// goals are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchProfile {
    pub branch: String,
    pub year: String,
    pub interests: String,
    pub goals: String,
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

impl BranchProfile {
    pub fn from_form(form: &RecommendationForm) -> Result<Self, AppError> {
        let branch = trimmed(form.branch.as_deref());
        let interests = trimmed(form.interests.as_deref());
        let goals = trimmed(form.goals.as_deref());

        if branch.is_empty() || interests.is_empty() || goals.is_empty() {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }

        let year = match trimmed(form.year.as_deref()) {
            y if y.is_empty() => DEFAULT_YEAR.to_string(),
            y => y,
        };

        Ok(Self {
            branch,
            year,
            interests,
            goals,
        })
    }

    /// The first comma-separated interest, used to personalise rationale lines.
    pub fn primary_interest(&self) -> &str {
        self.interests
            .split(',')
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(&self.interests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(branch: &str, year: Option<&str>, interests: &str, goals: &str) -> RecommendationForm {
        RecommendationForm {
            branch: Some(branch.to_string()),
            year: year.map(str::to_string),
            interests: Some(interests.to_string()),
            goals: Some(goals.to_string()),
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let profile =
            BranchProfile::from_form(&form("  Mechanical ", Some(" 3rd Year "), " CAD ", " Designer\n"))
                .unwrap();
        assert_eq!(profile.branch, "Mechanical");
        assert_eq!(profile.year, "3rd Year");
        assert_eq!(profile.interests, "CAD");
        assert_eq!(profile.goals, "Designer");
    }

    #[test]
    fn test_year_defaults_when_missing_or_blank() {
        let missing = BranchProfile::from_form(&form("IT", None, "Web", "SRE")).unwrap();
        assert_eq!(missing.year, DEFAULT_YEAR);

        let blank = BranchProfile::from_form(&form("IT", Some("   "), "Web", "SRE")).unwrap();
        assert_eq!(blank.year, DEFAULT_YEAR);
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        for bad in [
            form("", None, "AI", "Researcher"),
            form("CS", None, "  ", "Researcher"),
            form("CS", None, "AI", ""),
        ] {
            let err = BranchProfile::from_form(&bad).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
        let err = BranchProfile::from_form(&RecommendationForm::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_primary_interest_takes_first_entry() {
        let profile =
            BranchProfile::from_form(&form("CS", None, "AI, Robotics, Web", "Researcher")).unwrap();
        assert_eq!(profile.primary_interest(), "AI");

        let odd = BranchProfile::from_form(&form("CS", None, ", Robotics", "Researcher")).unwrap();
        assert_eq!(odd.primary_interest(), "Robotics");
    }

    #[test]
    fn test_form_deserializes_hyphenated_interests_field() {
        let parsed: RecommendationForm = serde_json::from_value(serde_json::json!({
            "branch": "CS",
            "interests-value": "AI",
            "goals": "Researcher"
        }))
        .unwrap();
        assert_eq!(parsed.interests.as_deref(), Some("AI"));
        assert!(parsed.year.is_none());
    }
}
