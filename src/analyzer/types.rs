//! Output data model. Everything here serializes to a plain JSON document so
//! callers can display, export, or cache results without touching engine types.

use std::str::FromStr;

use serde::Serialize;

/// Caller-supplied mode that selects the keyword set and section weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Fresher,
    Experienced,
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fresher" => Ok(Self::Fresher),
            "experienced" => Ok(Self::Experienced),
            other => Err(format!(
                "unknown experience level '{other}' (expected 'fresher' or 'experienced')"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: Vec<String>,
}

/// Deduplicated, case-normalized vocabulary hits (vocabulary order, so output
/// is deterministic).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Structured output of the extractor stage. Every contact field is
/// independently optional; absence is an expected state, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_handle: Option<String>,
    pub github_handle: Option<String>,
    pub website_url: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillSet,
    pub projects: Vec<Project>,
    pub certifications: Vec<String>,
    pub summary: Option<String>,
    pub total_years_experience: u32,
}

impl ExtractedProfile {
    /// Alias for `skills.languages`.
    pub fn languages(&self) -> &[String] {
        &self.skills.languages
    }
}

/// One logical resume section. Weights for the fixed section set sum to 1.0
/// per experience level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionAnalysis {
    pub name: String,
    pub present: bool,
    pub score: u32,
    pub details: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub relevance_score: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionVerbReport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingReport {
    pub score: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub priority: Priority,
    pub text: String,
}

/// Full analysis output for one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsResult {
    pub score: u32,
    pub extracted_info: ExtractedProfile,
    pub keywords: KeywordReport,
    pub suggestions: Vec<Suggestion>,
    pub formatting: FormattingReport,
    pub sections: Vec<SectionAnalysis>,
    pub action_verbs: ActionVerbReport,
    pub quantifiable_achievements: Vec<String>,
    pub readability_score: u32,
    pub bullet_point_count: usize,
    pub word_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_str() {
        assert_eq!("fresher".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Fresher));
        assert_eq!("Experienced".parse::<ExperienceLevel>(), Ok(ExperienceLevel::Experienced));
        assert!("mid".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn languages_alias() {
        let mut profile = ExtractedProfile::default();
        profile.skills.languages = vec!["english".into(), "spanish".into()];
        assert_eq!(profile.languages(), profile.skills.languages.as_slice());
    }
}
