//! Suggestion generation: a fixed-order rule ladder, each rule appending at
//! most one suggestion. High rules sit above Medium above Low, so emission
//! order is priority order without any post-hoc sort.

use crate::analyzer::types::{
    ActionVerbReport, ExperienceLevel, ExtractedProfile, KeywordReport, Priority, Suggestion,
};

const NAMED_VERBS: usize = 4;
const NAMED_KEYWORDS: usize = 5;

#[allow(clippy::too_many_arguments)]
pub fn generate(
    profile: &ExtractedProfile,
    keywords: &KeywordReport,
    verbs: &ActionVerbReport,
    achievement_count: usize,
    word_count: usize,
    bullet_count: usize,
    level: ExperienceLevel,
) -> Vec<Suggestion> {
    let mut out = Vec::new();
    let mut push = |priority: Priority, text: String| {
        out.push(Suggestion { priority, text });
    };

    // High
    if profile.summary.is_none() {
        push(
            Priority::High,
            "Add a professional summary at the top of the resume.".into(),
        );
    }
    if profile.email.is_none() {
        push(
            Priority::High,
            "Add an email address so recruiters can reach you.".into(),
        );
    }
    if achievement_count < 3 {
        push(
            Priority::High,
            "Quantify your impact: add numbers, percentages, or amounts to your achievements."
                .into(),
        );
    }
    if profile.experience.is_empty() && profile.projects.is_empty() {
        push(
            Priority::High,
            "Add a work experience or projects section.".into(),
        );
    }

    // Medium
    if verbs.found.len() < 6 {
        let named = verbs
            .missing
            .iter()
            .take(NAMED_VERBS)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        push(
            Priority::Medium,
            format!("Start bullet points with strong action verbs such as: {named}."),
        );
    }
    if keywords.missing.len() > 5 {
        let named = keywords
            .missing
            .iter()
            .take(NAMED_KEYWORDS)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        push(
            Priority::Medium,
            format!("Consider adding relevant keywords such as: {named}."),
        );
    }
    if word_count < 400 {
        push(
            Priority::Medium,
            "The resume is on the short side; expand your most recent roles.".into(),
        );
    }
    if bullet_count < 5 {
        push(
            Priority::Medium,
            "Use bullet points to structure responsibilities and results.".into(),
        );
    }

    // Low
    if profile.linkedin_handle.is_none() {
        push(Priority::Low, "Add your LinkedIn profile URL.".into());
    }
    if level == ExperienceLevel::Fresher && profile.certifications.is_empty() {
        push(
            Priority::Low,
            "List a certification or completed online course to strengthen a first resume.".into(),
        );
    }

    if out.is_empty() {
        out.push(Suggestion {
            priority: Priority::Low,
            text: "The resume covers the essentials; tailor keywords to each job posting.".into(),
        });
    }
    out
}
