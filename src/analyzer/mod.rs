//! The analysis engine: one synchronous pass from raw resume text to a scored,
//! structured [`AtsResult`]. Extractors run first, then the signal analyzers
//! and section scores, then aggregation and suggestions.

pub mod extract;
pub mod scoring;
pub mod signals;
pub mod suggest;
pub mod types;
pub mod window;

use tracing::debug;

use types::{AtsResult, ExperienceLevel, ExtractedProfile};

/// Analyze already-extracted plain text. Deterministic and total: identical
/// input always yields an identical result, and no input fails.
pub fn analyze(text: &str, level: ExperienceLevel) -> AtsResult {
    let contact = extract::contact::extract(text);
    let profile = ExtractedProfile {
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        location: contact.location,
        linkedin_handle: contact.linkedin_handle,
        github_handle: contact.github_handle,
        website_url: contact.website_url,
        education: extract::education::extract(text),
        experience: extract::experience::extract(text),
        skills: extract::skills::extract(text),
        projects: extract::projects::extract(text),
        certifications: extract::certifications::extract(text),
        summary: extract::summary::extract(text),
        total_years_experience: extract::duration::estimate(text),
    };
    debug!(
        education = profile.education.len(),
        experience = profile.experience.len(),
        technical_skills = profile.skills.technical.len(),
        "extraction complete"
    );

    let quantifiable_achievements = extract::achievements::extract(text);
    let word_count = text.split_whitespace().count();
    let bullet_point_count = text.lines().filter(|l| window::is_bullet(l)).count();

    let keywords = signals::keywords(text, level);
    let action_verbs = signals::action_verbs(text);
    let readability_score = signals::readability(text);
    let formatting = signals::formatting(
        text,
        &profile,
        level,
        word_count,
        bullet_point_count,
        action_verbs.found.len(),
        quantifiable_achievements.len(),
    );

    let sections = scoring::score_sections(&profile, level);
    let score = scoring::aggregate(
        &sections,
        &keywords,
        action_verbs.found.len(),
        quantifiable_achievements.len(),
        readability_score,
        formatting.score,
    );
    debug!(score, readability_score, "scoring complete");

    let suggestions = suggest::generate(
        &profile,
        &keywords,
        &action_verbs,
        quantifiable_achievements.len(),
        word_count,
        bullet_point_count,
        level,
    );

    AtsResult {
        score,
        extracted_info: profile,
        keywords,
        suggestions,
        formatting,
        sections,
        action_verbs,
        quantifiable_achievements,
        readability_score,
        bullet_point_count,
        word_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Priority;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{name}.txt")).unwrap()
    }

    fn assert_bounds(result: &AtsResult) {
        assert!(result.score <= 100);
        assert!(result.readability_score <= 100);
        for s in &result.sections {
            assert!(s.score <= 100, "{} out of bounds", s.name);
        }
        let weight_sum: f64 = result.sections.iter().map(|s| s.weight).sum();
        assert!((weight_sum - 1.0).abs() < 1e-9);
        assert!(result.extracted_info.education.len() <= 5);
        assert!(result.extracted_info.experience.len() <= 6);
        assert!(result.extracted_info.projects.len() <= 5);
        assert!(result.extracted_info.certifications.len() <= 8);
        assert!(result.quantifiable_achievements.len() <= 8);
        if let Some(s) = &result.extracted_info.summary {
            assert!(s.chars().count() <= 400);
        }
    }

    #[test]
    fn minimal_input_succeeds_with_low_score() {
        let result = analyze(&fixture("minimal"), ExperienceLevel::Experienced);
        assert_bounds(&result);
        assert_eq!(result.extracted_info.email.as_deref(), Some("john@x.com"));
        assert_eq!(result.extracted_info.name.as_deref(), Some("John Smith"));
        assert!(result.extracted_info.education.is_empty());
        assert!(result.extracted_info.experience.is_empty());
        assert!(result.extracted_info.summary.is_none());
        assert!(result.score < 40, "minimal resume scored {}", result.score);
    }

    #[test]
    fn rich_resume_hits_every_extractor() {
        let result = analyze(&fixture("rich"), ExperienceLevel::Experienced);
        assert_bounds(&result);
        let info = &result.extracted_info;

        assert!(info
            .experience
            .iter()
            .any(|e| e.title.to_lowercase().contains("engineer")));
        assert!(info
            .certifications
            .iter()
            .any(|c| c.to_lowercase().contains("aws")));
        assert!(result
            .quantifiable_achievements
            .iter()
            .any(|a| a.contains("40%")));
        let edu = &info.education[0];
        assert!(edu.degree.contains("Bachelor's"));
        assert_eq!(edu.gpa.as_deref(), Some("3.8/4.0"));
        assert_eq!(edu.institution, "University of Technology");

        assert!(info.summary.is_some());
        assert!(!info.skills.technical.is_empty());
        assert!(info.total_years_experience > 0);
        assert!(result.score > 60, "rich resume scored {}", result.score);
    }

    #[test]
    fn fresher_resume_uses_fresher_weights() {
        let result = analyze(&fixture("fresher"), ExperienceLevel::Fresher);
        assert_bounds(&result);
        let education_weight = result
            .sections
            .iter()
            .find(|s| s.name == "Education")
            .unwrap()
            .weight;
        assert!((education_weight - 0.20).abs() < 1e-9);
        assert!(!result.extracted_info.projects.is_empty());
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = fixture("rich");
        let a = analyze(&text, ExperienceLevel::Experienced);
        let b = analyze(&text, ExperienceLevel::Experienced);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn suggestion_ladder_orders_high_first() {
        // Missing both summary and email: two High suggestions lead.
        let result = analyze("plain text with no structure at all", ExperienceLevel::Fresher);
        assert!(result.suggestions.len() >= 2);
        assert_eq!(result.suggestions[0].priority, Priority::High);
        assert_eq!(result.suggestions[1].priority, Priority::High);
        let mut seen_non_high = false;
        for s in &result.suggestions {
            if s.priority == Priority::High {
                assert!(!seen_non_high, "High suggestion after a lower one");
            } else {
                seen_non_high = true;
            }
        }
    }

    #[test]
    fn empty_input_is_total() {
        let result = analyze("", ExperienceLevel::Fresher);
        assert_bounds(&result);
        assert_eq!(result.word_count, 0);
        assert_eq!(result.readability_score, 50);
    }
}
