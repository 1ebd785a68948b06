//! Signal analyzers: keyword relevance, action-verb coverage, readability,
//! and rule-based formatting checks.

use std::sync::LazyLock;

use itertools::{Either, Itertools};
use regex::Regex;

use crate::analyzer::extract::education;
use crate::analyzer::types::{
    ActionVerbReport, ExperienceLevel, ExtractedProfile, FormattingReport, KeywordReport,
};
use crate::knowledge::{
    ACTION_VERBS, EXPERIENCED_TERMS, FRESHER_TERMS, SOFT_SKILLS, TECH_SKILLS,
};

/// At most this many terms count toward the relevance denominator.
const RELEVANCE_SAMPLE: usize = 25;
/// Fresher keyword sets sample a prefix of the skill tables.
const FRESHER_TECH_SAMPLE: usize = 10;
const FRESHER_SOFT_SAMPLE: usize = 8;

const MAX_MISSING_VERBS: usize = 8;

static VERB_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ACTION_VERBS
        .iter()
        .map(|v| {
            // Accept a simple inflection tail: manage → managed / managing.
            let re = Regex::new(&format!(r"(?i)\b{}(?:d|ed|es|ing|s)?\b", regex::escape(v)))
                .unwrap();
            (*v, re)
        })
        .collect()
});

/// Relevant-keyword set for a level, tested against the document.
pub fn keywords(text: &str, level: ExperienceLevel) -> KeywordReport {
    let lower = text.to_lowercase();
    let set: Vec<&str> = match level {
        ExperienceLevel::Fresher => FRESHER_TERMS
            .iter()
            .chain(TECH_SKILLS.iter().take(FRESHER_TECH_SAMPLE))
            .chain(SOFT_SKILLS.iter().take(FRESHER_SOFT_SAMPLE))
            .copied()
            .collect(),
        ExperienceLevel::Experienced => EXPERIENCED_TERMS
            .iter()
            .chain(TECH_SKILLS.iter())
            .chain(SOFT_SKILLS.iter())
            .copied()
            .collect(),
    };

    let (found, missing): (Vec<&str>, Vec<&str>) =
        set.iter().copied().partition(|term| lower.contains(term));
    let denominator = set.len().min(RELEVANCE_SAMPLE);
    let relevance_score = if denominator == 0 {
        0
    } else {
        (((found.len() as f64 / denominator as f64) * 100.0).round() as u32).min(100)
    };

    KeywordReport {
        found: found.into_iter().map(str::to_string).collect(),
        missing: missing.into_iter().map(str::to_string).collect(),
        relevance_score,
    }
}

/// Which action verbs appear in the document (base form, optional inflection).
pub fn action_verbs(text: &str) -> ActionVerbReport {
    let (found, missing): (Vec<&str>, Vec<&str>) = VERB_RES
        .iter()
        .partition_map(|(verb, re)| {
            if re.is_match(text) {
                Either::Left(*verb)
            } else {
                Either::Right(*verb)
            }
        });
    ActionVerbReport {
        found: found.into_iter().map(str::to_string).collect(),
        missing: missing
            .into_iter()
            .take(MAX_MISSING_VERBS)
            .map(str::to_string)
            .collect(),
    }
}

/// Adapted Flesch Reading Ease, re-centered for resume-length text.
pub fn readability(text: &str) -> u32 {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let words: Vec<&str> = sentences
        .iter()
        .flat_map(|s| s.split_whitespace())
        .collect();
    if sentences.is_empty() || words.is_empty() {
        return 50;
    }

    let avg_words = words.len() as f64 / sentences.len() as f64;
    let total_syllables: usize = words.iter().map(|w| syllables(w)).sum();
    let avg_syllables = total_syllables as f64 / words.len() as f64;

    let flesch = 206.835 - 1.015 * avg_words - 84.6 * avg_syllables;
    let clamped = flesch.clamp(0.0, 100.0);
    let recentered = ((clamped + 50.0) / 1.5).clamp(0.0, 100.0);
    recentered.round() as u32
}

/// Vowel-group syllable approximation; every word counts at least one.
fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut in_group = false;
    for c in word.chars() {
        let vowel = matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_group {
            count += 1;
        }
        in_group = vowel;
    }
    count.max(1)
}

/// Rule-based formatting issues and strengths.
#[allow(clippy::too_many_arguments)]
pub fn formatting(
    text: &str,
    profile: &ExtractedProfile,
    level: ExperienceLevel,
    word_count: usize,
    bullet_count: usize,
    verbs_found: usize,
    achievement_count: usize,
) -> FormattingReport {
    let mut issues: Vec<String> = Vec::new();
    let mut strengths: Vec<String> = Vec::new();

    if word_count < 200 {
        issues.push("Very short document (under 200 words)".into());
    } else if word_count > 1200 {
        issues.push("Long document (over 1200 words); consider trimming".into());
    } else if word_count >= 400 {
        strengths.push("Good overall length".into());
    }

    if bullet_count < 5 {
        issues.push("Few bullet points; use bullets for responsibilities and results".into());
    }

    if verbs_found < 5 {
        issues.push("Few action verbs detected".into());
    }
    if verbs_found >= 6 {
        strengths.push("Strong action-verb usage".into());
    }

    if achievement_count < 2 {
        issues.push("Few quantified achievements".into());
    }

    if profile.email.is_none() {
        issues.push("No email address found".into());
    }
    if profile.phone.is_none() {
        issues.push("No phone number found".into());
    }
    if profile.linkedin_handle.is_none() {
        issues.push("No LinkedIn profile found".into());
    }
    if profile.email.is_some() && profile.phone.is_some() && profile.linkedin_handle.is_some() {
        strengths.push("Complete contact information".into());
    }

    let tech_count = profile.skills.technical.len();
    if tech_count < 5 {
        issues.push("Few technical skills listed".into());
    } else if tech_count >= 8 {
        strengths.push("Broad technical skill coverage".into());
    }

    match level {
        ExperienceLevel::Fresher => {
            if profile.projects.len() < 2 {
                issues.push("Fewer than two projects listed".into());
            }
            if education::gpa(text).is_none() {
                issues.push("No GPA listed".into());
            }
        }
        ExperienceLevel::Experienced => {
            if profile.total_years_experience == 0 {
                issues.push("No detectable years of experience".into());
            }
            if achievement_count < 4 {
                issues.push("Senior resumes benefit from four or more quantified results".into());
            }
        }
    }

    let score = (100i64 - 8 * issues.len() as i64 + 5 * strengths.len() as i64).clamp(0, 100);
    FormattingReport {
        score: score as u32,
        issues,
        strengths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relevance_is_zero_without_vocabulary_hits() {
        let report = keywords("lorem ipsum dolor sit amet", ExperienceLevel::Fresher);
        assert_eq!(report.relevance_score, 0);
        assert!(report.found.is_empty());
    }

    #[test]
    fn relevance_caps_at_100() {
        use crate::knowledge::{FRESHER_TERMS, SOFT_SKILLS, TECH_SKILLS};
        let blob = FRESHER_TERMS
            .iter()
            .chain(TECH_SKILLS.iter().take(FRESHER_TECH_SAMPLE))
            .chain(SOFT_SKILLS.iter().take(FRESHER_SOFT_SAMPLE))
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let report = keywords(&blob, ExperienceLevel::Fresher);
        assert_eq!(report.relevance_score, 100);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn verbs_match_inflections() {
        let report = action_verbs("Managed a team. Designing pipelines. Led launches.");
        assert!(report.found.contains(&"manage".to_string()));
        assert!(report.found.contains(&"design".to_string()));
        assert!(report.found.contains(&"led".to_string()));
        assert!(report.missing.len() <= MAX_MISSING_VERBS);
    }

    #[test]
    fn readability_bounds_and_empty_default() {
        assert_eq!(readability(""), 50);
        let simple = "I run fast. We win big. It was fun.";
        let dense = "Spearheaded organizational transformation initiatives leveraging \
                     interdisciplinary stakeholder collaboration methodologies.";
        let rs = readability(simple);
        let rd = readability(dense);
        assert!(rs <= 100 && rd <= 100);
        assert!(rs > rd, "simple prose should read easier");
    }

    #[test]
    fn syllable_groups() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("table"), 2);
        assert_eq!(syllables("readability"), 5);
        assert_eq!(syllables("xyz"), 1);
    }

    #[test]
    fn formatting_penalizes_every_issue() {
        let profile = ExtractedProfile::default();
        let report = formatting("", &profile, ExperienceLevel::Experienced, 10, 0, 0, 0);
        assert!(report.strengths.is_empty());
        assert_eq!(report.issues.len(), 10);
        assert_eq!(report.score, 20);
    }

    #[test]
    fn formatting_rewards_strengths() {
        let mut profile = ExtractedProfile::default();
        profile.email = Some("a@b.c".into());
        profile.phone = Some("555-123-4567".into());
        profile.linkedin_handle = Some("ab".into());
        profile.skills.technical = (0..9).map(|i| format!("skill{i}")).collect();
        profile.total_years_experience = 5;
        let report = formatting(
            "",
            &profile,
            ExperienceLevel::Experienced,
            800,
            12,
            10,
            5,
        );
        assert!(report.issues.is_empty());
        assert_eq!(report.strengths.len(), 4);
        assert_eq!(report.score, 100);
    }
}
