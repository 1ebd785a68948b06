//! Section scoring and overall aggregation.

use crate::analyzer::types::{ExperienceLevel, ExtractedProfile, KeywordReport, SectionAnalysis};

/// Per-level section weights. Each table sums to 1.0.
const FRESHER_WEIGHTS: [(&str, f64); 8] = [
    ("Contact", 0.15),
    ("Summary", 0.10),
    ("Experience & Projects", 0.25),
    ("Education", 0.20),
    ("Technical Skills", 0.15),
    ("Soft Skills", 0.05),
    ("Certifications", 0.05),
    ("Languages", 0.05),
];
const EXPERIENCED_WEIGHTS: [(&str, f64); 8] = [
    ("Contact", 0.15),
    ("Summary", 0.15),
    ("Experience & Projects", 0.30),
    ("Education", 0.10),
    ("Technical Skills", 0.15),
    ("Soft Skills", 0.05),
    ("Certifications", 0.05),
    ("Languages", 0.05),
];

pub fn weights(level: ExperienceLevel) -> &'static [(&'static str, f64); 8] {
    match level {
        ExperienceLevel::Fresher => &FRESHER_WEIGHTS,
        ExperienceLevel::Experienced => &EXPERIENCED_WEIGHTS,
    }
}

/// One weighted 0-100 score per logical section.
pub fn score_sections(profile: &ExtractedProfile, level: ExperienceLevel) -> Vec<SectionAnalysis> {
    weights(level)
        .iter()
        .map(|(name, weight)| {
            let (score, details) = section_score(name, profile);
            SectionAnalysis {
                name: name.to_string(),
                present: score > 0,
                score,
                details,
                weight: *weight,
            }
        })
        .collect()
}

fn section_score(name: &str, profile: &ExtractedProfile) -> (u32, String) {
    match name {
        "Contact" => {
            let populated = [
                &profile.name,
                &profile.email,
                &profile.phone,
                &profile.location,
                &profile.linkedin_handle,
                &profile.github_handle,
                &profile.website_url,
            ]
            .iter()
            .filter(|f| f.is_some())
            .count();
            (
                capped(populated * 15),
                format!("{populated} of 7 contact fields found"),
            )
        }
        "Summary" => match &profile.summary {
            None => (0, "no summary section".into()),
            Some(s) => {
                let len = s.chars().count();
                let score = 60 + if len >= 100 { 20 } else { 0 } + if len >= 200 { 20 } else { 0 };
                (score, format!("summary of {len} characters"))
            }
        },
        "Experience & Projects" => {
            let score = capped(profile.experience.len() * 25 + profile.projects.len() * 15);
            (
                score,
                format!(
                    "{} experience entries, {} projects",
                    profile.experience.len(),
                    profile.projects.len()
                ),
            )
        }
        "Education" => {
            let has_gpa = profile.education.iter().any(|e| e.gpa.is_some());
            let score = capped(profile.education.len() * 40 + if has_gpa { 20 } else { 0 });
            (
                score,
                format!(
                    "{} education entries{}",
                    profile.education.len(),
                    if has_gpa { ", GPA listed" } else { "" }
                ),
            )
        }
        "Technical Skills" => {
            let n = profile.skills.technical.len();
            (capped(n * 10), format!("{n} technical skills"))
        }
        "Soft Skills" => {
            let n = profile.skills.soft.len();
            (capped(n * 20), format!("{n} soft skills"))
        }
        "Certifications" => {
            let n = profile.certifications.len();
            (capped(n * 25), format!("{n} certifications"))
        }
        "Languages" => {
            let n = profile.languages().len();
            (capped(n * 35), format!("{n} spoken languages"))
        }
        other => unreachable!("unknown section {other}"),
    }
}

fn capped(raw: usize) -> u32 {
    raw.min(100) as u32
}

/// Overall score: weighted sections plus keyword relevance, action-verb
/// coverage, achievement count, readability, and formatting.
pub fn aggregate(
    sections: &[SectionAnalysis],
    keywords: &KeywordReport,
    verbs_found: usize,
    achievement_count: usize,
    readability: u32,
    formatting_score: u32,
) -> u32 {
    let weighted: f64 = sections
        .iter()
        .map(|s| f64::from(s.score) * s.weight)
        .sum();
    let verb_component = (verbs_found as f64 / 12.0 * 100.0).min(100.0);
    let achievement_component = (achievement_count as f64 * 12.0).min(100.0);

    let total = weighted
        + f64::from(keywords.relevance_score) * 0.15
        + verb_component * 0.10
        + achievement_component * 0.10
        + f64::from(readability) * 0.05
        + f64::from(formatting_score) * 0.05;

    (total.round() as u32).min(100)
}
