//! Experience extraction. The heading window is split into blocks anchored at
//! job-title lines; company, date range, and bullet descriptions are read from
//! the block they appear in, never correlated across entries by index.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::extract::dates;
use crate::analyzer::types::ExperienceEntry;
use crate::analyzer::window::{self, is_bullet, section_window, strip_bullet};
use crate::knowledge::{ROLE_DOMAINS, ROLE_NOUNS, SENIORITY};

const MAX_ENTRIES: usize = 6;
const COMPANY_PLACEHOLDER: &str = "Unspecified";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let sen = SENIORITY.join("|");
    let dom = ROLE_DOMAINS.join("|");
    let role = ROLE_NOUNS.join("|");
    Regex::new(&format!(
        r"(?i)\b(?:(?:{sen})\s+)?(?:{dom})\s+(?:{role})\b|\b(?:{sen})\s+(?:{role})\b"
    ))
    .unwrap()
});

static COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\bat\b|@|,)\s*([A-Z][A-Za-z0-9&.'-]*(?:\s+[A-Z][A-Za-z0-9&.'-]*){0,3})",
    )
    .unwrap()
});

const CORPORATE_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Ltd", "Corp", "Company", "Co", "Technologies", "Tech", "Solutions",
];

pub fn extract(text: &str) -> Vec<ExperienceEntry> {
    let win = section_window(
        text,
        window::EXPERIENCE_HEADINGS,
        &[
            window::EDUCATION_HEADINGS,
            window::SKILLS_HEADINGS,
            window::PROJECT_HEADINGS,
            window::CERTIFICATION_HEADINGS,
            window::SUMMARY_HEADINGS,
        ],
    );

    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();

    for block in title_blocks(win) {
        let joined = block.join("\n");
        let Some(title_match) = TITLE_RE.find(&joined) else {
            continue;
        };
        let title = title_match.as_str().trim().to_string();
        if !seen_titles.insert(title.to_lowercase()) {
            continue;
        }

        let company = company_guess(&joined)
            .unwrap_or_else(|| COMPANY_PLACEHOLDER.to_string());
        let duration = dates::ranges(&joined)
            .first()
            .map(|r| r.raw.clone())
            .unwrap_or_default();
        let description: Vec<String> = block
            .iter()
            .filter(|l| is_bullet(l))
            .map(|l| strip_bullet(l).to_string())
            .collect();

        entries.push(ExperienceEntry {
            title,
            company,
            duration,
            description,
        });
        if entries.len() == MAX_ENTRIES {
            break;
        }
    }

    entries
}

/// Split a window into blocks, each starting at a line containing a job title.
fn title_blocks(win: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in win.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if !is_bullet(line) && TITLE_RE.is_match(line) {
            blocks.push(vec![line]);
        } else if let Some(current) = blocks.last_mut() {
            current.push(line);
        }
    }
    blocks
}

/// Capitalized phrase after "at"/"@"/"," that does not read as a date. A
/// candidate ending in a corporate suffix wins over an earlier plain one.
fn company_guess(block: &str) -> Option<String> {
    let candidates: Vec<String> = COMPANY_RE
        .captures_iter(block)
        .map(|c| c[1].trim().to_string())
        .filter(|cand| plausible_company(cand))
        .collect();
    candidates
        .iter()
        .find(|c| has_corporate_suffix(c))
        .cloned()
        .or_else(|| candidates.into_iter().next())
}

fn plausible_company(cand: &str) -> bool {
    let first = cand.split_whitespace().next().unwrap_or("");
    let lower = first.to_lowercase();
    let month_like = lower.len() >= 3
        && dates_month_prefix(&lower);
    !month_like && !lower.starts_with("present") && cand.len() >= 2
}

fn dates_month_prefix(word: &str) -> bool {
    const MONTHS: &[&str] = &[
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    MONTHS.iter().any(|m| word.starts_with(m))
}

fn has_corporate_suffix(cand: &str) -> bool {
    cand.split_whitespace()
        .last()
        .map(|w| CORPORATE_SUFFIXES.contains(&w.trim_end_matches('.')))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_company_duration_from_one_line() {
        let text = "Experience\nSenior Software Engineer at ABC Technologies (Jan 2020 - Present)\n- Shipped the billing rewrite\n";
        let entries = extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Senior Software Engineer");
        assert_eq!(entries[0].company, "ABC Technologies");
        assert!(has_corporate_suffix(&entries[0].company));
        assert_eq!(entries[0].duration, "Jan 2020 - Present");
        assert_eq!(entries[0].description, vec!["Shipped the billing rewrite"]);
    }

    #[test]
    fn bullets_stay_with_their_block() {
        let text = "Work History\n\
                    Software Engineer at Acme Corp\n\
                    Mar 2019 - Feb 2021\n\
                    - built the ingest service\n\
                    - cut deploy times\n\
                    Data Analyst, Beta Solutions\n\
                    Jan 2017 - Feb 2019\n\
                    - wrote dashboards\n";
        let entries = extract(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description.len(), 2);
        assert_eq!(entries[1].description, vec!["wrote dashboards"]);
        assert_eq!(entries[1].company, "Beta Solutions");
        assert_eq!(entries[1].duration, "Jan 2017 - Feb 2019");
    }

    #[test]
    fn dedup_is_case_insensitive() {
        let text = "Experience\nSoftware Engineer, One Inc\nSOFTWARE ENGINEER, Two Inc\n";
        let entries = extract(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "One Inc");
    }

    #[test]
    fn company_defaults_to_placeholder() {
        let text = "Experience\nBackend Developer\n- maintained APIs\n";
        let entries = extract(text);
        assert_eq!(entries[0].company, COMPANY_PLACEHOLDER);
    }

    #[test]
    fn month_name_is_not_a_company() {
        let text = "Experience\nSoftware Engineer, Jan 2020 - Dec 2021\n";
        let entries = extract(text);
        assert_eq!(entries[0].company, COMPANY_PLACEHOLDER);
        assert_eq!(entries[0].duration, "Jan 2020 - Dec 2021");
    }

    #[test]
    fn capped_at_six_earliest_kept() {
        let mut text = String::from("Experience\n");
        let roles = [
            "Software Engineer", "Data Analyst", "Product Manager", "Web Developer",
            "Cloud Architect", "Security Consultant", "Mobile Developer", "Data Scientist",
        ];
        for r in roles {
            text.push_str(&format!("{r} at Some Company\n"));
        }
        let entries = extract(&text);
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].title, "Software Engineer");
    }

    #[test]
    fn empty_without_titles() {
        assert!(extract("John Smith\njohn@x.com").is_empty());
    }
}
