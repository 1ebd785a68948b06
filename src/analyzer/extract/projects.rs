//! Project extraction from a "projects/portfolio" heading window.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::analyzer::types::Project;
use crate::analyzer::window::{self, is_bullet, strip_bullet, try_section_window};

const MAX_ENTRIES: usize = 5;
const MAX_DESCRIPTION: usize = 200;

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}[.)]\s+").unwrap());
static TITLE_COLON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][^\n]{1,80}:$").unwrap());
static TECH_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:technologies|tech\s+stack|built\s+with|using|stack)\s*[:\-]?\s*([^\n]+)")
        .unwrap()
});

pub fn extract(text: &str) -> Vec<Project> {
    // No projects heading, no projects: splitting arbitrary text into blocks
    // would fabricate entries out of unrelated lines.
    let Some(win) = try_section_window(
        text,
        window::PROJECT_HEADINGS,
        &[
            window::EDUCATION_HEADINGS,
            window::EXPERIENCE_HEADINGS,
            window::SKILLS_HEADINGS,
            window::CERTIFICATION_HEADINGS,
        ],
    ) else {
        return Vec::new();
    };

    blocks(win)
        .into_iter()
        .filter_map(|block| project_from_block(&block))
        .take(MAX_ENTRIES)
        .collect()
}

/// A new block starts at a bulleted, numbered, or `Title:` line.
fn blocks(win: &str) -> Vec<Vec<&str>> {
    let mut out: Vec<Vec<&str>> = Vec::new();
    for line in win.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let starts_block = is_bullet(line)
            || NUMBERED_RE.is_match(trimmed)
            || TITLE_COLON_RE.is_match(trimmed);
        if starts_block || out.is_empty() {
            out.push(vec![trimmed]);
        } else if let Some(current) = out.last_mut() {
            current.push(trimmed);
        }
    }
    out
}

fn project_from_block(block: &[&str]) -> Option<Project> {
    let name = strip_bullet(block[0]).trim_end_matches(':').trim();
    if !(3..=100).contains(&name.len()) {
        return None;
    }

    let rest = block[1..].join(" ");
    let technologies = TECH_LIST_RE
        .captures(&rest)
        .or_else(|| TECH_LIST_RE.captures(block[0]))
        .map(|c| split_tech_list(&c[1]))
        .unwrap_or_default();
    let description: String = rest.chars().take(MAX_DESCRIPTION).collect();

    Some(Project {
        name: name.to_string(),
        description: description.trim().to_string(),
        technologies,
    })
}

fn split_tech_list(raw: &str) -> Vec<String> {
    raw.split([',', '|', '/', ';', '•'])
        .map(|t| t.trim().trim_end_matches('.').to_string())
        .filter(|t| !t.is_empty())
        .unique_by(|t| t.to_lowercase())
        .collect()
}
