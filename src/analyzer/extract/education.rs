//! Education extraction. The heading window is split into blocks at
//! degree-phrase anchor lines, and institution/year are only ever read from the
//! same block as their degree, so the fields of one entry always come from one
//! contiguous chunk of text.

use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::types::EducationEntry;
use crate::analyzer::window::{self, section_window};

const MAX_ENTRIES: usize = 5;

static DEGREE_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    // Priority order: doctorate down to diploma. Each captures the trailing
    // field-of-study phrase when one follows "of"/"in".
    let field = r"(?:\s+of\s+[A-Za-z]+)?(?:\s+(?:of|in)\s+([A-Za-z][A-Za-z &]{1,49}))?";
    [
        ("Doctorate", r"(?i)\b(?:ph\.?\s?d\.?|doctorate|doctor\s+of\s+philosophy)\b"),
        ("Master's", r"(?i)\b(?:master(?:'?s)?|m\.sc?\.?|msc|m\.tech|mtech|m\.eng|mba|m\.a\.?)\b"),
        ("Bachelor's", r"(?i)\b(?:bachelor(?:'?s)?|b\.sc?\.?|bsc|b\.tech|btech|b\.e\.?|b\.a\.?|bca|bba)\b"),
        ("Associate's", r"(?i)\b(?:associate(?:'?s)?\s+degree|associate\s+of|a\.a\.?|a\.s\.?)\b"),
        ("Diploma", r"(?i)\b(?:diploma|certificate\s+course)\b"),
    ]
    .into_iter()
    .map(|(label, base)| (label, Regex::new(&format!("{base}{field}")).unwrap()))
    .collect()
});

static INSTITUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b((?:[A-Z][A-Za-z.&'-]*\s+){0,4}(?:University|Institute|College|School|Academy)(?:\s+of\s+[A-Z][A-Za-z]*(?:\s+[A-Z][A-Za-z]*){0,2})?)",
    )
    .unwrap()
});
static YEAR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b((?:19|20)\d{2}\s*[-–—]\s*(?:(?:19|20)\d{2}|[Pp]resent))\b").unwrap()
});
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").unwrap());
static GPA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:gpa|cgpa)\s*[:=]?\s*(\d\.\d{1,2}(?:\s*/\s*\d{1,2}(?:\.\d)?)?)").unwrap()
});

pub fn extract(text: &str) -> Vec<EducationEntry> {
    let win = section_window(
        text,
        window::EDUCATION_HEADINGS,
        &[
            window::EXPERIENCE_HEADINGS,
            window::SKILLS_HEADINGS,
            window::PROJECT_HEADINGS,
            window::CERTIFICATION_HEADINGS,
        ],
    );

    let mut entries = Vec::new();
    for block in degree_blocks(win) {
        let joined = block.join("\n");
        let Some((label, field)) = match_degree(&joined) else {
            continue;
        };
        let institution = INSTITUTION_RE
            .captures(&joined)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();
        let year = YEAR_RANGE_RE
            .captures(&joined)
            .or_else(|| YEAR_RE.captures(&joined))
            .map(|c| c[1].to_string())
            .unwrap_or_default();
        let degree = match field {
            Some(f) => format!("{label} in {f}"),
            None => label.to_string(),
        };
        entries.push(EducationEntry {
            degree,
            institution,
            year,
            gpa: None,
        });
        if entries.len() == MAX_ENTRIES {
            break;
        }
    }

    // GPA is a single global match, attached to the first entry only.
    if let (Some(first), Some(g)) = (entries.first_mut(), gpa(text)) {
        first.gpa = Some(g);
    }

    entries
}

/// The first GPA-like figure anywhere in the document, whitespace-normalized.
pub fn gpa(text: &str) -> Option<String> {
    GPA_RE
        .captures(text)
        .map(|c| c[1].split_whitespace().collect::<String>())
}

/// Split a window into blocks, each starting at a line that contains a degree
/// phrase. Lines before the first anchor belong to no entry.
fn degree_blocks(win: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in win.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if DEGREE_RES.iter().any(|(_, re)| re.is_match(trimmed)) {
            blocks.push(vec![trimmed]);
        } else if let Some(current) = blocks.last_mut() {
            current.push(trimmed);
        }
    }
    blocks
}

fn match_degree(block: &str) -> Option<(&'static str, Option<String>)> {
    for (label, re) in DEGREE_RES.iter() {
        if let Some(caps) = re.captures(block) {
            let field = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .filter(|f| !f.is_empty());
            return Some((label, field));
        }
    }
    None
}
