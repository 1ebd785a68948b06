//! Contact field extraction: ordered pattern rules, first match of each wins.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{3}\)\s?|\d{3}[\s.-])\d{3}[\s.-]?\d{4}\b|\+\d{1,3}[\s-]?\d{5}[\s-]?\d{5}\b")
        .unwrap()
});
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)linkedin\.com/in/([A-Za-z0-9_-]+)").unwrap());
static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)github\.com/([A-Za-z0-9_-]+)").unwrap());
static WEBSITE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bhttps?://[^\s|,;)]+|\bwww\.[^\s|,;)]+").unwrap());
static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+(?: [A-Z][A-Za-z'.-]*){1,3}$").unwrap());
static LOCATION_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*(?:location|address|based in)\s*[:|\-]\s*(.+)$").unwrap()
});
static CITY_STATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?: [A-Z][a-z]+)?,\s*[A-Z]{2}(?:\s+\d{5})?)\b").unwrap()
});
static CITY_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]+,\s*[A-Z][a-z]+)\b").unwrap());

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin_handle: Option<String>,
    pub github_handle: Option<String>,
    pub website_url: Option<String>,
}

pub fn extract(text: &str) -> Contact {
    Contact {
        name: extract_name(text),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().trim().to_string()),
        location: extract_location(text),
        linkedin_handle: LINKEDIN_RE.captures(text).map(|c| c[1].to_string()),
        github_handle: GITHUB_RE.captures(text).map(|c| c[1].to_string()),
        website_url: extract_website(text),
    }
}

fn extract_name(text: &str) -> Option<String> {
    // Whole-line pattern over the top of the document first.
    for line in text.lines().take(10) {
        let trimmed = line.trim();
        if NAME_LINE_RE.is_match(trimmed) && !is_document_label(trimmed) {
            return Some(trimmed.to_string());
        }
    }
    // Fallback: first 5 non-empty lines, 2-4 all-letter words.
    for line in text.lines().filter(|l| !l.trim().is_empty()).take(5) {
        let trimmed = line.trim();
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        if (2..=4).contains(&words.len())
            && words.iter().all(|w| w.chars().all(|c| c.is_alphabetic()))
            && !is_document_label(trimmed)
        {
            return Some(trimmed.to_string());
        }
    }
    None
}

fn is_document_label(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("resume") || lower.contains("curriculum") || lower.contains("vitae")
}

fn extract_location(text: &str) -> Option<String> {
    let candidates = [
        LOCATION_LABEL_RE.captures(text).map(|c| c[1].to_string()),
        CITY_STATE_RE.captures(text).map(|c| c[1].to_string()),
        CITY_WORD_RE.captures(text).map(|c| c[1].to_string()),
    ];
    candidates
        .into_iter()
        .flatten()
        .map(|c| c.trim().to_string())
        .find(|c| c.len() > 3)
}

fn extract_website(text: &str) -> Option<String> {
    WEBSITE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', '/']).to_string())
        .find(|u| {
            let lower = u.to_lowercase();
            !lower.contains("linkedin.com") && !lower.contains("github.com")
        })
}
