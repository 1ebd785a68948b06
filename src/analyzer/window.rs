//! Heading-window segmentation shared by every section-scoped extractor.
//!
//! A window is the text between a recognized section heading and the next
//! recognized heading (or end of document). One utility here, reused by all
//! extractors, rather than a per-extractor copy of the lookahead.

pub const EDUCATION_HEADINGS: &[&str] = &["education", "academic background", "qualifications"];
pub const EXPERIENCE_HEADINGS: &[&str] =
    &["experience", "employment", "work history", "career history"];
pub const SKILLS_HEADINGS: &[&str] = &["skills", "technologies", "technical proficiencies"];
pub const PROJECT_HEADINGS: &[&str] = &["projects", "portfolio"];
pub const CERTIFICATION_HEADINGS: &[&str] = &["certifications", "certificates", "licenses"];
pub const SUMMARY_HEADINGS: &[&str] = &["summary", "objective", "profile", "about me"];

/// True when a line reads as a standalone section heading for one of `names`.
/// Headings are short, few words, digit-free, possibly decorated with markdown
/// or bullet chrome and a trailing colon.
pub fn is_heading(line: &str, names: &[&str]) -> bool {
    let cleaned = line
        .trim()
        .trim_start_matches(['#', '*', '-', '•', '=', ' '])
        .trim_end_matches([':', '=', '-', ' ']);
    if cleaned.is_empty()
        || cleaned.len() > 40
        || cleaned.split_whitespace().count() > 3
        || cleaned.chars().any(|c| c.is_ascii_digit())
    {
        return false;
    }
    let lower = cleaned.to_lowercase();
    names.iter().any(|n| lower.contains(n))
}

/// The text after the first heading matching `start` and before the next line
/// matching any of the `stops` groups. `None` when no start heading exists.
pub fn try_section_window<'a>(
    text: &'a str,
    start: &[&str],
    stops: &[&[&str]],
) -> Option<&'a str> {
    let mut offset = 0;
    let mut begin: Option<usize> = None;
    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let content = line.trim_end_matches(['\n', '\r']);
        match begin {
            None => {
                if is_heading(content, start) {
                    begin = Some(offset);
                }
            }
            Some(b) => {
                if stops.iter().any(|s| is_heading(content, s)) {
                    return Some(&text[b..line_start]);
                }
            }
        }
    }
    begin.map(|b| &text[b..])
}

/// Like [`try_section_window`] but falls back to the whole document when no
/// start heading is found.
pub fn section_window<'a>(text: &'a str, start: &[&str], stops: &[&[&str]]) -> &'a str {
    try_section_window(text, start, stops).unwrap_or(text)
}

/// Bullet-point line test shared by the extractors and the formatting counter.
pub fn is_bullet(line: &str) -> bool {
    let t = line.trim_start();
    t.starts_with(['-', '•', '*', '▪', '‣', '·'])
        && t.len() > 1
}

/// Strip bullet/number chrome from the front of a line.
pub fn strip_bullet(line: &str) -> &str {
    let t = line.trim();
    let t = t.trim_start_matches(['-', '•', '*', '▪', '‣', '·', ' ']);
    // Numbered list markers: "1. " / "2) "
    let mut chars = t.char_indices().peekable();
    let mut digits_end = 0;
    while let Some((i, c)) = chars.peek().copied() {
        if c.is_ascii_digit() {
            digits_end = i + c.len_utf8();
            chars.next();
        } else {
            break;
        }
    }
    if digits_end > 0 {
        let rest = &t[digits_end..];
        if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return stripped.trim_start();
        }
    }
    t
}
