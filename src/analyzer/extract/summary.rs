//! Professional-summary extraction.

use crate::analyzer::window::{self, try_section_window};

const MAX_LEN: usize = 400;

/// The text under a summary/objective heading, whitespace-collapsed and capped
/// at 400 characters. `None` when the document has no such heading.
pub fn extract(text: &str) -> Option<String> {
    let win = try_section_window(
        text,
        window::SUMMARY_HEADINGS,
        &[
            window::EDUCATION_HEADINGS,
            window::EXPERIENCE_HEADINGS,
            window::SKILLS_HEADINGS,
            window::PROJECT_HEADINGS,
            window::CERTIFICATION_HEADINGS,
        ],
    )?;
    let collapsed = win.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }
    Some(collapsed.chars().take(MAX_LEN).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_under_heading() {
        let text = "Summary\nBackend engineer focused on data\npipelines and reliability.\n\nExperience\nrest";
        let s = extract(text).unwrap();
        assert_eq!(s, "Backend engineer focused on data pipelines and reliability.");
    }

    #[test]
    fn none_without_heading() {
        assert_eq!(extract("John Smith\njohn@x.com"), None);
    }

    #[test]
    fn capped_at_400_chars() {
        let body = "word ".repeat(200);
        let text = format!("Professional Summary\n{body}\n");
        let s = extract(&text).unwrap();
        assert_eq!(s.chars().count(), MAX_LEN);
    }

    #[test]
    fn empty_window_is_none() {
        assert_eq!(extract("Summary\n\nExperience\njob"), None);
    }
}
