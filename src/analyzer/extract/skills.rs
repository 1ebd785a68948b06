//! Vocabulary-membership skill classification.
//!
//! A term is "found" when it appears as a case-insensitive substring of the
//! document. No stemming, no context sensitivity; see the note on curated
//! vocabularies in [`crate::knowledge`].

use crate::analyzer::types::SkillSet;
use crate::knowledge::{SOFT_SKILLS, SPOKEN_LANGUAGES, TECH_SKILLS};

pub fn extract(text: &str) -> SkillSet {
    let lower = text.to_lowercase();
    SkillSet {
        technical: members(&lower, TECH_SKILLS),
        soft: members(&lower, SOFT_SKILLS),
        languages: members(&lower, SPOKEN_LANGUAGES),
    }
}

fn members(lower_text: &str, vocab: &[&str]) -> Vec<String> {
    vocab
        .iter()
        .filter(|term| lower_text.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_membership() {
        let s = extract("Built services in RUST and Python; strong Communication. Fluent in Spanish.");
        assert!(s.technical.contains(&"rust".to_string()));
        assert!(s.technical.contains(&"python".to_string()));
        assert!(s.soft.contains(&"communication".to_string()));
        assert!(s.languages.contains(&"spanish".to_string()));
    }

    #[test]
    fn substring_overlap_is_expected() {
        // Known heuristic limitation: "java" matches inside "javascript".
        let s = extract("Wrote a lot of JavaScript.");
        assert!(s.technical.contains(&"javascript".to_string()));
        assert!(s.technical.contains(&"java".to_string()));
    }

    #[test]
    fn empty_text_yields_empty_sets() {
        let s = extract("");
        assert!(s.technical.is_empty());
        assert!(s.soft.is_empty());
        assert!(s.languages.is_empty());
    }

    #[test]
    fn output_order_is_vocabulary_order() {
        let s = extract("python after javascript mention");
        let js = s.technical.iter().position(|t| t == "javascript").unwrap();
        let py = s.technical.iter().position(|t| t == "python").unwrap();
        assert!(py < js, "vocabulary order, not document order");
    }
}
