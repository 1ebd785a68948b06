//! Quantified-achievement detection over sentence-like fragments.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

const MAX_ENTRIES: usize = 8;
const MIN_LEN: usize = 30;
const MAX_LEN: usize = 200;

static CLAIM_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Percentage figures
        r"(?i)\d+(?:\.\d+)?\s*(?:%|percent)",
        // Currency figures
        r"(?i)[$€£₹]\s*\d[\d,]*(?:\.\d+)?\s*(?:k|m|b|million|billion)?\b",
        // Multipliers: "3x", "2.5x"
        r"(?i)\b\d+(?:\.\d+)?x\b",
        // Action verb adjacent to a number
        r"(?i)\b(?:increased|decreased|reduced|improved|grew|saved|generated|boosted|cut|delivered|achieved|exceeded|doubled|tripled)\b[^.!?\n]{0,40}\d",
        // Counts of people/users/projects
        r"(?i)\b\d[\d,]*\+?\s*(?:people|users|customers|clients|projects|teams?|members|engineers|downloads|requests|transactions)\b",
        // Superlatives
        r"(?i)(?:#\s*1\b|\btop\s+\d+\b|\bfirst\s+place\b|\baward(?:ed)?\b)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn extract(text: &str) -> Vec<String> {
    text.split(['.', '!', '?', '\n'])
        .map(|frag| frag.trim().trim_start_matches(['-', '•', '*', ' ']).trim())
        .filter(|frag| (MIN_LEN..=MAX_LEN).contains(&frag.len()))
        .filter(|frag| CLAIM_RES.iter().any(|re| re.is_match(frag)))
        .map(|frag| frag.to_string())
        .unique_by(|frag| frag.to_lowercase())
        .take(MAX_ENTRIES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_claim() {
        let a = extract("Increased API throughput by 40% across core services.");
        assert_eq!(a.len(), 1);
        assert!(a[0].contains("40%"));
    }

    #[test]
    fn currency_multiplier_and_count_claims() {
        let text = "Generated $1,200,000 in new annual revenue for the team!\n\
                    Made the nightly batch pipeline run 3x faster than before\n\
                    Supported a community of 40,000 users across two products";
        let a = extract(text);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn short_fragments_are_ignored() {
        // Under 30 characters, even with a figure.
        assert!(extract("Grew revenue 40%.").is_empty());
    }

    #[test]
    fn unquantified_prose_is_ignored() {
        assert!(extract("Responsible for maintaining internal tooling and documentation.").is_empty());
    }

    #[test]
    fn dedup_and_cap() {
        let repeated = "Reduced infrastructure spend by 30% year over year. ".repeat(4);
        assert_eq!(extract(&repeated).len(), 1);

        let many: String = (0..12)
            .map(|i| format!("Improved the build pipeline speed by {}0 percent overall.\n", i + 1))
            .collect();
        assert_eq!(extract(&many).len(), MAX_ENTRIES);
    }
}
