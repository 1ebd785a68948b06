//! Certification extraction: vendor and credential pattern rules over the
//! whole document.

use std::sync::LazyLock;

use regex::Regex;

const MAX_ENTRIES: usize = 8;

static CERT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Cloud vendors
        r"(?i)\b(?:aws|amazon)\s+certified(?:\s+[A-Za-z][A-Za-z+-]*){0,4}",
        r"(?i)\b(?:microsoft|azure)\s+certified(?:\s+[A-Za-z][A-Za-z+-]*){0,4}",
        r"(?i)\bgoogle\s+(?:cloud\s+)?certified(?:\s+[A-Za-z][A-Za-z+-]*){0,4}",
        // Named credentials
        r"(?i)\b(?:pmp|prince2|csm|psm|cissp|ceh|ccna|ccnp|itil|cfa|cpa|comptia\s+(?:a\+|security\+|network\+))\b(?:\s+certif(?:ied|ication|icate))?",
        // Generic "certified X"
        r"(?i)\bcertified\s+[A-Za-z][A-Za-z -]{2,50}",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn extract(text: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for re in CERT_RES.iter() {
        for m in re.find_iter(text) {
            let cand = m
                .as_str()
                .trim()
                .trim_end_matches([',', '.', ';', ' '])
                .to_string();
            let lower = cand.to_lowercase();
            // Rules run in priority order, so a generic "certified X" hit that
            // is part of an earlier vendor match is dropped here.
            if out.iter().any(|e| e.to_lowercase().contains(&lower)) {
                continue;
            }
            out.push(cand);
            if out.len() == MAX_ENTRIES {
                return out;
            }
        }
    }
    out
}
