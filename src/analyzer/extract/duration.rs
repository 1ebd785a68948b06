//! Total-experience estimation.
//!
//! A direct "N years of experience" claim wins. Otherwise every month-year
//! range in the document is summed, with each span floored at six months.
//! Open-ended ranges anchor to the latest explicit date found anywhere in the
//! text instead of the wall clock, so the result is a pure function of the
//! input.

use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::extract::dates::{self, MonthYear};

static DIRECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*years?(?:\s+of)?\s+experience").unwrap()
});

pub fn estimate(text: &str) -> u32 {
    if let Some(caps) = DIRECT_RE.captures(text) {
        if let Ok(years) = caps[1].parse::<u32>() {
            if years > 0 {
                return years;
            }
        }
    }

    let ranges = dates::ranges(text);
    let anchor: Option<MonthYear> = ranges
        .iter()
        .flat_map(|r| [Some(r.start), r.end])
        .flatten()
        .max();

    let total_months: i64 = ranges
        .iter()
        .map(|r| {
            let end = r
                .end
                .or(anchor)
                .unwrap_or(r.start)
                .max(r.start);
            dates::months_between(r.start, end).max(6)
        })
        .sum();

    (total_months as f64 / 12.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_phrase_wins() {
        let text = "Over 7 years of experience building services. Jan 2023 - Feb 2023.";
        assert_eq!(estimate(text), 7);
    }

    #[test]
    fn summed_ranges() {
        // 24 months + 12 months = 36 months = 3 years.
        let text = "Jan 2018 - Jan 2020 at one place, then Feb 2020 - Feb 2021 elsewhere";
        assert_eq!(estimate(text), 3);
    }

    #[test]
    fn present_anchors_to_latest_explicit_date() {
        // Open range Jan 2020 → anchored at Dec 2022 (35 months) plus the
        // closed 2022 range's 11 months, floored spans: 35 + 11 = 46 ≈ 4 years.
        let text = "Jan 2020 - Present and also Jan 2022 - Dec 2022";
        assert_eq!(estimate(text), 4);
    }

    #[test]
    fn lone_open_range_floors_to_six_months() {
        // No explicit end anywhere: span collapses to the 6-month floor,
        // which rounds to one year.
        assert_eq!(estimate("Mar 2021 - Present"), 1);
    }

    #[test]
    fn zero_without_signal() {
        assert_eq!(estimate("no dates, no claims"), 0);
    }
}
