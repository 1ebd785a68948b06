//! Month-year range parsing shared by the experience extractor and the
//! duration estimator.

use std::sync::LazyLock;

use regex::Regex;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{2,4})
        \s*(?:-|–|—|to|until)\s*
        (?:
            (present|current|now|date)
            |
            (jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{2,4})
        )",
    )
    .unwrap()
});

const MONTH_ABBREVS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthYear {
    pub year: i32,
    pub month: u32,
}

/// One matched date range. `end` is `None` for open-ended ("present") ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start: MonthYear,
    pub end: Option<MonthYear>,
    pub raw: String,
}

/// All month-year ranges found in `text`, in document order.
pub fn ranges(text: &str) -> Vec<DateRange> {
    RANGE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let start = MonthYear {
                year: expand_year(caps[2].parse().ok()?),
                month: month_index(&caps[1])?,
            };
            let end = match (caps.get(3), caps.get(4), caps.get(5)) {
                (Some(_), _, _) => None,
                (None, Some(m), Some(y)) => Some(MonthYear {
                    year: expand_year(y.as_str().parse().ok()?),
                    month: month_index(m.as_str())?,
                }),
                _ => return None,
            };
            Some(DateRange {
                start,
                end,
                raw: caps[0].trim().to_string(),
            })
        })
        .collect()
}

/// Whole months from `a` to `b` (negative when `b` precedes `a`).
pub fn months_between(a: MonthYear, b: MonthYear) -> i64 {
    i64::from(b.year - a.year) * 12 + i64::from(b.month as i32 - a.month as i32)
}

/// Two-digit years are century-disambiguated: values above 50 map to the
/// 1900s, the rest to the 2000s.
fn expand_year(y: i32) -> i32 {
    if y < 100 {
        if y > 50 {
            1900 + y
        } else {
            2000 + y
        }
    } else {
        y
    }
}

fn month_index(abbrev: &str) -> Option<u32> {
    let lower = abbrev.to_lowercase();
    MONTH_ABBREVS
        .iter()
        .position(|m| lower.starts_with(m))
        .map(|i| i as u32 + 1)
}
