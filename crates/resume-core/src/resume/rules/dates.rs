//! Date extraction for resume entries.

use chrono::NaiveDate;
use regex::Captures;

use crate::models::resume::DateSpan;

use super::patterns::{MONTH_YEAR_RANGE, NUMERIC_MONTH_YEAR_RANGE, YEAR_RANGE};
use super::{ExtractionMatch, FieldExtractor};

/// Date and date-range extractor.
///
/// Recognizes, in priority order: month-name + year ("Jan 2021",
/// "September 2019 - Present"), numeric month/year ("03/2021 - 06/2022") and
/// bare year ranges ("2019 - 2021"). Overlapping lower-priority matches are
/// discarded.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<DateSpan>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        for caps in MONTH_YEAR_RANGE.captures_iter(text) {
            let start = month_date(&caps[2], month_from_name(&caps[1]));
            let end = match (caps.get(3), caps.get(4)) {
                (Some(month), Some(year)) => month_date(year.as_str(), month_from_name(month.as_str())),
                _ => None,
            };
            push_match(&mut results, &caps, start, end, caps.get(5).is_some());
        }

        for caps in NUMERIC_MONTH_YEAR_RANGE.captures_iter(text) {
            let start = month_date(&caps[2], caps[1].parse().unwrap_or(0));
            let end = match (caps.get(3), caps.get(4)) {
                (Some(month), Some(year)) => {
                    month_date(year.as_str(), month.as_str().parse().unwrap_or(0))
                }
                _ => None,
            };
            push_match(&mut results, &caps, start, end, caps.get(5).is_some());
        }

        for caps in YEAR_RANGE.captures_iter(text) {
            let start = month_date(&caps[1], 1);
            let end = caps.get(2).and_then(|year| month_date(year.as_str(), 1));
            push_match(&mut results, &caps, start, end, caps.get(3).is_some());
        }

        results.sort_by_key(|m| m.position.0);
        results
    }
}

fn push_match(
    results: &mut Vec<ExtractionMatch<DateSpan>>,
    caps: &Captures<'_>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    current: bool,
) {
    let Some(start) = start else {
        return;
    };
    let Some(full_match) = caps.get(0) else {
        return;
    };

    let overlaps = results
        .iter()
        .any(|r| full_match.start() < r.position.1 && r.position.0 < full_match.end());
    if overlaps {
        return;
    }

    results.push(
        ExtractionMatch::new(DateSpan { start, end, current }, full_match.as_str().trim())
            .with_position(full_match.start(), full_match.end()),
    );
}

/// Find the first date or date range in `text`.
pub fn extract_date(text: &str) -> Option<ExtractionMatch<DateSpan>> {
    DateExtractor::new().extract(text)
}

/// Check whether `text` contains a recognizable date.
pub fn contains_date(text: &str) -> bool {
    extract_date(text).is_some()
}

fn month_date(year: &str, month: u32) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn month_from_name(name: &str) -> u32 {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_month_year() {
        let result = extract_date("Jan 2021").unwrap();
        assert_eq!(result.source, "Jan 2021");
        assert_eq!(result.value.start, ymd(2021, 1));
        assert_eq!(result.value.end, None);
        assert!(!result.value.current);
    }

    #[test]
    fn test_month_year_range_to_present() {
        let result = extract_date("Acme Corp | Sept. 2019 – Present").unwrap();
        assert_eq!(result.source, "Sept. 2019 – Present");
        assert_eq!(result.value.start, ymd(2019, 9));
        assert!(result.value.current);
    }

    #[test]
    fn test_month_year_closed_range() {
        let result = extract_date("June 2018 - August 2020").unwrap();
        assert_eq!(result.value.start, ymd(2018, 6));
        assert_eq!(result.value.end, Some(ymd(2020, 8)));
    }

    #[test]
    fn test_numeric_range() {
        let result = extract_date("03/2021 - 06/2022").unwrap();
        assert_eq!(result.value.start, ymd(2021, 3));
        assert_eq!(result.value.end, Some(ymd(2022, 6)));
    }

    #[test]
    fn test_year_range() {
        let result = extract_date("2019 - 2021").unwrap();
        assert_eq!(result.source, "2019 - 2021");
        assert_eq!(result.value.start, ymd(2019, 1));
        assert_eq!(result.value.end, Some(ymd(2021, 1)));
    }

    #[test]
    fn test_month_year_wins_over_overlapping_year_range() {
        let all = DateExtractor::new().extract_all("Jan 2019 - 2021");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].source, "Jan 2019");
    }

    #[test]
    fn test_no_date() {
        assert!(extract_date("Acme Corp").is_none());
        assert!(!contains_date("2020"));
        assert!(!contains_date("Marketing 2020"));
    }
}
