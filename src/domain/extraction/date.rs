//! Date extraction from free text.
//!
//! Rules run in a fixed order and the first rule whose pattern matches
//! decides the outcome, even when it then fails to build a valid date:
//!
//! 1. relative offsets ("in 3 days", "in a week")
//! 2. month name + day ("march 5", "Oct 12th"), current year
//! 3. "today" / "tomorrow"
//! 4. weekday name, resolved to its next occurrence (never today)
//!
//! Matching is case-insensitive.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static IN_DAYS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bin\s+(?:(\d+)\s+days?|(?:a|one|1)\s+week)\b").expect("valid relative date regex")
});

static MONTH_DAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\s+(\d{1,2})(?:st|nd|rd|th)?\b",
    )
    .expect("valid month-day regex")
});

static TODAY_TOMORROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(today|tomorrow)\b").expect("valid today regex"));

static WEEKDAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(sunday|monday|tuesday|wednesday|thursday|friday|saturday)\b")
        .expect("valid weekday regex")
});

/// Which rule produced a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateKind {
    Relative,
    Absolute,
    Today,
    Tomorrow,
    Weekday,
}

/// A resolved calendar date plus the phrase shown back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDate {
    #[serde(rename = "type")]
    pub kind: DateKind,
    /// Serialized as ISO-8601 (`YYYY-MM-DD`).
    pub date: NaiveDate,
    pub display_text: String,
}

impl ExtractedDate {
    /// A date for `today`, used where an intent defaults unscheduled work to now.
    pub fn today(today: NaiveDate) -> Self {
        Self {
            kind: DateKind::Today,
            date: today,
            display_text: "today".to_string(),
        }
    }

    /// ISO-8601 date string.
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Extracts the first date mentioned in `text`, relative to `today`.
///
/// `None` is a normal outcome; most intents treat it as "unscheduled".
pub fn extract_date_from_message(text: &str, today: NaiveDate) -> Option<ExtractedDate> {
    if let Some(caps) = IN_DAYS.captures(text) {
        let days = match caps.get(1) {
            Some(n) => n.as_str().parse::<i64>().ok()?,
            None => 7,
        };
        let date = today.checked_add_signed(Duration::try_days(days)?)?;
        let display_text = if caps.get(1).is_some() {
            format!("in {} days", days)
        } else {
            "in a week".to_string()
        };
        return Some(ExtractedDate {
            kind: DateKind::Relative,
            date,
            display_text,
        });
    }

    if let Some(caps) = MONTH_DAY.captures(text) {
        let month = month_number(&caps.get(1)?.as_str().to_lowercase())?;
        let day = caps.get(2)?.as_str().parse::<u32>().ok()?;
        let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
        return Some(ExtractedDate {
            kind: DateKind::Absolute,
            display_text: date.format("%B %-d").to_string(),
            date,
        });
    }

    if let Some(caps) = TODAY_TOMORROW.captures(text) {
        return match caps.get(1)?.as_str().to_lowercase().as_str() {
            "today" => Some(ExtractedDate::today(today)),
            _ => Some(ExtractedDate {
                kind: DateKind::Tomorrow,
                date: today.succ_opt()?,
                display_text: "tomorrow".to_string(),
            }),
        };
    }

    if let Some(caps) = WEEKDAY.captures(text) {
        let target = weekday_from_name(&caps.get(1)?.as_str().to_lowercase())?;
        let date = next_weekday(today, target);
        return Some(ExtractedDate {
            kind: DateKind::Weekday,
            display_text: date.format("%A").to_string(),
            date,
        });
    }

    None
}

/// Next occurrence of `target` strictly after `today`.
pub fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let current = today.weekday().num_days_from_sunday() as i64;
    let wanted = target.num_days_from_sunday() as i64;
    let mut diff = wanted - current;
    if diff <= 0 {
        diff += 7;
    }
    today + Duration::days(diff)
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.get(..3)? {
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
        _ => return None,
    };
    Some(month)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    let day = match name {
        "sunday" => Weekday::Sun,
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        _ => return None,
    };
    Some(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-10-14 is a Wednesday.
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    #[test]
    fn weekday_before_today_lands_next_week() {
        let d = extract_date_from_message("schedule leg day for tuesday", wednesday()).unwrap();
        assert_eq!(d.kind, DateKind::Weekday);
        assert_eq!(d.date - wednesday(), Duration::days(6));
        assert_eq!(d.display_text, "Tuesday");
    }

    #[test]
    fn same_weekday_advances_a_full_week() {
        let d = extract_date_from_message("wednesday works", wednesday()).unwrap();
        assert_eq!(d.date - wednesday(), Duration::days(7));
    }

    #[test]
    fn later_weekday_this_week() {
        let d = extract_date_from_message("friday", wednesday()).unwrap();
        assert_eq!(d.date - wednesday(), Duration::days(2));
    }

    #[test]
    fn relative_offsets() {
        let d = extract_date_from_message("remind me in 3 days", wednesday()).unwrap();
        assert_eq!(d.kind, DateKind::Relative);
        assert_eq!(d.iso(), "2026-10-17");
        assert_eq!(d.display_text, "in 3 days");

        let w = extract_date_from_message("in a week", wednesday()).unwrap();
        assert_eq!(w.iso(), "2026-10-21");
    }

    #[test]
    fn month_names_full_and_abbreviated() {
        let d = extract_date_from_message("leg day on March 5th", wednesday()).unwrap();
        assert_eq!(d.kind, DateKind::Absolute);
        assert_eq!(d.iso(), "2026-03-05");
        assert_eq!(d.display_text, "March 5");

        let a = extract_date_from_message("nov 2", wednesday()).unwrap();
        assert_eq!(a.iso(), "2026-11-02");
    }

    #[test]
    fn impossible_calendar_date_is_none() {
        assert_eq!(extract_date_from_message("feb 30 tomorrow", wednesday()), None);
    }

    #[test]
    fn relative_beats_named_words() {
        let d = extract_date_from_message("tomorrow or in 2 days", wednesday()).unwrap();
        assert_eq!(d.kind, DateKind::Relative);
    }

    #[test]
    fn today_and_tomorrow() {
        assert_eq!(
            extract_date_from_message("today", wednesday()).unwrap().date,
            wednesday()
        );
        let t = extract_date_from_message("lift tomorrow", wednesday()).unwrap();
        assert_eq!(t.kind, DateKind::Tomorrow);
        assert_eq!(t.iso(), "2026-10-15");
    }

    #[test]
    fn no_date_is_none() {
        assert_eq!(extract_date_from_message("push day", wednesday()), None);
        assert_eq!(extract_date_from_message("", wednesday()), None);
    }

    #[test]
    fn serializes_with_type_tag_and_iso_date() {
        let d = ExtractedDate::today(wednesday());
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["type"], "today");
        assert_eq!(json["date"], "2026-10-14");
    }
}
