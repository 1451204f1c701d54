//! Deadline parsing.
//!
//! Deadlines are calendar dates. Besides ISO dates, the CLI accepts a few
//! natural forms so `todolist add "Pay rent" -d friday` does what it says.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use super::validate::validate_deadline;
use crate::error::TodoError;

static RELATIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "in 3 days", "in 1 week", "in 2 months"
    Regex::new(r"^in\s+(\d{1,4})\s+(day|week|month)s?$")
        .unwrap_or_else(|e| panic!("Invalid relative date regex: {e}"))
});

static US_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // 12/15 or 12/15/2025 or 12/15/25
    Regex::new(r"^(\d{1,2})/(\d{1,2})(?:/(\d{2}|\d{4}))?$")
        .unwrap_or_else(|e| panic!("Invalid US date regex: {e}"))
});

/// Parse a deadline relative to the local date.
///
/// # Errors
///
/// Returns `TodoError::Validation` if the input is not a recognizable date.
pub fn parse_deadline(input: &str) -> Result<NaiveDate, TodoError> {
    let deadline = parse_deadline_from(input, Local::now().date_naive()).ok_or_else(|| {
        TodoError::Validation(format!(
            "Could not parse deadline '{}' (try YYYY-MM-DD, today, tomorrow, friday, in 3 days)",
            input.trim()
        ))
    })?;
    validate_deadline(deadline)?;
    Ok(deadline)
}

/// Parse a deadline relative to `today`.
///
/// Supports:
/// - `today`, `tomorrow`, `yesterday`
/// - `monday`, `fri`, `next tuesday`, `next week`
/// - `in 3 days`, `in 2 weeks`, `in 1 month`
/// - `dec 15`, `december 15` (rolls into next year once passed)
/// - `2025-12-15`
/// - `12/15`, `12/15/2025`, `12/15/25`
#[must_use]
pub fn parse_deadline_from(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "" => return None,
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        "yesterday" => return Some(today - Duration::days(1)),
        "next week" => return Some(next_weekday(today, Weekday::Mon, false)),
        _ => {},
    }

    if let Ok(date) = NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
        return Some(date);
    }

    parse_relative_offset(&input, today)
        .or_else(|| parse_weekday(&input, today))
        .or_else(|| parse_month_day(&input, today))
        .or_else(|| parse_us_date(&input, today))
}

fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = RELATIVE_PATTERN.captures(input)?;
    let amount: i64 = caps.get(1)?.as_str().parse().ok()?;

    let days = match caps.get(2)?.as_str() {
        "day" => amount,
        "week" => amount * 7,
        _ => return today.checked_add_months(chrono::Months::new(u32::try_from(amount).ok()?)),
    };

    today.checked_add_signed(Duration::days(days))
}

fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (is_next, day_str) = input
        .strip_prefix("next ")
        .map_or((false, input), |rest| (true, rest));

    let target = match day_str {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    Some(next_weekday(today, target, is_next))
}

/// Next occurrence of `target` after `today`. `skip_week` pushes it a week out.
fn next_weekday(today: NaiveDate, target: Weekday, skip_week: bool) -> NaiveDate {
    let mut days_until = (i64::from(target.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;

    if days_until == 0 {
        days_until = 7;
    }
    if skip_week && days_until < 7 {
        days_until += 7;
    }

    today + Duration::days(days_until)
}

fn parse_month_day(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let mut parts = input.split_whitespace();
    let month = parse_month_name(parts.next()?)?;
    let day: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    roll_forward(today, month, day)
}

fn parse_month_name(input: &str) -> Option<u32> {
    match input {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

fn parse_us_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let caps = US_DATE_PATTERN.captures(input)?;
    let month: u32 = caps.get(1)?.as_str().parse().ok()?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;

    match caps.get(3) {
        Some(year) => {
            let year: i32 = year.as_str().parse().ok()?;
            let year = if year < 100 { 2000 + year } else { year };
            NaiveDate::from_ymd_opt(year, month, day)
        },
        None => roll_forward(today, month, day),
    }
}

/// This year's `month/day`, or next year's if it has already passed.
fn roll_forward(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day);
    match this_year {
        Some(date) if date >= today => Some(date),
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A Wednesday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_words() {
        assert_eq!(parse_deadline_from("today", today()), Some(today()));
        assert_eq!(parse_deadline_from("Tomorrow", today()), Some(date(2025, 3, 13)));
        assert_eq!(parse_deadline_from("yesterday", today()), Some(date(2025, 3, 11)));
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(
            parse_deadline_from("2025-01-01", today()),
            Some(date(2025, 1, 1))
        );
        assert_eq!(parse_deadline_from("2025-02-30", today()), None);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(parse_deadline_from("in 3 days", today()), Some(date(2025, 3, 15)));
        assert_eq!(parse_deadline_from("in 1 day", today()), Some(date(2025, 3, 13)));
        assert_eq!(parse_deadline_from("in 2 weeks", today()), Some(date(2025, 3, 26)));
        assert_eq!(parse_deadline_from("in 1 month", today()), Some(date(2025, 4, 12)));
        assert_eq!(parse_deadline_from("in 3 fortnights", today()), None);
    }

    #[test]
    fn test_weekdays() {
        assert_eq!(parse_deadline_from("friday", today()), Some(date(2025, 3, 14)));
        // Same weekday means next week.
        assert_eq!(parse_deadline_from("wed", today()), Some(date(2025, 3, 19)));
        assert_eq!(parse_deadline_from("next friday", today()), Some(date(2025, 3, 21)));
        assert_eq!(parse_deadline_from("next week", today()), Some(date(2025, 3, 17)));
    }

    #[test]
    fn test_month_day_rolls_forward() {
        assert_eq!(parse_deadline_from("dec 15", today()), Some(date(2025, 12, 15)));
        assert_eq!(parse_deadline_from("January 2", today()), Some(date(2026, 1, 2)));
        assert_eq!(parse_deadline_from("mar 12", today()), Some(today()));
    }

    #[test]
    fn test_us_dates() {
        assert_eq!(parse_deadline_from("12/15/2025", today()), Some(date(2025, 12, 15)));
        assert_eq!(parse_deadline_from("1/5/26", today()), Some(date(2026, 1, 5)));
        assert_eq!(parse_deadline_from("2/1", today()), Some(date(2026, 2, 1)));
        assert_eq!(parse_deadline_from("13/45", today()), None);
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_deadline_from("", today()), None);
        assert_eq!(parse_deadline_from("someday", today()), None);
        assert!(matches!(
            parse_deadline("not a date"),
            Err(TodoError::Validation(_))
        ));
    }

    #[test]
    fn test_out_of_range_years_are_rejected() {
        for input in ["+10000-01-01", "0999-12-31"] {
            let err = parse_deadline(input).unwrap_err();
            assert!(matches!(err, TodoError::Validation(_)), "{input}: {err:?}");
            assert!(err.to_string().contains("out of range"));
        }
        assert!(parse_deadline("9999-12-31").is_ok());
    }
}
