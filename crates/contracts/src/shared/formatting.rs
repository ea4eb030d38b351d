//! Display formatting for numbers, dates and names (en-US conventions).

use crate::shared::timeline::parse_date;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_ ]+").expect("valid slug regex"));

static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" +").expect("valid spaces regex"));

/// Inserts `,` every three digits of the integer part
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    format!("{}{}", sign, result)
}

/// Formats a number with a thousands separator and up to three fraction digits.
///
/// ```
/// use contracts::shared::formatting::format_number;
/// assert_eq!(format_number(Some(2450.0)), "2,450");
/// assert_eq!(format_number(Some(1234.5678)), "1,234.568");
/// assert_eq!(format_number(None), "0");
/// ```
pub fn format_number(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return "0".to_string();
    };

    let formatted = format!("{:.3}", round_half_away(value, 3));
    let (integer_part, fraction) = formatted.split_once('.').unwrap_or((&formatted, ""));
    let fraction = fraction.trim_end_matches('0');

    let integer_part = if integer_part == "-0" && fraction.is_empty() {
        "0"
    } else {
        integer_part
    };

    if fraction.is_empty() {
        group_thousands(integer_part)
    } else {
        format!("{}.{}", group_thousands(integer_part), fraction)
    }
}

/// Rounds to `decimals` places with ties going away from zero, so `2.5` becomes `3`
/// rather than the `2` that `{:.0}` prints.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Fixed number of decimals followed by `%`
pub fn format_percentage(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}%", decimals, round_half_away(v, decimals)),
        None => "0%".to_string(),
    }
}

/// Shortens large numbers: `1500` -> `1.5K`, `2300000` -> `2.3M`
pub fn abbreviate_number(value: Option<f64>) -> String {
    const SUFFIXES: [&str; 4] = ["", "K", "M", "B"];

    let Some(mut number) = value else {
        return "0".to_string();
    };
    let mut index = 0;
    while number >= 1000.0 && index < SUFFIXES.len() - 1 {
        number /= 1000.0;
        index += 1;
    }

    let decimals = if index > 0 { 1 } else { 0 };
    format!("{:.*}{}", decimals, number, SUFFIXES[index])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `Aug 20, 2024`
    #[default]
    Short,
    /// `August 20, 2024`
    Long,
    /// `Aug 20`
    Relative,
}

impl DateStyle {
    fn pattern(&self) -> &'static str {
        match self {
            DateStyle::Short => "%b %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
            DateStyle::Relative => "%b %-d",
        }
    }
}

/// Formats a `YYYY-MM-DD` date or a timestamp.
///
/// Empty input gives `-`; input that does not parse is returned unchanged.
pub fn format_date(value: Option<&str>, style: DateStyle) -> String {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return "-".to_string();
    };

    match parse_date(value) {
        Some(dt) => dt.format(style.pattern()).to_string(),
        None => value.to_string(),
    }
}

/// Age of a timestamp relative to `now`: `Just now`, `5m ago`, `3h ago`,
/// `2d ago`, then the short date from a week on.
pub fn relative_time(value: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return "-".to_string();
    };
    let Some(then) = parse_date(value) else {
        return value.to_string();
    };

    let minutes = (now - then).num_milliseconds().div_euclid(60_000);
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = hours / 24;
    if days < 7 {
        return format!("{}d ago", days);
    }

    format_date(Some(value), DateStyle::Short)
}

/// First letter of each word, uppercased, at most two letters
pub fn generate_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();

    if initials.is_empty() {
        "??".to_string()
    } else {
        initials
    }
}

/// Cuts `text` to `max_len` characters and appends `...` when it was longer
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len).collect();
    format!("{}...", head)
}

/// `Mental Health & Sleep` -> `mental-health-sleep`
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD_RE.replace_all(&lowered, "");
    SPACES_RE.replace_all(&cleaned, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(2450.0)), "2,450");
        assert_eq!(format_number(Some(1234567.0)), "1,234,567");
        assert_eq!(format_number(Some(999.0)), "999");
        assert_eq!(format_number(Some(0.0)), "0");
        assert_eq!(format_number(Some(-12450.5)), "-12,450.5");
        assert_eq!(format_number(Some(7842.0)), "7,842");
        assert_eq!(format_number(Some(0.1 + 0.2)), "0.3");
        assert_eq!(format_number(None), "0");
    }

    #[test]
    fn test_format_number_rounds_half_away_from_zero() {
        assert_eq!(format_number(Some(1.0625)), "1.063");
        assert_eq!(format_number(Some(-1.0625)), "-1.063");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(Some(87.0), 0), "87%");
        assert_eq!(format_percentage(Some(66.666), 1), "66.7%");
        assert_eq!(format_percentage(None, 2), "0%");
    }

    #[test]
    fn test_format_percentage_rounds_half_away_from_zero() {
        assert_eq!(format_percentage(Some(2.5), 0), "3%");
        assert_eq!(format_percentage(Some(92.5), 0), "93%");
        assert_eq!(format_percentage(Some(0.125), 2), "0.13%");
        assert_eq!(format_percentage(Some(f64::from(89u32)), 0), "89%");
    }

    #[test]
    fn test_abbreviate_number() {
        assert_eq!(abbreviate_number(Some(950.0)), "950");
        assert_eq!(abbreviate_number(Some(1500.0)), "1.5K");
        assert_eq!(abbreviate_number(Some(2_300_000.0)), "2.3M");
        assert_eq!(abbreviate_number(Some(4_000_000_000_000.0)), "4000.0B");
        assert_eq!(abbreviate_number(None), "0");
    }

    #[test]
    fn test_format_date_styles() {
        assert_eq!(format_date(Some("2024-08-20"), DateStyle::Short), "Aug 20, 2024");
        assert_eq!(format_date(Some("2024-08-20"), DateStyle::Long), "August 20, 2024");
        assert_eq!(format_date(Some("2024-08-05"), DateStyle::Relative), "Aug 5");
        assert_eq!(
            format_date(Some("2024-08-20T10:30:00Z"), DateStyle::Short),
            "Aug 20, 2024"
        );
    }

    #[test]
    fn test_format_date_edge_cases() {
        assert_eq!(format_date(None, DateStyle::Short), "-");
        assert_eq!(format_date(Some(""), DateStyle::Long), "-");
        assert_eq!(format_date(Some("someday"), DateStyle::Short), "someday");
    }

    #[test]
    fn test_relative_time() {
        let now = at("2024-08-20T12:00:00Z");
        assert_eq!(relative_time(Some("2024-08-20T11:59:30Z"), now), "Just now");
        assert_eq!(relative_time(Some("2024-08-20T11:15:00Z"), now), "45m ago");
        assert_eq!(relative_time(Some("2024-08-20T10:30:00Z"), now), "1h ago");
        assert_eq!(relative_time(Some("2024-08-19T09:10:00Z"), now), "1d ago");
        assert_eq!(relative_time(Some("2024-08-10T09:10:00Z"), now), "Aug 10, 2024");
        assert_eq!(relative_time(Some("2024-08-21T09:10:00Z"), now), "Just now");
        assert_eq!(relative_time(None, now), "-");
    }

    #[test]
    fn test_generate_initials() {
        assert_eq!(generate_initials("John Smith"), "JS");
        assert_eq!(generate_initials("mary ann lee"), "MA");
        assert_eq!(generate_initials("Cher"), "C");
        assert_eq!(generate_initials("  "), "??");
        assert_eq!(generate_initials(""), "??");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Short", 10), "Short");
        assert_eq!(truncate_text("Exactly10!", 10), "Exactly10!");
        assert_eq!(truncate_text("Cross-functional champions", 5), "Cross...");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Mental Health"), "mental-health");
        assert_eq!(slugify("Q1 2024:  Best Team!"), "q1-2024-best-team");
    }
}
