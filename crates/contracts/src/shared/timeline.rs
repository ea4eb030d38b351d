//! Challenge lifecycle derived from its start/end dates and the current time.
//!
//! A date-only value means midnight UTC of that day, so a challenge ending on
//! `2024-08-31` is completed from `2024-08-31T00:00:00.001Z` on.

use crate::enums::ChallengeStatus;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MS_PER_DAY: i64 = 86_400_000;

/// Midnight UTC of `date`
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Parses `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS` (read as UTC)
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(start_of_day(date));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.and_utc())
}

/// Date-derived status: `Upcoming` before start, `Completed` after end,
/// `Active` in between (both boundaries inclusive).
pub fn challenge_status(start: NaiveDate, end: NaiveDate, now: DateTime<Utc>) -> ChallengeStatus {
    if now < start_of_day(start) {
        ChallengeStatus::Upcoming
    } else if now > start_of_day(end) {
        ChallengeStatus::Completed
    } else {
        ChallengeStatus::Active
    }
}

/// Elapsed share of the challenge in percent, rounded half up and clamped to 0..=100.
///
/// A zero-length challenge is 100 once started and 0 before.
pub fn challenge_progress(start: NaiveDate, end: NaiveDate, now: DateTime<Utc>) -> u8 {
    let start_ms = start_of_day(start).timestamp_millis();
    let end_ms = start_of_day(end).timestamp_millis();
    let now_ms = now.timestamp_millis();

    if now_ms < start_ms {
        return 0;
    }
    if now_ms > end_ms || end_ms <= start_ms {
        return 100;
    }

    let elapsed = (now_ms - start_ms) as f64;
    let total = (end_ms - start_ms) as f64;
    let percent = (elapsed / total * 100.0 + 0.5).floor();
    percent.clamp(0.0, 100.0) as u8
}

/// Whole days left until `end`, rounded up; never negative.
pub fn days_remaining(end: NaiveDate, now: DateTime<Utc>) -> u32 {
    let diff_ms = start_of_day(end).timestamp_millis() - now.timestamp_millis();
    if diff_ms <= 0 {
        return 0;
    }
    let days = (diff_ms + MS_PER_DAY - 1) / MS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Snapshot of everything the challenge views derive from the dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeTimeline {
    pub status: ChallengeStatus,
    pub progress: u8,
    pub days_remaining: u32,
}

impl ChallengeTimeline {
    pub fn at(start: NaiveDate, end: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            status: challenge_status(start, end, now),
            progress: challenge_progress(start, end, now),
            days_remaining: days_remaining(end, now),
        }
    }
}

/// Challenge status as two independent inputs: the date-derived status and a
/// manual pause override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeState {
    natural: ChallengeStatus,
    paused: bool,
}

impl ChallengeState {
    /// `natural` must be a date-derived status; `Paused` is folded into the flag.
    pub fn new(natural: ChallengeStatus, paused: bool) -> Self {
        match natural {
            ChallengeStatus::Paused => Self {
                natural: ChallengeStatus::Active,
                paused: true,
            },
            other => Self {
                natural: other,
                paused,
            },
        }
    }

    pub fn natural(&self) -> ChallengeStatus {
        self.natural
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Status shown to the user: `Paused` while the override is set
    pub fn effective(&self) -> ChallengeStatus {
        if self.paused {
            ChallengeStatus::Paused
        } else {
            self.natural
        }
    }

    /// Replaces the date-derived input; the pause override is left alone.
    pub fn refresh(&mut self, natural: ChallengeStatus) {
        if natural != ChallengeStatus::Paused {
            self.natural = natural;
        }
    }

    /// Pauses an active challenge or resumes a paused one.
    /// Returns `false` (and changes nothing) for upcoming or completed challenges.
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.paused = false;
            true
        } else if self.natural == ChallengeStatus::Active {
            self.paused = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> DateTime<Utc> {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(t("2024-08-20").to_rfc3339(), "2024-08-20T00:00:00+00:00");
        assert_eq!(t("2024-08-20T10:30:00Z").to_rfc3339(), "2024-08-20T10:30:00+00:00");
        assert_eq!(t("2024-08-20T10:30:00").to_rfc3339(), "2024-08-20T10:30:00+00:00");
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_status_relations() {
        let (start, end) = (d("2024-08-01"), d("2024-08-31"));
        assert_eq!(challenge_status(start, end, t("2024-07-31")), ChallengeStatus::Upcoming);
        assert_eq!(challenge_status(start, end, t("2024-08-01")), ChallengeStatus::Active);
        assert_eq!(challenge_status(start, end, t("2024-08-20")), ChallengeStatus::Active);
        assert_eq!(challenge_status(start, end, t("2024-08-31")), ChallengeStatus::Active);
        assert_eq!(
            challenge_status(start, end, t("2024-08-31T00:00:01Z")),
            ChallengeStatus::Completed
        );
    }

    #[test]
    fn test_progress_examples() {
        let (start, end) = (d("2024-08-01"), d("2024-08-31"));
        assert_eq!(challenge_progress(start, end, t("2024-08-16")), 50);
        assert_eq!(challenge_progress(start, end, t("2024-08-20")), 63);
        assert_eq!(challenge_progress(start, end, t("2024-08-01")), 0);
        assert_eq!(challenge_progress(start, end, t("2024-08-31")), 100);
        assert_eq!(challenge_progress(start, end, t("2024-07-01")), 0);
        assert_eq!(challenge_progress(start, end, t("2024-12-01")), 100);
    }

    #[test]
    fn test_progress_zero_length_span() {
        let day = d("2024-08-10");
        assert_eq!(challenge_progress(day, day, t("2024-08-09")), 0);
        assert_eq!(challenge_progress(day, day, t("2024-08-10")), 100);
        assert_eq!(challenge_progress(day, day, t("2024-08-11")), 100);
    }

    #[test]
    fn test_days_remaining() {
        assert_eq!(days_remaining(d("2024-08-22"), t("2024-08-20")), 2);
        assert_eq!(days_remaining(d("2024-08-31"), t("2024-08-20")), 11);
        assert_eq!(days_remaining(d("2024-08-22"), t("2024-08-21T12:00:00Z")), 1);
        assert_eq!(days_remaining(d("2024-08-22"), t("2024-08-22")), 0);
        assert_eq!(days_remaining(d("2024-08-22"), t("2024-09-30")), 0);
    }

    #[test]
    fn test_timeline_end_to_end() {
        let timeline = ChallengeTimeline::at(d("2024-08-01"), d("2024-08-31"), t("2024-08-20"));
        assert_eq!(timeline.status, ChallengeStatus::Active);
        assert_eq!(timeline.days_remaining, 11);
        assert_eq!(timeline.progress, 63);
    }

    #[test]
    fn test_pause_override() {
        let mut state = ChallengeState::new(ChallengeStatus::Active, false);
        assert!(state.toggle_pause());
        assert_eq!(state.effective(), ChallengeStatus::Paused);

        // dates moving on does not clear the override
        state.refresh(ChallengeStatus::Completed);
        assert_eq!(state.effective(), ChallengeStatus::Paused);

        assert!(state.toggle_pause());
        assert_eq!(state.effective(), ChallengeStatus::Completed);
    }

    #[test]
    fn test_pause_ignored_when_not_active() {
        let mut upcoming = ChallengeState::new(ChallengeStatus::Upcoming, false);
        assert!(!upcoming.toggle_pause());
        assert_eq!(upcoming.effective(), ChallengeStatus::Upcoming);

        let seeded = ChallengeState::new(ChallengeStatus::Paused, false);
        assert!(seeded.is_paused());
        assert_eq!(seeded.natural(), ChallengeStatus::Active);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn progress_is_monotonic_in_now(
                span_days in 1i64..365,
                a in -400i64 * 24..800 * 24,
                b in -400i64 * 24..800 * 24,
            ) {
                let start = d("2024-01-01");
                let end = start + chrono::Duration::days(span_days);
                let base = start_of_day(start);
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                let p_lo = challenge_progress(start, end, base + chrono::Duration::hours(lo));
                let p_hi = challenge_progress(start, end, base + chrono::Duration::hours(hi));
                prop_assert!(p_lo <= p_hi);
                prop_assert!(p_hi <= 100);
            }

            #[test]
            fn days_remaining_never_negative_after_end(offset_hours in 0i64..10_000) {
                let end = d("2024-08-22");
                let now = start_of_day(end) + chrono::Duration::hours(offset_hours);
                prop_assert_eq!(days_remaining(end, now), 0);
            }
        }
    }
}
