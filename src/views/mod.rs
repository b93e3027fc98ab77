//! Derived views over the entry list.
//!
//! Everything here is a pure function of a borrowed entry slice: filtering,
//! per-day grouping, month calendars, and mood statistics. Nothing is
//! persisted and the input is never mutated, so every view can be recomputed
//! from [`crate::journal::EntryStore::all`] at any time.

use crate::constants::DAY_KEY_FORMAT;
use crate::journal::{JournalEntry, Mood};
use chrono::{Datelike, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Entries whose mood matches `mood`, in their original order.
///
/// `None` returns every entry unchanged.
pub fn filter_by_mood(entries: &[JournalEntry], mood: Option<Mood>) -> Vec<JournalEntry> {
    match mood {
        None => entries.to_vec(),
        Some(mood) => entries
            .iter()
            .filter(|entry| entry.mood == mood)
            .cloned()
            .collect(),
    }
}

/// Calendar day of an entry in the given timezone.
pub fn entry_day<Tz: TimeZone>(entry: &JournalEntry, tz: &Tz) -> NaiveDate {
    entry.date.with_timezone(tz).date_naive()
}

/// Numeric display key for a day, e.g. `10/15/2026`.
pub fn date_key(day: NaiveDate) -> String {
    day.format(DAY_KEY_FORMAT).to_string()
}

/// Groups entries by calendar day in `tz`, discarding time of day.
///
/// Within a day, entries keep the order they have in `entries`.
pub fn group_by_calendar_day<Tz: TimeZone>(
    entries: &[JournalEntry],
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<JournalEntry>> {
    let mut groups: BTreeMap<NaiveDate, Vec<JournalEntry>> = BTreeMap::new();
    for entry in entries {
        groups
            .entry(entry_day(entry, tz))
            .or_default()
            .push(entry.clone());
    }
    groups
}

/// One day of a month calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDayCell {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub entries: Vec<JournalEntry>,
    pub has_entry: bool,
    /// Mood of the first entry of the day in grouping order.
    pub representative_mood: Option<Mood>,
}

/// Number of days in the given month of the proleptic Gregorian calendar.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// One cell per day of the month containing `reference`, day 1 first.
///
/// The representative mood is that of the first entry recorded for the day in
/// sequence order. Entries are always prepended, so with several entries on one
/// day this is the most recently created one.
pub fn build_calendar_month<Tz: TimeZone>(
    entries: &[JournalEntry],
    reference: NaiveDate,
    tz: &Tz,
) -> Vec<CalendarDayCell> {
    let mut groups = group_by_calendar_day(entries, tz);
    let (year, month) = (reference.year(), reference.month());

    (1..=days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .map(|date| {
            let day_entries = groups.remove(&date).unwrap_or_default();
            CalendarDayCell {
                date,
                day_of_month: date.day(),
                has_entry: !day_entries.is_empty(),
                representative_mood: day_entries.first().map(|entry| entry.mood),
                entries: day_entries,
            }
        })
        .collect()
}

/// Per-mood entry counts, one slot per defined mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodStatistics {
    counts: [usize; Mood::COUNT],
}

impl MoodStatistics {
    pub fn count(&self, mood: Mood) -> usize {
        self.counts[mood.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `round(count / total * 100)`, or 0 when there are no entries.
    pub fn percentage(&self, mood: Mood) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.count(mood) as f64 / total as f64 * 100.0).round() as u32
    }

    /// `(mood, count)` pairs in definition order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        Mood::ALL.into_iter().map(move |mood| (mood, self.count(mood)))
    }

    /// The mood with the highest count; the earliest-defined mood wins ties.
    /// `None` when there are no entries.
    pub fn most_common(&self) -> Option<Mood> {
        if self.total() == 0 {
            return None;
        }
        let mut best = Mood::ALL[0];
        for mood in Mood::ALL.into_iter().skip(1) {
            // Strictly greater: an equal later count never replaces an earlier mood.
            if self.count(mood) > self.count(best) {
                best = mood;
            }
        }
        Some(best)
    }
}

/// Counts entries per mood.
pub fn compute_mood_statistics(entries: &[JournalEntry]) -> MoodStatistics {
    let mut stats = MoodStatistics::default();
    for entry in entries {
        stats.counts[entry.mood.index()] += 1;
    }
    stats
}

/// Most frequent mood, ties broken by definition order; `None` for no entries.
pub fn most_common_mood(entries: &[JournalEntry]) -> Option<Mood> {
    compute_mood_statistics(entries).most_common()
}

/// Totals shown alongside the statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalSummary {
    pub total: usize,
    /// Day of the oldest entry (last in the newest-first list).
    pub first_entry: Option<NaiveDate>,
    /// Day of the newest entry (first in the list).
    pub latest_entry: Option<NaiveDate>,
    pub most_common: Option<Mood>,
}

pub fn summarize<Tz: TimeZone>(entries: &[JournalEntry], tz: &Tz) -> JournalSummary {
    JournalSummary {
        total: entries.len(),
        first_entry: entries.last().map(|entry| entry_day(entry, tz)),
        latest_entry: entries.first().map(|entry| entry_day(entry, tz)),
        most_common: most_common_mood(entries),
    }
}
