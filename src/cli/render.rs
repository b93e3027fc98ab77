//! Plain-text rendering of entries, calendars, statistics and headlines.

use crate::journal::{JournalEntry, Mood};
use crate::news::Headline;
use crate::ops::HeadlineView;
use crate::session::Preferences;
use crate::views::{date_key, CalendarDayCell, JournalSummary, MoodStatistics};
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

const NO_ENTRIES: &str = "No entries yet.";
const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const BAR_WIDTH: u32 = 20;

fn mood_tag(mood: Mood) -> String {
    format!("{} {}", mood.emoji(), mood.label())
}

/// One block per entry, in the order given.
pub fn entries(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", NO_ENTRIES);
    }

    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{}  {}", entry.formatted_date, mood_tag(entry.mood));
        if !entry.note.is_empty() {
            let _ = writeln!(out, "    {}", entry.note);
        }
        if let Some(weather) = &entry.weather {
            let _ = writeln!(
                out,
                "    {}°C, {} ({}) in {}",
                weather.temperature, weather.condition, weather.description, weather.location_name
            );
        }
    }
    out
}

/// Sunday-first month grid. Each day shows the emoji of its representative mood.
pub fn calendar(cells: &[CalendarDayCell], month: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", month.format("%B %Y"));
    let header: Vec<String> = WEEKDAY_HEADER.iter().map(|day| format!("{:<4}", day)).collect();
    let _ = writeln!(out, "{}", header.concat().trim_end());

    let offset = cells
        .first()
        .map(|cell| cell.date.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0);
    let mut line = "    ".repeat(offset);
    for cell in cells {
        let marker = cell.representative_mood.map(|m| m.emoji()).unwrap_or("  ");
        let _ = write!(line, "{:>2}{}", cell.day_of_month, marker);
        if cell.date.weekday().num_days_from_sunday() == 6 {
            let _ = writeln!(out, "{}", line.trim_end());
            line.clear();
        }
    }
    if !line.trim().is_empty() {
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let days_with_entries = cells.iter().filter(|cell| cell.has_entry).count();
    let _ = writeln!(out, "\n{} of {} days recorded", days_with_entries, cells.len());
    out
}

/// Per-mood bars followed by the journal summary.
pub fn stats(stats: &MoodStatistics, summary: &JournalSummary) -> String {
    if stats.total() == 0 {
        return format!("{}\n", NO_ENTRIES);
    }

    let mut out = String::new();
    for (mood, count) in stats.iter() {
        let percentage = stats.percentage(mood);
        let filled = (percentage * BAR_WIDTH / 100) as usize;
        let _ = writeln!(
            out,
            "{} {:<8} {:<width$} {:>3} ({}%)",
            mood.emoji(),
            mood.label(),
            "#".repeat(filled),
            count,
            percentage,
            width = BAR_WIDTH as usize
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total entries: {}", summary.total);
    if let Some(mood) = summary.most_common {
        let _ = writeln!(out, "Most common mood: {}", mood_tag(mood));
    }
    if let Some(day) = summary.first_entry {
        let _ = writeln!(out, "First entry: {}", date_key(day));
    }
    if let Some(day) = summary.latest_entry {
        let _ = writeln!(out, "Latest entry: {}", date_key(day));
    }
    out
}

fn headline_block(out: &mut String, position: Option<usize>, headline: &Headline, favorite: bool) {
    let star = if favorite { "*" } else { " " };
    match position {
        Some(n) => {
            let _ = writeln!(out, "{:>2}. {} {}", n, star, headline.title);
        }
        None => {
            let _ = writeln!(out, "{} {}", star, headline.title);
        }
    }
    if !headline.description.is_empty() {
        let _ = writeln!(out, "      {}", headline.description);
    }
    let _ = writeln!(
        out,
        "      {} | {} | {}",
        headline.source_name,
        headline.display_author(),
        headline.url
    );
}

/// A page of headlines with numbered positions and a page footer.
pub fn headlines(view: &HeadlineView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out);

    if view.articles.is_empty() {
        let _ = writeln!(out, "No headlines found.");
    }
    for (i, (headline, favorite)) in view.articles.iter().enumerate() {
        headline_block(&mut out, Some(i + 1), headline, *favorite);
    }

    let pages = &view.pagination;
    let _ = writeln!(out);
    let _ = write!(out, "Page {} of {}", pages.page, pages.page_count().max(1));
    if pages.has_previous() {
        let _ = write!(out, "  [previous: --page {}]", pages.previous_page().page);
    }
    if pages.has_next() {
        let _ = write!(out, "  [next: --page {}]", pages.next_page().page);
    }
    let _ = writeln!(out);

    if let Some((headline, now_favorite)) = &view.toggled {
        let verb = if *now_favorite { "Added to" } else { "Removed from" };
        let _ = writeln!(out, "{} favorites: {}", verb, headline.title);
    }
    out
}

pub fn favorites(items: &[Headline]) -> String {
    if items.is_empty() {
        return "No favorite headlines yet.\n".to_string();
    }
    let mut out = String::new();
    for headline in items {
        headline_block(&mut out, None, headline, true);
    }
    out
}

pub fn theme(preferences: &Preferences) -> String {
    format!(
        "Theme: {}\n",
        if preferences.dark_mode { "dark" } else { "light" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{create_entry, WeatherSnapshot};
    use crate::news::tests::headline;
    use crate::news::Pagination;
    use crate::views::{build_calendar_month, compute_mood_statistics, summarize};
    use crate::weather::ConditionCode;
    use chrono::{TimeZone, Utc};

    fn entry_on(day: u32, mood: &str, last_id: Option<i64>) -> JournalEntry {
        let now = Utc.with_ymd_and_hms(2024, 2, day, 10, 0, 0).unwrap();
        create_entry(mood, "", None, &now, last_id).unwrap()
    }

    #[test]
    fn test_entries_empty() {
        assert_eq!(entries(&[]), "No entries yet.\n");
    }

    #[test]
    fn test_entries_show_note_and_weather() {
        let now = Utc.with_ymd_and_hms(2024, 2, 29, 8, 0, 0).unwrap();
        let weather = WeatherSnapshot {
            temperature: 3.5,
            condition: ConditionCode::Snow,
            description: "light snow".to_string(),
            location_name: "Oslo".to_string(),
        };
        let entry = create_entry("calm", "quiet", Some(weather), &now, None).unwrap();
        let text = entries(&[entry]);

        assert!(text.starts_with("Thursday, February 29, 2024  😌 Calm\n"));
        assert!(text.contains("    quiet\n"));
        assert!(text.contains("3.5°C, Snow (light snow) in Oslo"));
    }

    #[test]
    fn test_calendar_starts_on_weekday_of_first() {
        // February 2024 starts on a Thursday.
        let month = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let first = entry_on(1, "happy", None);
        let cells = build_calendar_month(&[first], month, &Utc);
        let text = calendar(&cells, month);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "February 2024");
        assert_eq!(lines[1], "Su  Mo  Tu  We  Th  Fr  Sa");
        assert_eq!(lines[2], format!("{} 1😊 2   3", "    ".repeat(4)));
        assert!(lines[3].starts_with(" 4   5"));
        assert!(text.ends_with("1 of 29 days recorded\n"));
    }

    #[test]
    fn test_stats_bars_and_summary() {
        let sad = entry_on(2, "sad", None);
        let happy = entry_on(3, "happy", Some(sad.id));
        let journal = vec![happy, sad];

        let text = stats(&compute_mood_statistics(&journal), &summarize(&journal, &Utc));

        assert!(text.contains("Happy    ##########"));
        assert!(text.contains("1 (50%)"));
        assert!(text.contains("0 (0%)"));
        assert!(text.contains("Total entries: 2"));
        assert!(text.contains("Most common mood: 😊 Happy"));
        assert!(text.contains("First entry: 2/2/2024"));
        assert!(text.contains("Latest entry: 2/3/2024"));
    }

    #[test]
    fn test_stats_empty() {
        let journal: Vec<JournalEntry> = Vec::new();
        let text = stats(&compute_mood_statistics(&journal), &summarize(&journal, &Utc));
        assert_eq!(text, "No entries yet.\n");
    }

    #[test]
    fn test_headlines_page_footer() {
        let view = HeadlineView {
            title: "Sports - NeighborGood News".to_string(),
            pagination: Pagination {
                page: 2,
                ..Pagination::new(8)
            }
            .with_total(30),
            articles: vec![(headline("Derby tonight", "https://d"), true)],
            toggled: None,
        };
        let text = headlines(&view);

        assert!(text.starts_with("Sports - NeighborGood News\n"));
        assert!(text.contains(" 1. * Derby tonight"));
        assert!(text.contains("Wire | Unknown | https://d"));
        assert!(text.contains("Page 2 of 4  [previous: --page 1]  [next: --page 3]"));
    }

    #[test]
    fn test_favorites_and_theme() {
        assert_eq!(favorites(&[]), "No favorite headlines yet.\n");
        assert!(favorites(&[headline("Saved", "https://s")]).contains("* Saved"));
        assert_eq!(theme(&Preferences { dark_mode: true }), "Theme: dark\n");
    }
}
