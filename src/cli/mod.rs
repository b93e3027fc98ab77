//! Command-line interface for the mood journal.
//!
//! Argument definitions live here; [`render`] turns reports and derived views
//! into plain text.

pub mod render;

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DEFAULT_NEWS_CATEGORY, LOG_FORMAT_JSON, LOG_FORMAT_TEXT,
    MONTH_ARG_FORMAT,
};
use crate::journal::Mood;
use crate::ops::ThemeChange;
use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level arguments
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(long, global = true, default_value = LOG_FORMAT_TEXT, value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Record how you feel right now
    Add(AddArgs),
    /// List entries, newest first
    List {
        /// Only show entries with this mood
        #[clap(long, value_parser = parse_mood)]
        mood: Option<Mood>,
    },
    /// Show a month calendar with one mood per day
    Calendar {
        /// Month to show (format: YYYY-MM); defaults to the current month
        #[clap(long, value_parser = parse_month)]
        month: Option<NaiveDate>,
    },
    /// Show mood statistics
    Stats,
    /// Export entries as CSV
    Export {
        /// Output file; defaults to mood-journal.csv in the current directory
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Only export entries with this mood
        #[clap(long, value_parser = parse_mood)]
        mood: Option<Mood>,
    },
    /// Show or change dark mode
    Theme(ThemeArgs),
    /// Browse news headlines
    #[clap(subcommand)]
    News(NewsCommand),
}

#[derive(Args, Debug, PartialEq)]
pub struct AddArgs {
    /// Mood identifier: happy, excited, calm, sad or angry
    #[clap(short, long, default_value = "")]
    pub mood: String,
    /// Free-text note
    #[clap(short, long, default_value = "")]
    pub note: String,
    /// Skip the weather lookup
    #[clap(long)]
    pub no_weather: bool,
}

#[derive(Args, Debug, PartialEq)]
#[clap(group(ArgGroup::new("mode").args(&["dark", "light", "toggle"])))]
pub struct ThemeArgs {
    /// Switch to dark mode
    #[clap(long)]
    pub dark: bool,
    /// Switch to light mode
    #[clap(long)]
    pub light: bool,
    /// Flip the current mode
    #[clap(long)]
    pub toggle: bool,
}

impl ThemeArgs {
    pub fn change(&self) -> ThemeChange {
        if self.dark {
            ThemeChange::Dark
        } else if self.light {
            ThemeChange::Light
        } else if self.toggle {
            ThemeChange::Toggle
        } else {
            ThemeChange::Show
        }
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum NewsCommand {
    /// Show top headlines for a category
    Headlines {
        /// Category, e.g. general, business, sports
        #[clap(short, long, default_value = DEFAULT_NEWS_CATEGORY)]
        category: String,
        /// Page number, starting at 1
        #[clap(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Only show headlines whose title contains this text
        #[clap(short, long)]
        search: Option<String>,
        /// Add or remove the headline at this position from favorites
        #[clap(long, value_name = "N")]
        toggle_favorite: Option<usize>,
    },
    /// List favorite headlines
    Favorites,
}

fn parse_mood(value: &str) -> Result<Mood, String> {
    Mood::from_id(value).ok_or_else(|| {
        let ids: Vec<&str> = Mood::ALL.iter().map(|mood| mood.id()).collect();
        format!("unknown mood '{}', expected one of: {}", value, ids.join(", "))
    })
}

fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value), &format!("{}-%d", MONTH_ARG_FORMAT))
        .map_err(|e| format!("invalid month '{}' (expected YYYY-MM): {}", value, e))
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        <CliArgs as Parser>::parse()
    }
}
