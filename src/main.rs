/*!
# Mood Journal

Command-line front end for the mood journal. This file wires configuration,
logging and the persisted store together and dispatches to the operations in
the library.

## Usage

```
mood-journal [OPTIONS] <COMMAND>

Commands:
  add       Record how you feel right now
  list      List entries, newest first
  calendar  Show a month calendar with one mood per day
  stats     Show mood statistics
  export    Export entries as CSV
  theme     Show or change dark mode
  news      Browse news headlines

Options:
  -v, --verbose                  Print verbose output
      --log-format <LOG_FORMAT>  Log output format [default: text] [possible values: text, json]
  -h, --help                     Print help
  -V, --version                  Print version
```

## Configuration

The application reads its settings from environment variables:
- `MOOD_JOURNAL_DIR`: where entries and preferences are stored (defaults to "~/.mood-journal")
- `MOOD_JOURNAL_LATITUDE` / `MOOD_JOURNAL_LONGITUDE`: location for weather lookups
- `OPENWEATHER_API_KEY`, `GNEWS_API_KEY`: provider API keys
*/

use chrono::Local;
use mood_journal::cli::{render, AddArgs, CliArgs, Command, NewsCommand};
use mood_journal::config::Config;
use mood_journal::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use mood_journal::errors::AppResult;
use mood_journal::journal::EntryStore;
use mood_journal::news::{Favorites, GNewsClient};
use mood_journal::ops::{self, HeadlineQuery};
use mood_journal::session::{AppState, Preferences};
use mood_journal::storage::FileStore;
use mood_journal::views::{build_calendar_month, compute_mood_statistics, filter_by_mood, summarize};
use mood_journal::weather::{OpenWeatherClient, PendingWeather};
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` with `--verbose`.
/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: bool, log_format: &str) {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format == LOG_FORMAT_JSON {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoLocal::rfc_3339())
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_timer(ChronoLocal::rfc_3339())
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose, &args.log_format);

    let correlation_id = uuid::Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> AppResult<ExitCode> {
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let mut store = FileStore::open(&config.data_dir)?;

    match args.command {
        Command::Add(add) => return add_command(&config, store, add),
        Command::List { mood } => {
            let entries = EntryStore::load(&mut store);
            let state = AppState::default().set_filter(mood);
            print!("{}", render::entries(&state.visible_entries(entries.all())));
        }
        Command::Calendar { month } => {
            let entries = EntryStore::load(&mut store);
            let reference = month.unwrap_or_else(|| Local::now().date_naive());
            let cells = build_calendar_month(entries.all(), reference, &Local);
            print!("{}", render::calendar(&cells, reference));
        }
        Command::Stats => {
            let entries = EntryStore::load(&mut store);
            let stats = compute_mood_statistics(entries.all());
            let summary = summarize(entries.all(), &Local);
            print!("{}", render::stats(&stats, &summary));
        }
        Command::Export { output, mood } => {
            let entries = EntryStore::load(&mut store);
            let default_dir = std::env::current_dir()?;
            let count = filter_by_mood(entries.all(), mood).len();
            let path = ops::export_entries(entries.all(), mood, output.as_deref(), &default_dir)?;
            println!("Exported {} entries to {}", count, path.display());
        }
        Command::Theme(theme) => {
            let preferences = ops::apply_theme(&mut store, theme.change())?;
            print!("{}", render::theme(&preferences));
        }
        Command::News(NewsCommand::Headlines {
            category,
            page,
            search,
            toggle_favorite,
        }) => {
            let client = GNewsClient::new(&config.news_api_url, &config.news_api_key)
                .with_region(&config.news_country, &config.news_lang)
                .with_page_size(config.news_page_size);
            let query = HeadlineQuery {
                category,
                page,
                page_size: config.news_page_size,
                search,
                toggle_favorite,
            };
            let view = ops::browse_headlines(&client, &mut store, &query)?;
            print!("{}", render::headlines(&view));
        }
        Command::News(NewsCommand::Favorites) => {
            let favorites = Favorites::load(&store);
            print!("{}", render::favorites(favorites.items()));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Starts the weather lookup, then saves the entry once it finishes or
/// `config.weather_wait` runs out, whichever comes first.
fn add_command(config: &Config, store: FileStore, add: AddArgs) -> AppResult<ExitCode> {
    let weather = if add.no_weather {
        None
    } else {
        let client = OpenWeatherClient::new(&config.weather_api_url, &config.weather_api_key);
        Some(PendingWeather::spawn(client, config.location))
    };

    let preferences = Preferences::load(&store);
    let mut entries = EntryStore::load(store);
    let state = AppState::new(preferences)
        .select_mood(add.mood)
        .with_note(add.note);

    let report = ops::add_entry(state, &mut entries, weather, config.weather_wait, &Local::now())?;

    if let Some(advisory) = &report.advisory {
        eprintln!("Warning: {}", advisory);
    }

    match &report.saved {
        Some(entry) => {
            if let Some(notification) = &report.state.notification {
                println!("{}", notification);
            }
            print!("{}", render::entries(std::slice::from_ref(entry)));
            info!("Journal now holds {} entries", entries.len());
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let message = report.state.error.unwrap_or_default();
            eprintln!("Error: {}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}
