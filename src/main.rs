//! Typeahead CLI
//!
//! Hosts the search-as-you-type widget over the demo user directory, either
//! interactively in the terminal or as a one-shot lookup.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use typeahead::demo::{User, UserDirectory};
use typeahead::{
    highlight, lookup, AutocompleteConfig, ListRow, SearchController, Segment, WidgetSettings,
};

/// Typeahead - search-as-you-type input widget
///
/// Debounces keystrokes, runs the lookup, discards stale results and
/// highlights matches in every option.
#[derive(Parser)]
#[command(name = "typeahead")]
#[command(author = "Typeahead Contributors")]
#[command(version)]
#[command(about = "Search-as-you-type input widget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive widget over the demo user directory
    Demo {
        /// Simulated lookup latency in milliseconds
        #[arg(long, default_value = "300")]
        latency_ms: u64,

        /// Make every N-th lookup fail
        #[arg(long)]
        fail_every: Option<usize>,

        /// JSON file with widget settings (labels, messages, after_select)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run a single lookup through the widget and print the options
    Search {
        /// Search term (use -- before the term if it starts with -)
        #[arg(allow_hyphen_values = true)]
        term: String,

        /// Simulated lookup latency in milliseconds
        #[arg(long, default_value = "0")]
        latency_ms: u64,

        /// Print JSON instead of styled text
        #[arg(long)]
        json: bool,
    },

    /// Show how a label is split into highlighted segments
    Highlight {
        /// Label text
        text: String,

        /// Text to highlight (case-insensitive, literal)
        #[arg(allow_hyphen_values = true)]
        highlight: String,

        /// Print JSON instead of styled text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let _log_guard = typeahead::logging::init();
    tracing::info!("typeahead starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo {
            latency_ms,
            fail_every,
            config,
        } => cmd_demo(latency_ms, fail_every, config),

        Commands::Search {
            term,
            latency_ms,
            json,
        } => cmd_search(&term, latency_ms, json),

        Commands::Highlight {
            text,
            highlight,
            json,
        } => cmd_highlight(&text, &highlight, json),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn user_config(directory: UserDirectory) -> AutocompleteConfig<User> {
    let directory = Arc::new(directory);
    AutocompleteConfig::new(
        lookup::blocking(move |term: &str| directory.search(term)),
        |user: &User| user.name.clone(),
    )
}

/// Interactive widget
fn cmd_demo(
    latency_ms: u64,
    fail_every: Option<usize>,
    config: Option<PathBuf>,
) -> typeahead::Result<()> {
    let settings = match config {
        Some(path) => WidgetSettings::load(path)?,
        None => WidgetSettings::default()
            .with_label("Search users")
            .with_placeholder("Start typing a name..."),
    };

    let selected: Arc<Mutex<Option<User>>> = Arc::default();
    let sink = selected.clone();

    let directory = UserDirectory::new(Duration::from_millis(latency_ms), fail_every);
    let config = user_config(directory)
        .with_settings(settings)
        .on_select(move |user: &User| *sink.lock() = Some(user.clone()));

    typeahead::tui::run(SearchController::new(config))?;

    match selected.lock().take() {
        Some(user) => println!(
            "{} {} <{}>",
            style("✓").green().bold(),
            style(&user.name).cyan(),
            user.email
        ),
        None => println!("{} Nothing selected", style("→").cyan().bold()),
    }
    Ok(())
}

/// One-shot lookup through the controller
fn cmd_search(term: &str, latency_ms: u64, json: bool) -> typeahead::Result<()> {
    let directory = UserDirectory::new(Duration::from_millis(latency_ms), None);
    let mut search = SearchController::new(user_config(directory));

    let start = Instant::now();
    search.focus();
    search.input_changed(term, start);

    let spinner = if json {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Searching for '{}'...", term));
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    };

    search.tick(Instant::now());
    while search.is_pending() || search.state().is_loading {
        std::thread::sleep(Duration::from_millis(10));
        search.tick(Instant::now());
    }
    spinner.finish_and_clear();

    let elapsed = start.elapsed();
    let view = search.view();

    if json {
        let options: Vec<_> = view
            .rows
            .iter()
            .filter_map(|row| match row {
                ListRow::Option { label, .. } => Some(serde_json::json!({
                    "label": label,
                    "segments": row.segments(view.highlight),
                })),
                _ => None,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "term": term,
                "phase": search.phase().to_string(),
                "options": options,
                "error": view.error,
                "elapsed_seconds": elapsed.as_secs_f64(),
            }))?
        );
        return Ok(());
    }

    if let Some(message) = view.error {
        println!("{} {}", style("✗").red().bold(), style(message).red());
        return Ok(());
    }

    println!(
        "Found {} options in {}:",
        style(search.state().options.len()).green(),
        style(HumanDuration(elapsed)).cyan()
    );
    println!();
    for (i, row) in view.rows.iter().enumerate() {
        match row {
            ListRow::Option { .. } => println!(
                "  {} {}",
                style(format!("{:3}.", i + 1)).dim(),
                styled_segments(&row.segments(view.highlight))
            ),
            ListRow::Loading(text) | ListRow::NoOptions(text) => {
                println!("  {}", style(text).dim().italic())
            }
        }
    }
    Ok(())
}

fn cmd_highlight(text: &str, highlight: &str, json: bool) -> typeahead::Result<()> {
    let segments = highlight::render(text, Some(highlight));
    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        println!("{}", styled_segments(&segments));
    }
    Ok(())
}

fn styled_segments(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.matched {
                style(s.value).yellow().bold().to_string()
            } else {
                s.value.to_string()
            }
        })
        .collect()
}
