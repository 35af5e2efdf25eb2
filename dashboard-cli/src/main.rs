//! Dashboard CLI
//!
//! Browse a JSON row set through the dashboard's table and pager.
//!
//! ## Usage
//!
//! ```bash
//! dashboard-cli users data/users.json --sort amount --desc
//! dashboard-cli predictions data/predictions.json --search lakers
//! dashboard-cli generic rows.json --per-page 25 --interactive
//! ```

mod command;
mod config;
mod error;
mod paths;
mod session;
mod views;

use std::fs::{self, File};
use std::io;
use std::panic::{self, Location};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser};
use dashboard_lib::column::panic_message;
use dashboard_lib::filter::MatchMode;
use dashboard_lib::model::parse_rows;
use dashboard_lib::sort::{SortDirection, SortState};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::command::parse_filter;
use crate::config::ViewConfig;
use crate::error::CliError;
use crate::session::Session;
use crate::views::Preset;

#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(about = "Browse dashboard tables from JSON files", long_about = None)]
#[command(version)]
struct Cli {
    /// Table layout
    #[arg(value_enum)]
    preset: Preset,

    #[command(flatten)]
    view: ViewArgs,

    /// Path to a JSON config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct ViewArgs {
    /// JSON file holding an array of rows (or `{ "data": [...] }`)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Page to open on
    #[arg(long, value_name = "N")]
    page: Option<usize>,

    /// Rows per page (overrides the config file)
    #[arg(long, value_name = "N")]
    per_page: Option<usize>,

    /// Sort by this accessor
    #[arg(long, value_name = "KEY")]
    sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Free-text search over the preset's search fields
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Match the search query fuzzily
    #[arg(long)]
    fuzzy: bool,

    /// Exact-match filter, repeatable
    #[arg(long, value_name = "FIELD=VALUE")]
    filter: Vec<String>,

    /// Let the table slice pages itself instead of the caller
    #[arg(long)]
    internal_paging: bool,

    /// Read commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Disable colours
    #[arg(long)]
    no_color: bool,

    /// Target width in terminal cells (overrides the config file)
    #[arg(long, value_name = "COLS")]
    width: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    match init_logging(cli.verbose) {
        Ok(true) => install_panic_hook(),
        Ok(false) => {}
        Err(e) => eprintln!("Warning: {}", e),
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Returns whether a file logger was installed.
fn init_logging(verbose: bool) -> Result<bool, CliError> {
    let Some(log_path) = paths::log_file() else {
        return Ok(false);
    };
    paths::rotate_logs();

    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;
    }
    let log_file = File::create(&log_path).map_err(|source| io_error(&log_path, source))?;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(true)
}

/// Send panic reports to the log file instead of stderr.
///
/// The default hook writes to stderr even for panics that a cell formatter
/// catches.
fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        log::error!("{}", describe_panic(&panic_message(info.payload()), info.location()));
    }));
}

fn describe_panic(message: &str, location: Option<&Location<'_>>) -> String {
    match location {
        Some(location) => format!(
            "panicked at {}:{}: {}",
            location.file(),
            location.line(),
            message
        ),
        None => format!("panicked: {}", message),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let args = cli.view;

    let mut config = ViewConfig::load(cli.config.as_deref())?;
    if let Some(per_page) = args.per_page {
        config = config.with_page_size(per_page);
    }
    if let Some(width) = args.width {
        config = config.with_width(width);
    }
    if args.no_color {
        config = config.with_colored(false);
    }

    let text = fs::read_to_string(&args.file).map_err(|source| io_error(&args.file, source))?;
    let rows = parse_rows(&text)?;
    log::info!("loaded {} rows from {}", rows.len(), args.file.display());

    let columns = cli.preset.columns(&rows);
    let search_fields = cli.preset.search_fields(&rows);
    let mut session = Session::new(columns, rows, search_fields, &config, args.internal_paging)?;

    let listing = session.listing_mut();
    if args.fuzzy {
        listing.set_match_mode(MatchMode::Fuzzy);
    }
    for filter in &args.filter {
        let (field, value) = parse_filter(filter)?;
        listing.set_exact_filter(field, value);
    }
    if let Some(query) = args.search {
        listing.set_query(query);
    }
    if let Some(key) = args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        listing.set_sort(SortState::by(key, direction));
    }
    if let Some(page) = args.page {
        if !listing.go_to(page) && page != listing.pagination().current_page() {
            log::warn!(
                "page {} out of range (1-{})",
                page,
                listing.pagination().total_pages()
            );
        }
    }

    if args.interactive {
        let stdin = io::stdin();
        session.run(stdin.lock(), io::stdout().lock())
    } else {
        println!("{}", session.render());
        Ok(())
    }
}

fn io_error(path: &Path, source: io::Error) -> CliError {
    CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}
