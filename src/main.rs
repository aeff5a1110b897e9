use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use tv_listings::views::View;
use tv_listings::views::catalog::CatalogView;
use tv_listings::views::listing::ListingView;
use tv_listings::{AppConfig, ListingsError, Navigator, Screen, Theme, TvMazeClient};

/// Browse the TV schedule and show details from TVMaze
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Root URL of the listings API
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the schedule interactively (default)
    Schedule {
        /// Country code, e.g. US or GB
        #[arg(short, long)]
        country: Option<String>,

        /// Day to show as YYYY-MM-DD (defaults to today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Print the show catalog
    Shows {
        /// Maximum number of shows to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

/// Prints the screen currently on top, preceded by a blank line
fn show(navigator: &Navigator<'_, TvMazeClient>, theme: &Theme) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout)?;
    navigator.render(theme, &mut stdout)?;
    stdout.flush()
}

/// Runs the interactive schedule browser until the user quits
fn browse(
    client: &TvMazeClient,
    theme: &Theme,
    country: String,
    date: Option<NaiveDate>,
) -> Result<(), ListingsError> {
    let prompt_theme = ColorfulTheme::default();
    let mut navigator = Navigator::new(client, ListingView::new(country, date));

    loop {
        show(&navigator, theme)?;

        match navigator.screen() {
            Screen::Listing => {
                let cards = navigator.listing().cards();
                if cards.is_empty() {
                    return Ok(());
                }

                let mut items: Vec<String> = cards.iter().map(|card| card.title.clone()).collect();
                items.push("Quit".to_string());

                let choice = Select::with_theme(&prompt_theme)
                    .with_prompt("View details of")
                    .items(&items)
                    .default(0)
                    .interact_opt()?;

                match choice {
                    Some(index) if index < cards.len() => {
                        navigator.open(index);
                    }
                    _ => return Ok(()),
                }
            }
            Screen::Detail => {
                let choice = Select::with_theme(&prompt_theme)
                    .items(&["Back", "Quit"])
                    .default(0)
                    .interact_opt()?;

                match choice {
                    Some(0) => {
                        navigator.back();
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

/// Prints the show catalog
fn list_shows(client: &TvMazeClient, theme: &Theme, limit: Option<usize>) -> io::Result<()> {
    let mut view = CatalogView::new(limit);
    view.activate(client);

    let mut stdout = io::stdout().lock();
    view.render(theme, &mut stdout)?;
    stdout.flush()
}

fn run(cli: Cli) -> Result<(), ListingsError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if cli.no_color {
        config.theme.color = false;
    }

    let client = TvMazeClient::with_base_url(&config.base_url)?;

    match cli.command.unwrap_or(Command::Schedule {
        country: None,
        date: None,
    }) {
        Command::Schedule { country, date } => {
            let country = country
                .map(|c| c.to_uppercase())
                .unwrap_or(config.country);
            browse(&client, &config.theme, country, date)
        }
        Command::Shows { limit } => Ok(list_shows(&client, &config.theme, limit)?),
    }
}

fn main() {
    // Logs go to stderr so they never mix with rendered screens
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
