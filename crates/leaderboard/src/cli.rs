//! Command-line arguments and the run loop behind them.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use leaderboard_query::{query, Dir, LeaderboardConfig, QueryError, QueryState};
use log::{debug, info};

use crate::config::{load_config, load_players, FileFormat};
use crate::player::Player;
use crate::render::{render_table, PageView};

/// How the page is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Aligned table, styled when the terminal supports it.
    #[default]
    Text,
    Json,
    Yaml,
}

/// Search, sort and page a leaderboard of player records.
#[derive(Debug, Parser)]
#[command(name = "leaderboard", version, about)]
pub struct Cli {
    /// Player file (.json, .yaml or .yml). Reads JSON from stdin when omitted.
    pub input: Option<PathBuf>,

    /// Case-insensitive text matched against username and country
    #[arg(short, long)]
    pub search: Option<String>,

    /// Field to sort by (e.g. rank, score, winRate, lastActive)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction
    #[arg(long, value_parser = parse_dir)]
    pub dir: Option<Dir>,

    /// 1-based page to show
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Players per page; must be one of the configured sizes
    #[arg(long, allow_negative_numbers = true)]
    pub page_size: Option<i64>,

    /// Configuration file (.json, .yaml or .yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Disable colours in text output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_dir(s: &str) -> std::result::Result<Dir, String> {
    s.parse()
}

/// Negative inputs become 0 so the engine reports them as invalid.
fn non_negative(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

impl Cli {
    /// Builds the query state: config defaults, then command-line overrides.
    ///
    /// A positive page size outside the configured choices is rejected here.
    /// Zero or negative sizes and indices pass through for the engine to
    /// reject.
    pub fn query_state(
        &self,
        config: &LeaderboardConfig,
    ) -> std::result::Result<QueryState, QueryError> {
        let mut state = QueryState::from_config(config);

        if let Some(size) = self.page_size.map(non_negative) {
            if size == 0 {
                state.page_size = 0;
            } else {
                state.set_page_size(size, config)?;
            }
        }
        if let Some(field) = &self.sort {
            state.sort_field = field.clone();
            state.sort_dir = Dir::Asc;
        }
        if let Some(dir) = self.dir {
            state.sort_dir = dir;
        }
        if let Some(term) = &self.search {
            state.set_search(term.as_str());
        }
        if let Some(page) = self.page {
            state.page_index = non_negative(page);
        }
        Ok(state)
    }
}

fn read_players(input: Option<&PathBuf>) -> Result<Vec<Player>> {
    match input {
        Some(path) => load_players(path)
            .with_context(|| format!("loading players from {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading players from stdin")?;
            FileFormat::Json
                .parse(&text)
                .context("parsing players from stdin")
        }
    }
}

/// Runs one query and writes the page to `out`.
pub fn run_with(
    cli: &Cli,
    players: &[Player],
    config: &LeaderboardConfig,
    out: &mut impl Write,
) -> Result<()> {
    let mut state = cli.query_state(config)?;
    let mut result = query(players, &state)?;

    // A page past the end of a shrunken result set falls back to the last page
    if state.clamp_page(result.total_pages) {
        info!(
            "page {} is out of range, showing page {} of {}",
            result.page_index, state.page_index, result.total_pages
        );
        result = query(players, &state)?;
    }
    debug!(
        "showing {} of {} matching players",
        result.len(),
        result.total_matching
    );

    match cli.output {
        OutputMode::Text => {
            let text = render_table(&result, &state, config.page_window, Utc::now());
            out.write_all(text.as_bytes())?;
        }
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut *out, &PageView::from(&result))?;
            writeln!(out)?;
        }
        OutputMode::Yaml => {
            let yaml = serde_yaml::to_string(&PageView::from(&result))?;
            out.write_all(yaml.as_bytes())?;
        }
    }
    Ok(())
}

/// Loads inputs named by the arguments and prints the requested page.
pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            load_config(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => LeaderboardConfig::default(),
    };
    let players = read_players(cli.input.as_ref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &players, &config, &mut out)
}
