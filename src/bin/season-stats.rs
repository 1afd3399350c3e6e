//! CLI tool to print season summaries for a match-record CSV file.
//!
//! Usage:
//!   season-stats [games.csv]
//!   season-stats games.csv -o report.txt --team "Borussia Dortmund"
//!
//! If no output file is specified, writes to stdout.

use clap::Parser;
use season_stats::config::{
    DEFAULT_COMPETITION_PREFIX, DEFAULT_MARGIN, DEFAULT_TEAM, DEFAULT_YEAR,
};
use season_stats::{QueryConfig, StatsError, build_report, load_season, logging};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

/// Print statistical summaries over a season of football matches.
#[derive(Parser)]
#[command(name = "season-stats")]
struct Cli {
    /// Match records file (CSV with one header line)
    #[arg(default_value = "data/games.csv")]
    input: String,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Team of interest for home/away summaries
    #[arg(long, default_value = DEFAULT_TEAM)]
    team: String,

    /// Competition label prefix to count
    #[arg(long, default_value = DEFAULT_COMPETITION_PREFIX)]
    competition: String,

    /// Year substring for the regrouped game list
    #[arg(long, default_value = DEFAULT_YEAR)]
    year: String,

    /// Minimum goal difference for the away-game check
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    margin: u32,

    /// Log input path and record counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Load the season and render every summary.
///
/// Nothing is rendered when loading fails.
fn run(cli: &Cli) -> Result<String, StatsError> {
    let season = load_season(&cli.input)?;

    let config = QueryConfig {
        team: cli.team.clone(),
        competition_prefix: cli.competition.clone(),
        year: cli.year.clone(),
        margin: cli.margin,
    };
    log::debug!("Query config: {config:?}");

    let output = build_report(season.records(), &config).to_string();
    log::info!("Rendered report for {} games", season.len());
    Ok(output)
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = match run(&cli) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Fatal {}: {e}", e.kind());
            process::exit(1);
        }
    };

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }
}
