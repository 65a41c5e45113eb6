use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use remedy::{find_match, SearchSession};

mod cli;
use cli::display::{self, ResultLine};
use cli::{Cli, CliError, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("remedy=debug")
    } else {
        EnvFilter::new("remedy=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Search { query, limit } => {
            let session = SearchSession::initialize(&cli.file);
            cmd_search(&session, &query, limit);
            Ok(())
        }
        Commands::List => {
            let session = SearchSession::initialize(&cli.file);
            cmd_search(&session, "", None);
            Ok(())
        }
        Commands::Show { index } => {
            let session = SearchSession::initialize(&cli.file);
            let record = session.record(index).ok_or_else(|| CliError::NoSuchRecord {
                index,
                len: session.records().len(),
            })?;
            display::print_record(index, record);
            Ok(())
        }
        Commands::Add { label, solution } => {
            // A file that fails to load must not be replaced by a fresh notebook
            let mut session = SearchSession::try_initialize(&cli.file)?;
            let index = session.add_record(&label, &solution);
            session.save()?;
            if let Some(record) = session.record(index) {
                display::print_added(index, record, &cli.file.display().to_string());
            }
            Ok(())
        }
    }
}

/// Rank, cap at `limit`, and print with matched characters highlighted.
fn cmd_search(session: &SearchSession, query: &str, limit: Option<usize>) {
    let results = session.search_indexed(query);
    let total = results.len();
    let shown = limit.unwrap_or(total).min(total);

    let lines: Vec<ResultLine<'_>> = results
        .into_iter()
        .take(shown)
        .map(|(index, record)| {
            let found = find_match(query, &record.label);
            ResultLine {
                index,
                record,
                positions: found.as_ref().map(|m| m.positions.clone()).unwrap_or_default(),
                score: found.filter(|_| !query.is_empty()).map(|m| m.score),
            }
        })
        .collect();

    let heading = match (query.is_empty(), shown < total) {
        (true, false) => format!("{} entries", total),
        (true, true) => format!("{} of {} entries", shown, total),
        (false, false) => format!("{} matches for \"{}\"", total, query),
        (false, true) => format!("{} of {} matches for \"{}\"", shown, total, query),
    };
    display::print_results(&heading, &lines, total);
}
