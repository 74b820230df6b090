mod cli;
mod output;

use clap::Parser;
use cli::{Args, Commands};
use eyre::Result;
use itemsort::types::{CsvSource, RecordSource, SortDirection, SortMode};
use itemsort::{compare_filenames, fs, sort_items};
use std::io::Write;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Commands::List(a) => {
            let path = fs::detect_items_file(a.file)?;
            let records = CsvSource::new(&path).list()?;
            let sorted = sort_items(&records, a.sort);
            tracing::debug!(mode = %a.sort, count = sorted.len(), "listing items");
            if a.json {
                output::write_json(&mut out, &sorted)?;
            } else {
                output::write_text(&mut out, &sorted)?;
            }
        }
        Commands::Compare(a) => {
            let direction = if a.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            let ordering = compare_filenames(&a.a, &a.b, direction);
            writeln!(out, "{}", output::ordering_sign(ordering))?;
        }
        Commands::Modes => {
            for mode in SortMode::ALL {
                writeln!(out, "{mode}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
