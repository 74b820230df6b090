use clap::{Parser, Subcommand};
use itemsort::SortMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itemsort", version, about = "List items from a CSV store in natural or creation order")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the items, sorted
    List(ListArgs),
    /// Compare two filenames and print -1, 0 or 1
    Compare(CompareArgs),
    /// Print the accepted sort modes
    Modes,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Sort mode: created-asc, created-desc, filename-asc or filename-desc
    #[arg(short, long, default_value_t = SortMode::default())]
    pub sort: SortMode,

    /// Override the items file (defaults to ./items.csv)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    pub a: String,
    pub b: String,

    /// Compare in descending order
    #[arg(short, long)]
    pub desc: bool,
}
