use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", version)]
#[command(about = "Interactive address book with paging and JSON persistence", long_about = None)]
pub struct Cli {
    /// Book file to load and save (defaults to the configured one)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Records per page for `show`
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
