use clap::Parser;
use phonebook::api::{Outcome, Session};
use phonebook::config::{self, BookConfig};
use phonebook::error::Result;
use phonebook::store::fs::FileStore;
use std::io::{self, BufRead};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// Logs go to stderr so stdout stays the conversation.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("phonebook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = config::data_dir()?;
    let config = BookConfig::load(&data_dir)?;

    let book_path = cli.file.unwrap_or_else(|| config.book_path(&data_dir));
    let page_size = cli
        .page_size
        .map(|n| n as usize)
        .unwrap_or(config.page_size);

    info!(path = %book_path.display(), page_size, "opening address book");
    let mut session = Session::open(FileStore::new(book_path), page_size)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match session.execute(&line) {
            Outcome::Continue(result) => print::print_result(&result),
            Outcome::Exit(result) => {
                print::print_result(&result);
                break;
            }
        }
    }

    session.close()?;
    Ok(())
}
