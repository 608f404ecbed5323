//! dank16 - palette generator CLI entry point

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use dank16::cli::Cli;
use dank16::output::{render, Dialect};
use dank16::{generate_palette, logging, Config, GhosttyExtras, PaletteRequest, WalCache};

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let config = Config::load()?;

    let cache_path = cli
        .wal_cache
        .clone()
        .unwrap_or_else(|| config.wal_cache_path());
    let cache = WalCache::load(&cache_path);
    let cached = cache.as_ref().map(WalCache::colors).unwrap_or_default();

    let request = PaletteRequest::resolve(cli.inputs(), &cached)?;
    let palette = generate_palette(&request);

    let dialect = if cli.ghostty {
        Dialect::Ghostty
    } else {
        config.output.dialect
    };
    let extras = match (dialect, &cache) {
        (Dialect::Ghostty, Some(cache)) => cache.ghostty_extras(),
        _ => GhosttyExtras::default(),
    };

    Ok(render(&palette, dialect, &extras))
}
