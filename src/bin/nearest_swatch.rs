//! nearest-swatch - snap a hex color to the nearest Tela icon theme color

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use dank16::cli::SwatchCli;
use dank16::wal::expand_home;
use dank16::{logging, resolve_swatch};

fn main() -> ExitCode {
    logging::init();

    let cli = match SwatchCli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            eprintln!("\nExample: nearest-swatch '#5677fc' ~/.cache/tela_color");
            return ExitCode::from(1);
        }
    };

    let cache_path = expand_home(&cli.cache_path);
    match resolve_swatch(&cli.hex, &cache_path) {
        Ok(name) => {
            println!("{}", name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
