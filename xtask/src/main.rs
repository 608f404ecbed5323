//! xtask - Build tasks for dank16
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate man pages for the dank16 and nearest-swatch binaries

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand};

use dank16::cli::{Cli, SwatchCli};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for dank16")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate man pages from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs { output } => {
            let man_dir = output.join("man");
            fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

            generate_man_page(Cli::command(), &man_dir)?;
            generate_man_page(SwatchCli::command(), &man_dir)?;

            println!("Man pages generated in {}", man_dir.display());
        }
    }

    Ok(())
}

/// Render one command's man page into `man_dir/<name>.1`
fn generate_man_page(cmd: Command, man_dir: &Path) -> Result<()> {
    use clap_mangen::Man;

    let name = cmd.get_name().to_string();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = man_dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}
