//! gamexplorer - Query and dump game archive data
//!
//! Usage:
//!   gamexplorer careers                       - Dump monster careers to careers.csv
//!   gamexplorer dungeons                      - Dump dungeon data to dungeons.csv
//!   gamexplorer model <id>                    - Print blocks using a 3D model
//!   gamexplorer flat [--texture-archive N] [--record N] [--faction N]
//!                                             - Print blocks using a flat
//!   gamexplorer console                       - Read console commands from stdin

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use gamexplorer::archive::MemoryArchive;
use gamexplorer::export::{dump_dungeon_data, dump_monster_careers};
use gamexplorer::query::{BlockFlatIndexer, BlockModelIndexer, FlatFilter};
use gamexplorer::Console;

#[derive(Parser)]
#[command(name = "gamexplorer")]
#[command(version = "0.1.0")]
#[command(about = "Query and dump game archive data", long_about = None)]
struct Cli {
    /// Path to the JSON archive snapshot
    #[arg(short, long, env = "GAMEXPLORER_ARCHIVE", default_value = "archive.json")]
    archive: PathBuf,

    /// Directory CSV files are written to
    #[arg(short, long, env = "GAMEXPLORER_DATA_DIR", default_value = ".")]
    output: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump all monster career info to careers.csv
    Careers,
    /// Dump all dungeon info to dungeons.csv and dungeons_exterior.csv
    Dungeons,
    /// Print all blocks using the specified 3D model
    Model {
        /// Model identifier
        model_id: String,
    },
    /// Print all blocks using a flat matching the given keys
    Flat {
        /// Texture archive
        #[arg(long)]
        texture_archive: Option<i32>,
        /// Texture record
        #[arg(long)]
        record: Option<i32>,
        /// Faction id
        #[arg(long)]
        faction: Option<i32>,
    },
    /// Read console commands from stdin, one per line
    Console,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let archive = MemoryArchive::open(&cli.archive)
        .with_context(|| format!("Failed to load {}", cli.archive.display()))?;

    match cli.command {
        Commands::Careers => {
            let path = dump_monster_careers(&archive, &cli.output)?;
            println!("Careers dumped in {}", path.display());
        }
        Commands::Dungeons => {
            let path = dump_dungeon_data(&archive, &cli.output)?;
            println!("Dungeon info dumped in {}", path.display());
        }
        Commands::Model { model_id } => {
            if model_id.is_empty() {
                bail!("Model id must not be empty");
            }
            let blocks = BlockModelIndexer::new(&archive).find_blocks_using_model(&model_id);
            if blocks.is_empty() {
                println!("Model '{}' is unused", model_id);
            } else {
                println!("Model used in: {}", blocks.join(", "));
            }
        }
        Commands::Flat {
            texture_archive,
            record,
            faction,
        } => {
            let filter = FlatFilter {
                archive: texture_archive,
                record,
                faction,
            };
            let blocks = BlockFlatIndexer::new(&archive).find_blocks_using_flat(&filter);
            if blocks.is_empty() {
                println!("No such flat in block data");
            } else {
                println!("Flat found in: {}", blocks.join(", "));
            }
        }
        Commands::Console => run_console(&Console::new(&archive, cli.output))?,
    }

    Ok(())
}

fn run_console(console: &Console<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        writeln!(stdout, "{}", console.execute(&line))?;
        stdout.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_texture_archive_does_not_shadow_snapshot_path() {
        let cli = Cli::try_parse_from([
            "gamexplorer",
            "--archive",
            "snapshot.json",
            "flat",
            "--texture-archive",
            "100",
            "--faction",
            "9",
        ])
        .unwrap();

        assert_eq!(cli.archive, PathBuf::from("snapshot.json"));
        match cli.command {
            Commands::Flat {
                texture_archive,
                record,
                faction,
            } => assert_eq!((texture_archive, record, faction), (Some(100), None, Some(9))),
            _ => panic!("expected flat subcommand"),
        }
    }

    #[test]
    fn test_flat_rejects_archive_flag() {
        assert!(Cli::try_parse_from(["gamexplorer", "flat", "--archive", "100"]).is_err());
    }
}
