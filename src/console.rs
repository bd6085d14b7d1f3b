//! Text command surface
//!
//! [`Console`] is the composition root for the debug console: it wires the
//! query components to an archive and an output directory and answers each
//! command line with a single result string. Failures never escape; they
//! come back as strings prefixed with `error:`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gamexplorer::archive::MemoryArchive;
//! use gamexplorer::Console;
//!
//! let archive = MemoryArchive::open("archive.json")?;
//! let console = Console::new(&archive, "out");
//! println!("{}", console.execute("print_blocks_using model 41000"));
//! # Ok::<(), gamexplorer::Error>(())
//! ```

use std::path::PathBuf;

use crate::archive::ArchiveReader;
use crate::error::{Error, Result};
use crate::export::{self, CAREERS_FILENAME, DUNGEONS_FILENAME};
use crate::query::{BlockFlatIndexer, BlockModelIndexer, FlatFilter};

pub const BLOCKS_USAGE: &str = "print_blocks_using model <model id> | \
print_blocks_using flat [archive <n>] [record <n>] [faction <n>]";

type Handler = fn(&Console<'_>, &[&str]) -> Result<String>;

/// A registered console command
pub struct ConsoleCommand {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    handler: Handler,
}

const COMMANDS: &[ConsoleCommand] = &[
    ConsoleCommand {
        name: "dump_monster_careers",
        description: "Dumps all the monster career info in careers.csv",
        usage: "dump_monster_careers",
        handler: dump_monster_careers,
    },
    ConsoleCommand {
        name: "dump_dungeon_data",
        description: "Dumps all the dungeon info in dungeons.csv",
        usage: "dump_dungeon_data",
        handler: dump_dungeon_data,
    },
    ConsoleCommand {
        name: "print_blocks_using",
        description: "Prints all the blocks using the specified model or flat",
        usage: BLOCKS_USAGE,
        handler: print_blocks_using,
    },
];

pub struct Console<'a> {
    archive: &'a dyn ArchiveReader,
    output_dir: PathBuf,
}

impl<'a> Console<'a> {
    pub fn new(archive: &'a dyn ArchiveReader, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            archive,
            output_dir: output_dir.into(),
        }
    }

    pub fn commands(&self) -> &'static [ConsoleCommand] {
        COMMANDS
    }

    /// Run one command line and return its result text
    pub fn execute(&self, line: &str) -> String {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return "error: empty command".to_string();
        };

        if name == "help" {
            return self.help();
        }

        let Some(command) = COMMANDS.iter().find(|c| c.name == name) else {
            return format!("error: unknown command '{}'", name);
        };

        tracing::debug!("Running console command {}", line.trim());
        match (command.handler)(self, args) {
            Ok(output) => output,
            Err(e) => format!("error: {}", e),
        }
    }

    fn help(&self) -> String {
        COMMANDS
            .iter()
            .map(|c| format!("{} - {}\n  usage: {}", c.name, c.description, c.usage))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn dump_monster_careers(console: &Console<'_>, _args: &[&str]) -> Result<String> {
    export::dump_monster_careers(console.archive, &console.output_dir).map_err(io_error)?;
    Ok(format!("Careers dumped in {}", CAREERS_FILENAME))
}

fn dump_dungeon_data(console: &Console<'_>, _args: &[&str]) -> Result<String> {
    export::dump_dungeon_data(console.archive, &console.output_dir).map_err(io_error)?;
    Ok(format!("Dungeon info dumped in {}", DUNGEONS_FILENAME))
}

fn print_blocks_using(console: &Console<'_>, args: &[&str]) -> Result<String> {
    match args {
        ["model", model_id, ..] => {
            let blocks = BlockModelIndexer::new(console.archive).find_blocks_using_model(model_id);
            if blocks.is_empty() {
                Ok(format!("Model '{}' is unused", model_id))
            } else {
                Ok(format!("Model used in: {}", blocks.join(", ")))
            }
        }
        ["model"] => Err(usage("expected model id")),
        ["flat", rest @ ..] => {
            let filter = parse_flat_filter(rest)?;
            let blocks = BlockFlatIndexer::new(console.archive).find_blocks_using_flat(&filter);
            if blocks.is_empty() {
                Ok("No such flat in block data".to_string())
            } else {
                Ok(format!("Flat found in: {}", blocks.join(", ")))
            }
        }
        [] => Err(usage("expected 'model' or 'flat'")),
        [other, ..] => Err(usage(&format!("unknown search kind '{}'", other))),
    }
}

fn usage(message: &str) -> Error {
    Error::Usage(format!("{} (usage: {})", message, BLOCKS_USAGE))
}

fn io_error(e: anyhow::Error) -> Error {
    Error::Io(std::io::Error::other(format!("{:#}", e)))
}

/// Parse `key value` pairs into a flat filter
///
/// Keys may appear in any order; unknown keys are skipped with their value
/// and a repeated key keeps its last value.
pub fn parse_flat_filter(args: &[&str]) -> Result<FlatFilter> {
    let mut filter = FlatFilter::default();

    for pair in args.chunks(2) {
        let [key, value] = pair else {
            return Err(usage(&format!("missing value for '{}'", pair[0])));
        };

        let slot = match *key {
            "archive" => &mut filter.archive,
            "record" => &mut filter.record,
            "faction" => &mut filter.faction,
            _ => continue,
        };
        let parsed = value
            .parse::<i32>()
            .map_err(|_| usage(&format!("'{}' expects an integer, got '{}'", key, value)))?;
        *slot = Some(parsed);
    }

    Ok(filter)
}
