//! # gamexplorer
//!
//! Read-only query tools over game archive data.
//!
//! ## Overview
//!
//! The archive holds regions with their locations, exterior and dungeon
//! blocks, and monster career templates. This library provides:
//!
//! - Decoding of the fixed-layout records these entities carry
//!   (extended dungeon headers, flat and people records)
//! - A dungeon scan emitting one row per dungeon with an extended header
//! - A dump of every monster career template
//! - Block searches by 3D model id or by flat texture/faction keys
//! - CSV export and a text console answering debug commands
//!
//! Archive access goes through the [`ArchiveReader`] trait. [`MemoryArchive`]
//! implements it over decoded records and can be loaded from a JSON snapshot.
//!
//! ## Example - Querying
//!
//! ```rust,no_run
//! use gamexplorer::archive::MemoryArchive;
//! use gamexplorer::query::{BlockFlatIndexer, FlatFilter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let archive = MemoryArchive::open("archive.json")?;
//!
//!     let filter = FlatFilter {
//!         faction: Some(7),
//!         ..FlatFilter::default()
//!     };
//!     for name in BlockFlatIndexer::new(&archive).find_blocks_using_flat(&filter) {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Example - Exporting
//!
//! ```rust,no_run
//! use gamexplorer::archive::MemoryArchive;
//! use gamexplorer::export;
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let archive = MemoryArchive::open("archive.json")?;
//!     let path = export::dump_dungeon_data(&archive, Path::new("out"))?;
//!     println!("Wrote {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod console;
pub mod error;
pub mod export;
pub mod query;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::{ArchiveReader, MemoryArchive};
pub use console::Console;
pub use error::{Error, Result};
