//! Read-only queries over an archive
//!
//! Each component borrows an [`ArchiveReader`](crate::archive::ArchiveReader),
//! keeps no state between calls and returns plain rows or block names.

mod blocks;
mod career;
mod dungeon;

pub use blocks::{BlockFlatIndexer, BlockModelIndexer, FlatFilter};
pub use career::{CareerDumper, CareerRow};
pub use dungeon::{DungeonRow, DungeonScanner};
