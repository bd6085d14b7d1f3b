//! Archive model and reader abstraction
//!
//! The archive holds regions (with their locations), blocks and the monster
//! career table. Hosts supply an [`ArchiveReader`]; [`MemoryArchive`] is the
//! bundled implementation backed by decoded records, loadable from a JSON
//! snapshot.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gamexplorer::archive::{ArchiveReader, MemoryArchive};
//!
//! let archive = MemoryArchive::open("archive.json")?;
//! for index in 0..archive.block_count() {
//!     if let Some(block) = archive.block(index) {
//!         println!("{}", block.name);
//!     }
//! }
//! # Ok::<(), gamexplorer::Error>(())
//! ```

mod memory;
mod model;
mod records;
mod types;

pub use memory::{ArchiveSnapshot, CareerTable, MemoryArchive};
pub use model::*;
pub use records::{DungeonExtHeader, FlatRecord};
pub use types::*;

/// Read access to decoded archive records by index
pub trait ArchiveReader {
    fn region_count(&self) -> usize;

    fn region(&self, index: usize) -> Option<&Region>;

    /// Location `location` of region `region`
    fn location(&self, region: usize, location: usize) -> Option<&Location> {
        self.region(region)?.locations.get(location)
    }

    fn block_count(&self) -> usize;

    fn block(&self, index: usize) -> Option<&Block>;

    /// Monster career templates; complete over [`MonsterCareer::ALL`]
    fn careers(&self) -> &CareerTable;
}
