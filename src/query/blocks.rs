//! Block archive scans for model and flat usage
//!
//! Both indexers walk every exterior-room block in archive order and test an
//! ordered list of record sources. The first source that matches reports the
//! block and stops the scan for that block, so each block name appears at
//! most once.

use crate::archive::{ArchiveReader, Block, FlatRecord, ModelRecord};

/// A record source tested against a block; sources run in order until one matches
type BlockMatcher<'q> = Box<dyn Fn(&Block) -> bool + 'q>;

/// Names of exterior-room blocks for which any matcher succeeds
fn scan_blocks(archive: &dyn ArchiveReader, matchers: &[BlockMatcher<'_>]) -> Vec<String> {
    (0..archive.block_count())
        .filter_map(|index| archive.block(index))
        .filter(|block| block.is_exterior_room())
        .filter(|block| matchers.iter().any(|matcher| matcher(block)))
        .map(|block| block.name.clone())
        .collect()
}

fn uses_model(records: &[ModelRecord], model_id: &str) -> bool {
    records
        .iter()
        .any(|record| !record.model_id.is_empty() && record.model_id == model_id)
}

pub struct BlockModelIndexer<'a> {
    archive: &'a dyn ArchiveReader,
}

impl<'a> BlockModelIndexer<'a> {
    pub fn new(archive: &'a dyn ArchiveReader) -> Self {
        Self { archive }
    }

    /// Blocks placing `model_id` in a sub-record exterior or in the misc models
    ///
    /// An empty `model_id` is a caller error; it never matches anything here.
    pub fn find_blocks_using_model(&self, model_id: &str) -> Vec<String> {
        if model_id.is_empty() {
            return Vec::new();
        }

        let matchers: [BlockMatcher<'_>; 2] = [
            Box::new(|block: &Block| {
                block
                    .sub_records
                    .iter()
                    .any(|sub| uses_model(&sub.exterior.models, model_id))
            }),
            Box::new(|block: &Block| uses_model(&block.misc_models, model_id)),
        ];

        let blocks = scan_blocks(self.archive, &matchers);
        tracing::debug!("Model '{}' found in {} blocks", model_id, blocks.len());
        blocks
    }
}

/// Flat search keys; unset fields match any value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatFilter {
    pub archive: Option<i32>,
    pub record: Option<i32>,
    pub faction: Option<i32>,
}

impl FlatFilter {
    pub fn is_empty(&self) -> bool {
        self.archive.is_none() && self.record.is_none() && self.faction.is_none()
    }

    /// True when every set field equals the record's corresponding field
    pub fn matches(&self, flat: &FlatRecord) -> bool {
        fn field_matches(key: Option<i32>, value: u16) -> bool {
            key.map_or(true, |key| key == i32::from(value))
        }

        field_matches(self.archive, flat.texture_archive)
            && field_matches(self.record, flat.texture_record)
            && field_matches(self.faction, flat.faction_id)
    }

    fn matches_any(&self, flats: &[FlatRecord]) -> bool {
        flats.iter().any(|flat| self.matches(flat))
    }
}

pub struct BlockFlatIndexer<'a> {
    archive: &'a dyn ArchiveReader,
}

impl<'a> BlockFlatIndexer<'a> {
    pub fn new(archive: &'a dyn ArchiveReader) -> Self {
        Self { archive }
    }

    /// Blocks holding a flat or people record that satisfies `filter`
    ///
    /// Sources are tested as misc flats first, then per sub-record in archive
    /// order: exterior flats, exterior people, interior flats, interior people.
    pub fn find_blocks_using_flat(&self, filter: &FlatFilter) -> Vec<String> {
        let matchers: [BlockMatcher<'_>; 2] = [
            Box::new(|block: &Block| filter.matches_any(&block.misc_flats)),
            Box::new(|block: &Block| {
                block.sub_records.iter().any(|sub| {
                    filter.matches_any(&sub.exterior.flats)
                        || filter.matches_any(&sub.exterior.people)
                        || filter.matches_any(&sub.interior.flats)
                        || filter.matches_any(&sub.interior.people)
                })
            }),
        ];

        let blocks = scan_blocks(self.archive, &matchers);
        tracing::debug!("Flat {:?} found in {} blocks", filter, blocks.len());
        blocks
    }
}
