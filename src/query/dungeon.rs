//! Dungeon location scan

use crate::archive::{ArchiveReader, DungeonType, RegionMapEntry};

/// One dungeon-bearing location with a populated extended header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonRow {
    pub region_name: String,
    pub location_name: String,
    pub dungeon_type: DungeonType,
    pub flags: u32,
    pub index: u32,
    /// Extended header byte 5
    pub aux_value: u8,
    /// Extended header byte 6
    pub value_b: u8,
    /// Extended header byte 7
    pub quest_location_count: u8,
    /// Map table entry the location's map id resolved to
    pub map_entry: RegionMapEntry,
}

/// Scans every region and location for dungeons
///
/// Locations without a dungeon, without an extended header, or whose map id
/// has no map table entry are skipped silently.
pub struct DungeonScanner<'a> {
    archive: &'a dyn ArchiveReader,
}

impl<'a> DungeonScanner<'a> {
    pub fn new(archive: &'a dyn ArchiveReader) -> Self {
        Self { archive }
    }

    pub fn scan(&self) -> Vec<DungeonRow> {
        let mut rows = Vec::new();
        let mut skipped = 0usize;

        for region_index in 0..self.archive.region_count() {
            let Some(region) = self.archive.region(region_index) else {
                continue;
            };

            for location_index in 0..region.locations.len() {
                let Some(location) = self.archive.location(region_index, location_index) else {
                    continue;
                };
                let Some(dungeon) = location.dungeon.as_ref() else {
                    continue;
                };
                let Some(extended) = dungeon.extended.as_ref() else {
                    skipped += 1;
                    continue;
                };
                let map_entry = location
                    .exterior
                    .as_ref()
                    .and_then(|exterior| region.map_entry(exterior.map_id));
                let Some(map_entry) = map_entry else {
                    tracing::debug!(
                        "No map table entry for {} in {}",
                        dungeon.location_name,
                        region.name
                    );
                    skipped += 1;
                    continue;
                };

                rows.push(DungeonRow {
                    region_name: region.name.clone(),
                    location_name: dungeon.location_name.clone(),
                    dungeon_type: extended.dungeon_type(),
                    flags: dungeon.flags,
                    index: dungeon.index,
                    aux_value: extended.aux_value(),
                    value_b: extended.value_b(),
                    quest_location_count: extended.quest_location_count(),
                    map_entry: *map_entry,
                });
            }
        }

        tracing::debug!("Dungeon scan: {} rows, {} skipped", rows.len(), skipped);
        rows
    }
}
