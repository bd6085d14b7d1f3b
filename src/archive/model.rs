//! Decoded archive entities
//!
//! All entities are read-only views. Query components borrow them from an
//! [`ArchiveReader`](crate::archive::ArchiveReader) for the duration of a scan.

use serde::Deserialize;
use std::collections::HashMap;

use crate::archive::records::{deserialize_ext_header, deserialize_flats, DungeonExtHeader, FlatRecord};
use crate::archive::types::{BlockType, MonsterCareer, Skill};

/// A map region and its locations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Region {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Geographic metadata per mapped location
    #[serde(default)]
    pub map_table: Vec<RegionMapEntry>,
    /// External map id to index into `map_table`
    #[serde(default)]
    pub map_id_lookup: HashMap<u32, usize>,
}

impl Region {
    /// Resolve an external map id to its map table entry
    pub fn map_entry(&self, map_id: u32) -> Option<&RegionMapEntry> {
        self.map_id_lookup
            .get(&map_id)
            .and_then(|&index| self.map_table.get(index))
    }
}

/// Geographic metadata for a mapped location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RegionMapEntry {
    #[serde(default)]
    pub map_id: u32,
    pub longitude: i32,
    pub latitude: i32,
    #[serde(default)]
    pub width: u8,
    #[serde(default)]
    pub height: u8,
    #[serde(default)]
    pub discovered: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// A location within a region
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    /// Region-relative index
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub dungeon: Option<DungeonHeader>,
    #[serde(default)]
    pub exterior: Option<ExteriorData>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ExteriorData {
    pub map_id: u32,
}

/// Dungeon sub-record header
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DungeonHeader {
    /// Location name as stored in the dungeon record
    pub location_name: String,
    pub flags: u32,
    pub index: u32,
    #[serde(default, deserialize_with = "deserialize_ext_header")]
    pub extended: Option<DungeonExtHeader>,
}

/// A block from the block archive
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub sub_records: Vec<SubRecord>,
    #[serde(default)]
    pub misc_models: Vec<ModelRecord>,
    #[serde(default, deserialize_with = "deserialize_flats")]
    pub misc_flats: Vec<FlatRecord>,
}

impl Block {
    pub fn is_exterior_room(&self) -> bool {
        self.block_type == BlockType::Rmb
    }
}

/// A block sub-record with separate exterior and interior contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubRecord {
    #[serde(default)]
    pub exterior: BlockFace,
    #[serde(default)]
    pub interior: BlockFace,
}

/// Objects placed on one face (exterior or interior) of a sub-record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockFace {
    #[serde(default)]
    pub models: Vec<ModelRecord>,
    #[serde(default, deserialize_with = "deserialize_flats")]
    pub flats: Vec<FlatRecord>,
    #[serde(default, deserialize_with = "deserialize_flats")]
    pub people: Vec<FlatRecord>,
}

/// A placed 3D object; an empty model id means no model
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelRecord {
    #[serde(default)]
    pub model_id: String,
}

impl ModelRecord {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
        }
    }
}

/// Stat template for a monster career
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CareerTemplate {
    pub career: MonsterCareer,
    pub name: String,
    pub hit_points_per_level: i32,
    pub strength: i32,
    pub intelligence: i32,
    pub willpower: i32,
    pub agility: i32,
    pub endurance: i32,
    pub personality: i32,
    pub speed: i32,
    pub luck: i32,
    pub primary_skills: [Skill; 3],
    pub major_skills: [Skill; 3],
    pub minor_skills: [Skill; 6],
}
