//! Builders for small in-memory archives used by unit tests

use crate::archive::{
    Block, BlockFace, BlockType, CareerTable, CareerTemplate, DungeonExtHeader, DungeonHeader,
    ExteriorData, FlatRecord, Location, MemoryArchive, ModelRecord, MonsterCareer, Region,
    RegionMapEntry, Skill, SubRecord,
};

pub(crate) fn template(career: MonsterCareer) -> CareerTemplate {
    let seed = career.ordinal().unwrap_or(0) as i32;
    CareerTemplate {
        career,
        name: career.to_string(),
        hit_points_per_level: seed + 1,
        strength: 10 + seed,
        intelligence: 20 + seed,
        willpower: 30 + seed,
        agility: 40 + seed,
        endurance: 50 + seed,
        personality: 60 + seed,
        speed: 70 + seed,
        luck: 80 + seed,
        primary_skills: [Skill::Dodging, Skill::HandToHand, Skill::Running],
        major_skills: [Skill::Climbing, Skill::Swimming, Skill::Stealth],
        minor_skills: [
            Skill::Jumping,
            Skill::Backstab,
            Skill::CriticalStrike,
            Skill::None,
            Skill::None,
            Skill::None,
        ],
    }
}

pub(crate) fn career_table() -> CareerTable {
    CareerTable::new(MonsterCareer::ALL.iter().map(|c| template(*c)).collect()).unwrap()
}

pub(crate) fn archive(regions: Vec<Region>, blocks: Vec<Block>) -> MemoryArchive {
    MemoryArchive::new(regions, blocks, career_table())
}

pub(crate) fn flat(archive: u16, record: u16, faction: u16) -> FlatRecord {
    FlatRecord {
        texture_archive: archive,
        texture_record: record,
        faction_id: faction,
        ..FlatRecord::default()
    }
}

pub(crate) fn rmb_block(name: &str) -> Block {
    Block {
        name: name.to_string(),
        block_type: BlockType::Rmb,
        ..Block::default()
    }
}

pub(crate) fn models(ids: &[&str]) -> Vec<ModelRecord> {
    ids.iter().map(|id| ModelRecord::new(*id)).collect()
}

pub(crate) fn exterior_models(ids: &[&str]) -> SubRecord {
    SubRecord {
        exterior: BlockFace {
            models: models(ids),
            ..BlockFace::default()
        },
        ..SubRecord::default()
    }
}

pub(crate) fn ext_header(dungeon_type: u8, aux: u8, value_b: u8, quests: u8) -> DungeonExtHeader {
    DungeonExtHeader::parse(&[0, 0, dungeon_type, 0, 0, aux, value_b, quests, 0xFA, 0x00]).unwrap()
}

/// A location with a dungeon record mapped through `map_id`
pub(crate) fn dungeon_location(
    name: &str,
    map_id: u32,
    extended: Option<DungeonExtHeader>,
) -> Location {
    Location {
        dungeon: Some(DungeonHeader {
            location_name: name.to_string(),
            flags: 0x1A2B,
            index: 7,
            extended,
        }),
        exterior: Some(ExteriorData { map_id }),
        ..Location::default()
    }
}

/// A region whose map table covers each listed map id in order
pub(crate) fn region(name: &str, locations: Vec<Location>, mapped_ids: &[u32]) -> Region {
    let map_table: Vec<RegionMapEntry> = mapped_ids
        .iter()
        .map(|&map_id| RegionMapEntry {
            map_id,
            longitude: map_id as i32 * 10,
            latitude: map_id as i32 * 20,
            width: 2,
            height: 3,
            discovered: true,
            hidden: false,
        })
        .collect();
    let map_id_lookup = mapped_ids
        .iter()
        .enumerate()
        .map(|(index, &map_id)| (map_id, index))
        .collect();

    Region {
        name: name.to_string(),
        locations,
        map_table,
        map_id_lookup,
        ..Region::default()
    }
}
