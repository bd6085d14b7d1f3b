//! Enumerations used by archive records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dungeon type code stored at byte 2 of the extended dungeon header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DungeonType {
    Crypt,
    OrcStronghold,
    HumanStronghold,
    Prison,
    DesecratedTemple,
    Mine,
    NaturalCave,
    Coven,
    VampireHaunt,
    Laboratory,
    HarpyNest,
    RuinedCastle,
    SpiderNest,
    GiantStronghold,
    DragonsDen,
    BarbarianStronghold,
    VolcanicCaves,
    ScorpionNest,
    Cemetery,
    NoDungeon,
    Unknown(u8),
}

impl From<u8> for DungeonType {
    fn from(value: u8) -> Self {
        match value {
            0 => DungeonType::Crypt,
            1 => DungeonType::OrcStronghold,
            2 => DungeonType::HumanStronghold,
            3 => DungeonType::Prison,
            4 => DungeonType::DesecratedTemple,
            5 => DungeonType::Mine,
            6 => DungeonType::NaturalCave,
            7 => DungeonType::Coven,
            8 => DungeonType::VampireHaunt,
            9 => DungeonType::Laboratory,
            10 => DungeonType::HarpyNest,
            11 => DungeonType::RuinedCastle,
            12 => DungeonType::SpiderNest,
            13 => DungeonType::GiantStronghold,
            14 => DungeonType::DragonsDen,
            15 => DungeonType::BarbarianStronghold,
            16 => DungeonType::VolcanicCaves,
            17 => DungeonType::ScorpionNest,
            18 => DungeonType::Cemetery,
            255 => DungeonType::NoDungeon,
            v => DungeonType::Unknown(v),
        }
    }
}

impl fmt::Display for DungeonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Undefined codes render as the raw number
            DungeonType::Unknown(code) => write!(f, "{}", code),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Block variant stored in the block archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockType {
    /// Exterior-room block (town building layouts)
    Rmb,
    /// Dungeon block
    Rdb,
    /// Interior dungeon block
    Rdi,
    #[default]
    Unknown,
}

/// Monster career identifiers in declared order
///
/// `None` is the sentinel value and is not part of [`MonsterCareer::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterCareer {
    None,
    Rat,
    Imp,
    Spriggan,
    GiantBat,
    GrizzlyBear,
    SabertoothTiger,
    Spider,
    Orc,
    Centaur,
    Werewolf,
    Nymph,
    Slaughterfish,
    OrcSergeant,
    Harpy,
    Wereboar,
    SkeletalWarrior,
    Giant,
    Zombie,
    Ghost,
    Mummy,
    GiantScorpion,
    OrcShaman,
    Gargoyle,
    Wraith,
    OrcWarlord,
    FrostDaedra,
    FireDaedra,
    Daedroth,
    Vampire,
    DaedraSeducer,
    VampireAncient,
    DaedraLord,
    Lich,
    AncientLich,
    Dragonling,
    FireAtronach,
    IronAtronach,
    FleshAtronach,
    IceAtronach,
    #[serde(rename = "Dragonling_Alternate")]
    DragonlingAlternate,
    Dreugh,
    Lamia,
}

impl MonsterCareer {
    /// Every career except the `None` sentinel, in declared order
    pub const ALL: [MonsterCareer; 42] = [
        MonsterCareer::Rat,
        MonsterCareer::Imp,
        MonsterCareer::Spriggan,
        MonsterCareer::GiantBat,
        MonsterCareer::GrizzlyBear,
        MonsterCareer::SabertoothTiger,
        MonsterCareer::Spider,
        MonsterCareer::Orc,
        MonsterCareer::Centaur,
        MonsterCareer::Werewolf,
        MonsterCareer::Nymph,
        MonsterCareer::Slaughterfish,
        MonsterCareer::OrcSergeant,
        MonsterCareer::Harpy,
        MonsterCareer::Wereboar,
        MonsterCareer::SkeletalWarrior,
        MonsterCareer::Giant,
        MonsterCareer::Zombie,
        MonsterCareer::Ghost,
        MonsterCareer::Mummy,
        MonsterCareer::GiantScorpion,
        MonsterCareer::OrcShaman,
        MonsterCareer::Gargoyle,
        MonsterCareer::Wraith,
        MonsterCareer::OrcWarlord,
        MonsterCareer::FrostDaedra,
        MonsterCareer::FireDaedra,
        MonsterCareer::Daedroth,
        MonsterCareer::Vampire,
        MonsterCareer::DaedraSeducer,
        MonsterCareer::VampireAncient,
        MonsterCareer::DaedraLord,
        MonsterCareer::Lich,
        MonsterCareer::AncientLich,
        MonsterCareer::Dragonling,
        MonsterCareer::FireAtronach,
        MonsterCareer::IronAtronach,
        MonsterCareer::FleshAtronach,
        MonsterCareer::IceAtronach,
        MonsterCareer::DragonlingAlternate,
        MonsterCareer::Dreugh,
        MonsterCareer::Lamia,
    ];

    /// Position in [`MonsterCareer::ALL`], or `None` for the sentinel
    pub fn ordinal(self) -> Option<usize> {
        Self::ALL.iter().position(|c| *c == self)
    }
}

impl fmt::Display for MonsterCareer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonsterCareer::DragonlingAlternate => f.write_str("Dragonling_Alternate"),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Skill identifiers referenced by career skill slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Skill {
    #[default]
    None,
    Medical,
    Etiquette,
    Streetwise,
    Jumping,
    Orcish,
    Harpy,
    Giantish,
    Dragonish,
    Nymph,
    Daedric,
    Spriggan,
    Centaurian,
    Impish,
    Lockpicking,
    Mercantile,
    Pickpocket,
    Stealth,
    Swimming,
    Climbing,
    Backstab,
    Dodging,
    Running,
    Destruction,
    Restoration,
    Illusion,
    Alteration,
    Thaumaturgy,
    Mysticism,
    ShortBlade,
    LongBlade,
    HandToHand,
    Axe,
    BluntWeapon,
    Archery,
    CriticalStrike,
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
