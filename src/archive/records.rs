//! Fixed-layout binary records
//!
//! These are the compact little-endian records found inside location and
//! block data. Each record exposes the fields the query components need and
//! nothing more.

use byteorder::{LittleEndian, ReadBytesExt};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Cursor;

use crate::archive::types::DungeonType;
use crate::error::{Error, Result};

/// Extended dungeon header, present only for some dungeon generations
///
/// Layout (offsets in bytes):
///
/// | Offset | Meaning                                  |
/// |--------|------------------------------------------|
/// | 2      | dungeon type code                        |
/// | 5      | auxiliary value, 0..=255                 |
/// | 6      | second auxiliary value, 0..=9            |
/// | 7      | quest location count, 0..=18             |
/// | 8      | reserved, observed as 0xFA (unverified)  |
/// | 9      | reserved, observed as 0x00 (unverified)  |
///
/// Offsets 0, 1, 3 and 4 have no known meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DungeonExtHeader {
    bytes: [u8; DungeonExtHeader::RECORD_SIZE],
}

impl DungeonExtHeader {
    pub const RECORD_SIZE: usize = 10;

    /// Parse from a raw buffer; trailing bytes beyond the record are ignored
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::RECORD_SIZE {
            return Err(Error::InvalidRecord(format!(
                "extended dungeon header needs {} bytes, got {}",
                Self::RECORD_SIZE,
                data.len()
            )));
        }
        let mut bytes = [0u8; Self::RECORD_SIZE];
        bytes.copy_from_slice(&data[..Self::RECORD_SIZE]);
        Ok(Self { bytes })
    }

    pub fn dungeon_type(&self) -> DungeonType {
        DungeonType::from(self.bytes[2])
    }

    pub fn aux_value(&self) -> u8 {
        self.bytes[5]
    }

    pub fn value_b(&self) -> u8 {
        self.bytes[6]
    }

    pub fn quest_location_count(&self) -> u8 {
        self.bytes[7]
    }
}

/// Decode an optional extended header
///
/// A missing, empty or truncated buffer decodes as absent, so only the owning
/// location drops out of dungeon scans.
pub(crate) fn deserialize_ext_header<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DungeonExtHeader>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<u8>> = Option::deserialize(deserializer)?;
    match raw {
        Some(bytes) if !bytes.is_empty() => match DungeonExtHeader::parse(&bytes) {
            Ok(header) => Ok(Some(header)),
            Err(e) => {
                tracing::debug!("Ignoring extended dungeon header: {}", e);
                Ok(None)
            }
        },
        _ => Ok(None),
    }
}

/// A flat (billboard) or people record
///
/// Both kinds share a 17-byte layout:
/// x, y, z (`i32`), texture bitfield (`u16`), faction id (`u16`), flags (`u8`).
/// The texture bitfield packs the archive in the upper 9 bits and the record
/// in the lower 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlatRecord {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub z: i32,
    pub texture_archive: u16,
    pub texture_record: u16,
    pub faction_id: u16,
    #[serde(default)]
    pub flags: u8,
}

impl FlatRecord {
    pub const RECORD_SIZE: usize = 17;

    /// Parse a single record from the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < Self::RECORD_SIZE {
            return Err(Error::InvalidRecord(format!(
                "flat record needs {} bytes, got {}",
                Self::RECORD_SIZE,
                data.len()
            )));
        }

        let mut cursor = Cursor::new(data);
        let x = cursor.read_i32::<LittleEndian>()?;
        let y = cursor.read_i32::<LittleEndian>()?;
        let z = cursor.read_i32::<LittleEndian>()?;
        let texture_bitfield = cursor.read_u16::<LittleEndian>()?;
        let faction_id = cursor.read_u16::<LittleEndian>()?;
        let flags = cursor.read_u8()?;

        Ok(FlatRecord {
            x,
            y,
            z,
            texture_archive: texture_bitfield >> 7,
            texture_record: texture_bitfield & 0x7F,
            faction_id,
            flags,
        })
    }

    /// Parse `count` consecutive records
    pub fn parse_list(data: &[u8], count: usize) -> Result<Vec<Self>> {
        let needed = count.checked_mul(Self::RECORD_SIZE).ok_or_else(|| {
            Error::InvalidRecord(format!("flat record count {} is too large", count))
        })?;
        if data.len() < needed {
            return Err(Error::InvalidRecord(format!(
                "{} flat records need {} bytes, got {}",
                count,
                needed,
                data.len()
            )));
        }
        data.chunks_exact(Self::RECORD_SIZE)
            .take(count)
            .map(Self::parse)
            .collect()
    }
}

/// Flat lists are stored either as structured records or as packed bytes
pub(crate) fn deserialize_flats<'de, D>(deserializer: D) -> std::result::Result<Vec<FlatRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlatList {
        Records(Vec<FlatRecord>),
        Packed(Vec<u8>),
    }

    match FlatList::deserialize(deserializer)? {
        FlatList::Records(records) => Ok(records),
        FlatList::Packed(bytes) => {
            if bytes.len() % FlatRecord::RECORD_SIZE != 0 {
                return Err(serde::de::Error::custom(format!(
                    "packed flat data length {} is not a multiple of {}",
                    bytes.len(),
                    FlatRecord::RECORD_SIZE
                )));
            }
            FlatRecord::parse_list(&bytes, bytes.len() / FlatRecord::RECORD_SIZE)
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed_flat(archive: u16, record: u16, faction: u16) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&10i32.to_le_bytes());
        data.extend_from_slice(&(-20i32).to_le_bytes());
        data.extend_from_slice(&30i32.to_le_bytes());
        data.extend_from_slice(&((archive << 7) | record).to_le_bytes());
        data.extend_from_slice(&faction.to_le_bytes());
        data.push(0x01);
        data
    }

    #[test]
    fn test_ext_header_accessors() {
        let header = DungeonExtHeader::parse(&[0, 0, 14, 0, 0, 200, 9, 18, 0xFA, 0x00]).unwrap();
        assert_eq!(header.dungeon_type(), DungeonType::DragonsDen);
        assert_eq!(header.aux_value(), 200);
        assert_eq!(header.value_b(), 9);
        assert_eq!(header.quest_location_count(), 18);
    }

    #[test]
    fn test_ext_header_too_short() {
        assert!(DungeonExtHeader::parse(&[0, 0, 1]).is_err());
    }

    #[test]
    fn test_ext_header_empty_or_truncated_buffer_is_absent() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "deserialize_ext_header")]
            ext: Option<DungeonExtHeader>,
        }

        let empty: Holder = serde_json::from_str(r#"{"ext": []}"#).unwrap();
        assert!(empty.ext.is_none());
        let missing: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(missing.ext.is_none());
        let truncated: Holder = serde_json::from_str(r#"{"ext": [0,0,3,0,0,1,2,3]}"#).unwrap();
        assert!(truncated.ext.is_none());
        let present: Holder =
            serde_json::from_str(r#"{"ext": [0,0,3,0,0,1,2,3,250,0]}"#).unwrap();
        assert_eq!(present.ext.unwrap().dungeon_type(), DungeonType::Prison);
    }

    #[test]
    fn test_flat_record_parse() {
        let flat = FlatRecord::parse(&packed_flat(210, 5, 7)).unwrap();
        assert_eq!(flat.x, 10);
        assert_eq!(flat.y, -20);
        assert_eq!(flat.z, 30);
        assert_eq!(flat.texture_archive, 210);
        assert_eq!(flat.texture_record, 5);
        assert_eq!(flat.faction_id, 7);
        assert_eq!(flat.flags, 1);
    }

    #[test]
    fn test_flat_record_parse_list() {
        let mut data = packed_flat(100, 2, 9);
        data.extend(packed_flat(101, 3, 0));
        let flats = FlatRecord::parse_list(&data, 2).unwrap();
        assert_eq!(flats.len(), 2);
        assert_eq!(flats[1].texture_archive, 101);
        assert!(FlatRecord::parse_list(&data, 3).is_err());
    }

    #[test]
    fn test_flat_record_parse_list_huge_count() {
        let data = packed_flat(1, 1, 1);
        assert!(matches!(
            FlatRecord::parse_list(&data, usize::MAX),
            Err(Error::InvalidRecord(_))
        ));
    }
}
