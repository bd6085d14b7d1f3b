//! In-memory archive backed by decoded records

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::archive::model::{Block, CareerTemplate, Region};
use crate::archive::types::MonsterCareer;
use crate::archive::ArchiveReader;
use crate::error::{Error, Result};

/// Monster career templates, one per career in [`MonsterCareer::ALL`] order
///
/// Construction fails unless every career is present exactly once, so
/// lookups never miss.
#[derive(Debug, Clone)]
pub struct CareerTable {
    templates: Vec<CareerTemplate>,
}

impl CareerTable {
    pub fn new(templates: Vec<CareerTemplate>) -> Result<Self> {
        let mut slots: Vec<Option<CareerTemplate>> = vec![None; MonsterCareer::ALL.len()];

        for template in templates {
            let ordinal = template.career.ordinal().ok_or_else(|| {
                Error::InvalidArchive(format!(
                    "career template '{}' uses the None career",
                    template.name
                ))
            })?;
            if slots[ordinal].is_some() {
                return Err(Error::InvalidArchive(format!(
                    "duplicate career template for {}",
                    template.career
                )));
            }
            slots[ordinal] = Some(template);
        }

        let mut ordered = Vec::with_capacity(slots.len());
        for (career, slot) in MonsterCareer::ALL.iter().zip(slots) {
            match slot {
                Some(template) => ordered.push(template),
                None => {
                    return Err(Error::InvalidArchive(format!(
                        "missing career template for {}",
                        career
                    )))
                }
            }
        }

        Ok(Self { templates: ordered })
    }

    /// Template for a career; `None` only for the sentinel career
    pub fn get(&self, career: MonsterCareer) -> Option<&CareerTemplate> {
        career.ordinal().map(|ordinal| &self.templates[ordinal])
    }

    /// Templates in declared career order
    pub fn iter(&self) -> impl Iterator<Item = &CareerTemplate> {
        self.templates.iter()
    }
}

/// On-disk JSON form of an archive
#[derive(Debug, Deserialize)]
pub struct ArchiveSnapshot {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    pub monster_careers: Vec<CareerTemplate>,
}

/// Archive held entirely in memory
#[derive(Debug, Clone)]
pub struct MemoryArchive {
    regions: Vec<Region>,
    blocks: Vec<Block>,
    careers: CareerTable,
}

impl MemoryArchive {
    pub fn new(regions: Vec<Region>, blocks: Vec<Block>, careers: CareerTable) -> Self {
        Self {
            regions,
            blocks,
            careers,
        }
    }

    /// Load a JSON archive snapshot from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        let archive = Self::from_json(&data)?;
        tracing::debug!(
            "Loaded archive {}: {} regions, {} blocks",
            path.as_ref().display(),
            archive.regions.len(),
            archive.blocks.len()
        );
        Ok(archive)
    }

    pub fn from_json(data: &[u8]) -> Result<Self> {
        let snapshot: ArchiveSnapshot = serde_json::from_slice(data)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_snapshot(snapshot: ArchiveSnapshot) -> Result<Self> {
        let careers = CareerTable::new(snapshot.monster_careers)?;
        Ok(Self::new(snapshot.regions, snapshot.blocks, careers))
    }
}

impl ArchiveReader for MemoryArchive {
    fn region_count(&self) -> usize {
        self.regions.len()
    }

    fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    fn careers(&self) -> &CareerTable {
        &self.careers
    }
}
