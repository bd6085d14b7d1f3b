//! Monster career dump

use crate::archive::{ArchiveReader, MonsterCareer, Skill};

/// Flattened career template, in CSV column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerRow {
    pub name: String,
    pub hit_points_per_level: i32,
    /// Strength, Intelligence, Willpower, Agility, Endurance, Personality, Speed, Luck
    pub stats: [i32; 8],
    pub primary_skills: [Skill; 3],
    pub major_skills: [Skill; 3],
    pub minor_skills: [Skill; 6],
}

pub struct CareerDumper<'a> {
    archive: &'a dyn ArchiveReader,
}

impl<'a> CareerDumper<'a> {
    pub fn new(archive: &'a dyn ArchiveReader) -> Self {
        Self { archive }
    }

    /// One row per career in declared order, skipping the `None` sentinel
    pub fn dump_all(&self) -> Vec<CareerRow> {
        let careers = self.archive.careers();

        MonsterCareer::ALL
            .iter()
            .filter_map(|&career| careers.get(career))
            .map(|t| CareerRow {
                name: t.name.clone(),
                hit_points_per_level: t.hit_points_per_level,
                stats: [
                    t.strength,
                    t.intelligence,
                    t.willpower,
                    t.agility,
                    t.endurance,
                    t.personality,
                    t.speed,
                    t.luck,
                ],
                primary_skills: t.primary_skills,
                major_skills: t.major_skills,
                minor_skills: t.minor_skills,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{archive, template};

    #[test]
    fn test_dump_all_one_row_per_career() {
        let archive = archive(Vec::new(), Vec::new());
        let rows = CareerDumper::new(&archive).dump_all();

        assert_eq!(rows.len(), MonsterCareer::ALL.len());
        assert_eq!(rows[0].name, "Rat");
        assert_eq!(rows[41].name, "Lamia");
        assert!(rows.iter().all(|r| r.name != "None"));
    }

    #[test]
    fn test_dump_all_matches_templates() {
        let archive = archive(Vec::new(), Vec::new());
        let dumper = CareerDumper::new(&archive);
        let rows = dumper.dump_all();

        let expected = template(MonsterCareer::Vampire);
        let row = &rows[MonsterCareer::Vampire.ordinal().unwrap()];
        assert_eq!(row.name, expected.name);
        assert_eq!(row.hit_points_per_level, expected.hit_points_per_level);
        assert_eq!(row.stats[0], expected.strength);
        assert_eq!(row.stats[7], expected.luck);
        assert_eq!(row.minor_skills, expected.minor_skills);

        // Repeated dumps are identical
        assert_eq!(dumper.dump_all(), rows);
    }
}
