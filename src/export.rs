//! CSV export of query results
//!
//! Files are semicolon-delimited with a header row, written into a
//! caller-supplied output directory under fixed names.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::archive::ArchiveReader;
use crate::query::{CareerDumper, CareerRow, DungeonRow, DungeonScanner};

pub const CAREERS_FILENAME: &str = "careers.csv";
pub const DUNGEONS_FILENAME: &str = "dungeons.csv";
pub const DUNGEONS_EXTERIOR_FILENAME: &str = "dungeons_exterior.csv";

const CAREERS_HEADER: &str = "Name;HP;Strength;Intelligence;Willpower;Agility;Endurance;Personality;Speed;Luck;\
Primary 1;Primary 2;Primary 3;Major 1;Major 2;Major 3;Minor 1;Minor 2;Minor 3;Minor 4;Minor 5;Minor 6";
const DUNGEONS_HEADER: &str = "Region;Name;Type;Flags;Index;A;B;#Loc";
const DUNGEONS_EXTERIOR_HEADER: &str =
    "Region;Name;Type;Longitude;Latitude;Width;Height;Discovered;Hidden";

/// Render a career row in `careers.csv` column order
pub fn career_line(row: &CareerRow) -> String {
    let mut fields = Vec::with_capacity(22);
    fields.push(row.name.clone());
    fields.push(row.hit_points_per_level.to_string());
    fields.extend(row.stats.iter().map(|stat| stat.to_string()));
    fields.extend(
        row.primary_skills
            .iter()
            .chain(&row.major_skills)
            .chain(&row.minor_skills)
            .map(|skill| skill.to_string()),
    );
    fields.join(";")
}

/// Render a dungeon row in `dungeons.csv` column order; flags are uppercase hex
pub fn dungeon_line(row: &DungeonRow) -> String {
    format!(
        "{};{};{};{:X};{};{};{};{}",
        row.region_name,
        row.location_name,
        row.dungeon_type,
        row.flags,
        row.index,
        row.aux_value,
        row.value_b,
        row.quest_location_count
    )
}

/// Render a dungeon row in `dungeons_exterior.csv` column order
pub fn dungeon_exterior_line(row: &DungeonRow) -> String {
    let map = &row.map_entry;
    format!(
        "{};{};{};{};{};{};{};{};{}",
        row.region_name,
        row.location_name,
        row.dungeon_type,
        map.longitude,
        map.latitude,
        map.width,
        map.height,
        map.discovered,
        map.hidden
    )
}

/// Write a header and lines to `path`, flushing before returning
fn write_csv<I>(path: &Path, header: &str, lines: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", header)?;
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Dump every monster career to `careers.csv` in `output_dir`
pub fn dump_monster_careers(archive: &dyn ArchiveReader, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let rows = CareerDumper::new(archive).dump_all();
    let path = output_dir.join(CAREERS_FILENAME);
    write_csv(&path, CAREERS_HEADER, rows.iter().map(career_line))?;

    tracing::info!("Wrote {} careers to {}", rows.len(), path.display());
    Ok(path)
}

/// Dump dungeon data to `dungeons.csv` and `dungeons_exterior.csv` in `output_dir`
///
/// Returns the path of `dungeons.csv`.
pub fn dump_dungeon_data(archive: &dyn ArchiveReader, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let rows = DungeonScanner::new(archive).scan();

    let path = output_dir.join(DUNGEONS_FILENAME);
    write_csv(&path, DUNGEONS_HEADER, rows.iter().map(dungeon_line))?;

    let exterior_path = output_dir.join(DUNGEONS_EXTERIOR_FILENAME);
    write_csv(
        &exterior_path,
        DUNGEONS_EXTERIOR_HEADER,
        rows.iter().map(dungeon_exterior_line),
    )?;

    tracing::info!("Wrote {} dungeons to {}", rows.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{archive, dungeon_location, ext_header, region};

    #[test]
    fn test_careers_csv() {
        let dir = tempfile::tempdir().unwrap();
        let archive = archive(Vec::new(), Vec::new());

        let path = dump_monster_careers(&archive, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("careers.csv"));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 43);
        assert_eq!(lines[0], CAREERS_HEADER);
        assert_eq!(lines[0].split(';').count(), 22);
        assert_eq!(
            lines[1],
            "Rat;1;10;20;30;40;50;60;70;80;Dodging;HandToHand;Running;\
             Climbing;Swimming;Stealth;Jumping;Backstab;CriticalStrike;None;None;None"
        );
        assert!(lines.iter().skip(1).all(|l| l.split(';').count() == 22));
    }

    #[test]
    fn test_dungeons_csv() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested");
        let regions = vec![region(
            "Wayrest",
            vec![
                dungeon_location("Castle Wayrest", 3, Some(ext_header(11, 255, 9, 18))),
                dungeon_location("Skipped", 3, None),
            ],
            &[3],
        )];
        let archive = archive(regions, Vec::new());

        let path = dump_dungeon_data(&archive, &output).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Region;Name;Type;Flags;Index;A;B;#Loc\n\
             Wayrest;Castle Wayrest;RuinedCastle;1A2B;7;255;9;18\n"
        );

        let exterior = fs::read_to_string(output.join(DUNGEONS_EXTERIOR_FILENAME)).unwrap();
        assert_eq!(
            exterior,
            "Region;Name;Type;Longitude;Latitude;Width;Height;Discovered;Hidden\n\
             Wayrest;Castle Wayrest;RuinedCastle;30;60;2;3;true;false\n"
        );
    }

    #[test]
    fn test_dungeons_csv_header_only_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let archive = archive(Vec::new(), Vec::new());
        let path = dump_dungeon_data(&archive, dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "Region;Name;Type;Flags;Index;A;B;#Loc\n"
        );
    }
}
