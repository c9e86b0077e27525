use super::types::{GainRates, GutsRate, OffsetBonusTable, Stat, StatVector};
use crate::error::{MonrankError, MrResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use strum::EnumCount;
use tracing::{debug, info};

/// Max-bonus header names of the offset table, by canonical stat.
pub const MAX_BONUS_COLUMNS: [(Stat, &str); Stat::COUNT] = [
    (Stat::Life, "Unused"),
    (Stat::Power, "Pow"),
    (Stat::Intelligence, "Int"),
    (Stat::Skill, "Ski"),
    (Stat::Speed, "Spd"),
    (Stat::Defense, "Def"),
    (Stat::Lifespan, "Lif/Lifespan"),
];

/// One monster identity and everything the scorer needs about it.
#[derive(Debug, Clone, Serialize)]
pub struct MonsterRecord {
    pub id: u32,
    pub name: String,
    pub main: String,
    pub sub: String,
    pub stats: StatVector,
    pub gains: GainRates,
    pub guts_rate: GutsRate,
    /// True when the roster's "No Offset" column is 0.
    pub offset_eligible: bool,
}

/// A pre-rolled entry and the two offset indices it drew.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryOffsets {
    pub entry_id: u64,
    pub offset1: usize,
    pub offset2: usize,
}

#[derive(Debug, Deserialize)]
struct MonsterRow {
    #[serde(rename = "Monster ID")]
    monster_id: u32,
    #[serde(rename = "Name-English", default)]
    name: String,
    #[serde(rename = "Main", default)]
    main: String,
    #[serde(rename = "Sub", default)]
    sub: String,

    #[serde(rename = "Lif")]
    life: Option<f64>,
    #[serde(rename = "Pow")]
    power: Option<f64>,
    #[serde(rename = "Int")]
    intelligence: Option<f64>,
    #[serde(rename = "Ski")]
    skill: Option<f64>,
    #[serde(rename = "Spd")]
    speed: Option<f64>,
    #[serde(rename = "Def")]
    defense: Option<f64>,
    #[serde(rename = "Lifespan")]
    lifespan: Option<f64>,

    #[serde(rename = "Pow gain")]
    power_gain: Option<f64>,
    #[serde(rename = "Int gain")]
    int_gain: Option<f64>,
    #[serde(rename = "Ski gain")]
    skill_gain: Option<f64>,
    #[serde(rename = "Spd gain")]
    speed_gain: Option<f64>,

    #[serde(rename = "Guts Rate")]
    guts_rate: Option<f64>,
    #[serde(rename = "No Offset")]
    no_offset: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct EntryRow {
    #[serde(rename = "Entry ID")]
    entry_id: Option<f64>,
    #[serde(rename = "Offset 1")]
    offset1: Option<f64>,
    #[serde(rename = "Offset 2")]
    offset2: Option<f64>,
}

fn require(value: Option<f64>, id: u32, column: &str) -> MrResult<f64> {
    match value {
        None => Err(MonrankError::Validation(format!(
            "monster {}: missing '{}'",
            id, column
        ))),
        Some(v) if !v.is_finite() => Err(MonrankError::Validation(format!(
            "monster {}: '{}' is not finite ({})",
            id, column, v
        ))),
        Some(v) => Ok(v),
    }
}

fn whole_number(value: f64, what: &str) -> MrResult<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as u64)
    } else {
        Err(MonrankError::Validation(format!(
            "{} must be a non-negative integer, got {}",
            what, value
        )))
    }
}

impl MonsterRow {
    fn into_record(self) -> MrResult<MonsterRecord> {
        let id = self.monster_id;

        let stats = StatVector {
            life: require(self.life, id, "Lif")?,
            power: require(self.power, id, "Pow")?,
            intelligence: require(self.intelligence, id, "Int")?,
            skill: require(self.skill, id, "Ski")?,
            speed: require(self.speed, id, "Spd")?,
            defense: require(self.defense, id, "Def")?,
            lifespan: require(self.lifespan, id, "Lifespan")?,
        };

        let gains = GainRates {
            power: require(self.power_gain, id, "Pow gain")?,
            intelligence: require(self.int_gain, id, "Int gain")?,
            skill: require(self.skill_gain, id, "Ski gain")?,
            speed: require(self.speed_gain, id, "Spd gain")?,
        };

        let guts = require(self.guts_rate, id, "Guts Rate")?;
        if guts < 0.0 {
            return Err(MonrankError::Validation(format!(
                "monster {}: 'Guts Rate' is negative ({})",
                id, guts
            )));
        }

        Ok(MonsterRecord {
            id,
            name: self.name,
            main: self.main,
            sub: self.sub,
            stats,
            gains,
            guts_rate: GutsRate::new(guts)?,
            offset_eligible: self.no_offset == Some(0.0),
        })
    }
}

/// Parses one roster CSV. Header whitespace (including embedded newlines)
/// is trimmed so `"Lifespan\n"` reads as `Lifespan`.
pub fn read_roster<R: Read>(reader: R) -> MrResult<Vec<MonsterRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut roster = Vec::new();
    for result in rdr.deserialize::<MonsterRow>() {
        roster.push(result?.into_record()?);
    }
    Ok(roster)
}

/// Loads and concatenates roster CSVs in the order given.
pub fn load_roster<P: AsRef<Path>>(paths: &[P]) -> MrResult<Vec<MonsterRecord>> {
    let mut roster = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let part = read_roster(File::open(path)?)?;
        info!("Loaded {} monsters from {}", part.len(), path.display());
        roster.extend(part);
    }
    Ok(roster)
}

pub fn find_monster(roster: &[MonsterRecord], id: u32) -> MrResult<&MonsterRecord> {
    roster
        .iter()
        .find(|m| m.id == id)
        .ok_or(MonrankError::UnknownMonster(id))
}

/// Parses the offset bonus table. The first line is a group banner; the
/// header repeats every column name once for the min group and once for the
/// max group, and only the max group is read.
pub fn read_offset_table<R: Read>(reader: R) -> MrResult<OffsetBonusTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = rdr.records();

    let _banner = records
        .next()
        .ok_or_else(|| MonrankError::Validation("offset table is empty".to_string()))??;
    let header = records
        .next()
        .ok_or_else(|| MonrankError::Validation("offset table has no header row".to_string()))??;

    let mut columns = Vec::with_capacity(Stat::COUNT);
    for (stat, name) in MAX_BONUS_COLUMNS {
        let idx = header
            .iter()
            .enumerate()
            .filter(|(_, h)| *h == name)
            .map(|(i, _)| i)
            .nth(1)
            .ok_or_else(|| {
                MonrankError::Config(format!(
                    "offset table has no max-bonus '{}' column",
                    name
                ))
            })?;
        columns.push((stat, idx));
    }
    debug!(?columns, "Offset table column mapping");

    let mut entries = Vec::new();
    for (row, result) in records.enumerate() {
        let rec = result?;
        let mut bonus = StatVector::default();
        for &(stat, idx) in &columns {
            let cell = rec.get(idx).unwrap_or("");
            let value: f64 = cell.parse().map_err(|_| {
                MonrankError::Validation(format!(
                    "offset {}: {} bonus '{}' is not a number",
                    row, stat, cell
                ))
            })?;
            bonus.set(stat, value);
        }
        entries.push(bonus);
    }

    OffsetBonusTable::new(entries)
}

pub fn load_offset_table<P: AsRef<Path>>(path: P) -> MrResult<OffsetBonusTable> {
    let path = path.as_ref();
    let table = read_offset_table(File::open(path)?)?;
    info!(
        "Loaded {} offset entries from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parses an entry list. Rows missing either offset are dropped.
pub fn read_entries<R: Read>(reader: R) -> MrResult<Vec<EntryOffsets>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut dropped = 0usize;
    for result in rdr.deserialize::<EntryRow>() {
        let row = result?;
        let (Some(o1), Some(o2)) = (row.offset1, row.offset2) else {
            dropped += 1;
            continue;
        };
        let entry_id = row
            .entry_id
            .ok_or_else(|| MonrankError::Validation("entry without 'Entry ID'".to_string()))?;
        let entry_id = whole_number(entry_id, "Entry ID")?;
        entries.push(EntryOffsets {
            entry_id,
            offset1: whole_number(o1, "Offset 1")? as usize,
            offset2: whole_number(o2, "Offset 2")? as usize,
        });
    }

    if dropped > 0 {
        debug!("Dropped {} entries without offsets", dropped);
    }
    Ok(entries)
}

pub fn load_entries<P: AsRef<Path>>(path: P) -> MrResult<Vec<EntryOffsets>> {
    let path = path.as_ref();
    let entries = read_entries(File::open(path)?)?;
    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}
