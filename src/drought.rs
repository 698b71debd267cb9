//! Weekly drought index table: loading, filtering and chart labels.
//!
//! The table holds one row per region and week with three vegetation
//! indices: VCI (vegetation condition), TCI (temperature condition) and VHI
//! (vegetation health). Regions are the 25 Ukrainian oblasts numbered 1..=25.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

pub const FIRST_YEAR: u32 = 1981;
pub const LAST_YEAR: u32 = 2023;
pub const WEEKS_PER_YEAR: u32 = 52;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub year: u32,
    pub week: u32,
    #[serde(rename = "ID")]
    pub region: u32,
    #[serde(rename = "VCI")]
    pub vci: f64,
    #[serde(rename = "TCI")]
    pub tci: f64,
    #[serde(rename = "VHI")]
    pub vhi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexKind {
    #[serde(rename = "VCI")]
    Vci,
    #[serde(rename = "TCI")]
    Tci,
    #[serde(rename = "VHI")]
    Vhi,
}

impl IndexKind {
    pub fn value(&self, record: &IndexRecord) -> f64 {
        match self {
            IndexKind::Vci => record.vci,
            IndexKind::Tci => record.tci,
            IndexKind::Vhi => record.vhi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Vci => "VCI",
            IndexKind::Tci => "TCI",
            IndexKind::Vhi => "VHI",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "VCI" => Ok(IndexKind::Vci),
            "TCI" => Ok(IndexKind::Tci),
            "VHI" => Ok(IndexKind::Vhi),
            _ => Err(Error::invalid("index", format!("unknown index `{s}`"))),
        }
    }
}

/// Selection of one region's weeks within one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub year: u32,
    pub region: u32,
    pub start_week: u32,
    pub end_week: u32,
}

impl Query {
    pub fn matches(&self, record: &IndexRecord) -> bool {
        record.year == self.year
            && record.region == self.region
            && (self.start_week..=self.end_week).contains(&record.week)
    }
}

/// Reads records from CSV with a `year,week,ID,VCI,TCI,VHI` header.
///
/// Other columns are ignored.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<IndexRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<IndexRecord>, csv::Error>>()?;
    Ok(records)
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<IndexRecord>> {
    let file = std::fs::File::open(path.as_ref())?;
    let records = read_records(file)?;
    log::info!(
        "loaded {} index records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Records matching `query`, in their original order.
pub fn filter(records: &[IndexRecord], query: &Query) -> Vec<IndexRecord> {
    records.iter().filter(|r| query.matches(r)).copied().collect()
}

/// Region name in the genitive case, as used in chart titles.
pub fn region_name(region: u32) -> Option<&'static str> {
    let name = match region {
        1 => "Вінничини",
        2 => "Волині",
        3 => "Дніпропетровщини",
        4 => "Донеччини",
        5 => "Житомирщини",
        6 => "Закарпаття",
        7 => "Запоріжжя",
        8 => "Івано-Франківщини",
        9 => "Київщини",
        10 => "Кіровоградщини",
        11 => "Луганщини",
        12 => "Львівщини",
        13 => "Миколаївщини",
        14 => "Одещини",
        15 => "Полтавщини",
        16 => "Рівненщини",
        17 => "Сумщини",
        18 => "Тернопільщини",
        19 => "Харківщини",
        20 => "Херсонщини",
        21 => "Хмельницька",
        22 => "Черкащини",
        23 => "Чернівців",
        24 => "Чернігівщини",
        25 => "Криму",
        _ => return None,
    };
    Some(name)
}

pub fn chart_title(kind: IndexKind, query: &Query) -> String {
    format!(
        "{kind} графік для {}, {} рік, {}-{} тижні",
        region_name(query.region).unwrap_or(""),
        query.year,
        query.start_week,
        query.end_week
    )
}
