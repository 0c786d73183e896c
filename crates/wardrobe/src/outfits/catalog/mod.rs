//! CSV import of wardrobe inventories and wear logs.
//!
//! Garments CSV: `wearer_id,id,type,color,category,added_at` (`category` and `added_at` may be
//! blank). Wear-log CSV: `wearer_id,color[,worn_on]`, one row per worn garment in chronological
//! order.

mod parser;

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use tracing::info;

use super::domain::{ColorUsageRecord, Garment, GarmentCategory, GarmentId, GarmentKind, WearerId};
use super::history::tally_wear_events;
use parser::{parse_rows, parse_timestamp, GarmentRow, WearRow};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read wardrobe export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid wardrobe CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown garment category '{value}'")]
    UnknownCategory { row: usize, value: String },
    #[error("row {row}: garment type '{garment_type}' has no default category, set one explicitly")]
    MissingCategory { row: usize, garment_type: String },
    #[error("row {row}: unparseable added_at '{value}'")]
    InvalidTimestamp { row: usize, value: String },
    #[error("garment '{garment_id}' listed twice for wearer '{wearer_id}'")]
    DuplicateGarment {
        wearer_id: String,
        garment_id: String,
    },
}

/// Garments grouped by wearer, in file order.
pub type WardrobeInventory = BTreeMap<WearerId, Vec<Garment>>;

/// Color histories grouped by wearer.
pub type ColorHistories = BTreeMap<WearerId, ColorUsageRecord>;

pub struct WardrobeImporter;

impl WardrobeImporter {
    pub fn garments_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<WardrobeInventory, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::garments_from_reader(file)
    }

    pub fn garments_from_reader<R: Read>(
        reader: R,
    ) -> Result<WardrobeInventory, CatalogImportError> {
        let rows: Vec<GarmentRow> = parse_rows(reader)?;
        let mut inventory = WardrobeInventory::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();

        for (index, row) in rows.into_iter().enumerate() {
            let row_number = index + 1;
            if !seen.insert((row.wearer_id.clone(), row.id.clone())) {
                return Err(CatalogImportError::DuplicateGarment {
                    wearer_id: row.wearer_id,
                    garment_id: row.id,
                });
            }

            let wearer_id = WearerId(row.wearer_id.clone());
            let garment = garment_from_row(row_number, row)?;
            inventory.entry(wearer_id).or_default().push(garment);
        }

        info!(
            wearers = inventory.len(),
            garments = inventory.values().map(Vec::len).sum::<usize>(),
            "wardrobe inventory imported"
        );

        Ok(inventory)
    }

    pub fn wear_log_from_path<P: AsRef<Path>>(path: P) -> Result<ColorHistories, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::wear_log_from_reader(file)
    }

    pub fn wear_log_from_reader<R: Read>(reader: R) -> Result<ColorHistories, CatalogImportError> {
        let rows: Vec<WearRow> = parse_rows(reader)?;
        let mut events: BTreeMap<WearerId, Vec<String>> = BTreeMap::new();

        for row in rows {
            events
                .entry(WearerId(row.wearer_id))
                .or_default()
                .push(row.color);
        }

        let histories: ColorHistories = events
            .into_iter()
            .map(|(wearer_id, colors)| (wearer_id, tally_wear_events(colors)))
            .collect();

        info!(wearers = histories.len(), "wear log imported");
        Ok(histories)
    }
}

fn garment_from_row(row_number: usize, row: GarmentRow) -> Result<Garment, CatalogImportError> {
    let kind = GarmentKind::from(row.garment_type.as_str());

    let category = match (&row.category, kind.known()) {
        (Some(value), _) => GarmentCategory::from_label(value).ok_or_else(|| {
            CatalogImportError::UnknownCategory {
                row: row_number,
                value: value.clone(),
            }
        })?,
        (None, Some(known)) => known.default_category(),
        (None, None) => {
            return Err(CatalogImportError::MissingCategory {
                row: row_number,
                garment_type: row.garment_type,
            })
        }
    };

    let added_at = match row.added_at {
        Some(value) => Some(parse_timestamp(&value).ok_or_else(|| {
            CatalogImportError::InvalidTimestamp {
                row: row_number,
                value: value.clone(),
            }
        })?),
        None => None,
    };

    Ok(Garment {
        id: GarmentId(row.id),
        kind,
        color: row.color,
        category,
        added_at,
    })
}
