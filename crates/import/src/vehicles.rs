//! Vehicle spreadsheet rows: lossy import, canonical export.

use std::io::{Read, Write};

use fleetstock_core::ModelKey;
use fleetstock_inventory::VehicleItem;

use crate::ImportError;
use crate::columns::{ColumnMap, Field};

/// Result of importing one spreadsheet.
#[derive(Debug)]
pub struct ImportOutcome {
    pub items: Vec<VehicleItem>,
    /// Data rows in the file (excluding the header).
    pub rows_read: usize,
    /// Rows dropped because every cell was blank.
    pub rows_skipped: usize,
    /// Cells that were present but malformed and fell back to a default.
    pub cells_coerced: usize,
}

/// Import vehicle rows from CSV data.
///
/// Malformed cells coerce to defaults (empty string / zero / unknown) and
/// negative numbers clamp to zero; only an unreadable file or one with no
/// recognizable header is an error, in which case the caller keeps its
/// existing data.
pub fn import_vehicles<R: Read>(reader: R) -> Result<ImportOutcome, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let map = ColumnMap::detect(&headers).ok_or(ImportError::NoUsableHeader)?;

    let mut outcome = ImportOutcome {
        items: Vec::new(),
        rows_read: 0,
        rows_skipped: 0,
        cells_coerced: 0,
    };

    for (row_no, record) in csv_reader.records().enumerate() {
        let record = record?;
        outcome.rows_read += 1;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            outcome.rows_skipped += 1;
            continue;
        }

        let text = |field: Field| map.cell(&record, field).unwrap_or("").to_string();
        let mut coerced = |field: Field, raw: &str| {
            outcome.cells_coerced += 1;
            tracing::warn!(row = row_no + 1, ?field, raw, "coerced malformed cell");
        };

        let stock = match map.cell(&record, Field::AvailableStock) {
            None => 0,
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => value.round() as u32,
                _ => {
                    coerced(Field::AvailableStock, raw);
                    0
                }
            },
        };

        let burn_rate = match map.cell(&record, Field::BurnRate) {
            None => 0.0,
            Some(raw) => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => value,
                _ => {
                    coerced(Field::BurnRate, raw);
                    0.0
                }
            },
        };

        let mut item = VehicleItem::new(
            text(Field::Brand),
            text(Field::Model),
            text(Field::Version),
            stock,
            burn_rate,
        )?;
        if let Some(raw_id) = map.cell(&record, Field::ModelId) {
            item = item.with_external_key(ModelKey::from_external(raw_id));
        }
        outcome.items.push(item);
    }

    tracing::info!(
        rows = outcome.rows_read,
        imported = outcome.items.len(),
        skipped = outcome.rows_skipped,
        coerced = outcome.cells_coerced,
        "imported vehicle spreadsheet"
    );
    Ok(outcome)
}

/// Export the canonical columns, plus the entered lead time and model key.
pub fn export_vehicles<W: Write>(writer: W, items: &[VehicleItem]) -> Result<(), ImportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Brand",
        "Model",
        "Version",
        "Available Stock",
        "Burn Rate (per week)",
        "Factory Lead Time (weeks)",
        "Model ID",
    ])?;
    for item in items {
        csv_writer.write_record([
            item.brand().to_string(),
            item.model().to_string(),
            item.version().to_string(),
            item.available_stock().to_string(),
            item.burn_rate().to_string(),
            item.factory_lead_time()
                .map(|weeks| weeks.to_string())
                .unwrap_or_default(),
            item.model_key().to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
