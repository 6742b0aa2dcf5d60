//! Header detection: mapping spreadsheet columns onto vehicle fields.

use csv::StringRecord;

/// Vehicle fields a spreadsheet column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Brand,
    Model,
    Version,
    AvailableStock,
    BurnRate,
    /// Optional identifier used to recall a previously entered lead time.
    ModelId,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::Brand,
        Field::Model,
        Field::Version,
        Field::AvailableStock,
        Field::BurnRate,
        Field::ModelId,
    ];

    /// Recognized header spellings, in normalized form (see [`normalize_header`]).
    fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Brand => &["brand", "make"],
            Field::Model => &["model"],
            Field::Version => &["version", "trim", "variant"],
            Field::AvailableStock => &["availablestock", "stock", "units", "available"],
            Field::BurnRate => &[
                "burnrate",
                "burnrateperweek",
                "weeklyburnrate",
                "weeklyburn",
            ],
            Field::ModelId => &["modelid", "modelidentifier", "id"],
        }
    }
}

/// Normalize a header cell: lowercase, keep only ascii alphanumerics.
///
/// Collapses "Available Stock", "available_stock" and "Available-Stock" onto
/// one spelling so the alias lists stay short.
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolved column positions for one spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    brand: Option<usize>,
    model: Option<usize>,
    version: Option<usize>,
    available_stock: Option<usize>,
    burn_rate: Option<usize>,
    model_id: Option<usize>,
}

impl ColumnMap {
    /// Detect field positions from the header row.
    ///
    /// Returns `None` when no column is recognized at all (the file is not a
    /// vehicle spreadsheet). First matching column wins per field.
    pub fn detect(headers: &StringRecord) -> Option<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

        let position = |field: Field| {
            normalized
                .iter()
                .position(|h| field.aliases().contains(&h.as_str()))
        };

        let map = Self {
            brand: position(Field::Brand),
            model: position(Field::Model),
            version: position(Field::Version),
            available_stock: position(Field::AvailableStock),
            burn_rate: position(Field::BurnRate),
            model_id: position(Field::ModelId),
        };

        if Field::ALL.iter().all(|&f| map.index(f).is_none()) {
            return None;
        }
        Some(map)
    }

    pub fn index(&self, field: Field) -> Option<usize> {
        match field {
            Field::Brand => self.brand,
            Field::Model => self.model,
            Field::Version => self.version,
            Field::AvailableStock => self.available_stock,
            Field::BurnRate => self.burn_rate,
            Field::ModelId => self.model_id,
        }
    }

    /// Cell for `field` in `record`, if the column exists and the cell is
    /// non-empty after trimming.
    pub fn cell<'a>(&self, record: &'a StringRecord, field: Field) -> Option<&'a str> {
        let idx = self.index(field)?;
        let raw = record.get(idx)?.trim();
        if raw.is_empty() { None } else { Some(raw) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cells: &[&str]) -> StringRecord {
        StringRecord::from(cells.to_vec())
    }

    #[test]
    fn canonical_headers_are_detected() {
        let map = ColumnMap::detect(&headers(&[
            "Brand",
            "Model",
            "Version",
            "Available Stock",
            "Burn Rate",
        ]))
        .unwrap();
        assert_eq!(map.index(Field::Brand), Some(0));
        assert_eq!(map.index(Field::AvailableStock), Some(3));
        assert_eq!(map.index(Field::BurnRate), Some(4));
        assert_eq!(map.index(Field::ModelId), None);
    }

    #[test]
    fn detection_tolerates_case_underscores_and_punctuation() {
        let map = ColumnMap::detect(&headers(&[
            "MAKE",
            "model",
            "Trim",
            "available_stock",
            "Burn Rate (per week)",
            "Model-ID",
        ]))
        .unwrap();
        assert_eq!(map.index(Field::Brand), Some(0));
        assert_eq!(map.index(Field::Version), Some(2));
        assert_eq!(map.index(Field::BurnRate), Some(4));
        assert_eq!(map.index(Field::ModelId), Some(5));
    }

    #[test]
    fn unrelated_headers_yield_no_map() {
        assert_eq!(ColumnMap::detect(&headers(&["foo", "bar", "baz"])), None);
    }

    #[test]
    fn a_single_recognized_column_is_enough() {
        let map = ColumnMap::detect(&headers(&["notes", "Brand"])).unwrap();
        assert_eq!(map.index(Field::Brand), Some(1));
        assert_eq!(map.index(Field::Model), None);
    }

    #[test]
    fn empty_cells_read_as_absent() {
        let map = ColumnMap::detect(&headers(&["Brand", "Model"])).unwrap();
        let row = StringRecord::from(vec!["  ", "Golf"]);
        assert_eq!(map.cell(&row, Field::Brand), None);
        assert_eq!(map.cell(&row, Field::Model), Some("Golf"));
    }
}
