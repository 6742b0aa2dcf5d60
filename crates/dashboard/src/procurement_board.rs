//! Procurement view state.

use fleetstock_procurement::{ProcurementFilter, ProcurementRecord, distinct_values, sample};

/// The procurement table's component state: a record set plus the active
/// filters. Filtering is recomputed on read.
pub struct ProcurementBoard {
    records: Vec<ProcurementRecord>,
    filter: ProcurementFilter,
}

impl ProcurementBoard {
    pub fn new(records: Vec<ProcurementRecord>) -> Self {
        Self {
            records,
            filter: ProcurementFilter::all(),
        }
    }

    /// Board over the built-in sample operations.
    pub fn with_sample_data() -> Self {
        Self::new(sample::sample_records())
    }

    pub fn filter(&self) -> &ProcurementFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ProcurementFilter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter = ProcurementFilter::all();
    }

    /// Records passing the active filters, in input order.
    pub fn rows(&self) -> Vec<&ProcurementRecord> {
        self.filter.apply(&self.records)
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn brands(&self) -> Vec<String> {
        distinct_values(&self.records, |r| &r.brand)
    }

    pub fn models(&self) -> Vec<String> {
        distinct_values(&self.records, |r| &r.model)
    }

    pub fn leasecos(&self) -> Vec<String> {
        distinct_values(&self.records, |r| &r.leaseco)
    }

    pub fn cities(&self) -> Vec<String> {
        distinct_values(&self.records, |r| &r.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_board_shows_every_record() {
        let board = ProcurementBoard::with_sample_data();
        assert_eq!(board.rows().len(), board.total());
    }

    #[test]
    fn setting_and_clearing_filters_changes_the_row_set() {
        let mut board = ProcurementBoard::with_sample_data();
        board.set_filter(ProcurementFilter {
            city: Some("Madrid".to_string()),
            ..Default::default()
        });
        assert_eq!(board.rows().len(), 1);

        board.clear_filters();
        assert_eq!(board.rows().len(), board.total());
    }

    #[test]
    fn select_options_come_from_the_record_set() {
        let board = ProcurementBoard::with_sample_data();
        assert_eq!(board.brands(), vec!["Audi", "BMW", "Mercedes"]);
        assert_eq!(board.cities(), vec!["Barcelona", "Madrid", "Valencia"]);
    }
}
