//! Filter engine for the procurement table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::ProcurementRecord;

/// Inclusive from/to date range; either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Whether `date` passes this range constraint.
    ///
    /// An unbounded range passes everything; a bounded range rejects records
    /// where the date is not set at all.
    pub fn accepts(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Active filters for the procurement view.
///
/// `None` / unbounded means "all" for that field. A record must pass every
/// populated filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcurementFilter {
    /// Select-style, exact (case-insensitive).
    pub brand: Option<String>,
    pub model: Option<String>,
    pub leaseco: Option<String>,
    pub city: Option<String>,

    /// Free-text, substring (case-insensitive).
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub contract_reference: Option<String>,

    pub delayed: Option<bool>,

    pub availability: DateRange,
    pub tracker_installation: DateRange,
    pub desired_delivery: DateRange,
}

fn select_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        None => true,
        Some(wanted) => value.eq_ignore_ascii_case(wanted),
    }
}

fn substring_matches(filter: Option<&str>, value: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(needle) if needle.trim().is_empty() => true,
        Some(needle) => match value {
            // A blank stored value never matches a populated filter.
            Some(haystack) => haystack.to_lowercase().contains(&needle.trim().to_lowercase()),
            None => false,
        },
    }
}

impl ProcurementFilter {
    /// No constraints; passes every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, record: &ProcurementRecord) -> bool {
        select_matches(self.brand.as_deref(), &record.brand)
            && select_matches(self.model.as_deref(), &record.model)
            && select_matches(self.leaseco.as_deref(), &record.leaseco)
            && select_matches(self.city.as_deref(), &record.city)
            && substring_matches(self.license_plate.as_deref(), record.license_plate.as_deref())
            && substring_matches(self.vin.as_deref(), record.vin.as_deref())
            && substring_matches(
                self.contract_reference.as_deref(),
                record.contract_reference.as_deref(),
            )
            && self.delayed.is_none_or(|wanted| record.delayed == wanted)
            && self.availability.accepts(record.availability_date)
            && self
                .tracker_installation
                .accepts(record.tracker_dates.estimated_installation_date)
            && self
                .desired_delivery
                .accepts(Some(record.desired_delivery_date))
    }

    /// Records passing every populated filter, in input order.
    pub fn apply<'a>(&self, records: &'a [ProcurementRecord]) -> Vec<&'a ProcurementRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_records;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_filter_passes_every_record() {
        let records = sample_records();
        assert_eq!(ProcurementFilter::all().apply(&records).len(), records.len());
    }

    #[test]
    fn brand_select_is_exact_and_case_insensitive() {
        let records = sample_records();
        let filter = ProcurementFilter {
            brand: Some("bmw".to_string()),
            ..Default::default()
        };
        let hits = filter.apply(&records);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].brand, "BMW");
    }

    #[test]
    fn vin_filter_matches_substrings() {
        let records = sample_records();
        let filter = ProcurementFilter {
            vin: Some("wba".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 1);
    }

    #[test]
    fn populated_text_filter_rejects_records_without_the_field() {
        let records = sample_records();
        // Record 2 has an empty license plate.
        let filter = ProcurementFilter {
            license_plate: Some("ABC".to_string()),
            ..Default::default()
        };
        let hits = filter.apply(&records);
        assert!(hits.iter().all(|r| r.license_plate.is_some()));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn blank_text_filter_is_treated_as_all() {
        let records = sample_records();
        let filter = ProcurementFilter {
            vin: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), records.len());
    }

    #[test]
    fn delayed_filter_splits_the_sample_set() {
        let records = sample_records();
        let delayed = ProcurementFilter {
            delayed: Some(true),
            ..Default::default()
        };
        let on_time = ProcurementFilter {
            delayed: Some(false),
            ..Default::default()
        };
        assert_eq!(delayed.apply(&records).len(), 2);
        assert_eq!(on_time.apply(&records).len(), 1);
    }

    #[test]
    fn filters_combine_conjunctively() {
        let records = sample_records();
        let filter = ProcurementFilter {
            brand: Some("BMW".to_string()),
            delayed: Some(false),
            ..Default::default()
        };
        // The only BMW in the sample set is delayed.
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let range = DateRange::new(Some(date(2024, 2, 5)), Some(date(2024, 2, 25)));
        assert!(range.accepts(Some(date(2024, 2, 5))));
        assert!(range.accepts(Some(date(2024, 2, 25))));
        assert!(!range.accepts(Some(date(2024, 2, 26))));
    }

    #[test]
    fn bounded_range_rejects_missing_dates() {
        let range = DateRange::new(Some(date(2024, 1, 1)), None);
        assert!(!range.accepts(None));
        assert!(DateRange::default().accepts(None));
    }

    #[test]
    fn availability_range_filters_records() {
        let records = sample_records();
        let filter = ProcurementFilter {
            availability: DateRange::new(Some(date(2024, 2, 10)), None),
            ..Default::default()
        };
        // Availability dates in the sample: Feb 5, Feb 18, Feb 25.
        assert_eq!(filter.apply(&records).len(), 2);
    }

    #[test]
    fn tracker_installation_range_uses_the_estimated_date() {
        let records = sample_records();
        let filter = ProcurementFilter {
            tracker_installation: DateRange::new(Some(date(2024, 3, 1)), None),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 1);
    }
}
