//! Procurement record: one ordered vehicle and its delivery milestones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fleetstock_core::{Entity, RecordId};

/// Milestone dates owned by the leaseco.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeasecoDates {
    pub request_date: Option<NaiveDate>,
    pub etd_date: Option<NaiveDate>,
    pub registration_start_date: Option<NaiveDate>,
    pub delivery_ready_date: Option<NaiveDate>,
}

/// GPS tracker installation milestones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerDates {
    pub request_date: Option<NaiveDate>,
    pub estimated_installation_date: Option<NaiveDate>,
    pub actual_installation_date: Option<NaiveDate>,
}

/// Delivery dealer contact information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerInfo {
    pub dealer_name: Option<String>,
    pub contact_person: Option<String>,
    pub phone_email: Option<String>,
}

/// One procurement operation, as tracked in the tabular view.
///
/// Required fields are what every row carries; the optional groups fill in as
/// the operation progresses (a car gets a VIN once built, a tracker once
/// installed, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementRecord {
    pub id: RecordId,
    pub brand: String,
    pub model: String,
    pub version: String,
    pub leaseco: String,
    pub client_name: String,
    pub city: String,
    pub internal_usage_date: NaiveDate,
    pub promised_date: NaiveDate,
    pub displayed_date_to_client: NaiveDate,
    /// True when the internal usage date slipped past the promised date.
    pub delayed: bool,
    pub request_date: NaiveDate,
    pub promised_date_at_signing: NaiveDate,
    pub current_estimated_delivery: NaiveDate,
    pub desired_delivery_date: NaiveDate,
    pub contract_end_date: NaiveDate,

    pub color: Option<String>,
    pub fleet_car_id: Option<String>,
    pub status: Option<String>,
    pub project: Option<String>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub contract_reference: Option<String>,
    pub availability_date: Option<NaiveDate>,
    pub client_comments: Option<String>,

    #[serde(default)]
    pub leaseco_dates: LeasecoDates,
    #[serde(default)]
    pub tracker_dates: TrackerDates,
    #[serde(default)]
    pub dealer: DealerInfo,
}

impl Entity for ProcurementRecord {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Distinct, sorted values of one field across a record set.
///
/// Used to populate the select-style filters (brand, model, leaseco, city).
pub fn distinct_values<'a>(
    records: &'a [ProcurementRecord],
    field: impl Fn(&'a ProcurementRecord) -> &'a str,
) -> Vec<String> {
    let mut values: Vec<String> = records.iter().map(|r| field(r).to_string()).collect();
    values.sort();
    values.dedup();
    values
}
