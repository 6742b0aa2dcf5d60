//! Vehicle stock line and its mutation rules.

use serde::{Deserialize, Serialize};

use fleetstock_core::{DomainError, Entity, ModelKey, VehicleId};

/// A tracked vehicle stock line.
///
/// `burn_rate` is stored on a weekly basis (units consumed per week) and is
/// always >= 0; a burn rate of 0 means the stock never depletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleItem {
    id: VehicleId,
    brand: String,
    model: String,
    version: String,
    available_stock: u32,
    burn_rate: f64,
    /// Factory order lead time in whole weeks; `None` = unknown.
    factory_lead_time: Option<u32>,
    /// Spreadsheet-supplied model identifier, when the import carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    external_key: Option<ModelKey>,
}

impl VehicleItem {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        version: impl Into<String>,
        available_stock: u32,
        burn_rate: f64,
    ) -> Result<Self, DomainError> {
        if !burn_rate.is_finite() || burn_rate < 0.0 {
            return Err(DomainError::validation("burn rate must be finite and >= 0"));
        }
        Ok(Self {
            id: VehicleId::new(),
            brand: brand.into(),
            model: model.into(),
            version: version.into(),
            available_stock,
            burn_rate,
            factory_lead_time: None,
            external_key: None,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn available_stock(&self) -> u32 {
        self.available_stock
    }

    /// Weekly burn rate.
    pub fn burn_rate(&self) -> f64 {
        self.burn_rate
    }

    pub fn factory_lead_time(&self) -> Option<u32> {
        self.factory_lead_time
    }

    pub fn with_factory_lead_time(mut self, weeks: u32) -> Self {
        self.factory_lead_time = Some(weeks);
        self
    }

    pub fn with_external_key(mut self, key: ModelKey) -> Self {
        self.external_key = Some(key);
        self
    }

    pub fn set_factory_lead_time(&mut self, weeks: Option<u32>) {
        self.factory_lead_time = weeks;
    }

    /// Key used to remember the entered lead time across re-imports.
    ///
    /// Prefers the spreadsheet-supplied identifier; falls back to the
    /// normalized brand/model/version triple.
    pub fn model_key(&self) -> ModelKey {
        self.external_key
            .clone()
            .unwrap_or_else(|| ModelKey::new(&self.brand, &self.model, &self.version))
    }

    /// Apply a raw lead-time edit, keeping the prior value on bad input.
    ///
    /// Returns `true` when the stored value changed.
    pub fn apply_lead_time_input(&mut self, raw: &str) -> bool {
        match parse_lead_time_input(raw) {
            LeadTimeEdit::Set(weeks) => {
                let changed = self.factory_lead_time != Some(weeks);
                self.factory_lead_time = Some(weeks);
                changed
            }
            LeadTimeEdit::Clear => {
                let changed = self.factory_lead_time.is_some();
                self.factory_lead_time = None;
                changed
            }
            LeadTimeEdit::Rejected => false,
        }
    }
}

impl Entity for VehicleItem {
    type Id = VehicleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Outcome of parsing a raw lead-time field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTimeEdit {
    /// A valid non-negative whole number of weeks.
    Set(u32),
    /// Empty input clears the value back to unknown.
    Clear,
    /// Negative or non-numeric input; the caller keeps the prior value.
    Rejected,
}

/// Parse a raw lead-time input per the dashboard's edit rules.
pub fn parse_lead_time_input(raw: &str) -> LeadTimeEdit {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LeadTimeEdit::Clear;
    }
    match trimmed.parse::<u32>() {
        Ok(weeks) => LeadTimeEdit::Set(weeks),
        Err(_) => LeadTimeEdit::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> VehicleItem {
        VehicleItem::new("BMW", "X3", "xDrive30i M Sport", 45, 8.0).unwrap()
    }

    #[test]
    fn negative_burn_rate_is_rejected_at_construction() {
        let err = VehicleItem::new("BMW", "X3", "", 1, -0.5).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn nan_burn_rate_is_rejected_at_construction() {
        assert!(VehicleItem::new("BMW", "X3", "", 1, f64::NAN).is_err());
    }

    #[test]
    fn lead_time_edit_sets_a_valid_value() {
        let mut v = item();
        assert!(v.apply_lead_time_input("12"));
        assert_eq!(v.factory_lead_time(), Some(12));
    }

    #[test]
    fn negative_lead_time_input_keeps_the_stored_value() {
        let mut v = item().with_factory_lead_time(8);
        assert!(!v.apply_lead_time_input("-3"));
        assert_eq!(v.factory_lead_time(), Some(8));
    }

    #[test]
    fn non_numeric_lead_time_input_keeps_the_stored_value() {
        let mut v = item().with_factory_lead_time(8);
        assert!(!v.apply_lead_time_input("soon"));
        assert_eq!(v.factory_lead_time(), Some(8));
    }

    #[test]
    fn empty_lead_time_input_clears_to_unknown() {
        let mut v = item().with_factory_lead_time(8);
        assert!(v.apply_lead_time_input("  "));
        assert_eq!(v.factory_lead_time(), None);
    }

    #[test]
    fn model_key_prefers_the_external_identifier() {
        let v = item().with_external_key(ModelKey::from_external("RVL-BMW-001"));
        assert_eq!(v.model_key(), ModelKey::from_external("rvl-bmw-001"));
    }

    #[test]
    fn model_key_falls_back_to_the_field_triple() {
        assert_eq!(
            item().model_key(),
            ModelKey::new("bmw", "x3", "xdrive30i m sport")
        );
    }
}
