//! Display time frames for burn rates.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use fleetstock_core::DomainError;

/// Time frame a burn rate is displayed in.
///
/// Burn rates are stored on a weekly basis; each frame carries the multiplier
/// that converts the stored rate into the display unit (`stored / multiplier`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Week,
    Day,
    #[serde(rename = "5days")]
    FiveDays,
    #[serde(rename = "30days")]
    ThirtyDays,
    Month,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 5] = [
        TimeFrame::Week,
        TimeFrame::Day,
        TimeFrame::FiveDays,
        TimeFrame::ThirtyDays,
        TimeFrame::Month,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeFrame::Week => "Per Week",
            TimeFrame::Day => "Per Day",
            TimeFrame::FiveDays => "Last 5 Days",
            TimeFrame::ThirtyDays => "Last 30 Days",
            TimeFrame::Month => "Per Month",
        }
    }

    /// Divisor converting the stored weekly rate into this frame's unit.
    ///
    /// The 5-day and 30-day constants are the product's literal values, not
    /// recomputed ratios; changing them changes displayed history.
    pub fn multiplier(self) -> f64 {
        match self {
            TimeFrame::Week => 1.0,
            TimeFrame::Day => 7.0,
            TimeFrame::FiveDays => 1.4,
            TimeFrame::ThirtyDays => 0.233,
            TimeFrame::Month => 0.25,
        }
    }

    /// Stable key, matching the serde form (`week`, `day`, `5days`, ...).
    pub fn key(self) -> &'static str {
        match self {
            TimeFrame::Week => "week",
            TimeFrame::Day => "day",
            TimeFrame::FiveDays => "5days",
            TimeFrame::ThirtyDays => "30days",
            TimeFrame::Month => "month",
        }
    }
}

impl Default for TimeFrame {
    fn default() -> Self {
        TimeFrame::Week
    }
}

impl FromStr for TimeFrame {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        TimeFrame::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| DomainError::validation(format!("unknown time frame: {s}")))
    }
}

impl core::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_frame_round_trips_through_its_key() {
        for frame in TimeFrame::ALL {
            assert_eq!(frame.key().parse::<TimeFrame>().unwrap(), frame);
        }
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(" Week ".parse::<TimeFrame>().unwrap(), TimeFrame::Week);
        assert_eq!("5DAYS".parse::<TimeFrame>().unwrap(), TimeFrame::FiveDays);
    }

    #[test]
    fn unknown_frame_is_a_validation_error() {
        assert!("fortnight".parse::<TimeFrame>().is_err());
    }

    #[test]
    fn multipliers_match_the_product_constants() {
        assert_eq!(TimeFrame::Week.multiplier(), 1.0);
        assert_eq!(TimeFrame::Day.multiplier(), 7.0);
        assert_eq!(TimeFrame::FiveDays.multiplier(), 1.4);
        assert_eq!(TimeFrame::ThirtyDays.multiplier(), 0.233);
        assert_eq!(TimeFrame::Month.multiplier(), 0.25);
    }
}
