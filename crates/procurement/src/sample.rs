//! Sample procurement operations, standing in for the upstream CRM feed.

use chrono::NaiveDate;

use fleetstock_core::RecordId;

use crate::record::{DealerInfo, LeasecoDates, ProcurementRecord, TrackerDates};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("sample dates are valid")
}

/// Seed records for a fresh install.
pub fn sample_records() -> Vec<ProcurementRecord> {
    vec![
        ProcurementRecord {
            id: RecordId::new(),
            brand: "BMW".to_string(),
            model: "X3".to_string(),
            version: "xDrive20d".to_string(),
            leaseco: "ALD Automotive".to_string(),
            client_name: "Juan García".to_string(),
            city: "Madrid".to_string(),
            internal_usage_date: date(2024, 2, 15),
            promised_date: date(2024, 2, 10),
            displayed_date_to_client: date(2024, 2, 12),
            delayed: true,
            request_date: date(2024, 1, 10),
            promised_date_at_signing: date(2024, 2, 10),
            current_estimated_delivery: date(2024, 2, 15),
            desired_delivery_date: date(2024, 2, 8),
            contract_end_date: date(2027, 2, 10),
            color: Some("Mineral Grey Metallic".to_string()),
            fleet_car_id: Some("FLT-BMW-001".to_string()),
            status: Some("In Transit".to_string()),
            project: Some("Corporate Fleet 2024".to_string()),
            license_plate: Some("1234ABC".to_string()),
            vin: Some("WBA12345678901234".to_string()),
            contract_reference: Some("CNT-2024-001".to_string()),
            availability_date: Some(date(2024, 2, 5)),
            client_comments: Some("Client prefers delivery in the morning".to_string()),
            leaseco_dates: LeasecoDates {
                request_date: Some(date(2024, 1, 12)),
                etd_date: Some(date(2024, 2, 1)),
                registration_start_date: Some(date(2024, 2, 3)),
                delivery_ready_date: Some(date(2024, 2, 14)),
            },
            tracker_dates: TrackerDates {
                request_date: Some(date(2024, 2, 5)),
                estimated_installation_date: Some(date(2024, 2, 10)),
                actual_installation_date: Some(date(2024, 2, 9)),
            },
            dealer: DealerInfo {
                dealer_name: Some("BMW Madrid Centro".to_string()),
                contact_person: Some("Ana Ruiz".to_string()),
                phone_email: Some("+34 91 123 4567 / ana.ruiz@bmwmadrid.com".to_string()),
            },
        },
        ProcurementRecord {
            id: RecordId::new(),
            brand: "Audi".to_string(),
            model: "A4".to_string(),
            version: "2.0 TDI".to_string(),
            leaseco: "Renting Finders".to_string(),
            client_name: "María López".to_string(),
            city: "Barcelona".to_string(),
            internal_usage_date: date(2024, 2, 20),
            promised_date: date(2024, 2, 25),
            displayed_date_to_client: date(2024, 2, 25),
            delayed: false,
            request_date: date(2024, 1, 15),
            promised_date_at_signing: date(2024, 2, 25),
            current_estimated_delivery: date(2024, 2, 20),
            desired_delivery_date: date(2024, 2, 22),
            contract_end_date: date(2027, 2, 25),
            color: Some("Ibis White".to_string()),
            fleet_car_id: Some("FLT-AUDI-002".to_string()),
            status: Some("Order Placed".to_string()),
            project: None,
            license_plate: None,
            vin: None,
            contract_reference: Some("CNT-2024-002".to_string()),
            availability_date: Some(date(2024, 2, 18)),
            client_comments: None,
            leaseco_dates: LeasecoDates {
                request_date: Some(date(2024, 1, 17)),
                ..LeasecoDates::default()
            },
            tracker_dates: TrackerDates {
                request_date: Some(date(2024, 2, 15)),
                estimated_installation_date: Some(date(2024, 2, 20)),
                actual_installation_date: None,
            },
            dealer: DealerInfo::default(),
        },
        ProcurementRecord {
            id: RecordId::new(),
            brand: "Mercedes".to_string(),
            model: "C-Class".to_string(),
            version: "C200d".to_string(),
            leaseco: "Alphabet".to_string(),
            client_name: "Carlos Martín".to_string(),
            city: "Valencia".to_string(),
            internal_usage_date: date(2024, 3, 1),
            promised_date: date(2024, 2, 28),
            displayed_date_to_client: date(2024, 3, 5),
            delayed: true,
            request_date: date(2024, 1, 20),
            promised_date_at_signing: date(2024, 2, 28),
            current_estimated_delivery: date(2024, 3, 1),
            desired_delivery_date: date(2024, 2, 26),
            contract_end_date: date(2027, 2, 28),
            color: Some("Obsidian Black Metallic".to_string()),
            fleet_car_id: Some("FLT-MERC-003".to_string()),
            status: Some("Production".to_string()),
            project: Some("Executive Fleet".to_string()),
            license_plate: Some("5678DEF".to_string()),
            vin: Some("WDD12345678901234".to_string()),
            contract_reference: Some("CNT-2024-003".to_string()),
            availability_date: Some(date(2024, 2, 25)),
            client_comments: Some("Urgent delivery needed".to_string()),
            leaseco_dates: LeasecoDates {
                request_date: Some(date(2024, 1, 22)),
                etd_date: Some(date(2024, 2, 20)),
                registration_start_date: Some(date(2024, 2, 22)),
                delivery_ready_date: Some(date(2024, 3, 1)),
            },
            tracker_dates: TrackerDates {
                request_date: Some(date(2024, 2, 25)),
                estimated_installation_date: Some(date(2024, 3, 1)),
                actual_installation_date: None,
            },
            dealer: DealerInfo {
                dealer_name: Some("Mercedes Valencia".to_string()),
                contact_person: Some("Pedro Sánchez".to_string()),
                phone_email: Some("+34 96 987 6543 / pedro.sanchez@mbvalencia.com".to_string()),
            },
        },
    ]
}
