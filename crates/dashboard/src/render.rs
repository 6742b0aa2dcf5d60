//! Plain-text table rendering for the terminal surface.

use fleetstock_inventory::{Depletion, OrderAdvice, TimeFrame};
use fleetstock_procurement::ProcurementRecord;

use crate::inventory_board::InventoryRow;

/// Fixed-width table with a header rule.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out
}

fn depletion_cell(depletion: &Depletion) -> String {
    match depletion {
        Depletion::Never => "∞".to_string(),
        Depletion::At { periods, date } => format!("{periods} ({date})"),
    }
}

fn advice_cell(advice: &Option<OrderAdvice>) -> String {
    match advice {
        None => "-".to_string(),
        Some(OrderAdvice::Immediately) => "order immediately".to_string(),
        Some(OrderAdvice::OrderBy(date)) => date.to_string(),
    }
}

/// Render the inventory table under the selected time frame.
pub fn render_inventory(rows: &[InventoryRow<'_>], time_frame: TimeFrame) -> String {
    let burn_header = format!("Burn Rate ({})", time_frame.label().to_lowercase());
    let headers = [
        "Brand",
        "Model",
        "Version",
        "Stock",
        burn_header.as_str(),
        "Est. Out of Stock",
        "Lead Time (weeks)",
        "Status",
        "Order By",
    ];

    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.item.brand().to_string(),
                row.item.model().to_string(),
                row.item.version().to_string(),
                row.item.available_stock().to_string(),
                row.forecast.adjusted_burn_rate.to_string(),
                depletion_cell(&row.forecast.depletion),
                row.item
                    .factory_lead_time()
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                row.forecast.status.label().to_string(),
                advice_cell(&row.forecast.order_advice),
            ]
        })
        .collect();

    render_table(&headers, &body)
}

/// Render the procurement table (the same columns as the original view).
pub fn render_procurement(records: &[&ProcurementRecord], total: usize) -> String {
    let headers = [
        "Brand",
        "Model",
        "Version",
        "Leaseco",
        "Client Name",
        "City",
        "Internal Usage",
        "Promised",
        "Delayed?",
    ];

    let body: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.brand.clone(),
                r.model.clone(),
                r.version.clone(),
                r.leaseco.clone(),
                r.client_name.clone(),
                r.city.clone(),
                r.internal_usage_date.to_string(),
                r.promised_date.to_string(),
                if r.delayed { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();

    let mut out = format!(
        "Procurement Operations ({} of {} records)\n",
        records.len(),
        total
    );
    out.push_str(&render_table(&headers, &body));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InventoryBoard, ProcurementBoard};
    use chrono::NaiveDate;
    use fleetstock_store::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn inventory_rendering_shows_every_line_and_the_frame_label() {
        let board = InventoryBoard::open(Arc::new(MemoryStore::new())).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let text = render_inventory(&board.rows(today), board.time_frame());

        assert!(text.contains("Burn Rate (per week)"));
        assert!(text.contains("BMW"));
        assert!(text.contains("Tesla"));
        // Header + rule + five sample lines.
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn procurement_rendering_reports_the_filtered_count() {
        let board = ProcurementBoard::with_sample_data();
        let text = render_procurement(&board.rows(), board.total());
        assert!(text.starts_with("Procurement Operations (3 of 3 records)"));
        assert!(text.contains("Juan García"));
    }
}
