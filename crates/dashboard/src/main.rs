//! Terminal entry point for the fleet stock dashboard.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Local;

use fleetstock_dashboard::render::{render_inventory, render_procurement};
use fleetstock_dashboard::{InventoryBoard, ProcurementBoard};
use fleetstock_inventory::TimeFrame;
use fleetstock_store::JsonFileStore;

const USAGE: &str = "usage: fleetstock [command]

commands:
  (none)                      render the inventory and procurement views
  import <path>               replace the inventory from a CSV spreadsheet
  export <path>               write the inventory to a CSV spreadsheet
  timeframe <frame>           select week | day | 5days | 30days | month
  lead <vehicle-id> [weeks]   set a factory lead time (omit weeks to clear)";

fn data_dir() -> PathBuf {
    match std::env::var("FLEETSTOCK_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            tracing::warn!("FLEETSTOCK_DATA_DIR not set; using ./.fleetstock");
            PathBuf::from(".fleetstock")
        }
    }
}

fn main() -> anyhow::Result<()> {
    fleetstock_observability::init();

    let store_path = data_dir().join("store.json");
    let store = Arc::new(
        JsonFileStore::open(&store_path)
            .with_context(|| format!("failed to open store at {}", store_path.display()))?,
    );
    let mut inventory = InventoryBoard::open(store).context("failed to open inventory board")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>()[..] {
        [] => {
            let today = Local::now().date_naive();
            println!("Vehicle Inventory Management");
            println!("{}", render_inventory(&inventory.rows(today), inventory.time_frame()));
            let procurement = ProcurementBoard::with_sample_data();
            println!("{}", render_procurement(&procurement.rows(), procurement.total()));
        }
        ["import", path] => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open spreadsheet {path}"))?;
            let outcome = inventory
                .import_csv(file)
                .with_context(|| format!("failed to import {path}"))?;
            println!(
                "imported {} vehicles ({} rows, {} skipped, {} cells coerced)",
                outcome.items.len(),
                outcome.rows_read,
                outcome.rows_skipped,
                outcome.cells_coerced
            );
        }
        ["export", path] => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create spreadsheet {path}"))?;
            inventory
                .export_csv(file)
                .with_context(|| format!("failed to export to {path}"))?;
            println!("exported {} vehicles to {path}", inventory.items().len());
        }
        ["timeframe", frame] => {
            let frame: TimeFrame = frame.parse()?;
            inventory.set_time_frame(frame)?;
            println!("time frame set to {}", frame.label());
        }
        ["lead", id] | ["lead", id, _] => {
            let vehicle_id = id.parse().context("invalid vehicle id")?;
            let raw = args.get(2).map(String::as_str).unwrap_or("");
            if inventory.edit_lead_time(vehicle_id, raw)? {
                println!("lead time updated");
            } else {
                println!("input rejected; stored value unchanged");
            }
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}
