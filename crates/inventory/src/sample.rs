//! Built-in sample fleet, used until real data is imported.

use crate::item::VehicleItem;

/// Seed stock lines for a fresh install.
pub fn sample_fleet() -> Vec<VehicleItem> {
    let rows: [(&str, &str, &str, u32, f64, Option<u32>); 5] = [
        ("BMW", "X3", "xDrive30i M Sport", 45, 8.0, Some(12)),
        ("Mercedes-Benz", "C-Class", "C220d AMG Line", 12, 15.0, Some(16)),
        ("Audi", "A4", "Avant 2.0 TDI S-Line", 8, 6.0, None),
        ("Volkswagen", "Golf", "GTI 2.0 TSI", 3, 12.0, Some(8)),
        ("Tesla", "Model Y", "Long Range AWD", 25, 20.0, Some(4)),
    ];

    rows.into_iter()
        .map(|(brand, model, version, stock, burn, lead)| {
            let mut item = VehicleItem::new(brand, model, version, stock, burn)
                .expect("sample burn rates are non-negative");
            item.set_factory_lead_time(lead);
            item
        })
        .collect()
}
