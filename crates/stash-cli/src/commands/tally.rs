use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use stash_scan::{ScanConfig, Scanner, Tally};

pub fn run(path: &Path, config: ScanConfig) -> Result<(), String> {
    let snapshot = super::load(path, &config)?;
    let found = Scanner::over(&snapshot).with_config(config).collect();
    let tally = Tally::from_items(&found);

    super::print_header(&snapshot);

    if tally.is_empty() {
        println!("  No items found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Entries", "Inventory", "World", "Total"]);

    for entry in tally.entries() {
        table.add_row(vec![
            entry.name.clone(),
            entry.entries.to_string(),
            entry.inventory_units.to_string(),
            entry.world_units.to_string(),
            entry.total_units().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} distinct items, {} units",
        tally.entries().len(),
        tally.total_units()
    );

    Ok(())
}
