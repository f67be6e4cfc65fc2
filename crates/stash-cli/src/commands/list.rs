use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use stash_scan::{Origin, ScanConfig, Scanner};

pub fn run(path: &Path, config: ScanConfig, origin: Option<&str>) -> Result<(), String> {
    let snapshot = super::load(path, &config)?;

    let origin = match origin {
        None => None,
        Some("inventory") => Some(Origin::Inventory),
        Some("world") => Some(Origin::World),
        Some(other) => {
            return Err(format!(
                "unsupported origin: \"{other}\". Use: inventory, world"
            ));
        }
    };

    let found: Vec<_> = Scanner::over(&snapshot)
        .with_config(config)
        .scan()
        .filter(|f| origin.is_none_or(|o| f.origin == o))
        .collect();

    super::print_header(&snapshot);

    if found.is_empty() {
        println!("  No items found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Stack", "Origin", "ID"]);

    for f in &found {
        table.add_row(vec![
            f.item.name.clone(),
            f.item.stack.to_string(),
            f.origin.to_string(),
            f.item.id.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} items found", found.len());

    Ok(())
}
