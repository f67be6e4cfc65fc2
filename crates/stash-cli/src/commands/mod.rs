pub mod export;
pub mod list;
pub mod tally;

use std::path::Path;

use colored::Colorize;
use stash_core::Snapshot;
use stash_scan::ScanConfig;

/// Load and validate a snapshot, mapping errors to a printable message.
///
/// A location filter must name a location the snapshot actually has.
fn load(path: &Path, config: &ScanConfig) -> Result<Snapshot, String> {
    let snapshot = Snapshot::load(path).map_err(|e| e.to_string())?;
    if let Some(name) = config
        .location_filter
        .as_deref()
        .filter(|name| snapshot.find_location(name).is_none())
    {
        return Err(format!("no location named \"{name}\" in snapshot"));
    }
    tracing::debug!(
        snapshot = %snapshot.meta.name,
        locations = snapshot.locations.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Print the snapshot header line.
fn print_header(snapshot: &Snapshot) {
    println!(
        "  {} (captured {}, {} items)",
        snapshot.meta.name.bold(),
        snapshot.meta.captured_at.format("%Y-%m-%d %H:%M"),
        snapshot.item_count()
    );
    println!();
}
