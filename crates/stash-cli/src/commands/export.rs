use std::path::Path;

use stash_scan::{ScanConfig, Scanner};

pub fn run(path: &Path, config: ScanConfig, output: Option<&Path>) -> Result<(), String> {
    let snapshot = super::load(path, &config)?;
    let found = Scanner::over(&snapshot).with_config(config).collect();

    let content = serde_json::to_string_pretty(&found)
        .map_err(|e| format!("JSON serialization error: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported {} items to {}", found.len(), path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
