//! # Default Inventory Path
//!
//! Resolution order for the file used when the save/load prompt is left
//! blank:
//!
//! 1. `STOCKROOM_INVENTORY_PATH` environment variable, if set
//! 2. The platform data directory, created on first use:
//!    - **Linux**: `~/.local/share/inventory/inventory.json`
//!    - **macOS**: `~/Library/Application Support/com.stockroom.inventory/inventory.json`
//!    - **Windows**: `%APPDATA%\stockroom\inventory\data\inventory.json`

use std::path::PathBuf;

use directories::ProjectDirs;

/// Environment variable overriding the default inventory file location.
pub const INVENTORY_PATH_ENV: &str = "STOCKROOM_INVENTORY_PATH";

const INVENTORY_FILE_NAME: &str = "inventory.json";

/// Resolves the default inventory file path.
pub fn default_inventory_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var(INVENTORY_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    // Use the platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "stockroom", "inventory")
        .ok_or("Could not determine the application data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join(INVENTORY_FILE_NAME))
}
