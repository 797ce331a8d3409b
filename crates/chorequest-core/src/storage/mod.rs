mod config;
mod state;

pub use config::Config;
pub use state::StateFile;

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// `CHOREQUEST_DATA_DIR` overrides the location outright (used by tests).
/// Otherwise this is `~/.config/chorequest`, or `~/.config/chorequest-dev`
/// when `CHOREQUEST_ENV=dev`.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = if let Ok(custom) = std::env::var("CHOREQUEST_DATA_DIR") {
        PathBuf::from(custom)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("CHOREQUEST_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("chorequest-dev")
        } else {
            base_dir.join("chorequest")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
