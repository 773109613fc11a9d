//! Centralized configuration paths for side-reveal
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/side-reveal/`
//! - Windows: `%APPDATA%\side-reveal\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "side-reveal";

/// Base name of the rolling log file
pub const LOG_FILE_PREFIX: &str = "side-reveal.log";

/// Base config directory for side-reveal
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/side-reveal`
///   - Else: `~/.config/side-reveal`
///
/// Windows:
///   - `%APPDATA%\side-reveal`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/side-reveal/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Create `~/.config/side-reveal/logs/` if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = config_dir()
        .map(|dir| dir.join("logs"))
        .ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
