use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable that overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Get the platform default Claude configuration directory
///
/// - Windows: `%APPDATA%\claude`, or `<home>\AppData\Roaming\claude` when APPDATA is unset
/// - Elsewhere: `$HOME/.claude`
pub fn get_claude_dir() -> Result<PathBuf> {
    if cfg!(windows) {
        if let Some(app_data) = env::var_os("APPDATA") {
            return Ok(PathBuf::from(app_data).join("claude"));
        }
        let home = env::var("USERPROFILE")
            .or_else(|_| env::var("HOME"))
            .context("USERPROFILE environment variable not set")?;
        return Ok(PathBuf::from(home).join("AppData").join("Roaming").join("claude"));
    }

    let home = env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".claude"))
}

/// Use an explicit directory when given, otherwise the platform default
pub fn resolve_claude_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir),
        None => get_claude_dir(),
    }
}
