use std::fs;
use std::path::PathBuf;

use crate::error::PlatformError;

pub(crate) const APP_NAME: &str = "overture";

/// Returns the platform-specific configuration directory for Overture.
///
/// - macOS: `~/Library/Application Support/overture`
/// - Linux: `$XDG_CONFIG_HOME/overture` (defaults to `~/.config/overture`)
/// - Windows: `%APPDATA%\overture`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory for Overture.
///
/// - macOS: `~/Library/Application Support/overture`
/// - Linux: `$XDG_DATA_HOME/overture` (defaults to `~/.local/share/overture`)
/// - Windows: `%APPDATA%\overture`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
///
/// Located at `config_dir()/config.toml`.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the path to the crash report directory.
///
/// Located at `data_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("crash-reports"))
}

/// Returns the directory containing the launcher executable.
pub fn launcher_dir() -> Result<PathBuf, PlatformError> {
    let exe = std::env::current_exe()
        .map_err(|e| PlatformError::PathError(format!("could not locate executable: {e}")))?;
    exe.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| PlatformError::PathError("executable has no parent directory".into()))
}

/// Returns the default working directory for the visualization server.
///
/// The server sources are installed one level above the launcher's own
/// directory, so this is the parent of [`launcher_dir`].
pub fn default_working_dir() -> Result<PathBuf, PlatformError> {
    launcher_dir()?
        .parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| PlatformError::PathError("launcher directory has no parent".into()))
}

/// Creates all Overture directories if they do not already exist.
///
/// Creates: config_dir, data_dir, and crash_report_dir.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    fs::create_dir_all(config_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(data_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    fs::create_dir_all(crash_report_dir()?).map_err(|e| PlatformError::PathError(e.to_string()))?;
    Ok(())
}
