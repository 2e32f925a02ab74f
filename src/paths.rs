//! Where scenemark keeps its settings, logs and exported annotation files.
//!
//! Running from a checkout keeps everything next to the working directory so a
//! debug session never touches the user's real settings. An installed build
//! uses the platform directories under a `scenemark` folder:
//! - Linux: settings in `~/.config/scenemark/`, logs in `~/.local/share/scenemark/`
//! - Windows: `%APPDATA%\scenemark\`
//! - macOS: `~/Library/Application Support/scenemark/`

use std::path::PathBuf;

const APP_DIR_NAME: &str = "scenemark";
const CONFIG_FILE_NAME: &str = "config.json";

/// Running from a checkout: either under cargo or a debug build.
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Directory holding `config.json`. Only Linux separates settings from data.
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Directory for logs and the fallback export location.
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR_NAME))
}

/// The persisted settings file
pub fn config_file() -> PathBuf {
    config_dir()
        .unwrap_or_default()
        .join(CONFIG_FILE_NAME)
}

/// Where `scenemark.log` is written
pub fn logs_dir() -> PathBuf {
    data_dir().unwrap_or_default().join("logs")
}

/// Starting folder for the export and import dialogs when the config
/// remembers no earlier file. Installed builds prefer the documents folder.
pub fn default_export_dir() -> PathBuf {
    if !is_dev_mode()
        && let Some(documents) = dirs::document_dir()
    {
        return documents;
    }

    data_dir().unwrap_or_default().join("exports")
}

/// Create the settings and log directories of an installed build.
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(&config)?;
    }
    std::fs::create_dir_all(logs_dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_mode_keeps_everything_local() {
        // Test builds have debug assertions on
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
        assert_eq!(config_file(), PathBuf::from("./config.json"));
        assert_eq!(logs_dir(), PathBuf::from("./logs"));
    }

    #[test]
    fn test_default_export_dir_is_local_in_dev_mode() {
        assert_eq!(default_export_dir(), PathBuf::from("./exports"));
    }

    #[test]
    fn test_ensure_directories_is_a_no_op_in_dev_mode() {
        assert!(ensure_directories().is_ok());
    }
}
