use anyhow::{Context, Result};
use std::path::PathBuf;

/// File name of the JSON key-value store inside the data directory.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Get the CiviLink application data root directory.
///
/// # Platform-specific Paths / 平台特定路径
/// - macOS: ~/Library/Application Support/CiviLink
/// - Windows: %APPDATA%\CiviLink
/// - Linux: $XDG_DATA_HOME/civilink or ~/.local/share/civilink
///
/// # Behavior / 行为
/// - This function does not automatically create directories.
/// - The caller decides when to create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    #[cfg(target_os = "linux")]
    {
        Ok(base_dir.join("civilink"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        Ok(base_dir.join("CiviLink"))
    }
}

/// Default location of the persisted key-value store.
pub fn default_storage_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join(STORAGE_FILE_NAME))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_path_lives_in_app_dir() {
        // Headless CI may have no data dir at all; only check shape when it does.
        if let (Ok(dir), Ok(path)) = (app_data_dir(), default_storage_path()) {
            assert_eq!(path.parent(), Some(dir.as_path()));
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(STORAGE_FILE_NAME));
        }
    }
}
