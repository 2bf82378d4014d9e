//! Where the configuration file lives.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Platform configuration directory for the launcher.
///
/// - Linux: `~/.config/faceswap-launcher/`
/// - macOS: `~/Library/Application Support/faceswap-launcher/`
/// - Windows: `%APPDATA%\faceswap-launcher\`
pub fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(Error::ConfigDirNotFound)
}

/// Default config file inside [`config_dir`].
pub fn config_file_path() -> Result<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Config file the launcher uses: the one named with `--config`, else the
/// platform default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(config_file_path, |path| Ok(path.to_path_buf()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_config_toml_under_app_dir() {
        let path = config_file_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "config.toml");
        assert!(path.starts_with(config_dir().unwrap()));
        assert!(path.to_string_lossy().contains("faceswap-launcher"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = Path::new("/srv/faceswap/launcher.toml");
        assert_eq!(resolve_config_path(Some(explicit)).unwrap(), explicit);
    }

    #[test]
    fn test_no_explicit_path_falls_back_to_default() {
        assert_eq!(resolve_config_path(None).unwrap(), config_file_path().unwrap());
    }
}
