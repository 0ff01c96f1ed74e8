use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PageConfig;

pub const CONFIG_FILE_NAME: &str = "launch-countdown.toml";

/// Loads the page configuration from `path`. A missing file yields the
/// defaults; a present but unreadable or invalid file is an error.
pub fn load_config(path: &Path) -> Result<PageConfig> {
    if !path.exists() {
        log::info!("no config at {}, using defaults", path.display());
        return Ok(PageConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config: PageConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config from {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}

/// Platform config-dir location for the default config file.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "launch-countdown")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::models::settings::CountdownEntry;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/launch-countdown.toml")).unwrap();
        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn valid_file_is_loaded() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "tick_period_ms = 250\n\n[[countdowns]]\nlabel = \"Launch\"\ntarget = \"2099-01-01 00:00:00\"\n"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.tick_period_ms, 250);
        assert_eq!(
            config.countdowns,
            vec![CountdownEntry {
                label: "Launch".to_string(),
                target: "2099-01-01 00:00:00".to_string(),
            }]
        );
    }

    #[test]
    fn unparsable_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tick_period_ms = \"soon\"").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tick_period_ms = 0").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }
}
