use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

const LOG_ENV: &str = "EXPENSETUI_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    pub(crate) data_dir: PathBuf,
    pub(crate) log_path: PathBuf,
    pub(crate) log_filter: String,
}

impl Config {
    /// Resolves paths under the platform data directory. `db_override`
    /// comes from `--db` / `EXPENSETUI_DB`.
    pub(crate) fn load(db_override: Option<PathBuf>) -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "expensetui", "ExpenseTUI")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let data_dir = proj_dirs.data_dir().to_path_buf();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let log_filter = std::env::var(LOG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self::with_data_dir(data_dir, db_override, log_filter))
    }

    fn with_data_dir(data_dir: PathBuf, db_override: Option<PathBuf>, log_filter: String) -> Self {
        let db_path = db_override.unwrap_or_else(|| data_dir.join("expensetui.db"));
        let log_path = data_dir.join("expensetui.log");
        Self {
            db_path,
            data_dir,
            log_path,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_live_in_data_dir() {
        let config = Config::with_data_dir(PathBuf::from("/data"), None, "info".into());
        assert_eq!(config.db_path, PathBuf::from("/data/expensetui.db"));
        assert_eq!(config.log_path, PathBuf::from("/data/expensetui.log"));
        assert_eq!(config.data_dir, PathBuf::from("/data"));
    }

    #[test]
    fn test_db_override_wins() {
        let config = Config::with_data_dir(
            PathBuf::from("/data"),
            Some(PathBuf::from("/tmp/other.db")),
            "debug".into(),
        );
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.log_path, PathBuf::from("/data/expensetui.log"));
        assert_eq!(config.log_filter, "debug");
    }
}
