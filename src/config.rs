use crate::error::{AppResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// پیکربندی برنامه
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// پوشه فایل‌های HTML خروجی سامانه آموزش
    pub catalog_dir: String,
    /// مسیر فایل ذخیره انتخاب‌ها
    pub storage_path: String,
    /// سقف تعداد درس در فهرست نمایش
    pub display_limit: usize,
    /// نمایش جزئیات بیشتر در لاگ
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_dir: "raw_data".to_string(),
            storage_path: "selection.json".to_string(),
            display_limit: crate::services::engine::DEFAULT_DISPLAY_LIMIT,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// خواندن پیکربندی از متغیرهای محیطی، با مقادیر پیش‌فرض
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            catalog_dir: std::env::var("CATALOG_DIR").unwrap_or(default.catalog_dir),
            storage_path: std::env::var("STORAGE_PATH").unwrap_or(default.storage_path),
            display_limit: std::env::var("DISPLAY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.display_limit),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }

    /// خواندن پیکربندی از یک فایل TOML
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// فایل `config.toml` اگر باشد، وگرنه متغیرهای محیطی
    pub fn load() -> Self {
        let path = Path::new("config.toml");
        if path.exists() {
            match Self::from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("⚠️ {} - از متغیرهای محیطی استفاده می‌شود", e);
                }
            }
        }
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.display_limit, 100);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "catalog_dir = \"exports\"\ndisplay_limit = 50\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.catalog_dir, "exports");
        assert_eq!(config.display_limit, 50);
        // فیلدهای غایب از پیش‌فرض پر می‌شوند
        assert_eq!(config.storage_path, "selection.json");
    }

    #[test]
    fn from_file_bad_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "display_limit = \"نامعتبر\"").unwrap();
        assert!(Config::from_file(&path).is_err());
    }
}
