//! # Shop Configuration
//!
//! A single YAML file `tailor_config.yaml` at the root of the data directory:
//!
//! ```yaml
//! admin:
//!   username: "tailor"
//!   password: "change-me"
//! default_completion_days: 14
//! sink_file: null
//! data_format_version: "1.0"
//! ```
//!
//! The file is created with defaults on first use. With no `admin` section
//! every admin login is rejected.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::backend::domain::{CredentialVerifier, NoCredentials, StaticCredentials, DEFAULT_COMPLETION_DAYS};
use crate::backend::storage::{ExternalSink, JsonLinesSink};

pub const CONFIG_FILE_NAME: &str = "tailor_config.yaml";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MASTER_TAILOR_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailorConfig {
    #[serde(default)]
    pub admin: Option<AdminCredentials>,
    /// Used for delivery estimates when a booking has no live design
    #[serde(default = "default_completion_days")]
    pub default_completion_days: u32,
    /// Append-only JSON lines file mirroring new designs and bookings
    #[serde(default)]
    pub sink_file: Option<PathBuf>,
    #[serde(default = "default_data_format_version")]
    pub data_format_version: String,
}

fn default_completion_days() -> u32 {
    DEFAULT_COMPLETION_DAYS
}

fn default_data_format_version() -> String {
    "1.0".to_string()
}

impl Default for TailorConfig {
    fn default() -> Self {
        Self {
            admin: None,
            default_completion_days: default_completion_days(),
            sink_file: None,
            data_format_version: default_data_format_version(),
        }
    }
}

impl TailorConfig {
    /// Load the config from `data_dir`, writing a default one if it doesn't exist
    pub fn load_or_create(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {:?}", config_path))?;
            let config: TailorConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Failed to parse {:?}", config_path))?;
            debug!("Loaded shop config from {:?}", config_path);
            Ok(config)
        } else {
            let config = TailorConfig::default();
            config.save(data_dir)?;
            info!("Created default shop config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Write the config atomically through a temp file
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        if !data_dir.exists() {
            fs::create_dir_all(data_dir)
                .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;
            info!("Created data directory: {:?}", data_dir);
        }

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        let yaml_content = serde_yaml::to_string(self).context("Failed to serialize shop config")?;

        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)
            .with_context(|| format!("Failed to write {:?}", temp_path))?;
        fs::rename(&temp_path, &config_path)
            .with_context(|| format!("Failed to move config into place at {:?}", config_path))?;

        debug!("Saved shop config to {:?}", config_path);
        Ok(())
    }

    pub fn credential_verifier(&self) -> Arc<dyn CredentialVerifier> {
        match &self.admin {
            Some(admin) => Arc::new(StaticCredentials::new(&admin.username, &admin.password)),
            None => Arc::new(NoCredentials),
        }
    }

    /// The configured sink; relative paths are resolved against `data_dir`
    pub fn sink(&self, data_dir: &Path) -> Option<Arc<dyn ExternalSink>> {
        let path = self.sink_file.as_ref()?;
        let path = if path.is_absolute() {
            path.clone()
        } else {
            data_dir.join(path)
        };
        Some(Arc::new(JsonLinesSink::new(path)))
    }
}

/// Pick the data directory: explicit flag, then environment, then the
/// platform data dir, then a local fallback
pub fn resolve_data_directory(explicit: Option<PathBuf>) -> PathBuf {
    resolve_data_directory_from(explicit, std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
}

fn resolve_data_directory_from(explicit: Option<PathBuf>, from_env: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(dir) = from_env.filter(|d| !d.as_os_str().is_empty()) {
        return dir;
    }
    match dirs::data_local_dir() {
        Some(dir) => dir.join("master-tailor"),
        None => PathBuf::from("master_tailor_data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("shop");

        let config = TailorConfig::load_or_create(&data_dir).unwrap();
        assert_eq!(config, TailorConfig::default());
        assert_eq!(config.default_completion_days, 14);
        assert!(data_dir.join(CONFIG_FILE_NAME).exists());
        assert!(!data_dir.join("tailor_config.tmp").exists());
    }

    #[test]
    fn test_saved_config_round_trips() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = TailorConfig {
            admin: Some(AdminCredentials {
                username: "tailor".to_string(),
                password: "chalk".to_string(),
            }),
            default_completion_days: 10,
            sink_file: Some(PathBuf::from("leads.jsonl")),
            data_format_version: "1.0".to_string(),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = TailorConfig::load_or_create(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "admin:\n  username: tailor\n  password: chalk\n",
        )
        .unwrap();

        let config = TailorConfig::load_or_create(temp_dir.path()).unwrap();
        assert_eq!(config.default_completion_days, 14);
        assert_eq!(config.sink_file, None);
        assert!(config.credential_verifier().verify("tailor", "chalk"));
        assert!(!config.credential_verifier().verify("tailor", "wrong"));
    }

    #[test]
    fn test_no_admin_section_rejects_all_logins() {
        let config = TailorConfig::default();
        assert!(!config.credential_verifier().verify("", ""));
        assert!(!config.credential_verifier().verify("admin", "admin"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "admin: [unclosed").unwrap();
        assert!(TailorConfig::load_or_create(temp_dir.path()).is_err());
    }

    #[test]
    fn test_relative_sink_path_is_under_data_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = TailorConfig {
            sink_file: Some(PathBuf::from("leads.jsonl")),
            ..TailorConfig::default()
        };
        let sink = config.sink(temp_dir.path()).unwrap();
        sink.insert_data("designs", &serde_json::json!({"id": 1})).unwrap();
        assert!(temp_dir.path().join("leads.jsonl").exists());

        assert!(TailorConfig::default().sink(temp_dir.path()).is_none());
    }

    #[test]
    fn test_data_directory_precedence() {
        let flag = PathBuf::from("/tmp/from-flag");
        let env = PathBuf::from("/tmp/from-env");

        assert_eq!(
            resolve_data_directory_from(Some(flag.clone()), Some(env.clone())),
            flag
        );
        assert_eq!(resolve_data_directory_from(None, Some(env.clone())), env);

        let fallback = resolve_data_directory_from(None, Some(PathBuf::new()));
        assert!(fallback.ends_with("master-tailor") || fallback.ends_with("master_tailor_data"));
    }
}
