//! # Configuration Loader / 配置加载器
//!
//! Pure data loading: read TOML, map it onto [`AppConfig`]. Missing keys
//! become empty values; choosing what an empty value means is the wiring's
//! job, not this module's.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// `"memory"` or `"file"`; empty when not configured.
    pub storage_backend: String,

    /// Storage file for the `file` backend (no existence check).
    pub storage_path: PathBuf,

    /// Byte quota for the `memory` backend.
    pub storage_quota_bytes: Option<u64>,

    /// Extra `EnvFilter` directives, e.g. `"cl_app=trace"`.
    pub log_filter: String,
}

impl AppConfig {
    /// Map a parsed TOML document. Performs no validation.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let storage = toml_value.get("storage");
        let logging = toml_value.get("logging");

        Ok(Self {
            storage_backend: storage
                .and_then(|s| s.get("backend"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            storage_path: PathBuf::from(
                storage
                    .and_then(|s| s.get("path"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            storage_quota_bytes: storage
                .and_then(|s| s.get("quota_bytes"))
                .and_then(|v| v.as_integer())
                .and_then(|n| u64::try_from(n).ok()),
            log_filter: logging
                .and_then(|l| l.get("filter"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// All-empty configuration, used when no file is given.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Fails when the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
