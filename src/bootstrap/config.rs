//! # Configuration Loader / 配置加载器
//!
//! Pure data loading: read a TOML file and map it onto [`AppConfig`].
//! No validation happens here. Missing sections and keys fall back to
//! their defaults.
//! 仅纯数据加载，不做验证；缺失的字段使用默认值。

use std::path::Path;

use anyhow::Context;
use cb_core::AcquisitionConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration file layout.
///
/// ```toml
/// [acquisition]
/// open_retries = 5
/// open_retry_delay_ms = 50
/// verbose = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub acquisition: AcquisitionConfig,
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML or does not map onto [`AppConfig`]
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<AppConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))
}
