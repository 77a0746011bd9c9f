//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "WORDBREAK";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `WORDBREAK_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `WORDBREAK_SERVER__PORT=8080`
/// - `WORDBREAK_WORDBREAK__MIN_LENGTH=10`
/// - `WORDBREAK_WORDBREAK__BREAK_MARKER=&shy;`
/// - `WORDBREAK_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::default();
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", defaults.server.host.as_str())?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("wordbreak.min_length", defaults.wordbreak.min_length as u64)?
        .set_default("wordbreak.break_marker", defaults.wordbreak.break_marker.as_str())?
        .set_default("wordbreak.require_dot_for_case_breaks", false)?
        .set_default("wordbreak.html_only", defaults.wordbreak.html_only)?
        .set_default("wordbreak.selector", defaults.wordbreak.selector.as_str())?
        .set_default("wordbreak.max_body_bytes", defaults.wordbreak.max_body_bytes as u64)?
        .set_default("log.level", defaults.log.level.as_str())?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: WORDBREAK_WORDBREAK__MIN_LENGTH=10
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    config
        .wordbreak
        .to_options()
        .validate()
        .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Minimum Length: {}", config.wordbreak.min_length);
    tracing::info!("Break Marker: {:?}", config.wordbreak.break_marker);
    if config.wordbreak.require_dot_for_case_breaks {
        tracing::info!("Case Breaks: only in dotted words");
    }
    tracing::info!("HTML Only: {}", config.wordbreak.html_only);
    tracing::info!("Selector: {}", config.wordbreak.selector);
    tracing::info!("Max Body Bytes: {}", config.wordbreak.max_body_bytes);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_selector() {
        let mut config = AppConfig::default();
        config.wordbreak.selector = String::new();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9090

[wordbreak]
min_length = 10
break_marker = "&shy;"
html_only = false
"#
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.wordbreak.min_length, 10);
        assert_eq!(config.wordbreak.break_marker, "&shy;");
        assert!(!config.wordbreak.html_only);
        assert_eq!(config.wordbreak.selector, "h1, h2, h3, h4, h5, h6, .text-break");
    }

    #[test]
    fn test_missing_required_file_fails() {
        let result = load_config_from_path(Some(Path::new("/nonexistent/wordbreak.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
