//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::{WordBreakOptions, DEFAULT_MAX_BODY_BYTES, DEFAULT_SELECTOR};
use crate::domain::wordbreak::{SegmenterConfig, DEFAULT_BREAK_MARKER, DEFAULT_MIN_LENGTH};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 断词配置
    #[serde(default)]
    pub wordbreak: WordBreakConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 断词配置
///
/// 作为按请求构造中间件时的默认值
#[derive(Debug, Clone, Deserialize)]
pub struct WordBreakConfig {
    /// 最小字符数
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// 断点标记
    #[serde(default = "default_break_marker")]
    pub break_marker: String,

    /// 不含 `.` 的单词不做大小写断点
    #[serde(default)]
    pub require_dot_for_case_breaks: bool,

    /// 只处理 text/html
    #[serde(default = "default_html_only")]
    pub html_only: bool,

    /// CSS 选择器
    #[serde(default = "default_selector")]
    pub selector: String,

    /// 响应体缓冲上限（字节）
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_break_marker() -> String {
    DEFAULT_BREAK_MARKER.to_string()
}

fn default_html_only() -> bool {
    true
}

fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for WordBreakConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            break_marker: default_break_marker(),
            require_dot_for_case_breaks: false,
            html_only: default_html_only(),
            selector: default_selector(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl WordBreakConfig {
    /// 转换为中间件选项
    pub fn to_options(&self) -> WordBreakOptions {
        WordBreakOptions {
            segmenter: SegmenterConfig {
                min_length: self.min_length,
                break_marker: self.break_marker.clone(),
                require_dot_for_case_breaks: self.require_dot_for_case_breaks,
            },
            html_only: self.html_only,
            selector: self.selector.clone(),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
