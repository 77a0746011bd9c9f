//! Word Break Context - Value Objects

use serde::{Deserialize, Serialize};

/// 默认最小字符数
/// 单词或片段字符数低于此值时不插入断点
pub const DEFAULT_MIN_LENGTH: usize = 20;

/// 默认断点标记（HTML `<wbr>` 元素）
pub const DEFAULT_BREAK_MARKER: &str = "<wbr>";

/// 断词配置
///
/// 不变量:
/// - 构造后只读，可在多线程间共享
/// - break_marker 原样插入，不做任何转义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// 最小字符数（单词级与片段级各自独立判断）
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// 断点标记
    #[serde(default = "default_break_marker")]
    pub break_marker: String,

    /// 为 true 时不含 `.` 的单词保持原样（不做大小写断点）
    #[serde(default)]
    pub require_dot_for_case_breaks: bool,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_break_marker() -> String {
    DEFAULT_BREAK_MARKER.to_string()
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            break_marker: default_break_marker(),
            require_dot_for_case_breaks: false,
        }
    }
}

impl SegmenterConfig {
    pub fn new(min_length: usize, break_marker: impl Into<String>) -> Self {
        Self {
            min_length,
            break_marker: break_marker.into(),
            require_dot_for_case_breaks: false,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_break_marker(mut self, break_marker: impl Into<String>) -> Self {
        self.break_marker = break_marker.into();
        self
    }

    pub fn with_require_dot_for_case_breaks(mut self, require: bool) -> Self {
        self.require_dot_for_case_breaks = require;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SegmenterConfig::default();
        assert_eq!(config.min_length, 20);
        assert_eq!(config.break_marker, "<wbr>");
        assert!(!config.require_dot_for_case_breaks);
    }

    #[test]
    fn test_builder_methods() {
        let config = SegmenterConfig::default()
            .with_min_length(10)
            .with_break_marker("\u{AD}")
            .with_require_dot_for_case_breaks(true);
        assert_eq!(config.min_length, 10);
        assert_eq!(config.break_marker, "\u{AD}");
        assert!(config.require_dot_for_case_breaks);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: SegmenterConfig = serde_json::from_str(r#"{"min_length": 5}"#).unwrap();
        assert_eq!(config.min_length, 5);
        assert_eq!(config.break_marker, DEFAULT_BREAK_MARKER);
    }
}
