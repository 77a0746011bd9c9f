//! 断词中间件选项
//!
//! 断词器配置 + 响应改写范围（内容类型、选择器、缓冲上限）

use crate::domain::{SegmenterConfig, WordBreakError};

/// 默认选择器：所有标题以及带 `text-break` class 的元素
pub const DEFAULT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, .text-break";

/// 默认响应体缓冲上限（8 MiB）
pub const DEFAULT_MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// 中间件选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBreakOptions {
    /// 断词器配置
    pub segmenter: SegmenterConfig,

    /// 为 true 时只改写 text/html 响应
    /// 为 false 时其它 text/* 响应按纯文本整体改写
    pub html_only: bool,

    /// HTML 文档中待处理元素的 CSS 选择器
    pub selector: String,

    /// 响应体缓冲上限（字节）
    pub max_body_bytes: usize,
}

impl Default for WordBreakOptions {
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig::default(),
            html_only: true,
            selector: DEFAULT_SELECTOR.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl WordBreakOptions {
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.segmenter.min_length = min_length;
        self
    }

    pub fn with_break_marker(mut self, break_marker: impl Into<String>) -> Self {
        self.segmenter.break_marker = break_marker.into();
        self
    }

    pub fn with_html_only(mut self, html_only: bool) -> Self {
        self.html_only = html_only;
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// 校验与 DOM 实现无关的选项
    pub fn validate(&self) -> Result<(), WordBreakError> {
        if self.selector.trim().is_empty() {
            return Err(WordBreakError::invalid_configuration(
                "selector cannot be empty",
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(WordBreakError::invalid_configuration(
                "max_body_bytes cannot be 0",
            ));
        }
        Ok(())
    }
}
