//! Response Rewriter
//!
//! 判断响应是否需要断词处理，并把候选文本交给断词器

use std::sync::Arc;

use http::StatusCode;

use super::error::RewriteError;
use super::options::WordBreakOptions;
use super::ports::HtmlRewriterPort;
use crate::domain::{Segmenter, WordBreakError};

/// 待改写的响应内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// HTML 文档，只处理选择器命中的纯文本元素
    Html,
    /// 其它 text/* 内容，整体作为纯文本处理
    PlainText,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::PlainText => "text",
        }
    }
}

/// 响应改写器
///
/// 构造后只读，通过 `Arc` 在请求间共享
pub struct ResponseRewriter {
    segmenter: Segmenter,
    html_only: bool,
    selector: String,
    max_body_bytes: usize,
    html: Arc<dyn HtmlRewriterPort>,
}

impl ResponseRewriter {
    /// 创建改写器
    ///
    /// 选项非法或选择器无法解析时返回 `InvalidConfiguration`
    pub fn new(
        options: WordBreakOptions,
        html: Arc<dyn HtmlRewriterPort>,
    ) -> Result<Self, WordBreakError> {
        options.validate()?;
        html.validate_selector(&options.selector)
            .map_err(|e| WordBreakError::invalid_configuration(e.to_string()))?;

        Ok(Self {
            segmenter: Segmenter::new(options.segmenter),
            html_only: options.html_only,
            selector: options.selector,
            max_body_bytes: options.max_body_bytes,
            html,
        })
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    /// 根据状态码和 Content-Type 判断是否需要改写
    pub fn classify(&self, status: StatusCode, content_type: Option<&str>) -> Option<ContentKind> {
        if status != StatusCode::OK {
            return None;
        }

        let content_type = content_type?.to_ascii_lowercase();
        if content_type.contains("text/html") {
            return Some(ContentKind::Html);
        }

        if !self.html_only && content_type.contains("text/") {
            return Some(ContentKind::PlainText);
        }

        None
    }

    /// 改写响应体
    pub fn rewrite(&self, kind: ContentKind, body: &str) -> Result<String, RewriteError> {
        match kind {
            ContentKind::PlainText => Ok(self.segmenter.process(body)),
            ContentKind::Html => self.html.rewrite(body, &self.selector, &self.segmenter),
        }
    }
}
