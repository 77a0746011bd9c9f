//! Application State
//!
//! 按请求构造断词改写器所需的共享状态

use std::sync::Arc;

use crate::application::{HtmlRewriterPort, WordBreakOptions};
use crate::infrastructure::html::KuchikiHtmlRewriter;

/// 应用状态
pub struct AppState {
    /// 断词默认选项（查询参数在此基础上覆盖）
    pub wordbreak: WordBreakOptions,

    /// HTML 改写实现
    pub html_rewriter: Arc<dyn HtmlRewriterPort>,
}

impl AppState {
    /// 创建应用状态，使用 kuchikiki 改写 HTML
    pub fn new(wordbreak: WordBreakOptions) -> Self {
        Self::with_html_rewriter(wordbreak, Arc::new(KuchikiHtmlRewriter::new()))
    }

    pub fn with_html_rewriter(
        wordbreak: WordBreakOptions,
        html_rewriter: Arc<dyn HtmlRewriterPort>,
    ) -> Self {
        Self {
            wordbreak,
            html_rewriter,
        }
    }
}
