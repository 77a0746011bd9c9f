//! HTML Rewriter Port - HTML 文档改写抽象
//!
//! 文档解析、元素选择与序列化交给第三方 DOM 库，具体实现在 infrastructure/html 层

use crate::application::error::RewriteError;
use crate::domain::Segmenter;

/// HTML Rewriter Port
///
/// 实现方必须保证：
/// - 只把不含子元素的纯文本节点交给断词器
/// - 未被选择器命中的内容原样保留
pub trait HtmlRewriterPort: Send + Sync {
    /// 校验选择器语法
    fn validate_selector(&self, selector: &str) -> Result<(), RewriteError>;

    /// 改写文档中被选择器命中的元素文本，返回序列化后的文档
    fn rewrite(
        &self,
        html: &str,
        selector: &str,
        segmenter: &Segmenter,
    ) -> Result<String, RewriteError>;
}
