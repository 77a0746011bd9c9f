//! Kuchiki HTML Rewriter
//!
//! 解析文档 -> 选择候选元素 -> 改写纯文本元素 -> 重新序列化
//!
//! 注意：kuchikiki 的节点基于 `Rc`，整个改写过程必须同步完成，不能跨 `.await`

use kuchikiki::traits::TendrilSink;
use kuchikiki::{NodeRef, Selectors};

use crate::application::{HtmlRewriterPort, RewriteError};
use crate::domain::wordbreak::BreakSink;
use crate::domain::Segmenter;

/// 基于 kuchikiki 的 HTML 改写器
#[derive(Debug, Clone, Copy, Default)]
pub struct KuchikiHtmlRewriter;

impl KuchikiHtmlRewriter {
    pub fn new() -> Self {
        Self
    }
}

impl HtmlRewriterPort for KuchikiHtmlRewriter {
    fn validate_selector(&self, selector: &str) -> Result<(), RewriteError> {
        Selectors::compile(selector)
            .map(|_| ())
            .map_err(|()| RewriteError::invalid_selector(selector))
    }

    fn rewrite(
        &self,
        html: &str,
        selector: &str,
        segmenter: &Segmenter,
    ) -> Result<String, RewriteError> {
        rewrite_html(html, selector, segmenter)
    }
}

/// 改写 HTML 文档
///
/// 只处理所有子节点都是文本节点的元素，混有子元素或注释的元素原样保留
pub fn rewrite_html(
    html: &str,
    selector: &str,
    segmenter: &Segmenter,
) -> Result<String, RewriteError> {
    let document = kuchikiki::parse_html().one(html);

    // 先收集快照，再修改
    let candidates: Vec<_> = document
        .select(selector)
        .map_err(|()| RewriteError::invalid_selector(selector))?
        .collect();

    let mut rewritten = 0usize;
    for element in &candidates {
        let node = element.as_node();
        if !is_text_leaf(node) {
            continue;
        }

        let text = node.text_contents();
        let mut markup = EscapedMarkup::new(&segmenter.config().break_marker, text.len());
        segmenter.process_into(&text, &mut markup);
        if markup.breaks == 0 {
            continue;
        }

        replace_children(node, &markup.buf);
        rewritten += 1;
    }

    tracing::debug!(
        candidates = candidates.len(),
        rewritten,
        "HTML elements processed"
    );

    Ok(document.to_string())
}

fn is_text_leaf(node: &NodeRef) -> bool {
    node.first_child().is_some() && node.children().all(|child| child.as_text().is_some())
}

/// 用解析后的片段替换元素的全部子节点
fn replace_children(node: &NodeRef, markup: &str) {
    let fragment = kuchikiki::parse_html().one(format!("<body><div>{markup}</div></body>"));
    let Ok(wrapper) = fragment.select_first("body > div") else {
        return;
    };

    for child in node.children().collect::<Vec<_>>() {
        child.detach();
    }
    for child in wrapper.as_node().children().collect::<Vec<_>>() {
        node.append(child);
    }
}

/// 文本做 HTML 转义，断点标记原样输出
struct EscapedMarkup<'m> {
    buf: String,
    marker: &'m str,
    breaks: usize,
}

impl<'m> EscapedMarkup<'m> {
    fn new(marker: &'m str, capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity + 64),
            marker,
            breaks: 0,
        }
    }
}

impl BreakSink for EscapedMarkup<'_> {
    fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '&' => self.buf.push_str("&amp;"),
                '<' => self.buf.push_str("&lt;"),
                '>' => self.buf.push_str("&gt;"),
                _ => self.buf.push(ch),
            }
        }
    }

    fn push_break(&mut self) {
        self.buf.push_str(self.marker);
        self.breaks += 1;
    }
}
