//! HTML Layer - 基于 kuchikiki (html5ever) 的文档改写

mod kuchiki_rewriter;

pub use kuchiki_rewriter::{rewrite_html, KuchikiHtmlRewriter};
