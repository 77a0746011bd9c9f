//! Wordbreak - 长标识符软换行中间件
//!
//! 在 HTML 响应中为点分命名空间 / 驼峰命名的长单词插入 `<wbr>` 等断点标记，
//! 避免浏览器中长字符串撑破容器
//!
//! 领域层 (domain/):
//! - Word Break Context: 断词配置与断点算法
//!
//! 应用层 (application/):
//! - Ports: HtmlRewriterPort
//! - ResponseRewriter: 判断响应是否需要改写并执行
//!
//! 基础设施层 (infrastructure/):
//! - HTML: kuchikiki 文档改写
//! - HTTP: axum 中间件 + 演示页面

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{ResponseRewriter, WordBreakOptions};
pub use config::{load_config, AppConfig};
pub use domain::{Segmenter, SegmenterConfig, WordBreakError};
pub use infrastructure::http::WordBreakRouterExt;
