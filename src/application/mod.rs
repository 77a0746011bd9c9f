//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（HtmlRewriterPort）
//! - options: 中间件选项
//! - response_rewriter: 响应改写决策与执行
//! - error: 应用层错误定义

pub mod error;
pub mod options;
pub mod ports;
pub mod response_rewriter;

pub use error::RewriteError;
pub use options::{WordBreakOptions, DEFAULT_MAX_BODY_BYTES, DEFAULT_SELECTOR};
pub use ports::HtmlRewriterPort;
pub use response_rewriter::{ContentKind, ResponseRewriter};
