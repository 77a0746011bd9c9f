//! 应用层错误定义

use thiserror::Error;

use crate::domain::WordBreakError;

/// 响应改写错误
#[derive(Debug, Error)]
pub enum RewriteError {
    /// CSS 选择器无法解析
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// 配置无效
    #[error(transparent)]
    Configuration(#[from] WordBreakError),
}

impl RewriteError {
    pub fn invalid_selector(selector: impl Into<String>) -> Self {
        Self::InvalidSelector(selector.into())
    }
}
