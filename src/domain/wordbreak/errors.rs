//! Word Break Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordBreakError {
    #[error("无效的断词配置: {0}")]
    InvalidConfiguration(String),
}

impl WordBreakError {
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
