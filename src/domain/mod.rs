//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Word Break Context: 长标识符断词

pub mod wordbreak;

pub use wordbreak::{Segmenter, SegmenterConfig, WordBreakError};
