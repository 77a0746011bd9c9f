//! Word Break Context - 断词限界上下文
//!
//! 职责:
//! - 断词配置值对象
//! - 长标识符（点分命名空间 / 驼峰）断点计算

mod errors;
mod segmenter;
mod value_objects;

pub use errors::WordBreakError;
pub use segmenter::{BreakSink, MarkedText, Segmenter};
pub use value_objects::{SegmenterConfig, DEFAULT_BREAK_MARKER, DEFAULT_MIN_LENGTH};
