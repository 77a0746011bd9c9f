//! 断词器
//!
//! 在长标识符中插入软换行标记：
//! 1. 按空格拆分单词（仅识别 ASCII 空格）
//! 2. 单词按 `.` 拆分片段，点号之后插入标记
//! 3. 片段内部在 小写/数字 -> 大写 的位置插入标记
//!
//! 单词级与片段级都受同一个最小字符数限制，两次判断互相独立

use unicode_general_category::{get_general_category, GeneralCategory};

use super::value_objects::SegmenterConfig;

/// 断点输出目标
///
/// 扫描过程只产生两类事件：原文片段与断点
pub trait BreakSink {
    /// 追加原文
    fn push_text(&mut self, text: &str);

    /// 在当前位置插入一个断点
    fn push_break(&mut self);
}

/// 直接把标记字面量拼进字符串
#[derive(Debug)]
pub struct MarkedText<'m> {
    buf: String,
    marker: &'m str,
    breaks: usize,
}

impl<'m> MarkedText<'m> {
    pub fn with_capacity(marker: &'m str, capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            marker,
            breaks: 0,
        }
    }

    /// 已插入的断点数量
    pub fn breaks(&self) -> usize {
        self.breaks
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl BreakSink for MarkedText<'_> {
    #[inline]
    fn push_text(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    #[inline]
    fn push_break(&mut self) {
        self.buf.push_str(self.marker);
        self.breaks += 1;
    }
}

/// 断词器
///
/// 无内部状态，配置在构造时固定，可跨线程共享
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(SegmenterConfig::default())
    }
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// 对文本插入断点标记
    ///
    /// 空串、纯空白或字符数不足 `min_length` 时原样返回
    pub fn process(&self, text: &str) -> String {
        if self.is_passthrough(text) {
            return text.to_string();
        }

        // 预留一些额外空间给标记
        let mut out = MarkedText::with_capacity(&self.config.break_marker, text.len() + 64);
        self.write_words(text, &mut out);
        out.into_string()
    }

    /// 与 [`Segmenter::process`] 相同的扫描，结果写入任意 [`BreakSink`]
    pub fn process_into<S: BreakSink + ?Sized>(&self, text: &str, sink: &mut S) {
        if self.is_passthrough(text) {
            sink.push_text(text);
            return;
        }
        self.write_words(text, sink);
    }

    fn is_passthrough(&self, text: &str) -> bool {
        text.trim().is_empty() || char_len(text) < self.config.min_length
    }

    fn write_words<S: BreakSink + ?Sized>(&self, text: &str, sink: &mut S) {
        for (i, word) in text.split(' ').enumerate() {
            if i > 0 {
                sink.push_text(" ");
            }
            self.process_word(word, sink);
        }
    }

    fn process_word<S: BreakSink + ?Sized>(&self, word: &str, sink: &mut S) {
        if char_len(word) < self.config.min_length {
            sink.push_text(word);
            return;
        }

        if !word.contains('.') {
            if self.config.require_dot_for_case_breaks {
                sink.push_text(word);
            } else {
                self.process_segment(word, sink);
            }
            return;
        }

        let mut start = 0;
        for (dot, _) in word.match_indices('.') {
            self.process_segment(&word[start..dot], sink);
            sink.push_text(".");
            // 单词末尾的点号之后不加标记
            if dot + 1 < word.len() {
                sink.push_break();
            }
            start = dot + 1;
        }
        self.process_segment(&word[start..], sink);
    }

    fn process_segment<S: BreakSink + ?Sized>(&self, segment: &str, sink: &mut S) {
        if segment.is_empty() {
            return;
        }
        if char_len(segment) < self.config.min_length {
            sink.push_text(segment);
            return;
        }

        let mut run_start = 0;
        let mut prev: Option<char> = None;
        for (idx, ch) in segment.char_indices() {
            if prev.is_some_and(|p| is_case_transition(p, ch)) {
                sink.push_text(&segment[run_start..idx]);
                sink.push_break();
                run_start = idx;
            }
            prev = Some(ch);
        }
        sink.push_text(&segment[run_start..]);
    }
}

/// 小写字母 (Ll) 或十进制数字 (Nd) 之后紧跟大写字母 (Lu)
#[inline]
fn is_case_transition(prev: char, current: char) -> bool {
    get_general_category(current) == GeneralCategory::UppercaseLetter
        && matches!(
            get_general_category(prev),
            GeneralCategory::LowercaseLetter | GeneralCategory::DecimalNumber
        )
}

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}
