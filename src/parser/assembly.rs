//! 题目组装状态机
//!
//! 逐行驱动的有限状态累加器：
//!
//! ```text
//! Idle ──题号──▶ AwaitingOptions ──选项──▶ AwaitingAnswer ──答案──▶ 产出记录, Idle
//!                  │  ▲ 文本续行               │  ▲ 文本续行 / 选项覆盖
//!                  └──┘                        └──┘
//! ```
//!
//! 只有答案行可以关闭一道题；输入结束时仍未关闭的题目会被丢弃。

use crate::models::question::{Options, QuestionRecord};
use crate::parser::line::{LineClassifier, LineKind};
use crate::utils::logging::truncate_text;
use tracing::debug;

/// 组装状态
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Assembly {
    /// 没有正在组装的题目
    #[default]
    Idle,
    /// 已读到题干，等待选项行
    AwaitingOptions { question: String },
    /// 题干和选项齐全，等待答案行
    AwaitingAnswer { question: String, options: Options },
}

/// 单步转移的产出
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// 无产出
    Continue,
    /// 一道题被答案行关闭
    Emit(QuestionRecord),
    /// 一道未完成的题目被放弃
    Discard(Discarded),
}

/// 被放弃的题目及原因
#[derive(Debug, Clone, PartialEq)]
pub struct Discarded {
    pub question: String,
    pub reason: DiscardReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// 答案之前就出现了新的题号
    Superseded,
    /// 读到答案行时还没有选项
    MissingOptions,
    /// 输入结束时仍未读到答案
    Truncated,
}

impl std::fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            DiscardReason::Superseded => "未读到答案即开始下一题",
            DiscardReason::MissingOptions => "缺少选项",
            DiscardReason::Truncated => "文件结束时缺少答案",
        };
        f.write_str(text)
    }
}

impl Assembly {
    /// 当前是否有题目在组装中
    pub fn in_progress(&self) -> bool {
        !matches!(self, Assembly::Idle)
    }

    /// 喂入一行的分类结果，就地转移状态
    pub fn feed(&mut self, line: LineKind) -> Step {
        let state = std::mem::take(self);

        let (next, step) = match (state, line) {
            (state, LineKind::Blank | LineKind::Separator) => (state, Step::Continue),

            (state, LineKind::QuestionStart(question)) => {
                let step = match state.into_question() {
                    Some(previous) => Step::Discard(Discarded {
                        question: previous,
                        reason: DiscardReason::Superseded,
                    }),
                    None => Step::Continue,
                };
                (Assembly::AwaitingOptions { question }, step)
            }

            (Assembly::AwaitingAnswer { question, options }, LineKind::Answer(answer)) => (
                Assembly::Idle,
                Step::Emit(QuestionRecord::new(question, options, answer)),
            ),
            (Assembly::AwaitingOptions { question }, LineKind::Answer(_)) => (
                Assembly::Idle,
                Step::Discard(Discarded {
                    question,
                    reason: DiscardReason::MissingOptions,
                }),
            ),

            // 一行即完整选项集，覆盖而非合并
            (
                Assembly::AwaitingOptions { question } | Assembly::AwaitingAnswer { question, .. },
                LineKind::Options(options),
            ) => (Assembly::AwaitingAnswer { question, options }, Step::Continue),

            (Assembly::AwaitingOptions { mut question }, LineKind::Text(text)) => {
                append_line(&mut question, &text);
                (Assembly::AwaitingOptions { question }, Step::Continue)
            }
            (
                Assembly::AwaitingAnswer {
                    mut question,
                    options,
                },
                LineKind::Text(text),
            ) => {
                append_line(&mut question, &text);
                (Assembly::AwaitingAnswer { question, options }, Step::Continue)
            }

            (Assembly::Idle, line) => {
                debug!("忽略无归属的行: {:?}", line);
                (Assembly::Idle, Step::Continue)
            }
        };

        *self = next;
        step
    }

    /// 输入结束：未关闭的题目一律放弃
    pub fn finish(&mut self) -> Option<Discarded> {
        std::mem::take(self)
            .into_question()
            .map(|question| Discarded {
                question,
                reason: DiscardReason::Truncated,
            })
    }

    fn into_question(self) -> Option<String> {
        match self {
            Assembly::Idle => None,
            Assembly::AwaitingOptions { question } | Assembly::AwaitingAnswer { question, .. } => {
                Some(question)
            }
        }
    }
}

fn append_line(question: &mut String, text: &str) {
    question.push(' ');
    question.push_str(text);
}

/// 惰性产出题目记录的迭代器
///
/// 每次 `next()` 只消费到下一道被关闭的题目为止
pub struct Records<'a, I> {
    classifier: &'a LineClassifier,
    lines: I,
    state: Assembly,
    discarded: usize,
    finished: bool,
}

impl<'a, I> Records<'a, I> {
    pub fn new(classifier: &'a LineClassifier, lines: I) -> Self {
        Self {
            classifier,
            lines,
            state: Assembly::Idle,
            discarded: 0,
            finished: false,
        }
    }

    /// 迄今为止被放弃的题目数
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    fn record_discard(&mut self, discarded: Discarded) {
        self.discarded += 1;
        debug!(
            "⚠️ 放弃题目 ({}): {}",
            discarded.reason,
            truncate_text(&discarded.question, 60)
        );
    }
}

impl<'a, 'l, I> Iterator for Records<'a, I>
where
    I: Iterator<Item = &'l str>,
{
    type Item = QuestionRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(raw) = self.lines.next() {
            let kind = self.classifier.classify(raw);
            match self.state.feed(kind) {
                Step::Continue => {}
                Step::Emit(record) => return Some(record),
                Step::Discard(discarded) => self.record_discard(discarded),
            }
        }

        self.finished = true;
        if let Some(discarded) = self.state.finish() {
            self.record_discard(discarded);
        }
        None
    }
}
