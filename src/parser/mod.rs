//! 文本 → 题目记录 解析
//!
//! - `line` - 去噪与行分类
//! - `assembly` - 逐行状态机与惰性记录迭代器
//!
//! `QuestionParser::parse` 在此基础上完成最终的完整性过滤。

pub mod assembly;
pub mod line;

pub use assembly::{Assembly, DiscardReason, Records, Step};
pub use line::{LineClassifier, LineKind, ANSWER_MARKER, DEFAULT_NOISE_PATTERNS};

use crate::error::AppResult;
use crate::models::question::QuestionRecord;
use tracing::debug;

/// 解析结果
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// 通过完整性检查的题目，保持源文本顺序
    pub records: Vec<QuestionRecord>,
    /// 组装阶段被放弃的题目数
    pub discarded: usize,
    /// 已关闭但内容不完整（如答案为空）的题目数
    pub incomplete: usize,
}

/// 题目解析器
#[derive(Debug, Clone)]
pub struct QuestionParser {
    classifier: LineClassifier,
}

impl QuestionParser {
    /// 使用内置噪声模式创建解析器
    pub fn new() -> AppResult<Self> {
        Self::with_noise_patterns(DEFAULT_NOISE_PATTERNS)
    }

    /// 使用自定义噪声模式创建解析器
    pub fn with_noise_patterns<S: AsRef<str>>(noise_patterns: &[S]) -> AppResult<Self> {
        Ok(Self {
            classifier: LineClassifier::new(noise_patterns)?,
        })
    }

    /// 惰性地逐条产出题目（未经过完整性过滤）
    pub fn records<'a, 'l, I>(&'a self, lines: I) -> Records<'a, I::IntoIter>
    where
        I: IntoIterator<Item = &'l str>,
    {
        Records::new(&self.classifier, lines.into_iter())
    }

    /// 解析整段文本
    pub fn parse(&self, text: &str) -> ParseOutcome {
        // 兼容 \n、\r\n 以及只用 \r 换行的文本；拆出的空片段按空行处理
        let mut records = self.records(text.split(['\r', '\n']));
        let mut outcome = ParseOutcome::default();

        for record in records.by_ref() {
            if record.is_complete() {
                outcome.records.push(record);
            } else {
                debug!("过滤不完整的题目: {}", record.question);
                outcome.incomplete += 1;
            }
        }
        outcome.discarded = records.discarded();

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::Answer;

    fn parse(text: &str) -> ParseOutcome {
        QuestionParser::new().unwrap().parse(text)
    }

    #[test]
    fn test_three_line_block() {
        let text = "سؤال 1 باقة تجريبية\nA. خيار أول\tB. خيار ثاني\nالإجابة الصحيحة: B. خيار ثاني\n";
        let outcome = parse(text);

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.question, "سؤال 1 باقة تجريبية");
        assert_eq!(
            record.options.iter().collect::<Vec<_>>(),
            vec![("A", "خيار أول"), ("B", "خيار ثاني")]
        );
        assert_eq!(record.answer, Answer::Letter('B'));
        assert_eq!(record.category, None);
    }

    #[test]
    fn test_multi_line_question() {
        let text = "\
1.\tباقة Super Kix 25
كم تبلغ سعتها
الشهرية؟
A. 10 جيجا\tB. 25 جيجا
الإجابة الصحيحة: B. 25 جيجا";
        let outcome = parse(text);

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(
            outcome.records[0].question,
            "1.\tباقة Super Kix 25 كم تبلغ سعتها الشهرية؟"
        );
    }

    #[test]
    fn test_noise_and_separators_between_blocks() {
        let text = "\
سؤال 1 باقة Nitro team-warek.netlify.app
A. 50\tB. 100
الإجابة الصحيحة: A. 50
________________________________________
Telecom Egypt+1

سؤال 2 باقة WE Gold (ملاحظة: عرض محدود)
A. نعم\tB. لا
الإجابة الصحيحة: نعم
________________________________________";
        let outcome = parse(text);

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].question, "سؤال 1 باقة Nitro");
        assert_eq!(outcome.records[1].question, "سؤال 2 باقة WE Gold");
        assert_eq!(outcome.records[1].answer, Answer::Text("نعم".to_string()));
        assert_eq!(outcome.discarded, 0);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let block = ["سؤال 1 باقة", "A. x\tB. y", "الإجابة الصحيحة: A. x", ""];

        for newline in ["\r", "\r\n", "\n"] {
            let outcome = parse(&block.join(newline));
            assert_eq!(outcome.records.len(), 1, "换行符 {:?}", newline);
            assert_eq!(outcome.records[0].question, "سؤال 1 باقة");
            assert_eq!(outcome.records[0].options.len(), 2);
            assert_eq!(outcome.discarded, 0);
        }
    }

    #[test]
    fn test_incomplete_blocks_are_excluded() {
        let text = "\
سؤال 1 بدون خيارات
الإجابة الصحيحة: A. شيء
سؤال 2 بدون إجابة
A. x\tB. y
سؤال 3 إجابة فارغة
A. x\tB. y
الإجابة الصحيحة:
سؤال 4 كامل
A. x\tB. y
الإجابة الصحيحة: A. x
سؤال 5 مبتور
A. x";
        let outcome = parse(text);

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].question, "سؤال 4 كامل");
        // 1: 缺选项, 2: 被下一题取代, 5: 文件截断
        assert_eq!(outcome.discarded, 3);
        // 3: 答案为空
        assert_eq!(outcome.incomplete, 1);
    }

    #[test]
    fn test_every_emitted_record_is_complete() {
        let text = "\
سؤال 1
A. a
الإجابة الصحيحة: D. d
نص يتيم
A. orphan
سؤال 2
نص
B. b\tC. c
الإجابة الصحيحة: C. c";
        let outcome = parse(text);

        assert_eq!(outcome.records.len(), 2);
        assert!(outcome.records.iter().all(|r| r.is_complete()));
    }

    #[test]
    fn test_records_iterator_is_lazy() {
        let parser = QuestionParser::new().unwrap();
        let lines = [
            "سؤال 1 أ",
            "A. x",
            "الإجابة الصحيحة: A. x",
            "سؤال 2 ب",
            "A. y",
            "الإجابة الصحيحة: A. y",
        ];
        let mut records = parser.records(lines);

        assert_eq!(records.next().map(|r| r.question), Some("سؤال 1 أ".to_string()));
        assert_eq!(records.next().map(|r| r.question), Some("سؤال 2 ب".to_string()));
        assert!(records.next().is_none());
        assert!(records.next().is_none());
    }
}
