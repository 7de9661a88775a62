//! 行级分类
//!
//! 每一行先去掉来源标记等噪声，再按固定优先级归为以下几类之一：
//! 题目起始行、答案行、选项行、普通文本行。

use crate::error::{AppError, AppResult};
use crate::models::question::{Answer, Options, OPTION_LETTERS};
use regex::Regex;

/// 题号标记："سؤال N" 或行首的 "N."
const QUESTION_START_PATTERN: &str = r"^(سؤال\s+\d+|\d+\.\s+)";
/// 答案行前缀："الإجابة الصحيحة:"
pub const ANSWER_MARKER: &str = "الإجابة الصحيحة:";
/// 分隔线前缀
const SEPARATOR_PREFIX: &str = "____";

/// 默认的噪声标记（来源水印、编者注）
pub const DEFAULT_NOISE_PATTERNS: &[&str] = &[
    r"team-warek\.netlify\.app",
    r"Telecom Egypt\+1",
    r"\(ملاحظة:.*\)",
];

/// 单行的分类结果
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    /// 空行（含去噪后为空的行）
    Blank,
    /// 下划线分隔线
    Separator,
    /// 题目起始行，携带整行文本
    QuestionStart(String),
    /// 答案行
    Answer(Answer),
    /// 选项行，携带完整选项表
    Options(Options),
    /// 其他文本
    Text(String),
}

/// 行分类器，持有编译好的正则
#[derive(Debug, Clone)]
pub struct LineClassifier {
    noise: Option<Regex>,
    question_start: Regex,
    answer_letter: Regex,
    options_line: Regex,
    option_marker: Regex,
}

impl LineClassifier {
    /// 使用给定的噪声模式创建分类器
    ///
    /// 所有模式合并为一个交替表达式，任一模式无效时返回错误
    pub fn new<S: AsRef<str>>(noise_patterns: &[S]) -> AppResult<Self> {
        for pattern in noise_patterns {
            let pattern = pattern.as_ref();
            Regex::new(pattern).map_err(|e| AppError::invalid_pattern(pattern, e))?;
        }

        let noise = if noise_patterns.is_empty() {
            None
        } else {
            let joined = noise_patterns
                .iter()
                .map(|p| format!("(?:{})", p.as_ref()))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&joined)?)
        };

        let letters = letter_class();
        Ok(Self {
            noise,
            question_start: compile(QUESTION_START_PATTERN)?,
            // 答案正文以 "<字母>." 开头时只取字母
            answer_letter: compile(&format!(r"^({})\.\s*", letters))?,
            // 行内至少出现一个 "<字母>. " 即视为选项行
            options_line: compile(&format!(r"{}\.\s+", letters))?,
            option_marker: compile(&format!(r"\s*({})\.\s*", letters))?,
        })
    }

    /// 去噪并修剪一行，结果可能为空串
    pub fn normalize(&self, raw: &str) -> String {
        let line = raw.trim();
        if line.is_empty() {
            return String::new();
        }
        match &self.noise {
            Some(noise) => noise.replace_all(line, "").trim().to_string(),
            None => line.to_string(),
        }
    }

    /// 对一行原始文本进行分类
    pub fn classify(&self, raw: &str) -> LineKind {
        let line = self.normalize(raw);

        if line.is_empty() {
            return LineKind::Blank;
        }
        if line.starts_with(SEPARATOR_PREFIX) {
            return LineKind::Separator;
        }
        if self.question_start.is_match(&line) {
            return LineKind::QuestionStart(line);
        }
        if let Some(rest) = line.strip_prefix(ANSWER_MARKER) {
            return LineKind::Answer(self.parse_answer(rest.trim()));
        }
        if self.options_line.is_match(&line) {
            return LineKind::Options(self.split_options(&line));
        }
        LineKind::Text(line)
    }

    /// 解析答案正文
    pub fn parse_answer(&self, text: &str) -> Answer {
        match self
            .answer_letter
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
        {
            Some(letter) => Answer::Letter(letter),
            None => Answer::Text(text.to_string()),
        }
    }

    /// 按选项标记切分一行
    ///
    /// 每个字母对应其后直到下一个标记（或行尾）的文本；首个标记之前的内容丢弃
    pub fn split_options(&self, line: &str) -> Options {
        let markers: Vec<(usize, usize, &str)> = self
            .option_marker
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let letter = caps.get(1)?;
                Some((whole.start(), whole.end(), letter.as_str()))
            })
            .collect();

        let mut options = Options::new();
        for (i, (_, text_start, letter)) in markers.iter().enumerate() {
            let text_end = markers
                .get(i + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(line.len());
            options.insert(*letter, line[*text_start..text_end].trim());
        }
        options
    }
}

/// 由选项字母表生成的正则字符类，如 `[ABCD]`
fn letter_class() -> String {
    format!("[{}]", OPTION_LETTERS.iter().collect::<String>())
}

fn compile(pattern: &str) -> AppResult<Regex> {
    Regex::new(pattern).map_err(|e| AppError::invalid_pattern(pattern, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LineClassifier {
        LineClassifier::new(DEFAULT_NOISE_PATTERNS).unwrap()
    }

    #[test]
    fn test_noise_is_stripped() {
        let c = classifier();
        assert_eq!(
            c.normalize("  باقة Nitro team-warek.netlify.app "),
            "باقة Nitro"
        );
        assert_eq!(c.normalize("Telecom Egypt+1"), "");
        assert_eq!(
            c.normalize("سعر الباقة (ملاحظة: السعر قد يتغير)"),
            "سعر الباقة"
        );
        assert_eq!(c.classify("Telecom Egypt+1"), LineKind::Blank);
    }

    #[test]
    fn test_separator_and_blank() {
        let c = classifier();
        assert_eq!(c.classify("________________________________________"), LineKind::Separator);
        assert_eq!(c.classify("   "), LineKind::Blank);
    }

    #[test]
    fn test_question_start_variants() {
        let c = classifier();
        assert_eq!(
            c.classify("سؤال 2 ما هي سرعة باقة WE SONIC؟"),
            LineKind::QuestionStart("سؤال 2 ما هي سرعة باقة WE SONIC؟".to_string())
        );
        assert_eq!(
            c.classify("1.\tباقة Super Kix 25"),
            LineKind::QuestionStart("1.\tباقة Super Kix 25".to_string())
        );
        // 没有空白的 "1." 不是题号
        assert!(matches!(c.classify("1.5 جيجا"), LineKind::Text(_)));
    }

    #[test]
    fn test_answer_line() {
        let c = classifier();
        assert_eq!(
            c.classify("الإجابة الصحيحة: C. 30 جيجابايت"),
            LineKind::Answer(Answer::Letter('C'))
        );
        assert_eq!(
            c.classify("الإجابة الصحيحة:B.خيار"),
            LineKind::Answer(Answer::Letter('B'))
        );
        assert_eq!(
            c.classify("الإجابة الصحيحة: صح"),
            LineKind::Answer(Answer::Text("صح".to_string()))
        );
        assert_eq!(
            c.classify("الإجابة الصحيحة:"),
            LineKind::Answer(Answer::Text(String::new()))
        );
    }

    #[test]
    fn test_options_line_tab_separated() {
        let c = classifier();
        let LineKind::Options(options) = c.classify("A. 10 جنيه\tB. 20 جنيه\tC. 30 جنيه\tD. 40 جنيه")
        else {
            panic!("应识别为选项行");
        };
        let pairs: Vec<_> = options.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("A", "10 جنيه"),
                ("B", "20 جنيه"),
                ("C", "30 جنيه"),
                ("D", "40 جنيه"),
            ]
        );
    }

    #[test]
    fn test_options_text_recovered_verbatim() {
        let c = classifier();
        let texts = ["خيار أول طويل", "Nitro 50", "لا شيء مما سبق"];
        let line = format!("A. {}   B. {}  C. {}", texts[0], texts[1], texts[2]);

        let options = c.split_options(&line);
        let recovered: Vec<&str> = options.iter().map(|(_, t)| t).collect();
        assert_eq!(recovered, texts);
    }

    #[test]
    fn test_options_prefix_text_discarded() {
        let c = classifier();
        let options = c.split_options("اختر: A. نعم B. لا");
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(options.get("A"), Some("نعم"));
    }

    #[test]
    fn test_option_markers_follow_alphabet() {
        assert_eq!(letter_class(), "[ABCD]");

        let c = classifier();
        assert!(matches!(c.classify("E. خيار خامس"), LineKind::Text(_)));
        assert_eq!(
            c.classify("الإجابة الصحيحة: E. خيار"),
            LineKind::Answer(Answer::Text("E. خيار".to_string()))
        );
        let options = c.split_options("A. أول E. ليس خيارا D. رابع");
        assert_eq!(options.keys().collect::<Vec<_>>(), vec!["A", "D"]);
        assert_eq!(options.get("A"), Some("أول E. ليس خيارا"));
    }

    #[test]
    fn test_plain_text() {
        let c = classifier();
        assert_eq!(
            c.classify("بكم جنيه شهريا؟"),
            LineKind::Text("بكم جنيه شهريا؟".to_string())
        );
    }

    #[test]
    fn test_custom_noise_patterns() {
        let c = LineClassifier::new(&["SPAM"]).unwrap();
        assert_eq!(c.normalize("سؤال SPAM 5"), "سؤال  5");

        let none: [&str; 0] = [];
        let c = LineClassifier::new(&none).unwrap();
        assert_eq!(c.normalize("Telecom Egypt+1"), "Telecom Egypt+1");
    }

    #[test]
    fn test_invalid_noise_pattern() {
        assert!(LineClassifier::new(&["(unclosed"]).is_err());
    }
}
