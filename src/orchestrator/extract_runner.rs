//! 题目提取流程：原始文本 → questions.json

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::loaders::save_questions;
use crate::models::question::QuestionRecord;
use crate::parser::QuestionParser;
use crate::utils::logging::truncate_text;
use std::fs;
use tracing::{info, warn};

/// 提取统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractStats {
    /// 写入输出文件的题目数
    pub accepted: usize,
    /// 组装阶段放弃或完整性检查未通过的题目数
    pub discarded: usize,
    /// 字母答案不在选项中的题目数
    pub answer_mismatches: usize,
}

/// 执行一次完整的题目提取
///
/// 读取、解析、校验全部在内存中完成，之后才写入输出文件
pub fn run_extraction(config: &Config) -> AppResult<ExtractStats> {
    let input = &config.input_file;
    if !input.exists() {
        return Err(AppError::file_not_found(input));
    }

    info!("📄 正在读取: {}", input.display());
    let content = fs::read_to_string(input).map_err(|e| AppError::file_read_failed(input, e))?;

    let parser = QuestionParser::with_noise_patterns(config.noise_patterns.as_slice())?;
    let outcome = parser.parse(&content);

    let mut stats = ExtractStats {
        discarded: outcome.discarded + outcome.incomplete,
        ..Default::default()
    };

    let records = check_answers(outcome.records, config.strict_answer_check, &mut stats);
    stats.accepted = records.len();

    save_questions(&config.output_file, &records)?;

    Ok(stats)
}

/// 校验字母答案是否存在于选项中
///
/// 严格模式下丢弃不一致的题目，否则只记录警告
fn check_answers(
    records: Vec<QuestionRecord>,
    strict: bool,
    stats: &mut ExtractStats,
) -> Vec<QuestionRecord> {
    records
        .into_iter()
        .filter(|record| {
            if record.answer_in_options() != Some(false) {
                return true;
            }
            stats.answer_mismatches += 1;
            warn!(
                "⚠️ 答案 {} 不在选项 [{}] 中: {}",
                record.answer,
                record.options.keys().collect::<Vec<_>>().join(", "),
                truncate_text(&record.question, 60)
            );
            if strict {
                stats.discarded += 1;
            }
            !strict
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::loaders::load_questions;
    use crate::models::question::Answer;

    const DUMP: &str = "\
سؤال 1 باقة Nitro
A. 50\tB. 100
الإجابة الصحيحة: A. 50
________________________________________
سؤال 2 باقة WE Life
A. نعم\tB. لا
الإجابة الصحيحة: D. غير موجود
________________________________________
سؤال 3 مبتور
A. x";

    fn config_in(dir: &std::path::Path) -> Config {
        let input = dir.join("pasted_content.txt");
        fs::write(&input, DUMP).unwrap();
        Config {
            input_file: input,
            output_file: dir.join("quiz_game").join("questions.json"),
            ..Config::default()
        }
    }

    #[test]
    fn test_lenient_keeps_mismatched_answer() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = config_in(temp_dir.path());

        let stats = run_extraction(&config).unwrap();
        assert_eq!(
            stats,
            ExtractStats {
                accepted: 2,
                discarded: 1,
                answer_mismatches: 1,
            }
        );

        let saved = load_questions(&config.output_file).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].answer, Answer::Letter('D'));
    }

    #[test]
    fn test_strict_drops_mismatched_answer() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            strict_answer_check: true,
            ..config_in(temp_dir.path())
        };

        let stats = run_extraction(&config).unwrap();
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.discarded, 2);
        assert_eq!(stats.answer_mismatches, 1);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            input_file: temp_dir.path().join("missing.txt"),
            output_file: temp_dir.path().join("out").join("questions.json"),
            ..Config::default()
        };

        let err = run_extraction(&config).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
        assert!(!config.output_file.exists());
        assert!(!temp_dir.path().join("out").exists());
    }

    #[test]
    fn test_invalid_noise_pattern_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            noise_patterns: vec!["(".to_string()],
            ..config_in(temp_dir.path())
        };

        assert!(run_extraction(&config).is_err());
        assert!(!config.output_file.exists());
    }
}
