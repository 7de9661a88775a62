//! 分类流程：就地为 questions.json 中的题目添加分类

use crate::config::Config;
use crate::error::AppResult;
use crate::models::loaders::{load_questions, save_questions};
use crate::services::{Categorizer, CategoryStats};
use tracing::info;

/// 执行一次分类并覆盖写回同一文件
pub fn run_categorization(config: &Config) -> AppResult<CategoryStats> {
    let path = &config.output_file;

    let mut records = load_questions(path)?;
    info!("✓ 读取到 {} 道题目", records.len());

    let categorizer = Categorizer::new(config.category_rules.clone());
    let stats = categorizer.apply(&mut records);

    save_questions(path, &records)?;

    Ok(stats)
}
