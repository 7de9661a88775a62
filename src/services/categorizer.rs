//! 分类服务 - 业务能力层
//!
//! 按有序关键词表为题目打分类标签，先命中者优先

use crate::models::category::{CategoryRule, DEFAULT_CATEGORY};
use crate::models::question::QuestionRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// 分类统计：分类 → 题目数
pub type CategoryStats = BTreeMap<String, usize>;

/// 关键词分类器
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
}

impl Categorizer {
    /// 使用给定的有序规则创建
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// 判定单个题干的分类
    pub fn classify(&self, question: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.matches(question))
            .map(|rule| rule.category.as_str())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// 为所有题目写入分类（覆盖旧值），返回各分类数量
    pub fn apply(&self, records: &mut [QuestionRecord]) -> CategoryStats {
        let mut stats = CategoryStats::new();

        for record in records.iter_mut() {
            let category = self.classify(&record.question).to_string();
            debug!("分类: {} → {}", record.question, category);
            *stats.entry(category.clone()).or_insert(0) += 1;
            record.category = Some(category);
        }

        stats
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(CategoryRule::builtin())
    }
}
