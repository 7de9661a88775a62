use serde::{Deserialize, Serialize};

/// 未命中任何关键词时使用的分类
pub const DEFAULT_CATEGORY: &str = "General";

/// 内置关键词表，按优先级排列（先命中者优先）
const BUILTIN_RULES: &[(&str, &str)] = &[
    ("WE Gold", "WE Gold"),
    ("Super Kix", "Super Kix"),
    ("Nitro", "Nitro"),
    ("Tazbeet", "Tazbeet"),
    ("WE Life", "WE Life"),
    ("WE SONIC", "WE SONIC"),
    ("WE Space Super", "WE Space Super"),
    ("WE Ardy", "WE Ardy"),
];

/// 关键词 → 分类 规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// 题干中需要包含的子串（区分大小写）
    pub keyword: String,
    /// 命中后赋予的分类
    pub category: String,
}

impl CategoryRule {
    pub fn new(keyword: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            category: category.into(),
        }
    }

    /// 题干是否命中该规则
    pub fn matches(&self, question: &str) -> bool {
        question.contains(&self.keyword)
    }

    /// 内置的有序规则列表
    pub fn builtin() -> Vec<Self> {
        BUILTIN_RULES
            .iter()
            .map(|(keyword, category)| Self::new(*keyword, *category))
            .collect()
    }
}

impl std::fmt::Display for CategoryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' → {}", self.keyword, self.category)
    }
}
