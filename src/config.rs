use crate::error::{AppResult, ConfigError};
use crate::models::category::CategoryRule;
use crate::parser::DEFAULT_NOISE_PATTERNS;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认的配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "quiz_config.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 原始题目文本
    pub input_file: PathBuf,
    /// 题目 JSON 输出（同时也是分类步骤的输入）
    pub output_file: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 字母答案不在选项中时是否丢弃该题
    pub strict_answer_check: bool,
    /// 需要从每行中剔除的噪声（正则）
    pub noise_patterns: Vec<String>,
    /// 有序的关键词分类规则
    pub category_rules: Vec<CategoryRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("upload/pasted_content.txt"),
            output_file: PathBuf::from("quiz_game/questions.json"),
            verbose_logging: false,
            strict_answer_check: false,
            noise_patterns: DEFAULT_NOISE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            category_rules: CategoryRule::builtin(),
        }
    }
}

impl Config {
    /// 加载配置：TOML 文件（如存在）→ 环境变量覆盖
    ///
    /// 配置文件路径取自 `QUIZ_CONFIG`，未设置时尝试当前目录下的 `quiz_config.toml`
    pub fn load() -> AppResult<Self> {
        let config = match std::env::var("QUIZ_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_toml_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            Err(_) => Self::default(),
        };
        config.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件读取，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::AppError::file_read_failed(path, e))?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &Path) -> AppResult<Self> {
        let config = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 用环境变量覆盖路径和开关
    fn with_env_overrides<F>(mut self, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("INPUT_FILE") {
            self.input_file = PathBuf::from(v);
        }
        if let Some(v) = lookup("OUTPUT_FILE") {
            self.output_file = PathBuf::from(v);
        }
        if let Some(v) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging = parse_bool("VERBOSE_LOGGING", &v)?;
        }
        if let Some(v) = lookup("STRICT_ANSWER_CHECK") {
            self.strict_answer_check = parse_bool("STRICT_ANSWER_CHECK", &v)?;
        }
        Ok(self)
    }
}

fn parse_bool(var_name: &str, value: &str) -> AppResult<bool> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: "bool".to_string(),
        }
        .into()
    })
}
