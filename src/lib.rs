//! # Quiz Extract
//!
//! 把抓取来的阿拉伯语选择题纯文本整理成结构化 JSON，并按关键词添加分类
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/question` - `QuestionRecord`、有序选项表 `Options`、答案 `Answer`
//! - `models/category` - 有序关键词规则与默认分类
//! - `models/loaders` - questions.json 的读写
//!
//! ### ② 解析层（Parser）
//! - `parser/line` - 去噪与逐行分类
//! - `parser/assembly` - 题目组装状态机
//!
//! ### ③ 业务能力层（Services）
//! - `Categorizer` - 关键词分类能力
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/extract_runner` - 文本 → JSON
//! - `orchestrator/categorize_runner` - JSON → 带分类的 JSON
//!
//! 两个流程分别由 `extract_questions` 与 `add_categories` 两个可执行文件驱动。

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Answer, CategoryRule, Options, QuestionRecord, DEFAULT_CATEGORY};
pub use orchestrator::{run_categorization, run_extraction, ExtractStats};
pub use parser::{ParseOutcome, QuestionParser};
pub use services::{Categorizer, CategoryStats};
