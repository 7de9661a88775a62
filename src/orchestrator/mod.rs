//! 编排层（Orchestration Layer）
//!
//! 两个互相独立的一次性批处理，通过文件交接：
//!
//! ```text
//! extract_runner     原始文本 ──parser──▶ questions.json
//!                                              │
//! categorize_runner  questions.json ──categorizer──▶ questions.json（就地覆盖）
//! ```
//!
//! 本层只做读写与统计，不做具体的解析或分类判断。

pub mod categorize_runner;
pub mod extract_runner;

pub use categorize_runner::run_categorization;
pub use extract_runner::{run_extraction, ExtractStats};
