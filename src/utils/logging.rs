//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::services::CategoryStats;

/// 初始化 tracing 订阅者
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `stage`: 阶段名称
/// - `input`: 输入文件
/// - `output`: 输出文件
pub fn log_startup(stage: &str, input: &Path, output: &Path) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", stage);
    info!("📥 输入: {}", input.display());
    info!("📤 输出: {}", output.display());
    info!("{}", "=".repeat(60));
}

/// 记录题目提取完成信息
///
/// # 参数
/// - `accepted`: 写入的题目数
/// - `discarded`: 被丢弃的题目数
/// - `answer_mismatches`: 答案不在选项中的题目数
/// - `output`: 输出文件
pub fn log_extract_complete(accepted: usize, discarded: usize, answer_mismatches: usize, output: &Path) {
    info!("{}", "─".repeat(60));
    if discarded > 0 {
        info!("🗑️ 丢弃不完整的题目: {}", discarded);
    }
    if answer_mismatches > 0 {
        info!("⚠️ 答案与选项不一致: {}", answer_mismatches);
    }
    info!(
        "✅ 成功解析 {} 道题目，已保存至 {}",
        accepted,
        output.display()
    );
    info!("{}", "─".repeat(60));
}

/// 打印分类统计信息
///
/// # 参数
/// - `stats`: 各分类题目数
/// - `output`: 输出文件
pub fn print_category_stats(stats: &CategoryStats, output: &Path) {
    let total: usize = stats.values().sum();

    info!("\n{}", "=".repeat(60));
    info!("📊 分类统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    for (category, count) in stats {
        info!("  {:<16} {}", category, count);
    }
    info!("{}", "=".repeat(60));
    info!("✅ 已为 {} 道题目添加分类", total);
    info!("\n结果已保存至: {}", output.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
