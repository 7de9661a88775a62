use anyhow::{Context, Result};
use quiz_extract::orchestrator::run_extraction;
use quiz_extract::utils::logging;
use quiz_extract::Config;
use tracing::{debug, error};

fn main() {
    // 先加载配置，以便按 verbose_logging 初始化日志
    let config = Config::load();
    logging::init(config.as_ref().map(|c| c.verbose_logging).unwrap_or(false));

    let result = config
        .context("无法加载配置")
        .and_then(|config| run(&config));

    if let Err(e) = result {
        error!("❌ 发生错误: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    debug!("配置: {:?}", config);
    logging::log_startup("题目提取", &config.input_file, &config.output_file);

    let stats = run_extraction(config).context("题目提取失败")?;

    logging::log_extract_complete(
        stats.accepted,
        stats.discarded,
        stats.answer_mismatches,
        &config.output_file,
    );

    Ok(())
}
