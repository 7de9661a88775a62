use anyhow::{Context, Result};
use quiz_extract::orchestrator::run_categorization;
use quiz_extract::utils::logging;
use quiz_extract::Config;
use tracing::{debug, error};

fn main() {
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
    for rule in &config.category_rules {
        debug!("分类规则: {}", rule);
    }
    logging::log_startup("题目分类", &config.output_file, &config.output_file);

    let stats = run_categorization(config).context("题目分类失败")?;

    logging::print_category_stats(&stats, &config.output_file);

    Ok(())
}
