use anyhow::{Context, Result};
use edu_bank_client::utils::logging;
use edu_bank_client::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置（可选的 TOML 文件 + 环境变量）
    let config_path = std::env::var("EDU_BANK_CONFIG").unwrap_or_else(|_| "edu_bank.toml".to_string());
    let config = Config::load(&config_path).with_context(|| format!("加载配置失败: {}", config_path))?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
