//! 日志工具模块
//!
//! 提供日志初始化、运行日志文件和统计输出的辅助函数

use crate::models::UploadSummary;
use anyhow::Result;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 订阅者
///
/// 优先使用 `RUST_LOG`，否则根据 `verbose` 选择 debug / info 级别。
/// 重复调用是安全的（例如在多个测试中）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化运行日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n上传处理日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(api_base_url: &str, upload_delay_ms: u64) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 顺序上传模式");
    info!("🌐 后端地址: {}", api_base_url);
    info!("⏱️ 上传间隔: {} ms", upload_delay_ms);
    info!("{}", "=".repeat(60));
}

/// 记录文件加载信息
pub fn log_files_loaded(total: usize, folder: &str) {
    info!("✓ 在 {} 中找到 {} 个待上传的文件", folder, total);
    info!("💡 文件将逐个上传，每次上传后稍作等待\n");
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &UploadSummary, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部上传完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", summary.succeeded, summary.total());
    info!("❌ 失败: {}", summary.failed);
    info!("📝 {}", summary.message());
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
