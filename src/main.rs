use anyhow::Context;
use clap::Parser;
use weiz_feed::utils::error::ErrorSeverity;
use weiz_feed::utils::{logger, validation::Validate};
use weiz_feed::{build_engine, CliConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 驗證並合併配置，日誌層級可能來自設定檔
    let config = match cli.validate().and_then(|_| cli.resolve()) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            exit_with(e)
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.logging.verbose);

    tracing::info!("Starting weiz-feed CLI");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(e) => exit_with(e),
    };

    // 管線本身不會失敗，最差回傳靜態文章
    let report = engine.run_report().await;
    if report.is_fallback() {
        tracing::warn!("Printing fallback articles (stopped at {:?})", report.failed_at);
    }

    let json = serde_json::to_string_pretty(&report.articles)
        .context("failed to serialize article list")?;
    println!("{}", json);

    Ok(())
}

fn exit_with(e: weiz_feed::FeedError) -> ! {
    tracing::error!(
        "❌ Configuration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
