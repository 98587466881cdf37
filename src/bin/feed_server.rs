use anyhow::Context;
use clap::Parser;
use weiz_feed::utils::{logger, validation::{self, Validate}};
use weiz_feed::web::{self, AppState};
use weiz_feed::{build_engine, TomlConfig};

#[derive(Parser)]
#[command(name = "feed_server")]
#[command(about = "Serve the homepage feed proxy and article API")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the bind address from config
    #[arg(long)]
    bind: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置，沒有檔案時用預設值
    let mut config = match &args.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };

    // 環境變數與命令列覆蓋設定
    config.apply_env_overrides();
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }

    logger::init_server_logger(args.verbose || config.logging.verbose, config.logging.json);
    tracing::info!("🚀 Starting feed server");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        anyhow::bail!(e.user_friendly_message());
    }

    let addr = validation::validate_socket_addr("server.bind", &config.server.bind)?;
    let engine = build_engine(&config).context("failed to initialise feed engine")?;

    web::serve(addr, AppState::new(engine))
        .await
        .context("server terminated with an error")?;

    Ok(())
}
