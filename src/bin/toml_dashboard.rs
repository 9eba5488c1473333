use anyhow::Context;
use clap::Parser;
use report_widgets::core::ConfigProvider;
use report_widgets::utils::{logger, validation::Validate};
use report_widgets::{render_dashboard, DashboardConfig};

#[derive(Parser)]
#[command(name = "toml-dashboard")]
#[command(about = "Render a dashboard described by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "dashboard.toml")]
    config: String,

    /// Override the reporting API base URL from config
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show which reports would be requested without fetching them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = DashboardConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    // 應用命令列覆蓋設定
    if let Some(base_url) = args.base_url {
        tracing::info!("🔧 base_url overridden to: {}", base_url);
        config.override_base_url(base_url);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        perform_dry_run(&config)?;
        return Ok(());
    }

    match render_dashboard(&config).await {
        Ok(run) => {
            tracing::info!(
                "✅ Dashboard '{}' rendered {}/{} widgets",
                config.dashboard.name,
                run.summary.rendered,
                run.summary.total()
            );
            println!("{}", run.page.to_json_pretty()?);
        }
        Err(e) => {
            tracing::error!(
                "❌ Dashboard failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn perform_dry_run(config: &DashboardConfig) -> anyhow::Result<()> {
    println!("🔍 Dry Run: {}", config.dashboard.name);
    if let Some(description) = &config.dashboard.description {
        println!("  {}", description);
    }
    println!("  Source: {}", config.base_url());
    println!(
        "  Report transport errors: {}",
        config.report_transport_errors()
    );
    println!();

    for widget in config.widgets()? {
        println!(
            "  {:<8} GET {}{}  -> #{} (errors: #{})",
            widget.kind.to_string(),
            config.base_url().trim_end_matches('/'),
            widget.key.path(),
            widget.handles.mount,
            widget.handles.error_info
        );
    }

    Ok(())
}
