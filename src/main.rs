use clap::Parser;
use formkit::app;
use formkit::utils::error::{ErrorSeverity, KitError};
use formkit::utils::{logger, validation::Validate};
use formkit::CliConfig;

fn report(e: &KitError) -> i32 {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    let config = match cli.validate().and_then(|_| cli.load_config()) {
        Ok(config) => config,
        Err(e) => std::process::exit(report(&e)),
    };
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        std::process::exit(report(&e));
    }

    match app::execute(&cli.command, &config).await {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Err(e) => std::process::exit(report(&e)),
    }

    Ok(())
}
