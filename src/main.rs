use clap::Parser;
use pi_precision::core::ConfigProvider;
use pi_precision::utils::error::ErrorSeverity;
use pi_precision::utils::{logger, validation::Validate};
use pi_precision::{CliConfig, ComparisonEngine, DefaultParameters, OutputFormat, PiError, TomlConfig};
use std::io::Write;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting pi-precision");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path).and_then(|config| run(config, &cli))
        }
        None => run(DefaultParameters, &cli),
    };

    if let Err(e) = outcome {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Comparison failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run<C: ConfigProvider + Validate>(config: C, cli: &CliConfig) -> Result<(), PiError> {
    // 驗證配置
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = ComparisonEngine::new_with_monitoring(config, cli.monitor);
    let report = engine.run()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => writeln!(out, "{}", report.render_json()?)?,
    }
    out.flush()?;
    Ok(())
}
