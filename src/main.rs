use anyhow::Context;
use clap::Parser;
use hexbridge::adapters::console::ConsoleSink;
use hexbridge::core::ReplySink;
use hexbridge::utils::error::ErrorSeverity;
use hexbridge::utils::{logger, validation::Validate};
use hexbridge::{BotConfig, CliConfig, MessageHandler};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (沒有指定就用預設值)
    let mut config = match &cli.config {
        Some(path) => BotConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => BotConfig::default(),
    };

    // 應用命令列覆蓋設定
    if let Some(limit) = cli.max_message_chars {
        config.limits.max_message_chars = limit;
    }

    // 初始化日誌
    if cli.json || config.json_logging() {
        logger::init_json_logger(if cli.verbose { "debug" } else { config.log_level() });
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting {}", config.bot.name);
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        let exit_code = match e.severity() {
            ErrorSeverity::Critical => 3,
            _ => 1,
        };
        std::process::exit(exit_code);
    }

    let handler = MessageHandler::from_config(&config);
    let sink = ConsoleSink::stdout(cli.output.unwrap_or_else(|| config.output_format()));

    if cli.messages.is_empty() {
        tracing::info!("📥 Reading messages from stdin");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let message = line.trim();
            if message.is_empty() {
                continue;
            }
            process(&handler, &sink, message, cli.explain).await?;
        }
    } else {
        for message in &cli.messages {
            process(&handler, &sink, message.trim(), cli.explain).await?;
        }
    }

    Ok(())
}

async fn process<S: ReplySink>(
    handler: &MessageHandler,
    sink: &S,
    message: &str,
    explain: bool,
) -> anyhow::Result<()> {
    if explain {
        match handler.explain(message) {
            Ok(candidates) => {
                for candidate in candidates {
                    eprintln!(
                        "🔎 {:>10} score {:>5}  {:?}",
                        candidate.codec.name(),
                        candidate.score,
                        candidate.text
                    );
                }
            }
            Err(e) => tracing::debug!("No candidate table: {}", e),
        }
    }

    handler
        .respond(message, sink)
        .await
        .context("Failed to deliver reply")?;
    Ok(())
}
