pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::console::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hexbridge")]
#[command(about = "Convert text to hex and auto-detect the encoding of hex strings")]
pub struct CliConfig {
    /// Messages to handle; reads stdin line by line when omitted
    pub messages: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override limits.max_message_chars from config
    #[arg(long)]
    pub max_message_chars: Option<usize>,

    /// Reply rendering (overrides output.format)
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print every decode candidate with its score
    #[arg(long)]
    pub explain: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
