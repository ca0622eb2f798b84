use crate::adapters::console::OutputFormat;
use crate::core::classifier::DEFAULT_MAX_MESSAGE_CHARS;
use crate::core::ConfigProvider;
use crate::utils::error::{BotError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_MESSAGE_CHARS_CEILING: usize = 100_000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub bot: BotSection,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSection {
    pub name: String,
}

impl Default for BotSection {
    fn default() -> Self {
        Self {
            name: "hexbridge".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_message_chars: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_message_chars: DEFAULT_MAX_MESSAGE_CHARS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl BotConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BotError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAX_CHARS})，找不到時保留原字串
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::LazyLock;

        static ENV_VAR: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("bot.name", &self.bot.name)?;
        validate_range(
            "limits.max_message_chars",
            self.limits.max_message_chars,
            1,
            MAX_MESSAGE_CHARS_CEILING,
        )?;

        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &["text", "json"])?;
        }
        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        match self.output.format.as_deref() {
            Some(format) if format.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    pub fn log_level(&self) -> &str {
        self.logging.level.as_deref().unwrap_or("info")
    }

    pub fn json_logging(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for BotConfig {
    fn max_message_chars(&self) -> usize {
        self.limits.max_message_chars
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
