use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Unsupported encoding id: {id}")]
    UnsupportedEncodingId { id: String },

    #[error("Failed to encode text as {encoding}: {message}")]
    EncodeFailure { encoding: String, message: String },

    #[error("Failed to decode bytes as {encoding}: {reason}")]
    DecodeFailure { encoding: String, reason: String },

    #[error("Could not decode {byte_len} bytes under any supported encoding")]
    AllDecodingsFailed { byte_len: usize },

    #[error("Malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入問題，回覆指引即可
    Input,
    /// 編碼 / 解碼失敗
    Codec,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BotError::UnsupportedEncodingId { .. }
            | BotError::MalformedInput { .. }
            | BotError::InvalidHex(_) => ErrorCategory::Input,
            BotError::EncodeFailure { .. }
            | BotError::DecodeFailure { .. }
            | BotError::AllDecodingsFailed { .. } => ErrorCategory::Codec,
            BotError::ConfigValidationError { .. }
            | BotError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BotError::IoError(_) | BotError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Codec => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BotError::UnsupportedEncodingId { .. } => format!(
                "Use one of the supported encoding ids: {}",
                crate::core::codec::supported_ids().join(", ")
            ),
            BotError::EncodeFailure { .. } => {
                "Pick an encoding that can represent every character (e.g. 8 for UTF-8)".to_string()
            }
            BotError::DecodeFailure { .. } | BotError::AllDecodingsFailed { .. } => {
                "Check that the hex string was produced from text".to_string()
            }
            BotError::MalformedInput { .. } | BotError::InvalidHex(_) => {
                "Send an even-length hex string, or text followed by a space and an encoding id"
                    .to_string()
            }
            BotError::ConfigValidationError { field, .. }
            | BotError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            BotError::IoError(_) => "Check file paths and permissions".to_string(),
            BotError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    /// 轉成回覆給使用者的訊息（日文，沿用原本機器人的語系）
    pub fn user_friendly_message(&self) -> String {
        match self {
            BotError::UnsupportedEncodingId { id } => format!(
                "対応していないエンコーディングです: {}\n対応可能: {}",
                id,
                crate::core::codec::registry_listing()
            ),
            BotError::EncodeFailure { encoding, .. } => {
                format!("エンコードに失敗しました（{}）。", encoding)
            }
            BotError::DecodeFailure { .. } | BotError::AllDecodingsFailed { .. } => {
                "デコードに失敗しました。UTF-8, UTF-16, UTF-32, Shift_JIS 全て失敗または不自然でした。"
                    .to_string()
            }
            BotError::MalformedInput { reason } => format!(
                "形式が正しくありません（{}）。\n{}",
                reason,
                usage_guidance()
            ),
            BotError::InvalidHex(_) => {
                format!("形式が正しくありません。\n{}", usage_guidance())
            }
            other => format!("処理中にエラーが発生しました：{}", other),
        }
    }
}

pub fn usage_guidance() -> String {
    format!(
        "例：こんにちは 8（エンコード）\nまたは 16進数（自動デコード）\n対応可能: {}",
        crate::core::codec::registry_listing()
    )
}

pub type Result<T> = std::result::Result<T, BotError>;
