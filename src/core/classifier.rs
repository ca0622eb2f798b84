use crate::core::codec::{lookup_id, lookup_name};
use crate::domain::model::{ClassifiedRequest, MalformedReason};
use crate::domain::ports::ConfigProvider;
use regex::Regex;
use std::sync::LazyLock;

/// LINE 單則文字訊息的上限
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 5000;

// 空字串也算合法 (零位元組)
static HEX_PAYLOAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{2})*$").expect("hex pattern compiles"));

const LEGACY_OPTION: &str = " -f ";

pub fn is_hex_payload(text: &str) -> bool {
    HEX_PAYLOAD.is_match(text)
}

#[derive(Debug, Clone)]
pub struct Classifier {
    max_message_chars: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGE_CHARS)
    }
}

impl Classifier {
    pub fn new(max_message_chars: usize) -> Self {
        Self { max_message_chars }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.max_message_chars())
    }

    /// 依序套用規則，第一個符合的規則決定結果
    pub fn classify(&self, input: &str) -> ClassifiedRequest {
        let text = input.trim();

        // 規則 1：偶數長度的 16 進位字串 → 解碼 (不受長度上限影響)
        if is_hex_payload(text) {
            return ClassifiedRequest::Decode {
                hex: text.to_string(),
            };
        }

        let chars = text.chars().count();
        if chars > self.max_message_chars {
            return ClassifiedRequest::Malformed(MalformedReason::TooLong {
                chars,
                limit: self.max_message_chars,
            });
        }

        // 舊格式：「文字 -f 編碼名稱」；查不到就交給規則 2
        if let Some((main_text, option)) = text.rsplit_once(LEGACY_OPTION) {
            let option = option.trim();
            if let Some(codec) = lookup_id(option).or_else(|| lookup_name(option)) {
                return ClassifiedRequest::Encode {
                    text: main_text.to_string(),
                    codec,
                };
            }
        }

        // 規則 2：「文字 編碼 id」
        if let Some((main_text, token)) = text.rsplit_once(' ') {
            return match lookup_id(token) {
                Some(codec) => ClassifiedRequest::Encode {
                    text: main_text.to_string(),
                    codec,
                },
                None => ClassifiedRequest::Malformed(MalformedReason::UnsupportedEncodingId {
                    token: token.to_string(),
                }),
            };
        }

        // 規則 3：讓使用者挑選編碼
        ClassifiedRequest::NeedsEncodingChoice {
            text: text.to_string(),
        }
    }
}
