use serde::Serialize;

pub type Score = i64;

/// 支援的文字編碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Codec {
    Utf8,
    Utf16,
    Utf16Le,
    Utf16Be,
    Utf32,
    Utf32Le,
    Utf32Be,
    ShiftJis,
}

impl Codec {
    /// 標準編碼名稱
    pub fn name(self) -> &'static str {
        match self {
            Codec::Utf8 => "utf-8",
            Codec::Utf16 => "utf-16",
            Codec::Utf16Le => "utf-16-le",
            Codec::Utf16Be => "utf-16-be",
            Codec::Utf32 => "utf-32",
            Codec::Utf32Le => "utf-32-le",
            Codec::Utf32Be => "utf-32-be",
            Codec::ShiftJis => "shift_jis",
        }
    }

    /// 給使用者看的名稱 (選項按鈕的標籤)
    pub fn label(self) -> &'static str {
        match self {
            Codec::Utf8 => "UTF-8",
            Codec::Utf16 => "UTF-16",
            Codec::Utf16Le => "UTF-16LE",
            Codec::Utf16Be => "UTF-16BE",
            Codec::Utf32 => "UTF-32",
            Codec::Utf32Le => "UTF-32LE",
            Codec::Utf32Be => "UTF-32BE",
            Codec::ShiftJis => "Shift_JIS",
        }
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 單一編碼的解碼嘗試結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeCandidate {
    pub codec: Codec,
    pub text: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub encoding: Codec,
    pub text: String,
    pub score: Score,
}

/// 分類器對一則訊息的判斷
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedRequest {
    Encode { text: String, codec: Codec },
    Decode { hex: String },
    NeedsEncodingChoice { text: String },
    Malformed(MalformedReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// 結尾的 token 不在編碼登錄表中
    UnsupportedEncodingId { token: String },
    TooLong { chars: usize, limit: usize },
}

impl ClassifiedRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            ClassifiedRequest::Encode { .. } => "encode",
            ClassifiedRequest::Decode { .. } => "decode",
            ClassifiedRequest::NeedsEncodingChoice { .. } => "needs_choice",
            ClassifiedRequest::Malformed(_) => "malformed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyOption {
    pub label: String,
    pub resubmit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    Text { text: String },
    Choice { text: String, options: Vec<ReplyOption> },
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Reply::Text { text: text.into() }
    }

    pub fn body(&self) -> &str {
        match self {
            Reply::Text { text } | Reply::Choice { text, .. } => text,
        }
    }

    pub fn options(&self) -> &[ReplyOption] {
        match self {
            Reply::Text { .. } => &[],
            Reply::Choice { options, .. } => options.as_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_names_and_labels() {
        assert_eq!(Codec::ShiftJis.to_string(), "shift_jis");
        assert_eq!(Codec::Utf16Le.name(), "utf-16-le");
        assert_eq!(Codec::Utf32Be.label(), "UTF-32BE");
    }

    #[test]
    fn test_detection_serializes() {
        let detection = Detection {
            encoding: Codec::Utf8,
            text: "hi".to_string(),
            score: 4 as Score,
        };
        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(json["text"], "hi");
        assert_eq!(json["score"], 4);
    }
}
