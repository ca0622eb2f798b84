use crate::core::classifier::Classifier;
use crate::core::codec::{hex_decode, hex_encode, Codec, REGISTRY};
use crate::core::selector::{rank_candidates, smart_decode};
use crate::domain::model::{ClassifiedRequest, DecodeCandidate, MalformedReason, Reply, ReplyOption};
use crate::domain::ports::{ConfigProvider, ReplySink};
use crate::utils::error::{BotError, Result};

/// 一則訊息進來、一則回覆出去；不保留任何狀態
#[derive(Debug, Clone, Default)]
pub struct MessageHandler {
    classifier: Classifier,
}

impl MessageHandler {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(Classifier::from_config(config))
    }

    pub fn classify(&self, text: &str) -> ClassifiedRequest {
        self.classifier.classify(text)
    }

    /// 永遠回傳回覆，錯誤會轉成給使用者的訊息
    pub fn handle(&self, text: &str) -> Reply {
        let request = self.classify(text);
        tracing::info!("📨 Classified message as {}", request.kind());

        match self.dispatch(request) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    "⚠️ Request failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                Reply::text(e.user_friendly_message())
            }
        }
    }

    pub fn dispatch(&self, request: ClassifiedRequest) -> Result<Reply> {
        match request {
            ClassifiedRequest::Encode { text, codec } => {
                let hex = encode_to_hex(&text, codec)?;
                Ok(Reply::text(hex))
            }
            ClassifiedRequest::Decode { hex } => {
                let bytes = hex_decode(&hex)?;
                let detection = smart_decode(&bytes).ok_or(BotError::AllDecodingsFailed {
                    byte_len: bytes.len(),
                })?;
                tracing::debug!("Decoded as {} (score {})", detection.encoding, detection.score);
                Ok(Reply::text(detection.text))
            }
            ClassifiedRequest::NeedsEncodingChoice { text } => Ok(encoding_choice(&text)),
            ClassifiedRequest::Malformed(MalformedReason::UnsupportedEncodingId { token }) => {
                Err(BotError::UnsupportedEncodingId { id: token })
            }
            ClassifiedRequest::Malformed(MalformedReason::TooLong { chars, limit }) => {
                Err(BotError::MalformedInput {
                    reason: format!("{}文字を超えています（{}文字）", limit, chars),
                })
            }
        }
    }

    /// 解碼請求時列出每個成功的候選與分數
    pub fn explain(&self, text: &str) -> Result<Vec<DecodeCandidate>> {
        match self.classify(text) {
            ClassifiedRequest::Decode { hex } => Ok(rank_candidates(&hex_decode(&hex)?)),
            other => Err(BotError::MalformedInput {
                reason: format!("not a decode request ({})", other.kind()),
            }),
        }
    }

    pub async fn respond<S: ReplySink>(&self, text: &str, sink: &S) -> Result<Reply> {
        let reply = self.handle(text);
        sink.deliver(&reply).await?;
        Ok(reply)
    }
}

pub fn encode_to_hex(text: &str, codec: Codec) -> Result<String> {
    let bytes = codec.encode(text)?;
    Ok(hex_encode(&bytes))
}

/// 每個選項都以「原文 id」重新送出，會落到規則 2
pub fn encoding_choice(text: &str) -> Reply {
    let options = REGISTRY
        .iter()
        .map(|entry| ReplyOption {
            label: entry.codec.label().to_string(),
            resubmit: format!("{} {}", text, entry.id),
        })
        .collect();

    Reply::Choice {
        text: format!("エンコーディングを選んでください：{}", text),
        options,
    }
}
