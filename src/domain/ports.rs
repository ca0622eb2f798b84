use crate::domain::model::Reply;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 傳輸層：把回覆送回使用者 (webhook、終端機...)
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn deliver(&self, reply: &Reply) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn max_message_chars(&self) -> usize;
}
