use crate::domain::model::Reply;
use crate::domain::ports::ReplySink;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 文字模式下選項以編號列出，JSON 模式一則回覆一行
pub fn render(reply: &Reply, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(reply)?),
        OutputFormat::Text => {
            let mut out = reply.body().to_string();
            for (index, option) in reply.options().iter().enumerate() {
                out.push_str(&format!("\n  [{}] {} → {}", index + 1, option.label, option.resubmit));
            }
            Ok(out)
        }
    }
}

pub struct ConsoleSink<W> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl ConsoleSink<tokio::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(tokio::io::stdout(), format)
    }
}

impl<W: AsyncWrite + Unpin + Send> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> ReplySink for ConsoleSink<W> {
    async fn deliver(&self, reply: &Reply) -> Result<()> {
        let mut line = render(reply, self.format)?;
        line.push('\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}
