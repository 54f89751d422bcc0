// JSON-lines renderer bridge - one serialised RenderMessage per line
use crate::application::refresh_service::RenderMessage;
use anyhow::Context;
use futures::stream::Stream;
use futures::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Serialize a single message to a newline-terminated chunk
fn serialize_line(msg: &RenderMessage) -> anyhow::Result<Vec<u8>> {
    let mut line = serde_json::to_vec(msg).context("Failed to serialize render message")?;
    line.push(b'\n');
    Ok(line)
}

/// Write every message of `stream` to `writer`, flushing after each line so
/// the renderer sees visibility toggles as soon as they are produced.
/// Returns the number of messages written.
pub async fn write_json_lines<S, W>(stream: S, writer: &mut W) -> anyhow::Result<usize>
where
    S: Stream<Item = RenderMessage>,
    W: AsyncWrite + Unpin,
{
    let mut stream = std::pin::pin!(stream);
    let mut written = 0;

    while let Some(msg) = stream.next().await {
        tracing::trace!("Writing render message (generation {})", msg.generation());
        let line = serialize_line(&msg)?;
        writer
            .write_all(&line)
            .await
            .context("Failed to write render message")?;
        writer.flush().await?;
        written += 1;
    }

    tracing::debug!("Render stream closed after {} messages", written);
    Ok(written)
}

/// Helper to drain a session receiver into a writer
pub async fn write_from_receiver<W>(
    mut rx: tokio::sync::mpsc::Receiver<RenderMessage>,
    writer: &mut W,
) -> anyhow::Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let stream = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            yield msg;
        }
    };

    write_json_lines(stream, writer).await
}
