// Toggle source trait - Where the UI shell gets its toggle changes from
use crate::domain::options::TickRotation;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleCommand {
    SetTickRotation(TickRotation),
    SetCustomFormats(bool),
    /// Re-send the current options without changing them
    Show,
    Quit,
}

#[async_trait]
pub trait ToggleSource: Send {
    /// Next command, or `None` when the source is exhausted.
    async fn next_command(&mut self) -> anyhow::Result<Option<ToggleCommand>>;
}
