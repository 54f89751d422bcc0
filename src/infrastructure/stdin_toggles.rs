// Line-oriented toggle source (stdin in the binary)
use crate::application::toggle_source::{ToggleCommand, ToggleSource};
use crate::domain::error::DemoError;
use crate::domain::options::TickRotation;
use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};
use tokio_stream::wrappers::LinesStream;

pub struct LineToggleSource<R> {
    lines: LinesStream<R>,
}

impl<R: AsyncBufRead + Unpin> LineToggleSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LinesStream::new(reader.lines()),
        }
    }
}

pub fn stdin_toggle_source() -> LineToggleSource<BufReader<Stdin>> {
    LineToggleSource::new(BufReader::new(tokio::io::stdin()))
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> ToggleSource for LineToggleSource<R> {
    async fn next_command(&mut self) -> anyhow::Result<Option<ToggleCommand>> {
        while let Some(line) = self.lines.next().await {
            let line = line?;
            match parse_command(&line) {
                Ok(Some(command)) => return Ok(Some(command)),
                Ok(None) => continue,
                Err(e) => tracing::warn!("Ignoring command '{}': {}", line.trim(), e),
            }
        }
        Ok(None)
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ToggleCommand>, DemoError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next().unwrap_or("");

    let command = match verb.to_ascii_lowercase().as_str() {
        "rotation" => ToggleCommand::SetTickRotation(arg.parse()?),
        "formats" => ToggleCommand::SetCustomFormats(parse_switch(arg)?),
        "show" => ToggleCommand::Show,
        "quit" | "exit" => ToggleCommand::Quit,
        _ => {
            return Err(DemoError::InvalidEnumValue {
                kind: "command",
                value: verb.to_string(),
            });
        }
    };
    Ok(Some(command))
}

fn parse_switch(arg: &str) -> Result<bool, DemoError> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "true" | "custom" => Ok(true),
        "off" | "false" | "default" => Ok(false),
        _ => Err(DemoError::InvalidEnumValue {
            kind: "formats switch",
            value: arg.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("rotation always").unwrap(),
            Some(ToggleCommand::SetTickRotation(TickRotation::Always))
        );
        assert_eq!(
            parse_command("  Formats OFF ").unwrap(),
            Some(ToggleCommand::SetCustomFormats(false))
        );
        assert_eq!(parse_command("show").unwrap(), Some(ToggleCommand::Show));
        assert_eq!(parse_command("quit").unwrap(), Some(ToggleCommand::Quit));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_parse_command_errors() {
        assert!(matches!(
            parse_command("rotation never"),
            Err(DemoError::InvalidEnumValue { kind: "tick rotation", .. })
        ));
        assert!(matches!(
            parse_command("formats maybe"),
            Err(DemoError::InvalidEnumValue { kind: "formats switch", .. })
        ));
        assert!(matches!(
            parse_command("zoom in"),
            Err(DemoError::InvalidEnumValue { kind: "command", .. })
        ));
    }

    #[tokio::test]
    async fn test_source_skips_blank_and_bad_lines() {
        let input: &[u8] = b"\nrotation sideways\nformats off\n\nrotation always\n";
        let mut source = LineToggleSource::new(input);

        assert_eq!(
            source.next_command().await.unwrap(),
            Some(ToggleCommand::SetCustomFormats(false))
        );
        assert_eq!(
            source.next_command().await.unwrap(),
            Some(ToggleCommand::SetTickRotation(TickRotation::Always))
        );
        assert_eq!(source.next_command().await.unwrap(), None);
    }
}
