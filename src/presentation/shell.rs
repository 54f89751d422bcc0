// UI shell - applies toggle commands to the chart session
use crate::application::refresh_service::ChartSession;
use crate::application::toggle_source::{ToggleCommand, ToggleSource};

/// Open the chart, then re-render on every toggle command until the source
/// is exhausted, `quit` is received, or the renderer goes away.
/// Returns the number of commands applied.
pub async fn run_shell(
    session: &mut ChartSession,
    source: &mut dyn ToggleSource,
) -> anyhow::Result<usize> {
    if !session.open().await {
        return Ok(0);
    }

    let mut applied = 0;
    while let Some(command) = source.next_command().await? {
        let mut toggles = session.toggles();
        match command {
            ToggleCommand::SetTickRotation(rotation) => toggles.tick_rotation = rotation,
            ToggleCommand::SetCustomFormats(enabled) => toggles.use_custom_formats = enabled,
            ToggleCommand::Show => {}
            ToggleCommand::Quit => break,
        }

        if !session.apply(toggles).await {
            break;
        }
        applied += 1;
    }

    tracing::info!(
        "Shell finished after {} toggle changes (generation {})",
        applied,
        session.generation()
    );
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::options_service::Toggles;
    use crate::application::refresh_service::RenderMessage;
    use crate::domain::options::TickRotation;
    use async_trait::async_trait;
    use std::collections::VecDeque;

    struct ScriptedSource(VecDeque<ToggleCommand>);

    #[async_trait]
    impl ToggleSource for ScriptedSource {
        async fn next_command(&mut self) -> anyhow::Result<Option<ToggleCommand>> {
            Ok(self.0.pop_front())
        }
    }

    fn last_options(rx: &mut tokio::sync::mpsc::Receiver<RenderMessage>) -> Option<RenderMessage> {
        let mut last = None;
        while let Ok(msg) = rx.try_recv() {
            if matches!(msg, RenderMessage::Options { .. }) {
                last = Some(msg);
            }
        }
        last
    }

    #[tokio::test]
    async fn test_commands_accumulate_into_toggles() {
        let (mut session, mut rx) = ChartSession::new(Vec::new(), Toggles::default());
        let mut source = ScriptedSource(VecDeque::from([
            ToggleCommand::SetTickRotation(TickRotation::Always),
            ToggleCommand::SetCustomFormats(false),
            ToggleCommand::Show,
        ]));

        let applied = run_shell(&mut session, &mut source).await.unwrap();
        assert_eq!(applied, 3);
        assert_eq!(
            session.toggles(),
            Toggles {
                tick_rotation: TickRotation::Always,
                use_custom_formats: false,
            }
        );

        match last_options(&mut rx) {
            Some(RenderMessage::Options { generation, options }) => {
                assert_eq!(generation, 4);
                assert_eq!(
                    options.axes.bottom.ticks.unwrap().rotation,
                    TickRotation::Always
                );
                assert!(options.time_scale.time_interval_formats.is_empty());
            }
            other => panic!("expected options, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_quit_stops_before_later_commands() {
        let (mut session, _rx) = ChartSession::new(Vec::new(), Toggles::default());
        let mut source = ScriptedSource(VecDeque::from([
            ToggleCommand::Quit,
            ToggleCommand::SetTickRotation(TickRotation::Always),
        ]));

        assert_eq!(run_shell(&mut session, &mut source).await.unwrap(), 0);
        assert_eq!(session.toggles().tick_rotation, TickRotation::Auto);
    }

    #[tokio::test]
    async fn test_closed_renderer_ends_shell() {
        let (mut session, rx) = ChartSession::new(Vec::new(), Toggles::default());
        drop(rx);
        let mut source = ScriptedSource(VecDeque::from([ToggleCommand::Show]));

        assert_eq!(run_shell(&mut session, &mut source).await.unwrap(), 0);
    }
}
