// Refresh service - Pushes data, options and relayout signals to the renderer
use crate::application::options_service::{build_options_for, Toggles};
use crate::domain::options::ChartOptions;
use crate::domain::series::SeriesCollection;
use serde::Serialize;
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 32;

/// Messages crossing into the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderMessage {
    Data {
        generation: u64,
        data: SeriesCollection,
    },
    Options {
        generation: u64,
        options: ChartOptions,
    },
    Visibility {
        generation: u64,
        visible: bool,
    },
}

impl RenderMessage {
    pub fn generation(&self) -> u64 {
        match self {
            RenderMessage::Data { generation, .. }
            | RenderMessage::Options { generation, .. }
            | RenderMessage::Visibility { generation, .. } => *generation,
        }
    }
}

pub struct ChartSession {
    tx: mpsc::Sender<RenderMessage>,
    data: SeriesCollection,
    toggles: Toggles,
    generation: u64,
}

impl ChartSession {
    pub fn new(data: SeriesCollection, toggles: Toggles) -> (Self, mpsc::Receiver<RenderMessage>) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let session = Self {
            tx,
            data,
            toggles,
            generation: 0,
        };
        (session, rx)
    }

    pub fn toggles(&self) -> Toggles {
        self.toggles
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Initial render: data and options, then show after one scheduling yield.
    /// Returns false once the renderer has gone away.
    pub async fn open(&mut self) -> bool {
        self.generation += 1;
        let generation = self.generation;
        let options = build_options_for(self.toggles);

        let data = RenderMessage::Data {
            generation,
            data: self.data.clone(),
        };
        self.send(data).await
            && self.send(RenderMessage::Options { generation, options }).await
            && self.show_after_yield(generation).await
    }

    /// Replace the toggles and force the renderer to relayout with the full
    /// new options. A later call supersedes this one via its generation.
    pub async fn apply(&mut self, toggles: Toggles) -> bool {
        self.toggles = toggles;
        self.generation += 1;
        let generation = self.generation;

        tracing::info!(
            "Applying tick_rotation={} custom_formats={} (generation {})",
            toggles.tick_rotation,
            toggles.use_custom_formats,
            generation
        );

        let options = build_options_for(toggles);
        self.send(RenderMessage::Options { generation, options }).await
            && self
                .send(RenderMessage::Visibility {
                    generation,
                    visible: false,
                })
                .await
            && self.show_after_yield(generation).await
    }

    async fn show_after_yield(&self, generation: u64) -> bool {
        tokio::task::yield_now().await;
        self.send(RenderMessage::Visibility {
            generation,
            visible: true,
        })
        .await
    }

    async fn send(&self, msg: RenderMessage) -> bool {
        match self.tx.send(msg).await {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!("Renderer closed, dropping render message");
                false
            }
        }
    }
}
