// Domain errors raised at the builder boundaries
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("invalid interval '{label}': step must be positive, got {step}")]
    InvalidInterval { label: String, step: i64 },

    #[error("invalid {kind} value: '{value}'")]
    InvalidEnumValue { kind: &'static str, value: String },

    #[error("invalid start instant: {0}")]
    InvalidStartInstant(#[from] chrono::ParseError),

    #[error("date out of range for interval '{label}' at index {index}")]
    DateOutOfRange { label: String, index: usize },
}
