// Presentation layer - The interactive shell around the chart
pub mod shell;
