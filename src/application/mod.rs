// Application layer - Use cases driving the chart
pub mod options_service;
pub mod refresh_service;
pub mod series_service;
pub mod toggle_source;
