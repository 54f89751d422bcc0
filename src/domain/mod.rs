// Domain layer - Core chart data and option models
pub mod error;
pub mod interval;
pub mod options;
pub mod series;
