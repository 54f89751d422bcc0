// Infrastructure layer - Config loading and the stdin/stdout adapters
pub mod config;
pub mod json_lines;
pub mod stdin_toggles;
