use crate::application::options_service::Toggles;
use crate::application::series_service::{
    default_intervals, SeriesGenerator, DEFAULT_BASE_VALUES, DEFAULT_START,
};
use crate::domain::error::DemoError;
use crate::domain::interval::{Granularity, IntervalSpec};
use chrono::DateTime;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/demo";
const ENV_PREFIX: &str = "DEMO";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DemoConfig {
    #[serde(default)]
    pub chart: Toggles,
    #[serde(default)]
    pub series: SeriesSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SeriesSettings {
    pub base_values: Vec<f64>,
    /// RFC 3339, offset included
    pub start: String,
    pub intervals: Vec<IntervalSettings>,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            base_values: DEFAULT_BASE_VALUES.to_vec(),
            start: DEFAULT_START.to_string(),
            intervals: default_intervals()
                .into_iter()
                .map(|i| IntervalSettings {
                    granularity: i.granularity,
                    step: i.step,
                    label: i.label,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct IntervalSettings {
    pub granularity: Granularity,
    pub step: i64,
    pub label: String,
}

impl SeriesSettings {
    pub fn to_generator(&self) -> Result<SeriesGenerator, DemoError> {
        let start = DateTime::parse_from_rfc3339(&self.start)?;
        let intervals = self
            .intervals
            .iter()
            .map(|i| IntervalSpec::new(i.granularity, i.step, i.label.clone()))
            .collect();
        SeriesGenerator::new(self.base_values.clone(), start, intervals)
    }
}

/// Defaults, then `config/demo.{toml,json,...}` if present, then `DEMO_*`
/// environment variables (`DEMO_CHART__TICK_ROTATION=always`).
pub fn load_demo_config() -> anyhow::Result<DemoConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_PATH).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
