// Series service - Builds the synthetic time series fed to the chart
use crate::domain::error::DemoError;
use crate::domain::interval::{Granularity, IntervalSpec};
use crate::domain::series::{SeriesCollection, TimeSeriesDatum};
use chrono::{DateTime, FixedOffset};

pub const DEFAULT_BASE_VALUES: [f64; 10] =
    [127.0, 126.0, 102.0, 131.0, 157.0, 106.0, 154.0, 104.0, 124.0, 124.0];

pub const DEFAULT_START: &str = "2021-12-15T12:00:00+01:00";

pub fn default_intervals() -> Vec<IntervalSpec> {
    vec![
        IntervalSpec::new(Granularity::Second, 15, "15 seconds"),
        IntervalSpec::new(Granularity::Minute, 1, "1 minute"),
        IntervalSpec::new(Granularity::Minute, 5, "5 minutes"),
        IntervalSpec::new(Granularity::Hour, 1, "1 hour"),
        IntervalSpec::new(Granularity::Day, 1, "1 day"),
        IntervalSpec::new(Granularity::Day, 2, "2 days"),
        IntervalSpec::new(Granularity::Week, 1, "1 week"),
        IntervalSpec::new(Granularity::Month, 2, "2 months"),
        IntervalSpec::new(Granularity::Year, 1, "1 year"),
    ]
}

#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    base_values: Vec<f64>,
    start: DateTime<FixedOffset>,
    intervals: Vec<IntervalSpec>,
}

impl SeriesGenerator {
    pub fn new(
        base_values: Vec<f64>,
        start: DateTime<FixedOffset>,
        intervals: Vec<IntervalSpec>,
    ) -> Result<Self, DemoError> {
        for interval in &intervals {
            interval.validate()?;
        }
        Ok(Self {
            base_values,
            start,
            intervals,
        })
    }

    /// The fixed demo inputs: ten base values, 2021-12-15T12:00+01:00, nine intervals.
    pub fn with_defaults() -> Result<Self, DemoError> {
        let start = DateTime::parse_from_rfc3339(DEFAULT_START)?;
        Self::new(DEFAULT_BASE_VALUES.to_vec(), start, default_intervals())
    }

    pub fn generate(&self) -> Result<SeriesCollection, DemoError> {
        let groups = self
            .intervals
            .iter()
            .map(|interval| self.generate_group(interval))
            .collect::<Result<SeriesCollection, _>>()?;

        tracing::debug!(
            "Generated {} groups of {} points",
            groups.len(),
            self.base_values.len()
        );

        Ok(groups)
    }

    fn generate_group(&self, interval: &IntervalSpec) -> Result<Vec<TimeSeriesDatum>, DemoError> {
        self.base_values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let date = interval.date_at(self.start, index)?;
                Ok(TimeSeriesDatum::new(date, interval.label.clone(), value))
            })
            .collect()
    }
}
