// Interval domain model - granularity and date advancement
use crate::domain::error::DemoError;
use chrono::{DateTime, Days, FixedOffset, Months, TimeDelta};
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Granularity {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// Advance `start` by `amount` units of this granularity.
    ///
    /// Seconds, minutes and hours are fixed durations. Days and weeks are
    /// calendar days. Months and years are calendar months, clamped to the
    /// last day of the target month when the day-of-month does not exist.
    /// Returns `None` when the result falls outside chrono's range.
    pub fn advance(
        self,
        start: DateTime<FixedOffset>,
        amount: u64,
    ) -> Option<DateTime<FixedOffset>> {
        let amount_i64 = i64::try_from(amount).ok()?;
        match self {
            Granularity::Second => start.checked_add_signed(TimeDelta::try_seconds(amount_i64)?),
            Granularity::Minute => start.checked_add_signed(TimeDelta::try_minutes(amount_i64)?),
            Granularity::Hour => start.checked_add_signed(TimeDelta::try_hours(amount_i64)?),
            Granularity::Day => start.checked_add_days(Days::new(amount)),
            Granularity::Week => start.checked_add_days(Days::new(amount.checked_mul(7)?)),
            Granularity::Month => {
                start.checked_add_months(Months::new(u32::try_from(amount).ok()?))
            }
            Granularity::Year => {
                let months = amount.checked_mul(12)?;
                start.checked_add_months(Months::new(u32::try_from(months).ok()?))
            }
        }
    }
}

impl FromStr for Granularity {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept plural forms ("seconds", "weeks") as written in config files
        let normalized = s.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        match singular {
            "second" => Ok(Granularity::Second),
            "minute" => Ok(Granularity::Minute),
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            "year" => Ok(Granularity::Year),
            _ => Err(DemoError::InvalidEnumValue {
                kind: "granularity",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Granularity {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One row of the interval table: advance by `step` units of `granularity`
/// between consecutive points, labelled `label`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalSpec {
    pub granularity: Granularity,
    pub step: i64,
    pub label: String,
}

impl IntervalSpec {
    pub fn new(granularity: Granularity, step: i64, label: impl Into<String>) -> Self {
        Self {
            granularity,
            step,
            label: label.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DemoError> {
        if self.step <= 0 {
            return Err(DemoError::InvalidInterval {
                label: self.label.clone(),
                step: self.step,
            });
        }
        Ok(())
    }

    /// Date of the `index`-th point of a group starting at `start`.
    pub fn date_at(
        &self,
        start: DateTime<FixedOffset>,
        index: usize,
    ) -> Result<DateTime<FixedOffset>, DemoError> {
        self.validate()?;
        let out_of_range = || DemoError::DateOutOfRange {
            label: self.label.clone(),
            index,
        };
        let amount = (self.step as u64)
            .checked_mul(index as u64)
            .ok_or_else(out_of_range)?;
        self.granularity
            .advance(start, amount)
            .ok_or_else(out_of_range)
    }
}
