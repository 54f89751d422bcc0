// Chart options domain model - serialises to the charting library's option names
use crate::domain::error::DemoError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TickRotation {
    /// Rotate only when labels would overlap
    #[default]
    Auto,
    Always,
}

impl TickRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickRotation::Auto => "auto",
            TickRotation::Always => "always",
        }
    }
}

impl fmt::Display for TickRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TickRotation {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(TickRotation::Auto),
            "always" => Ok(TickRotation::Always),
            _ => Err(DemoError::InvalidEnumValue {
                kind: "tick rotation",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TickRotation {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    Time,
}

/// Keys of the time-interval format table, in the library's coarsening order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TimeInterval {
    #[serde(rename = "15seconds")]
    FifteenSeconds,
    #[serde(rename = "minute")]
    Minute,
    #[serde(rename = "30minutes")]
    ThirtyMinutes,
    #[serde(rename = "hourly")]
    Hourly,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "quarterly")]
    Quarterly,
    #[serde(rename = "yearly")]
    Yearly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeIntervalFormat {
    pub primary: String,
    pub secondary: String,
}

impl TimeIntervalFormat {
    pub fn new(primary: &str, secondary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub animations: bool,
    pub color: ColorOptions,
    pub legend: LegendOptions,
    pub resizable: bool,
    pub toolbar: ToggleOption,
    pub axes: AxesOptions,
    pub grid: GridOptions,
    #[serde(rename = "timeScale")]
    pub time_scale: TimeScaleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorOptions {
    pub pairing: PairingOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairingOptions {
    pub option: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendOptions {
    pub enabled: bool,
    pub position: String,
    pub alignment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleOption {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxesOptions {
    pub left: AxisOptions,
    pub bottom: AxisOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub maps_to: String,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_type: Option<ScaleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickOptions {
    pub rotation: TickRotation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridOptions {
    pub x: ToggleOption,
    pub y: ToggleOption,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeScaleOptions {
    /// Empty means the chart falls back to its built-in formats
    pub time_interval_formats: BTreeMap<TimeInterval, TimeIntervalFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rotation_parse() {
        assert_eq!("AUTO".parse::<TickRotation>().unwrap(), TickRotation::Auto);
        assert_eq!("always".parse::<TickRotation>().unwrap(), TickRotation::Always);

        let err = "sideways".parse::<TickRotation>().unwrap_err();
        assert!(matches!(err, DemoError::InvalidEnumValue { kind: "tick rotation", .. }));
        assert_eq!(err.to_string(), "invalid tick rotation value: 'sideways'");
    }

    #[test]
    fn test_tick_rotation_wire_format() {
        assert_eq!(serde_json::to_value(TickRotation::Always).unwrap(), "always");
        let parsed: TickRotation = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(parsed, TickRotation::Auto);
        assert!(serde_json::from_str::<TickRotation>("\"never\"").is_err());
    }

    #[test]
    fn test_interval_keys_serialize_in_order() {
        let mut formats = BTreeMap::new();
        formats.insert(TimeInterval::Yearly, TimeIntervalFormat::new("y", "y"));
        formats.insert(TimeInterval::FifteenSeconds, TimeIntervalFormat::new("PP pp", "HH:mm:ss"));

        let json = serde_json::to_string(&formats).unwrap();
        assert_eq!(
            json,
            r#"{"15seconds":{"primary":"PP pp","secondary":"HH:mm:ss"},"yearly":{"primary":"y","secondary":"y"}}"#
        );
    }
}
