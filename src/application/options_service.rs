// Options service - Builds the chart options from the two UI toggles
use crate::domain::options::{
    AxesOptions, AxisOptions, ChartOptions, ColorOptions, GridOptions, LegendOptions,
    PairingOptions, ScaleType, TickOptions, TickRotation, TimeInterval, TimeIntervalFormat,
    TimeScaleOptions, ToggleOption,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The two values the UI shell lets the user change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Toggles {
    pub tick_rotation: TickRotation,
    pub use_custom_formats: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            tick_rotation: TickRotation::Auto,
            use_custom_formats: true,
        }
    }
}

/// Build a fresh options tree. Everything except the bottom-axis tick
/// rotation and the interval format table is constant.
pub fn build_options(tick_rotation: TickRotation, use_custom_formats: bool) -> ChartOptions {
    let time_interval_formats = if use_custom_formats {
        custom_time_interval_formats()
    } else {
        BTreeMap::new()
    };

    ChartOptions {
        animations: false,
        color: ColorOptions {
            pairing: PairingOptions { option: 1 },
        },
        legend: LegendOptions {
            enabled: false,
            position: "right".to_string(),
            alignment: "left".to_string(),
        },
        resizable: true,
        toolbar: ToggleOption { enabled: false },
        axes: AxesOptions {
            left: AxisOptions {
                maps_to: "value".to_string(),
                visible: true,
                scale_type: None,
                include_zero: Some(true),
                ticks: None,
            },
            bottom: AxisOptions {
                maps_to: "date".to_string(),
                visible: true,
                scale_type: Some(ScaleType::Time),
                include_zero: None,
                ticks: Some(TickOptions {
                    rotation: tick_rotation,
                }),
            },
        },
        grid: GridOptions {
            x: ToggleOption { enabled: false },
            y: ToggleOption { enabled: true },
        },
        time_scale: TimeScaleOptions {
            time_interval_formats,
        },
    }
}

pub fn build_options_for(toggles: Toggles) -> ChartOptions {
    build_options(toggles.tick_rotation, toggles.use_custom_formats)
}

fn custom_time_interval_formats() -> BTreeMap<TimeInterval, TimeIntervalFormat> {
    BTreeMap::from([
        (TimeInterval::FifteenSeconds, TimeIntervalFormat::new("PP pp", "HH:mm:ss")),
        (TimeInterval::Minute, TimeIntervalFormat::new("PP p", "HH:mm")),
        (TimeInterval::ThirtyMinutes, TimeIntervalFormat::new("PP p", "HH:mm")),
        (TimeInterval::Hourly, TimeIntervalFormat::new("PP HH:mm", "HH:mm")),
        (TimeInterval::Daily, TimeIntervalFormat::new("PP", "dd MMM")),
        (TimeInterval::Weekly, TimeIntervalFormat::new("PP", "dd MMM")),
        (TimeInterval::Monthly, TimeIntervalFormat::new("MMM y", "LLL")),
        (TimeInterval::Quarterly, TimeIntervalFormat::new("QQQ y", "qqq")),
        (TimeInterval::Yearly, TimeIntervalFormat::new("y", "y")),
    ])
}
