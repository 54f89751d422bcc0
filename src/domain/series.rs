// Series domain models
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One observation handed to the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesDatum {
    pub date: DateTime<FixedOffset>,
    pub group: String,
    pub value: f64,
}

impl TimeSeriesDatum {
    pub fn new(date: DateTime<FixedOffset>, group: String, value: f64) -> Self {
        Self { date, group, value }
    }
}

/// Groups in interval-table order; every datum of a group shares its label.
pub type SeriesCollection = Vec<Vec<TimeSeriesDatum>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datum_serializes_iso_date() {
        let date = DateTime::parse_from_rfc3339("2021-12-15T12:00:00+01:00").unwrap();
        let datum = TimeSeriesDatum::new(date, "1 day".to_string(), 127.0);

        let json = serde_json::to_value(&datum).unwrap();
        assert_eq!(json["date"], "2021-12-15T12:00:00+01:00");
        assert_eq!(json["group"], "1 day");
        assert_eq!(json["value"], 127.0);
    }
}
