use crate::shared::types::{AirQualityMap, ForecastPointDto, PollutantReadingDto};

fn sort_value(r: &PollutantReadingDto) -> f64 {
    // Missing or non-numeric predictions never win the dominant slot.
    r.prediction
        .filter(|v| !v.is_nan())
        .unwrap_or(f64::NEG_INFINITY)
}

/// Reading with the highest prediction value. The sort is stable, so exact
/// ties keep map order. None when there is nothing to show yet.
pub fn dominant(readings: &AirQualityMap) -> Option<(&String, &PollutantReadingDto)> {
    let mut entries: Vec<_> = readings.iter().collect();
    entries.sort_by(|a, b| sort_value(b.1).total_cmp(&sort_value(a.1)));
    entries.into_iter().next()
}

/// Rounded value with a zero floor for display; missing values render as "-".
pub fn display_value(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => ((v.round() as i64).max(0)).to_string(),
        _ => "-".to_string(),
    }
}

/// The series value for one calendar date, if present.
pub fn value_on(series: &[ForecastPointDto], date: &str) -> Option<f64> {
    series.iter().find(|p| p.date == date).and_then(|p| p.yhat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(prediction: Option<f64>) -> PollutantReadingDto {
        PollutantReadingDto {
            timestamp: "2024-05-21".into(),
            prediction,
            prediction_lower: None,
            prediction_upper: None,
        }
    }

    #[test]
    fn dominant_picks_the_maximum() {
        let mut map = AirQualityMap::new();
        map.insert("CO".into(), reading(Some(10.0)));
        map.insert("PM10".into(), reading(Some(120.0)));
        map.insert("O3".into(), reading(Some(5.0)));
        let (name, r) = dominant(&map).unwrap();
        assert_eq!(name, "PM10");
        assert_eq!(r.prediction, Some(120.0));
    }

    #[test]
    fn dominant_of_empty_map_is_none() {
        assert!(dominant(&AirQualityMap::new()).is_none());
    }

    #[test]
    fn missing_predictions_never_dominate() {
        let mut map = AirQualityMap::new();
        map.insert("CO".into(), reading(None));
        map.insert("O3".into(), reading(Some(-3.0)));
        let (name, _) = dominant(&map).unwrap();
        assert_eq!(name, "O3");
    }

    #[test]
    fn ties_keep_map_order() {
        let mut map = AirQualityMap::new();
        map.insert("NO2".into(), reading(Some(42.0)));
        map.insert("CO".into(), reading(Some(42.0)));
        let (name, _) = dominant(&map).unwrap();
        assert_eq!(name, "CO");
    }

    #[test]
    fn display_clamps_at_zero_and_rounds() {
        assert_eq!(display_value(Some(-7.2)), "0");
        assert_eq!(display_value(Some(0.0)), "0");
        assert_eq!(display_value(Some(40.4)), "40");
        assert_eq!(display_value(Some(40.6)), "41");
        assert_eq!(display_value(None), "-");
        assert_eq!(display_value(Some(f64::NAN)), "-");
    }

    #[test]
    fn value_on_finds_the_matching_date() {
        let series = vec![
            ForecastPointDto {
                date: "2024-05-21".into(),
                yhat: Some(12.0),
                yhat_lower: None,
                yhat_upper: None,
            },
            ForecastPointDto {
                date: "2024-05-22".into(),
                yhat: None,
                yhat_lower: None,
                yhat_upper: None,
            },
        ];
        assert_eq!(value_on(&series, "2024-05-21"), Some(12.0));
        assert_eq!(value_on(&series, "2024-05-22"), None);
        assert_eq!(value_on(&series, "2024-06-01"), None);
    }
}
