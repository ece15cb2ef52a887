use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One current reading per pollutant, replaced wholesale on every fetch.
/// The upstream may send `null` predictions when the model has no value
/// for the current date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReadingDto {
    pub timestamp: String,
    pub prediction: Option<f64>,
    #[serde(default)]
    pub prediction_lower: Option<f64>,
    #[serde(default)]
    pub prediction_upper: Option<f64>,
}

/// Pollutant name -> current reading. A BTreeMap keeps iteration (and the
/// dominant-selector tie-break) deterministic.
pub type AirQualityMap = BTreeMap<String, PollutantReadingDto>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPointDto {
    pub date: String, // yyyy-mm-dd
    pub yhat: Option<f64>,
    #[serde(default)]
    pub yhat_lower: Option<f64>,
    #[serde(default)]
    pub yhat_upper: Option<f64>,
}

/// Pollutant name -> date-ordered forecast series.
pub type ForecastMap = BTreeMap<String, Vec<ForecastPointDto>>;

/// One row of the on-demand prediction for a user-chosen date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatePredictionDto {
    pub pollutant: String,
    #[serde(default)]
    pub prediction: Option<f64>,
}
