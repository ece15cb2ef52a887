use dioxus::prelude::*;

use crate::shared::types::{AirQualityMap, DatePredictionDto, ForecastMap};

#[server(GetAirQuality)]
pub async fn get_air_quality() -> Result<AirQualityMap, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::upstream;

        match upstream::fetch_air_quality().await {
            Ok(readings) => Ok(readings),
            Err(e) => {
                // Background refresh degrades to stale/empty data, never an error.
                eprintln!("get_air_quality upstream error: {e}");
                Ok(AirQualityMap::new())
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(AirQualityMap::new())
    }
}

#[server(GetForecast)]
pub async fn get_forecast() -> Result<ForecastMap, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::upstream;

        match upstream::fetch_forecast().await {
            Ok(forecast) => Ok(forecast),
            Err(e) => {
                eprintln!("get_forecast upstream error: {e}");
                Ok(ForecastMap::new())
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(ForecastMap::new())
    }
}

#[server(GetDatePrediction)]
pub async fn get_date_prediction(date: String) -> Result<Vec<DatePredictionDto>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::upstream;

        // The client normalizes before calling; revalidate anyway since the
        // date ends up in the request path.
        if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            return Err(ServerFnError::new("Invalid date format, expected YYYY-MM-DD"));
        }
        match upstream::fetch_prediction(&date).await {
            Ok(entries) => Ok(entries),
            Err(e) => {
                eprintln!("get_date_prediction upstream error for {date}: {e}");
                match e.downcast_ref::<upstream::ApiMessage>() {
                    Some(msg) => Err(ServerFnError::new(&msg.0)),
                    None => Err(ServerFnError::new(
                        crate::shared::predict::GENERIC_ERROR_MSG,
                    )),
                }
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = date;
        Ok(vec![])
    }
}
