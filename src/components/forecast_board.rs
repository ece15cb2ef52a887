use dioxus::prelude::*;

use crate::shared::ispu::Severity;
use crate::shared::pollutant::Pollutant;
use crate::shared::readings;
use crate::shared::types::ForecastMap;
use crate::utils::format::format_iso_date;

/// One card per forecast date, each listing all pollutants for that day.
/// The first pollutant's series carries the date axis for every card.
#[allow(non_snake_case)]
#[component]
pub fn ForecastBoard(forecast: ForecastMap) -> Element {
    let dates: Vec<String> = forecast
        .values()
        .next()
        .map(|series| series.iter().map(|p| p.date.clone()).collect())
        .unwrap_or_default();

    rsx! {
        div { class: "panel",
            h6 { class: "panel-title", "Daily Forecast" }
            if dates.is_empty() {
                p { class: "muted placeholder animate-fade", "Processing the model..." }
            } else {
                div { class: "forecast-strip",
                    {
                        dates.iter().map(|date| {
                            rsx! {
                                div { key: "{date}", class: "forecast-card",
                                    div { class: "forecast-date",
                                        span { class: "date-chip", "{format_iso_date(date)}" }
                                    }
                                    table { class: "forecast-table",
                                        tbody {
                                            {
                                                forecast.iter().map(|(name, series)| {
                                                    let value = readings::value_on(series, date);
                                                    // Negative forecasts clamp to zero before classification.
                                                    let clamped = value.map(|v| if v <= 0.0 { 0.0 } else { v });
                                                    let severity = Severity::of_reading(clamped);
                                                    let shown = readings::display_value(value);
                                                    let icon = Pollutant::parse(name).map(|p| p.icon()).unwrap_or("");
                                                    rsx! {
                                                        tr { key: "{name}",
                                                            td { class: "forecast-name",
                                                                i { class: "icon", "{icon}" }
                                                                "{name}"
                                                            }
                                                            td {
                                                                span {
                                                                    class: "badge",
                                                                    style: "background-color: {severity.color}",
                                                                    "{shown}"
                                                                }
                                                            }
                                                        }
                                                    }
                                                })
                                            }
                                        }
                                    }
                                }
                            }
                        })
                    }
                }
            }
        }
    }
}
