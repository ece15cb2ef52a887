use dioxus::prelude::*;

use crate::shared::ispu::Severity;
use crate::shared::pollutant::Pollutant;
use crate::shared::readings;
use crate::shared::types::AirQualityMap;

/// One clickable card per current pollutant reading. Clicking a card opens
/// the educational modal for that pollutant.
#[allow(non_snake_case)]
#[component]
pub fn PollutantGrid(readings: AirQualityMap, on_select: EventHandler<String>) -> Element {
    rsx! {
        div { class: "panel",
            h6 { class: "panel-title", "Today's Air Pollutants" }
            if readings.is_empty() {
                p { class: "muted placeholder animate-fade", "Processing the model..." }
            } else {
                div { class: "card-grid",
                    {
                        readings.iter().map(|(name, reading)| {
                            // Color keyed on the raw value, shown value floored at zero.
                            let severity = Severity::of_reading(reading.prediction);
                            let value = readings::display_value(reading.prediction);
                            let long_name = Pollutant::parse(name)
                                .map(|p| p.descriptor().short_name)
                                .unwrap_or("Unidentified pollutant");
                            let selected = name.clone();
                            rsx! {
                                div {
                                    key: "{name}",
                                    class: "pollutant-card",
                                    onclick: move |_| on_select.call(selected.clone()),
                                    h6 { class: "card-name", "{name}" }
                                    p { class: "muted small", "{long_name}" }
                                    div { class: "card-value",
                                        span { class: "badge", style: "background-color: {severity.color}", "{value}" }
                                        span { class: "unit", "µg/m³" }
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
