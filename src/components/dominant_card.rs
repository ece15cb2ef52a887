use dioxus::prelude::*;

use crate::shared::ispu::Severity;
use crate::shared::pollutant::Pollutant;
use crate::shared::readings;
use crate::shared::types::AirQualityMap;
use crate::utils::format::format_iso_date;

/// Hero card for the pollutant with the highest current index.
#[allow(non_snake_case)]
#[component]
pub fn DominantCard(readings: AirQualityMap) -> Element {
    match readings::dominant(&readings) {
        None => rsx! {
            p { class: "muted placeholder animate-fade", "Processing the model..." }
        },
        Some((name, reading)) => {
            let severity = Severity::of_reading(reading.prediction);
            let value = readings::display_value(reading.prediction);
            let long_name = Pollutant::parse(name)
                .map(|p| p.descriptor().short_name)
                .unwrap_or("Unidentified pollutant");
            let updated = format_iso_date(&reading.timestamp);
            rsx! {
                div { class: "hero-card", style: "background-color: {severity.color}",
                    div { class: "hero-body",
                        p { class: "hero-level", "{severity.label}" }
                        hr { class: "hero-rule" }
                        div { class: "hero-row",
                            div {
                                p { class: "hero-pollutant",
                                    "Main pollutant: "
                                    span { class: "strong", "{name}" }
                                }
                                p { class: "hero-long-name", "{long_name}" }
                            }
                            p { class: "hero-value", "{value} µg/m³" }
                        }
                    }
                    div { class: "hero-footer",
                        "Updated: "
                        strong { "{updated}" }
                    }
                }
            }
        }
    }
}
