use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus::logger::tracing::info;

use crate::api::{get_air_quality, get_forecast};
use crate::components::{
    DominantCard, ForecastBoard, PollutantGrid, PollutantModal, PredictionDialog,
};
use crate::shared::types::{AirQualityMap, ForecastMap};

/// Data refresh cadence. The upstream models are refit hourly at most, so
/// polling faster only reheats the same answer.
#[cfg(feature = "web")]
const REFRESH_MS: u32 = 3_600_000;

#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    // ssr data (server waits)
    let readings = use_server_future(get_air_quality)?;
    let forecast = use_server_future(get_forecast)?;

    // Transient view state only; nothing here outlives the page.
    let clock = use_signal(String::new);
    let mut selected_pollutant: Signal<Option<String>> = use_signal(|| None);
    let mut show_prediction = use_signal(|| false);

    // ---------- client-side timers ----------
    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        // Keep handles so we can cancel them on unmount
        let refresh_handle: Signal<Option<Interval>> = use_signal(|| None);
        let clock_handle: Signal<Option<Interval>> = use_signal(|| None);

        // teardown on unmount: both timers die with the page, so no state
        // update can land afterwards
        use_drop({
            let mut refresh_handle = refresh_handle.clone();
            let mut clock_handle = clock_handle.clone();
            move || {
                if let Some(h) = refresh_handle.write().take() {
                    h.cancel();
                }
                if let Some(h) = clock_handle.write().take() {
                    h.cancel();
                }
            }
        });

        // hourly re-fetch of readings and forecast
        use_effect({
            let mut readings = readings.clone();
            let mut forecast = forecast.clone();
            let mut refresh_handle = refresh_handle.clone();
            move || {
                if refresh_handle.peek().is_some() {
                    return;
                }
                let handle = Interval::new(REFRESH_MS, move || {
                    info!("[dashboard] hourly refresh of readings and forecast");
                    readings.restart();
                    forecast.restart();
                });
                refresh_handle.set(Some(handle));
            }
        });

        // 1s wall clock, independent of the data refresh
        use_effect({
            let mut clock = clock.clone();
            let mut clock_handle = clock_handle.clone();
            move || {
                if clock_handle.peek().is_some() {
                    return;
                }
                clock.set(crate::utils::format::clock_now());
                let mut tick = clock.clone();
                let handle = Interval::new(1_000, move || {
                    tick.set(crate::utils::format::clock_now());
                });
                clock_handle.set(Some(handle));
            }
        });
    }

    // Loading and failed background fetches both collapse to an empty map;
    // the cards render their placeholder in that case.
    let readings_v = readings.read_unchecked();
    let readings_data: AirQualityMap = match &*readings_v {
        Some(Ok(map)) => map.clone(),
        _ => AirQualityMap::new(),
    };
    let forecast_v = forecast.read_unchecked();
    let forecast_data: ForecastMap = match &*forecast_v {
        Some(Ok(map)) => map.clone(),
        _ => ForecastMap::new(),
    };

    rsx! {
        header { class: "masthead",
            div { class: "masthead-text",
                h3 { "Air Quality in Bogor City" }
                p { class: "muted small",
                    "Air quality index for Bogor City"
                    if !clock.read().is_empty() {
                        span { class: "dot", "•" }
                        span { "{clock}" }
                    }
                }
                button {
                    class: "accent-button",
                    onclick: move |_| show_prediction.set(true),
                    "Predict"
                }
            }
            div { class: "masthead-card",
                DominantCard { readings: readings_data.clone() }
            }
        }
        section { class: "panels",
            PollutantGrid {
                readings: readings_data,
                on_select: move |name: String| selected_pollutant.set(Some(name)),
            }
            ForecastBoard { forecast: forecast_data }
        }
        if let Some(name) = selected_pollutant.read().clone() {
            PollutantModal { name, on_close: move |_| selected_pollutant.set(None) }
        }
        if *show_prediction.read() {
            PredictionDialog { on_close: move |_| show_prediction.set(false) }
        }
    }
}
