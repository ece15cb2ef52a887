use dioxus::prelude::*;

use crate::api::get_date_prediction;
use crate::shared::ispu::Severity;
use crate::shared::pollutant::Pollutant;
use crate::shared::predict::{submit_action, PredictState, SubmitAction};

/// Result cards are capped for display, not in the data model.
const MAX_RESULT_CARDS: usize = 6;

#[allow(non_snake_case)]
#[component]
pub fn PredictionDialog(on_close: EventHandler<()>) -> Element {
    let mut selected_date = use_signal(String::new);
    let mut state = use_signal(|| PredictState::Idle);

    let busy = state.read().is_busy();

    let submit = move |_: MouseEvent| {
        // The guard decides before anything touches the network: busy
        // submissions are dropped, unset or malformed dates only surface
        // a validation message.
        let action = submit_action(&state.peek(), selected_date.peek().as_str());
        match action {
            SubmitAction::Ignore => {}
            SubmitAction::Reject(msg) => state.set(PredictState::Message(msg)),
            SubmitAction::Request(date) => {
                state.set(PredictState::Busy);
                spawn(async move {
                    match get_date_prediction(date).await {
                        Ok(entries) => state.set(PredictState::from_response(entries)),
                        Err(e) => {
                            let message = match e {
                                ServerFnError::ServerError(m) if !m.is_empty() => Some(m),
                                _ => None,
                            };
                            state.set(PredictState::from_error(message));
                        }
                    }
                });
            }
        }
    };

    let state_v = state.read();

    rsx! {
        div { class: "overlay", onclick: move |_| on_close.call(()),
            div { class: "modal", onclick: move |e| e.stop_propagation(),
                div { class: "modal-head",
                    h6 { class: "modal-title", "ISPU Prediction by Date" }
                    button {
                        class: "close-button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    label { class: "small", r#for: "date-picker", "Select a date:" }
                    div { class: "picker-row",
                        input {
                            r#type: "date",
                            id: "date-picker",
                            value: "{selected_date}",
                            oninput: move |e| selected_date.set(e.value()),
                        }
                        button {
                            class: "accent-button",
                            disabled: busy,
                            onclick: submit,
                            if busy { "Processing the model..." } else { "Predict" }
                        }
                    }
                    div { class: "predict-results",
                        {
                            match &*state_v {
                                PredictState::Idle | PredictState::Busy => rsx!( Fragment {} ),
                                PredictState::Message(msg) => rsx! { p { "{msg}" } },
                                PredictState::Ready(entries) => rsx! {
                                    h6 { "Prediction results:" }
                                    div { class: "card-grid",
                                        {
                                            entries.iter().take(MAX_RESULT_CARDS).map(|entry| {
                                                // Missing or negative predictions display as zero.
                                                let value = entry
                                                    .prediction
                                                    .filter(|v| !v.is_nan())
                                                    .map(|v| v.round().max(0.0))
                                                    .unwrap_or(0.0);
                                                let severity = Severity::of(value);
                                                let shown = value as i64;
                                                let long_name = Pollutant::parse(&entry.pollutant)
                                                    .map(|p| p.descriptor().short_name)
                                                    .unwrap_or("Unidentified pollutant");
                                                rsx! {
                                                    div { key: "{entry.pollutant}", class: "pollutant-card",
                                                        h6 { class: "card-name", "{entry.pollutant}" }
                                                        p { class: "muted small", "{long_name}" }
                                                        div { class: "card-value",
                                                            span {
                                                                class: "badge",
                                                                style: "background-color: {severity.color}",
                                                                "{shown}"
                                                            }
                                                            span { class: "unit", "µg/m³" }
                                                        }
                                                        p { class: "status-line",
                                                            "Status: "
                                                            span { class: "strong", style: "color: {severity.color}", "{severity.label}" }
                                                        }
                                                    }
                                                }
                                            })
                                        }
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
