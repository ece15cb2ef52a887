use dioxus::prelude::*;

use crate::shared::pollutant::Pollutant;

/// Educational modal for one pollutant. Closed by the overlay, the corner
/// button or the footer button; clicks inside the dialog stay inside.
#[allow(non_snake_case)]
#[component]
pub fn PollutantModal(name: String, on_close: EventHandler<()>) -> Element {
    let descriptor = Pollutant::parse(&name).map(|p| p.descriptor());

    rsx! {
        div { class: "overlay", onclick: move |_| on_close.call(()),
            div { class: "modal", onclick: move |e| e.stop_propagation(),
                div { class: "modal-body",
                    div { class: "modal-head",
                        div {
                            h5 { class: "modal-title", "{name}" }
                            {
                                match descriptor {
                                    Some(d) => rsx! { p { class: "small", "{d.short_name}" } },
                                    None => rsx! { p { class: "muted small", "Unidentified pollutant" } },
                                }
                            }
                        }
                        button {
                            class: "close-button",
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }
                    {
                        match descriptor {
                            Some(d) => rsx! {
                                p { class: "lead", strong { "What is {name}?" } }
                                p { "{d.description}" }
                                p { class: "lead", strong { "Where does {name} come from?" } }
                                p { "{d.origin}" }
                                p { class: "lead", strong { "How does {name} affect our health?" } }
                                strong { "Short-term effects:" }
                                ul {
                                    {d.short_term_effects.iter().map(|effect| rsx! {
                                        li { key: "{effect}", "{effect}" }
                                    })}
                                }
                                strong { "Long-term effects:" }
                                ul {
                                    {d.long_term_effects.iter().map(|effect| rsx! {
                                        li { key: "{effect}", "{effect}" }
                                    })}
                                }
                            },
                            None => rsx! {
                                p { class: "muted", "No description is available for this pollutant." }
                            },
                        }
                    }
                }
                div { class: "modal-footer",
                    button { class: "secondary-button", onclick: move |_| on_close.call(()), "Close" }
                }
            }
        }
    }
}
