use dioxus::prelude::*;

use crate::components::Dashboard;
use crate::{FAVICON, MAIN_CSS};

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#F3F5F7" }
        // Page container
        div { class: "page",
            Dashboard {}
        }
    }
}
