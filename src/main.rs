use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.ico");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use dotenvy::dotenv;
        dotenv().ok();
        backend::init_tracing();
    }
    dioxus::launch(app::App);
}
