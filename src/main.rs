#![allow(non_snake_case)]

use dioxus::prelude::*;
use cardwall::models::load_deck_or_placeholder;
use cardwall::{ArticleCard, ArticleCardStyles};

const DECK: &str = include_str!("../assets/cards.json");

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting card wall");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let cards = use_hook(|| load_deck_or_placeholder(DECK));

    rsx! {
        ArticleCardStyles {}

        main {
            style: "padding: 24px;",

            div {
                style: "display: grid; gap: 24px; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));",
                for (i, card) in cards.into_iter().enumerate() {
                    ArticleCard { key: "{i}", data: card }
                }
            }
        }
    }
}
