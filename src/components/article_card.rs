use dioxus::prelude::*;
use crate::models::CardData;
use crate::styles::card::{
    TextRole, IMG_CLASS, PHOTO_CLASS, TEXT_WRAP_CLASS, USER_PHOTO_CLASS, USER_WRAP_CLASS,
};
use crate::styles::{card_style_sheet, CARD_SCOPE};

/// Media card: photo, author row, title and description.
///
/// Renders the placeholder content when no data is given. The card carries
/// only class names; mount `ArticleCardStyles` once in the host document or
/// the card renders unstyled.
#[component]
pub fn ArticleCard(#[props(default)] data: CardData) -> Element {
    let CardData {
        photo_url,
        user_photo_url,
        user_name,
        title,
        description,
    } = data;

    let user_id_class = TextRole::UserId.class_name();
    let title_class = TextRole::Title.class_name();
    let description_class = TextRole::Description.class_name();

    rsx! {
        div {
            class: "{CARD_SCOPE}",

            // Cover photo
            div {
                class: "{PHOTO_CLASS}",
                if let Some(url) = photo_url {
                    img {
                        class: "{IMG_CLASS}",
                        src: "{url}",
                        alt: "{title}",
                        loading: "lazy",
                    }
                }
            }

            div {
                class: "{TEXT_WRAP_CLASS}",

                // Author
                div {
                    class: "{USER_WRAP_CLASS}",
                    div {
                        class: "{USER_PHOTO_CLASS}",
                        if let Some(url) = user_photo_url {
                            img {
                                class: "{IMG_CLASS}",
                                src: "{url}",
                                alt: "{user_name}",
                                loading: "lazy",
                            }
                        }
                    }
                    div { class: "{user_id_class}", "{user_name}" }
                }

                div { class: "{title_class}", "{title}" }
                div { class: "{description_class}", "{description}" }
            }
        }
    }
}

/// Injects the card style sheet into the document head.
///
/// Render once near the root; every `ArticleCard` picks the rules up through
/// its scope class.
#[component]
pub fn ArticleCardStyles() -> Element {
    let css = use_hook(card_css);

    rsx! {
        if let Some(css) = css {
            document::Style { "{css}" }
        }
    }
}

/// CSS text injected by `ArticleCardStyles`, `None` if the sheet fails to build
fn card_css() -> Option<String> {
    match card_style_sheet().to_css() {
        Ok(css) => Some(css),
        Err(e) => {
            log::error!("Failed to build article card styles: {}", e);
            None
        }
    }
}
