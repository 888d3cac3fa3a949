use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_USER_NAME: &str = "닉네임";
pub const PLACEHOLDER_TITLE: &str = "아티클 제목";
pub const PLACEHOLDER_DESCRIPTION: &str = "아티클 정보";

/// Content shown by one article card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub user_photo_url: Option<String>,
    pub user_name: String,
    pub title: String,
    pub description: String,
}

impl CardData {
    /// Static placeholder content, no photos
    pub fn placeholder() -> Self {
        Self {
            photo_url: None,
            user_photo_url: None,
            user_name: PLACEHOLDER_USER_NAME.to_string(),
            title: PLACEHOLDER_TITLE.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
        }
    }
}

impl Default for CardData {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Parse a JSON array of cards
pub fn load_deck(raw: &str) -> anyhow::Result<Vec<CardData>> {
    let cards: Vec<CardData> = serde_json::from_str(raw).context("Failed to parse card deck")?;

    if cards.is_empty() {
        bail!("Card deck is empty");
    }

    log::info!("Loaded {} cards", cards.len());
    Ok(cards)
}

/// Parse a deck, falling back to a single placeholder card so a wall is never empty
pub fn load_deck_or_placeholder(raw: &str) -> Vec<CardData> {
    load_deck(raw).unwrap_or_else(|e| {
        log::error!("Failed to load card deck: {:#}", e);
        vec![CardData::placeholder()]
    })
}
