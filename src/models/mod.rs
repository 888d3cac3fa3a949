// Plain data passed into components

pub mod card;

pub use card::{load_deck, load_deck_or_placeholder, CardData};
