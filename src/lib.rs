#![allow(non_snake_case)]

//! Article card component for Dioxus apps.
//!
//! `ArticleCard` renders one media card; `ArticleCardStyles` injects the
//! card's scoped style sheet once per document.

pub mod components;
pub mod models;
pub mod styles;

pub use components::{ArticleCard, ArticleCardStyles};
pub use models::CardData;
