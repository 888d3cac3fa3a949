// Component style sheets
// Styles are scoped to the component that renders them

pub mod sheet;
pub mod card;

pub use sheet::{StyleError, StyleSheet};
pub use card::{card_style_sheet, CARD_SCOPE};
