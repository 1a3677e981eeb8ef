//! Pure rendering helpers shared by screens and the detail popup.

pub mod listing_card;
pub mod text_fmt;
