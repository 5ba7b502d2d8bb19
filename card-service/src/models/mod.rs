//! Domain models for the card service.

pub mod card_image;
pub mod sentiment;

pub use card_image::CardImageRecord;
pub use sentiment::{ImageBucket, Sentiment};
