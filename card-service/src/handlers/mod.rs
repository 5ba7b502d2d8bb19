//! HTTP handlers for the card service.

pub mod cards;
pub mod health;

pub use cards::{create_letter, create_phrase, get_card_url};
pub use health::{health_check, metrics_endpoint, readiness_check};
