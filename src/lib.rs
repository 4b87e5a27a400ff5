//! Two-player city card game.
//!
//! Each player fills in a city card, two distinct attributes are chosen,
//! and the card with the higher aggregate score wins. Population density
//! is the one attribute where lower is better.

pub mod card;
pub mod config;
pub mod error;
pub mod game;
pub mod output;
pub mod prompt;
pub mod scoring;
pub mod telemetry;

pub use card::CityProfile;
pub use error::GameError;
pub use game::{evaluate, MatchResult, MatchSelection, Outcome};
pub use scoring::Attribute;
