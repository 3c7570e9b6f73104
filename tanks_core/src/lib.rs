//! Game rules for a two player local tank battle.
//!
//! The crate owns every entity and the per frame update. Rendering and audio
//! stay with the host, which reads [`common::gamestate::GameState::scene`] and
//! [`common::gamestate::GameState::drain_events`] after each update.

pub mod assets;
pub mod common;
pub mod config;
pub mod error;
pub mod scene;
pub mod utils;
