//! Core logic for the Telegram shell bot.
//!
//! The chunking engine turns long annotated text into transport-legal chunks.
//! Telegram and the shell live behind ports (traits) implemented in adapter crates.

pub mod bot;
pub mod chunking;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod session;
pub mod shell;

pub use errors::{Error, Result};
