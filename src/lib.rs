//! Detective Quest
//!
//! A text deduction game: walk the rooms of a mansion, collect the clues
//! left behind, then accuse the suspect the evidence points to.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Move left or right through a fixed binary tree of rooms
//! - **Clue Notebook**: Every clue found is kept sorted and without duplicates
//! - **Deduction**: Each clue implicates a suspect through the clue index
//! - **Accusation**: An arrest needs at least two corroborating clues
//!
//! # Architecture
//!
//! - `data` - Rooms, clue notebook, clue index, suspect roster
//! - `game` - Session state, exploration and accusation engines, mansion content
//! - `console` - Line-oriented terminal presentation
//! - `config` - TOML-backed game configuration

pub mod config;
pub mod console;
pub mod data;
pub mod game;

pub use config::GameConfig;
pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid mansion map: {0}")]
    InvalidMap(String),

    #[error("Invalid accusation: {choice} is not between 1 and {roster_len}")]
    InvalidAccusation { choice: usize, roster_len: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Input closed before the game finished")]
    InputClosed,
}
