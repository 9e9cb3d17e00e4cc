// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod catalog;
pub mod commands;
pub mod display;
pub mod engine;
pub mod error;
pub mod market;
pub mod persistence;
pub mod portfolio;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `catalog` ---
pub use catalog::Catalog;

// --- From `commands` ---
pub use commands::{Command, Outcome};

// --- From `engine` ---
pub use engine::Settlement;

// --- From `error` ---
pub use error::{Result, SimError};

// --- From `market` ---
pub use market::{DeltaSource, PriceMove, RngDeltas, ScriptedDeltas};

// --- From `persistence` ---
pub use persistence::DEFAULT_SAVE_PATH;

// --- From `portfolio` ---
pub use portfolio::{Portfolio, STARTING_CASH};

// --- From `types` ---
pub use types::{Instrument, PRICE_FLOOR};
