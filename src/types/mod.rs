// src/types/mod.rs

pub mod instrument;

pub use instrument::{Instrument, PRICE_FLOOR};
