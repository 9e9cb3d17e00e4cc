// src/error.rs

use thiserror::Error;

/// Everything that can go wrong inside the simulation engine.
///
/// All of these are recovered at the operation boundary and handed back to
/// the caller; none of them should take the process down.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("insufficient funds: order costs {needed}, only {available} on hand")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("insufficient shares: tried to sell {requested}, only {held} held")]
    InsufficientShares { requested: u64, held: u64 },

    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("settling {quantity} share(s) of {symbol} would overflow the balance")]
    SettlementOverflow { symbol: String, quantity: u64 },

    #[error("no catalog source found")]
    CatalogSourceMissing,

    #[error("no saved game found")]
    SaveFileMissing,

    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
