// src/types/instrument.rs

use serde::{Deserialize, Serialize};

/// Hard floor applied to every price after a tick. Prices can never drop
/// below this, no matter how large a negative delta is drawn.
pub const PRICE_FLOOR: i64 = 1_000;

/// A single tradable simulated stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    /// Short unique ticker used in commands (e.g. "ACM").
    pub symbol: String,
    /// Human-readable company name; not required to be unique.
    pub display_name: String,
    /// Current price.
    pub price: i64,
    /// Price before the most recent tick. Display-only; deliberately not
    /// floor-clamped, so it records the real pre-tick value.
    pub previous_price: i64,
    /// Inclusive lower bound of the per-tick random delta.
    pub min_change: i64,
    /// Inclusive upper bound of the per-tick random delta.
    pub max_change: i64,
    /// Shares currently held in the session.
    pub held_shares: u64,
}

impl Instrument {
    pub fn new<T1: Into<String>, T2: Into<String>>(
        symbol: T1,
        display_name: T2,
        price: i64,
        min_change: i64,
        max_change: i64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            price,
            previous_price: price,
            min_change,
            max_change,
            held_shares: 0,
        }
    }

    /// Percent change since the last tick, `0.0` when the price is unchanged.
    pub fn percent_change(&self) -> f64 {
        if self.previous_price == self.price {
            return 0.0;
        }
        (self.price - self.previous_price) as f64 / self.previous_price as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_instrument_starts_flat() {
        let inst = Instrument::new("ACM", "Acme", 10_000, -50, 50);
        assert_eq!(inst.previous_price, inst.price);
        assert_eq!(inst.held_shares, 0);
        assert_eq!(inst.percent_change(), 0.0);
    }

    #[test]
    fn percent_change_is_relative_to_previous_price() {
        let mut inst = Instrument::new("ACM", "Acme", 1_000, -50, 50);
        inst.price = 1_500;
        assert!((inst.percent_change() - 50.0).abs() < 1e-9);

        inst.previous_price = 2_000;
        inst.price = 1_000;
        assert!((inst.percent_change() + 50.0).abs() < 1e-9);
    }
}
