// src/market.rs
//! Price evolution. Each tick moves every instrument by a uniform random
//! integer delta drawn from its own change range, then applies a hard floor.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::portfolio::Portfolio;
use crate::types::PRICE_FLOOR;

/// Capability to draw one integer uniformly from a closed range.
///
/// The tick loop is generic over this so tests can script an exact delta
/// sequence instead of sampling a real RNG.
pub trait DeltaSource {
    fn draw(&mut self, min: i64, max: i64) -> i64;
}

/// The production delta source, backed by any [`rand::Rng`].
pub struct RngDeltas<R: Rng>(R);

impl RngDeltas<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Seeded source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngDeltas<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> DeltaSource for RngDeltas<R> {
    fn draw(&mut self, min: i64, max: i64) -> i64 {
        self.0.gen_range(min..=max)
    }
}

/// Deterministic delta source that cycles through a fixed script, ignoring
/// the requested range. For tests and demos.
pub struct ScriptedDeltas {
    values: Vec<i64>,
    next: usize,
}

impl ScriptedDeltas {
    pub fn new(values: impl Into<Vec<i64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "delta script must not be empty");
        Self { values, next: 0 }
    }
}

impl DeltaSource for ScriptedDeltas {
    fn draw(&mut self, _min: i64, _max: i64) -> i64 {
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

/// Apply one tick to every instrument in the catalog.
///
/// Per instrument: remember the old price, add a random delta, then clamp to
/// [`PRICE_FLOOR`]. The clamp is applied after the addition, never re-rolled.
/// `previous_price` keeps the real pre-tick value even when the new price was
/// clamped.
pub fn tick(portfolio: &mut Portfolio, deltas: &mut impl DeltaSource) {
    for inst in portfolio.catalog.iter_mut() {
        inst.previous_price = inst.price;
        let delta = deltas.draw(inst.min_change, inst.max_change);
        inst.price += delta;
        if inst.price < PRICE_FLOOR {
            inst.price = PRICE_FLOOR;
        }
        log::debug!(
            "tick {}: {} -> {} (delta {})",
            inst.symbol,
            inst.previous_price,
            inst.price,
            delta
        );
    }
}

/// Cumulative result of a batch update for one instrument.
#[derive(Debug, Clone)]
pub struct PriceMove {
    pub symbol: String,
    pub display_name: String,
    pub old_price: i64,
    pub new_price: i64,
}

impl PriceMove {
    /// Change over the whole batch, not the last tick.
    pub fn percent_change(&self) -> f64 {
        if self.old_price == self.new_price {
            return 0.0;
        }
        (self.new_price - self.old_price) as f64 / self.old_price as f64 * 100.0
    }
}

/// Run `count` ticks and report, per instrument, the change from the price
/// before the first tick to the price after the last one.
pub fn update(
    portfolio: &mut Portfolio,
    count: u32,
    deltas: &mut impl DeltaSource,
) -> Vec<PriceMove> {
    let before: Vec<i64> = portfolio.catalog.iter().map(|inst| inst.price).collect();
    for _ in 0..count {
        tick(portfolio, deltas);
    }
    portfolio
        .catalog
        .iter()
        .zip(before)
        .map(|(inst, old_price)| PriceMove {
            symbol: inst.symbol.clone(),
            display_name: inst.display_name.clone(),
            old_price,
            new_price: inst.price,
        })
        .collect()
}
