// src/portfolio.rs

use crate::catalog::Catalog;
use crate::error::{Result, SimError};

/// Opening cash balance for every new session.
pub const STARTING_CASH: i64 = 1_000_000;

/// The session's entire mutable state: cash plus the instrument catalog.
///
/// There is exactly one of these per session, owned by the caller and passed
/// by `&mut` into every market, trading and persistence operation. No module
/// in this crate keeps state of its own.
#[derive(Debug, Clone)]
pub struct Portfolio {
    pub cash: i64,
    pub catalog: Catalog,
}

impl Portfolio {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            cash: STARTING_CASH,
            catalog,
        }
    }

    /// Percent change of one instrument since the last tick.
    pub fn percent_change(&self, symbol: &str) -> Result<f64> {
        self.catalog
            .get(symbol)
            .map(|inst| inst.percent_change())
            .ok_or_else(|| SimError::UnknownInstrument(symbol.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_portfolio_starts_with_a_million() {
        let portfolio = Portfolio::new(Catalog::new());
        assert_eq!(portfolio.cash, 1_000_000);
        assert!(portfolio.catalog.is_empty());
    }

    #[test]
    fn percent_change_rejects_unknown_symbols() {
        let portfolio = Portfolio::new(Catalog::new());
        assert!(matches!(
            portfolio.percent_change("XYZ"),
            Err(SimError::UnknownInstrument(_))
        ));
    }
}
