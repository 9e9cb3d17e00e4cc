// src/engine.rs
//! Order validation and settlement. Strictly all-or-nothing: a rejected
//! order leaves the portfolio exactly as it was.
//!
//! Both sides settle at the instrument's current price at the moment of
//! execution. There is no slippage, no order book and no partial fill; this
//! is a single-actor market.

use crate::error::{Result, SimError};
use crate::portfolio::Portfolio;

/// Receipt for an executed order.
#[derive(Debug, Clone)]
pub struct Settlement {
    pub symbol: String,
    pub display_name: String,
    pub quantity: u64,
    pub unit_price: i64,
    pub total: i64,
    pub cash_after: i64,
    pub held_after: u64,
}

/// Buy `quantity` shares at the current price.
///
/// Rejected with no state change when the symbol is unknown, the quantity is
/// zero, or the order costs more than the cash on hand.
pub fn buy(portfolio: &mut Portfolio, symbol: &str, quantity: u64) -> Result<Settlement> {
    if quantity == 0 {
        return Err(SimError::InvalidQuantity(
            "share count must be positive".to_string(),
        ));
    }
    let cash = portfolio.cash;
    let inst = portfolio
        .catalog
        .get_mut(symbol)
        .ok_or_else(|| SimError::UnknownInstrument(symbol.to_string()))?;

    // Widened so a huge order overflows nothing and still reads as
    // unaffordable.
    let total_wide = inst.price as i128 * quantity as i128;
    if (cash as i128) < total_wide {
        return Err(SimError::InsufficientFunds {
            needed: i64::try_from(total_wide).unwrap_or(i64::MAX),
            available: cash,
        });
    }
    // Loaded state can carry arbitrary prices and balances, so the settled
    // amounts have to be range-checked, not assumed.
    let cash_after_wide = cash as i128 - total_wide;
    let (total, cash_after, held_after) = match (
        i64::try_from(total_wide),
        i64::try_from(cash_after_wide),
        inst.held_shares.checked_add(quantity),
    ) {
        (Ok(total), Ok(cash_after), Some(held_after)) => (total, cash_after, held_after),
        _ => {
            return Err(SimError::SettlementOverflow {
                symbol: inst.symbol.clone(),
                quantity,
            });
        }
    };

    inst.held_shares = held_after;
    let receipt = Settlement {
        symbol: inst.symbol.clone(),
        display_name: inst.display_name.clone(),
        quantity,
        unit_price: inst.price,
        total,
        cash_after,
        held_after,
    };
    portfolio.cash = cash_after;

    log::info!(
        "bought {} x {} at {} ({} total, {} left)",
        receipt.quantity,
        receipt.symbol,
        receipt.unit_price,
        receipt.total,
        receipt.cash_after
    );
    Ok(receipt)
}

/// Sell `quantity` shares at the current price.
///
/// Rejected with no state change when the symbol is unknown, the quantity is
/// zero, more shares are offered than held, or the proceeds would not fit
/// the balance.
pub fn sell(portfolio: &mut Portfolio, symbol: &str, quantity: u64) -> Result<Settlement> {
    if quantity == 0 {
        return Err(SimError::InvalidQuantity(
            "share count must be positive".to_string(),
        ));
    }
    let cash = portfolio.cash;
    let inst = portfolio
        .catalog
        .get_mut(symbol)
        .ok_or_else(|| SimError::UnknownInstrument(symbol.to_string()))?;

    if quantity > inst.held_shares {
        return Err(SimError::InsufficientShares {
            requested: quantity,
            held: inst.held_shares,
        });
    }

    // Positions restored from a save file can be arbitrarily large; widen so
    // an oversized sale is rejected instead of overflowing.
    let proceeds_wide = inst.price as i128 * quantity as i128;
    let cash_after_wide = cash as i128 + proceeds_wide;
    let (proceeds, cash_after) = match (
        i64::try_from(proceeds_wide),
        i64::try_from(cash_after_wide),
    ) {
        (Ok(proceeds), Ok(cash_after)) => (proceeds, cash_after),
        _ => {
            return Err(SimError::SettlementOverflow {
                symbol: inst.symbol.clone(),
                quantity,
            });
        }
    };

    inst.held_shares -= quantity;
    let receipt = Settlement {
        symbol: inst.symbol.clone(),
        display_name: inst.display_name.clone(),
        quantity,
        unit_price: inst.price,
        total: proceeds,
        cash_after,
        held_after: inst.held_shares,
    };
    portfolio.cash = cash_after;

    log::info!(
        "sold {} x {} at {} ({} total, {} on hand)",
        receipt.quantity,
        receipt.symbol,
        receipt.unit_price,
        receipt.total,
        receipt.cash_after
    );
    Ok(receipt)
}
