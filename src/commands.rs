// src/commands.rs
//! The programmatic command surface the interactive console drives.
//!
//! Parsing and execution are split so callers can build commands directly,
//! script them, or feed raw console lines through [`Command::parse`].

use std::path::Path;
use std::str::SplitWhitespace;

use crate::engine::{self, Settlement};
use crate::error::{Result, SimError};
use crate::market::{self, DeltaSource, PriceMove};
use crate::persistence;
use crate::portfolio::Portfolio;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Buy { symbol: String, quantity: u64 },
    Sell { symbol: String, quantity: u64 },
    Update { count: u32 },
    Save,
    Load,
    Help,
    Exit,
    /// Anything unrecognized, including an empty line: a single-tick refresh.
    Refresh,
}

impl Command {
    /// Parse one console line.
    ///
    /// Unknown verbs fall back to [`Command::Refresh`]; a recognized verb
    /// with missing or non-numeric arguments is an error, not a refresh.
    pub fn parse(input: &str) -> Result<Command> {
        let mut words = input.split_whitespace();
        match words.next() {
            Some("buy") => {
                let (symbol, quantity) = order_args(&mut words, "buy")?;
                Ok(Command::Buy { symbol, quantity })
            }
            Some("sell") => {
                let (symbol, quantity) = order_args(&mut words, "sell")?;
                Ok(Command::Sell { symbol, quantity })
            }
            Some("update") => {
                let count = words.next().ok_or_else(|| {
                    SimError::InvalidQuantity("usage: update <count>".to_string())
                })?;
                let count: u32 = count.parse().map_err(|_| {
                    SimError::InvalidQuantity(format!("'{}' is not an update count", count))
                })?;
                if count == 0 {
                    return Err(SimError::InvalidQuantity(
                        "update count must be positive".to_string(),
                    ));
                }
                Ok(Command::Update { count })
            }
            Some("save") => Ok(Command::Save),
            Some("load") => Ok(Command::Load),
            Some("help") => Ok(Command::Help),
            Some("exit") => Ok(Command::Exit),
            _ => Ok(Command::Refresh),
        }
    }
}

fn order_args(words: &mut SplitWhitespace<'_>, verb: &str) -> Result<(String, u64)> {
    let usage = || SimError::InvalidQuantity(format!("usage: {} <symbol> <quantity>", verb));
    let symbol = words.next().ok_or_else(usage)?;
    let quantity = words.next().ok_or_else(usage)?;
    let quantity: u64 = quantity.parse().map_err(|_| {
        SimError::InvalidQuantity(format!("'{}' is not a share count", quantity))
    })?;
    if quantity == 0 {
        return Err(SimError::InvalidQuantity(
            "share count must be positive".to_string(),
        ));
    }
    Ok((symbol.to_string(), quantity))
}

/// What a successfully executed command produced, for the caller to render.
#[derive(Debug)]
pub enum Outcome {
    Bought(Settlement),
    Sold(Settlement),
    Updated(Vec<PriceMove>),
    Refreshed,
    Saved,
    Loaded,
    Help,
    Exit,
}

/// Execute one command against the portfolio.
pub fn execute(
    portfolio: &mut Portfolio,
    command: &Command,
    deltas: &mut impl DeltaSource,
    save_path: &Path,
) -> Result<Outcome> {
    match command {
        Command::Buy { symbol, quantity } => {
            engine::buy(portfolio, symbol, *quantity).map(Outcome::Bought)
        }
        Command::Sell { symbol, quantity } => {
            engine::sell(portfolio, symbol, *quantity).map(Outcome::Sold)
        }
        Command::Update { count } => Ok(Outcome::Updated(market::update(
            portfolio, *count, deltas,
        ))),
        Command::Save => persistence::save(portfolio, save_path).map(|_| Outcome::Saved),
        Command::Load => persistence::load(portfolio, save_path).map(|_| Outcome::Loaded),
        Command::Help => Ok(Outcome::Help),
        Command::Exit => Ok(Outcome::Exit),
        Command::Refresh => {
            market::tick(portfolio, deltas);
            Ok(Outcome::Refreshed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::market::ScriptedDeltas;

    #[test]
    fn parses_the_full_command_table() {
        assert_eq!(
            Command::parse("buy ACM 10").unwrap(),
            Command::Buy {
                symbol: "ACM".to_string(),
                quantity: 10
            }
        );
        assert_eq!(
            Command::parse("sell ACM 3").unwrap(),
            Command::Sell {
                symbol: "ACM".to_string(),
                quantity: 3
            }
        );
        assert_eq!(Command::parse("update 5").unwrap(), Command::Update { count: 5 });
        assert_eq!(Command::parse("save").unwrap(), Command::Save);
        assert_eq!(Command::parse("load").unwrap(), Command::Load);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
        assert_eq!(Command::parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn anything_else_is_a_refresh() {
        assert_eq!(Command::parse("").unwrap(), Command::Refresh);
        assert_eq!(Command::parse("   ").unwrap(), Command::Refresh);
        assert_eq!(Command::parse("dance").unwrap(), Command::Refresh);
    }

    #[test]
    fn bad_arguments_are_errors_not_refreshes() {
        assert!(matches!(
            Command::parse("buy ACM ten"),
            Err(SimError::InvalidQuantity(_))
        ));
        assert!(matches!(
            Command::parse("buy ACM 0"),
            Err(SimError::InvalidQuantity(_))
        ));
        assert!(matches!(
            Command::parse("sell ACM"),
            Err(SimError::InvalidQuantity(_))
        ));
        assert!(matches!(
            Command::parse("update zero"),
            Err(SimError::InvalidQuantity(_))
        ));
        assert!(matches!(
            Command::parse("update 0"),
            Err(SimError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn execute_routes_to_the_engine_and_market() {
        let mut p = Portfolio::new(
            Catalog::parse("Acme ACM 1000 -50~50").expect("valid definition"),
        );
        let mut deltas = ScriptedDeltas::new([500]);
        let save_path = Path::new("unused.txt");

        let bought = execute(
            &mut p,
            &Command::Buy {
                symbol: "ACM".to_string(),
                quantity: 10,
            },
            &mut deltas,
            save_path,
        )
        .unwrap();
        assert!(matches!(bought, Outcome::Bought(_)));
        assert_eq!(p.cash, 990_000);

        let updated = execute(&mut p, &Command::Update { count: 1 }, &mut deltas, save_path)
            .unwrap();
        match updated {
            Outcome::Updated(moves) => {
                assert_eq!(moves.len(), 1);
                assert_eq!(moves[0].new_price, 1_500);
            }
            other => panic!("expected Updated, got {other:?}"),
        }

        let refreshed =
            execute(&mut p, &Command::Refresh, &mut deltas, save_path).unwrap();
        assert!(matches!(refreshed, Outcome::Refreshed));
        assert_eq!(p.catalog.get("ACM").unwrap().price, 2_000);
    }

    #[test]
    fn load_without_a_save_file_reports_and_keeps_state() {
        let mut p = Portfolio::new(
            Catalog::parse("Acme ACM 1000 -50~50").expect("valid definition"),
        );
        let mut deltas = ScriptedDeltas::new([0]);

        let err = execute(
            &mut p,
            &Command::Load,
            &mut deltas,
            Path::new("/definitely/not/here.txt"),
        )
        .unwrap_err();

        assert!(matches!(err, SimError::SaveFileMissing));
        assert_eq!(p.cash, 1_000_000);
    }
}
