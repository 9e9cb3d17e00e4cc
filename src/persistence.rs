// src/persistence.rs
//! Save-file codec. Line-oriented text:
//!
//! ```text
//! <cash balance>
//! <display name>: <price>:<shares>
//! ...
//! ```
//!
//! One record per instrument, in catalog order. The two separators are
//! asymmetric (colon-space after the name, bare colon before the shares);
//! existing save files depend on that exact shape.

use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SimError};
use crate::portfolio::Portfolio;
use crate::types::Instrument;

/// Default save location, next to the process working directory.
pub const DEFAULT_SAVE_PATH: &str = "save.txt";

/// Render the portfolio in save-file form.
pub fn serialize(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", portfolio.cash);
    for inst in portfolio.catalog.iter() {
        let _ = writeln!(out, "{}: {}:{}", inst.display_name, inst.price, inst.held_shares);
    }
    out
}

/// Write the save file.
pub fn save(portfolio: &Portfolio, path: &Path) -> Result<()> {
    fs::write(path, serialize(portfolio))?;
    log::info!("saved game to {}", path.display());
    Ok(())
}

/// Apply save-file text to the portfolio.
///
/// Records are matched to instruments by display name; a record naming
/// nothing in the catalog is dropped silently. A malformed line stops
/// parsing right there and is reported with its line number; lines already
/// applied stay applied. That partial-application quirk is part of the
/// format's observable behavior and is kept as-is.
pub fn deserialize_into(portfolio: &mut Portfolio, text: &str) -> Result<()> {
    let mut lines = text.lines().enumerate();

    let first = lines.next().map(|(_, l)| l.trim()).unwrap_or("");
    let cash: i64 = first.parse().map_err(|_| SimError::MalformedRecord {
        line: 1,
        reason: format!("bad balance '{}'", first),
    })?;
    portfolio.cash = cash;

    for (idx, raw) in lines {
        let line = raw.trim();
        let lineno = idx + 1;
        let (name, rest) = line.split_once(": ").ok_or_else(|| SimError::MalformedRecord {
            line: lineno,
            reason: "missing ': ' separator".to_string(),
        })?;
        let parts: Vec<&str> = rest.split(':').collect();
        if parts.len() != 2 {
            return Err(SimError::MalformedRecord {
                line: lineno,
                reason: format!("expected '<price>:<shares>', got '{}'", rest),
            });
        }
        let price: i64 = parts[0].trim().parse().map_err(|_| SimError::MalformedRecord {
            line: lineno,
            reason: format!("bad price '{}'", parts[0].trim()),
        })?;
        let shares: u64 = parts[1].trim().parse().map_err(|_| SimError::MalformedRecord {
            line: lineno,
            reason: format!("bad share count '{}'", parts[1].trim()),
        })?;

        match find_by_display_name(portfolio, name) {
            Some(inst) => {
                inst.price = price;
                inst.held_shares = shares;
            }
            None => log::warn!("save record '{}' matches no instrument, dropped", name),
        }
    }
    Ok(())
}

/// Read and apply a save file. A missing file leaves the portfolio untouched
/// and is reported as [`SimError::SaveFileMissing`].
pub fn load(portfolio: &mut Portfolio, path: &Path) -> Result<()> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            SimError::SaveFileMissing
        } else {
            SimError::Io(e)
        }
    })?;
    deserialize_into(portfolio, &text)?;
    log::info!("loaded game from {}", path.display());
    Ok(())
}

/// Save records are keyed by display name, not symbol; first match wins.
/// Renamed or duplicated display names silently hit the wrong entry (or
/// none), which is exactly what existing save files expect. If the record
/// key ever changes, this is the only place to swap.
fn find_by_display_name<'a>(
    portfolio: &'a mut Portfolio,
    name: &str,
) -> Option<&'a mut Instrument> {
    portfolio
        .catalog
        .iter_mut()
        .find(|inst| inst.display_name == name)
}
