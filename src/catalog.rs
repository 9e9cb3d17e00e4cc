// src/catalog.rs
//! The fixed universe of instruments available for trading in a session.
//!
//! Loaded once at startup from a line-oriented definition file; after that
//! the membership never changes. Trading and persistence only ever touch
//! prices, holdings and the cash balance.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SimError};
use crate::types::Instrument;

/// Insertion-ordered instrument set with symbol lookup.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    instruments: Vec<Instrument>,
    by_symbol: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog definition: one instrument per line, four
    /// whitespace-separated fields:
    ///
    /// ```text
    /// <display name> <symbol> <initial price> <min>~<max>
    /// ```
    ///
    /// Any line that does not parse fails the whole call.
    pub fn parse(source: &str) -> Result<Self> {
        let mut catalog = Catalog::new();
        for (idx, line) in source.lines().enumerate() {
            let instrument = parse_record(line.trim()).map_err(|reason| SimError::MalformedRecord {
                line: idx + 1,
                reason,
            })?;
            catalog.insert(instrument);
        }
        Ok(catalog)
    }

    /// Read a definition file. A missing file is reported as
    /// [`SimError::CatalogSourceMissing`]; callers are expected to fall back
    /// to an empty catalog rather than abort.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                SimError::CatalogSourceMissing
            } else {
                SimError::Io(e)
            }
        })?;
        Self::parse(&source)
    }

    /// Mapping-assignment semantics: a duplicate symbol replaces the earlier
    /// entry in place, keeping its original position.
    fn insert(&mut self, instrument: Instrument) {
        match self.by_symbol.get(&instrument.symbol) {
            Some(&pos) => self.instruments[pos] = instrument,
            None => {
                self.by_symbol
                    .insert(instrument.symbol.clone(), self.instruments.len());
                self.instruments.push(instrument);
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.by_symbol.get(symbol).map(|&pos| &self.instruments[pos])
    }

    pub fn get_mut(&mut self, symbol: &str) -> Option<&mut Instrument> {
        match self.by_symbol.get(symbol) {
            Some(&pos) => Some(&mut self.instruments[pos]),
            None => None,
        }
    }

    /// Instruments in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Instrument> {
        self.instruments.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

fn parse_record(line: &str) -> std::result::Result<Instrument, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 fields, got {}", fields.len()));
    }
    let price: i64 = fields[2]
        .parse()
        .map_err(|_| format!("bad price '{}'", fields[2]))?;
    let (min, max) = fields[3]
        .split_once('~')
        .ok_or_else(|| format!("bad change range '{}'", fields[3]))?;
    let min_change: i64 = min
        .parse()
        .map_err(|_| format!("bad change bound '{}'", min))?;
    let max_change: i64 = max
        .parse()
        .map_err(|_| format!("bad change bound '{}'", max))?;
    if min_change > max_change {
        return Err(format!("inverted change range '{}'", fields[3]));
    }
    Ok(Instrument::new(
        fields[1], fields[0], price, min_change, max_change,
    ))
}
