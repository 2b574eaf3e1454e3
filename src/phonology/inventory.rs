//! Feature inventories: an ordered feature set plus a symbol table.
//!
//! An [`Inventory`] fixes the canonical feature order for every phone
//! built from it and maps display symbols to complete feature rows. The
//! row table is also consulted in reverse: when a feature edit produces
//! a bundle that exactly matches a known row, the phone takes that row's
//! symbol.
//!
//! # Definition format
//!
//! [`Inventory::parse`] reads a plain-text definition. The first content
//! line names the set, `[bracketed]` lines declare features in canonical
//! order, and every other line is a symbol row: the symbol, whitespace,
//! then one mark (`+`, `-`, or `0`) per feature. Blank lines and lines
//! starting with `#` are skipped.
//!
//! ```text
//! tiny
//! [syllabic]
//! [voice]
//! a + +
//! t - -
//! d - +
//! ```

use rustc_hash::FxHashMap;

use super::error::{PhonologyError, Result};
use super::feature::FeatureValue;

/// A named feature set with a symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    name: String,
    features: Vec<String>,
    feature_index: FxHashMap<String, usize>,
    symbols: Vec<String>,
    rows: Vec<Vec<FeatureValue>>,
    symbol_index: FxHashMap<String, usize>,
    row_index: FxHashMap<Vec<FeatureValue>, usize>,
    max_symbol_chars: usize,
}

/// Canonical feature order of the built-in core inventory.
const CORE_FEATURES: [&str; 15] = [
    "syllabic",
    "consonantal",
    "sonorant",
    "continuant",
    "nasal",
    "voice",
    "labial",
    "coronal",
    "dorsal",
    "lateral",
    "strident",
    "high",
    "low",
    "back",
    "round",
];

/// Symbol rows of the core inventory. Mark groups follow the feature
/// order above: major class, manner/voice, place, vowel space.
const CORE_SYMBOLS: [(&str, &str); 25] = [
    ("p", "-+ ---- +---- 0000"),
    ("b", "-+ ---+ +---- 0000"),
    ("t", "-+ ---- -+--- 0000"),
    ("d", "-+ ---+ -+--- 0000"),
    ("k", "-+ ---- --+-- 0000"),
    ("g", "-+ ---+ --+-- 0000"),
    ("m", "-+ +-++ +---- 0000"),
    ("n", "-+ +-++ -+--- 0000"),
    ("f", "-+ -+-- +---- 0000"),
    ("v", "-+ -+-+ +---- 0000"),
    ("θ", "-+ -+-- -+--- 0000"),
    ("ð", "-+ -+-+ -+--- 0000"),
    ("s", "-+ -+-- -+--+ 0000"),
    ("z", "-+ -+-+ -+--+ 0000"),
    ("x", "-+ -+-- --+-- 0000"),
    ("ɣ", "-+ -+-+ --+-- 0000"),
    ("w", "-- ++-+ +-+-- +-++"),
    ("j", "-- ++-+ --+-- +---"),
    ("r", "-+ ++-+ -+--- 0000"),
    ("l", "-+ ++-+ -+-+- 0000"),
    ("a", "+- ++-+ ----- -++-"),
    ("e", "+- ++-+ ----- ----"),
    ("i", "+- ++-+ ----- +---"),
    ("o", "+- ++-+ ----- --++"),
    ("u", "+- ++-+ ----- +-++"),
];

impl Inventory {
    /// Create an empty inventory with the given feature order.
    ///
    /// # Errors
    ///
    /// Returns [`PhonologyError::DuplicateFeature`] if the same feature
    /// appears twice.
    pub fn new(name: impl Into<String>, features: &[&str]) -> Result<Self> {
        let mut feature_index = FxHashMap::default();
        let mut ordered = Vec::with_capacity(features.len());
        for (position, feature) in features.iter().enumerate() {
            if feature_index.insert(feature.to_string(), position).is_some() {
                return Err(PhonologyError::DuplicateFeature(feature.to_string()));
            }
            ordered.push(feature.to_string());
        }
        Ok(Inventory {
            name: name.into(),
            features: ordered,
            feature_index,
            symbols: Vec::new(),
            rows: Vec::new(),
            symbol_index: FxHashMap::default(),
            row_index: FxHashMap::default(),
            max_symbol_chars: 0,
        })
    }

    /// Add a symbol row. `marks` holds one `+`/`-`/`0` per feature, in
    /// canonical order; whitespace between marks is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PhonologyError::DuplicateSymbol`] for a repeated symbol,
    /// [`PhonologyError::InvalidMark`] for an unrecognized mark, and
    /// [`PhonologyError::RowWidthMismatch`] when the row length does not
    /// match the feature count.
    pub fn add_symbol(&mut self, symbol: &str, marks: &str) -> Result<()> {
        if self.symbol_index.contains_key(symbol) {
            return Err(PhonologyError::DuplicateSymbol(symbol.to_string()));
        }
        let mut values = Vec::with_capacity(self.features.len());
        for mark in marks.chars().filter(|c| !c.is_whitespace()) {
            match FeatureValue::from_mark(mark) {
                Some(value) => values.push(value),
                None => {
                    return Err(PhonologyError::InvalidMark {
                        symbol: symbol.to_string(),
                        mark,
                    })
                }
            }
        }
        if values.len() != self.features.len() {
            return Err(PhonologyError::RowWidthMismatch {
                symbol: symbol.to_string(),
                found: values.len(),
                expected: self.features.len(),
            });
        }
        let slot = self.symbols.len();
        self.symbol_index.insert(symbol.to_string(), slot);
        // When two symbols share a row, the earlier one wins reverse lookup.
        self.row_index.entry(values.clone()).or_insert(slot);
        self.max_symbol_chars = self.max_symbol_chars.max(symbol.chars().count());
        self.symbols.push(symbol.to_string());
        self.rows.push(values);
        Ok(())
    }

    /// Parse a plain-text inventory definition (see the module docs for
    /// the format).
    ///
    /// # Errors
    ///
    /// Returns [`PhonologyError::EmptyDefinition`] when no name line is
    /// present, plus any error [`Inventory::new`] or
    /// [`Inventory::add_symbol`] reports for the collected content.
    pub fn parse(text: &str) -> Result<Self> {
        let mut name: Option<&str> = None;
        let mut features: Vec<&str> = Vec::new();
        let mut rows: Vec<(&str, &str)> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if name.is_none() {
                name = Some(line);
            } else if let Some(feature) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                features.push(feature.trim());
            } else {
                let (symbol, marks) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
                rows.push((symbol, marks));
            }
        }

        let name = name.ok_or(PhonologyError::EmptyDefinition)?;
        let mut inventory = Inventory::new(name, &features)?;
        for (symbol, marks) in rows {
            inventory.add_symbol(symbol, marks)?;
        }
        Ok(inventory)
    }

    /// The built-in 15-feature inventory covering a 20-consonant,
    /// 5-vowel segment set. Voicing partners differ only in `voice` and
    /// stop/fricative partners only in `continuant`, so single-feature
    /// edits relabel cleanly.
    pub fn core() -> Self {
        let mut inventory =
            Inventory::new("core", &CORE_FEATURES).expect("core feature set is well-formed");
        for (symbol, marks) in CORE_SYMBOLS {
            inventory
                .add_symbol(symbol, marks)
                .expect("core symbol table is well-formed");
        }
        inventory
    }

    /// Name of the feature set.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Features in canonical order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Number of features.
    #[inline]
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Position of a feature in the canonical order.
    #[inline]
    pub fn feature_position(&self, feature: &str) -> Option<usize> {
        self.feature_index.get(feature).copied()
    }

    /// Number of symbols.
    #[inline]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// All symbols, in definition order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    /// Check whether a symbol has a row.
    #[inline]
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.symbol_index.contains_key(symbol)
    }

    /// The feature row for a symbol.
    pub fn values_for(&self, symbol: &str) -> Option<&[FeatureValue]> {
        self.symbol_index
            .get(symbol)
            .map(|&slot| self.rows[slot].as_slice())
    }

    /// The symbol whose row exactly matches `values`, if any.
    pub fn symbol_for(&self, values: &[FeatureValue]) -> Option<&str> {
        self.row_index
            .get(values)
            .map(|&slot| self.symbols[slot].as_str())
    }

    /// Length in `char`s of the longest symbol. Zero when the table is
    /// empty.
    #[inline]
    pub fn max_symbol_chars(&self) -> usize {
        self.max_symbol_chars
    }
}
