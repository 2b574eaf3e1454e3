//! Word construction from raw transcriptions.

use std::sync::Arc;

use super::error::{PhonologyError, Result};
use super::inventory::Inventory;
use super::phone::Phone;
use super::syllable::Syllable;
use super::word::Word;

/// Builds [`Word`]s from transcriptions against a fixed inventory.
///
/// The transcription syntax: `.` separates syllables, `'` (or the IPA
/// stress mark `ˈ`) marks the following syllable as stressed. Within a
/// syllable, symbols are matched greedily, longest first, so inventories
/// with digraph symbols parse without separator characters.
///
/// # Example
///
/// ```rust,ignore
/// use lautwandel::prelude::*;
///
/// let factory = WordFactory::core();
/// let word = factory.parse("be'ko.mu")?;
/// assert_eq!(word.syllable_count(), 3);
/// assert!(word.syllables()[1].is_stressed());
/// ```
#[derive(Debug, Clone)]
pub struct WordFactory {
    inventory: Arc<Inventory>,
}

impl WordFactory {
    /// Create a factory over an inventory.
    pub fn new(inventory: Arc<Inventory>) -> Self {
        WordFactory { inventory }
    }

    /// A factory over the built-in core inventory.
    pub fn core() -> Self {
        WordFactory::new(Arc::new(Inventory::core()))
    }

    /// The inventory this factory parses against.
    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    /// Build a single phone by symbol.
    ///
    /// # Errors
    ///
    /// Returns [`PhonologyError::UnknownSymbol`] when the inventory has
    /// no row for `symbol`.
    pub fn phone(&self, symbol: &str) -> Result<Phone> {
        Phone::from_symbol(&self.inventory, symbol)
    }

    /// Parse a transcription into a word.
    ///
    /// # Errors
    ///
    /// Returns [`PhonologyError::EmptyWord`] for a blank transcription,
    /// [`PhonologyError::EmptySyllable`] for doubled or trailing
    /// separators, and [`PhonologyError::UnknownSymbol`] when a chunk
    /// contains material no symbol covers.
    pub fn parse(&self, raw: &str) -> Result<Word> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PhonologyError::EmptyWord);
        }

        let mut syllables = Vec::new();
        let mut chunk = String::new();
        let mut stressed = false;
        for c in trimmed.chars() {
            match c {
                '.' => {
                    if chunk.is_empty() {
                        return Err(PhonologyError::EmptySyllable(trimmed.to_string()));
                    }
                    syllables.push(self.syllable(&chunk)?.with_stress(stressed));
                    chunk.clear();
                    stressed = false;
                }
                '\'' | 'ˈ' => {
                    if !chunk.is_empty() {
                        syllables.push(self.syllable(&chunk)?.with_stress(stressed));
                        chunk.clear();
                    }
                    stressed = true;
                }
                _ => chunk.push(c),
            }
        }
        if chunk.is_empty() {
            return Err(PhonologyError::EmptySyllable(trimmed.to_string()));
        }
        syllables.push(self.syllable(&chunk)?.with_stress(stressed));
        Ok(Word::new(syllables))
    }

    /// Greedy longest-symbol segmentation of one syllable chunk.
    fn syllable(&self, chunk: &str) -> Result<Syllable> {
        let chars: Vec<char> = chunk.chars().collect();
        let longest = self.inventory.max_symbol_chars().max(1);
        let mut phones = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            let upper = longest.min(chars.len() - start);
            let mut matched = None;
            for len in (1..=upper).rev() {
                let candidate: String = chars[start..start + len].iter().collect();
                if self.inventory.contains_symbol(&candidate) {
                    matched = Some((candidate, len));
                    break;
                }
            }
            let Some((symbol, len)) = matched else {
                return Err(PhonologyError::UnknownSymbol(chars[start].to_string()));
            };
            phones.push(Phone::from_symbol(&self.inventory, &symbol)?);
            start += len;
        }
        Ok(Syllable::new(phones))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_medial_stress() {
        let word = WordFactory::core().parse("be'ko.mu").unwrap();
        assert_eq!(word.syllable_count(), 3);
        let stresses: Vec<_> = word.syllables().iter().map(Syllable::is_stressed).collect();
        assert_eq!(stresses, [false, true, false]);
        assert_eq!(word.syllables()[0].to_string(), "be");
        assert_eq!(word.syllables()[1].to_string(), "ko");
        assert_eq!(word.syllables()[2].to_string(), "mu");
    }

    #[test]
    fn test_parse_accepts_ipa_stress_mark() {
        let factory = WordFactory::core();
        assert_eq!(
            factory.parse("beˈko.mu").unwrap(),
            factory.parse("be'ko.mu").unwrap()
        );
    }

    #[test]
    fn test_parse_initial_stress() {
        let word = WordFactory::core().parse("'ta.ka").unwrap();
        assert!(word.syllables()[0].is_stressed());
        assert!(!word.syllables()[1].is_stressed());
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(
            WordFactory::core().parse("  "),
            Err(PhonologyError::EmptyWord)
        );
    }

    #[test]
    fn test_parse_rejects_empty_syllables() {
        let factory = WordFactory::core();
        for raw in ["ta..ka", "ta.", ".ta", "ta'"] {
            assert_eq!(
                factory.parse(raw),
                Err(PhonologyError::EmptySyllable(raw.to_string())),
                "expected empty-syllable error for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert_eq!(
            WordFactory::core().parse("taq"),
            Err(PhonologyError::UnknownSymbol("q".to_string()))
        );
    }

    #[test]
    fn test_greedy_longest_match() {
        let definition = "\
digraphs
[syllabic]
[voice]
a  + +
t  - -
s  - -
ts - -
";
        // "ts" must win over "t" followed by "s".
        let factory = WordFactory::new(Arc::new(Inventory::parse(definition).unwrap()));
        let word = factory.parse("tsa.sta").unwrap();
        let flat: Vec<_> = word.phones().map(|p| p.symbol().to_string()).collect();
        assert_eq!(flat, ["ts", "a", "s", "t", "a"]);
    }

    #[test]
    fn test_single_phone_lookup() {
        let factory = WordFactory::core();
        assert_eq!(factory.phone("ɣ").unwrap().symbol(), "ɣ");
        assert_eq!(
            factory.phone("q"),
            Err(PhonologyError::UnknownSymbol("q".to_string()))
        );
    }
}
