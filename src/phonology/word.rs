//! Words: syllable sequences.

use std::fmt;

use super::phone::Phone;
use super::syllable::Syllable;

/// An ordered sequence of syllables.
///
/// Words are immutable; sound changes build new words rather than
/// editing in place. The `Display` form uses the transcription syntax
/// [`WordFactory::parse`](super::factory::WordFactory::parse) accepts:
/// `'` before a stressed syllable, `.` between unstressed neighbors, as
/// in `be'ko.mu`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    syllables: Vec<Syllable>,
}

impl Word {
    /// Create a word from syllables.
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Word { syllables }
    }

    /// The syllables, in order.
    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// Number of syllables.
    #[inline]
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Total number of phones across all syllables.
    pub fn phone_count(&self) -> usize {
        self.syllables.iter().map(Syllable::len).sum()
    }

    /// Iterate over all phones in order, ignoring syllable boundaries.
    pub fn phones(&self) -> impl Iterator<Item = &Phone> {
        self.syllables.iter().flat_map(Syllable::iter)
    }

    /// Check whether the word has no syllables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, syllable) in self.syllables.iter().enumerate() {
            if syllable.is_stressed() {
                f.write_str("'")?;
            } else if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{syllable}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Syllable;
    type IntoIter = std::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.syllables.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonology::factory::WordFactory;

    #[test]
    fn test_counts_and_flattening() {
        let word = WordFactory::core().parse("uk.tu'ku").unwrap();
        assert_eq!(word.syllable_count(), 3);
        assert_eq!(word.phone_count(), 6);
        let flat: Vec<_> = word.phones().map(|p| p.symbol().to_string()).collect();
        assert_eq!(flat, ["u", "k", "t", "u", "k", "u"]);
    }

    #[test]
    fn test_display_marks_stress_and_breaks() {
        let factory = WordFactory::core();
        for raw in ["a'sap", "be'ko.mu", "uk.tu'ku", "'ta.ka", "ta"] {
            assert_eq!(factory.parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn test_empty_word() {
        let word = Word::new(Vec::new());
        assert!(word.is_empty());
        assert_eq!(word.phone_count(), 0);
        assert_eq!(word.to_string(), "");
    }
}
