//! Positional selectors, conditions, and iteration domains.
//!
//! [`This`] names the engine's current position during traversal. Its
//! constructors build the two value kinds a rule is assembled from:
//!
//! - [`Condition`]: a predicate over traversal state, attached with
//!   `when`/`unless`. Relative lookups that fall off either end of the
//!   word are simply false; conditions never fail.
//! - [`Domain`]: the level a rule iterates at plus the predicate a unit
//!   must satisfy, attached with `to`.
//!
//! # Example
//!
//! ```rust,ignore
//! use lautwandel::prelude::*;
//!
//! // Fires on voiceless stops whose flat-sequence neighbors are vowels.
//! let rule = Change::new()
//!     .to(This::every_phone(|p| p.feature_is_false("continuant")))
//!     .when(This::phone_at(-1, Phone::is_vowel))
//!     .when(This::phone_at(1, Phone::is_vowel));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::phonology::{Phone, Syllable};

use super::transducer::Transducer;

/// The two word-part levels a rule stage can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Individual phones, traversed across syllable boundaries.
    Phone,
    /// Whole syllables.
    Syllable,
}

impl Level {
    /// Get a human-readable name for this level.
    pub fn name(&self) -> &'static str {
        match self {
            Level::Phone => "phone",
            Level::Syllable => "syllable",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared predicate over phones.
pub type PhonePredicate = Arc<dyn Fn(&Phone) -> bool + Send + Sync>;

/// Shared predicate over syllables.
pub type SyllablePredicate = Arc<dyn Fn(&Syllable) -> bool + Send + Sync>;

/// A predicate over traversal state.
///
/// Conditions gate a rule's transform: all of a rule's conditions must
/// hold at the cursor for the transform to fire. They read the engine's
/// pre-change snapshot through its cursor accessors and may not retain
/// the state they are handed.
#[derive(Clone)]
pub struct Condition(Arc<dyn Fn(&Transducer) -> bool + Send + Sync>);

impl Condition {
    /// Wrap a raw predicate over traversal state.
    pub fn new(condition: impl Fn(&Transducer) -> bool + Send + Sync + 'static) -> Self {
        Condition(Arc::new(condition))
    }

    /// The negation of this condition.
    pub fn negate(&self) -> Condition {
        let inner = Arc::clone(&self.0);
        Condition::new(move |transducer| !inner(transducer))
    }

    #[inline]
    pub(crate) fn holds(&self, transducer: &Transducer) -> bool {
        (self.0)(transducer)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").finish_non_exhaustive()
    }
}

/// A rule's iteration domain: the level it traverses and the predicate
/// a unit must satisfy to be rewritten.
#[derive(Clone)]
pub enum Domain {
    /// Visit every phone satisfying the predicate.
    Phones(PhonePredicate),
    /// Visit every syllable satisfying the predicate.
    Syllables(SyllablePredicate),
}

impl Domain {
    /// The level this domain traverses.
    pub fn level(&self) -> Level {
        match self {
            Domain::Phones(_) => Level::Phone,
            Domain::Syllables(_) => Level::Syllable,
        }
    }

    #[inline]
    pub(crate) fn admits_phone(&self, phone: &Phone) -> bool {
        match self {
            Domain::Phones(predicate) => predicate(phone),
            Domain::Syllables(_) => false,
        }
    }

    #[inline]
    pub(crate) fn admits_syllable(&self, syllable: &Syllable) -> bool {
        match self {
            Domain::Syllables(predicate) => predicate(syllable),
            Domain::Phones(_) => false,
        }
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Phones(_) => f.write_str("Domain::Phones(..)"),
            Domain::Syllables(_) => f.write_str("Domain::Syllables(..)"),
        }
    }
}

/// Builder for position-relative conditions and iteration domains.
///
/// All constructors are pure; the values they produce may be shared
/// across rules and threads.
pub struct This;

impl This {
    /// Condition: the phone `offset` positions from the cursor, in the
    /// word's flattened phone sequence, satisfies `predicate`.
    ///
    /// An absent neighbor (offset off either end of the word, or no
    /// phone cursor because the rule traverses syllables) is false.
    /// Offset `0` tests the phone under the cursor itself.
    pub fn phone_at(
        offset: isize,
        predicate: impl Fn(&Phone) -> bool + Send + Sync + 'static,
    ) -> Condition {
        Condition::new(move |transducer| {
            transducer
                .phone_at(offset)
                .map_or(false, |phone| predicate(phone))
        })
    }

    /// Condition: the syllable `offset` positions from the cursor
    /// satisfies `predicate`. Absent neighbors are false.
    pub fn syllable_at(
        offset: isize,
        predicate: impl Fn(&Syllable) -> bool + Send + Sync + 'static,
    ) -> Condition {
        Condition::new(move |transducer| {
            transducer
                .syllable_at(offset)
                .map_or(false, |syllable| predicate(syllable))
        })
    }

    /// Domain: every phone satisfying `predicate`.
    pub fn every_phone(predicate: impl Fn(&Phone) -> bool + Send + Sync + 'static) -> Domain {
        Domain::Phones(Arc::new(predicate))
    }

    /// Domain: every syllable satisfying `predicate`.
    pub fn every_syllable(
        predicate: impl Fn(&Syllable) -> bool + Send + Sync + 'static,
    ) -> Domain {
        Domain::Syllables(Arc::new(predicate))
    }

    /// Condition: the cursor phone sits at flat position `index`.
    /// Negative indices count from the end, so `-1` anchors a rule to
    /// the word-final phone. An out-of-range index is false.
    pub fn phone_at_index(index: isize) -> Condition {
        Condition::new(move |transducer| {
            resolve_index(index, transducer.phone_count())
                .map_or(false, |absolute| transducer.phone_index() == Some(absolute))
        })
    }

    /// Condition: the cursor syllable sits at position `index`.
    /// Negative indices count from the end.
    pub fn syllable_at_index(index: isize) -> Condition {
        Condition::new(move |transducer| {
            resolve_index(index, transducer.syllable_count())
                .map_or(false, |absolute| transducer.syllable_index() == absolute)
        })
    }
}

/// Resolve a signed absolute index against a sequence length; negative
/// indices count from the end.
fn resolve_index(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        let index = index as usize;
        (index < len).then_some(index)
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::transducer::Transducer;
    use crate::phonology::WordFactory;

    fn engine_at(raw: &str, flat: usize) -> Transducer {
        let word = WordFactory::core().parse(raw).unwrap();
        let syllable = word
            .syllables()
            .iter()
            .scan(0usize, |total, s| {
                *total += s.len();
                Some(*total)
            })
            .position(|end| flat < end)
            .unwrap();
        Transducer::new(&word).with_cursor(syllable, Some(flat))
    }

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve_index(0, 3), Some(0));
        assert_eq!(resolve_index(2, 3), Some(2));
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(-1, 3), Some(2));
        assert_eq!(resolve_index(-3, 3), Some(0));
        assert_eq!(resolve_index(-4, 3), None);
        assert_eq!(resolve_index(0, 0), None);
        assert_eq!(resolve_index(-1, 0), None);
    }

    #[test]
    fn test_phone_at_relative_lookup() {
        // a'sap: flat phones a s a p, cursor on s.
        let engine = engine_at("a'sap", 1);
        assert!(This::phone_at(0, |p| p.is_symbol("s")).holds(&engine));
        assert!(This::phone_at(-1, Phone::is_vowel).holds(&engine));
        assert!(This::phone_at(1, Phone::is_vowel).holds(&engine));
        assert!(!This::phone_at(2, Phone::is_vowel).holds(&engine));
    }

    #[test]
    fn test_phone_at_is_false_off_the_edges() {
        let first = engine_at("a'sap", 0);
        assert!(!This::phone_at(-1, |_| true).holds(&first));
        let last = engine_at("a'sap", 3);
        assert!(!This::phone_at(1, |_| true).holds(&last));
        assert!(!This::phone_at(-10, |_| true).holds(&last));
    }

    #[test]
    fn test_phone_at_crosses_syllable_boundary() {
        // Cursor on t of uk.tu'ku; the previous flat phone is k in the
        // preceding syllable.
        let engine = engine_at("uk.tu'ku", 2);
        assert!(This::phone_at(-1, |p| p.is_symbol("k")).holds(&engine));
        assert!(!This::phone_at(-1, Phone::is_vowel).holds(&engine));
    }

    #[test]
    fn test_syllable_at_relative_lookup() {
        let engine = engine_at("be'ko.mu", 0);
        assert!(This::syllable_at(1, Syllable::is_stressed).holds(&engine));
        assert!(!This::syllable_at(0, Syllable::is_stressed).holds(&engine));
        assert!(!This::syllable_at(-1, |_| true).holds(&engine));
        assert!(!This::syllable_at(3, |_| true).holds(&engine));
    }

    #[test]
    fn test_at_index_anchors() {
        let first = engine_at("a'sap", 0);
        let last = engine_at("a'sap", 3);
        assert!(This::phone_at_index(0).holds(&first));
        assert!(!This::phone_at_index(0).holds(&last));
        assert!(This::phone_at_index(-1).holds(&last));
        assert!(This::phone_at_index(3).holds(&last));
        assert!(!This::phone_at_index(99).holds(&last));
        assert!(This::syllable_at_index(-1).holds(&last));
        assert!(!This::syllable_at_index(-1).holds(&first));
    }

    #[test]
    fn test_phone_conditions_without_phone_cursor() {
        let word = WordFactory::core().parse("a'sap").unwrap();
        let engine = Transducer::new(&word).with_cursor(0, None);
        assert!(!This::phone_at(0, |_| true).holds(&engine));
        assert!(!This::phone_at_index(0).holds(&engine));
        // Syllable lookups still resolve.
        assert!(This::syllable_at_index(0).holds(&engine));
    }

    #[test]
    fn test_negate() {
        let engine = engine_at("a'sap", 0);
        let initial = This::phone_at_index(0);
        assert!(initial.holds(&engine));
        assert!(!initial.negate().holds(&engine));
        assert!(initial.negate().negate().holds(&engine));
    }

    #[test]
    fn test_domain_levels() {
        assert_eq!(This::every_phone(|_| true).level(), Level::Phone);
        assert_eq!(This::every_syllable(|_| true).level(), Level::Syllable);
        assert_eq!(Level::Phone.to_string(), "phone");
        assert_eq!(Level::Syllable.to_string(), "syllable");
    }
}
