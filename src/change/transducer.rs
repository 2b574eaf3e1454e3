//! The traversal engine.
//!
//! A [`Transducer`] executes exactly one rule over exactly one word. It
//! snapshots the word at construction, walks it in order at the rule's
//! level, and reassembles a fresh word from whatever the rule leaves
//! behind. Conditions and transforms read the snapshot through the
//! cursor accessors here, so every lookup during a pass sees the
//! pre-change neighborhood: a rewrite emitted earlier in the walk never
//! shifts what a later condition observes.
//!
//! Engines are single use. [`Change::apply`](super::Change::apply)
//! builds one per call and discards it with the pass, which is what
//! keeps cursor and skip state from ever leaking between independent
//! applications.

use crate::phonology::{Phone, Syllable, Word};

use super::rule::Change;

/// Single-use walker binding one word to one rule application.
///
/// The engine tracks a current-syllable cursor, a current-phone cursor
/// (flat position across syllable boundaries; absent in syllable mode),
/// and the skip flag a fired transform may raise via
/// [`Rewrite::skip_next`](super::Rewrite::skip_next). Conditions receive
/// `&Transducer` for the duration of a single step and resolve relative
/// positions against it; every lookup is bounds-checked, so a neighbor
/// off either end of the word is simply absent.
#[derive(Debug)]
pub struct Transducer {
    /// Snapshot of the word's syllables, untouched for the whole pass.
    syllables: Vec<Syllable>,
    /// Flat phone position `i` lives at `positions[i] = (syllable, phone)`.
    positions: Vec<(usize, usize)>,
    syllable_cursor: usize,
    phone_cursor: Option<usize>,
    ignore_next: bool,
}

impl Transducer {
    pub(crate) fn new(word: &Word) -> Self {
        let syllables = word.syllables().to_vec();
        let mut positions = Vec::with_capacity(word.phone_count());
        for (syllable, phones) in syllables.iter().enumerate() {
            for phone in 0..phones.len() {
                positions.push((syllable, phone));
            }
        }
        Transducer {
            syllables,
            positions,
            syllable_cursor: 0,
            phone_cursor: None,
            ignore_next: false,
        }
    }

    /// Cursor placement for predicate tests.
    #[cfg(test)]
    pub(crate) fn with_cursor(mut self, syllable: usize, phone: Option<usize>) -> Self {
        self.syllable_cursor = syllable;
        self.phone_cursor = phone;
        self
    }

    /// The syllable under the cursor. `None` only for an empty word.
    pub fn current_syllable(&self) -> Option<&Syllable> {
        self.syllable_at(0)
    }

    /// The phone under the cursor. `None` in syllable mode, where no
    /// single phone is current.
    pub fn current_phone(&self) -> Option<&Phone> {
        self.phone_at(0)
    }

    /// The syllable `offset` positions from the cursor syllable, or
    /// `None` when the offset leaves the word.
    pub fn syllable_at(&self, offset: isize) -> Option<&Syllable> {
        let target = self.syllable_cursor.checked_add_signed(offset)?;
        self.syllables.get(target)
    }

    /// The phone `offset` positions from the cursor phone in the word's
    /// flattened phone sequence. Neighbors resolve across syllable
    /// boundaries; `None` when the offset leaves the word or no phone
    /// cursor is set.
    pub fn phone_at(&self, offset: isize) -> Option<&Phone> {
        let cursor = self.phone_cursor?;
        let target = cursor.checked_add_signed(offset)?;
        let &(syllable, phone) = self.positions.get(target)?;
        Some(&self.syllables[syllable].phones()[phone])
    }

    /// Flat position of the cursor phone, if one is set.
    #[inline]
    pub fn phone_index(&self) -> Option<usize> {
        self.phone_cursor
    }

    /// Position of the cursor syllable.
    #[inline]
    pub fn syllable_index(&self) -> usize {
        self.syllable_cursor
    }

    /// Total number of phones in the word.
    #[inline]
    pub fn phone_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of syllables in the word.
    #[inline]
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }

    /// Phone-mode pass: visit every phone in flat order, rewriting the
    /// ones the rule admits, and rebuild each syllable from what
    /// survives. Rebuilt syllables keep the original stress flag; phone
    /// transforms cannot touch stress.
    pub(crate) fn run_phones(mut self, rule: &Change) -> Word {
        let mut new_syllables = Vec::with_capacity(self.syllables.len());
        let mut flat = 0;
        for syllable_index in 0..self.syllables.len() {
            let phone_total = self.syllables[syllable_index].len();
            let mut rebuilt: Vec<Phone> = Vec::with_capacity(phone_total);
            for phone_index in 0..phone_total {
                self.syllable_cursor = syllable_index;
                self.phone_cursor = Some(flat);
                if self.ignore_next {
                    // A transform consumed this phone on the previous
                    // step; emit it untested.
                    self.ignore_next = false;
                    rebuilt.push(self.syllables[syllable_index].phones()[phone_index].clone());
                } else {
                    let rewrite = {
                        let phone = &self.syllables[syllable_index].phones()[phone_index];
                        (rule.admits_phone(phone) && rule.conditions_hold(&self))
                            .then(|| rule.rewrite_phone(phone, &self))
                    };
                    match rewrite {
                        Some(rewrite) => {
                            self.ignore_next = rewrite.skips_next();
                            rebuilt.extend(rewrite.into_parts());
                        }
                        None => rebuilt
                            .push(self.syllables[syllable_index].phones()[phone_index].clone()),
                    }
                }
                flat += 1;
            }
            let stressed = self.syllables[syllable_index].is_stressed();
            new_syllables.push(Syllable::new(rebuilt).with_stress(stressed));
        }
        Word::new(new_syllables)
    }

    /// Syllable-mode pass: visit every syllable in order. Fired
    /// transforms supply their output syllables as-is, so an explicit
    /// stress change in a transform wins; untouched syllables are
    /// carried over unchanged.
    pub(crate) fn run_syllables(mut self, rule: &Change) -> Word {
        let mut new_syllables = Vec::with_capacity(self.syllables.len());
        for syllable_index in 0..self.syllables.len() {
            self.syllable_cursor = syllable_index;
            self.phone_cursor = None;
            if self.ignore_next {
                self.ignore_next = false;
                new_syllables.push(self.syllables[syllable_index].clone());
            } else {
                let rewrite = {
                    let syllable = &self.syllables[syllable_index];
                    (rule.admits_syllable(syllable) && rule.conditions_hold(&self))
                        .then(|| rule.rewrite_syllable(syllable, &self))
                };
                match rewrite {
                    Some(rewrite) => {
                        self.ignore_next = rewrite.skips_next();
                        new_syllables.extend(rewrite.into_parts());
                    }
                    None => new_syllables.push(self.syllables[syllable_index].clone()),
                }
            }
        }
        Word::new(new_syllables)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::change::rewrite::Rewrite;
    use crate::change::rule::Change;
    use crate::change::selector::{Condition, This};
    use crate::change::transform::Transform;
    use crate::phonology::{FeatureValue, WordFactory};

    fn word(raw: &str) -> Word {
        WordFactory::core().parse(raw).unwrap()
    }

    #[test]
    fn test_snapshot_counts() {
        let engine = Transducer::new(&word("uk.tu'ku"));
        assert_eq!(engine.syllable_count(), 3);
        assert_eq!(engine.phone_count(), 6);
    }

    #[test]
    fn test_cursor_accessors() {
        let engine = Transducer::new(&word("uk.tu'ku")).with_cursor(1, Some(2));
        assert_eq!(engine.syllable_index(), 1);
        assert_eq!(engine.phone_index(), Some(2));
        assert_eq!(engine.current_phone().unwrap().symbol(), "t");
        assert_eq!(engine.current_syllable().unwrap().to_string(), "tu");
        // Flat neighbors cross the syllable boundary in both directions.
        assert_eq!(engine.phone_at(-1).unwrap().symbol(), "k");
        assert_eq!(engine.phone_at(2).unwrap().symbol(), "k");
        assert!(engine.phone_at(4).is_none());
        assert!(engine.phone_at(-3).is_none());
    }

    #[test]
    fn test_fresh_engine_has_no_phone_cursor() {
        let engine = Transducer::new(&word("a'sap"));
        assert_eq!(engine.phone_index(), None);
        assert!(engine.current_phone().is_none());
        assert_eq!(engine.syllable_index(), 0);
    }

    #[test]
    fn test_empty_word_engine() {
        let engine = Transducer::new(&Word::new(Vec::new()));
        assert_eq!(engine.syllable_count(), 0);
        assert_eq!(engine.phone_count(), 0);
        assert!(engine.current_syllable().is_none());
    }

    #[test]
    fn test_phone_run_filters_deletions() {
        // Delete every vowel; consonants stay in their syllables.
        let rule = Change::new()
            .to(This::every_phone(Phone::is_vowel))
            .does(Transform::phones(|_, _| Rewrite::delete()));
        let out = Transducer::new(&word("uk.tu'ku")).run_phones(&rule);
        assert_eq!(out.syllable_count(), 3);
        let flat: Vec<_> = out.phones().map(|p| p.symbol().to_string()).collect();
        assert_eq!(flat, ["k", "t", "k"]);
    }

    #[test]
    fn test_phone_run_keeps_emptied_syllables() {
        let rule = Change::new()
            .to(This::every_phone(Phone::is_vowel))
            .does(Transform::phones(|_, _| Rewrite::delete()));
        let out = Transducer::new(&word("a'sap")).run_phones(&rule);
        assert_eq!(out.syllable_count(), 2);
        assert!(out.syllables()[0].is_empty());
        assert_eq!(out.syllables()[1].to_string(), "sp");
    }

    #[test]
    fn test_phone_run_stamps_original_stress() {
        let rule = Change::new()
            .to(This::every_phone(|_| true))
            .does(Transform::phones(|p, _| Rewrite::one(p.clone())));
        let out = Transducer::new(&word("be'ko.mu")).run_phones(&rule);
        let stresses: Vec<_> = out.syllables().iter().map(Syllable::is_stressed).collect();
        assert_eq!(stresses, [false, true, false]);
    }

    #[test]
    fn test_skip_flag_crosses_syllable_boundary() {
        // Fires on every k and skips the following phone. In uk.tu'ku
        // the first k's skip lands on the t across the boundary, so the
        // t is never tested and the second k still fires.
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let rule = Change::new()
            .to(This::every_phone(|p| p.is_symbol("k") || p.is_symbol("t")))
            .does(Transform::phones(move |p, _| {
                log.lock().unwrap().push(p.symbol().to_string());
                Rewrite::one(p.clone()).skip_next()
            }));
        let out = Transducer::new(&word("uk.tu'ku")).run_phones(&rule);
        assert_eq!(out, word("uk.tu'ku"));
        assert_eq!(*seen.lock().unwrap(), ["k", "k"]);
    }

    #[test]
    fn test_syllable_run_takes_transform_stress_as_is() {
        let rule = Change::new()
            .to(This::every_syllable(|_| true))
            .does(Transform::syllables(|s, engine| {
                Rewrite::one(s.clone().with_stress(engine.syllable_index() == 0))
            }));
        let out = Transducer::new(&word("be'ko.mu")).run_syllables(&rule);
        let stresses: Vec<_> = out.syllables().iter().map(Syllable::is_stressed).collect();
        assert_eq!(stresses, [true, false, false]);
    }

    #[test]
    fn test_syllable_run_can_delete_and_split() {
        // Delete stressed syllables, split everything else into
        // one-phone syllables.
        let rule = Change::new()
            .to(This::every_syllable(|_| true))
            .does(Transform::syllables(|s, _| {
                if s.is_stressed() {
                    Rewrite::delete()
                } else {
                    Rewrite::many(s.iter().map(|p| Syllable::new(vec![p.clone()])))
                }
            }));
        let out = Transducer::new(&word("be'ko.mu")).run_syllables(&rule);
        assert_eq!(out.to_string(), "b.e.m.u");
    }

    #[test]
    fn test_syllable_mode_leaves_phone_conditions_false() {
        let fired = Arc::new(Mutex::new(0));
        let count = Arc::clone(&fired);
        let rule = Change::new()
            .to(This::every_syllable(|_| true))
            .when(This::phone_at(0, |_| true))
            .does(Transform::syllables(move |s, _| {
                *count.lock().unwrap() += 1;
                Rewrite::one(s.clone())
            }));
        let out = Transducer::new(&word("be'ko.mu")).run_syllables(&rule);
        assert_eq!(out, word("be'ko.mu"));
        assert_eq!(*fired.lock().unwrap(), 0);
    }

    #[test]
    fn test_conditions_see_the_snapshot_not_the_rewrites() {
        // Voice a k when the previous phone is voiceless. With the
        // snapshot, the second k still sees the original voiceless k
        // before it even though that phone was just rewritten.
        let rule = Change::new()
            .to(This::every_phone(|p| p.is_symbol("k")))
            .when(This::phone_at(-1, |p| p.feature_is_false("voice")))
            .does(Transform::phones(|p, _| {
                Rewrite::one(p.with_feature("voice", FeatureValue::Plus))
            }));
        let out = Transducer::new(&word("'akka")).run_phones(&rule);
        // First k follows a (voiced vowel): kept. Second k follows the
        // original k: voiced.
        assert_eq!(out.to_string(), "'akga");
    }

    #[test]
    fn test_condition_short_circuit_order() {
        let probed = Arc::new(Mutex::new(0));
        let count = Arc::clone(&probed);
        let rule = Change::new()
            .to(This::every_phone(|p| p.is_symbol("s")))
            .when(Condition::new(|_| false))
            .when(Condition::new(move |_| {
                *count.lock().unwrap() += 1;
                true
            }))
            .does(Transform::phones(|p, _| Rewrite::one(p.clone())));
        Transducer::new(&word("a'sap")).run_phones(&rule);
        // The failing first condition stops evaluation.
        assert_eq!(*probed.lock().unwrap(), 0);
    }
}
