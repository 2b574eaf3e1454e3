//! Transform stages.
//!
//! A [`Transform`] is the `does` side of a rule: a closure that rewrites
//! the unit under the cursor into a [`Rewrite`]. Like
//! [`Domain`](super::selector::Domain), the traversal level is a variant
//! tag, so a rule can check stage coherence once, before any word is
//! walked.
//!
//! The closure receives the part it is rewriting plus the engine state,
//! so a transform can consult neighbors (`engine.phone_at(1)`) while
//! staying pure: skip requests travel back inside the returned
//! [`Rewrite`] instead of being poked into the engine.

use std::fmt;
use std::sync::Arc;

use crate::phonology::{Phone, Syllable};

use super::rewrite::Rewrite;
use super::selector::Level;
use super::transducer::Transducer;

/// Shared phone-level transform closure.
pub type PhoneTransform = Arc<dyn Fn(&Phone, &Transducer) -> Rewrite<Phone> + Send + Sync>;

/// Shared syllable-level transform closure.
pub type SyllableTransform = Arc<dyn Fn(&Syllable, &Transducer) -> Rewrite<Syllable> + Send + Sync>;

/// A rule's transform stage.
///
/// A rule may carry several stages; they compose in order, each stage
/// rewriting every part the previous one produced, seeded with the unit
/// under the cursor.
#[derive(Clone)]
pub enum Transform {
    /// Rewrite the phone under the cursor.
    Phones(PhoneTransform),
    /// Rewrite the syllable under the cursor.
    Syllables(SyllableTransform),
}

impl Transform {
    /// Phone-level stage from a closure.
    pub fn phones(
        transform: impl Fn(&Phone, &Transducer) -> Rewrite<Phone> + Send + Sync + 'static,
    ) -> Self {
        Transform::Phones(Arc::new(transform))
    }

    /// Syllable-level stage from a closure.
    pub fn syllables(
        transform: impl Fn(&Syllable, &Transducer) -> Rewrite<Syllable> + Send + Sync + 'static,
    ) -> Self {
        Transform::Syllables(Arc::new(transform))
    }

    /// The level this stage rewrites at.
    pub fn level(&self) -> Level {
        match self {
            Transform::Phones(_) => Level::Phone,
            Transform::Syllables(_) => Level::Syllable,
        }
    }

    // A stage at the wrong level leaves the part unchanged, mirroring
    // how a wrong-level domain admits nothing.

    #[inline]
    pub(crate) fn apply_phone(&self, phone: &Phone, engine: &Transducer) -> Rewrite<Phone> {
        match self {
            Transform::Phones(transform) => transform(phone, engine),
            Transform::Syllables(_) => Rewrite::one(phone.clone()),
        }
    }

    #[inline]
    pub(crate) fn apply_syllable(
        &self,
        syllable: &Syllable,
        engine: &Transducer,
    ) -> Rewrite<Syllable> {
        match self {
            Transform::Syllables(transform) => transform(syllable, engine),
            Transform::Phones(_) => Rewrite::one(syllable.clone()),
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Phones(_) => f.write_str("Transform::Phones(..)"),
            Transform::Syllables(_) => f.write_str("Transform::Syllables(..)"),
        }
    }
}
