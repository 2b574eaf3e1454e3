//! # lautwandel
//!
//! Diachronic sound change applied to phonological words.
//!
//! Words are parsed from a compact transcription into syllables of
//! feature-bundle phones, and [`Change`] rules describe regular sound
//! shifts declaratively: the positions they target, the contexts that
//! gate them, and the rewrite they perform. Applying a rule walks the
//! word once and builds a new word, so a language's history can be
//! replayed by folding rule lists over its lexicon.
//!
//! ## Example
//!
//! ```rust
//! use lautwandel::prelude::*;
//!
//! // Voiceless obstruents voice between vowels.
//! let voicing = Change::new()
//!     .named("intervocalic voicing")
//!     .to(This::every_phone(|p| {
//!         p.feature_is_false("sonorant") && p.feature_is_false("voice")
//!     }))
//!     .when(This::phone_at(-1, Phone::is_vowel))
//!     .when(This::phone_at(1, Phone::is_vowel))
//!     .does(Transform::phones(|p, _| {
//!         Rewrite::one(p.with_feature("voice", FeatureValue::Plus))
//!     }));
//!
//! let word = WordFactory::core().parse("uk.tu'ku").unwrap();
//! assert_eq!(voicing.apply(&word).unwrap().to_string(), "uk.tu'gu");
//! ```
//!
//! [`Change`]: change::Change

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod change;
pub mod phonology;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::change::catalog;
    pub use crate::change::{
        Change, ChangeError, ChangeGroup, Condition, Domain, Level, Rewrite, This, Transducer,
        Transform,
    };
    pub use crate::phonology::{
        FeatureValue, Inventory, Phone, PhonologyError, Syllable, Word, WordFactory,
    };
}
