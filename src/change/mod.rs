//! Sound change rules and their application engine.
//!
//! A [`Change`] is assembled from small, reusable pieces: [`This`]
//! builds positional [`Condition`]s and iteration [`Domain`]s,
//! [`Transform`] wraps the rewriting closures, and [`Rewrite`] carries
//! what a closure produced. [`ChangeGroup`] strings rules together in
//! order, and [`Transducer`] is the single-use engine a rule drives
//! across a word.
//!
//! Rules are persistent builders: every method takes `&self` and
//! returns a new rule, so a base rule can seed variants and survives
//! any number of applications. Applying a rule never mutates the input
//! word.
//!
//! # Examples
//!
//! ```rust
//! use lautwandel::prelude::*;
//!
//! // b lenites to v before a stressed syllable.
//! let lenition = Change::new()
//!     .named("pre-stress lenition")
//!     .to(This::every_phone(|p| p.is_symbol("b")))
//!     .when(This::syllable_at(1, Syllable::is_stressed))
//!     .does(Transform::phones(|p, _| {
//!         Rewrite::one(p.with_feature("continuant", FeatureValue::Plus))
//!     }));
//!
//! let word = WordFactory::core().parse("be'ko.mu").unwrap();
//! let shifted = lenition.apply(&word).unwrap();
//!
//! assert_eq!(shifted.to_string(), "ve'ko.mu");
//! // The input word is untouched.
//! assert_eq!(word.to_string(), "be'ko.mu");
//! ```
//!
//! # Application model
//!
//! A pass walks the word once, left to right, at the rule's level. At
//! each unit the engine checks the domain predicates against the unit
//! and the conditions against the traversal state, then runs the
//! transform pipeline if both agree. Conditions read the pre-change
//! word: rewrites land in a separate output and are never visible to
//! the conditions of later positions in the same pass. A rewrite may
//! also ask the engine to pass the following unit through untouched
//! ([`Rewrite::skip_next`]), which is how pairwise rules such as
//! degemination avoid re-matching their own context.
//!
//! Ready-made rules over the core inventory live in [`catalog`].

pub mod catalog;
pub mod error;

mod group;
mod rewrite;
mod rule;
mod selector;
mod transducer;
mod transform;

pub use error::{ChangeError, Result};
pub use group::ChangeGroup;
pub use rewrite::Rewrite;
pub use rule::Change;
pub use selector::{Condition, Domain, Level, PhonePredicate, SyllablePredicate, This};
pub use transducer::Transducer;
pub use transform::{PhoneTransform, SyllableTransform, Transform};
