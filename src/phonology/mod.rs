//! The phonological data model.
//!
//! Words are syllable sequences, syllables are phone sequences with a
//! stress flag, and phones are ordered ternary feature bundles built
//! against a shared [`Inventory`]. Everything here is an immutable
//! value: sound changes construct new words instead of editing old ones,
//! and phone edits like [`Phone::with_feature`] hand back fresh phones.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lautwandel::phonology::{FeatureValue, WordFactory};
//!
//! let factory = WordFactory::core();
//! let word = factory.parse("be'ko.mu")?;
//!
//! let b = factory.phone("b")?;
//! assert!(b.feature_is_true("voice"));
//! assert_eq!(b.with_feature("continuant", FeatureValue::Plus).symbol(), "v");
//! ```

pub mod error;
pub mod factory;
pub mod feature;
pub mod inventory;
pub mod phone;
pub mod syllable;
pub mod word;

pub use error::PhonologyError;
pub use factory::WordFactory;
pub use feature::FeatureValue;
pub use inventory::Inventory;
pub use phone::Phone;
pub use syllable::Syllable;
pub use word::Word;
