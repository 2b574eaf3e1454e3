//! The rule builder.

use smallvec::{smallvec, SmallVec};

use crate::phonology::{Phone, Syllable, Word};

use super::error::{ChangeError, Result};
use super::rewrite::Rewrite;
use super::selector::{Condition, Domain, Level};
use super::transducer::Transducer;
use super::transform::Transform;

/// A declarative sound change.
///
/// A rule is assembled from three kinds of stage: the iteration domain
/// ([`Change::to`]), the conditions gating it ([`Change::when`] /
/// [`Change::unless`]), and the transform pipeline ([`Change::does`]).
/// Every builder method takes `&self` and returns a new rule; the
/// receiver is never touched, so one base rule can seed any number of
/// specialized variants. Stage closures are shared behind [`Arc`]s,
/// which keeps the chaining cheap.
///
/// [`Change::apply`] walks the word once with a fresh single-use
/// [`Transducer`] and returns a new word. The input word is never
/// mutated.
///
/// # Example
///
/// ```rust,ignore
/// use lautwandel::prelude::*;
///
/// // Voiceless stops voice between vowels.
/// let voicing = Change::new()
///     .named("intervocalic stop voicing")
///     .to(This::every_phone(|p| p.feature_is_false("continuant")))
///     .when(This::phone_at(-1, Phone::is_vowel))
///     .when(This::phone_at(1, Phone::is_vowel))
///     .does(Transform::phones(|p, _| {
///         Rewrite::one(p.with_feature("voice", FeatureValue::Plus))
///     }));
///
/// let word = WordFactory::core().parse("a'ta")?;
/// assert_eq!(voicing.apply(&word)?.to_string(), "a'da");
/// ```
///
/// [`Arc`]: std::sync::Arc
#[derive(Debug, Clone, Default)]
pub struct Change {
    label: Option<String>,
    domains: Vec<Domain>,
    transforms: Vec<Transform>,
    conditions: Vec<Condition>,
}

impl Change {
    /// Create an empty rule. A rule needs at least one domain and one
    /// transform before it can be applied.
    pub fn new() -> Self {
        Change::default()
    }

    /// A copy of this rule carrying a human-readable label.
    pub fn named(&self, label: impl Into<String>) -> Self {
        let mut rule = self.clone();
        rule.label = Some(label.into());
        rule
    }

    /// The rule's label, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// A copy of this rule with `condition` appended. All conditions
    /// must hold at the cursor for the transform to fire; they are
    /// checked left to right and stop at the first failure.
    pub fn when(&self, condition: Condition) -> Self {
        let mut rule = self.clone();
        rule.conditions.push(condition);
        rule
    }

    /// A copy of this rule with the negation of `condition` appended.
    pub fn unless(&self, condition: Condition) -> Self {
        self.when(condition.negate())
    }

    /// A copy of this rule with `domain` appended. Repeated calls
    /// narrow: a unit must satisfy every domain predicate to be
    /// rewritten. All domains must sit at the same level.
    pub fn to(&self, domain: Domain) -> Self {
        let mut rule = self.clone();
        rule.domains.push(domain);
        rule
    }

    /// A copy of this rule with `transform` appended. Repeated calls
    /// compose in order: each stage rewrites every part the previous
    /// stage produced, seeded with the unit under the cursor, and skip
    /// requests from any stage combine.
    pub fn does(&self, transform: Transform) -> Self {
        let mut rule = self.clone();
        rule.transforms.push(transform);
        rule
    }

    /// The level this rule traverses at, taken from its first domain.
    /// `None` until a domain is set.
    pub fn level(&self) -> Option<Level> {
        self.domains.first().map(Domain::level)
    }

    /// Apply the rule to a word, producing a new word. The input is
    /// untouched; so is the rule, which may be reapplied freely.
    ///
    /// # Errors
    ///
    /// Returns [`ChangeError::MissingDomain`] or
    /// [`ChangeError::MissingTransform`] for an incomplete rule, and
    /// [`ChangeError::LevelMismatch`] when the rule mixes phone-level
    /// and syllable-level stages.
    pub fn apply(&self, word: &Word) -> Result<Word> {
        let level = self.validate()?;
        let engine = Transducer::new(word);
        Ok(match level {
            Level::Phone => engine.run_phones(self),
            Level::Syllable => engine.run_syllables(self),
        })
    }

    /// Check completeness and stage coherence before a pass.
    fn validate(&self) -> Result<Level> {
        let level = self.level().ok_or(ChangeError::MissingDomain)?;
        if self.transforms.is_empty() {
            return Err(ChangeError::MissingTransform);
        }
        let stages = self
            .domains
            .iter()
            .map(Domain::level)
            .chain(self.transforms.iter().map(Transform::level));
        for found in stages {
            if found != level {
                return Err(ChangeError::LevelMismatch {
                    expected: level,
                    found,
                });
            }
        }
        Ok(level)
    }

    /// This rule with `extra` conditions appended; group application
    /// gates every member through this.
    pub(crate) fn with_extra_conditions(&self, extra: &[Condition]) -> Change {
        let mut rule = self.clone();
        rule.conditions.extend(extra.iter().cloned());
        rule
    }

    pub(crate) fn admits_phone(&self, phone: &Phone) -> bool {
        self.domains.iter().all(|domain| domain.admits_phone(phone))
    }

    pub(crate) fn admits_syllable(&self, syllable: &Syllable) -> bool {
        self.domains
            .iter()
            .all(|domain| domain.admits_syllable(syllable))
    }

    pub(crate) fn conditions_hold(&self, engine: &Transducer) -> bool {
        self.conditions
            .iter()
            .all(|condition| condition.holds(engine))
    }

    /// Run the transform pipeline on the cursor phone.
    pub(crate) fn rewrite_phone(&self, phone: &Phone, engine: &Transducer) -> Rewrite<Phone> {
        let mut parts: SmallVec<[Phone; 2]> = smallvec![phone.clone()];
        let mut skip = false;
        for stage in &self.transforms {
            let mut produced: SmallVec<[Phone; 2]> = SmallVec::new();
            for part in &parts {
                let rewrite = stage.apply_phone(part, engine);
                skip |= rewrite.skips_next();
                produced.extend(rewrite.into_parts());
            }
            parts = produced;
        }
        let rewrite = Rewrite::many(parts);
        if skip {
            rewrite.skip_next()
        } else {
            rewrite
        }
    }

    /// Run the transform pipeline on the cursor syllable.
    pub(crate) fn rewrite_syllable(
        &self,
        syllable: &Syllable,
        engine: &Transducer,
    ) -> Rewrite<Syllable> {
        let mut parts: SmallVec<[Syllable; 2]> = smallvec![syllable.clone()];
        let mut skip = false;
        for stage in &self.transforms {
            let mut produced: SmallVec<[Syllable; 2]> = SmallVec::new();
            for part in &parts {
                let rewrite = stage.apply_syllable(part, engine);
                skip |= rewrite.skips_next();
                produced.extend(rewrite.into_parts());
            }
            parts = produced;
        }
        let rewrite = Rewrite::many(parts);
        if skip {
            rewrite.skip_next()
        } else {
            rewrite
        }
    }
}
