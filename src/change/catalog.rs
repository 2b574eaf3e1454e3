//! Ready-made sound changes over the core inventory.
//!
//! Each function builds a fresh, fully assembled rule; the catalog
//! exists both as a usable starting point and as worked examples of the
//! builder vocabulary. All rules assume phones drawn from
//! [`Inventory::core`].
//!
//! # Rules
//!
//! - [`intervocalic_voicing()`] - voiceless obstruents voice between vowels
//! - [`final_devoicing()`] - voiced obstruents devoice word-finally
//! - [`apocope()`] - word-final vowels delete
//! - [`degemination()`] - identical consonant pairs simplify
//! - [`nasal_assimilation()`] - nasals take the place of a following consonant
//! - [`initial_stress_shift()`] - stress moves to the first syllable
//! - [`grimms_law()`] - the chain shift `p t k > f θ x`, `b d g > p t k`
//!
//! [`classic_changes()`] bundles the six single rules in a sensible
//! application order.
//!
//! [`Inventory::core`]: crate::phonology::Inventory::core

use crate::phonology::{FeatureValue, Phone};

use super::group::ChangeGroup;
use super::rewrite::Rewrite;
use super::rule::Change;
use super::selector::{Condition, This};
use super::transform::Transform;

// ============================================================================
// Phone-level rules
// ============================================================================

/// Voiceless obstruents voice between vowels: `t → d / V_V`.
///
/// Example: `a'ta` → `a'da`
pub fn intervocalic_voicing() -> Change {
    Change::new()
        .named("intervocalic voicing")
        .to(This::every_phone(|p| {
            p.feature_is_false("sonorant") && p.feature_is_false("voice")
        }))
        .when(This::phone_at(-1, Phone::is_vowel))
        .when(This::phone_at(1, Phone::is_vowel))
        .does(Transform::phones(|p, _| {
            Rewrite::one(p.with_feature("voice", FeatureValue::Plus))
        }))
}

/// Voiced obstruents devoice word-finally: `d → t / _#`.
///
/// Example: `bad` → `bat`
pub fn final_devoicing() -> Change {
    Change::new()
        .named("final devoicing")
        .to(This::every_phone(|p| {
            p.feature_is_false("sonorant") && p.feature_is_true("voice")
        }))
        .when(This::phone_at_index(-1))
        .does(Transform::phones(|p, _| {
            Rewrite::one(p.with_feature("voice", FeatureValue::Minus))
        }))
}

/// Word-final vowels delete: `V → ∅ / _#`.
///
/// Example: `'ma.re` → `'ma.r`
pub fn apocope() -> Change {
    Change::new()
        .named("apocope")
        .to(This::every_phone(Phone::is_vowel))
        .when(This::phone_at_index(-1))
        .does(Transform::phones(|_, _| Rewrite::delete()))
}

/// Identical consonant pairs simplify: `CᵢCᵢ → Cᵢ`.
///
/// The first of the pair deletes and asks the engine to pass the second
/// through untouched, so a triple simplifies pairwise to a pair rather
/// than collapsing outright.
///
/// Example: `'at.ta` → `'a.ta`
pub fn degemination() -> Change {
    Change::new()
        .named("degemination")
        .to(This::every_phone(Phone::is_consonant))
        .when(Condition::new(|engine| {
            match (engine.current_phone(), engine.phone_at(1)) {
                (Some(current), Some(next)) => current == next,
                _ => false,
            }
        }))
        .does(Transform::phones(|_, _| Rewrite::delete().skip_next()))
}

/// Nasals take the place features of a following consonant: `n → m / _p`.
///
/// Example: `an'pa` → `am'pa`
pub fn nasal_assimilation() -> Change {
    Change::new()
        .named("nasal place assimilation")
        .to(This::every_phone(|p| p.feature_is_true("nasal")))
        .when(This::phone_at(1, Phone::is_consonant))
        .does(Transform::phones(|phone, engine| {
            let Some(next) = engine.phone_at(1) else {
                return Rewrite::one(phone.clone());
            };
            let mut shifted = phone.clone();
            for place in ["labial", "coronal", "dorsal"] {
                shifted = shifted.with_feature(place, next.value(place));
            }
            Rewrite::one(shifted)
        }))
}

// ============================================================================
// Syllable-level rules
// ============================================================================

/// Stress moves to the first syllable, wherever it was before.
///
/// Example: `be'ko.mu` → `'be.ko.mu`
pub fn initial_stress_shift() -> Change {
    Change::new()
        .named("initial stress")
        .to(This::every_syllable(|_| true))
        .does(Transform::syllables(|syllable, engine| {
            Rewrite::one(syllable.clone().with_stress(engine.syllable_index() == 0))
        }))
}

// ============================================================================
// Rule groups
// ============================================================================

/// The first two stages of the Germanic consonant shift, as an ordered
/// group: voiceless stops spirantize, then voiced stops devoice.
///
/// The ordering carries the chain-shift semantics: a `p` produced by
/// the second stage is not fed back into the first, so `b` ends at `p`,
/// not `f`.
///
/// Example: `'pa.ter` → `'fa.θer`
pub fn grimms_law() -> ChangeGroup {
    let spirantization = Change::new()
        .named("voiceless stops spirantize")
        .to(This::every_phone(|p| {
            p.feature_is_false("sonorant")
                && p.feature_is_false("continuant")
                && p.feature_is_false("voice")
        }))
        .does(Transform::phones(|p, _| {
            Rewrite::one(p.with_feature("continuant", FeatureValue::Plus))
        }));
    let devoicing = Change::new()
        .named("voiced stops devoice")
        .to(This::every_phone(|p| {
            p.feature_is_false("sonorant")
                && p.feature_is_false("continuant")
                && p.feature_is_true("voice")
        }))
        .does(Transform::phones(|p, _| {
            Rewrite::one(p.with_feature("voice", FeatureValue::Minus))
        }));
    ChangeGroup::new([spirantization, devoicing]).named("Grimm's law")
}

// ============================================================================
// Rule sets
// ============================================================================

/// The six single rules, ordered so the segmental changes run before
/// the stress shift.
pub fn classic_changes() -> Vec<Change> {
    vec![
        intervocalic_voicing(),
        final_devoicing(),
        apocope(),
        degemination(),
        nasal_assimilation(),
        initial_stress_shift(),
    ]
}
