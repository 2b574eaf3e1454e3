//! Phones: ordered feature bundles with a display symbol.

use std::fmt;
use std::sync::Arc;

use super::error::{PhonologyError, Result};
use super::feature::FeatureValue;
use super::inventory::Inventory;

/// An atomic sound segment.
///
/// A phone carries one [`FeatureValue`] per inventory feature, in the
/// inventory's canonical order, plus the display symbol it was built
/// from. Phones are immutable; feature edits return new phones. When an
/// edit produces a bundle that exactly matches an inventory row, the
/// phone takes that row's symbol, so `p` with `voice` set to `+` reads
/// back as `b`.
#[derive(Clone)]
pub struct Phone {
    symbol: String,
    values: Vec<FeatureValue>,
    inventory: Arc<Inventory>,
}

impl Phone {
    /// Build the phone for an inventory symbol.
    ///
    /// # Errors
    ///
    /// Returns [`PhonologyError::UnknownSymbol`] when the inventory has
    /// no row for `symbol`.
    pub fn from_symbol(inventory: &Arc<Inventory>, symbol: &str) -> Result<Phone> {
        let values = inventory
            .values_for(symbol)
            .ok_or_else(|| PhonologyError::UnknownSymbol(symbol.to_string()))?
            .to_vec();
        Ok(Phone {
            symbol: symbol.to_string(),
            values,
            inventory: Arc::clone(inventory),
        })
    }

    /// The display symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Check the display symbol.
    #[inline]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.symbol == symbol
    }

    /// The inventory this phone was built from.
    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    /// The feature values, in the inventory's canonical order.
    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    /// The value of a feature. Unknown features read as unset.
    pub fn value(&self, feature: &str) -> FeatureValue {
        self.inventory
            .feature_position(feature)
            .map_or(FeatureValue::Unset, |position| self.values[position])
    }

    /// Check whether a feature is `+`.
    #[inline]
    pub fn feature_is_true(&self, feature: &str) -> bool {
        self.value(feature).is_plus()
    }

    /// Check whether a feature is `-`.
    #[inline]
    pub fn feature_is_false(&self, feature: &str) -> bool {
        self.value(feature).is_minus()
    }

    /// Check whether this phone is a vowel (`+syllabic`).
    #[inline]
    pub fn is_vowel(&self) -> bool {
        self.feature_is_true("syllabic")
    }

    /// Check whether this phone is a true consonant (`+consonantal`).
    /// Glides are neither vowels nor true consonants.
    #[inline]
    pub fn is_consonant(&self) -> bool {
        self.feature_is_true("consonantal")
    }

    /// A copy of this phone with one feature changed. A feature name the
    /// inventory does not declare leaves the phone unchanged; use
    /// [`Phone::try_with_feature`] to surface the miss instead.
    pub fn with_feature(&self, feature: &str, value: FeatureValue) -> Phone {
        match self.inventory.feature_position(feature) {
            Some(position) => self.rewritten(position, value),
            None => self.clone(),
        }
    }

    /// Checked variant of [`Phone::with_feature`].
    ///
    /// # Errors
    ///
    /// Returns [`PhonologyError::UnknownFeature`] when the inventory does
    /// not declare `feature`.
    pub fn try_with_feature(&self, feature: &str, value: FeatureValue) -> Result<Phone> {
        let position = self
            .inventory
            .feature_position(feature)
            .ok_or_else(|| PhonologyError::UnknownFeature(feature.to_string()))?;
        Ok(self.rewritten(position, value))
    }

    fn rewritten(&self, position: usize, value: FeatureValue) -> Phone {
        let mut values = self.values.clone();
        values[position] = value;
        // Relabel only on an exact row match; otherwise the old symbol
        // stands for the now off-table bundle.
        let symbol = match self.inventory.symbol_for(&values) {
            Some(symbol) => symbol.to_string(),
            None => self.symbol.clone(),
        };
        Phone {
            symbol,
            values,
            inventory: Arc::clone(&self.inventory),
        }
    }
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.values == other.values
    }
}

impl Eq for Phone {}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl fmt::Debug for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone({:?}", self.symbol)?;
        for (feature, value) in self.inventory.features().iter().zip(&self.values) {
            if value.is_set() {
                write!(f, " [{}{}]", value.mark(), feature)?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core() -> Arc<Inventory> {
        Arc::new(Inventory::core())
    }

    #[test]
    fn test_from_symbol() {
        let inventory = core();
        let p = Phone::from_symbol(&inventory, "p").unwrap();
        assert_eq!(p.symbol(), "p");
        assert!(p.is_symbol("p"));
        assert!(!p.is_symbol("b"));
        assert_eq!(p.values().len(), 15);
    }

    #[test]
    fn test_from_unknown_symbol() {
        let inventory = core();
        assert_eq!(
            Phone::from_symbol(&inventory, "q"),
            Err(PhonologyError::UnknownSymbol("q".to_string()))
        );
    }

    #[test]
    fn test_feature_queries() {
        let inventory = core();
        let b = Phone::from_symbol(&inventory, "b").unwrap();
        assert!(b.feature_is_true("voice"));
        assert!(b.feature_is_false("continuant"));
        assert!(!b.feature_is_true("high"));
        assert!(!b.feature_is_false("high"));
        assert_eq!(b.value("high"), FeatureValue::Unset);
        assert_eq!(b.value("no-such-feature"), FeatureValue::Unset);
    }

    #[test]
    fn test_major_class_queries() {
        let inventory = core();
        let a = Phone::from_symbol(&inventory, "a").unwrap();
        let t = Phone::from_symbol(&inventory, "t").unwrap();
        let j = Phone::from_symbol(&inventory, "j").unwrap();
        assert!(a.is_vowel() && !a.is_consonant());
        assert!(t.is_consonant() && !t.is_vowel());
        assert!(!j.is_vowel() && !j.is_consonant());
    }

    #[test]
    fn test_with_feature_relabels_on_row_match() {
        let inventory = core();
        let p = Phone::from_symbol(&inventory, "p").unwrap();
        let voiced = p.with_feature("voice", FeatureValue::Plus);
        assert_eq!(voiced.symbol(), "b");
        assert_eq!(voiced, Phone::from_symbol(&inventory, "b").unwrap());
        // The source phone is untouched.
        assert_eq!(p.symbol(), "p");
    }

    #[test]
    fn test_with_feature_keeps_symbol_off_table() {
        let inventory = core();
        let a = Phone::from_symbol(&inventory, "a").unwrap();
        let nasalized = a.with_feature("nasal", FeatureValue::Plus);
        assert_eq!(nasalized.symbol(), "a");
        assert!(nasalized.feature_is_true("nasal"));
        assert_ne!(nasalized, a);
    }

    #[test]
    fn test_with_feature_unknown_is_noop() {
        let inventory = core();
        let a = Phone::from_symbol(&inventory, "a").unwrap();
        assert_eq!(a.with_feature("nasalized", FeatureValue::Plus), a);
        assert_eq!(
            a.try_with_feature("nasalized", FeatureValue::Plus),
            Err(PhonologyError::UnknownFeature("nasalized".to_string()))
        );
    }

    #[test]
    fn test_display_and_debug() {
        let inventory = core();
        let b = Phone::from_symbol(&inventory, "b").unwrap();
        assert_eq!(b.to_string(), "b");
        let debug = format!("{b:?}");
        assert!(debug.contains("\"b\""));
        assert!(debug.contains("[+voice]"));
        assert!(!debug.contains("high"));
    }
}
