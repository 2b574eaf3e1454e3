//! Ternary feature values.
//!
//! Distinctive features take one of three values: present (`+`), absent
//! (`-`), or unset (`0`). Unset is not a third polarity; it states that
//! the feature does not apply to the segment, so both polarity checks
//! report `false` for it.

use std::fmt;

/// Value of a single distinctive feature on a phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeatureValue {
    /// The feature is present (`+`).
    Plus,
    /// The feature is absent (`-`).
    Minus,
    /// The feature does not apply (`0`).
    #[default]
    Unset,
}

impl FeatureValue {
    /// Check whether this value is `+`.
    #[inline]
    pub fn is_plus(&self) -> bool {
        matches!(self, FeatureValue::Plus)
    }

    /// Check whether this value is `-`.
    #[inline]
    pub fn is_minus(&self) -> bool {
        matches!(self, FeatureValue::Minus)
    }

    /// Check whether this value carries a polarity at all.
    #[inline]
    pub fn is_set(&self) -> bool {
        !matches!(self, FeatureValue::Unset)
    }

    /// The mark for this value in inventory definitions.
    pub fn mark(&self) -> char {
        match self {
            FeatureValue::Plus => '+',
            FeatureValue::Minus => '-',
            FeatureValue::Unset => '0',
        }
    }

    /// Parse a definition mark (`+`, `-`, or `0`).
    pub fn from_mark(c: char) -> Option<Self> {
        match c {
            '+' => Some(FeatureValue::Plus),
            '-' => Some(FeatureValue::Minus),
            '0' => Some(FeatureValue::Unset),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_checks() {
        assert!(FeatureValue::Plus.is_plus());
        assert!(!FeatureValue::Plus.is_minus());
        assert!(FeatureValue::Minus.is_minus());
        assert!(!FeatureValue::Minus.is_plus());
        assert!(!FeatureValue::Unset.is_plus());
        assert!(!FeatureValue::Unset.is_minus());
    }

    #[test]
    fn test_unset_is_not_set() {
        assert!(FeatureValue::Plus.is_set());
        assert!(FeatureValue::Minus.is_set());
        assert!(!FeatureValue::Unset.is_set());
    }

    #[test]
    fn test_mark_round_trip() {
        for value in [FeatureValue::Plus, FeatureValue::Minus, FeatureValue::Unset] {
            assert_eq!(FeatureValue::from_mark(value.mark()), Some(value));
        }
        assert_eq!(FeatureValue::from_mark('?'), None);
        assert_eq!(FeatureValue::from_mark(' '), None);
    }

    #[test]
    fn test_default_is_unset() {
        assert_eq!(FeatureValue::default(), FeatureValue::Unset);
    }
}
