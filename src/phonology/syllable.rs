//! Syllables: phone sequences with a stress flag.

use std::fmt;

use super::phone::Phone;

/// An ordered sequence of phones plus a stress flag.
///
/// Syllables are immutable values; [`Syllable::with_stress`] is a
/// consuming builder, so restressing a borrowed syllable reads
/// `syllable.clone().with_stress(true)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Syllable {
    phones: Vec<Phone>,
    stressed: bool,
}

impl Syllable {
    /// Create an unstressed syllable from phones.
    pub fn new(phones: Vec<Phone>) -> Self {
        Syllable {
            phones,
            stressed: false,
        }
    }

    /// Set the stress flag.
    pub fn with_stress(mut self, stressed: bool) -> Self {
        self.stressed = stressed;
        self
    }

    /// Check the stress flag.
    #[inline]
    pub fn is_stressed(&self) -> bool {
        self.stressed
    }

    /// The phones, in order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Iterate over the phones.
    pub fn iter(&self) -> std::slice::Iter<'_, Phone> {
        self.phones.iter()
    }

    /// Number of phones.
    #[inline]
    pub fn len(&self) -> usize {
        self.phones.len()
    }

    /// Check whether the syllable has no phones. Transforms that delete
    /// every phone leave such a syllable behind.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for phone in &self.phones {
            write!(f, "{phone}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Syllable {
    type Item = &'a Phone;
    type IntoIter = std::slice::Iter<'a, Phone>;

    fn into_iter(self) -> Self::IntoIter {
        self.phones.iter()
    }
}
