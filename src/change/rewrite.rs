//! Transform products.

use smallvec::{smallvec, SmallVec};

/// What a transform stage produces for one traversal unit.
///
/// A rewrite replaces the unit with zero or more parts: one part for a
/// plain substitution, none for deletion, several for splitting. It may
/// additionally instruct the engine to emit the next unit untested
/// ([`Rewrite::skip_next`]), which keeps a rule that acted on a pair of
/// adjacent units from firing again on the second one.
///
/// # Example
///
/// ```rust,ignore
/// use lautwandel::change::Rewrite;
///
/// let keep = Rewrite::one(phone.clone());
/// let drop = Rewrite::delete();
/// let drop_pair_head = Rewrite::delete().skip_next();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<T> {
    parts: SmallVec<[T; 2]>,
    skip_next: bool,
}

impl<T> Rewrite<T> {
    /// Replace the unit with a single part.
    pub fn one(part: T) -> Self {
        Rewrite {
            parts: smallvec![part],
            skip_next: false,
        }
    }

    /// Delete the unit.
    pub fn delete() -> Self {
        Rewrite {
            parts: SmallVec::new(),
            skip_next: false,
        }
    }

    /// Replace the unit with a sequence of parts, in order.
    pub fn many(parts: impl IntoIterator<Item = T>) -> Self {
        Rewrite {
            parts: parts.into_iter().collect(),
            skip_next: false,
        }
    }

    /// Ask the engine to emit the next unit unchanged and untested.
    pub fn skip_next(mut self) -> Self {
        self.skip_next = true;
        self
    }

    /// The replacement parts, in order.
    pub fn parts(&self) -> &[T] {
        &self.parts
    }

    /// Check whether this rewrite deletes the unit.
    #[inline]
    pub fn is_deletion(&self) -> bool {
        self.parts.is_empty()
    }

    /// Check whether the next unit is to be passed through untested.
    #[inline]
    pub fn skips_next(&self) -> bool {
        self.skip_next
    }

    pub(crate) fn into_parts(self) -> SmallVec<[T; 2]> {
        self.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one() {
        let rewrite = Rewrite::one('a');
        assert_eq!(rewrite.parts(), ['a']);
        assert!(!rewrite.is_deletion());
        assert!(!rewrite.skips_next());
    }

    #[test]
    fn test_delete() {
        let rewrite = Rewrite::<char>::delete();
        assert!(rewrite.parts().is_empty());
        assert!(rewrite.is_deletion());
    }

    #[test]
    fn test_many_preserves_order() {
        let rewrite = Rewrite::many(['a', 'b', 'c']);
        assert_eq!(rewrite.parts(), ['a', 'b', 'c']);
    }

    #[test]
    fn test_skip_next_flag() {
        assert!(Rewrite::one('a').skip_next().skips_next());
        assert!(Rewrite::<char>::delete().skip_next().skips_next());
    }
}
