//! Ordered bundles of rules.

use crate::phonology::Word;

use super::error::Result;
use super::rule::Change;
use super::selector::Condition;

/// An ordered list of rules applied as one unit.
///
/// [`ChangeGroup::apply`] feeds the word through the members front to
/// back, each member seeing the output of the one before it. Rules at
/// different levels mix freely, since every member runs its own pass.
///
/// Conditions attached to the group gate every member: they are
/// appended to each member's own conditions at application time, so a
/// member fires only where its conditions and the group's all hold.
///
/// Like [`Change`], the group is a persistent builder; `named`, `when`
/// and `unless` return new groups and the group survives any number of
/// applications.
#[derive(Debug, Clone, Default)]
pub struct ChangeGroup {
    label: Option<String>,
    members: Vec<Change>,
    conditions: Vec<Condition>,
}

impl ChangeGroup {
    /// Create a group from an ordered list of rules. An empty group is
    /// valid and applies as the identity.
    pub fn new(members: impl IntoIterator<Item = Change>) -> Self {
        ChangeGroup {
            label: None,
            members: members.into_iter().collect(),
            conditions: Vec::new(),
        }
    }

    /// A copy of this group carrying a human-readable label.
    pub fn named(&self, label: impl Into<String>) -> Self {
        let mut group = self.clone();
        group.label = Some(label.into());
        group
    }

    /// The group's label, if one was set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// A copy of this group with `condition` appended to the gate
    /// shared by all members.
    pub fn when(&self, condition: Condition) -> Self {
        let mut group = self.clone();
        group.conditions.push(condition);
        group
    }

    /// A copy of this group with the negation of `condition` appended.
    pub fn unless(&self, condition: Condition) -> Self {
        self.when(condition.negate())
    }

    /// The member rules, in application order.
    pub fn members(&self) -> &[Change] {
        &self.members
    }

    /// Number of member rules.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Apply every member in order, producing a new word. The input is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Fails with the first member's error if any member is incomplete
    /// or mixes levels; members after it are not run.
    pub fn apply(&self, word: &Word) -> Result<Word> {
        let mut current = word.clone();
        for member in &self.members {
            current = member.with_extra_conditions(&self.conditions).apply(&current)?;
        }
        Ok(current)
    }
}
