// SPDX-FileCopyrightText: The pathdoc authors
// SPDX-License-Identifier: MPL-2.0

use indexmap::IndexMap;
use thiserror::Error;

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Kind {
    #[display(fmt = "null")]
    Null,
    #[display(fmt = "boolean")]
    Bool,
    #[display(fmt = "number")]
    Number,
    #[display(fmt = "string")]
    String,
    #[display(fmt = "branch")]
    Branch,
}

/// A scalar extraction found a value of the wrong kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} value, found {actual}")]
pub struct KindError {
    pub expected: Kind,
    pub actual: Kind,
}

/// A node in a document tree.
///
/// Either a scalar leaf or a [`Branch`] of named children. Documents are
/// exclusively owned by the caller; all mutating operations work in place.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Branch(Branch),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Branch(_) => Kind::Branch,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_branch(&self) -> Option<&Branch> {
        match self {
            Self::Branch(branch) => Some(branch),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_branch_mut(&mut self) -> Option<&mut Branch> {
        match self {
            Self::Branch(branch) => Some(branch),
            _ => None,
        }
    }

    /// Check whether this node refuses mutation.
    ///
    /// Scalar leaves have no mutable entries and always count as frozen,
    /// branches only after [`Value::deep_freeze()`] has reached them.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        match self {
            Self::Branch(branch) => branch.is_frozen(),
            _ => true,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Branch> for Value {
    fn from(branch: Branch) -> Self {
        Self::Branch(branch)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Branch(entries.into())
    }
}

impl TryFrom<&Value> for bool {
    type Error = KindError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or(KindError {
            expected: Kind::Bool,
            actual: value.kind(),
        })
    }
}

impl TryFrom<&Value> for f64 {
    type Error = KindError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or(KindError {
            expected: Kind::Number,
            actual: value.kind(),
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = KindError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_str().map(ToOwned::to_owned).ok_or(KindError {
            expected: Kind::String,
            actual: value.kind(),
        })
    }
}

/// An inner node: named children in insertion order.
///
/// Keys are unique. Enumeration yields entries in the order they were first
/// inserted. All mutating accessors are gated on the frozen flag and turn
/// into silent no-ops once the branch has been frozen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    entries: IndexMap<String, Value>,
    frozen: bool,
}

impl Branch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Mutable access to a child.
    ///
    /// Returns `None` for a frozen branch, which also shields the subtree
    /// below it from replacement through this accessor.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        if self.frozen {
            return None;
        }
        self.entries.get_mut(key)
    }

    /// Insert or replace a child, returning the replaced value.
    ///
    /// Ignored on a frozen branch.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        if self.frozen {
            log::debug!("Ignoring insertion into frozen branch");
            return None;
        }
        self.entries.insert(key.into(), value.into())
    }

    /// Remove a child by key, returning it.
    ///
    /// Ignored on a frozen branch. The insertion order of the remaining
    /// entries is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        if self.frozen {
            log::debug!("Ignoring removal from frozen branch");
            return None;
        }
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.values()
    }

    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub(crate) fn set_frozen(&mut self) {
        self.frozen = true;
    }

    /// Ungated access for the tree operations.
    ///
    /// Freeze gating happens in the operations themselves, which must be
    /// able to descend through frozen branches into thawed subtrees.
    pub(crate) fn entries_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.entries
    }
}

impl From<IndexMap<String, Value>> for Branch {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self {
            entries,
            frozen: false,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Branch
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<IndexMap<_, _>>()
            .into()
    }
}
