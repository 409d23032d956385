// SPDX-FileCopyrightText: The pathdoc authors
// SPDX-License-Identifier: MPL-2.0

use std::{convert::Infallible, fmt, str::FromStr};

/// One step of a [`Path`].
///
/// Always a string key. Integer indices convert to their decimal form,
/// addressing composites as branches with numeric-looking keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct Segment(String);

impl Segment {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self(index.to_string())
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Segment {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Segment {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An ordered sequence of segments addressing a location in a document.
///
/// The empty path denotes the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The empty path.
    pub const ROOT: Self = Self(Vec::new());

    #[must_use]
    pub const fn new() -> Self {
        Self::ROOT
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Segment] {
        &self.0
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.0.push(segment.into());
    }

    /// A new path with one more trailing segment.
    #[must_use]
    pub fn join(&self, segment: impl Into<Segment>) -> Self {
        let mut joined = self.clone();
        joined.push(segment);
        joined
    }

    /// Split off the final segment from the leading container segments.
    ///
    /// Returns `None` for the root path, which has no final segment and
    /// therefore addresses no writable or removable slot.
    #[must_use]
    pub fn split_last(&self) -> Option<(&[Segment], &Segment)> {
        self.0.split_last().map(|(last, parent)| (parent, last))
    }
}

impl<S, const N: usize> From<[S; N]> for Path
where
    S: Into<Segment>,
{
    fn from(segments: [S; N]) -> Self {
        segments.into_iter().collect()
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl<S> FromIterator<S> for Path
where
    S: Into<Segment>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = Infallible;

    /// Parse a `/`-separated path, skipping empty segments.
    ///
    /// `"/"` and `""` both parse as the root path.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Ok(path
            .split_terminator('/')
            .filter(|segment| !segment.is_empty())
            .collect())
    }
}
