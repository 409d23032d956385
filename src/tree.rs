// SPDX-FileCopyrightText: The pathdoc authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Branch, Path, Segment, Value};

impl Value {
    /// Resolve the value at the given path.
    ///
    /// Looks up each segment in turn, short-circuiting to `None` as soon as
    /// a step is missing or hits a leaf. Absence is a first-class outcome,
    /// never an error. The root path resolves to the document itself.
    #[must_use]
    pub fn get_path(&self, path: &Path) -> Option<&Self> {
        let mut node = self;
        for segment in path.segments() {
            node = node.as_branch()?.get(segment.as_str())?;
        }
        Some(node)
    }

    /// Resolve the value at the given path for mutation.
    ///
    /// Same lookup as [`Value::get_path()`], but frozen branches refuse to
    /// hand out their children.
    #[must_use]
    pub fn get_path_mut(&mut self, path: &Path) -> Option<&mut Self> {
        let mut node = self;
        for segment in path.segments() {
            let current = node;
            node = current.as_branch_mut()?.get_mut(segment.as_str())?;
        }
        Some(node)
    }

    /// Assign a value at the given path, creating missing branches.
    ///
    /// Walks all segments but the last; any step that is missing *or holds
    /// a non-branch value* is replaced with a fresh empty branch before
    /// descending. Stored leaves at intermediate positions are thus
    /// indistinguishable from absence, deliberately. The final segment is
    /// assigned last-write-wins.
    ///
    /// The root path is a no-op: a write target must be addressable by a
    /// final key. Frozen containers along the way silently swallow the
    /// write.
    pub fn set_path(&mut self, path: &Path, value: impl Into<Self>) {
        let Some((parent_segments, last_segment)) = path.split_last() else {
            return;
        };
        let mut node = self;
        if !node.is_branch() {
            log::debug!("Replacing non-branch root with an empty branch");
            *node = Self::Branch(Branch::new());
        }
        for segment in parent_segments {
            let current = node;
            let Self::Branch(branch) = current else {
                unreachable!("intermediate node is a branch");
            };
            let key = segment.as_str();
            if !matches!(branch.get(key), Some(Self::Branch(_))) {
                if branch.is_frozen() {
                    log::debug!("Ignoring write through frozen branch at segment {segment}");
                    return;
                }
                log::debug!("Creating intermediate branch at segment {segment}");
                branch
                    .entries_mut()
                    .insert(key.to_owned(), Self::Branch(Branch::new()));
            }
            node = branch
                .entries_mut()
                .get_mut(key)
                .expect("intermediate branch exists");
        }
        let Self::Branch(branch) = node else {
            unreachable!("write container is a branch");
        };
        if branch.is_frozen() {
            log::debug!("Ignoring write into frozen branch at segment {last_segment}");
            return;
        }
        branch
            .entries_mut()
            .insert(last_segment.as_str().to_owned(), value.into());
    }

    /// Remove the value at the given path, returning it.
    ///
    /// The container holding the final segment is resolved with the same
    /// short-circuiting semantics as [`Value::get_path()`]; if it is absent
    /// or not a branch, nothing happens. Branches left empty by the removal
    /// are kept, pruning them is a separate operation
    /// ([`Value::prune_empty()`]).
    ///
    /// The root path is a no-op.
    pub fn remove_path(&mut self, path: &Path) -> Option<Self> {
        let (parent_segments, last_segment) = path.split_last()?;
        let parent = self.descend_mut(parent_segments)?;
        let Self::Branch(branch) = parent else {
            return None;
        };
        let removed = branch.remove(last_segment.as_str());
        if removed.is_some() {
            log::debug!("Removed value at segment {last_segment}");
        }
        removed
    }

    /// Ungated descent for the mutating operations.
    ///
    /// Must be able to pass through frozen branches to reach thawed
    /// subtrees below them; the operations gate mutation at the affected
    /// container itself.
    pub(crate) fn descend_mut(&mut self, segments: &[Segment]) -> Option<&mut Self> {
        let mut node = self;
        for segment in segments {
            let current = node;
            let Self::Branch(branch) = current else {
                return None;
            };
            node = branch.entries_mut().get_mut(segment.as_str())?;
        }
        Some(node)
    }
}
