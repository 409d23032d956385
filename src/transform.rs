// SPDX-FileCopyrightText: The pathdoc authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Branch, Value};

/// Default recursion budget for [`Value::deep_freeze()`].
pub const DEFAULT_FREEZE_BUDGET: usize = 5;

impl Value {
    /// Multiply every numeric leaf of the document by the given factor.
    ///
    /// Descends into every branch; non-numeric leaves are left untouched
    /// and numeric entries of frozen branches keep their value. Scaling by
    /// the multiplicative identity returns immediately without touching
    /// the document.
    #[allow(clippy::float_cmp)] // exact identity check is the documented fast path
    pub fn scale_numeric(&mut self, factor: f64) {
        if factor == 1.0 {
            return;
        }
        let Self::Branch(branch) = self else {
            return;
        };
        let frozen = branch.is_frozen();
        for child in branch.entries_mut().values_mut() {
            match child {
                Self::Number(number) if !frozen => *number *= factor,
                Self::Branch(_) => child.scale_numeric(factor),
                _ => {}
            }
        }
    }

    /// Remove every branch entry that holds an empty branch.
    ///
    /// Depth-first: children are pruned before their parent is inspected,
    /// so emptiness cascades upward in a single pass. Leaves are never
    /// removed, whatever their value. Frozen branches keep their entries
    /// but thawed subtrees below them still shrink.
    pub fn prune_empty(&mut self) {
        if let Self::Branch(branch) = self {
            prune_branch(branch);
        }
    }

    /// Collect every string leaf and every branch key, depth-first.
    ///
    /// Post-order concatenation: a branch contributes its children's
    /// strings first and its own key names after them. Non-string leaves
    /// contribute nothing.
    #[must_use]
    pub fn collect_leaf_strings(&self) -> Vec<String> {
        let mut collected = Vec::new();
        collect_strings(self, &mut collected);
        collected
    }

    /// Freeze the document down to a recursion budget.
    ///
    /// A frozen branch ignores insertions, removals and entry replacement.
    ///
    /// The budget is consumed per *visited value*, not per level: child `i`
    /// of a branch entered with budget `b` is frozen with budget `b - i`,
    /// so a wide branch exhausts the budget faster than a chain of single
    /// children at the same nominal depth. Callers that want a uniform
    /// depth limit should use [`Value::deep_freeze_levels()`] instead.
    /// A budget of zero freezes nothing.
    pub fn deep_freeze(&mut self, budget: usize) {
        if budget == 0 {
            return;
        }
        if let Self::Branch(branch) = self {
            branch.set_frozen();
            let mut budget = budget;
            for child in branch.entries_mut().values_mut() {
                child.deep_freeze(budget);
                budget = budget.saturating_sub(1);
            }
        }
    }

    /// Freeze the document down to a uniform nesting depth.
    ///
    /// The corrected per-level variant of [`Value::deep_freeze()`]: every
    /// child of a branch frozen at depth `d` is frozen at depth `d - 1`,
    /// regardless of how many siblings it has.
    pub fn deep_freeze_levels(&mut self, depth: usize) {
        if depth == 0 {
            return;
        }
        if let Self::Branch(branch) = self {
            branch.set_frozen();
            for child in branch.entries_mut().values_mut() {
                child.deep_freeze_levels(depth - 1);
            }
        }
    }
}

fn prune_branch(branch: &mut Branch) {
    if branch.is_frozen() {
        for child in branch.entries_mut().values_mut() {
            if let Value::Branch(child_branch) = child {
                prune_branch(child_branch);
            }
        }
        return;
    }
    branch.entries_mut().retain(|_, child| {
        let Value::Branch(child_branch) = child else {
            return true;
        };
        prune_branch(child_branch);
        !child_branch.is_empty()
    });
}

fn collect_strings(node: &Value, collected: &mut Vec<String>) {
    match node {
        Value::String(string) => collected.push(string.clone()),
        Value::Branch(branch) => {
            for child in branch.values() {
                collect_strings(child, collected);
            }
            collected.extend(branch.keys().map(ToOwned::to_owned));
        }
        _ => {}
    }
}
