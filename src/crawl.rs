// SPDX-FileCopyrightText: The pathdoc authors
// SPDX-License-Identifier: MPL-2.0

use crate::{Segment, Value};

impl Value {
    /// Depth-first conditional traversal.
    ///
    /// The predicate decides at every node whether it is a terminal match:
    /// matched nodes are handed to the visitor together with the path that
    /// reached them and are not descended into. Unmatched branches are
    /// descended in insertion order, unmatched leaves are skipped silently.
    ///
    /// All effects happen through the visitor; nothing is returned.
    pub fn crawl<P, V>(&self, mut predicate: P, mut visitor: V)
    where
        P: FnMut(&Self, &[Segment]) -> bool,
        V: FnMut(&Self, &[Segment]),
    {
        let mut path = Vec::new();
        crawl_node(self, &mut path, &mut predicate, &mut visitor);
    }

    /// Depth-first conditional traversal with a mutating visitor.
    ///
    /// Same walk as [`Value::crawl()`]. The visitor receives exclusive
    /// access to each matched node and may rewrite it in place; freeze
    /// gating does not apply here, matched nodes are the caller's to edit.
    pub fn crawl_mut<P, V>(&mut self, mut predicate: P, mut visitor: V)
    where
        P: FnMut(&Self, &[Segment]) -> bool,
        V: FnMut(&mut Self, &[Segment]),
    {
        let mut path = Vec::new();
        crawl_node_mut(self, &mut path, &mut predicate, &mut visitor);
    }
}

fn crawl_node<P, V>(node: &Value, path: &mut Vec<Segment>, predicate: &mut P, visitor: &mut V)
where
    P: FnMut(&Value, &[Segment]) -> bool,
    V: FnMut(&Value, &[Segment]),
{
    if predicate(node, path) {
        visitor(node, path);
        return;
    }
    let Value::Branch(branch) = node else {
        return;
    };
    for (key, child) in branch.iter() {
        path.push(Segment::from(key));
        crawl_node(child, path, predicate, visitor);
        path.pop();
    }
}

fn crawl_node_mut<P, V>(node: &mut Value, path: &mut Vec<Segment>, predicate: &mut P, visitor: &mut V)
where
    P: FnMut(&Value, &[Segment]) -> bool,
    V: FnMut(&mut Value, &[Segment]),
{
    if predicate(node, path) {
        visitor(node, path);
        return;
    }
    let Value::Branch(branch) = node else {
        return;
    };
    for (key, child) in branch.entries_mut() {
        path.push(Segment::from(key.as_str()));
        crawl_node_mut(child, path, predicate, visitor);
        path.pop();
    }
}
