// SPDX-FileCopyrightText: The pathdoc authors
// SPDX-License-Identifier: MPL-2.0

//! Mutable, path-addressable document tree toolkit.
//!
//! Documents are heterogeneously-shaped key/value trees with scalar leaves
//! and insertion-ordered branches, owned entirely by the caller. The crate
//! provides conditional depth-first traversal, path-based addressing,
//! whole-document transforms and bulk map construction. Lookups are
//! absence-tolerant: missing paths resolve to `None` instead of failing.
//!
//! Trees must be acyclic; this is guaranteed by construction since every
//! node owns its children.

mod crawl;

mod map;
pub use self::map::{filter_keys, map_from_keys, map_from_pairs, map_values};

mod path;
pub use self::path::{Path, Segment};

mod transform;
pub use self::transform::DEFAULT_FREEZE_BUDGET;

mod tree;

mod value;
pub use self::value::{Branch, Kind, KindError, Value};
