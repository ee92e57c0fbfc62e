//! Collection types used throughout the generator.
//!
//! Everything that feeds emission order goes through an insertion-ordered
//! map, so generated code never depends on hash iteration order.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// An insertion-ordered map hashed with FxHash.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
