//! viewbind_core: Core types shared by every stage of binder generation.
//!
//! Provides resource identifiers, Java type names, and the ordered
//! collections used wherever emission order must be deterministic.

pub mod collections;
pub mod id;
pub mod types;

// Re-export commonly used types
pub use collections::FxIndexMap;
pub use id::{Id, ResourceSymbol, NO_ID};
pub use types::{ClassName, Primitive, TypeName, VIEW_TYPE};
