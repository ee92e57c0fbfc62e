//! viewbind_ast: The emitted type definition.
//!
//! Synthesis produces these nodes and the printer renders them. Nodes carry
//! structured type names rather than text so the printer can manage imports.

pub mod node;
pub mod spec;

pub use node::{BinaryOp, Expr, Stmt};
pub use spec::{AnnotationSpec, FieldSpec, JavaFile, MethodKind, MethodSpec, Modifier, ParameterSpec, TypeSpec};
