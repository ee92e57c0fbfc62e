//! Types referenced by generated binders.

use viewbind_ast::Expr;
use viewbind_core::{ClassName, Id, TypeName};

pub const FILE_COMMENT: &str = "Generated code from viewbind. Do not modify!";

pub fn unbinder() -> ClassName {
    ClassName::new("viewbind", "Unbinder")
}

pub fn utils() -> ClassName {
    ClassName::new("viewbind.internal", "Utils")
}

pub fn view() -> ClassName {
    ClassName::new("android.view", "View")
}

pub fn context() -> ClassName {
    ClassName::new("android.content", "Context")
}

pub fn resources() -> ClassName {
    ClassName::new("android.content.res", "Resources")
}

pub fn ui_thread() -> ClassName {
    ClassName::new("androidx.annotation", "UiThread")
}

pub fn call_super() -> ClassName {
    ClassName::new("androidx.annotation", "CallSuper")
}

pub fn suppress_lint() -> ClassName {
    ClassName::new("android.annotation", "SuppressLint")
}

pub fn suppress_warnings() -> ClassName {
    ClassName::new("java.lang", "SuppressWarnings")
}

pub fn override_() -> ClassName {
    ClassName::new("java.lang", "Override")
}

pub fn deprecated() -> ClassName {
    ClassName::new("java.lang", "Deprecated")
}

pub fn illegal_state_exception() -> ClassName {
    ClassName::new("java.lang", "IllegalStateException")
}

/// How an id is written: its resource constant when known, else the number.
pub fn id_code(id: &Id) -> Expr {
    match &id.symbol {
        Some(symbol) => Expr::StaticField {
            class: symbol.class.clone(),
            name: symbol.name.clone(),
        },
        None => Expr::Int(i64::from(id.value)),
    }
}

/// `target.<name>`
pub fn target_field(name: &str) -> Expr {
    Expr::field(Expr::name("target"), name)
}

/// `Type.class` for the erasure of `ty`.
pub fn class_literal(ty: &TypeName) -> Expr {
    Expr::ClassLiteral(ty.erased())
}
