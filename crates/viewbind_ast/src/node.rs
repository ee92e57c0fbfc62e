//! Statement and expression nodes.

use crate::spec::MethodSpec;
use viewbind_core::{ClassName, TypeName};

/// Binary operators used by generated guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    NotEq,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A local, parameter, or keyword such as `this` and `super`.
    Name(String),
    Null,
    Int(i64),
    Str(String),
    /// Source text emitted verbatim, e.g. a default return literal.
    Raw(String),
    /// `receiver.name`
    Field { receiver: Box<Expr>, name: String },
    /// `Class.name`
    StaticField { class: ClassName, name: String },
    /// `receiver.name(args)`, or `name(args)` without a receiver.
    Call {
        receiver: Option<Box<Expr>>,
        name: String,
        args: Vec<Expr>,
    },
    /// `Class.name(args)`
    StaticCall {
        class: ClassName,
        name: String,
        args: Vec<Expr>,
    },
    /// `new Type(args)`
    New { ty: TypeName, args: Vec<Expr> },
    /// `(Type) expr`
    Cast { ty: TypeName, expr: Box<Expr> },
    /// `Type.class`
    ClassLiteral(TypeName),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `target = value`
    Assign { target: Box<Expr>, value: Box<Expr> },
    /// `new Supertype() { methods }`
    AnonymousClass {
        supertype: TypeName,
        methods: Vec<MethodSpec>,
    },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn str(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn field(receiver: Expr, name: impl Into<String>) -> Self {
        Expr::Field {
            receiver: Box::new(receiver),
            name: name.into(),
        }
    }

    pub fn call(receiver: Expr, name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: Some(Box::new(receiver)),
            name: name.into(),
            args,
        }
    }

    /// A call without a receiver, such as `this(...)` or `super(...)`.
    pub fn bare_call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: None,
            name: name.into(),
            args,
        }
    }

    pub fn static_call(class: ClassName, name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::StaticCall {
            class,
            name: name.into(),
            args,
        }
    }

    pub fn cast(ty: TypeName, expr: Expr) -> Self {
        Expr::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn eq(lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinaryOp::Eq,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn not_eq(lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op: BinaryOp::NotEq,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Expr),
    /// `Type name;` or `Type name = init;`
    LocalVar {
        ty: TypeName,
        name: String,
        init: Option<Expr>,
    },
    Return(Option<Expr>),
    Throw(Expr),
    /// `if (cond) { body }`
    If { cond: Expr, body: Vec<Stmt> },
    /// `if (cond) stmt` on a single line.
    IfInline { cond: Expr, then: Box<Stmt> },
    /// An empty separator line.
    Blank,
}

impl Stmt {
    pub fn expr(expr: Expr) -> Self {
        Stmt::Expr(expr)
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Stmt::Expr(Expr::assign(target, value))
    }

    pub fn local(ty: TypeName, name: impl Into<String>, init: Option<Expr>) -> Self {
        Stmt::LocalVar {
            ty,
            name: name.into(),
            init,
        }
    }
}
