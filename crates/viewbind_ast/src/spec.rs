//! Declarations: files, types, members, and annotations.

use crate::node::{Expr, Stmt};
use viewbind_core::{ClassName, TypeName};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

/// An annotation with at most a single `value` member.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSpec {
    pub ty: ClassName,
    pub value: Option<Expr>,
}

impl AnnotationSpec {
    pub fn marker(ty: ClassName) -> Self {
        Self { ty, value: None }
    }

    pub fn with_value(ty: ClassName, value: Expr) -> Self {
        Self {
            ty,
            value: Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub ty: TypeName,
    pub name: String,
    pub modifiers: Vec<Modifier>,
}

impl FieldSpec {
    pub fn private(ty: TypeName, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            modifiers: vec![Modifier::Private],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub ty: TypeName,
    pub name: String,
    pub modifiers: Vec<Modifier>,
}

impl ParameterSpec {
    pub fn new(ty: TypeName, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn final_(ty: TypeName, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            modifiers: vec![Modifier::Final],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodKind {
    Constructor,
    Method(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    pub kind: MethodKind,
    pub javadoc: Option<String>,
    pub annotations: Vec<AnnotationSpec>,
    pub modifiers: Vec<Modifier>,
    pub returns: TypeName,
    pub parameters: Vec<ParameterSpec>,
    pub body: Vec<Stmt>,
}

impl MethodSpec {
    pub fn constructor() -> Self {
        Self {
            kind: MethodKind::Constructor,
            javadoc: None,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            returns: TypeName::Void,
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self {
            kind: MethodKind::Method(name.into()),
            ..Self::constructor()
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == MethodKind::Constructor
    }

    pub fn annotate(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn returns(mut self, ty: TypeName) -> Self {
        self.returns = ty;
        self
    }

    pub fn param(mut self, parameter: ParameterSpec) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn statement(mut self, stmt: Stmt) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn javadoc(mut self, text: impl Into<String>) -> Self {
        self.javadoc = Some(text.into());
        self
    }

    /// Whether any annotation on this method has the given simple name.
    pub fn has_annotation(&self, simple_name: &str) -> bool {
        self.annotations.iter().any(|a| a.ty.simple_name() == simple_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub superclass: Option<TypeName>,
    pub superinterfaces: Vec<TypeName>,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
}

impl TypeSpec {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            superclass: None,
            superinterfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn constructors(&self) -> impl Iterator<Item = &MethodSpec> {
        self.methods.iter().filter(|m| m.is_constructor())
    }

    pub fn method_named(&self, name: &str) -> Option<&MethodSpec> {
        self.methods
            .iter()
            .find(|m| matches!(&m.kind, MethodKind::Method(n) if n == name))
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A type definition placed in a package, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct JavaFile {
    pub package: String,
    pub file_comment: Option<String>,
    pub type_spec: TypeSpec,
}

impl JavaFile {
    /// The class this file declares.
    pub fn class_name(&self) -> ClassName {
        ClassName::new(self.package.clone(), self.type_spec.name.clone())
    }
}
