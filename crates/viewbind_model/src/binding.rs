//! Single binding requests.

use viewbind_core::{Id, TypeName};

/// A binding that appears in lookup failure messages.
pub trait MemberBinding {
    /// A short description such as `field 'title'`.
    fn description(&self) -> String;

    fn is_required(&self) -> bool;
}

/// Bind a widget to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub name: String,
    pub ty: TypeName,
    pub required: bool,
}

impl FieldBinding {
    pub fn new(name: impl Into<String>, ty: TypeName, required: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            required,
        }
    }

    /// The declared type with type arguments erased.
    pub fn raw_type(&self) -> TypeName {
        self.ty.erased()
    }

    pub fn requires_cast(&self) -> bool {
        self.ty.requires_view_cast()
    }
}

impl MemberBinding for FieldBinding {
    fn description(&self) -> String {
        format!("field '{}'", self.name)
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

/// One argument forwarded from a listener callback to a bound method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Index of the callback parameter passed in this slot.
    pub listener_position: usize,
    pub ty: TypeName,
}

impl Parameter {
    pub fn new(listener_position: usize, ty: TypeName) -> Self {
        Self { listener_position, ty }
    }

    /// Whether the callback parameter of type `listener_type` must be cast
    /// to be passed here.
    pub fn requires_cast(&self, listener_type: &str) -> bool {
        self.ty != TypeName::best_guess(listener_type)
    }
}

/// Bind a listener callback to a method on the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBinding {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub required: bool,
    pub has_return_value: bool,
}

impl MethodBinding {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, required: bool, has_return_value: bool) -> Self {
        Self {
            name: name.into(),
            parameters,
            required,
            has_return_value,
        }
    }
}

impl MemberBinding for MethodBinding {
    fn description(&self) -> String {
        format!("method '{}'", self.name)
    }

    fn is_required(&self) -> bool {
        self.required
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Array,
    List,
}

impl CollectionKind {
    /// The `Utils` factory that drops missing entries.
    pub fn factory(self) -> &'static str {
        match self {
            CollectionKind::Array => "arrayFilteringNull",
            CollectionKind::List => "listFilteringNull",
        }
    }
}

/// Bind several widgets to one array or list field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionBinding {
    pub name: String,
    /// The element type.
    pub ty: TypeName,
    pub kind: CollectionKind,
    pub ids: Vec<Id>,
    pub required: bool,
}

impl CollectionBinding {
    pub fn new(name: impl Into<String>, ty: TypeName, kind: CollectionKind, ids: Vec<Id>, required: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            kind,
            ids,
            required,
        }
    }

    pub fn raw_type(&self) -> TypeName {
        self.ty.erased()
    }
}

impl MemberBinding for CollectionBinding {
    fn description(&self) -> String {
        format!("field '{}'", self.name)
    }

    fn is_required(&self) -> bool {
        self.required
    }
}
