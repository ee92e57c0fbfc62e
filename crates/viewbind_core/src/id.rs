//! Resource identifiers.

use crate::types::ClassName;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A symbolic reference to a resource constant, e.g. `com.example.R.id.title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSymbol {
    /// The class holding the constant (`com.example.R.id`).
    pub class: ClassName,
    /// The constant name (`title`).
    pub name: String,
}

impl ResourceSymbol {
    pub fn new(class: ClassName, name: impl Into<String>) -> Self {
        Self {
            class,
            name: name.into(),
        }
    }

    /// Parse `com.example.R.id.title` into its class and constant name.
    pub fn parse(reference: &str) -> Option<Self> {
        let (class, name) = reference.rsplit_once('.')?;
        if class.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(ClassName::best_guess(class), name))
    }
}

/// Identifies one widget slot or resource. Equality and hashing use the
/// numeric value only, so a symbolic and a raw reference to the same
/// resource land in the same binding group.
#[derive(Debug, Clone)]
pub struct Id {
    pub value: i32,
    pub symbol: Option<ResourceSymbol>,
}

/// The sentinel id of bindings made against the root itself.
pub const NO_ID: Id = Id {
    value: -1,
    symbol: None,
};

impl Id {
    /// A raw integer reference.
    pub fn new(value: i32) -> Self {
        Self { value, symbol: None }
    }

    /// A reference through a generated resource constant.
    pub fn qualified(value: i32, symbol: ResourceSymbol) -> Self {
        Self {
            value,
            symbol: Some(symbol),
        }
    }

    /// Whether this id is referenced through a resource constant.
    pub fn is_qualified(&self) -> bool {
        self.symbol.is_some()
    }

    pub fn is_root(&self) -> bool {
        self.value == NO_ID.value
    }

    /// Lowercase hex of the unsigned value, used to name retained fields.
    pub fn hex(&self) -> String {
        format!("{:x}", self.value as u32)
    }
}

impl PartialEq for Id {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Id {}

impl Hash for Id {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{}.{}", symbol.class, symbol.name),
            None => write!(f, "{}", self.value),
        }
    }
}
