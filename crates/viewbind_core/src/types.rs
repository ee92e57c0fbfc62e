//! Java type names.
//!
//! Type references appear in generated code as class names (with their
//! package, so the renderer can decide what to import), primitives, or
//! parameterized types. Listener descriptors and resource tables store types
//! as dotted strings; [`TypeName::best_guess`] turns those into structured
//! names.

use std::fmt;

/// The fully qualified name of the base widget type.
pub const VIEW_TYPE: &str = "android.view.View";

/// A fully qualified class name, possibly nested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    /// The package, empty for the default package.
    package: String,
    /// The top-level simple name followed by any nested names.
    simple_names: Vec<String>,
}

impl ClassName {
    /// Create a top-level class name.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_names: vec![simple_name.into()],
        }
    }

    /// Create a class name from a package and a non-empty chain of simple names.
    pub fn nested<I, S>(package: impl Into<String>, simple_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let simple_names: Vec<String> = simple_names.into_iter().map(Into::into).collect();
        debug_assert!(!simple_names.is_empty(), "a class name needs a simple name");
        Self {
            package: package.into(),
            simple_names,
        }
    }

    /// Guess a class name from a dotted string.
    ///
    /// Components before the first one starting with an uppercase letter are
    /// the package; the rest are nested simple names. A string with no
    /// uppercase component is split at its last dot.
    pub fn best_guess(name: &str) -> Self {
        let parts: Vec<&str> = name.split('.').filter(|p| !p.is_empty()).collect();
        let split = parts
            .iter()
            .position(|p| p.chars().next().is_some_and(char::is_uppercase))
            .unwrap_or_else(|| parts.len().saturating_sub(1));
        Self {
            package: parts[..split].join("."),
            simple_names: parts[split..].iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Like [`Self::best_guess`], but `None` when `name` has no simple name
    /// (empty, blank, or only dots).
    pub fn parse(name: &str) -> Option<Self> {
        let class = Self::best_guess(name.trim());
        (!class.simple_names.is_empty()).then_some(class)
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn simple_names(&self) -> &[String] {
        &self.simple_names
    }

    /// The innermost simple name.
    pub fn simple_name(&self) -> &str {
        self.simple_names.last().map(String::as_str).unwrap_or_default()
    }

    /// The outermost class that contains this one (itself if top-level).
    pub fn top_level(&self) -> ClassName {
        Self {
            package: self.package.clone(),
            simple_names: self.simple_names.iter().take(1).cloned().collect(),
        }
    }

    /// Create a class in the same package.
    pub fn peer_class(&self, name: impl Into<String>) -> ClassName {
        ClassName::new(self.package.clone(), name)
    }

    /// Simple names joined with `$`, as used for generated companion classes
    /// of nested types.
    pub fn reflection_simple_name(&self) -> String {
        self.simple_names.join("$")
    }

    /// Package and simple names joined with dots.
    pub fn canonical_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_names.join(".")
        } else {
            format!("{}.{}", self.package, self.simple_names.join("."))
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

/// Primitive Java types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl Primitive {
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Char => "char",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "boolean" => Primitive::Boolean,
            "byte" => Primitive::Byte,
            "short" => Primitive::Short,
            "int" => Primitive::Int,
            "long" => Primitive::Long,
            "char" => Primitive::Char,
            "float" => Primitive::Float,
            "double" => Primitive::Double,
            _ => return None,
        })
    }
}

/// Any type that can appear in a declaration or expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Void,
    Primitive(Primitive),
    Class(ClassName),
    Parameterized { raw: ClassName, args: Vec<TypeName> },
    /// The unbounded wildcard `?`.
    Wildcard,
    Array(Box<TypeName>),
}

impl TypeName {
    pub fn class(package: &str, simple_name: &str) -> Self {
        TypeName::Class(ClassName::new(package, simple_name))
    }

    /// Guess a type from a source-like string such as `int`, `java.lang.String[]`,
    /// or `android.widget.AdapterView<?>`.
    ///
    /// Type arguments are not parsed: each `<` opens one `?` argument, which is
    /// all listener descriptors need.
    pub fn best_guess(name: &str) -> Self {
        let name = name.trim();
        if let Some(component) = name.strip_suffix("[]") {
            return TypeName::Array(Box::new(TypeName::best_guess(component)));
        }
        if name == "void" {
            return TypeName::Void;
        }
        if let Some(primitive) = Primitive::from_keyword(name) {
            return TypeName::Primitive(primitive);
        }
        match name.find('<') {
            Some(left) => {
                let raw = ClassName::best_guess(&name[..left]);
                let count = name.matches('<').count();
                TypeName::Parameterized {
                    raw,
                    args: vec![TypeName::Wildcard; count],
                }
            }
            None => TypeName::Class(ClassName::best_guess(name)),
        }
    }

    /// Like [`Self::best_guess`], but `None` when a class in `name` has no
    /// simple name, as in `""`, `"[]"` or `"<?>"`.
    pub fn parse(name: &str) -> Option<Self> {
        let ty = Self::best_guess(name);
        ty.is_named().then_some(ty)
    }

    fn is_named(&self) -> bool {
        match self {
            TypeName::Class(class) | TypeName::Parameterized { raw: class, .. } => !class.simple_names.is_empty(),
            TypeName::Array(component) => component.is_named(),
            TypeName::Void | TypeName::Primitive(_) | TypeName::Wildcard => true,
        }
    }

    /// The class behind this type, with type arguments erased.
    pub fn raw_type(&self) -> Option<&ClassName> {
        match self {
            TypeName::Class(class) => Some(class),
            TypeName::Parameterized { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// This type with type arguments erased.
    pub fn erased(&self) -> TypeName {
        match self {
            TypeName::Parameterized { raw, .. } => TypeName::Class(raw.clone()),
            TypeName::Array(component) => TypeName::Array(Box::new(component.erased())),
            other => other.clone(),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeName::Void)
    }

    /// Whether a value of the base widget type must be cast to be assigned
    /// to this type.
    pub fn requires_view_cast(&self) -> bool {
        self.to_string() != VIEW_TYPE
    }
}

impl From<ClassName> for TypeName {
    fn from(class: ClassName) -> Self {
        TypeName::Class(class)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::Void => f.write_str("void"),
            TypeName::Primitive(p) => f.write_str(p.keyword()),
            TypeName::Class(class) => write!(f, "{}", class),
            TypeName::Parameterized { raw, args } => {
                write!(f, "{}<", raw)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeName::Wildcard => f.write_str("?"),
            TypeName::Array(component) => write!(f, "{}[]", component),
        }
    }
}
