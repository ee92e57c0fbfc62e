//! viewbind_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! Diagnostics are raised while binding descriptions are turned into models,
//! never by synthesis itself. Each carries the target class it concerns,
//! a numeric code, and a message resolved from the table in [`messages`].

use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code (e.g., 2001).
    pub code: u32,
    /// The category of this diagnostic.
    pub category: DiagnosticCategory,
    /// The message template string. May contain `{0}`, `{1}`, etc. placeholders.
    pub message: &'static str,
}

/// A realized diagnostic with its resolved message text.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The description file the diagnostic came from, if any.
    pub file: Option<String>,
    /// The target class the diagnostic concerns, if any.
    pub target: Option<String>,
    /// The resolved message text.
    pub message_text: String,
    /// The diagnostic code.
    pub code: u32,
    /// The category.
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// Create a new diagnostic without location info.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            target: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    /// Create a new diagnostic attached to a target class.
    pub fn for_target(target: impl Into<String>, message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            target: Some(target.into()),
            ..Self::new(message, args)
        }
    }

    /// Attach the originating description file.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether this is an error diagnostic.
    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref file) = self.file {
            write!(f, "{}", file)?;
            if let Some(ref target) = self.target {
                write!(f, "({})", target)?;
            }
            write!(f, ": ")?;
        } else if let Some(ref target) = self.target {
            write!(f, "{}: ", target)?;
        }
        write!(f, "{} VB{}: {}", self.category, self.code, self.message_text)
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated while loading descriptions.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Sort diagnostics by file, keeping the report order within a file.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| a.file.cmp(&b.file));
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Description errors (1000-1099)
    // ========================================================================
    pub const UNKNOWN_LISTENER_0: DiagnosticMessage = diag!(1001, Error, "Unknown listener '{0}'.");
    pub const LISTENER_0_HAS_NO_CALLBACK_1: DiagnosticMessage = diag!(1002, Error, "Listener '{0}' has no callback named '{1}'.");
    pub const UNKNOWN_RESOURCE_KIND_0: DiagnosticMessage = diag!(1003, Error, "Unknown resource kind '{0}'.");
    pub const INVALID_RESOURCE_REFERENCE_0: DiagnosticMessage = diag!(1004, Error, "Invalid resource reference '{0}'.");
    pub const UNKNOWN_TARGET_KIND_0: DiagnosticMessage = diag!(1005, Error, "Unknown target kind '{0}'.");
    pub const PARAMETER_POSITION_0_OUT_OF_RANGE_FOR_1: DiagnosticMessage = diag!(1006, Error, "Parameter position {0} is out of range for callback '{1}'.");
    pub const COLLECTION_0_HAS_NO_IDS: DiagnosticMessage = diag!(1007, Error, "Collection field '{0}' must bind at least one ID.");
    pub const DUPLICATE_TARGET_0: DiagnosticMessage = diag!(1008, Error, "Target '{0}' is described more than once.");
    pub const INVALID_TYPE_NAME_0: DiagnosticMessage = diag!(1009, Error, "'{0}' is not a valid class or type name.");

    // ========================================================================
    // Binding conflicts (2000-2099)
    // ========================================================================
    pub const MULTIPLE_LISTENER_METHODS_WITH_RETURN_VALUE_FOR_ID_0: DiagnosticMessage = diag!(2001, Error, "Multiple listener methods with return value specified for ID {0}. ({1}.{2})");
    pub const FIELD_0_BINDS_ID_1_ALREADY_BOUND_TO_2: DiagnosticMessage = diag!(2002, Error, "Attempt to bind field '{0}' to ID {1} which is already bound to field '{2}'.");
    pub const RETURN_VALUE_OF_0_DISCARDED: DiagnosticMessage = diag!(2003, Warning, "Method '{0}' returns a value but its callback returns void; the value is discarded.");

    // ========================================================================
    // Inheritance (2100-2199)
    // ========================================================================
    pub const PARENT_0_OF_1_NOT_FOUND: DiagnosticMessage = diag!(2101, Error, "Parent '{0}' of '{1}' is not described in this batch.");
    pub const INHERITANCE_CYCLE_THROUGH_0: DiagnosticMessage = diag!(2102, Error, "Inheritance cycle through '{0}'.");
}
