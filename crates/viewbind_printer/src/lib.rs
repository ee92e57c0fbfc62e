//! viewbind_printer: Java source output.
//!
//! Converts a [`JavaFile`] into formatted Java text. Output is a pure
//! function of the input: the same file always prints the same text.

pub mod imports;

use imports::ImportTable;
use viewbind_ast::{AnnotationSpec, Expr, FieldSpec, JavaFile, MethodKind, MethodSpec, Modifier, Stmt, TypeSpec};
use viewbind_core::TypeName;

/// Options for the printer.
pub struct PrinterOptions {
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_str: "  ".to_string(),
            new_line: "\n".to_string(),
        }
    }
}

/// The printer converts a Java file to text.
pub struct Printer {
    output: String,
    indent_level: u32,
    options: PrinterOptions,
    imports: ImportTable,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(PrinterOptions::default())
    }

    pub fn with_options(options: PrinterOptions) -> Self {
        Self {
            output: String::with_capacity(4096),
            indent_level: 0,
            options,
            imports: ImportTable::default(),
        }
    }

    /// Print a Java file to a string.
    pub fn print_java_file(&mut self, file: &JavaFile) -> String {
        self.output.clear();
        self.indent_level = 0;
        self.imports = ImportTable::for_file(file);

        if let Some(comment) = &file.file_comment {
            for line in comment.lines() {
                self.write("// ");
                self.write(line);
                self.write_newline();
            }
        }
        if !file.package.is_empty() {
            self.write("package ");
            self.write(&file.package);
            self.write(";");
            self.write_newline();
            self.write_newline();
        }
        let imports = self.imports.imports();
        if !imports.is_empty() {
            for import in &imports {
                self.write("import ");
                self.write(import);
                self.write(";");
                self.write_newline();
            }
            self.write_newline();
        }
        self.print_type_spec(&file.type_spec);
        self.write_newline();
        std::mem::take(&mut self.output)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn print_type_spec(&mut self, ty: &TypeSpec) {
        self.print_modifiers(&ty.modifiers);
        self.write("class ");
        self.write(&ty.name);
        if let Some(superclass) = &ty.superclass {
            self.write(" extends ");
            self.print_type(superclass);
        }
        if !ty.superinterfaces.is_empty() {
            self.write(" implements ");
            for (i, interface) in ty.superinterfaces.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.print_type(interface);
            }
        }
        self.write(" {");
        self.increase_indent();
        let mut first = true;
        for field in &ty.fields {
            self.begin_member(&mut first);
            self.print_field(field);
        }
        for method in &ty.methods {
            self.begin_member(&mut first);
            self.print_method(method, &ty.name);
        }
        self.decrease_indent();
        self.write_newline();
        self.write_indent();
        self.write("}");
    }

    /// Start a member on a new line, separated from the previous one.
    fn begin_member(&mut self, first: &mut bool) {
        if !*first {
            self.write_newline();
        }
        *first = false;
        self.write_newline();
    }

    fn print_field(&mut self, field: &FieldSpec) {
        self.write_indent();
        self.print_modifiers(&field.modifiers);
        self.print_type(&field.ty);
        self.write(" ");
        self.write(&field.name);
        self.write(";");
    }

    fn print_method(&mut self, method: &MethodSpec, enclosing: &str) {
        if let Some(javadoc) = &method.javadoc {
            self.print_javadoc(javadoc);
        }
        for annotation in &method.annotations {
            self.write_indent();
            self.print_annotation(annotation);
            self.write_newline();
        }
        self.write_indent();
        self.print_modifiers(&method.modifiers);
        match &method.kind {
            MethodKind::Constructor => self.write(enclosing),
            MethodKind::Method(name) => {
                self.print_type(&method.returns);
                self.write(" ");
                self.write(name);
            }
        }
        self.write("(");
        for (i, parameter) in method.parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_modifiers(&parameter.modifiers);
            self.print_type(&parameter.ty);
            self.write(" ");
            self.write(&parameter.name);
        }
        self.write(") {");
        self.print_body(&method.body);
        self.write("}");
    }

    fn print_javadoc(&mut self, javadoc: &str) {
        self.write_indent();
        self.write("/**");
        self.write_newline();
        for line in javadoc.lines() {
            self.write_indent();
            if line.is_empty() {
                self.write(" *");
            } else {
                self.write(" * ");
                self.write(line);
            }
            self.write_newline();
        }
        self.write_indent();
        self.write(" */");
        self.write_newline();
    }

    fn print_annotation(&mut self, annotation: &AnnotationSpec) {
        self.write("@");
        let name = self.imports.reference(&annotation.ty);
        self.write(&name);
        if let Some(value) = &annotation.value {
            self.write("(");
            self.print_expr(value);
            self.write(")");
        }
    }

    fn print_modifiers(&mut self, modifiers: &[Modifier]) {
        for modifier in modifiers {
            self.write(modifier.keyword());
            self.write(" ");
        }
    }

    fn print_type(&mut self, ty: &TypeName) {
        match ty {
            TypeName::Void => self.write("void"),
            TypeName::Primitive(p) => self.write(p.keyword()),
            TypeName::Class(class) => {
                let name = self.imports.reference(class);
                self.write(&name);
            }
            TypeName::Parameterized { raw, args } => {
                let name = self.imports.reference(raw);
                self.write(&name);
                self.write("<");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }
                    self.print_type(arg);
                }
                self.write(">");
            }
            TypeName::Wildcard => self.write("?"),
            TypeName::Array(component) => {
                self.print_type(component);
                self.write("[]");
            }
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    /// Statements on their own lines, then the indent for a closing brace.
    fn print_body(&mut self, body: &[Stmt]) {
        self.increase_indent();
        for stmt in body {
            self.write_newline();
            if !matches!(stmt, Stmt::Blank) {
                self.write_indent();
                self.print_stmt(stmt);
            }
        }
        self.decrease_indent();
        self.write_newline();
        self.write_indent();
    }

    fn print_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) => {
                self.print_expr(expr);
                self.write(";");
            }
            Stmt::LocalVar { ty, name, init } => {
                self.print_type(ty);
                self.write(" ");
                self.write(name);
                if let Some(init) = init {
                    self.write(" = ");
                    self.print_expr(init);
                }
                self.write(";");
            }
            Stmt::Return(value) => {
                self.write("return");
                if let Some(value) = value {
                    self.write(" ");
                    self.print_expr(value);
                }
                self.write(";");
            }
            Stmt::Throw(expr) => {
                self.write("throw ");
                self.print_expr(expr);
                self.write(";");
            }
            Stmt::If { cond, body } => {
                self.write("if (");
                self.print_expr(cond);
                self.write(") {");
                self.print_body(body);
                self.write("}");
            }
            Stmt::IfInline { cond, then } => {
                self.write("if (");
                self.print_expr(cond);
                self.write(") ");
                self.print_stmt(then);
            }
            Stmt::Blank => {}
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Name(name) => self.write(name),
            Expr::Null => self.write("null"),
            Expr::Int(value) => self.write_owned(value.to_string()),
            Expr::Str(value) => self.write_owned(quote(value)),
            Expr::Raw(text) => self.write(text),
            Expr::Field { receiver, name } => {
                self.print_receiver(receiver);
                self.write(".");
                self.write(name);
            }
            Expr::StaticField { class, name } => {
                let class = self.imports.reference(class);
                self.write(&class);
                self.write(".");
                self.write(name);
            }
            Expr::Call { receiver, name, args } => {
                if let Some(receiver) = receiver {
                    self.print_receiver(receiver);
                    self.write(".");
                }
                self.write(name);
                self.print_args(args);
            }
            Expr::StaticCall { class, name, args } => {
                let class = self.imports.reference(class);
                self.write(&class);
                self.write(".");
                self.write(name);
                self.print_args(args);
            }
            Expr::New { ty, args } => {
                self.write("new ");
                self.print_type(ty);
                self.print_args(args);
            }
            Expr::Cast { ty, expr } => {
                self.write("(");
                self.print_type(ty);
                self.write(") ");
                self.print_expr(expr);
            }
            Expr::ClassLiteral(ty) => {
                self.print_type(ty);
                self.write(".class");
            }
            Expr::Binary { op, lhs, rhs } => {
                self.print_expr(lhs);
                self.write(" ");
                self.write(op.as_str());
                self.write(" ");
                self.print_expr(rhs);
            }
            Expr::Assign { target, value } => {
                self.print_expr(target);
                self.write(" = ");
                self.print_expr(value);
            }
            Expr::AnonymousClass { supertype, methods } => {
                self.write("new ");
                self.print_type(supertype);
                self.write("() {");
                self.increase_indent();
                let name = supertype.raw_type().map(|c| c.simple_name().to_string()).unwrap_or_default();
                let mut first = true;
                for method in methods {
                    self.begin_member(&mut first);
                    self.print_method(method, &name);
                }
                self.decrease_indent();
                self.write_newline();
                self.write_indent();
                self.write("}");
            }
        }
    }

    /// A receiver, parenthesized when it would otherwise bind too loosely.
    fn print_receiver(&mut self, receiver: &Expr) {
        if matches!(receiver, Expr::Cast { .. } | Expr::Binary { .. } | Expr::Assign { .. }) {
            self.write("(");
            self.print_expr(receiver);
            self.write(")");
        } else {
            self.print_expr(receiver);
        }
    }

    fn print_args(&mut self, args: &[Expr]) {
        self.write("(");
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_expr(arg);
        }
        self.write(")");
    }

    // ========================================================================
    // Core write helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_owned(&mut self, s: String) {
        self.output.push_str(&s);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a Java file with default options.
pub fn print_java_file(file: &JavaFile) -> String {
    Printer::new().print_java_file(file)
}

/// A Java string literal.
fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
