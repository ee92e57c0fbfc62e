//! Import resolution.
//!
//! Every class referenced by a file is visited in source order. The first
//! class to use a simple name owns it and is written by that name; later
//! classes with the same simple name are written fully qualified.

use viewbind_ast::{Expr, JavaFile, MethodSpec, Stmt, TypeSpec};
use viewbind_core::{ClassName, FxIndexMap, TypeName};

#[derive(Debug, Default)]
pub struct ImportTable {
    package: String,
    /// Simple name of a top-level class to the class owning it.
    owners: FxIndexMap<String, ClassName>,
}

impl ImportTable {
    pub fn for_file(file: &JavaFile) -> Self {
        let mut table = Self {
            package: file.package.clone(),
            owners: FxIndexMap::default(),
        };
        table.claim(&file.class_name());
        table.visit_type_spec(&file.type_spec);
        table
    }

    /// How `class` is written in the body of the file.
    pub fn reference(&self, class: &ClassName) -> String {
        let top = class.top_level();
        if self.owners.get(top.simple_name()) == Some(&top) {
            class.simple_names().join(".")
        } else {
            class.canonical_name()
        }
    }

    /// Import lines' class names, sorted.
    pub fn imports(&self) -> Vec<String> {
        let mut imports: Vec<String> = self
            .owners
            .values()
            .filter(|c| !c.package().is_empty() && c.package() != "java.lang" && c.package() != self.package)
            .map(ClassName::canonical_name)
            .collect();
        imports.sort();
        imports
    }

    fn claim(&mut self, class: &ClassName) {
        let top = class.top_level();
        self.owners.entry(top.simple_name().to_string()).or_insert(top);
    }

    fn visit_type(&mut self, ty: &TypeName) {
        match ty {
            TypeName::Class(class) => self.claim(class),
            TypeName::Parameterized { raw, args } => {
                self.claim(raw);
                for arg in args {
                    self.visit_type(arg);
                }
            }
            TypeName::Array(component) => self.visit_type(component),
            TypeName::Void | TypeName::Primitive(_) | TypeName::Wildcard => {}
        }
    }

    fn visit_type_spec(&mut self, ty: &TypeSpec) {
        if let Some(superclass) = &ty.superclass {
            self.visit_type(superclass);
        }
        for interface in &ty.superinterfaces {
            self.visit_type(interface);
        }
        for field in &ty.fields {
            self.visit_type(&field.ty);
        }
        for method in &ty.methods {
            self.visit_method(method);
        }
    }

    fn visit_method(&mut self, method: &MethodSpec) {
        for annotation in &method.annotations {
            self.claim(&annotation.ty);
            if let Some(value) = &annotation.value {
                self.visit_expr(value);
            }
        }
        self.visit_type(&method.returns);
        for parameter in &method.parameters {
            self.visit_type(&parameter.ty);
        }
        for stmt in &method.body {
            self.visit_stmt(stmt);
        }
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expr(expr) | Stmt::Throw(expr) | Stmt::Return(Some(expr)) => self.visit_expr(expr),
            Stmt::LocalVar { ty, init, .. } => {
                self.visit_type(ty);
                if let Some(init) = init {
                    self.visit_expr(init);
                }
            }
            Stmt::If { cond, body } => {
                self.visit_expr(cond);
                for stmt in body {
                    self.visit_stmt(stmt);
                }
            }
            Stmt::IfInline { cond, then } => {
                self.visit_expr(cond);
                self.visit_stmt(then);
            }
            Stmt::Return(None) | Stmt::Blank => {}
        }
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Name(_) | Expr::Null | Expr::Int(_) | Expr::Str(_) | Expr::Raw(_) => {}
            Expr::Field { receiver, .. } => self.visit_expr(receiver),
            Expr::StaticField { class, .. } => self.claim(class),
            Expr::Call { receiver, args, .. } => {
                if let Some(receiver) = receiver {
                    self.visit_expr(receiver);
                }
                self.visit_exprs(args);
            }
            Expr::StaticCall { class, args, .. } => {
                self.claim(class);
                self.visit_exprs(args);
            }
            Expr::New { ty, args } => {
                self.visit_type(ty);
                self.visit_exprs(args);
            }
            Expr::Cast { ty, expr } => {
                self.visit_type(ty);
                self.visit_expr(expr);
            }
            Expr::ClassLiteral(ty) => self.visit_type(ty),
            Expr::Binary { lhs, rhs, .. } => {
                self.visit_expr(lhs);
                self.visit_expr(rhs);
            }
            Expr::Assign { target, value } => {
                self.visit_expr(target);
                self.visit_expr(value);
            }
            Expr::AnonymousClass { supertype, methods } => {
                self.visit_type(supertype);
                for method in methods {
                    self.visit_method(method);
                }
            }
        }
    }

    fn visit_exprs(&mut self, exprs: &[Expr]) {
        for expr in exprs {
            self.visit_expr(expr);
        }
    }
}
