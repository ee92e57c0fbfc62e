//! Binder constructors.

use crate::names::{context, deprecated, suppress_lint, suppress_warnings, ui_thread, view};
use crate::Synth;
use viewbind_ast::{AnnotationSpec, Expr, MethodSpec, Modifier, ParameterSpec, Stmt};
use viewbind_core::TypeName;
use viewbind_model::{Listener, TargetKind};

fn this_call(second: Expr) -> Stmt {
    Stmt::expr(Expr::bare_call("this", vec![Expr::name("target"), second]))
}

fn get_context(receiver: &str) -> Expr {
    Expr::call(Expr::name(receiver), "getContext", Vec::new())
}

/// `target.getWindow().getDecorView()`
fn decor_view() -> Expr {
    let window = Expr::call(Expr::name("target"), "getWindow", Vec::new());
    Expr::call(window, "getDecorView", Vec::new())
}

fn ui_constructor() -> MethodSpec {
    MethodSpec::constructor()
        .annotate(AnnotationSpec::marker(ui_thread()))
        .modifier(Modifier::Public)
}

impl Synth<'_> {
    fn target_type(&self) -> TypeName {
        TypeName::Class(self.model.target().clone())
    }

    /// `(target)` delegating to the primary constructor with a root found
    /// from the target itself.
    pub(crate) fn convenience_constructor(&self) -> Option<MethodSpec> {
        let needs_view = self.model.constructor_needs_view();
        let second = match self.model.kind() {
            TargetKind::Widget if needs_view => Expr::name("target"),
            TargetKind::Widget => get_context("target"),
            TargetKind::Screen if needs_view => decor_view(),
            TargetKind::Screen => Expr::name("target"),
            TargetKind::Dialog if needs_view => decor_view(),
            TargetKind::Dialog => get_context("target"),
            TargetKind::Plain => return None,
        };
        Some(
            ui_constructor()
                .param(ParameterSpec::new(self.target_type(), "target"))
                .statement(this_call(second)),
        )
    }

    /// `(target, View source)` kept for callers that always pass a widget.
    pub(crate) fn view_delegate_constructor(&self) -> MethodSpec {
        let target = self.model.target();
        let javadoc = format!(
            "@deprecated Use {{@link #{}({}, {})}} for direct creation.\n    Only present for runtime invocation through {{@code ViewBind.bind()}}.",
            self.model.binding_class().simple_name(),
            target.simple_names().join("."),
            context().simple_name(),
        );
        MethodSpec::constructor()
            .javadoc(javadoc)
            .annotate(AnnotationSpec::marker(deprecated()))
            .annotate(AnnotationSpec::marker(ui_thread()))
            .modifier(Modifier::Public)
            .param(ParameterSpec::new(self.target_type(), "target"))
            .param(ParameterSpec::new(view().into(), "source"))
            .statement(this_call(get_context("source")))
    }

    /// `(target, source)` or `(target, context)`, doing the binding work.
    pub(crate) fn primary_constructor(&self) -> MethodSpec {
        let model = self.model;
        let needs_view = model.constructor_needs_view();
        let mut method = ui_constructor();

        if model.has_unqualified_resource_bindings() {
            method = method.annotate(AnnotationSpec::with_value(suppress_warnings(), Expr::str("ResourceType")));
        }
        if model.has_listener(Listener::OnTouch) {
            method = method.annotate(AnnotationSpec::with_value(
                suppress_lint(),
                Expr::str("ClickableViewAccessibility"),
            ));
        }

        method = if model.has_method_bindings() {
            method.param(ParameterSpec::final_(self.target_type(), "target"))
        } else {
            method.param(ParameterSpec::new(self.target_type(), "target"))
        };
        method = if needs_view {
            method.param(ParameterSpec::new(view().into(), "source"))
        } else {
            method.param(ParameterSpec::new(context().into(), "context"))
        };

        if let Some(parent) = model.parent() {
            let second = if parent.needs_view {
                Expr::name("source")
            } else if needs_view {
                get_context("source")
            } else {
                Expr::name("context")
            };
            method = method
                .statement(Stmt::expr(Expr::bare_call("super", vec![Expr::name("target"), second])))
                .statement(Stmt::Blank);
        }

        if model.has_target_field() {
            method = method
                .statement(Stmt::assign(Expr::field(Expr::name("this"), "target"), Expr::name("target")))
                .statement(Stmt::Blank);
        }

        if model.has_view_bindings() {
            if model.requires_view_local() {
                method = method.statement(Stmt::local(view().into(), "view", None));
            }
            for group in model.groups() {
                for stmt in self.view_lookup(group).into_iter().chain(self.listener_bindings(group)) {
                    method = method.statement(stmt);
                }
            }
            for collection in model.collections() {
                method = method.statement(self.collection_lookup(collection));
            }
            if !model.resources().is_empty() {
                method = method.statement(Stmt::Blank);
            }
        }

        if !model.resources().is_empty() {
            for stmt in self.resource_bindings() {
                method = method.statement(stmt);
            }
        }
        method
    }
}
