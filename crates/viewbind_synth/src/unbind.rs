//! The `unbind` method and the fields it clears.

use crate::listener::{listener_field, listener_receiver};
use crate::lookup::retained_view_field;
use crate::names::{call_super, illegal_state_exception, override_, target_field, view};
use crate::Synth;
use viewbind_ast::{AnnotationSpec, Expr, FieldSpec, MethodSpec, Modifier, Stmt};
use viewbind_core::{ClassName, TypeName};
use viewbind_model::BindingGroup;

impl Synth<'_> {
    /// Fields retaining widgets and removable listeners, in group order.
    pub(crate) fn listener_fields(&self) -> Vec<FieldSpec> {
        let mut fields = Vec::new();
        for group in self.model.groups().iter().filter(|g| g.has_method_bindings()) {
            let view_field = retained_view_field(group);
            fields.push(FieldSpec::private(view().into(), view_field.as_str()));
            for &listener in group.listeners().keys() {
                if listener.descriptor().remover.is_some() {
                    fields.push(FieldSpec::private(
                        ClassName::best_guess(listener.descriptor().type_).into(),
                        listener_field(&view_field, listener),
                    ));
                }
            }
        }
        fields
    }

    pub(crate) fn unbind_method(&self) -> MethodSpec {
        let model = self.model;
        let mut method = MethodSpec::method("unbind")
            .annotate(AnnotationSpec::marker(override_()))
            .modifier(Modifier::Public);
        if !model.is_final() && model.parent().is_none() {
            method = method.annotate(AnnotationSpec::marker(call_super()));
        }

        if model.has_target_field() {
            let has_fields = model.has_field_bindings();
            if has_fields {
                method = method.statement(Stmt::local(
                    TypeName::Class(model.target().clone()),
                    "target",
                    Some(Expr::field(Expr::name("this"), "target")),
                ));
            }
            let (checked, cleared) = if has_fields {
                (Expr::name("target"), Expr::field(Expr::name("this"), "target"))
            } else {
                (Expr::field(Expr::name("this"), "target"), Expr::name("target"))
            };
            method = method
                .statement(Stmt::IfInline {
                    cond: Expr::eq(checked, Expr::Null),
                    then: Box::new(Stmt::Throw(Expr::New {
                        ty: illegal_state_exception().into(),
                        args: vec![Expr::str("Bindings already cleared.")],
                    })),
                })
                .statement(Stmt::assign(cleared, Expr::Null))
                .statement(Stmt::Blank);

            for field in model.groups().iter().filter_map(BindingGroup::field) {
                method = method.statement(Stmt::assign(target_field(&field.name), Expr::Null));
            }
            for collection in model.collections() {
                method = method.statement(Stmt::assign(target_field(&collection.name), Expr::Null));
            }
        }

        if model.has_method_bindings() {
            method = method.statement(Stmt::Blank);
            for group in model.groups() {
                for stmt in listener_teardown(group) {
                    method = method.statement(stmt);
                }
            }
        }

        if model.parent().is_some() {
            method = method
                .statement(Stmt::Blank)
                .statement(Stmt::expr(Expr::call(Expr::name("super"), "unbind", Vec::new())));
        }
        method
    }
}

/// Detach a group's listeners and drop the retained references.
fn listener_teardown(group: &BindingGroup) -> Vec<Stmt> {
    if !group.has_method_bindings() {
        return Vec::new();
    }
    let view_field = retained_view_field(group);
    let mut body = Vec::new();
    for &listener in group.listeners().keys() {
        let descriptor = listener.descriptor();
        let receiver = listener_receiver(Expr::name(view_field.as_str()), listener);
        match descriptor.remover {
            Some(remover) => {
                let field = listener_field(&view_field, listener);
                body.push(Stmt::expr(Expr::call(receiver, remover, vec![Expr::name(field.as_str())])));
                body.push(Stmt::assign(Expr::name(field), Expr::Null));
            }
            None => body.push(Stmt::expr(Expr::call(receiver, descriptor.setter, vec![Expr::Null]))),
        }
    }
    body.push(Stmt::assign(Expr::name(view_field.as_str()), Expr::Null));

    if group.required_bindings().is_empty() {
        vec![Stmt::If {
            cond: Expr::not_eq(Expr::name(view_field), Expr::Null),
            body,
        }]
    } else {
        body
    }
}
