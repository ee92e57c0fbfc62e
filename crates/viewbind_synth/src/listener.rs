//! Anonymous listener implementations and their attachment.

use crate::lookup::{local_name, retained_view_field};
use crate::names::{override_, utils};
use crate::Synth;
use tracing::trace;
use viewbind_ast::{AnnotationSpec, Expr, MethodSpec, Modifier, ParameterSpec, Stmt};
use viewbind_core::{ClassName, TypeName, VIEW_TYPE};
use viewbind_model::{BindingGroup, CallbackBindings, Listener, ListenerMethod, MethodBinding};

/// The field holding a listener that must be removed by instance.
pub(crate) fn listener_field(view_field: &str, listener: Listener) -> String {
    let ty = ClassName::best_guess(listener.descriptor().type_);
    format!("{}{}", view_field, ty.simple_name())
}

/// `widget`, or `((TargetType) widget)` when the setter is not on the base type.
pub(crate) fn listener_receiver(widget: Expr, listener: Listener) -> Expr {
    let target_type = listener.descriptor().target_type;
    if target_type == VIEW_TYPE {
        widget
    } else {
        Expr::cast(TypeName::best_guess(target_type), widget)
    }
}

impl Synth<'_> {
    /// Attach every listener of a group, guarded when nothing in it is required.
    pub(crate) fn listener_bindings(&self, group: &BindingGroup) -> Vec<Stmt> {
        if !group.has_method_bindings() {
            return Vec::new();
        }
        let view_field = retained_view_field(group);
        let widget = local_name(group);

        let mut body = vec![Stmt::assign(Expr::name(view_field.as_str()), Expr::name(widget))];
        for (&listener, callbacks) in group.listeners() {
            trace!(id = %group.id(), listener = %listener, "listener binding");
            let implementation = self.listener_implementation(listener, callbacks);
            let receiver = listener_receiver(Expr::name(widget), listener);
            let setter = listener.descriptor().setter;
            if listener.descriptor().remover.is_some() {
                let field = listener_field(&view_field, listener);
                body.push(Stmt::assign(Expr::name(field.as_str()), implementation));
                body.push(Stmt::expr(Expr::call(receiver, setter, vec![Expr::name(field)])));
            } else {
                body.push(Stmt::expr(Expr::call(receiver, setter, vec![implementation])));
            }
        }

        if group.required_bindings().is_empty() && !group.is_bound_to_root() {
            vec![Stmt::If {
                cond: Expr::not_eq(Expr::name("view"), Expr::Null),
                body,
            }]
        } else {
            body
        }
    }

    /// `new ListenerType() { ... }` overriding every callback.
    fn listener_implementation(&self, listener: Listener, callbacks: &CallbackBindings) -> Expr {
        let methods = listener
            .callbacks()
            .iter()
            .map(|callback| {
                let bindings = callbacks.get(callback.name).map(Vec::as_slice).unwrap_or_default();
                self.callback_method(callback, bindings)
            })
            .collect();
        Expr::AnonymousClass {
            supertype: TypeName::best_guess(listener.descriptor().type_),
            methods,
        }
    }

    fn callback_method(&self, callback: &ListenerMethod, bindings: &[MethodBinding]) -> MethodSpec {
        let mut method = MethodSpec::method(callback.name)
            .annotate(AnnotationSpec::marker(override_()))
            .modifier(Modifier::Public)
            .returns(TypeName::best_guess(callback.return_type));
        for (i, ty) in callback.parameters.iter().enumerate() {
            method = method.param(ParameterSpec::new(TypeName::best_guess(ty), format!("p{}", i)));
        }

        let mut has_return_value = false;
        for binding in bindings {
            let call = Expr::call(Expr::name("target"), binding.name.as_str(), self.callback_arguments(callback, binding));
            if binding.has_return_value && !callback.returns_void() {
                has_return_value = true;
                method = method.statement(Stmt::Return(Some(call)));
            } else {
                method = method.statement(Stmt::expr(call));
            }
        }
        if !callback.returns_void() && !has_return_value {
            method = method.statement(Stmt::Return(Some(Expr::Raw(callback.default_return.to_string()))));
        }
        method
    }

    fn callback_arguments(&self, callback: &ListenerMethod, binding: &MethodBinding) -> Vec<Expr> {
        binding
            .parameters
            .iter()
            .enumerate()
            .map(|(i, parameter)| {
                let position = parameter.listener_position;
                let name = format!("p{}", position);
                let listener_type = callback.parameters.get(position).copied().unwrap_or(VIEW_TYPE);
                if !parameter.requires_cast(listener_type) {
                    Expr::name(name)
                } else if self.options.debuggable {
                    Expr::static_call(
                        utils(),
                        "castParam",
                        vec![
                            Expr::name(name),
                            Expr::str(callback.name),
                            Expr::Int(position as i64),
                            Expr::str(binding.name.as_str()),
                            Expr::Int(i as i64),
                            Expr::ClassLiteral(parameter.ty.erased()),
                        ],
                    )
                } else {
                    Expr::cast(parameter.ty.clone(), Expr::name(name))
                }
            })
            .collect()
    }
}
