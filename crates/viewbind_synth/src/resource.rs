//! Resource field assignments.

use crate::names::{context, id_code, resources, target_field, utils};
use crate::Synth;
use viewbind_ast::{Expr, Stmt};
use viewbind_core::{ClassName, TypeName};
use viewbind_model::ResourceBinding;

impl Synth<'_> {
    /// The `context` and `res` locals followed by one assignment per resource.
    pub(crate) fn resource_bindings(&self) -> Vec<Stmt> {
        let model = self.model;
        let mut body = Vec::new();
        if model.constructor_needs_view() {
            body.push(Stmt::local(
                context().into(),
                "context",
                Some(Expr::call(Expr::name("source"), "getContext", Vec::new())),
            ));
        }
        if model.requires_resources(self.options.sdk) {
            body.push(Stmt::local(
                TypeName::Class(resources()),
                "res",
                Some(Expr::call(Expr::name("context"), "getResources", Vec::new())),
            ));
        }
        for binding in model.resources() {
            body.push(self.resource_binding(binding));
        }
        body
    }

    fn resource_binding(&self, binding: &ResourceBinding) -> Stmt {
        let value = if let Some(tint) = binding.drawable_tint() {
            Expr::static_call(
                utils(),
                "getTintedDrawable",
                vec![Expr::name("context"), id_code(&binding.id), id_code(tint)],
            )
        } else {
            let method = binding.kind.method_for_sdk(self.options.sdk);
            let source = Expr::name(if method.requires_resources { "res" } else { "context" });
            match method.helper {
                Some(helper) => Expr::static_call(
                    ClassName::best_guess(helper),
                    method.name,
                    vec![source, id_code(&binding.id)],
                ),
                None => Expr::call(source, method.name, vec![id_code(&binding.id)]),
            }
        };
        Stmt::assign(target_field(&binding.name), value)
    }
}
