//! Widget lookups and field assignments.

use crate::describe::describe;
use crate::names::{class_literal, id_code, target_field, utils};
use crate::Synth;
use viewbind_ast::{Expr, Stmt};
use viewbind_core::{Id, TypeName};
use viewbind_model::{BindingGroup, CollectionBinding, FieldBinding, MemberBinding};

/// `Utils.find{Required|Optional}View[AsType](source, id[, "desc"][, Raw.class])`
fn find_view(id: &Id, ty: &TypeName, required: bool, description: Option<String>) -> Expr {
    let cast = ty.requires_view_cast();
    let mut name = String::from("find");
    name.push_str(if required { "RequiredView" } else { "OptionalView" });
    if cast {
        name.push_str("AsType");
    }
    let mut args = vec![Expr::name("source"), id_code(id)];
    if let Some(description) = description {
        args.push(Expr::str(description));
    }
    if cast {
        args.push(class_literal(ty));
    }
    Expr::static_call(utils(), name, args)
}

/// `source.findViewById(id)`, cast when `cast` is given.
fn find_view_by_id(id: &Id, cast: Option<&TypeName>) -> Expr {
    let lookup = Expr::call(Expr::name("source"), "findViewById", vec![id_code(id)]);
    match cast {
        Some(ty) => Expr::cast(ty.clone(), lookup),
        None => lookup,
    }
}

impl Synth<'_> {
    /// The statements binding one group's field, before its listeners.
    pub(crate) fn view_lookup(&self, group: &BindingGroup) -> Vec<Stmt> {
        if let Some(field) = group.field().filter(|_| group.is_single_field_binding()) {
            return vec![self.single_field_lookup(group.id(), field)];
        }

        let mut body = Vec::new();
        let required = group.required_bindings();
        if !group.is_bound_to_root() {
            let lookup = if !self.options.debuggable || required.is_empty() {
                find_view_by_id(group.id(), None)
            } else {
                Expr::static_call(
                    utils(),
                    "findRequiredView",
                    vec![Expr::name("source"), id_code(group.id()), Expr::str(describe(&required))],
                )
            };
            body.push(Stmt::assign(Expr::name("view"), lookup));
        }
        if let Some(field) = group.field() {
            body.push(self.field_from_local(group, field));
        }
        body
    }

    fn single_field_lookup(&self, id: &Id, field: &FieldBinding) -> Stmt {
        let cast = field.requires_cast();
        let value = if !self.options.debuggable || (!cast && !field.required) {
            find_view_by_id(id, cast.then_some(&field.ty))
        } else {
            let description = (field.required || cast).then(|| field.description());
            find_view(id, &field.ty, field.required, description)
        };
        Stmt::assign(target_field(&field.name), value)
    }

    fn field_from_local(&self, group: &BindingGroup, field: &FieldBinding) -> Stmt {
        let local = Expr::name(local_name(group));
        let value = if !field.requires_cast() {
            local
        } else if self.options.debuggable {
            Expr::static_call(
                utils(),
                "castView",
                vec![local, id_code(group.id()), Expr::str(field.description()), class_literal(&field.ty)],
            )
        } else {
            Expr::cast(field.ty.clone(), local)
        };
        Stmt::assign(target_field(&field.name), value)
    }

    /// `target.f = Utils.arrayFilteringNull(lookups...)`
    pub(crate) fn collection_lookup(&self, collection: &CollectionBinding) -> Stmt {
        let cast = collection.ty.requires_view_cast();
        let lookups = collection
            .ids
            .iter()
            .map(|id| {
                if !self.options.debuggable {
                    find_view_by_id(id, cast.then_some(&collection.ty))
                } else if !cast && !collection.required {
                    find_view_by_id(id, None)
                } else {
                    find_view(id, &collection.ty, collection.required, Some(collection.description()))
                }
            })
            .collect();
        Stmt::assign(
            target_field(&collection.name),
            Expr::static_call(utils(), collection.kind.factory(), lookups),
        )
    }
}

/// The expression holding a group's widget while it is bound.
pub(crate) fn local_name(group: &BindingGroup) -> &'static str {
    if group.is_bound_to_root() {
        "source"
    } else {
        "view"
    }
}

/// The field retaining a group's widget for unbinding.
pub(crate) fn retained_view_field(group: &BindingGroup) -> String {
    if group.is_bound_to_root() {
        "viewSource".to_string()
    } else {
        format!("view{}", group.id().hex())
    }
}
