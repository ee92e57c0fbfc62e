//! viewbind_synth: Binder class synthesis.
//!
//! Turns a frozen [`BindingModel`] into the type definition of its
//! `<Target>_Binder` class:
//! 1. Fields retaining the target, widgets, and removable listeners
//! 2. A convenience constructor chosen by the target kind
//! 3. The primary constructor performing lookups, listener attachment, and
//!    resource loading
//! 4. `unbind`, reversing all of it
//!
//! Synthesis is total: every model yields a type.

mod constructor;
pub mod describe;
mod listener;
mod lookup;
pub mod names;
mod resource;
mod unbind;

pub use describe::join_descriptions;

use tracing::debug;
use viewbind_ast::{FieldSpec, JavaFile, Modifier, TypeSpec};
use viewbind_core::TypeName;
use viewbind_model::BindingModel;
use viewbind_options::GenerationOptions;

/// One synthesis pass over one model.
pub(crate) struct Synth<'a> {
    pub(crate) model: &'a BindingModel,
    pub(crate) options: &'a GenerationOptions,
}

/// Produces binder classes under fixed generation options.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    options: GenerationOptions,
}

impl Synthesizer {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    /// Build the binder type for `model`.
    pub fn synthesize(&self, model: &BindingModel) -> TypeSpec {
        debug!(
            target_class = %model.target(),
            groups = model.groups().len(),
            collections = model.collections().len(),
            resources = model.resources().len(),
            "synthesizing binder"
        );
        let synth = Synth {
            model,
            options: &self.options,
        };
        synth.type_spec()
    }

    /// Build the binder type for `model` wrapped in its source file.
    pub fn brew_java(&self, model: &BindingModel) -> JavaFile {
        JavaFile {
            package: model.binding_class().package().to_string(),
            file_comment: Some(names::FILE_COMMENT.to_string()),
            type_spec: self.synthesize(model),
        }
    }
}

impl Synth<'_> {
    fn type_spec(&self) -> TypeSpec {
        let model = self.model;
        let mut ty = TypeSpec::class(model.binding_class().simple_name());
        ty.modifiers.push(Modifier::Public);
        if model.is_final() {
            ty.modifiers.push(Modifier::Final);
        }
        match model.parent() {
            Some(parent) => ty.superclass = Some(TypeName::Class(parent.binding_class.clone())),
            None => ty.superinterfaces.push(names::unbinder().into()),
        }

        if model.has_target_field() {
            ty.fields
                .push(FieldSpec::private(TypeName::Class(model.target().clone()), "target"));
        }
        ty.fields.extend(self.listener_fields());

        ty.methods.extend(self.convenience_constructor());
        if !model.constructor_needs_view() {
            ty.methods.push(self.view_delegate_constructor());
        }
        ty.methods.push(self.primary_constructor());
        if model.has_view_bindings() || model.parent().is_none() {
            ty.methods.push(self.unbind_method());
        }
        ty
    }
}
