//! Turns parsed descriptions into binding models.
//!
//! Problems in a description become diagnostics; the offending binding is
//! skipped and loading continues with the rest of the target. Targets are
//! built parents first so a subclass can inherit from a binder described
//! in the same batch.

use crate::description::{
    CollectionKindDescription, IdDescription, ListenerDescription, ParentDescription, TargetDescription,
};
use tracing::{debug, warn};
use viewbind_core::{ClassName, FxIndexMap, Id, ResourceSymbol, TypeName, NO_ID};
use viewbind_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};
use viewbind_model::{
    BindingModel, CollectionBinding, CollectionKind, FieldBinding, Listener, MethodBinding, Parameter, ParentBinding,
    ResourceBinding, ResourceKind, TargetKind,
};

/// One description file's targets.
#[derive(Debug, Clone)]
pub struct DescriptionSource {
    pub file_name: String,
    pub targets: Vec<TargetDescription>,
}

/// The result of loading a batch.
#[derive(Debug, Default)]
pub struct LoadResult {
    /// One model per distinct target, in input order.
    pub models: Vec<BindingModel>,
    pub diagnostics: DiagnosticCollection,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    Active,
    Done,
}

struct Entry<'a> {
    file_name: &'a str,
    description: &'a TargetDescription,
    target: ClassName,
}

/// Load every target in `sources`.
pub fn load_models(sources: &[DescriptionSource]) -> LoadResult {
    let mut loader = Loader::default();

    let mut entries: Vec<Entry<'_>> = Vec::new();
    let mut by_name: FxIndexMap<String, usize> = FxIndexMap::default();
    for source in sources {
        for description in &source.targets {
            let Some(target) = ClassName::parse(&description.target) else {
                loader.report(source.file_name.as_str(), &description.target, &messages::INVALID_TYPE_NAME_0, &[
                    description.target.as_str(),
                ]);
                continue;
            };
            let canonical = target.canonical_name();
            if by_name.contains_key(&canonical) {
                loader.report(source.file_name.as_str(), &canonical, &messages::DUPLICATE_TARGET_0, &[canonical.as_str()]);
                continue;
            }
            by_name.insert(canonical, entries.len());
            entries.push(Entry {
                file_name: &source.file_name,
                description,
                target,
            });
        }
    }

    let mut state = vec![Visit::Pending; entries.len()];
    let mut built: Vec<Option<BindingModel>> = vec![None; entries.len()];
    for index in 0..entries.len() {
        loader.visit(index, &entries, &by_name, &mut state, &mut built);
    }

    LoadResult {
        models: built.into_iter().flatten().collect(),
        diagnostics: loader.diagnostics,
    }
}

#[derive(Default)]
struct Loader {
    diagnostics: DiagnosticCollection,
}

impl Loader {
    fn report(&mut self, file_name: &str, target: &str, message: &DiagnosticMessage, args: &[&str]) {
        let diagnostic = Diagnostic::for_target(target, message, args).in_file(file_name);
        warn!(code = diagnostic.code, "{}", diagnostic);
        self.diagnostics.add(diagnostic);
    }

    /// Build `index` after its in-batch parent.
    fn visit(
        &mut self,
        index: usize,
        entries: &[Entry<'_>],
        by_name: &FxIndexMap<String, usize>,
        state: &mut [Visit],
        built: &mut [Option<BindingModel>],
    ) {
        if state[index] != Visit::Pending {
            return;
        }
        state[index] = Visit::Active;
        let entry = &entries[index];
        let target_name = entry.target.canonical_name();

        let parent = match &entry.description.parent {
            None => None,
            Some(ParentDescription::Binder { binder, needs_view }) => match ClassName::parse(binder) {
                Some(binding_class) => Some(ParentBinding {
                    binding_class,
                    needs_view: *needs_view,
                }),
                None => {
                    self.report(entry.file_name, &target_name, &messages::INVALID_TYPE_NAME_0, &[binder.as_str()]);
                    None
                }
            },
            Some(ParentDescription::Target { target }) => match ClassName::parse(target) {
                None => {
                    self.report(entry.file_name, &target_name, &messages::INVALID_TYPE_NAME_0, &[target.as_str()]);
                    None
                }
                Some(parent) => {
                    let parent_name = parent.canonical_name();
                    match by_name.get(&parent_name) {
                        None => {
                            self.report(entry.file_name, &target_name, &messages::PARENT_0_OF_1_NOT_FOUND, &[
                                parent_name.as_str(),
                                target_name.as_str(),
                            ]);
                            None
                        }
                        Some(&parent_index) => {
                            if state[parent_index] == Visit::Active {
                                self.report(entry.file_name, &target_name, &messages::INHERITANCE_CYCLE_THROUGH_0, &[
                                    target_name.as_str(),
                                ]);
                                None
                            } else {
                                self.visit(parent_index, entries, by_name, state, built);
                                built[parent_index].as_ref().map(BindingModel::as_parent)
                            }
                        }
                    }
                }
            },
        };

        built[index] = Some(self.build_model(entry, parent));
        state[index] = Visit::Done;
    }

    fn build_model(&mut self, entry: &Entry<'_>, parent: Option<ParentBinding>) -> BindingModel {
        let description = entry.description;
        let file_name = entry.file_name;
        let target_name = entry.target.canonical_name();

        let kind = match TargetKind::from_name(&description.kind) {
            Some(kind) => kind,
            None => {
                self.report(file_name, &target_name, &messages::UNKNOWN_TARGET_KIND_0, &[description.kind.as_str()]);
                TargetKind::Plain
            }
        };

        let mut builder = BindingModel::builder(entry.target.clone(), kind, description.is_final);
        if let Some(parent) = parent {
            builder.set_parent(parent);
        }

        for field in &description.fields {
            let Some(ty) = self.parse_type(file_name, &target_name, &field.ty) else {
                continue;
            };
            let id = self.resolve_id(file_name, &target_name, &field.id);
            if let Some(existing) = builder.find_existing_field_name(&id).map(str::to_string) {
                self.report(file_name, &target_name, &messages::FIELD_0_BINDS_ID_1_ALREADY_BOUND_TO_2, &[
                    field.name.as_str(),
                    id.to_string().as_str(),
                    existing.as_str(),
                ]);
                continue;
            }
            builder.add_field(id, FieldBinding::new(&field.name, ty, field.required));
        }

        for listener in &description.listeners {
            self.add_listener(file_name, &target_name, listener, &mut builder);
        }

        for collection in &description.collections {
            if collection.ids.is_empty() {
                self.report(file_name, &target_name, &messages::COLLECTION_0_HAS_NO_IDS, &[collection.name.as_str()]);
                continue;
            }
            let Some(ty) = self.parse_type(file_name, &target_name, &collection.ty) else {
                continue;
            };
            let ids = collection
                .ids
                .iter()
                .map(|id| self.resolve_id(file_name, &target_name, id))
                .collect();
            let kind = match collection.kind {
                CollectionKindDescription::Array => CollectionKind::Array,
                CollectionKindDescription::List => CollectionKind::List,
            };
            builder.add_collection(CollectionBinding::new(
                &collection.name,
                ty,
                kind,
                ids,
                collection.required,
            ));
        }

        for resource in &description.resources {
            let Some(kind) = ResourceKind::from_name(&resource.kind) else {
                self.report(file_name, &target_name, &messages::UNKNOWN_RESOURCE_KIND_0, &[resource.kind.as_str()]);
                continue;
            };
            let id = self.resolve_id(file_name, &target_name, &resource.id);
            let mut binding = ResourceBinding::new(&resource.name, id, kind);
            if let Some(tint) = &resource.tint {
                binding = binding.with_tint(self.resolve_id(file_name, &target_name, tint));
            }
            builder.add_resource(binding);
        }

        let model = builder.build();
        debug!(
            target_class = %model.target(),
            binder = %model.binding_class(),
            "loaded model"
        );
        model
    }

    fn add_listener(
        &mut self,
        file_name: &str,
        target_name: &str,
        description: &ListenerDescription,
        builder: &mut viewbind_model::BindingModelBuilder,
    ) {
        let Some(listener) = Listener::from_name(&description.listener) else {
            self.report(file_name, target_name, &messages::UNKNOWN_LISTENER_0, &[description.listener.as_str()]);
            return;
        };
        let callback = match &description.callback {
            None => listener.default_callback(),
            Some(name) => match listener.callback(name) {
                Some(callback) => callback,
                None => {
                    self.report(file_name, target_name, &messages::LISTENER_0_HAS_NO_CALLBACK_1, &[
                        description.listener.as_str(),
                        name.as_str(),
                    ]);
                    return;
                }
            },
        };

        let mut parameters = Vec::with_capacity(description.parameters.len());
        for parameter in &description.parameters {
            if parameter.position >= callback.parameters.len() {
                self.report(file_name, target_name, &messages::PARAMETER_POSITION_0_OUT_OF_RANGE_FOR_1, &[
                    parameter.position.to_string().as_str(),
                    callback.name,
                ]);
                return;
            }
            let Some(ty) = self.parse_type(file_name, target_name, &parameter.ty) else {
                return;
            };
            parameters.push(Parameter::new(parameter.position, ty));
        }

        let mut has_return_value = description.returns_value;
        if has_return_value && callback.returns_void() {
            self.report(file_name, target_name, &messages::RETURN_VALUE_OF_0_DISCARDED, &[description.method.as_str()]);
            has_return_value = false;
        }

        let ids: Vec<Id> = if description.ids.is_empty() {
            vec![NO_ID]
        } else {
            description
                .ids
                .iter()
                .map(|id| self.resolve_id(file_name, target_name, id))
                .collect()
        };
        for id in ids {
            let binding = MethodBinding::new(&description.method, parameters.clone(), description.required, has_return_value);
            if !builder.add_method_binding(id.clone(), listener, callback, binding) {
                self.report(
                    file_name,
                    target_name,
                    &messages::MULTIPLE_LISTENER_METHODS_WITH_RETURN_VALUE_FOR_ID_0,
                    &[id.to_string().as_str(), target_name, description.method.as_str()],
                );
            }
        }
    }

    fn parse_type(&mut self, file_name: &str, target_name: &str, name: &str) -> Option<TypeName> {
        let ty = TypeName::parse(name);
        if ty.is_none() {
            self.report(file_name, target_name, &messages::INVALID_TYPE_NAME_0, &[name]);
        }
        ty
    }

    /// An [`Id`], falling back to the raw value when the reference is malformed.
    fn resolve_id(&mut self, file_name: &str, target_name: &str, id: &IdDescription) -> Id {
        match id {
            IdDescription::Raw(value) => Id::new(*value),
            IdDescription::Qualified { value, reference: None } => Id::new(*value),
            IdDescription::Qualified {
                value,
                reference: Some(reference),
            } => match ResourceSymbol::parse(reference) {
                Some(symbol) => Id::qualified(*value, symbol),
                None => {
                    self.report(file_name, target_name, &messages::INVALID_RESOURCE_REFERENCE_0, &[reference.as_str()]);
                    Id::new(*value)
                }
            },
        }
    }
}
