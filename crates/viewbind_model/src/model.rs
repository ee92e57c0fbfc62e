//! The frozen binding model of one target class and its builder.

use crate::binding::{CollectionBinding, FieldBinding, MethodBinding};
use crate::group::BindingGroup;
use crate::listener::{Listener, ListenerMethod};
use crate::resource::ResourceBinding;
use tracing::trace;
use viewbind_core::{ClassName, FxIndexMap, Id};

/// What the target class is, which decides how the convenience constructor
/// finds a widget root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// The target is itself a widget.
    Widget,
    /// A full-screen host with a window.
    Screen,
    /// A dialog with a window.
    Dialog,
    /// Anything else; only the explicit constructor is generated.
    Plain,
}

impl TargetKind {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "widget" => TargetKind::Widget,
            "screen" => TargetKind::Screen,
            "dialog" => TargetKind::Dialog,
            "plain" => TargetKind::Plain,
            _ => return None,
        })
    }
}

/// The binder generated for a superclass of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentBinding {
    pub binding_class: ClassName,
    /// Whether the parent's primary constructor takes a widget root.
    pub needs_view: bool,
}

/// The binder name for a target: `<package>.<Outer$Inner>_Binder`.
pub fn binding_class_name(target: &ClassName) -> ClassName {
    target
        .top_level()
        .peer_class(format!("{}_Binder", target.reflection_simple_name()))
}

/// Everything to generate for one target class.
#[derive(Debug, Clone)]
pub struct BindingModel {
    target: ClassName,
    binding_class: ClassName,
    kind: TargetKind,
    is_final: bool,
    groups: Vec<BindingGroup>,
    collections: Vec<CollectionBinding>,
    resources: Vec<ResourceBinding>,
    parent: Option<ParentBinding>,
}

impl BindingModel {
    pub fn builder(target: ClassName, kind: TargetKind, is_final: bool) -> BindingModelBuilder {
        BindingModelBuilder::new(target, kind, is_final)
    }

    pub fn target(&self) -> &ClassName {
        &self.target
    }

    pub fn binding_class(&self) -> &ClassName {
        &self.binding_class
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn groups(&self) -> &[BindingGroup] {
        &self.groups
    }

    pub fn collections(&self) -> &[CollectionBinding] {
        &self.collections
    }

    pub fn resources(&self) -> &[ResourceBinding] {
        &self.resources
    }

    pub fn parent(&self) -> Option<&ParentBinding> {
        self.parent.as_ref()
    }

    /// This model as seen by a subclass binder.
    pub fn as_parent(&self) -> ParentBinding {
        ParentBinding {
            binding_class: self.binding_class.clone(),
            needs_view: self.constructor_needs_view(),
        }
    }

    pub fn has_view_bindings(&self) -> bool {
        !self.groups.is_empty() || !self.collections.is_empty()
    }

    /// Whether the primary constructor takes a widget root rather than a
    /// context.
    pub fn constructor_needs_view(&self) -> bool {
        self.has_view_bindings() || self.parent.as_ref().is_some_and(|p| p.needs_view)
    }

    pub fn has_field_bindings(&self) -> bool {
        self.groups.iter().any(|g| g.field().is_some()) || !self.collections.is_empty()
    }

    pub fn has_method_bindings(&self) -> bool {
        self.groups.iter().any(BindingGroup::has_method_bindings)
    }

    /// Whether the binder retains the target in a field.
    pub fn has_target_field(&self) -> bool {
        self.has_field_bindings() || self.has_method_bindings()
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.groups.iter().any(|g| g.has_listener(listener))
    }

    pub fn has_unqualified_resource_bindings(&self) -> bool {
        self.resources.iter().any(|r| !r.id.is_qualified())
    }

    pub fn requires_view_local(&self) -> bool {
        self.groups.iter().any(BindingGroup::requires_local)
    }

    pub fn requires_resources(&self, sdk: u32) -> bool {
        self.resources.iter().any(|r| r.requires_resources(sdk))
    }
}

/// Incrementally collects the bindings of one target class.
#[derive(Debug)]
pub struct BindingModelBuilder {
    target: ClassName,
    binding_class: ClassName,
    kind: TargetKind,
    is_final: bool,
    groups: FxIndexMap<Id, BindingGroup>,
    collections: Vec<CollectionBinding>,
    resources: Vec<ResourceBinding>,
    parent: Option<ParentBinding>,
}

impl BindingModelBuilder {
    fn new(target: ClassName, kind: TargetKind, is_final: bool) -> Self {
        Self {
            binding_class: binding_class_name(&target),
            target,
            kind,
            is_final,
            groups: FxIndexMap::default(),
            collections: Vec::new(),
            resources: Vec::new(),
            parent: None,
        }
    }

    pub fn binding_class(&self) -> &ClassName {
        &self.binding_class
    }

    fn group_mut(&mut self, id: Id) -> &mut BindingGroup {
        self.groups.entry(id.clone()).or_insert_with(|| BindingGroup::new(id))
    }

    /// Bind a field to `id`. Returns `false` without changes when the id
    /// already has a field; see [`Self::find_existing_field_name`].
    pub fn add_field(&mut self, id: Id, binding: FieldBinding) -> bool {
        if self.find_existing_field_name(&id).is_some() {
            trace!(id = %id, field = %binding.name, "field rejected, id already bound");
            return false;
        }
        self.group_mut(id).set_field(binding);
        true
    }

    /// Bind a callback to a method. Returns `false` without changes when
    /// `method` returns a value and already has a request for `id`.
    pub fn add_method_binding(
        &mut self,
        id: Id,
        listener: Listener,
        method: &'static ListenerMethod,
        binding: MethodBinding,
    ) -> bool {
        if let Some(group) = self.groups.get(&id) {
            if group.conflicts_with(listener, method) {
                trace!(id = %id, listener = %listener, callback = method.name, "method rejected");
                return false;
            }
        }
        self.group_mut(id).add_method_binding(listener, method, binding);
        true
    }

    pub fn add_collection(&mut self, binding: CollectionBinding) {
        self.collections.push(binding);
    }

    pub fn add_resource(&mut self, binding: ResourceBinding) {
        self.resources.push(binding);
    }

    pub fn set_parent(&mut self, parent: ParentBinding) {
        self.parent = Some(parent);
    }

    /// The name of the field already bound to `id`, if any.
    pub fn find_existing_field_name(&self, id: &Id) -> Option<&str> {
        self.groups
            .get(id)
            .and_then(BindingGroup::field)
            .map(|f| f.name.as_str())
    }

    pub fn build(self) -> BindingModel {
        BindingModel {
            target: self.target,
            binding_class: self.binding_class,
            kind: self.kind,
            is_final: self.is_final,
            groups: self.groups.into_values().collect(),
            collections: self.collections,
            resources: self.resources,
            parent: self.parent,
        }
    }
}
