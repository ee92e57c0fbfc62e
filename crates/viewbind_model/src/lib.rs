//! viewbind_model: Binding requests, groups, and the frozen binding model.
//!
//! A [`BindingModelBuilder`] collects the field, listener, collection, and
//! resource bindings declared on one target class. [`BindingModelBuilder::build`]
//! freezes them into a [`BindingModel`] that synthesis reads.

pub mod binding;
pub mod group;
pub mod listener;
pub mod model;
pub mod resource;

pub use binding::{CollectionBinding, CollectionKind, FieldBinding, MemberBinding, MethodBinding, Parameter};
pub use group::{BindingGroup, CallbackBindings};
pub use listener::{Listener, ListenerClass, ListenerMethod};
pub use model::{binding_class_name, BindingModel, BindingModelBuilder, ParentBinding, TargetKind};
pub use resource::{ResourceBinding, ResourceKind, ResourceMethod};
