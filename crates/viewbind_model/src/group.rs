//! Bindings sharing one widget id.

use crate::binding::{FieldBinding, MemberBinding, MethodBinding};
use crate::listener::{Listener, ListenerMethod};
use viewbind_core::{FxIndexMap, Id};

/// Requests bound to one callback, in registration order.
pub type CallbackBindings = FxIndexMap<&'static str, Vec<MethodBinding>>;

/// Everything bound to one widget id.
#[derive(Debug, Clone)]
pub struct BindingGroup {
    id: Id,
    field: Option<FieldBinding>,
    listeners: FxIndexMap<Listener, CallbackBindings>,
}

impl BindingGroup {
    pub(crate) fn new(id: Id) -> Self {
        Self {
            id,
            field: None,
            listeners: FxIndexMap::default(),
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn field(&self) -> Option<&FieldBinding> {
        self.field.as_ref()
    }

    /// Listener bindings keyed by listener then callback name.
    pub fn listeners(&self) -> &FxIndexMap<Listener, CallbackBindings> {
        &self.listeners
    }

    /// The requests bound to one callback.
    pub fn bindings_for(&self, listener: Listener, callback: &str) -> &[MethodBinding] {
        self.listeners
            .get(&listener)
            .and_then(|callbacks| callbacks.get(callback))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_method_bindings(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn has_listener(&self, listener: Listener) -> bool {
        self.listeners.contains_key(&listener)
    }

    /// Exactly one field binding and no listeners.
    pub fn is_single_field_binding(&self) -> bool {
        self.field.is_some() && self.listeners.is_empty()
    }

    pub fn is_bound_to_root(&self) -> bool {
        self.id.is_root()
    }

    /// Whether this group's code goes through the shared `view` local.
    pub fn requires_local(&self) -> bool {
        !self.is_bound_to_root() && !self.is_single_field_binding()
    }

    /// Required bindings: the field first, then methods by listener,
    /// callback, and registration order.
    pub fn required_bindings(&self) -> Vec<&dyn MemberBinding> {
        let mut required: Vec<&dyn MemberBinding> = Vec::new();
        if let Some(field) = self.field.as_ref().filter(|f| f.required) {
            required.push(field);
        }
        for callbacks in self.listeners.values() {
            for bindings in callbacks.values() {
                for binding in bindings.iter().filter(|b| b.required) {
                    required.push(binding);
                }
            }
        }
        required
    }

    pub(crate) fn set_field(&mut self, field: FieldBinding) {
        self.field = Some(field);
    }

    /// Whether a non-void callback already holds a request, so another one
    /// would compete for its return value.
    pub(crate) fn conflicts_with(&self, listener: Listener, method: &ListenerMethod) -> bool {
        !method.returns_void() && !self.bindings_for(listener, method.name).is_empty()
    }

    pub(crate) fn add_method_binding(&mut self, listener: Listener, method: &'static ListenerMethod, binding: MethodBinding) {
        self.listeners
            .entry(listener)
            .or_default()
            .entry(method.name)
            .or_default()
            .push(binding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewbind_core::{TypeName, NO_ID};

    fn click(name: &str, required: bool) -> MethodBinding {
        MethodBinding::new(name, Vec::new(), required, false)
    }

    #[test]
    fn test_single_field_binding() {
        let mut group = BindingGroup::new(Id::new(100));
        group.set_field(FieldBinding::new("title", TypeName::best_guess("android.widget.TextView"), true));
        assert!(group.is_single_field_binding());
        assert!(!group.requires_local());

        group.add_method_binding(Listener::OnClick, Listener::OnClick.default_callback(), click("onTap", true));
        assert!(!group.is_single_field_binding());
        assert!(group.requires_local());
    }

    #[test]
    fn test_root_group_never_requires_local() {
        let mut group = BindingGroup::new(NO_ID);
        group.add_method_binding(Listener::OnClick, Listener::OnClick.default_callback(), click("onTap", true));
        assert!(group.is_bound_to_root());
        assert!(!group.requires_local());
    }

    #[test]
    fn test_required_bindings_order() {
        let mut group = BindingGroup::new(Id::new(7));
        let callback = Listener::OnClick.default_callback();
        group.add_method_binding(Listener::OnClick, callback, click("first", true));
        group.add_method_binding(Listener::OnClick, callback, click("optional", false));
        group.add_method_binding(Listener::OnClick, callback, click("second", true));
        group.set_field(FieldBinding::new("button", TypeName::best_guess("android.widget.Button"), true));

        let descriptions: Vec<String> = group.required_bindings().iter().map(|b| b.description()).collect();
        assert_eq!(descriptions, ["field 'button'", "method 'first'", "method 'second'"]);
    }

    #[test]
    fn test_conflicts_only_on_non_void_callbacks() {
        let mut group = BindingGroup::new(Id::new(7));
        let long_click = Listener::OnLongClick.default_callback();
        assert!(!group.conflicts_with(Listener::OnLongClick, long_click));
        group.add_method_binding(Listener::OnLongClick, long_click, MethodBinding::new("a", Vec::new(), true, true));
        assert!(group.conflicts_with(Listener::OnLongClick, long_click));

        let click_callback = Listener::OnClick.default_callback();
        group.add_method_binding(Listener::OnClick, click_callback, click("b", true));
        assert!(!group.conflicts_with(Listener::OnClick, click_callback));
    }
}
