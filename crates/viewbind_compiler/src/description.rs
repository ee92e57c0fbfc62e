//! The JSON binding description format.
//!
//! A description file is a list of targets:
//!
//! ```json
//! [
//!   {
//!     "target": "com.example.MainScreen",
//!     "kind": "screen",
//!     "fields": [{ "id": { "value": 2131230822, "ref": "com.example.R.id.title" }, "name": "title", "type": "android.widget.TextView" }],
//!     "listeners": [{ "ids": [2131230823], "listener": "OnClick", "method": "onSubmit" }],
//!     "resources": [{ "id": 2131099648, "name": "accent", "kind": "Color" }]
//!   }
//! ]
//! ```

use serde::Deserialize;

fn yes() -> bool {
    true
}

fn plain() -> String {
    "plain".to_string()
}

/// A resource id: a bare integer or `{ "value": .., "ref": "pkg.R.type.name" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdDescription {
    Raw(i32),
    Qualified {
        value: i32,
        #[serde(rename = "ref")]
        reference: Option<String>,
    },
}

/// The binder of a superclass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParentDescription {
    /// Another target described in the same batch.
    Target { target: String },
    /// A binder generated elsewhere.
    #[serde(rename_all = "camelCase")]
    Binder { binder: String, needs_view: bool },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDescription {
    pub target: String,
    #[serde(default = "plain")]
    pub kind: String,
    #[serde(rename = "final", default)]
    pub is_final: bool,
    pub parent: Option<ParentDescription>,
    #[serde(default)]
    pub fields: Vec<FieldDescription>,
    #[serde(default)]
    pub listeners: Vec<ListenerDescription>,
    #[serde(default)]
    pub collections: Vec<CollectionDescription>,
    #[serde(default)]
    pub resources: Vec<ResourceDescription>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescription {
    pub id: IdDescription,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default = "yes")]
    pub required: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerDescription {
    /// Widgets to bind; empty binds the root.
    #[serde(default)]
    pub ids: Vec<IdDescription>,
    pub listener: String,
    /// Defaults to the listener's first callback.
    pub callback: Option<String>,
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDescription>,
    #[serde(default = "yes")]
    pub required: bool,
    #[serde(default)]
    pub returns_value: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDescription {
    /// Index of the callback parameter forwarded in this slot.
    pub position: usize,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKindDescription {
    Array,
    List,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionDescription {
    pub ids: Vec<IdDescription>,
    pub name: String,
    /// The element type.
    #[serde(rename = "type")]
    pub ty: String,
    pub kind: CollectionKindDescription,
    #[serde(default = "yes")]
    pub required: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDescription {
    pub id: IdDescription,
    pub name: String,
    pub kind: String,
    pub tint: Option<IdDescription>,
}

/// Parse a description file.
pub fn parse_descriptions(content: &str) -> Result<Vec<TargetDescription>, serde_json::Error> {
    serde_json::from_str(content)
}
