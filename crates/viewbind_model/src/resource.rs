//! Resource kinds and their accessor tables.

use std::fmt;
use viewbind_core::Id;

/// One way of loading a resource value.
#[derive(Debug, PartialEq, Eq)]
pub struct ResourceMethod {
    /// A helper type declaring a static accessor, or `None` for an instance
    /// method on `Resources` or `Context`.
    pub helper: Option<&'static str>,
    pub name: &'static str,
    /// Whether the accessor takes (or is called on) a `Resources` object
    /// rather than the `Context`.
    pub requires_resources: bool,
    /// The minimum platform version at which this accessor applies.
    pub sdk: u32,
}

const fn on_resources(name: &'static str) -> ResourceMethod {
    ResourceMethod {
        helper: None,
        name,
        requires_resources: true,
        sdk: 1,
    }
}

const CONTEXT_COMPAT: &str = "androidx.core.content.ContextCompat";
const RESOURCES_COMPAT: &str = "androidx.core.content.res.ResourcesCompat";
const UTILS: &str = "viewbind.internal.Utils";

static ANIMATION: [ResourceMethod; 1] = [ResourceMethod {
    helper: Some("android.view.animation.AnimationUtils"),
    name: "loadAnimation",
    requires_resources: false,
    sdk: 1,
}];
static BITMAP: [ResourceMethod; 1] = [ResourceMethod {
    helper: Some("android.graphics.BitmapFactory"),
    name: "decodeResource",
    requires_resources: true,
    sdk: 1,
}];
static BOOL: [ResourceMethod; 1] = [on_resources("getBoolean")];
static COLOR: [ResourceMethod; 2] = [
    ResourceMethod { helper: None, name: "getColor", requires_resources: false, sdk: 23 },
    ResourceMethod { helper: Some(CONTEXT_COMPAT), name: "getColor", requires_resources: false, sdk: 1 },
];
static COLOR_STATE_LIST: [ResourceMethod; 2] = [
    ResourceMethod { helper: None, name: "getColorStateList", requires_resources: false, sdk: 23 },
    ResourceMethod { helper: Some(CONTEXT_COMPAT), name: "getColorStateList", requires_resources: false, sdk: 1 },
];
static DIMEN_PIXEL_SIZE: [ResourceMethod; 1] = [on_resources("getDimensionPixelSize")];
static DIMEN: [ResourceMethod; 1] = [on_resources("getDimension")];
static DRAWABLE: [ResourceMethod; 2] = [
    ResourceMethod { helper: None, name: "getDrawable", requires_resources: false, sdk: 21 },
    ResourceMethod { helper: Some(CONTEXT_COMPAT), name: "getDrawable", requires_resources: false, sdk: 1 },
];
static FLOAT: [ResourceMethod; 1] = [ResourceMethod {
    helper: Some(UTILS),
    name: "getFloat",
    requires_resources: false,
    sdk: 1,
}];
static FONT: [ResourceMethod; 2] = [
    ResourceMethod { helper: None, name: "getFont", requires_resources: true, sdk: 26 },
    ResourceMethod { helper: Some(RESOURCES_COMPAT), name: "getFont", requires_resources: false, sdk: 1 },
];
static INT: [ResourceMethod; 1] = [on_resources("getInteger")];
static STRING: [ResourceMethod; 1] = [on_resources("getString")];
static STRING_ARRAY: [ResourceMethod; 1] = [on_resources("getStringArray")];
static INT_ARRAY: [ResourceMethod; 1] = [on_resources("getIntArray")];
static TEXT_ARRAY: [ResourceMethod; 1] = [on_resources("getTextArray")];
static TYPED_ARRAY: [ResourceMethod; 1] = [on_resources("obtainTypedArray")];

/// The kind of value a resource binding loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Animation,
    Bitmap,
    Bool,
    Color,
    ColorStateList,
    DimenPixelSize,
    Dimen,
    Drawable,
    Float,
    Font,
    Int,
    String,
    StringArray,
    IntArray,
    TextArray,
    TypedArray,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 16] = [
        ResourceKind::Animation,
        ResourceKind::Bitmap,
        ResourceKind::Bool,
        ResourceKind::Color,
        ResourceKind::ColorStateList,
        ResourceKind::DimenPixelSize,
        ResourceKind::Dimen,
        ResourceKind::Drawable,
        ResourceKind::Float,
        ResourceKind::Font,
        ResourceKind::Int,
        ResourceKind::String,
        ResourceKind::StringArray,
        ResourceKind::IntArray,
        ResourceKind::TextArray,
        ResourceKind::TypedArray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Animation => "Animation",
            ResourceKind::Bitmap => "Bitmap",
            ResourceKind::Bool => "Bool",
            ResourceKind::Color => "Color",
            ResourceKind::ColorStateList => "ColorStateList",
            ResourceKind::DimenPixelSize => "DimenPixelSize",
            ResourceKind::Dimen => "Dimen",
            ResourceKind::Drawable => "Drawable",
            ResourceKind::Float => "Float",
            ResourceKind::Font => "Font",
            ResourceKind::Int => "Int",
            ResourceKind::String => "String",
            ResourceKind::StringArray => "StringArray",
            ResourceKind::IntArray => "IntArray",
            ResourceKind::TextArray => "TextArray",
            ResourceKind::TypedArray => "TypedArray",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Accessors ordered by descending minimum platform version.
    pub fn methods(self) -> &'static [ResourceMethod] {
        match self {
            ResourceKind::Animation => &ANIMATION,
            ResourceKind::Bitmap => &BITMAP,
            ResourceKind::Bool => &BOOL,
            ResourceKind::Color => &COLOR,
            ResourceKind::ColorStateList => &COLOR_STATE_LIST,
            ResourceKind::DimenPixelSize => &DIMEN_PIXEL_SIZE,
            ResourceKind::Dimen => &DIMEN,
            ResourceKind::Drawable => &DRAWABLE,
            ResourceKind::Float => &FLOAT,
            ResourceKind::Font => &FONT,
            ResourceKind::Int => &INT,
            ResourceKind::String => &STRING,
            ResourceKind::StringArray => &STRING_ARRAY,
            ResourceKind::IntArray => &INT_ARRAY,
            ResourceKind::TextArray => &TEXT_ARRAY,
            ResourceKind::TypedArray => &TYPED_ARRAY,
        }
    }

    /// The first accessor available at `sdk`, falling back to the last one.
    pub fn method_for_sdk(self, sdk: u32) -> &'static ResourceMethod {
        let methods = self.methods();
        methods
            .iter()
            .find(|m| m.sdk <= sdk)
            .unwrap_or(&methods[methods.len() - 1])
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A request to load one resource value into a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBinding {
    pub name: String,
    pub id: Id,
    pub kind: ResourceKind,
    /// Tint attribute applied to a drawable.
    pub tint: Option<Id>,
}

impl ResourceBinding {
    pub fn new(name: impl Into<String>, id: Id, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            id,
            kind,
            tint: None,
        }
    }

    pub fn with_tint(mut self, tint: Id) -> Self {
        self.tint = Some(tint);
        self
    }

    /// The tint to apply, if this is a tinted drawable.
    pub fn drawable_tint(&self) -> Option<&Id> {
        match self.kind {
            ResourceKind::Drawable => self.tint.as_ref(),
            _ => None,
        }
    }

    /// Whether loading this value at `sdk` needs a `Resources` local.
    pub fn requires_resources(&self, sdk: u32) -> bool {
        self.drawable_tint().is_none() && self.kind.method_for_sdk(sdk).requires_resources
    }
}
