//! The listener registry.
//!
//! Every listener interface a binding can target is described here with its
//! full callback list, so a generated implementation can override each
//! abstract method even when only one of them is bound.

use std::fmt;

/// One callback method of a listener interface.
#[derive(Debug, PartialEq, Eq)]
pub struct ListenerMethod {
    pub name: &'static str,
    /// Parameter types, in declaration order.
    pub parameters: &'static [&'static str],
    pub return_type: &'static str,
    /// Returned when no bound method supplies a value.
    pub default_return: &'static str,
}

impl ListenerMethod {
    pub fn returns_void(&self) -> bool {
        self.return_type == "void"
    }
}

/// The shape of a listener interface and how it is attached to a widget.
#[derive(Debug, PartialEq, Eq)]
pub struct ListenerClass {
    pub name: &'static str,
    /// The type declaring `setter` (and `remover`).
    pub target_type: &'static str,
    pub setter: &'static str,
    /// Detaches a previously attached instance. Listeners without one are
    /// detached by passing `null` to the setter.
    pub remover: Option<&'static str>,
    /// The listener type to implement.
    pub type_: &'static str,
    pub callbacks: &'static [ListenerMethod],
}

const VIEW: &str = "android.view.View";
const ADAPTER_VIEW: &str = "android.widget.AdapterView<?>";

static ON_CHECKED_CHANGED: ListenerClass = ListenerClass {
    name: "OnCheckedChanged",
    target_type: "android.widget.CompoundButton",
    setter: "setOnCheckedChangeListener",
    remover: None,
    type_: "android.widget.CompoundButton.OnCheckedChangeListener",
    callbacks: &[ListenerMethod {
        name: "onCheckedChanged",
        parameters: &["android.widget.CompoundButton", "boolean"],
        return_type: "void",
        default_return: "null",
    }],
};

static ON_CLICK: ListenerClass = ListenerClass {
    name: "OnClick",
    target_type: VIEW,
    setter: "setOnClickListener",
    remover: None,
    type_: "viewbind.internal.DebouncingOnClickListener",
    callbacks: &[ListenerMethod {
        name: "doClick",
        parameters: &[VIEW],
        return_type: "void",
        default_return: "null",
    }],
};

static ON_EDITOR_ACTION: ListenerClass = ListenerClass {
    name: "OnEditorAction",
    target_type: "android.widget.TextView",
    setter: "setOnEditorActionListener",
    remover: None,
    type_: "android.widget.TextView.OnEditorActionListener",
    callbacks: &[ListenerMethod {
        name: "onEditorAction",
        parameters: &["android.widget.TextView", "int", "android.view.KeyEvent"],
        return_type: "boolean",
        default_return: "false",
    }],
};

static ON_FOCUS_CHANGE: ListenerClass = ListenerClass {
    name: "OnFocusChange",
    target_type: VIEW,
    setter: "setOnFocusChangeListener",
    remover: None,
    type_: "android.view.View.OnFocusChangeListener",
    callbacks: &[ListenerMethod {
        name: "onFocusChange",
        parameters: &[VIEW, "boolean"],
        return_type: "void",
        default_return: "null",
    }],
};

static ON_ITEM_CLICK: ListenerClass = ListenerClass {
    name: "OnItemClick",
    target_type: ADAPTER_VIEW,
    setter: "setOnItemClickListener",
    remover: None,
    type_: "android.widget.AdapterView.OnItemClickListener",
    callbacks: &[ListenerMethod {
        name: "onItemClick",
        parameters: &[ADAPTER_VIEW, VIEW, "int", "long"],
        return_type: "void",
        default_return: "null",
    }],
};

static ON_ITEM_LONG_CLICK: ListenerClass = ListenerClass {
    name: "OnItemLongClick",
    target_type: ADAPTER_VIEW,
    setter: "setOnItemLongClickListener",
    remover: None,
    type_: "android.widget.AdapterView.OnItemLongClickListener",
    callbacks: &[ListenerMethod {
        name: "onItemLongClick",
        parameters: &[ADAPTER_VIEW, VIEW, "int", "long"],
        return_type: "boolean",
        default_return: "false",
    }],
};

static ON_ITEM_SELECTED: ListenerClass = ListenerClass {
    name: "OnItemSelected",
    target_type: ADAPTER_VIEW,
    setter: "setOnItemSelectedListener",
    remover: None,
    type_: "android.widget.AdapterView.OnItemSelectedListener",
    callbacks: &[
        ListenerMethod {
            name: "onItemSelected",
            parameters: &[ADAPTER_VIEW, VIEW, "int", "long"],
            return_type: "void",
            default_return: "null",
        },
        ListenerMethod {
            name: "onNothingSelected",
            parameters: &[ADAPTER_VIEW],
            return_type: "void",
            default_return: "null",
        },
    ],
};

static ON_LONG_CLICK: ListenerClass = ListenerClass {
    name: "OnLongClick",
    target_type: VIEW,
    setter: "setOnLongClickListener",
    remover: None,
    type_: "android.view.View.OnLongClickListener",
    callbacks: &[ListenerMethod {
        name: "onLongClick",
        parameters: &[VIEW],
        return_type: "boolean",
        default_return: "false",
    }],
};

static ON_PAGE_CHANGE: ListenerClass = ListenerClass {
    name: "OnPageChange",
    target_type: "androidx.viewpager.widget.ViewPager",
    setter: "addOnPageChangeListener",
    remover: Some("removeOnPageChangeListener"),
    type_: "androidx.viewpager.widget.ViewPager.OnPageChangeListener",
    callbacks: &[
        ListenerMethod {
            name: "onPageSelected",
            parameters: &["int"],
            return_type: "void",
            default_return: "null",
        },
        ListenerMethod {
            name: "onPageScrolled",
            parameters: &["int", "float", "int"],
            return_type: "void",
            default_return: "null",
        },
        ListenerMethod {
            name: "onPageScrollStateChanged",
            parameters: &["int"],
            return_type: "void",
            default_return: "null",
        },
    ],
};

static ON_TEXT_CHANGED: ListenerClass = ListenerClass {
    name: "OnTextChanged",
    target_type: "android.widget.TextView",
    setter: "addTextChangedListener",
    remover: Some("removeTextChangedListener"),
    type_: "android.text.TextWatcher",
    callbacks: &[
        ListenerMethod {
            name: "beforeTextChanged",
            parameters: &["java.lang.CharSequence", "int", "int", "int"],
            return_type: "void",
            default_return: "null",
        },
        ListenerMethod {
            name: "onTextChanged",
            parameters: &["java.lang.CharSequence", "int", "int", "int"],
            return_type: "void",
            default_return: "null",
        },
        ListenerMethod {
            name: "afterTextChanged",
            parameters: &["android.text.Editable"],
            return_type: "void",
            default_return: "null",
        },
    ],
};

static ON_TOUCH: ListenerClass = ListenerClass {
    name: "OnTouch",
    target_type: VIEW,
    setter: "setOnTouchListener",
    remover: None,
    type_: "android.view.View.OnTouchListener",
    callbacks: &[ListenerMethod {
        name: "onTouch",
        parameters: &[VIEW, "android.view.MotionEvent"],
        return_type: "boolean",
        default_return: "false",
    }],
};

/// A listener interface known to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Listener {
    OnCheckedChanged,
    OnClick,
    OnEditorAction,
    OnFocusChange,
    OnItemClick,
    OnItemLongClick,
    OnItemSelected,
    OnLongClick,
    OnPageChange,
    OnTextChanged,
    OnTouch,
}

impl Listener {
    pub const ALL: [Listener; 11] = [
        Listener::OnCheckedChanged,
        Listener::OnClick,
        Listener::OnEditorAction,
        Listener::OnFocusChange,
        Listener::OnItemClick,
        Listener::OnItemLongClick,
        Listener::OnItemSelected,
        Listener::OnLongClick,
        Listener::OnPageChange,
        Listener::OnTextChanged,
        Listener::OnTouch,
    ];

    pub fn descriptor(self) -> &'static ListenerClass {
        match self {
            Listener::OnCheckedChanged => &ON_CHECKED_CHANGED,
            Listener::OnClick => &ON_CLICK,
            Listener::OnEditorAction => &ON_EDITOR_ACTION,
            Listener::OnFocusChange => &ON_FOCUS_CHANGE,
            Listener::OnItemClick => &ON_ITEM_CLICK,
            Listener::OnItemLongClick => &ON_ITEM_LONG_CLICK,
            Listener::OnItemSelected => &ON_ITEM_SELECTED,
            Listener::OnLongClick => &ON_LONG_CLICK,
            Listener::OnPageChange => &ON_PAGE_CHANGE,
            Listener::OnTextChanged => &ON_TEXT_CHANGED,
            Listener::OnTouch => &ON_TOUCH,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.descriptor().name == name)
    }

    /// Look up a callback by name.
    pub fn callback(self, name: &str) -> Option<&'static ListenerMethod> {
        self.descriptor().callbacks.iter().find(|m| m.name == name)
    }

    /// The callback a binding targets when it does not name one.
    pub fn default_callback(self) -> &'static ListenerMethod {
        &self.descriptor().callbacks[0]
    }

    pub fn callbacks(self) -> &'static [ListenerMethod] {
        self.descriptor().callbacks
    }
}

impl fmt::Display for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}
