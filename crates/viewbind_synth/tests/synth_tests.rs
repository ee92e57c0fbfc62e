//! Synthesis integration tests.
//!
//! Builds models, synthesizes binders, prints them, and checks the Java text.

use viewbind_core::{ClassName, Id, ResourceSymbol, TypeName, NO_ID};
use viewbind_model::{
    BindingModel, BindingModelBuilder, CollectionBinding, CollectionKind, FieldBinding, Listener, MethodBinding,
    Parameter, ResourceBinding, ResourceKind, TargetKind,
};
use viewbind_options::GenerationOptions;
use viewbind_printer::print_java_file;
use viewbind_synth::Synthesizer;

const DEBUG: GenerationOptions = GenerationOptions { sdk: 1, debuggable: true };
const RELEASE: GenerationOptions = GenerationOptions { sdk: 1, debuggable: false };

/// Helper: a builder for `com.example.MainScreen`.
fn screen() -> BindingModelBuilder {
    BindingModel::builder(ClassName::new("com.example", "MainScreen"), TargetKind::Screen, false)
}

/// Helper: synthesize and print.
fn generate(model: &BindingModel, options: GenerationOptions) -> String {
    print_java_file(&Synthesizer::new(options).brew_java(model))
}

fn field(name: &str, ty: &str, required: bool) -> FieldBinding {
    FieldBinding::new(name, TypeName::best_guess(ty), required)
}

fn method(name: &str, required: bool) -> MethodBinding {
    MethodBinding::new(name, Vec::new(), required, false)
}

fn bind_click(builder: &mut BindingModelBuilder, id: Id, binding: MethodBinding) {
    assert!(builder.add_method_binding(id, Listener::OnClick, Listener::OnClick.default_callback(), binding));
}

// ============================================================================
// Whole-file output
// ============================================================================

#[test]
fn test_field_and_click_share_one_lookup() {
    let mut builder = screen();
    builder.add_field(Id::new(200), field("button", "android.widget.Button", true));
    bind_click(&mut builder, Id::new(200), method("onTap", true));
    let model = builder.build();

    let expected = r#"// Generated code from viewbind. Do not modify!
package com.example;

import android.view.View;
import android.widget.Button;
import androidx.annotation.CallSuper;
import androidx.annotation.UiThread;
import viewbind.Unbinder;
import viewbind.internal.DebouncingOnClickListener;
import viewbind.internal.Utils;

public class MainScreen_Binder implements Unbinder {
  private MainScreen target;

  private View viewc8;

  @UiThread
  public MainScreen_Binder(MainScreen target) {
    this(target, target.getWindow().getDecorView());
  }

  @UiThread
  public MainScreen_Binder(final MainScreen target, View source) {
    this.target = target;

    View view;
    view = Utils.findRequiredView(source, 200, "field 'button' and method 'onTap'");
    target.button = Utils.castView(view, 200, "field 'button'", Button.class);
    viewc8 = view;
    view.setOnClickListener(new DebouncingOnClickListener() {
      @Override
      public void doClick(View p0) {
        target.onTap();
      }
    });
  }

  @Override
  @CallSuper
  public void unbind() {
    MainScreen target = this.target;
    if (target == null) throw new IllegalStateException("Bindings already cleared.");
    this.target = null;

    target.button = null;

    viewc8.setOnClickListener(null);
    viewc8 = null;
  }
}
"#;
    assert_eq!(generate(&model, DEBUG), expected);
}

#[test]
fn test_output_is_deterministic() {
    let mut builder = screen();
    builder.add_field(Id::new(1), field("a", "android.widget.TextView", true));
    bind_click(&mut builder, Id::new(2), method("onB", false));
    builder.add_resource(ResourceBinding::new("title", Id::new(3), ResourceKind::String));
    let model = builder.build();

    assert_eq!(generate(&model, DEBUG), generate(&model, DEBUG));
    assert_eq!(generate(&model, RELEASE), generate(&model, RELEASE));
}

#[test]
fn test_groups_emit_in_insertion_order() {
    let mut builder = screen();
    builder.add_field(Id::new(300), field("third", "android.view.View", true));
    builder.add_field(Id::new(100), field("first", "android.view.View", true));
    let text = generate(&builder.build(), DEBUG);

    let third = text.find("target.third = Utils.findRequiredView(source, 300").unwrap();
    let first = text.find("target.first = Utils.findRequiredView(source, 100").unwrap();
    assert!(third < first);
}

// ============================================================================
// Single-field lookups
// ============================================================================

#[test]
fn test_cast_insertion_debug_and_release() {
    let mut builder = screen();
    builder.add_field(Id::new(100), field("x", "android.widget.Button", true));
    let model = builder.build();

    assert!(generate(&model, DEBUG)
        .contains("target.x = Utils.findRequiredViewAsType(source, 100, \"field 'x'\", Button.class);"));
    assert!(generate(&model, RELEASE).contains("target.x = (Button) source.findViewById(100);"));
}

#[test]
fn test_required_base_type_field() {
    let mut builder = screen();
    builder.add_field(Id::new(100), field("x", "android.view.View", true));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("target.x = Utils.findRequiredView(source, 100, \"field 'x'\");"));
    assert!(!text.contains("View view;"));
}

#[test]
fn test_optional_fields() {
    let mut builder = screen();
    builder.add_field(Id::new(1), field("plain", "android.view.View", false));
    builder.add_field(Id::new(2), field("typed", "android.widget.TextView", false));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("target.plain = source.findViewById(1);"));
    assert!(text.contains("target.typed = Utils.findOptionalViewAsType(source, 2, \"field 'typed'\", TextView.class);"));
}

#[test]
fn test_generic_field_casts_to_full_type_and_uses_raw_class() {
    let mut builder = screen();
    builder.add_field(Id::new(7), field("list", "android.widget.AdapterView<?>", true));
    let model = builder.build();

    assert!(generate(&model, DEBUG).contains("\"field 'list'\", AdapterView.class);"));
    assert!(generate(&model, RELEASE).contains("target.list = (AdapterView<?>) source.findViewById(7);"));
}

#[test]
fn test_qualified_id_uses_resource_constant() {
    let mut builder = screen();
    let symbol = ResourceSymbol::parse("com.example.R.id.title").unwrap();
    builder.add_field(Id::qualified(0x7f090064, symbol), field("title", "android.view.View", true));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("target.title = Utils.findRequiredView(source, R.id.title, \"field 'title'\");"));
    assert!(!text.contains("import com.example.R;"));
    assert!(!text.contains("SuppressWarnings"));
}

// ============================================================================
// Listeners
// ============================================================================

#[test]
fn test_optional_listener_is_guarded() {
    let mut builder = screen();
    bind_click(&mut builder, Id::new(300), method("onTap", false));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("view = source.findViewById(300);\n    if (view != null) {\n      view12c = view;"));
    assert!(text.contains("if (view12c != null) {\n      view12c.setOnClickListener(null);\n      view12c = null;\n    }"));
}

#[test]
fn test_required_listener_is_not_guarded() {
    let mut builder = screen();
    bind_click(&mut builder, Id::new(300), method("onTap", true));
    let text = generate(&builder.build(), DEBUG);

    assert!(!text.contains("!= null"));
    assert!(text.contains("view = Utils.findRequiredView(source, 300, \"method 'onTap'\");"));
    assert!(text.contains("    view12c.setOnClickListener(null);\n    view12c = null;"));
}

#[test]
fn test_listener_only_unbind_clears_field_without_local() {
    let mut builder = screen();
    bind_click(&mut builder, Id::new(5), method("onTap", true));
    let text = generate(&builder.build(), DEBUG);

    let expected = r#"  @Override
  @CallSuper
  public void unbind() {
    if (this.target == null) throw new IllegalStateException("Bindings already cleared.");
    target = null;


    view5.setOnClickListener(null);
    view5 = null;
  }
"#;
    assert!(text.contains(expected), "{}", text);
    assert!(!text.contains("MainScreen target = this.target;"));
}

#[test]
fn test_void_bindings_are_called_in_order() {
    let mut builder = screen();
    bind_click(&mut builder, Id::new(5), method("first", true));
    bind_click(&mut builder, Id::new(5), method("second", true));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("\"method 'first' and method 'second'\""));
    assert!(text.contains("target.first();\n        target.second();"));
}

#[test]
fn test_return_values() {
    let long_click = Listener::OnLongClick.default_callback();

    let mut returning = screen();
    let binding = MethodBinding::new("onHold", Vec::new(), true, true);
    assert!(returning.add_method_binding(Id::new(5), Listener::OnLongClick, long_click, binding));
    let text = generate(&returning.build(), DEBUG);
    assert!(text.contains("public boolean onLongClick(View p0) {\n        return target.onHold();\n      }"));

    let mut discarding = screen();
    assert!(discarding.add_method_binding(Id::new(5), Listener::OnLongClick, long_click, method("onHold", true)));
    let text = generate(&discarding.build(), DEBUG);
    assert!(text.contains("target.onHold();\n        return false;"));
}

#[test]
fn test_parameter_casts() {
    let mut builder = screen();
    let binding = MethodBinding::new(
        "onPick",
        vec![
            Parameter::new(1, TypeName::best_guess("android.widget.Button")),
            Parameter::new(2, TypeName::best_guess("int")),
        ],
        true,
        false,
    );
    let callback = Listener::OnItemClick.default_callback();
    assert!(builder.add_method_binding(Id::new(9), Listener::OnItemClick, callback, binding));
    let model = builder.build();

    let debug = generate(&model, DEBUG);
    assert!(debug.contains("public void onItemClick(AdapterView<?> p0, View p1, int p2, long p3) {"));
    assert!(debug.contains("target.onPick(Utils.castParam(p1, \"onItemClick\", 1, \"onPick\", 0, Button.class), p2);"));
    assert!(debug.contains("((AdapterView<?>) view).setOnItemClickListener(new AdapterView.OnItemClickListener() {"));

    let release = generate(&model, RELEASE);
    assert!(release.contains("target.onPick((Button) p1, p2);"));
}

#[test]
fn test_removable_listener_is_retained() {
    let mut builder = screen();
    let callback = Listener::OnTextChanged.callback("afterTextChanged").unwrap();
    assert!(builder.add_method_binding(Id::new(400), Listener::OnTextChanged, callback, method("onEdited", true)));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("  private View view190;\n\n  private TextWatcher view190TextWatcher;"));
    assert!(text.contains("view190TextWatcher = new TextWatcher() {"));
    assert!(text.contains("public void beforeTextChanged(CharSequence p0, int p1, int p2, int p3) {\n      }"));
    assert!(text.contains("((TextView) view).addTextChangedListener(view190TextWatcher);"));
    assert!(text.contains(
        "((TextView) view190).removeTextChangedListener(view190TextWatcher);\n    view190TextWatcher = null;\n    view190 = null;"
    ));
}

#[test]
fn test_root_group_binds_source() {
    let mut builder = screen();
    let touch = Listener::OnTouch.default_callback();
    assert!(builder.add_method_binding(NO_ID, Listener::OnTouch, touch, method("onTouched", false)));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("@SuppressLint(\"ClickableViewAccessibility\")"));
    assert!(text.contains("private View viewSource;"));
    assert!(text.contains("    viewSource = source;\n    source.setOnTouchListener(new View.OnTouchListener() {"));
    assert!(!text.contains("View view;"));
    assert!(!text.contains("findViewById"));
}

// ============================================================================
// Constructors and inheritance
// ============================================================================

#[test]
fn test_parent_needing_root_delegates_source() {
    let mut parent = BindingModel::builder(ClassName::new("com.example", "Base"), TargetKind::Screen, false);
    parent.add_field(Id::new(1), field("header", "android.view.View", true));
    let parent = parent.build();

    let mut child = screen();
    child.set_parent(parent.as_parent());
    let child = child.build();
    let text = generate(&child, DEBUG);

    assert!(text.contains("public class MainScreen_Binder extends Base_Binder {"));
    assert!(text.contains("public MainScreen_Binder(MainScreen target, View source) {\n    super(target, source);\n\n  }"));
    assert!(!text.contains("unbind"));
    assert!(!text.contains("@Deprecated"));
}

#[test]
fn test_parent_without_root_gets_context() {
    let parent = BindingModel::builder(ClassName::new("com.example", "Base"), TargetKind::Screen, false).build();
    assert!(!parent.constructor_needs_view());

    let mut child = screen();
    child.set_parent(parent.as_parent());
    child.add_field(Id::new(1), field("header", "android.view.View", true));
    let text = generate(&child.build(), DEBUG);

    assert!(text.contains("super(target, source.getContext());"));
    assert!(text.contains("target.header = null;\n\n    super.unbind();"));
    assert!(!text.contains("@CallSuper"));
}

#[test]
fn test_resource_only_model_takes_context() {
    let mut builder = screen();
    builder.add_resource(ResourceBinding::new("title", Id::new(3), ResourceKind::String));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("this(target, target);"));
    assert!(text.contains(
        "   * @deprecated Use {@link #MainScreen_Binder(MainScreen, Context)} for direct creation.\n   *     Only present for runtime invocation through {@code ViewBind.bind()}."
    ));
    assert!(text.contains("  @Deprecated\n  @UiThread\n  public MainScreen_Binder(MainScreen target, View source) {\n    this(target, source.getContext());\n  }"));
    assert!(text.contains("  @UiThread\n  @SuppressWarnings(\"ResourceType\")\n  public MainScreen_Binder(MainScreen target, Context context) {"));
    assert!(text.contains("Resources res = context.getResources();\n    target.title = res.getString(3);"));
    assert!(!text.contains("this.target"));
    assert!(text.contains("  public void unbind() {\n  }"));
}

#[test]
fn test_convenience_constructor_by_kind() {
    let build = |kind: TargetKind, with_view: bool| {
        let mut builder = BindingModel::builder(ClassName::new("com.example", "Host"), kind, false);
        if with_view {
            builder.add_field(Id::new(1), field("a", "android.view.View", true));
        }
        generate(&builder.build(), DEBUG)
    };

    assert!(build(TargetKind::Widget, true).contains("this(target, target);"));
    assert!(build(TargetKind::Widget, false).contains("this(target, target.getContext());"));
    assert!(build(TargetKind::Dialog, true).contains("this(target, target.getWindow().getDecorView());"));
    assert!(build(TargetKind::Dialog, false).contains("this(target, target.getContext());"));

    let plain = build(TargetKind::Plain, true);
    assert!(!plain.contains("public Host_Binder(Host target) {"));
    assert!(plain.contains("public Host_Binder(Host target, View source) {"));
}

#[test]
fn test_final_target() {
    let mut builder = BindingModel::builder(ClassName::new("com.example", "Sealed"), TargetKind::Screen, true);
    builder.add_field(Id::new(1), field("a", "android.view.View", true));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("public final class Sealed_Binder implements Unbinder {"));
    assert!(!text.contains("@CallSuper"));
}

#[test]
fn test_nested_target_binder_name() {
    let target = ClassName::nested("com.example", ["Outer", "Inner"]);
    let mut builder = BindingModel::builder(target, TargetKind::Plain, false);
    builder.add_field(Id::new(1), field("a", "android.view.View", true));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("public class Outer$Inner_Binder implements Unbinder {"));
    assert!(text.contains("private Outer.Inner target;"));
}

// ============================================================================
// Collections and resources
// ============================================================================

#[test]
fn test_collection_lookup() {
    let mut builder = screen();
    builder.add_collection(CollectionBinding::new(
        "tabs",
        TypeName::best_guess("android.widget.Button"),
        CollectionKind::List,
        vec![Id::new(1), Id::new(2)],
        true,
    ));
    let model = builder.build();

    assert!(generate(&model, DEBUG).contains(
        "target.tabs = Utils.listFilteringNull(Utils.findRequiredViewAsType(source, 1, \"field 'tabs'\", Button.class), Utils.findRequiredViewAsType(source, 2, \"field 'tabs'\", Button.class));"
    ));
    assert!(generate(&model, RELEASE)
        .contains("target.tabs = Utils.listFilteringNull((Button) source.findViewById(1), (Button) source.findViewById(2));"));
    assert!(generate(&model, DEBUG).contains("target.tabs = null;"));
}

#[test]
fn test_optional_view_array() {
    let mut builder = screen();
    builder.add_collection(CollectionBinding::new(
        "slots",
        TypeName::best_guess("android.view.View"),
        CollectionKind::Array,
        vec![Id::new(1), Id::new(2)],
        false,
    ));
    let text = generate(&builder.build(), DEBUG);
    assert!(text.contains("target.slots = Utils.arrayFilteringNull(source.findViewById(1), source.findViewById(2));"));
}

#[test]
fn test_resource_accessor_follows_sdk() {
    let mut builder = screen();
    builder.add_field(Id::new(1), field("a", "android.view.View", true));
    builder.add_resource(ResourceBinding::new("accent", Id::new(5), ResourceKind::Color));
    let model = builder.build();

    let old = generate(&model, GenerationOptions { sdk: 1, debuggable: true });
    assert!(old.contains("target.a = Utils.findRequiredView(source, 1, \"field 'a'\");\n\n    Context context = source.getContext();"));
    assert!(old.contains("target.accent = ContextCompat.getColor(context, 5);"));
    assert!(!old.contains("Resources res"));

    let new = generate(&model, GenerationOptions { sdk: 23, debuggable: true });
    assert!(new.contains("target.accent = context.getColor(5);"));
    assert!(!new.contains("ContextCompat"));
}

#[test]
fn test_tinted_drawable_and_helpers() {
    let mut builder = screen();
    builder.add_resource(ResourceBinding::new("icon", Id::new(1), ResourceKind::Drawable).with_tint(Id::new(2)));
    builder.add_resource(ResourceBinding::new("fade", Id::new(3), ResourceKind::Animation));
    builder.add_resource(ResourceBinding::new("logo", Id::new(4), ResourceKind::Bitmap));
    builder.add_resource(ResourceBinding::new("ratio", Id::new(6), ResourceKind::Float));
    let text = generate(&builder.build(), DEBUG);

    assert!(text.contains("target.icon = Utils.getTintedDrawable(context, 1, 2);"));
    assert!(text.contains("target.fade = AnimationUtils.loadAnimation(context, 3);"));
    assert!(text.contains("target.logo = BitmapFactory.decodeResource(res, 4);"));
    assert!(text.contains("target.ratio = Utils.getFloat(context, 6);"));
    assert!(text.contains("import android.graphics.BitmapFactory;"));
}

#[test]
fn test_font_accessor() {
    let mut builder = screen();
    builder.add_resource(ResourceBinding::new("face", Id::new(8), ResourceKind::Font));
    let model = builder.build();

    let old = generate(&model, GenerationOptions { sdk: 21, debuggable: true });
    assert!(old.contains("target.face = ResourcesCompat.getFont(context, 8);"));
    assert!(!old.contains("Resources res"));

    let new = generate(&model, GenerationOptions { sdk: 26, debuggable: true });
    assert!(new.contains("Resources res = context.getResources();\n    target.face = res.getFont(8);"));
}
