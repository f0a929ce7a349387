//! Form builders: forms, inputs, selects, checkboxes, and radio buttons
//!
//! [`input`] is the shared core every concrete control funnels through; the
//! checkbox/radio builders wrap it in the Bootstrap label/container markup
//! and the list builders iterate a data set reusing one option map per item.

use crate::attrs::Attrs;
use crate::context::{StateContext, set_state_style};
use crate::grid::{self, set_columns};
use crate::tag::{close_tag, open_tag, tag};

/// Set the literal `checked="checked"` attribute when the virtual `checked`
/// flag is true
pub fn set_checked(attrs: &mut Attrs) {
	if attrs.take_flag("checked") {
		attrs.set("checked", "checked");
	}
}

/// Set the literal `disabled="disabled"` attribute when the virtual
/// `disabled` flag is true
pub fn set_disabled(attrs: &mut Attrs) {
	if attrs.take_flag("disabled") {
		attrs.set("disabled", "disabled");
	}
}

/// Open a form; virtual flags `inline` and `horizontal` select the layout
pub fn open_form(mut attrs: Attrs) -> String {
	let inline = attrs.take_flag("inline");
	let horizontal = attrs.take_flag("horizontal");
	attrs.add_class_if(&[("form-inline", inline), ("form-horizontal", horizontal)]);
	open_tag("form", attrs)
}

/// Close a form
pub fn close_form() -> String {
	close_tag("form")
}

/// Render an input control.
///
/// Virtual options: `helpText` (trailing `span.help-block`), `sizes` and
/// `offset` (wrap the control in a grid column), `disabled`, and
/// `inputSize` (`sm` or `lg`, adding `input-{size}`). Every type except
/// `checkbox`, `radio`, and `file` receives the `form-control` class.
///
/// # Examples
///
/// ```
/// use bootstrap_html::{Attrs, forms::input};
///
/// assert_eq!(
///     input("text", "username", Attrs::new()),
///     r#"<input type="text" name="username" class="form-control" />"#
/// );
/// ```
pub fn input(kind: &str, name: &str, mut attrs: Attrs) -> String {
	let help_text = attrs.take_str("helpText");
	let sizes = attrs.take_sizes("sizes");
	let offset = attrs.take("offset");

	attrs.set("type", kind);
	attrs.set("name", name);

	set_disabled(&mut attrs);

	if let Some(size) = attrs.take_str("inputSize")
		&& ["sm", "lg"].contains(&size.as_str())
	{
		attrs.add_class(&format!("input-{size}"));
	}

	if !["checkbox", "radio", "file"].contains(&kind) {
		attrs.add_class("form-control");
	}

	let mut render = String::new();
	if let Some(sizes) = &sizes {
		let mut column = Attrs::new();
		if let Some(offset) = offset {
			column.set("offset", offset);
		}
		render.push_str(&grid::open_column(sizes, column));
	}

	render.push_str(&tag("input", attrs, None, true));

	if let Some(help) = help_text {
		render.push_str(&tag(
			"span",
			Attrs::new().with("class", "help-block"),
			Some(&help),
			true,
		));
	}

	if sizes.is_some() {
		render.push_str(&grid::close_column());
	}
	render
}

/// Render a file input
pub fn file_field(name: &str, attrs: Attrs) -> String {
	input("file", name, attrs)
}

/// Render a textarea; the virtual `sizes` map wraps it in a grid column
pub fn text_area(name: &str, value: &str, mut attrs: Attrs) -> String {
	let sizes = attrs.take_sizes("sizes");

	attrs.set("name", name);
	attrs.add_class("form-control");

	let mut render = match &sizes {
		Some(sizes) => grid::open_column(sizes, Attrs::new()),
		None => String::new(),
	};
	render.push_str(&tag("textarea", attrs, Some(value), true));
	if sizes.is_some() {
		render.push_str(&grid::close_column());
	}
	render
}

/// One entry of a select's data set: a single option or a labeled group
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEntry {
	/// A single `option` tag: value and display label
	Option(String, String),
	/// An `optgroup` with its label and (value, label) options
	Group(String, Vec<(String, String)>),
}

impl SelectEntry {
	/// A single option entry
	pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self::Option(value.into(), label.into())
	}

	/// A labeled group of options
	pub fn group(
		label: impl Into<String>,
		items: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
	) -> Self {
		Self::Group(
			label.into(),
			items
				.into_iter()
				.map(|(value, text)| (value.into(), text.into()))
				.collect(),
		)
	}
}

/// Render the option tags for a flat (value, label) data set
pub fn options(data: &[(String, String)], selected: &[&str]) -> String {
	let mut render = String::new();
	for (value, label) in data {
		let attrs = Attrs::new()
			.with("value", value.clone())
			.with("selected", selected.contains(&value.as_str()));
		render.push_str(&open_tag("option", attrs));
		render.push_str(label);
		render.push_str(&close_tag("option"));
	}
	render
}

/// Render a select input.
///
/// `data` mixes flat options and labeled groups; the virtual `multiple`
/// flag sets the literal attribute.
pub fn drop_down_list(name: &str, selected: &[&str], data: &[SelectEntry], mut attrs: Attrs) -> String {
	if attrs.take_flag("multiple") {
		attrs.set("multiple", "multiple");
	}

	attrs.set("name", name);
	attrs.add_class("form-control");

	let mut render = open_tag("select", attrs);
	for entry in data {
		match entry {
			SelectEntry::Option(value, label) => {
				render.push_str(&options(
					std::slice::from_ref(&(value.clone(), label.clone())),
					selected,
				));
			}
			SelectEntry::Group(label, items) => {
				render.push_str(&open_tag(
					"optgroup",
					Attrs::new().with("label", label.clone()),
				));
				render.push_str(&options(items, selected));
				render.push_str(&close_tag("optgroup"));
			}
		}
	}
	render.push_str(&close_tag("select"));
	render
}

/// Render a form label.
///
/// Adds `control-label` unless the element is marked screen-reader only;
/// the virtual `sizes` map puts column classes on the label itself (for
/// horizontal forms).
pub fn input_label(label: &str, mut attrs: Attrs) -> String {
	let screen_reader = matches!(
		attrs.get("screenReader"),
		Some(crate::attrs::AttrValue::Bool(true))
	);
	attrs.add_class_if(&[("control-label", !screen_reader)]);

	if let Some(sizes) = attrs.take_sizes("sizes") {
		set_columns(&sizes, &mut attrs);
	}

	tag("label", attrs, Some(label), true)
}

fn check_control(kind: &str, name: &str, value: &str, mut attrs: Attrs) -> String {
	attrs.set("value", value);

	let sizes = attrs.take_sizes("sizes");
	let offset = attrs.take("offset");
	let container = attrs.take_nested("containerOptions").unwrap_or_default();
	let mut label_attrs = attrs.take_nested("labelOptions").unwrap_or_default();
	let inline = attrs.take_flag("inline");
	let label = attrs.take_str("label").unwrap_or_default();

	set_checked(&mut attrs);

	let mut render = String::new();
	if let Some(sizes) = &sizes {
		let mut column = Attrs::new();
		if let Some(offset) = offset {
			column.set("offset", offset);
		}
		render.push_str(&grid::open_column(sizes, column));
	}

	if inline {
		label_attrs.add_class(&format!("{kind}-inline"));
	} else {
		let mut container = container;
		container.add_class(kind);
		render.push_str(&open_tag("div", container));
	}

	let body = format!("{}{}", input(kind, name, attrs), label);
	render.push_str(&tag("label", label_attrs, Some(&body), true));

	if !inline {
		render.push_str(&close_tag("div"));
	}
	if sizes.is_some() {
		render.push_str(&grid::close_column());
	}
	render
}

/// Render a checkbox.
///
/// Virtual options: `checked`, `label` (text after the input),
/// `inline` (label-level `checkbox-inline` instead of a `div.checkbox`
/// wrapper), `containerOptions`, `labelOptions`, and `sizes`/`offset` for a
/// grid-column wrap.
///
/// # Examples
///
/// ```
/// use bootstrap_html::{Attrs, forms::check_box};
///
/// let html = check_box("agree", "1", Attrs::new().with("checked", true).with("label", "I agree"));
/// assert_eq!(
///     html,
///     "<div class=\"checkbox\"><label>\
///      <input value=\"1\" checked=\"checked\" type=\"checkbox\" name=\"agree\" />\
///      I agree</label></div>"
/// );
/// ```
pub fn check_box(name: &str, value: &str, attrs: Attrs) -> String {
	check_control("checkbox", name, value, attrs)
}

/// Render a radio button; same virtual options as [`check_box`] with
/// `radio`/`radio-inline` classes
pub fn radio_button(name: &str, value: &str, attrs: Attrs) -> String {
	check_control("radio", name, value, attrs)
}

/// Render a list of checkboxes from (value, label) pairs.
///
/// The input name gets `[]` appended; each item reuses the supplied option
/// map with a generated `{id}_{index}` identifier, and `checked` is set per
/// item from the selected values.
pub fn check_box_list(
	name: &str,
	selected: &[&str],
	data: &[(&str, &str)],
	mut attrs: Attrs,
) -> String {
	let id = attrs.take_str("id").unwrap_or_else(|| name.to_string());

	let mut render = String::new();
	for (index, (value, label)) in data.iter().enumerate() {
		let mut item = attrs.clone();
		item.set("label", *label);
		item.set("id", format!("{id}_{index}"));
		if selected.contains(value) {
			item.set("checked", true);
		}
		render.push_str(&check_box(&format!("{name}[]"), value, item));
	}
	render
}

/// Render a group of radio buttons from (value, label) pairs; at most one
/// value is selected
pub fn radio_button_list(
	name: &str,
	selected: Option<&str>,
	data: &[(&str, &str)],
	mut attrs: Attrs,
) -> String {
	let id = attrs.take_str("id").unwrap_or_else(|| name.to_string());

	let mut render = String::new();
	for (index, (value, label)) in data.iter().enumerate() {
		let mut item = attrs.clone();
		item.set("label", *label);
		item.set("id", format!("{id}_{index}"));
		if selected == Some(*value) {
			item.set("checked", true);
		}
		render.push_str(&radio_button(name, value, item));
	}
	render
}

/// Render a static (read-only) control
pub fn static_control(value: &str, mut attrs: Attrs) -> String {
	attrs.add_class("form-control-static");
	tag("p", attrs, Some(value), true)
}

/// Open a fieldset; the virtual `disabled` flag disables every control
/// inside it
pub fn open_fieldset(mut attrs: Attrs) -> String {
	set_disabled(&mut attrs);
	open_tag("fieldset", attrs)
}

/// Close a fieldset
pub fn close_fieldset() -> String {
	close_tag("fieldset")
}

/// Open a form group; the virtual `state` option sets the validation state
/// (`success`, `warning`, `error` as `has-{state}`)
pub fn open_form_group(mut attrs: Attrs) -> String {
	attrs.add_class("form-group");
	set_state_style(StateContext::FormGroup, "state", &mut attrs);
	open_tag("div", attrs)
}

/// Close a form group
pub fn close_form_group() -> String {
	close_tag("div")
}

/// Render an input group: a text input with add-ons glued to either side.
///
/// Virtual options: `prepend`/`append` (add-on content in
/// `span.input-group-addon`) and `inputOptions` (attributes for the inner
/// input).
pub fn input_group(name: &str, value: &str, mut attrs: Attrs) -> String {
	attrs.add_class("input-group");

	let mut input_attrs = attrs.take_nested("inputOptions").unwrap_or_default();
	input_attrs.set("value", value);

	let append = attrs.take_str("append");
	let prepend = attrs.take_str("prepend");

	let addon = |content: &str| {
		tag(
			"span",
			Attrs::new().with("class", "input-group-addon"),
			Some(content),
			true,
		)
	};

	let mut render = open_tag("div", attrs);
	if let Some(prepend) = prepend {
		render.push_str(&addon(&prepend));
	}
	render.push_str(&input("text", name, input_attrs));
	if let Some(append) = append {
		render.push_str(&addon(&append));
	}
	render.push_str(&close_tag("div"));
	render
}
