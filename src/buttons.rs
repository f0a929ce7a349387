//! Button builders: buttons, links, submit controls, groups, and toolbars

use crate::attrs::Attrs;
use crate::context::{StateContext, set_state_style};
use crate::tag::{close_tag, open_tag, tag};

const BUTTON_SIZES: [&str; 3] = ["lg", "sm", "xs"];

/// Add the base `btn` class and resolve the virtual `buttonState` option
pub fn set_button_state(attrs: &mut Attrs) {
	attrs.add_class("btn");
	set_state_style(StateContext::Button, "buttonState", attrs);
}

fn set_button_size(attrs: &mut Attrs) {
	if let Some(size) = attrs.take_str("buttonSize")
		&& BUTTON_SIZES.contains(&size.as_str())
	{
		attrs.add_class(&format!("btn-{size}"));
	}
}

/// Render a button.
///
/// Virtual options: `buttonState` (`default`, `primary`, `success`, `info`,
/// `warning`, `danger`, `link`), `buttonSize` (`lg`, `sm`, `xs`), `block`
/// (full-width), and `active`.
///
/// # Examples
///
/// ```
/// use bootstrap_html::{Attrs, buttons::button};
///
/// assert_eq!(
///     button("Save", Attrs::new().with("buttonState", "primary")),
///     r#"<button type="button" class="btn btn-primary">Save</button>"#
/// );
/// ```
pub fn button(content: &str, mut attrs: Attrs) -> String {
	attrs.set("type", "button");

	set_button_state(&mut attrs);
	set_button_size(&mut attrs);

	let block = attrs.take_flag("block");
	let active = attrs.take_flag("active");
	attrs.add_class_if(&[("btn-block", block), ("active", active)]);

	tag("button", attrs, Some(content), true)
}

/// Render a link styled as a button; the URL is not encoded.
///
/// Same virtual options as [`button`], plus `disabled` which renders as a
/// class (anchors have no disabled attribute).
pub fn link(content: &str, url: &str, mut attrs: Attrs) -> String {
	attrs.set("href", url);

	set_button_state(&mut attrs);
	set_button_size(&mut attrs);

	let active = attrs.take_flag("active");
	let disabled = attrs.take_flag("disabled");
	attrs.add_class_if(&[("active", active), ("disabled", disabled)]);

	tag("a", attrs, Some(content), true)
}

/// Render a submit button; same virtual options as [`button`], with
/// `disabled` as a literal attribute
pub fn submit(content: &str, mut attrs: Attrs) -> String {
	attrs.set("type", "submit");

	set_button_state(&mut attrs);
	set_button_size(&mut attrs);

	let active = attrs.take_flag("active");
	attrs.add_class_if(&[("active", active)]);

	crate::forms::set_disabled(&mut attrs);

	tag("button", attrs, Some(content), true)
}

/// Render a close button for dismissable content
pub fn close_button(mut attrs: Attrs) -> String {
	attrs.set("aria-hidden", "true");
	attrs.set("type", "button");
	attrs.add_class("close");
	tag("button", attrs, Some("&times;"), true)
}

/// Render a dropdown caret
pub fn caret(mut attrs: Attrs) -> String {
	attrs.add_class("caret");
	tag("span", attrs, Some(""), true)
}

/// Render a glyphicon by name
///
/// # Examples
///
/// ```
/// use bootstrap_html::buttons::glyph;
///
/// assert_eq!(glyph("search"), r#"<span class="glyphicon glyphicon-search"></span>"#);
/// ```
pub fn glyph(name: &str) -> String {
	tag(
		"span",
		Attrs::new().with("class", format!("glyphicon glyphicon-{name}")),
		Some(""),
		true,
	)
}

/// Open a button group.
///
/// Virtual options: `buttonSize` (`lg`, `sm`, `xs` as `btn-group-{size}`),
/// `justified`, and `vertical`.
pub fn open_button_group(mut attrs: Attrs) -> String {
	attrs.add_class("btn-group");

	if let Some(size) = attrs.take_str("buttonSize")
		&& BUTTON_SIZES.contains(&size.as_str())
	{
		attrs.add_class(&format!("btn-group-{size}"));
	}

	let justified = attrs.take_flag("justified");
	let vertical = attrs.take_flag("vertical");
	attrs.add_class_if(&[
		("btn-group-justified", justified),
		("btn-group-vertical", vertical),
	]);

	open_tag("div", attrs)
}

/// Close a button group
pub fn close_button_group() -> String {
	close_tag("div")
}

/// Open a button toolbar
pub fn open_button_toolbar(mut attrs: Attrs) -> String {
	attrs.set("role", "toolbar");
	attrs.add_class("btn-toolbar");
	open_tag("div", attrs)
}

/// Close a button toolbar
pub fn close_button_toolbar() -> String {
	close_tag("div")
}
