//! Decorated tag renderer
//!
//! [`tag`] is the funnel every builder goes through: it applies the generic
//! virtual-option translators in a fixed order, then hands the remaining
//! attributes to the serialization primitive in [`crate::html`].
//!
//! Decoration order: visibility, text alignment, text transform, quick
//! float, boolean utility classes, contextual text/background state.

use crate::attrs::{AttrValue, Attrs};
use crate::context::{StateContext, set_state_style};
use crate::html;

const VISIBILITY_TIERS: [&str; 5] = ["xs", "sm", "md", "lg", "print"];

/// Consume the virtual `visible`/`hidden` options.
///
/// A boolean `true` maps to `show`/`hidden`; a list of tiers maps to
/// `visible-{tier}`/`hidden-{tier}` for each recognized tier (the four grid
/// breakpoints plus `print`).
pub fn set_visibility(attrs: &mut Attrs) {
	for state in ["visible", "hidden"] {
		match attrs.take(state) {
			Some(AttrValue::List(tiers)) => {
				for tier in &tiers {
					if VISIBILITY_TIERS.contains(&tier.as_str()) {
						attrs.add_class(&format!("{state}-{tier}"));
					}
				}
			}
			Some(AttrValue::Bool(true)) => {
				attrs.add_class(if state == "visible" { "show" } else { "hidden" });
			}
			_ => {}
		}
	}
}

/// Consume the virtual `textAlignment` option (`left`, `center`, `right`,
/// `justify`) into a `text-{alignment}` class
pub fn set_text_alignment(attrs: &mut Attrs) {
	if let Some(alignment) = attrs.take_str("textAlignment")
		&& ["left", "center", "right", "justify"].contains(&alignment.as_str())
	{
		attrs.add_class(&format!("text-{alignment}"));
	}
}

/// Consume the virtual `textTransform` option (`lowercase`, `uppercase`,
/// `capitalize`) into a `text-{transform}` class
pub fn set_text_transform(attrs: &mut Attrs) {
	if let Some(transform) = attrs.take_str("textTransform")
		&& ["lowercase", "uppercase", "capitalize"].contains(&transform.as_str())
	{
		attrs.add_class(&format!("text-{transform}"));
	}
}

/// Consume a scalar `pull` option (`left` or `right`) into a quick-float
/// `pull-{direction}` class
pub fn set_quick_pull(attrs: &mut Attrs) {
	if let Some(direction) = attrs.take_str("pull")
		&& ["left", "right"].contains(&direction.as_str())
	{
		attrs.add_class(&format!("pull-{direction}"));
	}
}

/// Render a tag with the generic decorations applied.
///
/// Recognized virtual options, all optional: `visible`/`hidden`,
/// `textAlignment`, `textTransform`, `pull` (scalar), `center`, `clearfix`,
/// `textHide`, `screenReader`, `textState`, `backgroundState`. Everything
/// left in the map renders as a literal attribute.
///
/// `content` and `close` follow the three-way contract of
/// [`html::render_tag`].
///
/// # Examples
///
/// ```
/// use bootstrap_html::{Attrs, tag::tag};
///
/// let attrs = Attrs::new().with("textState", "muted").with("id", "note");
/// assert_eq!(
///     tag("p", attrs, Some("fine print"), true),
///     r#"<p id="note" class="text-muted">fine print</p>"#
/// );
/// ```
pub fn tag(name: &str, mut attrs: Attrs, content: Option<&str>, close: bool) -> String {
	set_visibility(&mut attrs);
	set_text_alignment(&mut attrs);
	set_text_transform(&mut attrs);
	set_quick_pull(&mut attrs);

	let center = attrs.take_flag("center");
	let clearfix = attrs.take_flag("clearfix");
	let text_hide = attrs.take_flag("textHide");
	let screen_reader = attrs.take_flag("screenReader");
	attrs.add_class_if(&[
		("center-block", center),
		("clearfix", clearfix),
		("text-hide", text_hide),
		("sr-only", screen_reader),
	]);

	set_state_style(StateContext::Text, "textState", &mut attrs);
	set_state_style(StateContext::Background, "backgroundState", &mut attrs);

	html::render_tag(name, &attrs, content, close)
}

/// Render an opening tag with decorations; pair with [`close_tag`]
pub fn open_tag(name: &str, attrs: Attrs) -> String {
	tag(name, attrs, None, false)
}

/// Render a closing tag
pub fn close_tag(name: &str) -> String {
	html::close_tag(name)
}
