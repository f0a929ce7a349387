//! HTML escaping and the low-level tag serialization primitive
//!
//! Everything above this module manipulates [`Attrs`] maps; this module turns
//! a finished map into markup. Attribute values are escaped here, tag content
//! is not: callers pass pre-rendered markup as content and escape plain text
//! themselves where required (as `typography::code` and `typography::pre` do).

use crate::attrs::{AttrValue, Attrs};

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use bootstrap_html::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Serialize a tag from its name, attribute map, and content.
///
/// Attributes render in map order. `Str` and `Int` values are quoted and
/// escaped; `Bool(true)` renders as `name="name"`; `Bool(false)` and any
/// structured value still present in the map (an unconsumed virtual option)
/// are omitted.
///
/// The content parameter is three-way:
/// - `None` with `close` yields a self-closing tag (`<input ... />`)
/// - `Some("")` yields an empty but present body (`<div></div>`)
/// - any content with `close = false` is ignored and only the opening tag is
///   emitted; the caller pairs it with [`close_tag`] later
///
/// # Examples
///
/// ```
/// use bootstrap_html::{Attrs, html::render_tag};
///
/// let attrs = Attrs::new().with("type", "text").with("name", "q");
/// assert_eq!(render_tag("input", &attrs, None, true), r#"<input type="text" name="q" />"#);
/// assert_eq!(render_tag("div", &Attrs::new(), Some(""), true), "<div></div>");
/// assert_eq!(render_tag("div", &Attrs::new(), None, false), "<div>");
/// ```
pub fn render_tag(name: &str, attrs: &Attrs, content: Option<&str>, close: bool) -> String {
	let mut html = String::new();
	html.push('<');
	html.push_str(name);
	render_attributes(attrs, &mut html);

	if !close {
		html.push('>');
		return html;
	}

	match content {
		None => html.push_str(" />"),
		Some(body) => {
			html.push('>');
			html.push_str(body);
			html.push_str(&close_tag(name));
		}
	}
	html
}

/// Render a closing tag
pub fn close_tag(name: &str) -> String {
	format!("</{name}>")
}

fn render_attributes(attrs: &Attrs, html: &mut String) {
	for (name, value) in attrs.iter() {
		match value {
			AttrValue::Bool(true) => {
				html.push(' ');
				html.push_str(name);
				html.push_str("=\"");
				html.push_str(name);
				html.push('"');
			}
			AttrValue::Str(text) => {
				html.push(' ');
				html.push_str(name);
				html.push_str("=\"");
				html.push_str(&escape(text));
				html.push('"');
			}
			AttrValue::Int(number) => {
				html.push(' ');
				html.push_str(name);
				html.push_str("=\"");
				html.push_str(&number.to_string());
				html.push('"');
			}
			// false flags and leftover structured options never reach output
			AttrValue::Bool(false)
			| AttrValue::List(_)
			| AttrValue::Sizes(_)
			| AttrValue::Nested(_) => {}
		}
	}
}
