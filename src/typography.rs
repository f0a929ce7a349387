//! Typography builders: headings, quotes, lists, and code
//!
//! Content passed to these builders is raw markup except for [`code`] and
//! [`pre`], which escape their content since snippets routinely contain
//! markup characters.

use crate::attrs::Attrs;
use crate::html::escape;
use crate::tag::{close_tag, open_tag, tag};

/// Render a heading tag; the level is clamped to `1..=6`
pub fn heading(level: u8, content: &str, attrs: Attrs) -> String {
	let level = level.clamp(1, 6);
	tag(&format!("h{level}"), attrs, Some(content), true)
}

/// Render an abbreviation with a hover title.
///
/// The virtual `initialism` flag renders the slightly-smaller style for
/// all-capital abbreviations.
pub fn abbreviation(content: &str, title: &str, mut attrs: Attrs) -> String {
	attrs.set("title", title);

	let initialism = attrs.take_flag("initialism");
	attrs.add_class_if(&[("initialism", initialism)]);

	tag("abbr", attrs, Some(content), true)
}

/// Open an address tag
pub fn open_address(attrs: Attrs) -> String {
	open_tag("address", attrs)
}

/// Close an address tag
pub fn close_address() -> String {
	close_tag("address")
}

/// Open a blockquote; the virtual `reverse` flag right-aligns it
pub fn open_blockquote(mut attrs: Attrs) -> String {
	let reverse = attrs.take_flag("reverse");
	attrs.add_class_if(&[("blockquote-reverse", reverse)]);
	open_tag("blockquote", attrs)
}

/// Close a blockquote
pub fn close_blockquote() -> String {
	close_tag("blockquote")
}

/// Render a full blockquote.
///
/// Virtual options: `footer` (source attribution rendered in a `footer`
/// tag) and `reverse`.
///
/// # Examples
///
/// ```
/// use bootstrap_html::{Attrs, typography::blockquote};
///
/// let html = blockquote("Stay hungry.", Attrs::new().with("footer", "Jobs"));
/// assert_eq!(html, "<blockquote><p>Stay hungry.</p><footer>Jobs</footer></blockquote>");
/// ```
pub fn blockquote(content: &str, mut attrs: Attrs) -> String {
	let footer = attrs.take_str("footer");

	let mut render = open_blockquote(attrs);
	render.push_str(&tag("p", Attrs::new(), Some(content), true));
	if let Some(footer) = footer {
		render.push_str(&tag("footer", Attrs::new(), Some(&footer), true));
	}
	render.push_str(&close_blockquote());
	render
}

/// Render the cited source of a quote
pub fn cite(content: &str, title: &str, mut attrs: Attrs) -> String {
	attrs.set("title", title);
	tag("cite", attrs, Some(content), true)
}

fn list_style(attrs: &mut Attrs) {
	let unstyled = attrs.take_flag("unstyled");
	let inline = attrs.take_flag("inline");
	attrs.add_class_if(&[("list-unstyled", unstyled), ("list-inline", inline)]);
}

/// Open an unordered list; virtual flags `unstyled` and `inline`
pub fn open_unordered_list(mut attrs: Attrs) -> String {
	list_style(&mut attrs);
	open_tag("ul", attrs)
}

/// Close an unordered list
pub fn close_unordered_list() -> String {
	close_tag("ul")
}

/// Open an ordered list; virtual flags `unstyled` and `inline`
pub fn open_ordered_list(mut attrs: Attrs) -> String {
	list_style(&mut attrs);
	open_tag("ol", attrs)
}

/// Close an ordered list
pub fn close_ordered_list() -> String {
	close_tag("ol")
}

/// Open a description list; the virtual `horizontal` flag lines terms and
/// descriptions up side by side
pub fn open_description_list(mut attrs: Attrs) -> String {
	let horizontal = attrs.take_flag("horizontal");
	attrs.add_class_if(&[("dl-horizontal", horizontal)]);
	open_tag("dl", attrs)
}

/// Close a description list
pub fn close_description_list() -> String {
	close_tag("dl")
}

/// Render a term of a description list
pub fn term(content: &str, attrs: Attrs) -> String {
	tag("dt", attrs, Some(content), true)
}

/// Render the description of a term
pub fn description(content: &str, attrs: Attrs) -> String {
	tag("dd", attrs, Some(content), true)
}

/// Render an inline code snippet; the content is HTML-escaped
pub fn code(content: &str, attrs: Attrs) -> String {
	tag("code", attrs, Some(&escape(content)), true)
}

/// Render keyboard input
pub fn kbd(content: &str, attrs: Attrs) -> String {
	tag("kbd", attrs, Some(content), true)
}

/// Render a multiline code block; the content is HTML-escaped
pub fn pre(content: &str, attrs: Attrs) -> String {
	tag("pre", attrs, Some(&escape(content)), true)
}
