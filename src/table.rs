//! Table builders
//!
//! [`open_table`] opens `<table>` through `<tbody>` in one call (optionally
//! rendering a header row first); content rows then come from
//! [`open_table_row`]/[`table_cell`], and [`close_table`] closes everything
//! back out.

use crate::attrs::Attrs;
use crate::context::{StateContext, set_state_style};
use crate::tag::{close_tag, open_tag, tag};

/// Open a table.
///
/// Virtual options: `header` (list of column headers, rendered as a
/// `thead` row of `th` tags), the style flags `striped`, `bordered`,
/// `hover`, `condensed`, and `responsive` (wraps the table in a
/// `div.table-responsive`; pass `true` to [`close_table`] to close it).
pub fn open_table(mut attrs: Attrs) -> String {
	let header = attrs.take_list("header");

	attrs.add_class("table");

	let striped = attrs.take_flag("striped");
	let bordered = attrs.take_flag("bordered");
	let hover = attrs.take_flag("hover");
	let condensed = attrs.take_flag("condensed");
	attrs.add_class_if(&[
		("table-striped", striped),
		("table-bordered", bordered),
		("table-hover", hover),
		("table-condensed", condensed),
	]);

	let mut render = if attrs.take_flag("responsive") {
		open_tag("div", Attrs::new().with("class", "table-responsive"))
	} else {
		String::new()
	};

	render.push_str(&open_tag("table", attrs));

	if let Some(header) = header {
		render.push_str(&open_tag("thead", Attrs::new()));
		render.push_str(&open_table_row(Attrs::new()));
		for column in &header {
			render.push_str(&tag("th", Attrs::new(), Some(column), true));
		}
		render.push_str(&close_table_row());
		render.push_str(&close_tag("thead"));
	}

	render.push_str(&open_tag("tbody", Attrs::new()));
	render
}

/// Close a table; `responsive` also closes the responsive wrapper div
pub fn close_table(responsive: bool) -> String {
	let mut render = close_tag("tbody");
	render.push_str(&close_tag("table"));
	if responsive {
		render.push_str(&close_tag("div"));
	}
	render
}

/// Open a table row; the virtual `state` option sets the contextual row
/// class (`active`, `success`, `info`, `warning`, `danger` - no prefix)
pub fn open_table_row(mut attrs: Attrs) -> String {
	set_state_style(StateContext::TableRow, "state", &mut attrs);
	open_tag("tr", attrs)
}

/// Close a table row
pub fn close_table_row() -> String {
	close_tag("tr")
}

/// Render a table cell; the virtual `state` option sets the contextual cell
/// class (no prefix)
pub fn table_cell(content: &str, mut attrs: Attrs) -> String {
	set_state_style(StateContext::TableCell, "state", &mut attrs);
	tag("td", attrs, Some(content), true)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_renders_thead_row() {
		let html = open_table(Attrs::new().with("header", vec!["Name", "Email"]));
		assert_eq!(
			html,
			r#"<table class="table"><thead><tr><th>Name</th><th>Email</th></tr></thead><tbody>"#
		);
	}

	#[test]
	fn responsive_table_gains_a_wrapper() {
		let html = open_table(Attrs::new().with("responsive", true).with("striped", true));
		assert_eq!(
			html,
			r#"<div class="table-responsive"><table class="table table-striped"><tbody>"#
		);
		assert_eq!(close_table(true), "</tbody></table></div>");
	}

	#[test]
	fn row_and_cell_state_are_bare_classes() {
		assert_eq!(
			open_table_row(Attrs::new().with("state", "danger")),
			r#"<tr class="danger">"#
		);
		assert_eq!(
			table_cell("ok", Attrs::new().with("state", "success")),
			r#"<td class="success">ok</td>"#
		);
	}
}
