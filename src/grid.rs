//! Responsive grid: breakpoints, size specifications, column translators,
//! and the container/row/column builders
//!
//! All translators are fail-open: an absent option, an unknown breakpoint
//! name, or a span outside `0..=12` is silently skipped and the element
//! renders without the corresponding class.

use indexmap::IndexMap;

use crate::attrs::Attrs;
use crate::tag::{close_tag, open_tag, tag};

/// Widest span a column can take
pub const MAX_COLUMNS: i64 = 12;

/// A responsive width tier of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Breakpoint {
	/// Extra-small devices (phones)
	Xs,
	/// Small devices (tablets)
	Sm,
	/// Medium devices (desktops)
	Md,
	/// Large devices (wide desktops)
	Lg,
}

impl Breakpoint {
	/// All breakpoints, narrowest first
	pub const ALL: [Breakpoint; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

	/// Canonical short name used in class tokens
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Xs => "xs",
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
		}
	}

	/// Parse a short name; anything unrecognized is `None`
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_html::Breakpoint;
	///
	/// assert_eq!(Breakpoint::parse("md"), Some(Breakpoint::Md));
	/// assert_eq!(Breakpoint::parse("xl"), None);
	/// ```
	pub fn parse(name: &str) -> Option<Self> {
		match name {
			"xs" => Some(Self::Xs),
			"sm" => Some(Self::Sm),
			"md" => Some(Self::Md),
			"lg" => Some(Self::Lg),
			_ => None,
		}
	}
}

/// Ordered breakpoint-name-to-span map (`sizes`, `offset`, `push`, `pull`)
pub type SizeSpec = IndexMap<String, i64>;

/// Build a [`SizeSpec`] from name/span pairs
///
/// # Examples
///
/// ```
/// use bootstrap_html::grid::sizes;
///
/// let spec = sizes(&[("md", 6), ("lg", 4)]);
/// assert_eq!(spec.get("md"), Some(&6));
/// ```
pub fn sizes(pairs: &[(&str, i64)]) -> SizeSpec {
	pairs
		.iter()
		.map(|(name, span)| (name.to_string(), *span))
		.collect()
}

fn valid_span(span: i64) -> bool {
	(0..=MAX_COLUMNS).contains(&span)
}

/// Add `col-{bp}-{n}` for every valid breakpoint/span pair.
///
/// Exactly one class per valid pair; pairs with an unknown breakpoint or a
/// span outside `0..=12` contribute nothing.
pub fn set_columns(sizes: &SizeSpec, attrs: &mut Attrs) {
	for (name, &span) in sizes {
		if let Some(bp) = Breakpoint::parse(name)
			&& valid_span(span)
		{
			attrs.add_class(&format!("col-{}-{}", bp.as_str(), span));
		}
	}
}

/// Consume the virtual `offset` map and add `col-{bp}-offset-{n}` classes
pub fn set_offset(attrs: &mut Attrs) {
	if let Some(offset) = attrs.take_sizes("offset") {
		for (name, &amount) in &offset {
			if let Some(bp) = Breakpoint::parse(name) {
				attrs.add_class(&format!("col-{}-offset-{}", bp.as_str(), amount));
			}
		}
	}
}

/// Consume the virtual `push` map and add `col-{bp}-push-{n}` classes.
///
/// A push only makes sense on a sized column, so nothing is emitted unless a
/// size map was supplied.
pub fn set_push(sizes: &SizeSpec, attrs: &mut Attrs) {
	let Some(push) = attrs.take_sizes("push") else {
		return;
	};
	if sizes.is_empty() {
		return;
	}
	for (name, &amount) in &push {
		if let Some(bp) = Breakpoint::parse(name)
			&& valid_span(amount)
		{
			attrs.add_class(&format!("col-{}-push-{}", bp.as_str(), amount));
		}
	}
}

/// Consume the virtual `pull` map and add `col-{bp}-pull-{n}` classes.
///
/// Like [`set_push`], requires a size map; a scalar `pull` (the quick-float
/// option handled by the tag renderer) is consumed and dropped here when it
/// reaches a column, matching the one-owner rule for the `pull` key.
pub fn set_column_pull(sizes: &SizeSpec, attrs: &mut Attrs) {
	let Some(pull) = attrs.take_sizes("pull") else {
		return;
	};
	if sizes.is_empty() {
		return;
	}
	for (name, &amount) in &pull {
		if let Some(bp) = Breakpoint::parse(name)
			&& valid_span(amount)
		{
			attrs.add_class(&format!("col-{}-pull-{}", bp.as_str(), amount));
		}
	}
}

/// Add `clearfix` plus `visible-{bp}` for each valid breakpoint name
pub fn set_column_reset(sizes: &[&str], attrs: &mut Attrs) {
	attrs.add_class("clearfix");
	for name in sizes {
		if Breakpoint::parse(name).is_some() {
			attrs.add_class(&format!("visible-{name}"));
		}
	}
}

/// Open a grid container; the virtual `fluid` flag selects `container-fluid`
pub fn open_container(mut attrs: Attrs) -> String {
	let class = if attrs.take_flag("fluid") {
		"container-fluid"
	} else {
		"container"
	};
	attrs.add_class(class);
	open_tag("div", attrs)
}

/// Close a grid container
pub fn close_container() -> String {
	close_tag("div")
}

/// Open a row
pub fn open_row(mut attrs: Attrs) -> String {
	attrs.add_class("row");
	open_tag("div", attrs)
}

/// Close a row
pub fn close_row() -> String {
	close_tag("div")
}

/// Open a column sized per breakpoint.
///
/// Recognized virtual options: `offset`, `push`, `pull` (breakpoint maps).
///
/// # Examples
///
/// ```
/// use bootstrap_html::{Attrs, grid};
///
/// let html = grid::open_column(&grid::sizes(&[("md", 6)]), Attrs::new());
/// assert_eq!(html, r#"<div class="col-md-6">"#);
/// assert_eq!(grid::close_column(), "</div>");
/// ```
pub fn open_column(sizes: &SizeSpec, mut attrs: Attrs) -> String {
	set_columns(sizes, &mut attrs);
	set_offset(&mut attrs);
	set_push(sizes, &mut attrs);
	set_column_pull(sizes, &mut attrs);
	open_tag("div", attrs)
}

/// Close a column
pub fn close_column() -> String {
	close_tag("div")
}

/// Render an empty div that clears floats for columns of uneven height
pub fn reset_column(sizes: &[&str], mut attrs: Attrs) -> String {
	set_column_reset(sizes, &mut attrs);
	tag("div", attrs, Some(""), true)
}

/// Render an image tag.
///
/// Recognized virtual options: `responsive` (adds `img-responsive`) and
/// `shape` (`rounded`, `circle`, or `thumbnail`, adding `img-{shape}`).
pub fn image(src: &str, mut attrs: Attrs) -> String {
	attrs.set("src", src);

	let responsive = attrs.take_flag("responsive");
	attrs.add_class_if(&[("img-responsive", responsive)]);

	if let Some(shape) = attrs.take_str("shape")
		&& ["rounded", "circle", "thumbnail"].contains(&shape.as_str())
	{
		attrs.add_class(&format!("img-{shape}"));
	}

	tag("img", attrs, None, true)
}
