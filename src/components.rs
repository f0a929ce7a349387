//! Navigation and widget builders: navs, breadcrumbs, badges, labels,
//! panels, thumbnails, modals, and carousels
//!
//! Each builder is a fixed recipe over the tag renderer; only the markup
//! skeleton is produced here, client-side behavior (modal show/hide,
//! carousel autoplay) belongs to the framework's JavaScript.

use crate::attrs::{AttrValue, Attrs};
use crate::buttons::{close_button, glyph};
use crate::context::{StateContext, set_state_style};
use crate::grid;
use crate::tag::{close_tag, open_tag, tag};

/// Style of a navigation list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKind {
	/// Tabbed navigation (`nav-tabs`)
	Tabs,
	/// Pill navigation (`nav-pills`)
	Pills,
}

impl NavKind {
	fn class(self) -> &'static str {
		match self {
			Self::Tabs => "nav-tabs",
			Self::Pills => "nav-pills",
		}
	}
}

/// One entry of a nav
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
	/// Link text
	pub label: String,
	/// Link target
	pub href: String,
	/// Whether this entry is the active one
	pub active: bool,
}

impl NavItem {
	/// A nav entry pointing at `href`
	pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			href: href.into(),
			active: false,
		}
	}

	/// Mark this entry active
	#[must_use]
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}
}

/// Render a tab or pill navigation list.
///
/// Virtual options: `justified` and `stacked`.
///
/// # Examples
///
/// ```
/// use bootstrap_html::{Attrs, components::{NavItem, NavKind, nav}};
///
/// let html = nav(NavKind::Tabs, &[NavItem::new("Home", "/").active()], Attrs::new());
/// assert_eq!(
///     html,
///     r#"<ul class="nav nav-tabs"><li class="active"><a href="/">Home</a></li></ul>"#
/// );
/// ```
pub fn nav(kind: NavKind, items: &[NavItem], mut attrs: Attrs) -> String {
	attrs.add_class("nav");
	attrs.add_class(kind.class());

	let justified = attrs.take_flag("justified");
	let stacked = attrs.take_flag("stacked");
	attrs.add_class_if(&[("nav-justified", justified), ("nav-stacked", stacked)]);

	let mut render = open_tag("ul", attrs);
	for item in items {
		let mut li = Attrs::new();
		li.add_class_if(&[("active", item.active)]);
		render.push_str(&open_tag("li", li));
		render.push_str(&tag(
			"a",
			Attrs::new().with("href", item.href.clone()),
			Some(&item.label),
			true,
		));
		render.push_str(&close_tag("li"));
	}
	render.push_str(&close_tag("ul"));
	render
}

/// Render a breadcrumb trail: (label, href) links followed by the active
/// (current) entry as plain text
pub fn breadcrumb(links: &[(&str, &str)], active: &str, mut attrs: Attrs) -> String {
	attrs.add_class("breadcrumb");

	let mut render = open_tag("ol", attrs);
	for (label, href) in links {
		render.push_str(&open_tag("li", Attrs::new()));
		render.push_str(&tag(
			"a",
			Attrs::new().with("href", *href),
			Some(label),
			true,
		));
		render.push_str(&close_tag("li"));
	}
	render.push_str(&tag(
		"li",
		Attrs::new().with("class", "active"),
		Some(active),
		true,
	));
	render.push_str(&close_tag("ol"));
	render
}

/// Render a notification badge
pub fn badge(content: &str, mut attrs: Attrs) -> String {
	attrs.add_class("badge");
	tag("span", attrs, Some(content), true)
}

/// Render an inline label.
///
/// The virtual `labelState` option selects the contextual variant
/// (`default` when absent); a disallowed value leaves only the base class.
pub fn label(content: &str, mut attrs: Attrs) -> String {
	attrs.add_class("label");

	let state = attrs
		.take_str("labelState")
		.unwrap_or_else(|| "default".to_string());
	if let Some(class) = StateContext::Label.class_for(&state) {
		attrs.add_class(&class);
	}

	tag("span", attrs, Some(content), true)
}

/// Render a panel around the given body content.
///
/// Virtual options: `state` (contextual `panel-{state}`, `default` when
/// absent), `title` (heading with an `h3.panel-title`), `heading` (raw
/// heading content, used when no `title` is given), and `footer`.
pub fn panel(content: &str, mut attrs: Attrs) -> String {
	attrs.add_class("panel");

	let state = attrs
		.take_str("state")
		.unwrap_or_else(|| "default".to_string());
	if let Some(class) = StateContext::Panel.class_for(&state) {
		attrs.add_class(&class);
	}

	let title = attrs.take_str("title");
	let heading = attrs.take_str("heading");
	let footer = attrs.take_str("footer");

	let mut render = open_tag("div", attrs);

	let heading_body = match (title, heading) {
		(Some(title), _) => Some(tag(
			"h3",
			Attrs::new().with("class", "panel-title"),
			Some(&title),
			true,
		)),
		(None, Some(heading)) => Some(heading),
		(None, None) => None,
	};
	if let Some(heading_body) = heading_body {
		render.push_str(&tag(
			"div",
			Attrs::new().with("class", "panel-heading"),
			Some(&heading_body),
			true,
		));
	}

	render.push_str(&tag(
		"div",
		Attrs::new().with("class", "panel-body"),
		Some(content),
		true,
	));

	if let Some(footer) = footer {
		render.push_str(&tag(
			"div",
			Attrs::new().with("class", "panel-footer"),
			Some(&footer),
			true,
		));
	}

	render.push_str(&close_tag("div"));
	render
}

/// Render a thumbnail around an image.
///
/// Virtual options: `caption` (raw markup in a `div.caption`),
/// `imageOptions` (attributes for the inner image, see [`grid::image`]),
/// and `sizes`/`offset` for a grid-column wrap.
pub fn thumbnail(src: &str, mut attrs: Attrs) -> String {
	let sizes = attrs.take_sizes("sizes");
	let offset = attrs.take("offset");
	let caption = attrs.take_str("caption");
	let image_attrs = attrs.take_nested("imageOptions").unwrap_or_default();

	attrs.add_class("thumbnail");

	let mut render = String::new();
	if let Some(sizes) = &sizes {
		let mut column = Attrs::new();
		if let Some(offset) = offset {
			column.set("offset", offset);
		}
		render.push_str(&grid::open_column(sizes, column));
	}

	render.push_str(&open_tag("div", attrs));
	render.push_str(&grid::image(src, image_attrs));
	if let Some(caption) = caption {
		render.push_str(&tag(
			"div",
			Attrs::new().with("class", "caption"),
			Some(&caption),
			true,
		));
	}
	render.push_str(&close_tag("div"));

	if sizes.is_some() {
		render.push_str(&grid::close_column());
	}
	render
}

/// Render a modal dialog skeleton.
///
/// Virtual options: `fade` (transition, on unless set to `false`), `size`
/// (`lg` or `sm` on the dialog), and `footer` (raw markup in
/// `.modal-footer`). The dialog carries `tabindex="-1"`, `role="dialog"`,
/// and is labelled by the generated `{id}_label` title.
pub fn modal(id: &str, title: &str, body: &str, mut attrs: Attrs) -> String {
	let fade = !matches!(attrs.take("fade"), Some(AttrValue::Bool(false)));
	let size = attrs.take_str("size");
	let footer = attrs.take_str("footer");

	attrs.set("id", id);
	attrs.add_class("modal");
	attrs.add_class_if(&[("fade", fade)]);
	attrs.set("tabindex", "-1");
	attrs.set("role", "dialog");
	attrs.set("aria-labelledby", format!("{id}_label"));

	let mut dialog = Attrs::new().with("class", "modal-dialog");
	if let Some(size) = size
		&& ["lg", "sm"].contains(&size.as_str())
	{
		dialog.add_class(&format!("modal-{size}"));
	}

	let mut render = open_tag("div", attrs);
	render.push_str(&open_tag("div", dialog));
	render.push_str(&open_tag(
		"div",
		Attrs::new().with("class", "modal-content"),
	));

	render.push_str(&open_tag(
		"div",
		Attrs::new().with("class", "modal-header"),
	));
	render.push_str(&close_button(Attrs::new().with("data-dismiss", "modal")));
	render.push_str(&tag(
		"h4",
		Attrs::new()
			.with("class", "modal-title")
			.with("id", format!("{id}_label")),
		Some(title),
		true,
	));
	render.push_str(&close_tag("div"));

	render.push_str(&tag(
		"div",
		Attrs::new().with("class", "modal-body"),
		Some(body),
		true,
	));

	if let Some(footer) = footer {
		render.push_str(&tag(
			"div",
			Attrs::new().with("class", "modal-footer"),
			Some(&footer),
			true,
		));
	}

	render.push_str(&close_tag("div"));
	render.push_str(&close_tag("div"));
	render.push_str(&close_tag("div"));
	render
}

/// One slide of a carousel
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSlide {
	/// Image source
	pub src: String,
	/// Optional caption markup
	pub caption: Option<String>,
}

impl CarouselSlide {
	/// A slide showing the image at `src`
	pub fn new(src: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			caption: None,
		}
	}

	/// Attach caption markup to the slide
	#[must_use]
	pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
		self.caption = Some(caption.into());
		self
	}
}

/// Render a carousel skeleton; the first slide is active.
///
/// Virtual options: `indicators` and `controls` (both on unless set to
/// `false`) and `interval` (milliseconds between slides, as
/// `data-interval`).
pub fn carousel(id: &str, slides: &[CarouselSlide], mut attrs: Attrs) -> String {
	let indicators = !matches!(attrs.take("indicators"), Some(AttrValue::Bool(false)));
	let controls = !matches!(attrs.take("controls"), Some(AttrValue::Bool(false)));
	let interval = attrs.take_int("interval");

	attrs.set("id", id);
	attrs.add_class("carousel");
	attrs.add_class("slide");
	attrs.set("data-ride", "carousel");
	if let Some(interval) = interval {
		attrs.set("data-interval", interval);
	}

	let target = format!("#{id}");

	let mut render = open_tag("div", attrs);

	if indicators {
		render.push_str(&open_tag(
			"ol",
			Attrs::new().with("class", "carousel-indicators"),
		));
		for index in 0..slides.len() {
			let mut li = Attrs::new()
				.with("data-target", target.clone())
				.with("data-slide-to", index as i64);
			li.add_class_if(&[("active", index == 0)]);
			render.push_str(&tag("li", li, Some(""), true));
		}
		render.push_str(&close_tag("ol"));
	}

	render.push_str(&open_tag(
		"div",
		Attrs::new()
			.with("class", "carousel-inner")
			.with("role", "listbox"),
	));
	for (index, slide) in slides.iter().enumerate() {
		let mut item = Attrs::new().with("class", "item");
		item.add_class_if(&[("active", index == 0)]);
		render.push_str(&open_tag("div", item));
		render.push_str(&grid::image(&slide.src, Attrs::new()));
		if let Some(caption) = &slide.caption {
			render.push_str(&tag(
				"div",
				Attrs::new().with("class", "carousel-caption"),
				Some(caption),
				true,
			));
		}
		render.push_str(&close_tag("div"));
	}
	render.push_str(&close_tag("div"));

	if controls {
		render.push_str(&carousel_control(&target, "left", "prev", "Previous"));
		render.push_str(&carousel_control(&target, "right", "next", "Next"));
	}

	render.push_str(&close_tag("div"));
	render
}

fn carousel_control(target: &str, side: &str, slide: &str, reader_text: &str) -> String {
	let attrs = Attrs::new()
		.with("class", format!("{side} carousel-control"))
		.with("href", target)
		.with("role", "button")
		.with("data-slide", slide);

	let mut body = glyph(&format!("chevron-{side}"));
	body.push_str(&tag(
		"span",
		Attrs::new().with("class", "sr-only"),
		Some(reader_text),
		true,
	));

	tag("a", attrs, Some(&body), true)
}
