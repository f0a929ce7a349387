//! Grid rendering tests
//!
//! Column sizing, offsets, push/pull, resets, and the container/row
//! builders, including the fail-open handling of invalid breakpoints and
//! spans.

use bootstrap_html::{Attrs, grid};
use rstest::rstest;

fn classes(attrs: &Attrs) -> Vec<String> {
	match attrs.get("class") {
		Some(bootstrap_html::AttrValue::Str(value)) => {
			value.split(' ').map(str::to_string).collect()
		}
		_ => Vec::new(),
	}
}

#[rstest]
#[case("xs", 1, "col-xs-1")]
#[case("sm", 0, "col-sm-0")]
#[case("md", 6, "col-md-6")]
#[case("lg", 12, "col-lg-12")]
fn column_class_per_valid_pair(#[case] bp: &str, #[case] span: i64, #[case] expected: &str) {
	let mut attrs = Attrs::new();
	grid::set_columns(&grid::sizes(&[(bp, span)]), &mut attrs);

	assert_eq!(classes(&attrs), vec![expected.to_string()]);
}

#[rstest]
#[case("md", 13)]
#[case("md", -1)]
#[case("xl", 6)]
#[case("print", 6)]
fn invalid_pairs_emit_no_classes(#[case] bp: &str, #[case] span: i64) {
	let mut attrs = Attrs::new();
	grid::set_columns(&grid::sizes(&[(bp, span)]), &mut attrs);

	assert!(classes(&attrs).is_empty());
}

#[rstest]
fn one_class_per_pair_in_insertion_order() {
	let mut attrs = Attrs::new();
	grid::set_columns(&grid::sizes(&[("xs", 12), ("md", 6), ("lg", 4)]), &mut attrs);

	assert_eq!(classes(&attrs), vec!["col-xs-12", "col-md-6", "col-lg-4"]);
}

#[rstest]
fn column_with_offset_end_to_end() {
	let mut html = grid::open_column(
		&grid::sizes(&[("md", 6)]),
		Attrs::new().with("offset", grid::sizes(&[("md", 3)])),
	);
	html.push_str(&grid::close_column());

	assert_eq!(html, r#"<div class="col-md-6 col-md-offset-3"></div>"#);
}

#[rstest]
fn push_and_pull_come_from_their_own_maps() {
	let html = grid::open_column(
		&grid::sizes(&[("md", 9)]),
		Attrs::new()
			.with("push", grid::sizes(&[("md", 3)]))
			.with("pull", grid::sizes(&[("md", 9)])),
	);

	assert_eq!(
		html,
		r#"<div class="col-md-9 col-md-push-3 col-md-pull-9">"#
	);
}

#[rstest]
fn offset_ignores_unknown_breakpoints() {
	let mut attrs = Attrs::new().with("offset", grid::sizes(&[("md", 3), ("xl", 2)]));
	grid::set_offset(&mut attrs);

	assert_eq!(classes(&attrs), vec!["col-md-offset-3"]);
	assert!(!attrs.contains("offset"));
}

#[rstest]
fn fluid_container() {
	assert_eq!(
		grid::open_container(Attrs::new().with("fluid", true)),
		r#"<div class="container-fluid">"#
	);
	assert_eq!(
		grid::open_container(Attrs::new()),
		r#"<div class="container">"#
	);
	assert_eq!(grid::close_container(), "</div>");
}

#[rstest]
fn row_keeps_custom_attributes() {
	assert_eq!(
		grid::open_row(Attrs::new().with("id", "header")),
		r#"<div id="header" class="row">"#
	);
}

#[rstest]
fn reset_column_keeps_only_valid_breakpoints() {
	assert_eq!(
		grid::reset_column(&["sm", "huge"], Attrs::new()),
		r#"<div class="clearfix visible-sm"></div>"#
	);
}

#[rstest]
fn responsive_image_with_shape() {
	assert_eq!(
		grid::image(
			"/logo.png",
			Attrs::new().with("responsive", true).with("shape", "circle")
		),
		r#"<img src="/logo.png" class="img-responsive img-circle" />"#
	);
}
