//! Form builder tests

use bootstrap_html::forms::{
	SelectEntry, check_box, check_box_list, close_form, drop_down_list, input, input_group,
	input_label, open_form, open_form_group, radio_button, radio_button_list, static_control,
	text_area,
};
use bootstrap_html::{Attrs, grid};
use rstest::rstest;

#[rstest]
fn text_input_gets_form_control() {
	assert_eq!(
		input("text", "username", Attrs::new()),
		r#"<input type="text" name="username" class="form-control" />"#
	);
}

#[rstest]
#[case("checkbox")]
#[case("radio")]
#[case("file")]
fn unstyled_input_kinds(#[case] kind: &str) {
	assert_eq!(
		input(kind, "x", Attrs::new()),
		format!(r#"<input type="{kind}" name="x" />"#)
	);
}

#[rstest]
fn input_with_sizes_and_help_text_wraps_in_a_column() {
	let attrs = Attrs::new()
		.with("sizes", grid::sizes(&[("md", 6)]))
		.with("helpText", "We will never share this.");

	assert_eq!(
		input("email", "email", attrs),
		"<div class=\"col-md-6\">\
		 <input type=\"email\" name=\"email\" class=\"form-control\" />\
		 <span class=\"help-block\">We will never share this.</span></div>"
	);
}

#[rstest]
fn disabled_input_renders_literal_attribute() {
	assert_eq!(
		input("text", "q", Attrs::new().with("disabled", true)),
		r#"<input type="text" name="q" disabled="disabled" class="form-control" />"#
	);
}

#[rstest]
fn form_layout_flags() {
	assert_eq!(
		open_form(Attrs::new().with("horizontal", true)),
		r#"<form class="form-horizontal">"#
	);
	assert_eq!(
		open_form(Attrs::new().with("inline", true)),
		r#"<form class="form-inline">"#
	);
	assert_eq!(close_form(), "</form>");
}

#[rstest]
fn text_area_with_column_wrap() {
	let attrs = Attrs::new().with("sizes", grid::sizes(&[("sm", 8)]));
	assert_eq!(
		text_area("bio", "hello", attrs),
		"<div class=\"col-sm-8\">\
		 <textarea name=\"bio\" class=\"form-control\">hello</textarea></div>"
	);
}

#[rstest]
fn drop_down_list_mixes_options_and_groups() {
	let data = vec![
		SelectEntry::option("a", "Alpha"),
		SelectEntry::group("Late", [("y", "Yankee"), ("z", "Zulu")]),
	];

	assert_eq!(
		drop_down_list("letter", &["z"], &data, Attrs::new()),
		"<select name=\"letter\" class=\"form-control\">\
		 <option value=\"a\">Alpha</option>\
		 <optgroup label=\"Late\">\
		 <option value=\"y\">Yankee</option>\
		 <option value=\"z\" selected=\"selected\">Zulu</option>\
		 </optgroup></select>"
	);
}

#[rstest]
fn multiple_select_sets_literal_attribute() {
	let data = vec![SelectEntry::option("a", "A")];
	let html = drop_down_list("tags", &[], &data, Attrs::new().with("multiple", true));

	assert!(html.starts_with(r#"<select multiple="multiple" name="tags" class="form-control">"#));
}

#[rstest]
fn checkbox_end_to_end() {
	let attrs = Attrs::new().with("checked", true).with("label", "I agree");

	assert_eq!(
		check_box("agree", "1", attrs),
		"<div class=\"checkbox\"><label>\
		 <input value=\"1\" checked=\"checked\" type=\"checkbox\" name=\"agree\" />\
		 I agree</label></div>"
	);
}

#[rstest]
fn unchecked_checkbox_has_no_checked_attribute() {
	let html = check_box("agree", "1", Attrs::new().with("checked", false));
	assert!(!html.contains("checked"));
}

#[rstest]
fn inline_radio_uses_label_class() {
	let attrs = Attrs::new().with("inline", true).with("label", "Yes");

	assert_eq!(
		radio_button("answer", "y", attrs),
		"<label class=\"radio-inline\">\
		 <input value=\"y\" type=\"radio\" name=\"answer\" />Yes</label>"
	);
}

#[rstest]
fn check_box_list_generates_indexed_ids_and_bracket_names() {
	let html = check_box_list(
		"colors",
		&["red"],
		&[("red", "Red"), ("blue", "Blue")],
		Attrs::new(),
	);

	assert_eq!(
		html,
		"<div class=\"checkbox\"><label>\
		 <input id=\"colors_0\" value=\"red\" checked=\"checked\" type=\"checkbox\" name=\"colors[]\" />\
		 Red</label></div>\
		 <div class=\"checkbox\"><label>\
		 <input id=\"colors_1\" value=\"blue\" type=\"checkbox\" name=\"colors[]\" />\
		 Blue</label></div>"
	);
}

#[rstest]
fn radio_button_list_selects_at_most_one() {
	let html = radio_button_list(
		"size",
		Some("m"),
		&[("s", "Small"), ("m", "Medium")],
		Attrs::new(),
	);

	assert_eq!(html.matches("checked=\"checked\"").count(), 1);
	assert!(html.contains(r#"<input id="size_1" value="m" checked="checked" type="radio" name="size" />"#));
}

#[rstest]
fn explicit_id_overrides_the_name_as_id_base() {
	let html = radio_button_list(
		"size",
		None,
		&[("s", "Small")],
		Attrs::new().with("id", "shirt"),
	);

	assert!(html.contains(r#"id="shirt_0""#));
}

#[rstest]
fn input_label_variants() {
	assert_eq!(
		input_label("Email", Attrs::new()),
		r#"<label class="control-label">Email</label>"#
	);

	// screen-reader labels trade control-label for sr-only
	assert_eq!(
		input_label("Email", Attrs::new().with("screenReader", true)),
		r#"<label class="sr-only">Email</label>"#
	);

	// horizontal forms size the label itself
	assert_eq!(
		input_label("Email", Attrs::new().with("sizes", grid::sizes(&[("sm", 2)]))),
		r#"<label class="control-label col-sm-2">Email</label>"#
	);
}

#[rstest]
fn form_group_state() {
	assert_eq!(
		open_form_group(Attrs::new().with("state", "warning")),
		r#"<div class="form-group has-warning">"#
	);
}

#[rstest]
fn static_control_renders_paragraph() {
	assert_eq!(
		static_control("read only", Attrs::new()),
		r#"<p class="form-control-static">read only</p>"#
	);
}

#[rstest]
fn input_group_with_both_addons() {
	let attrs = Attrs::new().with("prepend", "$").with("append", ".00");

	assert_eq!(
		input_group("amount", "10", attrs),
		"<div class=\"input-group\">\
		 <span class=\"input-group-addon\">$</span>\
		 <input value=\"10\" type=\"text\" name=\"amount\" class=\"form-control\" />\
		 <span class=\"input-group-addon\">.00</span></div>"
	);
}
