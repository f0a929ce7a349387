//! Ordered attribute maps and class composition
//!
//! Every builder in this crate is driven by an [`Attrs`] map: an ordered
//! mapping from attribute name to [`AttrValue`]. Keys fall into two groups:
//! *virtual options* (consumed by a translator before the tag is serialized,
//! e.g. `sizes`, `offset`, `buttonState`) and *pass-through attributes*
//! (copied verbatim into the rendered tag, e.g. `id`, `name`, `href`).
//!
//! The `class` attribute is cumulative: [`Attrs::add_class`] appends
//! space-separated tokens and never deduplicates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::grid::SizeSpec;

/// A single attribute or option value.
///
/// Conditional class predicates follow strict-boolean semantics: only
/// `Bool(true)` enables a class. A non-empty string is deliberately *not*
/// treated as true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
	/// Boolean flag; `true` renders as `name="name"`, `false` is omitted
	Bool(bool),
	/// Integer value
	Int(i64),
	/// String value, HTML-escaped when rendered
	Str(String),
	/// List of string tokens (e.g. visibility breakpoints, table headers)
	List(Vec<String>),
	/// Breakpoint-to-span map (e.g. `sizes`, `offset`, `push`, `pull`)
	Sizes(SizeSpec),
	/// Nested attribute map (e.g. `containerOptions`, `labelOptions`)
	Nested(Attrs),
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for AttrValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for AttrValue {
	fn from(value: i32) -> Self {
		Self::Int(value as i64)
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<Vec<String>> for AttrValue {
	fn from(value: Vec<String>) -> Self {
		Self::List(value)
	}
}

impl From<Vec<&str>> for AttrValue {
	fn from(value: Vec<&str>) -> Self {
		Self::List(value.into_iter().map(str::to_string).collect())
	}
}

impl From<SizeSpec> for AttrValue {
	fn from(value: SizeSpec) -> Self {
		Self::Sizes(value)
	}
}

impl From<Attrs> for AttrValue {
	fn from(value: Attrs) -> Self {
		Self::Nested(value)
	}
}

/// Ordered attribute map threaded through every translator and builder.
///
/// Insertion order is part of the rendering contract: attributes are
/// serialized in the order they were set.
///
/// # Examples
///
/// ```
/// use bootstrap_html::Attrs;
///
/// let mut attrs = Attrs::new().with("id", "login").with("checked", true);
/// attrs.add_class("form-control");
///
/// assert_eq!(attrs.take("id"), Some("login".into()));
/// assert_eq!(attrs.take("id"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attrs(IndexMap<String, AttrValue>);

impl Attrs {
	/// Create an empty attribute map
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of attributes in the map
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the map has no attributes
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Set an attribute, replacing any previous value under the same name
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
		self.0.insert(name.into(), value.into());
	}

	/// Chainable variant of [`set`](Self::set)
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_html::Attrs;
	///
	/// let attrs = Attrs::new().with("name", "email").with("required", true);
	/// assert_eq!(attrs.len(), 2);
	/// ```
	#[must_use]
	pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Whether the map contains the named attribute
	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	/// Read an attribute without removing it
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.0.get(name)
	}

	/// Remove and return an attribute.
	///
	/// Absence is a normal outcome, not an error: every translator treats a
	/// missing option as "feature not requested". The key is gone afterwards
	/// regardless of whether a value was found, so a repeated `take` returns
	/// `None` and leaves the map unchanged.
	pub fn take(&mut self, name: &str) -> Option<AttrValue> {
		self.0.shift_remove(name)
	}

	/// Remove a boolean option; `true` only for an exact `Bool(true)`.
	///
	/// Any other value under the name (including non-empty strings) counts as
	/// not set, preserving the strict-boolean predicate rule.
	pub fn take_flag(&mut self, name: &str) -> bool {
		matches!(self.take(name), Some(AttrValue::Bool(true)))
	}

	/// Remove a string option, dropping values of any other shape
	pub fn take_str(&mut self, name: &str) -> Option<String> {
		match self.take(name) {
			Some(AttrValue::Str(value)) => Some(value),
			_ => None,
		}
	}

	/// Remove an integer option, dropping values of any other shape
	pub fn take_int(&mut self, name: &str) -> Option<i64> {
		match self.take(name) {
			Some(AttrValue::Int(value)) => Some(value),
			_ => None,
		}
	}

	/// Remove a token-list option, dropping values of any other shape
	pub fn take_list(&mut self, name: &str) -> Option<Vec<String>> {
		match self.take(name) {
			Some(AttrValue::List(value)) => Some(value),
			_ => None,
		}
	}

	/// Remove a breakpoint-to-span map option
	pub fn take_sizes(&mut self, name: &str) -> Option<SizeSpec> {
		match self.take(name) {
			Some(AttrValue::Sizes(value)) => Some(value),
			_ => None,
		}
	}

	/// Remove a nested attribute-map option
	pub fn take_nested(&mut self, name: &str) -> Option<Attrs> {
		match self.take(name) {
			Some(AttrValue::Nested(value)) => Some(value),
			_ => None,
		}
	}

	/// Append a CSS class token to the cumulative `class` attribute.
	///
	/// Tokens are space-joined in call order and never deduplicated; adding
	/// the same token twice yields it twice.
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_html::{AttrValue, Attrs};
	///
	/// let mut attrs = Attrs::new();
	/// attrs.add_class("foo");
	/// attrs.add_class("bar");
	/// assert_eq!(attrs.get("class"), Some(&AttrValue::Str("foo bar".into())));
	/// ```
	pub fn add_class(&mut self, class: &str) {
		match self.0.get_mut("class") {
			Some(AttrValue::Str(existing)) => {
				existing.push(' ');
				existing.push_str(class);
			}
			_ => {
				self.0
					.insert("class".to_string(), AttrValue::Str(class.to_string()));
			}
		}
	}

	/// Append each class whose predicate is `true`, in slice order.
	///
	/// The explicitly named conditional companion to [`add_class`](Self::add_class).
	pub fn add_class_if(&mut self, classes: &[(&str, bool)]) {
		for (class, enabled) in classes {
			if *enabled {
				self.add_class(class);
			}
		}
	}

	/// Iterate attributes in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.0.iter().map(|(name, value)| (name.as_str(), value))
	}
}

impl FromIterator<(String, AttrValue)> for Attrs {
	fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Extend<(String, AttrValue)> for Attrs {
	fn extend<I: IntoIterator<Item = (String, AttrValue)>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl IntoIterator for Attrs {
	type Item = (String, AttrValue);
	type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
