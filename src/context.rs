//! Contextual state styling
//!
//! Bootstrap reuses the same semantic palette (success, warning, danger,
//! info, primary, ...) under different class prefixes depending on where it
//! applies. Each call site resolves through [`StateContext`], which carries
//! its own allow-list and class pattern; unknown values are dropped.

use crate::attrs::Attrs;

/// Where a contextual state class is being applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateContext {
	/// Background color of any element (`bg-{value}`)
	Background,
	/// Button style (`btn-{value}`)
	Button,
	/// Form-group validation state (`has-{value}`)
	FormGroup,
	/// Inline label component (`label-{value}`)
	Label,
	/// Panel component (`panel-{value}`)
	Panel,
	/// Text color (`text-{value}`)
	Text,
	/// Table cell; the state is the bare class name
	TableCell,
	/// Table row; the state is the bare class name
	TableRow,
}

impl StateContext {
	fn allowed(self) -> &'static [&'static str] {
		match self {
			Self::Background => &["primary", "success", "info", "warning", "danger"],
			Self::Button => &[
				"default", "primary", "success", "info", "warning", "danger", "link",
			],
			Self::FormGroup => &["success", "warning", "error"],
			Self::Label | Self::Panel => {
				&["default", "primary", "success", "info", "warning", "danger"]
			}
			Self::Text => &["muted", "primary", "success", "info", "warning", "danger"],
			Self::TableCell | Self::TableRow => {
				&["active", "success", "info", "warning", "danger"]
			}
		}
	}

	fn prefix(self) -> Option<&'static str> {
		match self {
			Self::Background => Some("bg"),
			Self::Button => Some("btn"),
			Self::FormGroup => Some("has"),
			Self::Label => Some("label"),
			Self::Panel => Some("panel"),
			Self::Text => Some("text"),
			Self::TableCell | Self::TableRow => None,
		}
	}

	/// Resolve a state value to its class token, or `None` when the value is
	/// not in this context's allow-list.
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_html::StateContext;
	///
	/// assert_eq!(StateContext::Background.class_for("success"), Some("bg-success".into()));
	/// assert_eq!(StateContext::TableCell.class_for("success"), Some("success".into()));
	/// assert_eq!(StateContext::TableCell.class_for("nonsense"), None);
	/// ```
	pub fn class_for(self, value: &str) -> Option<String> {
		if !self.allowed().contains(&value) {
			return None;
		}
		Some(match self.prefix() {
			Some(prefix) => format!("{prefix}-{value}"),
			None => value.to_string(),
		})
	}
}

/// Consume the named virtual option and append the contextual class it maps
/// to. Absent options and disallowed values are skipped silently.
pub fn set_state_style(context: StateContext, option: &str, attrs: &mut Attrs) {
	if let Some(value) = attrs.take_str(option)
		&& let Some(class) = context.class_for(&value)
	{
		attrs.add_class(&class);
	}
}
