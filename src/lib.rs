//! Bootstrap 3 markup helpers
//!
//! This crate generates HTML fragments styled for the Bootstrap framework:
//! - Responsive grid: containers, rows, columns, offsets, push/pull, resets
//! - Typography: headings, quotes, lists, code
//! - Tables with contextual row/cell states
//! - Forms: inputs, selects, checkboxes, radio buttons, input groups
//! - Buttons, button groups, and toolbars
//! - Components: navs, breadcrumbs, badges, labels, panels, thumbnails,
//!   modals, carousels
//! - Asset bundle registration into a host asset pipeline
//!
//! Every builder is a stateless function over an [`Attrs`] map: virtual
//! options configure the rendering and are consumed before serialization,
//! everything else passes through as literal attributes. Invalid or missing
//! options degrade to default rendering instead of failing; the engine
//! never returns an error.
//!
//! # Examples
//!
//! ```
//! use bootstrap_html::{Attrs, grid};
//!
//! let mut html = grid::open_column(
//!     &grid::sizes(&[("md", 6)]),
//!     Attrs::new().with("offset", grid::sizes(&[("md", 3)])),
//! );
//! html.push_str("content");
//! html.push_str(&grid::close_column());
//!
//! assert_eq!(html, r#"<div class="col-md-6 col-md-offset-3">content</div>"#);
//! ```

pub mod assets;
pub mod attrs;
pub mod buttons;
pub mod components;
pub mod context;
pub mod forms;
pub mod grid;
pub mod html;
pub mod table;
pub mod tag;
pub mod typography;

pub use attrs::{AttrValue, Attrs};
pub use context::StateContext;
pub use grid::{Breakpoint, SizeSpec};
pub use tag::{close_tag, open_tag, tag};
