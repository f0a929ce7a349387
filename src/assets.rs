//! Bootstrap asset bundle registration
//!
//! [`BootstrapAssets`] builds the framework's CSS/JS manifest, either from
//! the bundled local files or from the public CDNs, and publishes it into a
//! host [`AssetRegistry`] together with the browser fixups the framework
//! ships (IE rendering mode, viewport quirks, the Android stock-browser
//! select workaround).

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default local directory the bundled assets are published from
pub const DEFAULT_BASE_PATH: &str = "bootstrap/assets";

static LEGACY_MSIE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"MSIE [1-8]\.").expect("LEGACY_MSIE: invalid regex pattern")
});

const IE_VIEWPORT_CSS: &str = "@-webkit-viewport{width: device-width;}@-moz-viewport{width:device-width;}@-ms-viewport{width:device-width;}@-o-viewport{width:device-width;}@viewport{width:device-width;}";
const IE_VIEWPORT_JS: &str = "if(navigator.userAgent.match(/IEMobile\\/10\\.0/)){var msViewportStyle = document.createElement('style');msViewportStyle.appendChild(document.createTextNode('@-ms-viewport{width:auto!important}'));document.querySelector('head').appendChild(msViewportStyle);}";
const ANDROID_STOCK_JS: &str = "var nua = navigator.userAgent;var isAndroid = (nua.indexOf(\"Mozilla/5.0\") > -1 && nua.indexOf(\"Android \") > -1 && nua.indexOf(\"AppleWebKit\") > -1 && nua.indexOf(\"Chrome\") === -1);if(isAndroid){$(\"select.form-control\").removeClass(\"form-control\").css(\"width\", \"100%\");}";
const FIREFOX_FIELDSET_CSS: &str =
	"@-moz-document url-prefix(){fieldset { display: table-cell; }}";

/// Where a registered script is injected into the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptPosition {
	/// Inside `<head>`
	Head,
	/// Just before `</body>`
	End,
}

/// The CSS/JS manifest handed to the host's asset pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPackage {
	/// Local directory to publish from; `None` when served off a CDN
	pub base_path: Option<String>,
	/// URL prefix for the entries; `None` when published locally
	pub base_url: Option<String>,
	/// Stylesheet entries, framework first then theme
	pub css: Vec<String>,
	/// Script entries in load order
	pub js: Vec<String>,
}

/// Host collaborator that receives the package and page-level fixups
pub trait AssetRegistry {
	/// Register a named asset package for publication
	fn register_package(&mut self, name: &str, package: AssetPackage);
	/// Register an HTTP-equiv/meta tag
	fn register_meta_tag(&mut self, name: &str, content: &str);
	/// Register an inline CSS block under a unique id
	fn register_css(&mut self, id: &str, css: &str);
	/// Register an inline script under a unique id
	fn register_script(&mut self, id: &str, script: &str, position: ScriptPosition);
}

/// Per-asset path overrides for serving custom builds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetOverrides {
	/// Replaces the local publication directory
	pub base_path: Option<String>,
	/// Replaces the CDN URL prefix
	pub base_url: Option<String>,
	/// Path to the framework stylesheet
	pub css: Option<String>,
	/// Path to the theme stylesheet
	pub theme: Option<String>,
	/// Script paths, replacing both jQuery and the framework script
	pub js: Option<Vec<String>>,
}

/// Error parsing an asset component configuration
#[derive(Debug, thiserror::Error)]
pub enum AssetConfigError {
	#[error("invalid asset configuration: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Configuration of the Bootstrap asset component.
///
/// # Examples
///
/// ```
/// use bootstrap_html::assets::BootstrapAssets;
///
/// let assets = BootstrapAssets {
///     use_cdn: true,
///     ..BootstrapAssets::default()
/// };
/// let package = assets.package();
/// assert!(package.base_path.is_none());
/// assert!(package.css[0].contains("maxcdn.bootstrapcdn.com/bootstrap/3.2.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapAssets {
	/// Serve from the public CDNs instead of the bundled files
	pub use_cdn: bool,
	/// Bootstrap framework version
	pub version: String,
	/// Respond.js version (media-query polyfill for legacy IE)
	pub respond_js_version: String,
	/// jQuery version
	pub jquery_version: String,
	/// Use the minified builds
	pub minified: bool,
	/// Disable touch zooming on mobile devices via the viewport meta tag
	pub disable_zoom: bool,
	/// Optional per-asset path overrides
	pub overrides: Option<AssetOverrides>,
}

impl Default for BootstrapAssets {
	fn default() -> Self {
		Self {
			use_cdn: false,
			version: "3.2.0".to_string(),
			respond_js_version: "1.4.2".to_string(),
			jquery_version: "1.11.0".to_string(),
			minified: true,
			disable_zoom: false,
			overrides: None,
		}
	}
}

impl BootstrapAssets {
	/// Parse a configuration from JSON
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_html::assets::BootstrapAssets;
	///
	/// let assets = BootstrapAssets::from_json(r#"{"use_cdn": true, "version": "3.3.7"}"#).unwrap();
	/// assert!(assets.use_cdn);
	/// assert_eq!(assets.version, "3.3.7");
	/// ```
	pub fn from_json(json: &str) -> Result<Self, AssetConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	fn min_infix(&self) -> &'static str {
		if self.minified { ".min" } else { "" }
	}

	/// Build the asset manifest through the CDN or local branch, honoring
	/// any configured overrides.
	pub fn package(&self) -> AssetPackage {
		let min = self.min_infix();
		let overrides = self.overrides.clone().unwrap_or_default();

		let (default_css, default_theme, default_js) = if self.use_cdn {
			(
				format!(
					"//maxcdn.bootstrapcdn.com/bootstrap/{}/css/bootstrap{min}.css",
					self.version
				),
				format!(
					"//maxcdn.bootstrapcdn.com/bootstrap/{}/css/bootstrap-theme{min}.css",
					self.version
				),
				vec![
					format!(
						"//ajax.googleapis.com/ajax/libs/jquery/{}/jquery.min.js",
						self.jquery_version
					),
					format!(
						"//maxcdn.bootstrapcdn.com/bootstrap/{}/js/bootstrap{min}.js",
						self.version
					),
				],
			)
		} else {
			(
				format!("css/bootstrap{min}.css"),
				format!("css/bootstrap-theme{min}.css"),
				vec![
					"js/jquery.min.js".to_string(),
					format!("js/bootstrap{min}.js"),
				],
			)
		};

		let (base_path, base_url) = if self.use_cdn {
			(None, Some(overrides.base_url.unwrap_or_else(|| "/".to_string())))
		} else {
			(
				Some(
					overrides
						.base_path
						.unwrap_or_else(|| DEFAULT_BASE_PATH.to_string()),
				),
				None,
			)
		};

		AssetPackage {
			base_path,
			base_url,
			css: vec![
				overrides.css.unwrap_or(default_css),
				overrides.theme.unwrap_or(default_theme),
			],
			js: overrides.js.unwrap_or(default_js),
		}
	}

	fn respond_js(&self) -> String {
		if self.use_cdn {
			format!(
				"https://oss.maxcdn.com/libs/respond.js/{}/respond.min.js",
				self.respond_js_version
			)
		} else {
			"js/respond.min.js".to_string()
		}
	}

	/// Register the package and page fixups with the host registry
	pub fn register(&self, registry: &mut dyn AssetRegistry) {
		self.register_for_user_agent(registry, None);
	}

	/// Like [`register`](Self::register), additionally appending the
	/// respond.js media-query polyfill when the user agent is MSIE 1-8
	pub fn register_for_user_agent(
		&self,
		registry: &mut dyn AssetRegistry,
		user_agent: Option<&str>,
	) {
		let mut package = self.package();

		if let Some(ua) = user_agent
			&& LEGACY_MSIE.is_match(ua)
		{
			tracing::debug!(user_agent = ua, "legacy MSIE detected, adding respond.js");
			package.js.push(self.respond_js());
		}

		tracing::debug!(
			use_cdn = self.use_cdn,
			version = %self.version,
			minified = self.minified,
			"registering bootstrap asset package"
		);
		registry.register_package("bootstrap", package);

		// Force the latest rendering mode in IE
		registry.register_meta_tag("X-UA-Compatible", "IE=edge");

		// Media queries fix for IE10 on Windows 8 and Windows Phone 8 pre-GDR3
		registry.register_css("ie-viewport-css", IE_VIEWPORT_CSS);
		registry.register_script("ie-viewport-js", IE_VIEWPORT_JS, ScriptPosition::Head);

		// Android stock browser select workaround
		registry.register_script("android-stock-js", ANDROID_STOCK_JS, ScriptPosition::End);

		let viewport = if self.disable_zoom {
			"width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no"
		} else {
			"width=device-width, initial-scale=1"
		};
		registry.register_meta_tag("viewport", viewport);

		// Firefox renders fieldsets inside responsive tables at full width
		registry.register_css("firefox-fieldset-responsive-table", FIREFOX_FIELDSET_CSS);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn local_package_uses_bundled_paths() {
		let package = BootstrapAssets::default().package();

		assert_eq!(package.base_path.as_deref(), Some(DEFAULT_BASE_PATH));
		assert_eq!(package.base_url, None);
		assert_eq!(
			package.css,
			vec!["css/bootstrap.min.css", "css/bootstrap-theme.min.css"]
		);
		assert_eq!(
			package.js,
			vec!["js/jquery.min.js", "js/bootstrap.min.js"]
		);
	}

	#[test]
	fn unminified_builds_drop_the_min_infix() {
		let assets = BootstrapAssets {
			minified: false,
			..BootstrapAssets::default()
		};
		let package = assets.package();

		assert_eq!(
			package.css,
			vec!["css/bootstrap.css", "css/bootstrap-theme.css"]
		);
		assert_eq!(package.js[1], "js/bootstrap.js");
	}

	#[test]
	fn overrides_replace_individual_entries() {
		let assets = BootstrapAssets {
			overrides: Some(AssetOverrides {
				theme: Some("css/custom-theme.css".to_string()),
				..AssetOverrides::default()
			}),
			..BootstrapAssets::default()
		};
		let package = assets.package();

		assert_eq!(package.css[0], "css/bootstrap.min.css");
		assert_eq!(package.css[1], "css/custom-theme.css");
	}

	#[test]
	fn legacy_msie_pattern() {
		assert!(LEGACY_MSIE.is_match(
			"Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.0)"
		));
		assert!(!LEGACY_MSIE.is_match(
			"Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1)"
		));
	}
}
