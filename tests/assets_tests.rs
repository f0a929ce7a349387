//! Asset component tests: manifest branches and registry interaction

use bootstrap_html::assets::{
	AssetOverrides, AssetPackage, AssetRegistry, BootstrapAssets, ScriptPosition,
};
use rstest::rstest;

#[derive(Default)]
struct RecordingRegistry {
	packages: Vec<(String, AssetPackage)>,
	meta: Vec<(String, String)>,
	css: Vec<(String, String)>,
	scripts: Vec<(String, ScriptPosition)>,
}

impl AssetRegistry for RecordingRegistry {
	fn register_package(&mut self, name: &str, package: AssetPackage) {
		self.packages.push((name.to_string(), package));
	}

	fn register_meta_tag(&mut self, name: &str, content: &str) {
		self.meta.push((name.to_string(), content.to_string()));
	}

	fn register_css(&mut self, id: &str, css: &str) {
		self.css.push((id.to_string(), css.to_string()));
	}

	fn register_script(&mut self, id: &str, _script: &str, position: ScriptPosition) {
		self.scripts.push((id.to_string(), position));
	}
}

#[rstest]
fn cdn_package_points_at_the_public_mirrors() {
	let assets = BootstrapAssets {
		use_cdn: true,
		..BootstrapAssets::default()
	};
	let package = assets.package();

	assert_eq!(package.base_path, None);
	assert_eq!(package.base_url.as_deref(), Some("/"));
	assert_eq!(
		package.css[0],
		"//maxcdn.bootstrapcdn.com/bootstrap/3.2.0/css/bootstrap.min.css"
	);
	assert_eq!(
		package.js[0],
		"//ajax.googleapis.com/ajax/libs/jquery/1.11.0/jquery.min.js"
	);
}

#[rstest]
fn version_flows_into_cdn_urls() {
	let assets = BootstrapAssets {
		use_cdn: true,
		version: "3.3.7".to_string(),
		..BootstrapAssets::default()
	};

	assert!(assets.package().css[0].contains("/3.3.7/"));
}

#[rstest]
fn js_override_replaces_the_whole_script_list() {
	let assets = BootstrapAssets {
		overrides: Some(AssetOverrides {
			js: Some(vec!["js/custom.js".to_string()]),
			..AssetOverrides::default()
		}),
		..BootstrapAssets::default()
	};

	assert_eq!(assets.package().js, vec!["js/custom.js"]);
}

#[rstest]
fn register_publishes_package_and_fixups() {
	let mut registry = RecordingRegistry::default();
	BootstrapAssets::default().register(&mut registry);

	assert_eq!(registry.packages.len(), 1);
	assert_eq!(registry.packages[0].0, "bootstrap");

	let meta_names: Vec<&str> = registry.meta.iter().map(|(name, _)| name.as_str()).collect();
	assert_eq!(meta_names, vec!["X-UA-Compatible", "viewport"]);

	assert_eq!(
		registry.scripts,
		vec![
			("ie-viewport-js".to_string(), ScriptPosition::Head),
			("android-stock-js".to_string(), ScriptPosition::End),
		]
	);
	assert_eq!(registry.css.len(), 2);
}

#[rstest]
fn disable_zoom_hardens_the_viewport_meta() {
	let mut registry = RecordingRegistry::default();
	let assets = BootstrapAssets {
		disable_zoom: true,
		..BootstrapAssets::default()
	};
	assets.register(&mut registry);

	let viewport = registry
		.meta
		.iter()
		.find(|(name, _)| name == "viewport")
		.map(|(_, content)| content.as_str());
	assert_eq!(
		viewport,
		Some("width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no")
	);
}

#[rstest]
#[case("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)", true)]
#[case("Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.0)", true)]
#[case("Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1)", false)]
#[case("Mozilla/5.0 (Windows NT 10.0) Gecko/20100101 Firefox/40.0", false)]
fn respond_js_is_added_for_legacy_msie_only(#[case] user_agent: &str, #[case] expected: bool) {
	let mut registry = RecordingRegistry::default();
	BootstrapAssets::default().register_for_user_agent(&mut registry, Some(user_agent));

	let js = &registry.packages[0].1.js;
	assert_eq!(js.contains(&"js/respond.min.js".to_string()), expected);
	assert_eq!(js.len(), if expected { 3 } else { 2 });
}

#[rstest]
fn cdn_respond_js_uses_the_https_mirror() {
	let mut registry = RecordingRegistry::default();
	let assets = BootstrapAssets {
		use_cdn: true,
		..BootstrapAssets::default()
	};
	assets.register_for_user_agent(
		&mut registry,
		Some("Mozilla/4.0 (compatible; MSIE 7.0; Windows NT 6.0)"),
	);

	assert_eq!(
		registry.packages[0].1.js[2],
		"https://oss.maxcdn.com/libs/respond.js/1.4.2/respond.min.js"
	);
}

#[rstest]
fn config_round_trips_through_json() {
	let assets = BootstrapAssets::from_json(
		r#"{"use_cdn": false, "minified": false, "overrides": {"css": "css/slim.css"}}"#,
	)
	.unwrap();

	assert!(!assets.minified);
	assert_eq!(
		assets.package().css[0],
		"css/slim.css"
	);

	let invalid = BootstrapAssets::from_json("{not json");
	assert!(invalid.is_err());
}
