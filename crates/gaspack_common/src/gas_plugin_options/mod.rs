pub mod normalized_gas_plugin_options;

use serde::Deserialize;

use crate::AliasMap;

/// User-facing options of the GAS plugin. Every field is optional and is
/// defaulted independently of the others.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GasPluginOptions {
  /// Scan `include` for source files and turn them into entries.
  pub auto_detect: Option<bool>,
  /// Directories searched for source files. The first one is the base that
  /// entry names are derived from.
  pub include: Option<Vec<String>>,
  /// Glob patterns excluded from discovery, on top of the built-in ones.
  pub exclude: Option<Vec<String>>,
  pub out_dir: Option<String>,
  /// Rewrite `console.log/warn/error` calls to the host logger.
  pub transform_logger: Option<bool>,
  /// Copy the host manifest (`appsscript.json`) next to the build output.
  #[serde(alias = "copyAppsscriptJson")]
  pub copy_manifest: Option<bool>,
  pub enable_path_aliases: Option<bool>,
  pub auto_detect_path_aliases: Option<bool>,
  /// Used when alias detection is off or finds nothing.
  pub path_aliases: Option<AliasMap>,
  /// Ask the compiler to keep comments and skip every minification pass.
  pub preserve_comments: Option<bool>,
}

#[test]
fn test_deserialize_camel_case() {
  let options: GasPluginOptions = serde_json::from_str(
    r##"{ "autoDetect": false, "include": ["app"], "copyAppsscriptJson": false, "pathAliases": { "#": "./app" } }"##,
  )
  .unwrap();

  assert_eq!(options.auto_detect, Some(false));
  assert_eq!(options.include, Some(vec!["app".to_string()]));
  assert_eq!(options.copy_manifest, Some(false));
  assert_eq!(options.path_aliases.unwrap().get("#").map(String::as_str), Some("./app"));
  assert!(options.transform_logger.is_none());
}
