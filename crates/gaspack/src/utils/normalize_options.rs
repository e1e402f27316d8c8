use gaspack_common::{AliasMap, GasPluginOptions, NormalizedGasPluginOptions};

pub const DEFAULT_INCLUDE: [&str; 1] = ["src"];
pub const DEFAULT_EXCLUDE: [&str; 3] = ["**/*.d.ts", "**/*.test.ts", "**/*.spec.ts"];
pub const DEFAULT_OUT_DIR: &str = "dist";

fn default_path_aliases() -> AliasMap {
  [("@", "./src"), ("~", "./src")]
    .into_iter()
    .map(|(alias, target)| (alias.to_string(), target.to_string()))
    .collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
  items.iter().map(ToString::to_string).collect()
}

pub fn normalize_options(raw_options: GasPluginOptions) -> NormalizedGasPluginOptions {
  NormalizedGasPluginOptions {
    auto_detect: raw_options.auto_detect.unwrap_or(true),
    include: raw_options.include.unwrap_or_else(|| to_strings(&DEFAULT_INCLUDE)),
    exclude: raw_options.exclude.unwrap_or_else(|| to_strings(&DEFAULT_EXCLUDE)),
    out_dir: raw_options.out_dir.unwrap_or_else(|| DEFAULT_OUT_DIR.to_string()),
    copy_manifest: raw_options.copy_manifest.unwrap_or(true),
    transform_logger: raw_options.transform_logger.unwrap_or(true),
    preserve_comments: raw_options.preserve_comments.unwrap_or(false),
    enable_path_aliases: raw_options.enable_path_aliases.unwrap_or(true),
    auto_detect_path_aliases: raw_options.auto_detect_path_aliases.unwrap_or(true),
    path_aliases: raw_options.path_aliases.unwrap_or_else(default_path_aliases),
  }
}

#[test]
fn test_defaults() {
  let options = normalize_options(GasPluginOptions::default());

  assert!(options.auto_detect);
  assert_eq!(options.include, ["src"]);
  assert_eq!(options.exclude, ["**/*.d.ts", "**/*.test.ts", "**/*.spec.ts"]);
  assert_eq!(options.out_dir, "dist");
  assert!(options.copy_manifest && options.transform_logger);
  assert!(!options.preserve_comments);
  assert!(options.enable_path_aliases && options.auto_detect_path_aliases);
  assert_eq!(options.path_aliases.get("@").map(String::as_str), Some("./src"));
  assert_eq!(options.path_aliases.get("~").map(String::as_str), Some("./src"));
}

#[test]
fn test_explicit_values_win() {
  let options = normalize_options(GasPluginOptions {
    include: Some(vec!["app".to_string(), "lib".to_string()]),
    exclude: Some(vec![]),
    out_dir: Some("build".to_string()),
    transform_logger: Some(false),
    ..Default::default()
  });

  assert_eq!(options.include, ["app", "lib"]);
  assert!(options.exclude.is_empty());
  assert_eq!(options.out_dir, "build");
  assert!(!options.transform_logger);
}
