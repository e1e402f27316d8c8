//! Works out which import aliases (`@/...`, `~/...`) the bundler should
//! resolve, from the build config, `tsconfig.json` or the directory layout.

mod convention;
mod tsconfig;

use std::path::Path;

use gaspack_common::{AliasMap, BundlerConfig, NormalizedGasPluginOptions};
use gaspack_fs::FileSystem;
use itertools::Itertools;

pub use self::{
  convention::detect_by_convention,
  tsconfig::{detect_from_project_config, TSCONFIG_FILE},
};

/// Aliases the build config already declares.
pub fn detect_from_build_config(config: &BundlerConfig) -> AliasMap {
  config.resolve.alias.clone().unwrap_or_default()
}

/// Merges the alias sources. Aliases from `config` always win, `tsconfig.json`
/// only fills in missing keys, and the directory conventions are consulted
/// only when neither produced anything.
pub fn auto_detect(fs: &dyn FileSystem, root: &Path, config: Option<&BundlerConfig>) -> AliasMap {
  let mut aliases = config.map(detect_from_build_config).unwrap_or_default();

  for (alias, target) in detect_from_project_config(fs, root) {
    aliases.entry(alias).or_insert(target);
  }

  if aliases.is_empty() {
    aliases = detect_by_convention(fs, root);
  }

  tracing::info!(
    "Auto-detected path aliases: {{{}}}",
    aliases.iter().map(|(alias, target)| format!("{alias} -> {target}")).join(", ")
  );

  aliases
}

/// The aliases to hand to the bundler, or `None` when alias support is off.
/// Falls back to the configured `pathAliases` when detection is disabled or
/// finds nothing.
pub fn resolve_path_aliases(
  fs: &dyn FileSystem,
  root: &Path,
  config: &BundlerConfig,
  options: &NormalizedGasPluginOptions,
) -> Option<AliasMap> {
  if !options.enable_path_aliases {
    return None;
  }

  let detected =
    if options.auto_detect_path_aliases { auto_detect(fs, root, Some(config)) } else { AliasMap::default() };

  if detected.is_empty() {
    Some(options.path_aliases.clone())
  } else {
    Some(detected)
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use gaspack_common::{AliasMap, BundlerConfig, GasPluginOptions};
  use gaspack_fs::OsFileSystem;

  use super::{auto_detect, resolve_path_aliases, TSCONFIG_FILE};
  use crate::utils::normalize_options::normalize_options;

  fn alias_map(pairs: &[(&str, &str)]) -> AliasMap {
    pairs.iter().map(|(alias, target)| ((*alias).to_string(), (*target).to_string())).collect()
  }

  #[test]
  fn test_build_config_wins_over_tsconfig() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
      dir.path().join(TSCONFIG_FILE),
      r#"{ "compilerOptions": { "paths": { "~/*": ["src/*"], "@/*": ["src/*"] } } }"#,
    )
    .unwrap();

    let mut config = BundlerConfig::default();
    config.resolve.alias = Some(alias_map(&[("~", "./app")]));

    let aliases = auto_detect(&OsFileSystem, dir.path(), Some(&config));
    assert_eq!(aliases, alias_map(&[("~", "./app"), ("@", "./src")]));
  }

  #[test]
  fn test_conventions_only_when_nothing_else() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();

    let aliases = auto_detect(&OsFileSystem, dir.path(), None);
    assert_eq!(aliases, alias_map(&[("@", "./src"), ("~", "./src")]));

    let mut config = BundlerConfig::default();
    config.resolve.alias = Some(alias_map(&[("#", "./lib")]));
    let aliases = auto_detect(&OsFileSystem, dir.path(), Some(&config));
    assert_eq!(aliases, alias_map(&[("#", "./lib")]));
  }

  #[test]
  fn test_resolve_path_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let config = BundlerConfig::default();

    let disabled = normalize_options(GasPluginOptions { enable_path_aliases: Some(false), ..Default::default() });
    assert_eq!(resolve_path_aliases(&OsFileSystem, dir.path(), &config, &disabled), None);

    // Nothing to detect in an empty directory, so the configured aliases apply.
    let fallback = normalize_options(GasPluginOptions {
      path_aliases: Some(alias_map(&[("$", "./scripts")])),
      ..Default::default()
    });
    assert_eq!(
      resolve_path_aliases(&OsFileSystem, dir.path(), &config, &fallback),
      Some(alias_map(&[("$", "./scripts")]))
    );

    fs::create_dir_all(dir.path().join("app")).unwrap();
    let detected = normalize_options(GasPluginOptions::default());
    assert_eq!(
      resolve_path_aliases(&OsFileSystem, dir.path(), &config, &detected),
      Some(alias_map(&[("@", "./app"), ("~", "./app")]))
    );

    let manual = normalize_options(GasPluginOptions {
      auto_detect_path_aliases: Some(false),
      ..Default::default()
    });
    assert_eq!(
      resolve_path_aliases(&OsFileSystem, dir.path(), &config, &manual),
      Some(alias_map(&[("@", "./src"), ("~", "./src")]))
    );
  }
}
