use std::path::Path;

use gaspack_common::AliasMap;
use gaspack_fs::FileSystem;
use gaspack_utils::{
  indexmap::FxIndexMap,
  path_ext::PathExt,
  strip_comments::{strip_comments, strip_trailing_commas},
};
use serde::Deserialize;

pub const TSCONFIG_FILE: &str = "tsconfig.json";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsConfig {
  #[serde(default)]
  compiler_options: TsCompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsCompilerOptions {
  base_url: Option<String>,
  // Values stay untyped so one malformed mapping does not discard the others.
  #[serde(default)]
  paths: FxIndexMap<String, serde_json::Value>,
}

/// Reads `compilerOptions.paths` from the project's `tsconfig.json` into an
/// alias map, e.g. `"@/*": ["src/*"]` becomes `"@" -> "./src"`. Comments and
/// trailing commas are accepted. A missing or unparsable file gives an empty
/// map.
pub fn detect_from_project_config(fs: &dyn FileSystem, root: &Path) -> AliasMap {
  let path = root.join(TSCONFIG_FILE);
  let content = match fs.read_to_string(&path) {
    Ok(content) => content,
    Err(err) => {
      tracing::debug!("No path aliases from {}: {err}", path.display());
      return AliasMap::default();
    }
  };

  let json = strip_trailing_commas(&strip_comments(&content));
  let tsconfig = match serde_json::from_str::<TsConfig>(&json) {
    Ok(tsconfig) => tsconfig,
    Err(err) => {
      tracing::debug!("Could not parse {} for path aliases: {err}", path.display());
      return AliasMap::default();
    }
  };

  let base_url = tsconfig.compiler_options.base_url.as_deref().unwrap_or(".");
  tsconfig
    .compiler_options
    .paths
    .iter()
    .filter_map(|(pattern, targets)| {
      let target = targets.as_array()?.first()?.as_str()?;
      let key = pattern.strip_suffix("/*").unwrap_or(pattern);
      Some((key.to_string(), alias_target(base_url, target)))
    })
    .collect()
}

/// `base_url`-relative mapping target -> root-relative alias directory.
fn alias_target(base_url: &str, target: &str) -> String {
  let target = target.strip_suffix("/*").unwrap_or(target);
  let target = if target == "*" { "" } else { target };
  if Path::new(target).is_absolute() {
    return target.to_string();
  }

  let resolved = Path::new(base_url).join(target).lexical_normalize();
  let resolved = resolved.to_slash_string();
  if resolved.is_empty() {
    "./".to_string()
  } else if resolved.starts_with('/') || resolved.starts_with("../") || resolved == ".." {
    resolved
  } else {
    format!("./{resolved}")
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use gaspack_fs::OsFileSystem;

  use super::{alias_target, detect_from_project_config, TSCONFIG_FILE};

  #[test]
  fn test_alias_target() {
    assert_eq!(alias_target(".", "src/*"), "./src");
    assert_eq!(alias_target(".", "./src/*"), "./src");
    assert_eq!(alias_target(".", "*"), "./");
    assert_eq!(alias_target("src", "utils/*"), "./src/utils");
    assert_eq!(alias_target("src", "*"), "./src");
    assert_eq!(alias_target("./src", "../shared/*"), "./shared");
    assert_eq!(alias_target(".", "../shared"), "../shared");
    assert_eq!(alias_target(".", "/abs/lib/*"), "/abs/lib");
  }

  #[test]
  fn test_detect_from_project_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
      dir.path().join(TSCONFIG_FILE),
      r#"{
        // project wide settings
        "compilerOptions": {
          "baseUrl": ".",
          /* aliases */
          "paths": {
            "@/*": ["src/*"],
            "~/*": ["./src/*"],
            "@shared": ["../shared"],
            "broken": "src",
            "none": [],
          },
        },
      }"#,
    )
    .unwrap();

    let aliases = detect_from_project_config(&OsFileSystem, dir.path());

    assert_eq!(
      aliases.into_iter().collect::<Vec<_>>(),
      [
        ("@".to_string(), "./src".to_string()),
        ("~".to_string(), "./src".to_string()),
        ("@shared".to_string(), "../shared".to_string()),
      ]
    );
  }

  #[test]
  fn test_missing_or_invalid_tsconfig() {
    let dir = tempfile::tempdir().unwrap();
    assert!(detect_from_project_config(&OsFileSystem, dir.path()).is_empty());

    fs::write(dir.path().join(TSCONFIG_FILE), "{ not json").unwrap();
    assert!(detect_from_project_config(&OsFileSystem, dir.path()).is_empty());

    fs::write(dir.path().join(TSCONFIG_FILE), r#"{ "compilerOptions": { "strict": true } }"#).unwrap();
    assert!(detect_from_project_config(&OsFileSystem, dir.path()).is_empty());
  }
}
