use std::path::Path;

use gaspack_common::AliasMap;
use gaspack_fs::FileSystem;

/// Alias -> candidate directories, most likely first.
const CONVENTIONS: [(&str, &[&str]); 5] = [
  ("@", &["src", "app", "lib"]),
  ("~", &["src", "app"]),
  ("@components", &["src/components", "components"]),
  ("@utils", &["src/utils", "utils", "src/lib", "lib"]),
  ("@types", &["src/types", "types", "@types"]),
];

/// Maps each conventional alias to the first of its candidate directories that
/// exists under `root`.
pub fn detect_by_convention(fs: &dyn FileSystem, root: &Path) -> AliasMap {
  CONVENTIONS
    .iter()
    .filter_map(|(alias, candidates)| {
      let dir = candidates.iter().find(|dir| fs.exists(&root.join(dir)))?;
      Some(((*alias).to_string(), format!("./{dir}")))
    })
    .collect()
}

#[test]
fn test_detect_by_convention() {
  use gaspack_fs::OsFileSystem;

  let dir = tempfile::tempdir().unwrap();
  assert!(detect_by_convention(&OsFileSystem, dir.path()).is_empty());

  std::fs::create_dir_all(dir.path().join("app")).unwrap();
  std::fs::create_dir_all(dir.path().join("lib")).unwrap();
  std::fs::create_dir_all(dir.path().join("types")).unwrap();

  let aliases = detect_by_convention(&OsFileSystem, dir.path());
  assert_eq!(
    aliases.into_iter().collect::<Vec<_>>(),
    [
      ("@".to_string(), "./app".to_string()),
      ("~".to_string(), "./app".to_string()),
      ("@utils".to_string(), "./lib".to_string()),
      ("@types".to_string(), "./types".to_string()),
    ]
  );
}
