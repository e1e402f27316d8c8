use std::path::{Component, Path, PathBuf};

use gaspack_common::EntryMap;
use gaspack_fs::FileSystem;
use gaspack_utils::{path_ext::PathExt, sanitize_entry_name::sanitize_entry_name};

use super::is_empty;

pub const SOURCE_EXTENSION: &str = "ts";

/// Always excluded from discovery: declaration files, dependencies and test
/// runner directories.
pub const DEFAULT_IGNORE: [&str; 3] = ["**/*.d.ts", "**/node_modules/**", "**/__tests__/**"];

/// Scans every directory in `include` (relative to `cwd`) for source files and
/// maps a generated entry name to each file's absolute path.
///
/// Files matching [`DEFAULT_IGNORE`] or `exclude` (globs against the
/// `cwd`-relative path) and files with no code in them are skipped. The result
/// is ordered by path, so the same tree always yields the same map. A failure
/// while scanning gives an empty map.
pub async fn detect_source_files<F: FileSystem + Clone + 'static>(
  fs: &F,
  cwd: &Path,
  include: &[String],
  exclude: &[String],
) -> EntryMap {
  let fs = fs.clone();
  let cwd = cwd.to_path_buf();
  let include = include.to_vec();
  let exclude = exclude.to_vec();

  let scan = tokio::task::spawn_blocking(move || scan(&fs, &cwd, &include, &exclude)).await;

  match scan {
    Ok(Ok(entries)) => entries,
    Ok(Err(err)) => {
      tracing::warn!("Failed to detect source files: {err}");
      EntryMap::default()
    }
    Err(err) => {
      tracing::warn!("Source file detection did not finish: {err}");
      EntryMap::default()
    }
  }
}

fn scan(
  fs: &dyn FileSystem,
  cwd: &Path,
  include: &[String],
  exclude: &[String],
) -> std::io::Result<EntryMap> {
  let ignore = DEFAULT_IGNORE.iter().copied().chain(exclude.iter().map(String::as_str)).collect::<Vec<_>>();

  let mut files = Vec::new();
  for dir in include {
    for file in fs.walk_files(&cwd.join(dir))? {
      if file.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
        files.push(file.lexical_normalize());
      }
    }
  }
  files.sort();
  files.dedup();

  let base = include.first().map_or("src", String::as_str);
  let base_dir = cwd.join(base).lexical_normalize();

  let mut entries = EntryMap::default();
  for file in files {
    let relative = file.strip_prefix(cwd).unwrap_or(&file).to_slash_string();
    if ignore.iter().any(|pattern| fast_glob::glob_match(*pattern, &relative)) {
      continue;
    }
    if is_empty(fs, &file) {
      tracing::debug!("Skipping empty source file {relative}");
      continue;
    }

    let name = generate_entry_name(&file, &base_dir);
    let name = if entries.contains_key(&name) {
      let unique = (2..)
        .map(|suffix| format!("{name}_{suffix}"))
        .find(|candidate| !entries.contains_key(candidate))
        .unwrap_or_default();
      tracing::warn!("Entry name `{name}` is already taken, using `{unique}` for {relative}");
      unique
    } else {
      name
    };

    entries.insert(name, file);
  }

  Ok(entries)
}

/// Derives an entry name from `path` relative to `base_dir`: directories and the
/// file stem joined with `_`, e.g. `src/utils/helper.ts` under `src` becomes
/// `utils_helper`.
pub fn generate_entry_name(path: &Path, base_dir: &Path) -> String {
  let relative = relative_to(path, base_dir);
  let stem = relative.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default();

  let mut segments = relative
    .parent()
    .into_iter()
    .flat_map(Path::components)
    .filter_map(|component| match component {
      Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
      _ => None,
    })
    .collect::<Vec<_>>();
  segments.push(stem);

  sanitize_entry_name(&segments.join("_"))
}

fn relative_to(path: &Path, base_dir: &Path) -> PathBuf {
  if let Ok(relative) = path.strip_prefix(base_dir) {
    return relative.to_path_buf();
  }

  let path_components = path.components().collect::<Vec<_>>();
  let base_components = base_dir.components().collect::<Vec<_>>();
  let common = path_components.iter().zip(&base_components).take_while(|(a, b)| a == b).count();
  path_components[common..].iter().collect()
}

#[cfg(test)]
mod tests {
  use std::{fs, path::Path};

  use gaspack_fs::OsFileSystem;

  use super::{detect_source_files, generate_entry_name};

  #[test]
  fn test_generate_entry_name() {
    let base = Path::new("/project/src");
    assert_eq!(generate_entry_name(Path::new("/project/src/main.ts"), base), "main");
    assert_eq!(generate_entry_name(Path::new("/project/src/utils/helper.ts"), base), "utils_helper");
    assert_eq!(generate_entry_name(Path::new("src/utils/helper.ts"), Path::new("src")), "utils_helper");
    assert_eq!(generate_entry_name(Path::new("/project/lib/shared.ts"), base), "lib_shared");
    assert_eq!(generate_entry_name(Path::new("/project/src/my-sheet.server.ts"), base), "my_sheet_server");
    assert_eq!(generate_entry_name(Path::new("/project/src/a/b/c.ts"), base), "a_b_c");
  }

  fn write(root: &Path, path: &str, content: &str) {
    let path = root.join(path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
  }

  #[tokio::test]
  async fn test_detect_source_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/main.ts", "function main() {}");
    write(root, "src/utils/helper.ts", "export const helper = () => 1");
    write(root, "src/empty.ts", "// todo\n");
    write(root, "src/types.d.ts", "declare const x: number");
    write(root, "src/main.test.ts", "test()");
    write(root, "src/__tests__/main.ts", "test()");
    write(root, "src/node_modules/dep/index.ts", "dep()");
    write(root, "src/readme.md", "# readme");

    let include = vec!["src".to_string()];
    let exclude = vec!["**/*.test.ts".to_string()];
    let entries = detect_source_files(&OsFileSystem, root, &include, &exclude).await;

    assert_eq!(entries.keys().collect::<Vec<_>>(), ["main", "utils_helper"]);
    assert_eq!(entries["main"], root.join("src").join("main.ts"));
    assert_eq!(entries["utils_helper"], root.join("src").join("utils").join("helper.ts"));

    let again = detect_source_files(&OsFileSystem, root, &include, &exclude).await;
    assert_eq!(entries, again);
  }

  #[tokio::test]
  async fn test_empty_and_excluded_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/a.ts", "function a() {}");
    write(root, "src/b.ts", "");
    write(root, "src/a.spec.ts", "test()");

    let exclude = vec!["**/*.spec.ts".to_string()];
    let entries = detect_source_files(&OsFileSystem, root, &["src".to_string()], &exclude).await;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries["a"], root.join("src").join("a.ts"));
  }

  #[tokio::test]
  async fn test_nested_directories_are_joined() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/a/b/c.ts", "run()");

    let entries = detect_source_files(&OsFileSystem, root, &["src".to_string()], &[]).await;

    assert_eq!(entries.keys().collect::<Vec<_>>(), ["a_b_c"]);
  }

  #[tokio::test]
  async fn test_colliding_names_get_a_suffix() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "src/a/b.ts", "one()");
    write(root, "src/a_b.ts", "two()");

    let entries = detect_source_files(&OsFileSystem, root, &["src".to_string()], &[]).await;

    assert_eq!(entries.keys().collect::<Vec<_>>(), ["a_b", "a_b_2"]);
    assert_eq!(entries["a_b"], root.join("src").join("a").join("b.ts"));
  }

  #[tokio::test]
  async fn test_missing_include_dir() {
    let dir = tempfile::tempdir().unwrap();
    let entries = detect_source_files(&OsFileSystem, dir.path(), &["src".to_string()], &[]).await;
    assert!(entries.is_empty());
  }
}
