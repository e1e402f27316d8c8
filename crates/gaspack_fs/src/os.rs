use std::{
  fs, io,
  path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn walk_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
    if !dir.is_dir() {
      return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
      let entry = entry.map_err(io::Error::from)?;
      if entry.file_type().is_file() {
        files.push(entry.into_path());
      }
    }
    files.sort();
    Ok(files)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    fs::write(path, content)
  }

  fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
    fs::copy(from, to)
  }
}

#[test]
fn test_walk_files() {
  let dir = tempfile::tempdir().unwrap();
  let root = dir.path();
  fs::create_dir_all(root.join("src/utils")).unwrap();
  fs::write(root.join("src/main.ts"), "main()").unwrap();
  fs::write(root.join("src/utils/helper.ts"), "helper()").unwrap();

  let files = OsFileSystem.walk_files(&root.join("src")).unwrap();
  assert_eq!(files, vec![root.join("src/main.ts"), root.join("src/utils/helper.ts")]);

  assert!(OsFileSystem.walk_files(&root.join("missing")).unwrap().is_empty());
}
