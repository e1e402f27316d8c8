use std::{
  io,
  path::{Path, PathBuf},
};

/// The filesystem operations the plugin performs. Everything goes through this
/// trait so callers decide where a project actually lives.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn exists(&self, path: &Path) -> bool;

  /// Every regular file below `dir`, sorted by path. A missing `dir` yields an
  /// empty list, any other traversal error is returned.
  fn walk_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;
}
