use std::path::Path;

use gaspack_fs::FileSystem;
use gaspack_utils::strip_comments::strip_comments;

/// A file counts as empty when nothing but whitespace and comments is left in
/// it. Unreadable files are treated as empty so they never become entries.
pub fn is_empty(fs: &dyn FileSystem, path: &Path) -> bool {
  match fs.read_to_string(path) {
    Ok(content) => strip_comments(&content).trim().is_empty(),
    Err(err) => {
      tracing::debug!("Treating unreadable {} as empty: {err}", path.display());
      true
    }
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use gaspack_fs::OsFileSystem;

  use super::is_empty;

  #[test]
  fn test_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let cases = [
      ("blank.ts", "", true),
      ("whitespace.ts", "  \n\t\n", true),
      ("comments.ts", "// nothing here\n/* still\n nothing */\n", true),
      ("code.ts", "// entry\nfunction main() {}\n", false),
      ("url.ts", "const url = 'https://example.com'", false),
    ];

    for (name, content, expected) in cases {
      let path = dir.path().join(name);
      fs::write(&path, content).unwrap();
      assert_eq!(is_empty(&OsFileSystem, &path), expected, "{name}");
    }

    assert!(is_empty(&OsFileSystem, &dir.path().join("missing.ts")));
  }
}
