use std::path::{Path, PathBuf};

use gaspack_fs::FileSystem;

/// The Apps Script project manifest.
pub const MANIFEST_FILE: &str = "appsscript.json";

/// Copies the manifest from `root` into `out_dir`, creating the directory if
/// needed. Returns the destination on success. A missing manifest or a failed
/// copy is logged and never fails the build.
pub fn copy_manifest(fs: &dyn FileSystem, root: &Path, out_dir: &Path) -> Option<PathBuf> {
  let source = root.join(MANIFEST_FILE);
  if !fs.exists(&source) {
    tracing::warn!("{MANIFEST_FILE} not found in {}, skipping copy", root.display());
    return None;
  }

  let destination = out_dir.join(MANIFEST_FILE);
  let copied = fs.create_dir_all(out_dir).and_then(|()| fs.copy(&source, &destination));
  match copied {
    Ok(_) => {
      tracing::info!("Copied {MANIFEST_FILE} to {}", out_dir.display());
      Some(destination)
    }
    Err(err) => {
      tracing::error!("Failed to copy {MANIFEST_FILE} to {}: {err}", out_dir.display());
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use gaspack_fs::OsFileSystem;

  use super::{copy_manifest, MANIFEST_FILE};

  #[test]
  fn test_copy_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let manifest = r#"{ "timeZone": "Asia/Tokyo", "runtimeVersion": "V8" }"#;
    fs::write(root.join(MANIFEST_FILE), manifest).unwrap();

    let copied = copy_manifest(&OsFileSystem, root, &root.join("dist/nested"));

    assert_eq!(copied, Some(root.join("dist/nested").join(MANIFEST_FILE)));
    assert_eq!(fs::read_to_string(root.join("dist/nested").join(MANIFEST_FILE)).unwrap(), manifest);
  }

  #[test]
  fn test_missing_manifest() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(copy_manifest(&OsFileSystem, dir.path(), &dir.path().join("dist")), None);
    assert!(!dir.path().join("dist").exists());
  }
}
