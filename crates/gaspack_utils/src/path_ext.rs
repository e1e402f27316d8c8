use std::path::{Component, Path, PathBuf};

use sugar_path::SugarPath;

pub trait PathExt {
  /// Forward-slash rendering, used for glob matching and log output so both
  /// behave the same on every platform.
  fn to_slash_string(&self) -> String;

  /// Lexically resolves `.` and `..` without touching the filesystem. Leading
  /// `..` segments of a relative path are kept.
  fn lexical_normalize(&self) -> PathBuf;
}

impl PathExt for Path {
  fn to_slash_string(&self) -> String {
    self.to_slash_lossy().into_owned()
  }

  fn lexical_normalize(&self) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in self.components() {
      match component {
        Component::CurDir => {}
        Component::ParentDir => {
          let can_pop = matches!(normalized.components().next_back(), Some(Component::Normal(_)));
          if can_pop {
            normalized.pop();
          } else if !matches!(
            normalized.components().next_back(),
            Some(Component::RootDir | Component::Prefix(_))
          ) {
            normalized.push("..");
          }
        }
        other => normalized.push(other.as_os_str()),
      }
    }
    normalized
  }
}

#[test]
fn test_lexical_normalize() {
  assert_eq!(Path::new("./src/../lib").lexical_normalize(), Path::new("lib"));
  assert_eq!(Path::new("src/./utils").lexical_normalize(), Path::new("src/utils"));
  assert_eq!(Path::new("../shared/./x").lexical_normalize(), Path::new("../shared/x"));
  assert_eq!(Path::new(".").lexical_normalize(), Path::new(""));
}

#[test]
fn test_to_slash_string() {
  let path = Path::new("src").join("utils").join("helper.ts");
  assert_eq!(path.to_slash_string(), "src/utils/helper.ts");
}
