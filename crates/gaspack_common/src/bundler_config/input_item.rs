use std::path::PathBuf;

/// One bundler entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputItem {
  pub name: Option<String>,
  pub import: String,
}

impl InputItem {
  pub fn named(name: impl Into<String>, import: impl Into<String>) -> Self {
    Self { name: Some(name.into()), import: import.into() }
  }
}

impl From<(&String, &PathBuf)> for InputItem {
  fn from((name, path): (&String, &PathBuf)) -> Self {
    Self::named(name.as_str(), path.to_string_lossy())
  }
}
