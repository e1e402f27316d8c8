use std::{fmt::Debug, sync::Arc};

type IsExternalFn = dyn Fn(&str) -> bool + Send + Sync;

/// Decides whether an import specifier stays an import in the output instead
/// of being bundled.
#[derive(Clone)]
pub enum IsExternal {
  Ids(Vec<String>),
  Fn(Arc<IsExternalFn>),
}

impl IsExternal {
  pub fn from_fn(f: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
    Self::Fn(Arc::new(f))
  }

  /// Every module is bundled.
  pub fn never() -> Self {
    Self::from_fn(|_| false)
  }

  pub fn call(&self, id: &str) -> bool {
    match self {
      Self::Ids(ids) => ids.iter().any(|external| external == id),
      Self::Fn(f) => f(id),
    }
  }
}

impl Debug for IsExternal {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Ids(ids) => f.debug_tuple("IsExternal::Ids").field(ids).finish(),
      Self::Fn(_) => f.write_str("IsExternal::Fn(..)"),
    }
  }
}

#[test]
fn test_is_external() {
  let ids = IsExternal::Ids(vec!["lodash".to_string()]);
  assert!(ids.call("lodash"));
  assert!(!ids.call("./local"));

  let never = IsExternal::never();
  assert!(!never.call("lodash"));
}
