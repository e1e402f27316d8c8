use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

/// Errors collected while running plugin hooks. A hook failure never stops the
/// remaining plugins from running, so a single build can report several.
#[derive(Debug, Default)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn into_result<T>(self, value: T) -> BuildResult<T> {
    if self.0.is_empty() {
      Ok(value)
    } else {
      Err(self)
    }
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_into_result() {
  assert!(BuildError::default().into_result(1).is_ok());

  let error = BuildError::from(vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")]);
  let Err(error) = error.into_result(()) else { panic!("expected an error") };
  assert_eq!(error.len(), 2);
  assert_eq!(error.to_string(), "first\nsecond");
}
