use crate::ESTarget;

/// Options handed to the TypeScript/JavaScript compiler that runs before
/// bundling.
#[derive(Default, Debug, Clone)]
pub struct CompilerOptions {
  pub target: Option<ESTarget>,
  pub keep_names: Option<bool>,
  pub legal_comments: Option<LegalComments>,
  pub minify_whitespace: Option<bool>,
  pub minify_identifiers: Option<bool>,
  pub minify_syntax: Option<bool>,
  pub remove_comments: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalComments {
  None,
  Inline,
  Eof,
}
