//! Text-level rewrites that turn bundler output into something the Apps Script
//! runtime accepts.
//!
//! Every function here is total: a pattern that does not match leaves the
//! input untouched. The rewrites are anchored to statement starts instead of
//! working on a syntax tree, which keeps comments and formatting byte-for-byte
//! but means look-alike text inside multi-line strings can still be hit.

mod arrow_functions;
mod gas_functions;
mod logger;
mod module_statements;

use std::borrow::Cow;

use regex::{Captures, Regex};

pub use self::{
  arrow_functions::transform_arrow_functions,
  gas_functions::{preserve_gas_functions, GAS_SPECIAL_FUNCTIONS},
  logger::{transform_logger, HOST_LOGGER},
  module_statements::remove_module_statements,
};

/// `Regex::replace_all` where the callback may decline a match by returning
/// `None`, in which case the matched text is kept as is.
fn replace_all_guarded<'h>(
  re: &Regex,
  haystack: &'h str,
  mut replace: impl FnMut(&Captures<'_>) -> Option<String>,
) -> Cow<'h, str> {
  let mut output = String::new();
  let mut last = 0;
  let mut changed = false;

  for caps in re.captures_iter(haystack) {
    let Some(whole) = caps.get(0) else { continue };
    if let Some(replacement) = replace(&caps) {
      output.push_str(&haystack[last..whole.start()]);
      output.push_str(&replacement);
      last = whole.end();
      changed = true;
    }
  }

  if !changed {
    return Cow::Borrowed(haystack);
  }
  output.push_str(&haystack[last..]);
  Cow::Owned(output)
}

/// Whether the text after an expression keeps the expression going, i.e. no
/// automatic semicolon would be inserted between them. Leading comments are
/// skipped.
fn continues_expression(rest: &str) -> bool {
  let mut rest = rest.trim_start();
  loop {
    if let Some(comment) = rest.strip_prefix("//") {
      rest = comment.find('\n').map_or("", |end| comment[end..].trim_start());
    } else if let Some(comment) = rest.strip_prefix("/*") {
      rest = comment.find("*/").map_or("", |end| comment[end + 2..].trim_start());
    } else {
      break;
    }
  }

  rest.chars().next().is_some_and(|next| {
    matches!(
      next,
      '.' | '?' | ':' | '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | ',' | '=' | '<' | '>' | '('
        | '[' | '`'
    )
  })
}

#[test]
fn test_replace_all_guarded() {
  let re = Regex::new(r"\d").unwrap();
  let replaced = replace_all_guarded(&re, "a1b2c3", |caps| (&caps[0] != "2").then(|| "#".into()));
  assert_eq!(replaced, "a#b2c#");
  assert!(matches!(replace_all_guarded(&re, "abc", |_| Some("#".into())), Cow::Borrowed(_)));
  assert!(matches!(replace_all_guarded(&re, "a1", |_| None), Cow::Borrowed(_)));
}

#[test]
fn test_continues_expression() {
  assert!(continues_expression("\n  .map(x => x)"));
  assert!(continues_expression(" || 1"));
  assert!(!continues_expression("\nfunction next() {}"));
  assert!(!continues_expression(""));
  assert!(!continues_expression("\n// trailing note\nrun()"));
  assert!(continues_expression(" /* chained */ .then(done)"));
}
