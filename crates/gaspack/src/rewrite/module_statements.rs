use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

// Every pattern starts at a line start or right after a `;`, captured as group
// 1 so it can be put back. Whole-statement patterns end with an optional
// newline in the last group.

static IMPORT_FROM_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(concat!(
    r#"(?m)(^|;)[ \t]*import\b\s*(?:type\s+)?"#,
    r#"(?:[\w$]+\s*,\s*)?(?:\{[^}]*\}|\*\s*as\s+[\w$]+|[\w$]+)"#,
    r#"\s*from\s*["'][^"'\n]*["'](?:\s*(?:with|assert)\s*\{[^}]*\})?"#,
    r#"[ \t]*;?[ \t]*(\r?\n)?"#,
  ))
  .unwrap()
});

static IMPORT_SIDE_EFFECT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"(?m)(^|;)[ \t]*import\s*["'][^"'\n]*["'][ \t]*;?[ \t]*(\r?\n)?"#).unwrap()
});

static EXPORT_LIST_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r#"(?m)(^|;)[ \t]*export\s*(?:type\s*)?\{[^}]*\}(?:\s*from\s*["'][^"'\n]*["'])?[ \t]*;?[ \t]*(\r?\n)?"#,
  )
  .unwrap()
});

static EXPORT_ALL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r#"(?m)(^|;)[ \t]*export\s*\*(?:\s*as\s+[\w$]+)?\s*from\s*["'][^"'\n]*["'][ \t]*;?[ \t]*(\r?\n)?"#,
  )
  .unwrap()
});

static EXPORT_DEFAULT_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?m)(^|;)([ \t]*)export\s+default\s+").unwrap());

static EXPORT_MODIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"(?m)(^|;)([ \t]*)export\s+(async|function|class|const|let|var|interface|type|enum|abstract|declare|namespace)\b",
  )
  .unwrap()
});

static BLANK_LINES_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").unwrap());

/// Strips every `import` statement and `export` form, keeping the declarations
/// that were exported. Runs of blank lines left behind are collapsed to one.
/// Input without module syntax is returned unchanged.
pub fn remove_module_statements(code: &str) -> String {
  let mut result = code.to_string();
  let mut changed = false;

  for re in [&*IMPORT_FROM_RE, &*IMPORT_SIDE_EFFECT_RE, &*EXPORT_LIST_RE, &*EXPORT_ALL_RE] {
    changed |= replace_until_stable(&mut result, re, remove_statement);
  }
  changed |= replace_until_stable(&mut result, &EXPORT_DEFAULT_RE, |caps| {
    format!("{}{}", &caps[1], &caps[2])
  });
  changed |= replace_until_stable(&mut result, &EXPORT_MODIFIER_RE, |caps| {
    format!("{}{}{}", &caps[1], &caps[2], &caps[3])
  });

  if changed {
    result = BLANK_LINES_RE.replace_all(&result, "\n\n").into_owned();
  }

  result
}

/// Replacement for a whole removed statement: the leading `;` survives, and so
/// does the newline when the statement shared its line with earlier code.
fn remove_statement(caps: &Captures<'_>) -> String {
  let separator = &caps[1];
  if separator.is_empty() {
    String::new()
  } else {
    let newline = caps.get(2).map_or("", |m| m.as_str());
    format!("{separator}{newline}")
  }
}

/// Applies `re` until it stops matching, so statements that only start a line
/// once their predecessor is gone (`import a from 'a'; import b from 'b'`)
/// are removed too. Every pattern shortens the text, so this terminates.
fn replace_until_stable(
  code: &mut String,
  re: &Regex,
  replace: impl Fn(&Captures<'_>) -> String,
) -> bool {
  let mut changed = false;
  loop {
    let next = match re.replace_all(code, |caps: &Captures<'_>| replace(caps)) {
      Cow::Owned(next) => next,
      Cow::Borrowed(_) => break,
    };
    *code = next;
    changed = true;
  }
  changed
}

#[test]
fn test_no_module_syntax_is_untouched() {
  let code = "function main() {\n  return 1\n}\n\n\n\nmain()\n";
  assert_eq!(remove_module_statements(code), code);

  let code = "const important = 'export default';\nconst exported = importer();\n";
  assert_eq!(remove_module_statements(code), code);
}

#[test]
fn test_import_forms() {
  let code = [
    "import def from './default'",
    "import { a, b as c } from \"./named\";",
    "import * as ns from './namespace'",
    "import './side-effect';",
    "import def2, { d } from './mixed'",
    "import def3, * as ns2 from './mixed-namespace'",
    "import type { User } from './types';",
    "import data from './data.json' with { type: 'json' };",
    "import {",
    "  e,",
    "  f,",
    "} from './multi-line'",
    "main()",
  ]
  .join("\n");

  assert_eq!(remove_module_statements(&code), "main()");
}

#[test]
fn test_export_forms() {
  let code = [
    "export default function main() {}",
    "export { a, b as c };",
    "export { d } from './d'",
    "export * from './all';",
    "export * as ns from './ns'",
    "export const x = 1",
    "export async function run() {}",
    "export class Sheet {}",
    "export type Id = string",
  ]
  .join("\n");

  assert_eq!(
    remove_module_statements(&code),
    [
      "function main() {}",
      "const x = 1",
      "async function run() {}",
      "class Sheet {}",
      "type Id = string"
    ]
    .join("\n")
  );
}

#[test]
fn test_statements_sharing_a_line() {
  assert_eq!(remove_module_statements("import a from 'a'; import b from 'b'\nrun(a, b)"), "run(a, b)");
  assert_eq!(remove_module_statements("setup(); import './polyfill'\nrun()"), "setup();\nrun()");
  assert_eq!(remove_module_statements("setup(); export const x = 1"), "setup(); const x = 1");
}

#[test]
fn test_comments_are_preserved() {
  let code = "/**\n * This is a JSDoc comment\n */\nimport { someFunction } from './module'\n\n// This is a line comment\nexport function myFunction() {\n\t/* This is a block comment */\n\treturn 'Hello World'\n}";

  let result = remove_module_statements(code);

  assert_eq!(
    result,
    "/**\n * This is a JSDoc comment\n */\n\n// This is a line comment\nfunction myFunction() {\n\t/* This is a block comment */\n\treturn 'Hello World'\n}"
  );
  assert!(!result.contains("import"));
  assert!(!result.contains("export"));
}

#[test]
fn test_dynamic_import_and_import_meta_are_kept() {
  let code = "import('./lazy').then(run)\nimport.meta.url\n";
  assert_eq!(remove_module_statements(code), code);
}

#[test]
fn test_blank_line_runs_collapse() {
  let code = "import a from 'a'\n\n\n\nconst b = a\n";
  assert_eq!(remove_module_statements(code), "\n\nconst b = a\n");

  let code = "import a from 'a'\nconst b = a\n\n\n\nconst c = b\n";
  assert_eq!(remove_module_statements(code), "const b = a\n\nconst c = b\n");
}
