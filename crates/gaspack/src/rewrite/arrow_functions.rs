use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{continues_expression, replace_all_guarded};

/// `name = (params) =>` or `name = param =>` at the start of a line, optionally
/// exported and async.
macro_rules! arrow_binding {
  ($body:literal) => {
    concat!(
      r"(?m)^([ \t]*)(export[ \t]+)?(?:const|let|var)[ \t]+([\w$]+)[ \t]*=[ \t]*(async[ \t]+)?",
      r"(?:\(([^()\n]*)\)|([\w$]+))[ \t]*=>[ \t]*",
      $body
    )
  };
}

static BLOCK_ARROW_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(arrow_binding!(r"\{")).unwrap());

static EXPRESSION_ARROW_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(arrow_binding!(r"([^;{}\n]+?)[ \t]*(;?)[ \t]*(\r?)$")).unwrap()
});

fn function_head(caps: &Captures<'_>) -> String {
  let group = |index| caps.get(index).map_or("", |m| m.as_str());
  let params = caps.get(5).or_else(|| caps.get(6)).map_or("", |m| m.as_str());
  let export = if group(2).is_empty() { "" } else { "export " };
  let asyncness = if group(4).is_empty() { "" } else { "async " };
  format!("{}{export}{asyncness}function {}({params})", group(1), group(3))
}

/// Turns arrow functions bound to a top-level `const`, `let` or `var` into named
/// function declarations:
///
/// ```text
/// export const run = (a) => {   ->  export function run(a) {
/// const add = (a, b) => a + b;  ->  function add(a, b) { return a + b; }
/// ```
///
/// Bindings inside a block keep their arrow form and with it the `this` of the
/// enclosing function. Arrows passed as arguments or nested in literals are
/// never touched, and a binding whose value keeps going after the
/// arrow (`const f = () => {}.bind(x)`, `const g = (x) => x\n  .map(h)`,
/// `const h = (x) => x +\n  1`) is left as it is.
pub fn transform_arrow_functions(code: &str) -> String {
  let top_level = top_level_line_starts(code);
  let code = replace_all_guarded(&BLOCK_ARROW_RE, code, |caps| {
    let whole = caps.get(0)?;
    if top_level.binary_search(&whole.start()).is_err() {
      return None;
    }
    let open = whole.end() - 1;
    // A header without its body is still rewritten, there is nothing after it
    // that could continue the expression.
    if let Some(close) = find_closing_brace(code, open) {
      if continues_expression(&code[close + 1..]) {
        return None;
      }
    }
    Some(format!("{} {{", function_head(caps)))
  });

  let top_level = top_level_line_starts(&code);
  replace_all_guarded(&EXPRESSION_ARROW_RE, &code, |caps| {
    let whole = caps.get(0)?;
    let body = caps[7].trim();
    if top_level.binary_search(&whole.start()).is_err()
      || body.contains("//")
      || body.contains("/*")
      || ends_with_operator(body)
      || has_top_level_comma(body)
      || (caps[8].is_empty() && continues_expression(&code[whole.end()..]))
    {
      return None;
    }
    Some(format!("{} {{ return {body}; }}{}", function_head(caps), &caps[9]))
  })
  .into_owned()
}

/// A trailing binary operator, `,` or open bracket means the expression goes on
/// past the end of the line. `i++` and `i--` are complete.
fn ends_with_operator(body: &str) -> bool {
  if body.ends_with("++") || body.ends_with("--") {
    return false;
  }
  body.ends_with(|c: char| {
    matches!(
      c,
      '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '!' | '~' | '<' | '>' | '=' | '?' | ':' | ','
        | '(' | '[' | '.'
    )
  })
}

/// Whether `body` has a `,` outside brackets and strings, e.g. the next
/// declarator in `const f = (a) => a, k = 2`.
fn has_top_level_comma(body: &str) -> bool {
  let mut depth = 0usize;
  let mut quote = None;
  let mut escaped = false;

  for c in body.chars() {
    if let Some(open) = quote {
      if escaped {
        escaped = false;
      } else if c == '\\' {
        escaped = true;
      } else if c == open {
        quote = None;
      }
      continue;
    }
    match c {
      '\'' | '"' | '`' => quote = Some(c),
      '(' | '[' => depth += 1,
      ')' | ']' => depth = depth.saturating_sub(1),
      ',' if depth == 0 => return true,
      _ => {}
    }
  }

  false
}

/// Sorted byte offsets of the lines that begin outside every `{ }` block,
/// string and comment.
fn top_level_line_starts(code: &str) -> Vec<usize> {
  let bytes = code.as_bytes();
  let mut starts = vec![0];
  let mut depth = 0usize;
  let mut i = 0;

  while i < bytes.len() {
    match bytes[i] {
      b'{' => depth += 1,
      b'}' => depth = depth.saturating_sub(1),
      b'\n' if depth == 0 => starts.push(i + 1),
      quote @ (b'\'' | b'"' | b'`') => {
        i += 1;
        while i < bytes.len() && bytes[i] != quote {
          if bytes[i] == b'\\' {
            i += 1;
          }
          i += 1;
        }
      }
      b'/' if bytes.get(i + 1) == Some(&b'/') => {
        while i + 1 < bytes.len() && bytes[i + 1] != b'\n' {
          i += 1;
        }
      }
      b'/' if bytes.get(i + 1) == Some(&b'*') => {
        i = code[i + 2..].find("*/").map_or(bytes.len(), |end| i + 2 + end + 1);
      }
      _ => {}
    }
    i += 1;
  }

  starts
}

/// Byte offset of the `}` matching the `{` at `open`, skipping braces inside
/// strings, template literals and comments.
fn find_closing_brace(code: &str, open: usize) -> Option<usize> {
  let bytes = code.as_bytes();
  let mut depth = 0usize;
  let mut i = open;

  while i < bytes.len() {
    match bytes[i] {
      b'{' => depth += 1,
      b'}' => {
        depth -= 1;
        if depth == 0 {
          return Some(i);
        }
      }
      quote @ (b'\'' | b'"' | b'`') => {
        i += 1;
        while i < bytes.len() && bytes[i] != quote {
          if bytes[i] == b'\\' {
            i += 1;
          }
          i += 1;
        }
      }
      b'/' if bytes.get(i + 1) == Some(&b'/') => {
        while i < bytes.len() && bytes[i] != b'\n' {
          i += 1;
        }
      }
      b'/' if bytes.get(i + 1) == Some(&b'*') => {
        i = code[i + 2..].find("*/").map_or(bytes.len(), |end| i + 2 + end + 1);
      }
      _ => {}
    }
    i += 1;
  }

  None
}

#[test]
fn test_block_arrow_headers() {
  for (input, expected) in [
    ("export const changeShiftName = ({ sheet, name }) => {", "export function changeShiftName({ sheet, name }) {"),
    ("const myFunction = (param1, param2) => {", "function myFunction(param1, param2) {"),
    ("let myFunction = (param1, param2) => {", "function myFunction(param1, param2) {"),
    ("var myFunction = (param1, param2) => {", "function myFunction(param1, param2) {"),
    ("const noParams = () => {", "function noParams() {"),
    ("export const noParams = () => {", "export function noParams() {"),
    ("const load = async (id) => {", "async function load(id) {"),
    ("const single = value => {", "function single(value) {"),
  ] {
    assert_eq!(transform_arrow_functions(input), expected);
  }
}

#[test]
fn test_expression_arrows() {
  assert_eq!(transform_arrow_functions("const add = (a, b) => a + b;"), "function add(a, b) { return a + b; }");
  assert_eq!(
    transform_arrow_functions("export const multiply = (x, y) => x * y;"),
    "export function multiply(x, y) { return x * y; }"
  );
  assert_eq!(
    transform_arrow_functions("const twice = async x => run(x)\r\nnext()"),
    "async function twice(x) { return run(x); }\r\nnext()"
  );
}

#[test]
fn test_multiple_bindings() {
  let code = "\nconst func1 = (a) => a + 1;\nexport const func2 = (b, c) => {\n  return b * c;\n};\nlet func3 = () => {\n  console.log('test');\n}";

  assert_eq!(
    transform_arrow_functions(code),
    "\nfunction func1(a) { return a + 1; }\nexport function func2(b, c) {\n  return b * c;\n};\nfunction func3() {\n  console.log('test');\n}"
  );
}

#[test]
fn test_complex_expressions_are_untouched() {
  let code = "const lastNonEmptyCol =\n\t\trowData\n\t\t\t.map((value, index) => ({ value, index: index + 1 }))\n\t\t\t.reverse()\n\t\t\t.find((cell) => cell.value !== '')?.index || 1";
  assert_eq!(transform_arrow_functions(code), code);

  let code = "const getter = (x) => x\n  .map(double)\n  .filter(Boolean)";
  assert_eq!(transform_arrow_functions(code), code);

  let code = "const bound = () => {\n  return this\n}.bind(ctx)";
  assert_eq!(transform_arrow_functions(code), code);

  let code = "const pair = () => ({ a: 1 });";
  assert_eq!(transform_arrow_functions(code), code);

  let code = "const half = (x) => x / 2 // rounds down\nrun()";
  assert_eq!(transform_arrow_functions(code), code);

  let code = "const total = (x) => x /* tax */ * 2;";
  assert_eq!(transform_arrow_functions(code), code);

  let code = "const sum = (x) => x +\n  1;";
  assert_eq!(transform_arrow_functions(code), code);

  let code = "const call = (x) => run(\n  x\n);";
  assert_eq!(transform_arrow_functions(code), code);

  let code = "const id = (a) => a, limit = 2;\nrun(limit)";
  assert_eq!(transform_arrow_functions(code), code);
}

#[test]
fn test_postfix_update_is_complete() {
  assert_eq!(transform_arrow_functions("const next = () => count++"), "function next() { return count++; }");
}

#[test]
fn test_arguments_with_commas_are_rewritten() {
  assert_eq!(
    transform_arrow_functions("const pick = (a, b) => max(a, [b, 1]);"),
    "function pick(a, b) { return max(a, [b, 1]); }"
  );
}

#[test]
fn test_nested_bindings_are_untouched() {
  for code in [
    "class Sheet {\n  run() {\n    const read = () => {\n      return this.range\n    };\n    read();\n  }\n}",
    "function outer() {\n  const inner = (y) => this.y + y;\n  return inner(1);\n}",
    "function load() {\nconst parse = (raw) => JSON.parse(raw);\n}",
    "if (ready) {\n  let start = async (id) => {\n    await run(id)\n  }\n}",
  ] {
    assert_eq!(transform_arrow_functions(code), code);
  }
}

#[test]
fn test_bindings_after_a_block_are_rewritten() {
  let code = "function setup() {\n  const local = () => 1;\n}\nconst area = (w, h) => w * h;\nconst text = '{';\nconst size = () => 2;";
  assert_eq!(
    transform_arrow_functions(code),
    "function setup() {\n  const local = () => 1;\n}\nfunction area(w, h) { return w * h; }\nconst text = '{';\nfunction size() { return 2; }"
  );
}

#[test]
fn test_top_level_line_starts() {
  let code = "a\n{\n b\n}\n/* {\n */ c\n// {\nd";
  assert_eq!(top_level_line_starts(code), [0, 2, 9, 20, 25]);
}

#[test]
fn test_non_bindings_are_untouched() {
  for code in [
    "function regularFunction(param) { return param; }",
    "const obj = { method: function(param) { return param; } }",
    "items.forEach((item) => { log(item) })",
    "const handlers = [(e) => e.value]",
    "const withDefault = (a = f()) => a",
  ] {
    assert_eq!(transform_arrow_functions(code), code);
  }
}

#[test]
fn test_find_closing_brace() {
  let code = "{ a('}'); /* } */ // }\n b(`}`) }";
  assert_eq!(find_closing_brace(code, 0), Some(code.len() - 1));
  assert_eq!(find_closing_brace("{ {", 0), None);
}
