//! Comment removal that respects string literals.
//!
//! Shared by the emptiness check for source files and by the tsconfig reader,
//! which has to accept JSON with comments. Regular expression literals in
//! JavaScript are not recognised; a `/*` inside one is treated as a comment.

#[derive(Clone, Copy)]
enum State {
  Code,
  Str(char),
  LineComment,
  BlockComment,
}

/// Removes `// ...` and `/* ... */` comments outside of `'`, `"` and `` ` ``
/// literals. Line comments keep their terminating newline, block comments are
/// replaced by a single space so adjacent tokens stay separated.
pub fn strip_comments(source: &str) -> String {
  let mut output = String::with_capacity(source.len());
  let mut state = State::Code;
  let mut chars = source.chars().peekable();

  while let Some(char) = chars.next() {
    match state {
      State::Code => match char {
        '/' if chars.peek() == Some(&'/') => {
          chars.next();
          state = State::LineComment;
        }
        '/' if chars.peek() == Some(&'*') => {
          chars.next();
          state = State::BlockComment;
        }
        '\'' | '"' | '`' => {
          output.push(char);
          state = State::Str(char);
        }
        _ => output.push(char),
      },
      State::Str(quote) => {
        output.push(char);
        if char == '\\' {
          if let Some(escaped) = chars.next() {
            output.push(escaped);
          }
        } else if char == quote {
          state = State::Code;
        }
      }
      State::LineComment => {
        if char == '\n' {
          output.push(char);
          state = State::Code;
        }
      }
      State::BlockComment => {
        if char == '*' && chars.peek() == Some(&'/') {
          chars.next();
          output.push(' ');
          state = State::Code;
        }
      }
    }
  }

  output
}

/// Drops commas directly followed (modulo whitespace) by `}` or `]`, outside of
/// double-quoted strings. Expects comment-free input.
pub fn strip_trailing_commas(json: &str) -> String {
  let chars = json.chars().collect::<Vec<_>>();
  let mut output = String::with_capacity(json.len());
  let mut in_string = false;
  let mut index = 0;

  while index < chars.len() {
    let char = chars[index];
    if in_string {
      output.push(char);
      if char == '\\' {
        if let Some(&escaped) = chars.get(index + 1) {
          output.push(escaped);
          index += 1;
        }
      } else if char == '"' {
        in_string = false;
      }
    } else if char == ',' {
      let next = chars[index + 1..].iter().find(|c| !c.is_whitespace());
      if !matches!(next, Some('}' | ']')) {
        output.push(char);
      }
    } else {
      if char == '"' {
        in_string = true;
      }
      output.push(char);
    }
    index += 1;
  }

  output
}

#[test]
fn test_strip_comments() {
  assert_eq!(strip_comments("a // note\nb"), "a \nb");
  assert_eq!(strip_comments("a /* note */b"), "a  b");
  assert_eq!(strip_comments("/**\n * doc\n */"), " ");
  assert_eq!(strip_comments("const url = 'http://x' // tail"), "const url = 'http://x' ");
  assert_eq!(strip_comments(r#"{ "@/*": ["src/*"] } /* c */"#), r#"{ "@/*": ["src/*"] }  "#);
  assert_eq!(strip_comments(r#""a \" // b""#), r#""a \" // b""#);
  assert_eq!(strip_comments("/* unterminated"), "");
}

#[test]
fn test_strip_trailing_commas() {
  assert_eq!(strip_trailing_commas(r#"{ "a": [1, 2,], }"#), r#"{ "a": [1, 2] }"#);
  assert_eq!(strip_trailing_commas(r#"{ "a": ",}" }"#), r#"{ "a": ",}" }"#);
  assert_eq!(strip_trailing_commas("[1,\n  2,\n]"), "[1,\n  2\n]");
}
