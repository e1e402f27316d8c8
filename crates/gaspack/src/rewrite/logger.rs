use std::sync::LazyLock;

use regex::Regex;

use super::replace_all_guarded;

/// The logging global of the Apps Script runtime.
pub const HOST_LOGGER: &str = "Logger";

static CONSOLE_CALL_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"console\.(log|warn|error)\(").unwrap());

/// Rewrites `console.log(`, `console.warn(` and `console.error(` into calls on
/// [`HOST_LOGGER`]. Other console methods and member accesses such as
/// `myconsole.log(` or `obj.console.log(` are left alone.
pub fn transform_logger(code: &str) -> String {
  replace_all_guarded(&CONSOLE_CALL_RE, code, |caps| {
    let start = caps.get(0)?.start();
    let preceded_by_identifier = code[..start]
      .chars()
      .next_back()
      .is_some_and(|prev| prev.is_alphanumeric() || matches!(prev, '_' | '$' | '.'));
    (!preceded_by_identifier).then(|| format!("{HOST_LOGGER}.{}(", &caps[1]))
  })
  .into_owned()
}

#[test]
fn test_console_methods() {
  let code = "console.log('hello');\nconsole.warn('careful');\nconsole.error(err);";
  assert_eq!(
    transform_logger(code),
    "Logger.log('hello');\nLogger.warn('careful');\nLogger.error(err);"
  );
}

#[test]
fn test_other_calls_are_untouched() {
  let code = "console.info('x');\nconsole.debug('y');\nmyconsole.log(1);\nwindow.console.log(2);\nconsole.logger(3);";
  assert_eq!(transform_logger(code), code);
}

#[test]
fn test_nested_calls() {
  assert_eq!(
    transform_logger("if (ok) { console.log(format(console.error)) }"),
    "if (ok) { Logger.log(format(console.error)) }"
  );
  assert_eq!(transform_logger("run(()=>console.warn(1))"), "run(()=>Logger.warn(1))");
}

#[test]
fn test_host_logger_calls_are_untouched() {
  let code = "Logger.log('ready');\nLogger.warn(count);";
  assert_eq!(transform_logger(code), code);
  assert_eq!(transform_logger(&transform_logger("console.error(e)")), "Logger.error(e)");
}
