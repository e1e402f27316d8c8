use std::sync::LazyLock;

use regex::Regex;

use super::replace_all_guarded;

/// Trigger and web-app entry points the Apps Script runtime calls by name.
pub const GAS_SPECIAL_FUNCTIONS: [&str; 7] =
  ["onOpen", "onEdit", "onSelectionChange", "onFormSubmit", "doGet", "doPost", "onInstall"];

static GAS_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(&format!(r"\bfunction\s+({})\s*\(", GAS_SPECIAL_FUNCTIONS.join("|"))).unwrap()
});

fn preserve_marker(name: &str) -> String {
  format!("/* @preserve {name} */")
}

/// Prefixes declarations of [`GAS_SPECIAL_FUNCTIONS`] with a
/// `/* @preserve NAME */` marker so minifiers and tree-shakers keep them.
/// Declarations that already carry the marker are skipped, so applying this
/// twice gives the same output as applying it once.
pub fn preserve_gas_functions(code: &str) -> String {
  replace_all_guarded(&GAS_FUNCTION_RE, code, |caps| {
    let start = caps.get(0)?.start();
    let name = &caps[1];
    let marker = preserve_marker(name);
    if code[..start].trim_end().ends_with(&marker) {
      return None;
    }
    Some(format!("{marker} function {name}("))
  })
  .into_owned()
}

#[test]
fn test_special_functions_get_marked() {
  let code = "function onOpen() {}\nasync function doGet(e) {}\nfunction helper() {}";
  assert_eq!(
    preserve_gas_functions(code),
    "/* @preserve onOpen */ function onOpen() {}\nasync /* @preserve doGet */ function doGet(e) {}\nfunction helper() {}"
  );
}

#[test]
fn test_idempotent() {
  let code = "function onEdit(e) {\n  run(e)\n}\nfunction doPost (e) {}";
  let once = preserve_gas_functions(code);
  assert_eq!(once, "/* @preserve onEdit */ function onEdit(e) {\n  run(e)\n}\n/* @preserve doPost */ function doPost(e) {}");
  assert_eq!(preserve_gas_functions(&once), once);
}

#[test]
fn test_prefix_names_are_not_matched() {
  let code = "function onOpenSidebar() {}\nfunction myonEdit() {}\nconst x = onEdit(e)";
  assert_eq!(preserve_gas_functions(code), code);
}
