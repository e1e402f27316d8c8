use gaspack_common::NormalizedGasPluginOptions;

use crate::rewrite::{
  preserve_gas_functions, remove_module_statements, transform_arrow_functions, transform_logger,
};

/// Only compiled JavaScript from the project itself is rewritten per module.
pub fn is_transformable_id(id: &str) -> bool {
  let path = id.split_once('?').map_or(id, |(path, _)| path);
  path.ends_with(".js") && !path.split(['/', '\\']).any(|segment| segment == "node_modules")
}

/// Per-module pass: module syntax out, host logger in, trigger functions
/// marked.
pub fn transform_module(code: &str, options: &NormalizedGasPluginOptions) -> String {
  let code = remove_module_statements(code);
  let code = if options.transform_logger { transform_logger(&code) } else { code };
  preserve_gas_functions(&code)
}

/// Pass over each finished chunk. Arrow bindings are converted before the
/// trigger markers are added so functions they turn into get marked too.
pub fn finalize_chunk(code: &str, options: &NormalizedGasPluginOptions) -> String {
  let code = remove_module_statements(code);
  let code = if options.transform_logger { transform_logger(&code) } else { code };
  let code = transform_arrow_functions(&code);
  preserve_gas_functions(&code)
}

#[cfg(test)]
mod tests {
  use gaspack_common::GasPluginOptions;

  use super::{finalize_chunk, is_transformable_id, transform_module};
  use crate::utils::normalize_options::normalize_options;

  #[test]
  fn test_is_transformable_id() {
    assert!(is_transformable_id("/project/src/main.js"));
    assert!(is_transformable_id("/project/src/main.js?v=123"));
    assert!(!is_transformable_id("/project/src/main.ts"));
    assert!(!is_transformable_id("/project/node_modules/lodash/index.js"));
    assert!(!is_transformable_id("/project/src/style.css?inline"));
  }

  #[test]
  fn test_transform_module() {
    let options = normalize_options(GasPluginOptions::default());
    let code = "import {h} from './h'\nexport function onEdit(e){ console.log('x') }";

    let result = transform_module(code, &options);

    assert_eq!(result, "/* @preserve onEdit */ function onEdit(e){ Logger.log('x') }");
  }

  #[test]
  fn test_logger_can_be_kept() {
    let options = normalize_options(GasPluginOptions { transform_logger: Some(false), ..Default::default() });
    assert_eq!(transform_module("console.log(1)", &options), "console.log(1)");
  }

  #[test]
  fn test_finalize_chunk() {
    let options = normalize_options(GasPluginOptions::default());
    let code = [
      "import { format } from './format.js'",
      "export const doGet = (e) => {",
      "  console.warn(format(e))",
      "}",
      "const double = x => x * 2;",
      "export { double }",
    ]
    .join("\n");

    assert_eq!(
      finalize_chunk(&code, &options),
      [
        "/* @preserve doGet */ function doGet(e) {",
        "  Logger.warn(format(e))",
        "}",
        "function double(x) { return x * 2; }",
        "",
      ]
      .join("\n")
    );
  }
}
