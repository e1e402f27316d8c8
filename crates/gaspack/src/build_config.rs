use std::path::Path;

use gaspack_common::{
  AliasMap, BundlerConfig, ESTarget, EntryMap, InputItem, IsExternal, OutputFormat,
};
use gaspack_utils::path_ext::PathExt;
use itertools::Itertools;

/// The newest language level the Apps Script V8 runtime is known to accept.
pub const GAS_TARGET: ESTarget = ESTarget::Es2017;

/// Points the bundler at `entries` and switches on the output shape the Apps
/// Script runtime needs: one self-contained ES module per entry, nothing
/// external, no tree-shaking, minification or source maps.
///
/// `aliases` are merged into `resolve.alias` without replacing aliases that are
/// already declared; `None` leaves the alias table alone. Fields not listed
/// here keep whatever the caller configured.
pub fn apply_gas_build_config(
  config: &mut BundlerConfig,
  entries: &EntryMap,
  out_dir: &str,
  aliases: Option<&AliasMap>,
) {
  let build = &mut config.build;
  build.input = Some(entries.iter().map(InputItem::from).collect());
  build.lib = Some(false);
  build.out_dir = Some(out_dir.to_string());
  build.entry_filenames = Some("[name].js".to_string());
  build.format = Some(OutputFormat::Esm);
  build.code_splitting = Some(false);
  build.inline_dynamic_imports = Some(false);
  build.external = Some(IsExternal::never());
  build.treeshake = Some(false);
  build.minify = Some(false);
  build.sourcemap = Some(false);
  build.target = Some(GAS_TARGET);

  if let Some(aliases) = aliases {
    let alias = config.resolve.alias.get_or_insert_with(AliasMap::default);
    for (key, target) in aliases {
      alias.entry(key.clone()).or_insert_with(|| target.clone());
    }
  }
}

pub fn log_detected_files(entries: &EntryMap, cwd: &Path) {
  tracing::info!(
    "Auto-detected {} source file(s):\n{}",
    entries.len(),
    entries
      .iter()
      .map(|(name, path)| {
        let path = path.strip_prefix(cwd).unwrap_or(path);
        format!("  {name}: {}", path.to_slash_string())
      })
      .join("\n")
  );
}
