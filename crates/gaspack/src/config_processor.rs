use std::path::{Path, PathBuf};

use gaspack_common::{BundlerConfig, CompilerOptions, LegalComments, NormalizedGasPluginOptions};
use gaspack_fs::FileSystem;
use sugar_path::SugarPath;

use crate::{
  build_config::{apply_gas_build_config, log_detected_files, GAS_TARGET},
  discovery::detect_source_files,
  path_alias::resolve_path_aliases,
};

/// The absolute project root, `config.cwd` or the process working directory.
pub fn project_root(config: &BundlerConfig) -> PathBuf {
  config.cwd.as_deref().unwrap_or(Path::new("")).absolutize()
}

/// Everything the plugin does to the build config: compiler settings first,
/// then entry discovery, alias resolution and the output shape. When discovery
/// is on but finds no files the build options are left alone.
pub async fn process_gas_config<F: FileSystem + Clone + 'static>(
  fs: &F,
  config: &mut BundlerConfig,
  options: &NormalizedGasPluginOptions,
) {
  apply_compiler_options(&mut config.compiler, options.preserve_comments);

  if !options.auto_detect {
    return;
  }

  let cwd = project_root(config);
  let entries = detect_source_files(fs, &cwd, &options.include, &options.exclude).await;
  if entries.is_empty() {
    tracing::warn!("No source files found in {}", options.include.join(", "));
    return;
  }

  let aliases = resolve_path_aliases(fs, &cwd, config, options);
  apply_gas_build_config(config, &entries, &options.out_dir, aliases.as_ref());
  log_detected_files(&entries, &cwd);
}

fn apply_compiler_options(compiler: &mut CompilerOptions, preserve_comments: bool) {
  compiler.target.get_or_insert(GAS_TARGET);
  // Trigger functions are looked up by name at runtime.
  compiler.keep_names = Some(true);

  if preserve_comments {
    compiler.legal_comments = Some(LegalComments::Inline);
    compiler.minify_whitespace = Some(false);
    compiler.minify_identifiers = Some(false);
    compiler.minify_syntax = Some(false);
    compiler.remove_comments = Some(false);
  }
}
