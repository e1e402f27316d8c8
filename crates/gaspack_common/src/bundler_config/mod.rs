pub mod compiler_options;
pub mod es_target;
pub mod input_item;
pub mod is_external;
pub mod output_format;

use std::path::PathBuf;

use crate::{AliasMap, CompilerOptions, ESTarget, InputItem, IsExternal, OutputFormat};

/// The build tool's configuration as plugins see it in the `config` hook.
/// Unset fields mean "use the tool's own default"; plugins only ever fill in or
/// override individual fields.
#[derive(Default, Debug, Clone)]
pub struct BundlerConfig {
  pub cwd: Option<PathBuf>,
  pub build: BuildOptions,
  pub resolve: ResolveOptions,
  pub compiler: CompilerOptions,
}

#[derive(Default, Debug, Clone)]
pub struct BuildOptions {
  // --- Input
  pub input: Option<Vec<InputItem>>,
  pub lib: Option<bool>,

  // --- Output
  pub out_dir: Option<String>,
  pub entry_filenames: Option<String>,
  pub chunk_filenames: Option<String>,
  pub format: Option<OutputFormat>,
  pub code_splitting: Option<bool>,
  pub inline_dynamic_imports: Option<bool>,
  pub external: Option<IsExternal>,
  pub treeshake: Option<bool>,
  pub minify: Option<bool>,
  pub sourcemap: Option<bool>,
  pub target: Option<ESTarget>,
}

#[derive(Default, Debug, Clone)]
pub struct ResolveOptions {
  pub alias: Option<AliasMap>,
  pub extensions: Option<Vec<String>>,
}
