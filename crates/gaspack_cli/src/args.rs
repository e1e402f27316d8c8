use std::path::PathBuf;

use clap::Args;

use crate::types::es_target::ESTarget;

#[derive(Args)]
pub struct InputArgs {
  /// Project root, defaults to the current directory.
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// JSON file with plugin options (`autoDetect`, `include`, `pathAliases`, ...).
  #[clap(long)]
  pub config: Option<PathBuf>,

  #[clap(long, action = clap::ArgAction::Append)]
  pub include: Option<Vec<String>>,

  #[clap(long, action = clap::ArgAction::Append)]
  pub exclude: Option<Vec<String>>,

  /// Compiled JavaScript modules to run through the plugin.
  #[clap(long, action = clap::ArgAction::Append)]
  pub input: Option<Vec<PathBuf>>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub out_dir: Option<String>,

  #[clap(long)]
  pub no_copy_manifest: bool,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long)]
  pub target: Option<ESTarget>,

  #[clap(long)]
  pub no_transform_logger: bool,

  #[clap(long)]
  pub no_path_aliases: bool,

  #[clap(long)]
  pub preserve_comments: bool,

  #[clap(long, short = 's')]
  pub silent: bool,
}
