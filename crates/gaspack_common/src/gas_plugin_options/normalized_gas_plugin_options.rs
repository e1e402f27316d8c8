use crate::AliasMap;

#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone)]
pub struct NormalizedGasPluginOptions {
  // --- Discovery
  pub auto_detect: bool,
  pub include: Vec<String>,
  pub exclude: Vec<String>,

  // --- Output
  pub out_dir: String,
  pub copy_manifest: bool,

  // --- Rewriting
  pub transform_logger: bool,
  pub preserve_comments: bool,

  // --- Resolve
  pub enable_path_aliases: bool,
  pub auto_detect_path_aliases: bool,
  pub path_aliases: AliasMap,
}
