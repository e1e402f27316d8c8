mod build_config;
mod config_processor;
mod manifest;
mod plugin;
mod transformer;
mod utils;

pub mod discovery;
pub mod path_alias;
pub mod rewrite;

pub use crate::{
  build_config::{apply_gas_build_config, log_detected_files, GAS_TARGET},
  config_processor::{process_gas_config, project_root},
  manifest::{copy_manifest, MANIFEST_FILE},
  plugin::{gas_plugin, GasPlugin, GAS_PLUGIN_NAME},
  transformer::{finalize_chunk, is_transformable_id, transform_module},
  utils::normalize_options::normalize_options,
};
pub use gaspack_common::*;
