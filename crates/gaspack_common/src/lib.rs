mod bundler_config;
mod gas_plugin_options;
mod types;

pub use crate::{
  bundler_config::{
    compiler_options::{CompilerOptions, LegalComments},
    es_target::ESTarget,
    input_item::InputItem,
    is_external::IsExternal,
    output_format::OutputFormat,
    BuildOptions, BundlerConfig, ResolveOptions,
  },
  gas_plugin_options::{
    normalized_gas_plugin_options::NormalizedGasPluginOptions, GasPluginOptions,
  },
  types::{
    maps::{AliasMap, EntryMap},
    output::{Output, OutputAsset, OutputBundle, OutputChunk},
  },
};
