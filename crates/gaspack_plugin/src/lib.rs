mod plugin;
mod plugin_driver;
mod types;

pub use crate::{
  plugin::{Plugin, SharedPlugin},
  plugin_driver::PluginDriver,
  types::{
    hook_transform_args::HookTransformArgs,
    hook_write_bundle_args::HookWriteBundleArgs,
    plugin_order::PluginOrder,
    HookNoopReturn, HookTransformOutput, HookTransformReturn,
  },
};
