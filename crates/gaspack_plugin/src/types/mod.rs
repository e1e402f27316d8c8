pub mod hook_transform_args;
pub mod hook_write_bundle_args;
pub mod plugin_order;

pub type HookNoopReturn = anyhow::Result<()>;

pub type HookTransformReturn = anyhow::Result<Option<HookTransformOutput>>;

#[derive(Debug, Default, Clone)]
pub struct HookTransformOutput {
  pub code: String,
  /// Source maps are never produced for the host, the field only exists so a
  /// plugin can say so explicitly.
  pub map: Option<String>,
}
