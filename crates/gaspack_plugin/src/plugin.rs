use std::{borrow::Cow, fmt::Debug, sync::Arc};

use async_trait::async_trait;
use gaspack_common::{BundlerConfig, OutputBundle};

use crate::{
  HookNoopReturn, HookTransformArgs, HookTransformReturn, HookWriteBundleArgs, PluginOrder,
};

/// A build plugin. Every hook has a no-op default, so an implementation only
/// overrides the stages it cares about.
#[async_trait]
pub trait Plugin: Debug + Send + Sync + 'static {
  fn name(&self) -> Cow<'static, str>;

  fn order(&self) -> Option<PluginOrder> {
    None
  }

  /// Runs once before the build, with the configuration still mutable.
  async fn config(&self, _config: &mut BundlerConfig) -> HookNoopReturn {
    Ok(())
  }

  /// Runs once per module. `Ok(None)` leaves the module as it is.
  fn transform(&self, _args: &HookTransformArgs<'_>) -> HookTransformReturn {
    Ok(None)
  }

  /// Runs once after all chunks were rendered, before anything is written.
  fn generate_bundle(&self, _bundle: &mut OutputBundle) -> HookNoopReturn {
    Ok(())
  }

  /// Runs once after every output file is on disk.
  fn write_bundle(&self, _args: &HookWriteBundleArgs<'_>) -> HookNoopReturn {
    Ok(())
  }
}

pub type SharedPlugin = Arc<dyn Plugin>;
