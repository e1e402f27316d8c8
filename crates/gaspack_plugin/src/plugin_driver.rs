use anyhow::Context;
use gaspack_common::{BundlerConfig, OutputBundle};
use gaspack_error::{BuildError, BuildResult};
use tracing::trace;

use crate::{HookTransformArgs, HookWriteBundleArgs, PluginOrder, SharedPlugin};

/// Runs every registered plugin for each build stage, `Pre` plugins first and
/// `Post` plugins last. Registration order is kept within a group.
#[derive(Debug)]
pub struct PluginDriver {
  plugins: Vec<SharedPlugin>,
}

impl PluginDriver {
  pub fn new(mut plugins: Vec<SharedPlugin>) -> Self {
    plugins.sort_by_key(|plugin| PluginOrder::rank(plugin.order()));
    Self { plugins }
  }

  pub fn plugins(&self) -> &[SharedPlugin] {
    &self.plugins
  }

  pub async fn config(&self, config: &mut BundlerConfig) -> BuildResult<()> {
    let mut errors = BuildError::default();
    for plugin in &self.plugins {
      trace!(plugin = %plugin.name(), "config");
      if let Err(error) = plugin.config(config).await {
        errors.push(error.context(format!("plugin `{}` failed in `config`", plugin.name())));
      }
    }
    errors.into_result(())
  }

  /// Feeds the output of each plugin into the next one.
  pub fn transform(&self, id: &str, code: String) -> BuildResult<String> {
    let mut code = code;
    for plugin in &self.plugins {
      trace!(plugin = %plugin.name(), id, "transform");
      let output = plugin
        .transform(&HookTransformArgs { id, code: &code })
        .with_context(|| format!("plugin `{}` failed in `transform` for {id}", plugin.name()))?;
      if let Some(output) = output {
        code = output.code;
      }
    }
    Ok(code)
  }

  pub fn generate_bundle(&self, bundle: &mut OutputBundle) -> BuildResult<()> {
    let mut errors = BuildError::default();
    for plugin in &self.plugins {
      trace!(plugin = %plugin.name(), "generate_bundle");
      if let Err(error) = plugin.generate_bundle(bundle) {
        errors
          .push(error.context(format!("plugin `{}` failed in `generate_bundle`", plugin.name())));
      }
    }
    errors.into_result(())
  }

  pub fn write_bundle(&self, args: &HookWriteBundleArgs<'_>) -> BuildResult<()> {
    let mut errors = BuildError::default();
    for plugin in &self.plugins {
      trace!(plugin = %plugin.name(), "write_bundle");
      if let Err(error) = plugin.write_bundle(args) {
        errors.push(error.context(format!("plugin `{}` failed in `write_bundle`", plugin.name())));
      }
    }
    errors.into_result(())
  }
}

#[cfg(test)]
mod tests {
  use std::{borrow::Cow, sync::Arc};

  use async_trait::async_trait;
  use gaspack_common::{BundlerConfig, OutputChunk};

  use super::PluginDriver;
  use crate::{
    HookNoopReturn, HookTransformArgs, HookTransformOutput, HookTransformReturn, Plugin,
    PluginOrder, SharedPlugin,
  };

  #[derive(Debug)]
  struct Suffix {
    name: &'static str,
    order: Option<PluginOrder>,
  }

  #[async_trait]
  impl Plugin for Suffix {
    fn name(&self) -> Cow<'static, str> {
      Cow::Borrowed(self.name)
    }

    fn order(&self) -> Option<PluginOrder> {
      self.order
    }

    async fn config(&self, config: &mut BundlerConfig) -> HookNoopReturn {
      let out_dir = config.build.out_dir.get_or_insert_with(String::new);
      out_dir.push_str(self.name);
      Ok(())
    }

    fn transform(&self, args: &HookTransformArgs<'_>) -> HookTransformReturn {
      Ok(Some(HookTransformOutput { code: format!("{}{}", args.code, self.name), map: None }))
    }
  }

  #[derive(Debug)]
  struct Failing;

  #[async_trait]
  impl Plugin for Failing {
    fn name(&self) -> Cow<'static, str> {
      Cow::Borrowed("failing")
    }

    fn generate_bundle(&self, _bundle: &mut gaspack_common::OutputBundle) -> HookNoopReturn {
      anyhow::bail!("boom")
    }
  }

  fn driver() -> PluginDriver {
    let plugins: Vec<SharedPlugin> = vec![
      Arc::new(Suffix { name: "c", order: Some(PluginOrder::Post) }),
      Arc::new(Suffix { name: "b", order: None }),
      Arc::new(Suffix { name: "a", order: Some(PluginOrder::Pre) }),
    ];
    PluginDriver::new(plugins)
  }

  #[tokio::test]
  async fn config_runs_in_plugin_order() {
    let mut config = BundlerConfig::default();
    driver().config(&mut config).await.unwrap();
    assert_eq!(config.build.out_dir.as_deref(), Some("abc"));
  }

  #[test]
  fn transform_chains_outputs() {
    assert_eq!(driver().transform("main.js", "x".to_string()).unwrap(), "xabc");
  }

  #[test]
  fn generate_bundle_collects_errors() {
    let driver = PluginDriver::new(vec![Arc::new(Failing), Arc::new(Failing)]);
    let mut bundle = gaspack_common::OutputBundle::default();
    bundle.insert(
      "main.js".to_string(),
      OutputChunk::new("main", "main.js", String::from("main()")).into(),
    );

    let errors = driver.generate_bundle(&mut bundle).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.to_string().contains("plugin `failing` failed in `generate_bundle`"));
  }
}
