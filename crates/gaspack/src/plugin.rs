use std::{borrow::Cow, sync::Arc};

use async_trait::async_trait;
use gaspack_common::{
  BundlerConfig, GasPluginOptions, NormalizedGasPluginOptions, Output, OutputBundle,
};
use gaspack_fs::{FileSystem, OsFileSystem};
use gaspack_plugin::{
  HookNoopReturn, HookTransformArgs, HookTransformOutput, HookTransformReturn,
  HookWriteBundleArgs, Plugin, PluginOrder,
};

use crate::{
  config_processor::process_gas_config,
  manifest::copy_manifest,
  transformer::{finalize_chunk, is_transformable_id, transform_module},
  utils::normalize_options::normalize_options,
};

pub const GAS_PLUGIN_NAME: &str = "gaspack:gas";

/// Adapts a build to the Google Apps Script runtime. Runs after TypeScript has
/// been compiled to JavaScript.
#[derive(Debug)]
pub struct GasPlugin<F = OsFileSystem> {
  options: Arc<NormalizedGasPluginOptions>,
  fs: F,
}

impl GasPlugin {
  pub fn new(options: GasPluginOptions) -> Self {
    Self::with_fs(options, OsFileSystem)
  }
}

impl<F: FileSystem + Clone + 'static> GasPlugin<F> {
  pub fn with_fs(options: GasPluginOptions, fs: F) -> Self {
    Self { options: Arc::new(normalize_options(options)), fs }
  }

  pub fn options(&self) -> &NormalizedGasPluginOptions {
    &self.options
  }
}

pub fn gas_plugin(options: GasPluginOptions) -> GasPlugin {
  GasPlugin::new(options)
}

#[async_trait]
impl<F: FileSystem + Clone + std::fmt::Debug + 'static> Plugin for GasPlugin<F> {
  fn name(&self) -> Cow<'static, str> {
    Cow::Borrowed(GAS_PLUGIN_NAME)
  }

  fn order(&self) -> Option<PluginOrder> {
    Some(PluginOrder::Post)
  }

  async fn config(&self, config: &mut BundlerConfig) -> HookNoopReturn {
    process_gas_config(&self.fs, config, &self.options).await;
    Ok(())
  }

  fn transform(&self, args: &HookTransformArgs<'_>) -> HookTransformReturn {
    if !is_transformable_id(args.id) {
      return Ok(None);
    }
    Ok(Some(HookTransformOutput { code: transform_module(args.code, &self.options), map: None }))
  }

  fn generate_bundle(&self, bundle: &mut OutputBundle) -> HookNoopReturn {
    for (filename, output) in bundle.iter_mut() {
      if let Output::Chunk(chunk) = output {
        if filename.ends_with(".js") {
          chunk.code = finalize_chunk(&chunk.code, &self.options);
        }
      }
    }
    Ok(())
  }

  fn write_bundle(&self, args: &HookWriteBundleArgs<'_>) -> HookNoopReturn {
    if self.options.copy_manifest {
      copy_manifest(&self.fs, args.cwd, args.dir);
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::{fs, sync::Arc};

  use gaspack_common::{
    BundlerConfig, GasPluginOptions, Output, OutputAsset, OutputBundle, OutputChunk,
  };
  use gaspack_plugin::{HookTransformArgs, HookWriteBundleArgs, Plugin, PluginDriver, PluginOrder};

  use super::{gas_plugin, GAS_PLUGIN_NAME};
  use crate::manifest::MANIFEST_FILE;

  #[test]
  fn test_identity() {
    let plugin = gas_plugin(GasPluginOptions::default());
    assert_eq!(plugin.name(), GAS_PLUGIN_NAME);
    assert_eq!(plugin.order(), Some(PluginOrder::Post));
  }

  #[test]
  fn test_transform_skips_foreign_ids() {
    let plugin = gas_plugin(GasPluginOptions::default());
    let code = "export const x = 1";

    assert!(plugin.transform(&HookTransformArgs { id: "/p/src/main.ts", code }).unwrap().is_none());
    assert!(plugin
      .transform(&HookTransformArgs { id: "/p/node_modules/x/index.js", code })
      .unwrap()
      .is_none());

    let output = plugin.transform(&HookTransformArgs { id: "/p/src/main.js", code }).unwrap().unwrap();
    assert_eq!(output.code, "const x = 1");
    assert!(output.map.is_none());
  }

  #[test]
  fn test_generate_bundle_only_touches_js_chunks() {
    let plugin = gas_plugin(GasPluginOptions::default());
    let mut bundle = OutputBundle::default();
    bundle.insert(
      "main.js".to_string(),
      OutputChunk::new("main", "main.js", "export const onOpen = () => {\n  console.log(1)\n}".to_string())
        .into(),
    );
    bundle.insert(
      "main.mjs".to_string(),
      OutputChunk::new("main", "main.mjs", "console.log(2)".to_string()).into(),
    );
    bundle.insert(
      "notes.txt".to_string(),
      OutputAsset { filename: "notes.txt".to_string(), content: "console.log(3)".to_string() }.into(),
    );

    plugin.generate_bundle(&mut bundle).unwrap();

    let code = |name: &str| String::from_utf8_lossy(bundle[name].content_as_bytes()).into_owned();
    assert_eq!(code("main.js"), "/* @preserve onOpen */ function onOpen() {\n  Logger.log(1)\n}");
    assert_eq!(code("main.mjs"), "console.log(2)");
    assert_eq!(code("notes.txt"), "console.log(3)");
    assert!(matches!(bundle["notes.txt"], Output::Asset(_)));
  }

  #[tokio::test]
  async fn test_full_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/main.ts"), "export function doGet() {}").unwrap();
    fs::write(root.join(MANIFEST_FILE), "{}").unwrap();

    let driver = PluginDriver::new(vec![Arc::new(gas_plugin(GasPluginOptions {
      out_dir: Some("build".to_string()),
      ..Default::default()
    }))]);

    let mut config = BundlerConfig { cwd: Some(root.to_path_buf()), ..Default::default() };
    driver.config(&mut config).await.unwrap();
    assert_eq!(config.build.out_dir.as_deref(), Some("build"));

    let code = driver.transform("/p/src/main.js", "export function doGet() {}".to_string()).unwrap();
    assert_eq!(code, "/* @preserve doGet */ function doGet() {}");

    let bundle = OutputBundle::default();
    let out_dir = root.join("build");
    driver.write_bundle(&HookWriteBundleArgs { cwd: root, dir: &out_dir, bundle: &bundle }).unwrap();
    assert!(out_dir.join(MANIFEST_FILE).exists());
  }

  #[test]
  fn test_manifest_follows_the_written_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MANIFEST_FILE), "{}").unwrap();

    let plugin = gas_plugin(GasPluginOptions { out_dir: Some("dist".to_string()), ..Default::default() });
    let bundle = OutputBundle::default();
    let out_dir = dir.path().join("release");
    plugin.write_bundle(&HookWriteBundleArgs { cwd: dir.path(), dir: &out_dir, bundle: &bundle }).unwrap();

    assert!(out_dir.join(MANIFEST_FILE).exists());
    assert!(!dir.path().join("dist").exists());
  }

  #[test]
  fn test_manifest_copy_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MANIFEST_FILE), "{}").unwrap();

    let plugin = gas_plugin(GasPluginOptions { copy_manifest: Some(false), ..Default::default() });
    let bundle = OutputBundle::default();
    let out_dir = dir.path().join("dist");
    plugin.write_bundle(&HookWriteBundleArgs { cwd: dir.path(), dir: &out_dir, bundle: &bundle }).unwrap();

    assert!(!out_dir.exists());
  }
}
