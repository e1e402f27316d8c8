use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context;
use gaspack::{gas_plugin, project_root, BundlerConfig, ESTarget, GasPluginOptions, OutputBundle, OutputChunk};
use gaspack_error::BuildResult;
use gaspack_fs::{FileSystem, OsFileSystem};
use gaspack_plugin::{HookWriteBundleArgs, PluginDriver, SharedPlugin};

pub struct BuildOutput {
  pub config: BundlerConfig,
  pub bundle: OutputBundle,
  pub out_dir: PathBuf,
}

/// Runs the plugin hooks the way a bundler would: `config` once, `transform`
/// for every input module, `generate_bundle` over the resulting chunks, then
/// writes them and calls `write_bundle`.
pub async fn build(
  cwd: Option<PathBuf>,
  options: GasPluginOptions,
  target: Option<ESTarget>,
  inputs: &[PathBuf],
) -> BuildResult<BuildOutput> {
  let fs = OsFileSystem;
  let plugin = Arc::new(gas_plugin(options));
  let driver = PluginDriver::new(vec![Arc::clone(&plugin) as SharedPlugin]);

  let mut config = BundlerConfig { cwd, ..Default::default() };
  config.compiler.target = target;
  driver.config(&mut config).await?;

  let cwd = project_root(&config);
  let mut bundle = OutputBundle::default();
  for input in inputs {
    let path = cwd.join(input);
    let code =
      fs.read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let code = driver.transform(&path.to_string_lossy(), code)?;

    let name = chunk_name(&path);
    let filename = format!("{name}.js");
    bundle.insert(filename.clone(), OutputChunk::new(name, filename, code).into());
  }

  driver.generate_bundle(&mut bundle)?;

  let out_dir = cwd.join(config.build.out_dir.as_deref().unwrap_or(&plugin.options().out_dir));
  if !bundle.is_empty() {
    fs.create_dir_all(&out_dir)
      .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    for output in bundle.values() {
      let dest = out_dir.join(output.filename());
      fs.write(&dest, output.content_as_bytes())
        .with_context(|| format!("Failed to write {}", dest.display()))?;
    }
  }

  driver.write_bundle(&HookWriteBundleArgs { cwd: &cwd, dir: &out_dir, bundle: &bundle })?;

  Ok(BuildOutput { config, bundle, out_dir })
}

fn chunk_name(path: &Path) -> String {
  path.file_stem().map_or_else(|| "index".to_string(), |stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
  use std::fs;

  use gaspack::{GasPluginOptions, MANIFEST_FILE};

  use super::build;

  #[tokio::test]
  async fn test_build() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("compiled")).unwrap();
    fs::write(root.join("src/main.ts"), "export function onOpen() {}").unwrap();
    fs::write(root.join(MANIFEST_FILE), r#"{ "runtimeVersion": "V8" }"#).unwrap();
    fs::write(
      root.join("compiled/main.js"),
      "import { menu } from './menu.js'\nexport function onOpen() {\n  console.log(menu)\n}\n",
    )
    .unwrap();

    let output = build(
      Some(root.to_path_buf()),
      GasPluginOptions::default(),
      None,
      &["compiled/main.js".into()],
    )
    .await
    .unwrap();

    assert_eq!(output.out_dir, root.join("dist"));
    assert_eq!(output.bundle.keys().collect::<Vec<_>>(), ["main.js"]);
    assert_eq!(
      fs::read_to_string(root.join("dist/main.js")).unwrap(),
      "/* @preserve onOpen */ function onOpen() {\n  Logger.log(menu)\n}\n"
    );
    assert!(root.join("dist").join(MANIFEST_FILE).exists());
  }

  #[tokio::test]
  async fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result =
      build(Some(dir.path().to_path_buf()), GasPluginOptions::default(), None, &["nope.js".into()]).await;

    let errors = result.err().unwrap();
    assert!(errors.to_string().contains("Failed to read"));
  }
}
