mod args;
mod build;
mod types;

use std::{fs, path::Path, time::Instant};

use ansi_term::Colour;
use anyhow::Context;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use gaspack::{GasPluginOptions, OutputBundle};
use tracing_subscriber::EnvFilter;

use crate::build::{build, BuildOutput};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn init_tracing(silent: bool) {
  let default = if silent { "warn" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_env("GASPACK_LOG").unwrap_or_else(|_| EnvFilter::new(default)))
    .with_target(false)
    .without_time()
    .init();
}

/// Options from `--config`, with command line flags taking precedence.
fn load_options(args: &Commands) -> anyhow::Result<GasPluginOptions> {
  let mut options = match &args.input.config {
    Some(path) => {
      let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
      serde_json::from_str(&content).with_context(|| format!("Invalid options in {}", path.display()))?
    }
    None => GasPluginOptions::default(),
  };

  if let Some(include) = &args.input.include {
    options.include = Some(include.clone());
  }
  if let Some(exclude) = &args.input.exclude {
    options.exclude = Some(exclude.clone());
  }
  if let Some(out_dir) = &args.output.out_dir {
    options.out_dir = Some(out_dir.clone());
  }
  if args.output.no_copy_manifest {
    options.copy_manifest = Some(false);
  }
  if args.enhance.no_transform_logger {
    options.transform_logger = Some(false);
  }
  if args.enhance.no_path_aliases {
    options.enable_path_aliases = Some(false);
  }
  if args.enhance.preserve_comments {
    options.preserve_comments = Some(true);
  }

  Ok(options)
}

fn print_entries(output: &BuildOutput) {
  let dim = Colour::White.dimmed();

  if let Some(target) = output.config.compiler.target {
    println!("{} {}", dim.paint("target"), Colour::Cyan.paint(target.to_string()));
  }

  for item in output.config.build.input.iter().flatten() {
    let name = item.name.as_deref().unwrap_or_default();
    println!("{} {} {}", dim.paint("entry"), Colour::Cyan.paint(name), dim.paint(&item.import));
  }

  for (alias, target) in output.config.resolve.alias.iter().flatten() {
    println!("{} {} {}", dim.paint("alias"), Colour::Cyan.paint(alias), dim.paint(target));
  }
}

fn print_output_assets(bundle: &OutputBundle, out_dir: &Path) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(bundle.len());

  for output in bundle.values() {
    #[allow(clippy::cast_precision_loss)]
    let size = format!("{:.2}", output.content_as_bytes().len() as f64 / 1024.0);
    let filename = output.filename().to_string();

    if size.len() > right {
      right = size.len();
    }

    if filename.len() > left {
      left = filename.len();
    }

    assets.push((filename, size, output.is_chunk()));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;
  let dir = format!("{}/", out_dir.display());

  for (filename, size, is_chunk) in assets {
    let asset_type = if is_chunk { "chunk" } else { "asset" };
    let filename_len = filename.len();

    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint(dir.as_str()),
      color.paint(filename),
      "",
      dim.paint(asset_type),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    );
  }
}

#[tokio::main]
async fn main() {
  let args = Commands::parse();
  init_tracing(args.enhance.silent);

  let options = match load_options(&args) {
    Ok(options) => options,
    Err(error) => {
      println!("{} {error:#}", Colour::Red.paint("Error:"));
      return;
    }
  };

  let inputs = args.input.input.clone().unwrap_or_default();
  let target = args.enhance.target.clone().map(Into::into);

  let start = Instant::now();
  match build(args.input.cwd.clone(), options, target, &inputs).await {
    Ok(output) => {
      if !args.enhance.silent {
        print_entries(&output);

        if !output.bundle.is_empty() {
          print_output_assets(&output.bundle, &output.out_dir);
        }
      }

      let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
    }
    Err(errors) => {
      for error in &*errors {
        println!("{} {error:#}", Colour::Red.paint("Error:"));
      }
    }
  }
}
