use std::path::Path;

use gaspack_common::OutputBundle;

#[derive(Debug)]
pub struct HookWriteBundleArgs<'a> {
  /// Project root the build ran in.
  pub cwd: &'a Path,
  /// Directory the bundle was written to.
  pub dir: &'a Path,
  pub bundle: &'a OutputBundle,
}
