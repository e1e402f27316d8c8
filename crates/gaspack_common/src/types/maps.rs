use std::path::PathBuf;

use gaspack_utils::indexmap::FxIndexMap;

/// Entry name -> absolute source path. Insertion order is the sorted order of
/// the discovered paths, so iteration is stable across runs.
pub type EntryMap = FxIndexMap<String, PathBuf>;

/// Alias token (`@`, `~`, `@utils`, ...) -> directory, usually `./`-relative to
/// the project root.
pub type AliasMap = FxIndexMap<String, String>;
