//! Turns the source files of a project into named bundler entries.

mod file_detector;
mod is_empty;

pub use self::{
  file_detector::{detect_source_files, generate_entry_name, DEFAULT_IGNORE, SOURCE_EXTENSION},
  is_empty::is_empty,
};
