pub mod indexmap;
pub mod path_ext;
pub mod sanitize_entry_name;
pub mod strip_comments;
