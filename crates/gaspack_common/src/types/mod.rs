pub mod maps;
pub mod output;
