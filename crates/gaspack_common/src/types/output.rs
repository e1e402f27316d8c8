use arcstr::ArcStr;
use gaspack_utils::indexmap::FxIndexMap;

/// Output filename -> output, in the order the bundler emitted them.
pub type OutputBundle = FxIndexMap<String, Output>;

#[derive(Debug, Clone)]
pub enum Output {
  Chunk(Box<OutputChunk>),
  Asset(Box<OutputAsset>),
}

impl Output {
  pub fn filename(&self) -> &str {
    match self {
      Self::Chunk(chunk) => chunk.filename.as_str(),
      Self::Asset(asset) => asset.filename(),
    }
  }

  pub fn content_as_bytes(&self) -> &[u8] {
    match self {
      Self::Chunk(chunk) => chunk.code.as_bytes(),
      Self::Asset(asset) => asset.content_as_bytes(),
    }
  }

  pub fn is_chunk(&self) -> bool {
    matches!(self, Self::Chunk(_))
  }
}

/// Executable output. Only chunks are ever rewritten.
#[derive(Debug, Clone)]
pub struct OutputChunk {
  pub name: ArcStr,
  pub filename: ArcStr,
  pub is_entry: bool,
  pub code: String,
}

impl OutputChunk {
  pub fn new(name: impl Into<ArcStr>, filename: impl Into<ArcStr>, code: String) -> Self {
    Self { name: name.into(), filename: filename.into(), is_entry: true, code }
  }
}

#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: String,
  pub content: String,
}

impl OutputAsset {
  pub fn filename(&self) -> &str {
    &self.filename
  }

  pub fn content_as_bytes(&self) -> &[u8] {
    self.content.as_bytes()
  }
}

impl From<OutputChunk> for Output {
  fn from(chunk: OutputChunk) -> Self {
    Self::Chunk(Box::new(chunk))
  }
}

impl From<OutputAsset> for Output {
  fn from(asset: OutputAsset) -> Self {
    Self::Asset(Box::new(asset))
  }
}
