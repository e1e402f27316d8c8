#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginOrder {
  Pre,
  Post,
}

impl PluginOrder {
  /// Sort key relative to plugins without an order, which sit at `1`.
  pub fn rank(order: Option<Self>) -> u8 {
    match order {
      Some(Self::Pre) => 0,
      None => 1,
      Some(Self::Post) => 2,
    }
  }
}
