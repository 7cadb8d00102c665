use std::str::FromStr;

use super::{Adversary, BrodalAdversary, ClosureAdversary, DagAdversary, McIlroyKiller, RandomAdversary};
use crate::error::AdversaryError;

/// Every adversary by name, for drivers that pick them from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdversaryKind {
  Random,
  Brodal,
  Dag,
  Closure,
  McIlroy,
}

impl AdversaryKind {
  pub const ALL: [AdversaryKind; 5] = [
    AdversaryKind::Random,
    AdversaryKind::Brodal,
    AdversaryKind::Dag,
    AdversaryKind::Closure,
    AdversaryKind::McIlroy,
  ];

  pub fn name(self) -> &'static str {
    match self {
      AdversaryKind::Random => "random",
      AdversaryKind::Brodal => "brodal",
      AdversaryKind::Dag => "dag",
      AdversaryKind::Closure => "closure",
      AdversaryKind::McIlroy => "mcilroy",
    }
  }

  /// A fresh adversary over `n` elements; `seed` only matters to `Random`.
  pub fn build(self, n: usize, seed: u64) -> Box<dyn Adversary> {
    match self {
      AdversaryKind::Random => Box::new(RandomAdversary::new(n, seed)),
      AdversaryKind::Brodal => Box::new(BrodalAdversary::new(n)),
      AdversaryKind::Dag => Box::new(DagAdversary::new(n)),
      AdversaryKind::Closure => Box::new(ClosureAdversary::new(n)),
      AdversaryKind::McIlroy => Box::new(McIlroyKiller::new(n)),
    }
  }
}

impl std::fmt::Display for AdversaryKind {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for AdversaryKind {
  type Err = AdversaryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let lower = s.trim().to_ascii_lowercase();
    AdversaryKind::ALL
      .into_iter()
      .find(|kind| kind.name() == lower)
      .ok_or_else(|| AdversaryError::UnknownAdversary(s.to_string()))
  }
}
