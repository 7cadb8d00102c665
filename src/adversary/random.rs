use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::Adversary;
use crate::basics::{elements, Element};

/// Baseline with no adversarial intent: every element carries a hidden value
/// from a seeded shuffle of `0..n`.
pub struct RandomAdversary {
  values: Vec<usize>,
  data: Vec<Element>,
  comparisons: u64,
}

impl RandomAdversary {
  pub fn new(n: usize, seed: u64) -> Self {
    debug!(n, seed, "random adversary");
    let mut values = (0..n).collect::<Vec<_>>();
    values.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    Self { values, data: elements(n), comparisons: 0 }
  }

  pub fn value(&self, element: Element) -> usize {
    self.values[element.id()]
  }
}

impl Adversary for RandomAdversary {
  fn name(&self) -> &'static str {
    "Random"
  }
  fn compare(&mut self, x: Element, y: Element) -> Ordering {
    self.comparisons += 1;
    self.value(x).cmp(&self.value(y))
  }
  fn num_comparisons(&self) -> u64 {
    self.comparisons
  }
  fn current_data(&self) -> &[Element] {
    &self.data
  }
  fn current_data_mut(&mut self) -> &mut [Element] {
    &mut self.data
  }
}
