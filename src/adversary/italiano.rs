use std::cmp::Ordering;

use tracing::{debug, trace};

use super::Adversary;
use crate::basics::{elements, Element};
use crate::closure::ItalianoDag;
use crate::dags::{commit, Dag};

/// Keeps the full transitive closure of its answers and, for an unrelated
/// pair, picks the direction that adds the fewest closure pairs, committing
/// to as little order as possible.
pub struct ClosureAdversary {
  dag: ItalianoDag,
  data: Vec<Element>,
  comparisons: u64,
}

impl ClosureAdversary {
  pub fn new(n: usize) -> Self {
    debug!(n, "closure adversary");
    Self { dag: ItalianoDag::new(n), data: elements(n), comparisons: 0 }
  }

  pub fn dag(&self) -> &ItalianoDag {
    &self.dag
  }

  fn closure_cost(&self, source: usize, target: usize) -> usize {
    match self.dag.count_closure_edges(source, target) {
      Ok(count) => count,
      Err(error) => panic!("unrelated pair reported as related: {}", error),
    }
  }
}

impl Adversary for ClosureAdversary {
  fn name(&self) -> &'static str {
    "Closure"
  }

  fn compare(&mut self, x: Element, y: Element) -> Ordering {
    self.comparisons += 1;
    if x == y {
      return Ordering::Equal;
    }
    let (x, y) = (x.id(), y.id());
    if self.dag.exists_path(x, y) {
      return Ordering::Less;
    }
    if self.dag.exists_path(y, x) {
      return Ordering::Greater;
    }
    let forward = self.closure_cost(x, y);
    let backward = self.closure_cost(y, x);
    let (source, target, answer) = if backward < forward {
      (y, x, Ordering::Greater)
    } else {
      (x, y, Ordering::Less)
    };
    trace!(source, target, cost = forward.min(backward), "closure adversary commits");
    commit(&mut self.dag, source, target);
    answer
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
