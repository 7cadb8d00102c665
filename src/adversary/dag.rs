use std::cmp::Ordering;

use tracing::{debug, trace};

use super::Adversary;
use crate::basics::{elements, Element};
use crate::dags::{commit, CachedDag, Dag};

/// Forces quadratic behaviour out of naive sorts by recording every answer as
/// an edge `lesser -> greater` and, for unrelated pairs, putting the element
/// that already has more descendants first.
pub struct DagAdversary<D: Dag = CachedDag> {
  dag: D,
  data: Vec<Element>,
  comparisons: u64,
}

impl DagAdversary<CachedDag> {
  pub fn new(n: usize) -> Self {
    Self::with_dag(CachedDag::new(n))
  }
}

impl<D: Dag> DagAdversary<D> {
  /// Starts from relations already present in `dag`.
  pub fn with_dag(dag: D) -> Self {
    debug!(n = dag.len(), "dag adversary");
    Self { data: elements(dag.len()), dag, comparisons: 0 }
  }

  pub fn dag(&self) -> &D {
    &self.dag
  }
}

impl<D: Dag> Adversary for DagAdversary<D> {
  fn name(&self) -> &'static str {
    "DAG"
  }

  fn compare(&mut self, x: Element, y: Element) -> Ordering {
    self.comparisons += 1;
    if x == y {
      return Ordering::Equal;
    }
    let (x, y) = (x.id(), y.id());
    let forward = self.dag.probe(x, y);
    if forward.reaches {
      return Ordering::Less;
    }
    let backward = self.dag.probe(y, x);
    if backward.reaches {
      return Ordering::Greater;
    }
    let (source, target, answer) = if forward.descendants < backward.descendants {
      (y, x, Ordering::Greater)
    } else {
      (x, y, Ordering::Less)
    };
    trace!(source, target, "dag adversary commits");
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
