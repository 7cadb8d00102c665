use tracing::debug;

use super::{Adjacency, Dag, Probe};
use crate::error::Result;

/// Depth-first reachability with a memoised descendant count per vertex.
///
/// Every search from a source is exhaustive, so its count is recorded for
/// free. Entries carry the edge generation they were computed in and go
/// stale as soon as any edge is inserted.
pub struct CachedDag {
  adjacency: Adjacency,
  descendants: Vec<(u64, usize)>,
  generation: u64,
}

impl CachedDag {
  fn remember(&mut self, source: usize, descendants: usize) {
    self.descendants[source] = (self.generation, descendants);
  }

  fn cached(&self, source: usize) -> Option<usize> {
    let (generation, descendants) = self.descendants[source];
    (generation == self.generation).then_some(descendants)
  }
}

impl Dag for CachedDag {
  fn new(len: usize) -> Self {
    debug!(len, "cached dag");
    Self {
      adjacency: Adjacency::new(len),
      descendants: vec![(0, 0); len],
      generation: 1,
    }
  }
  fn len(&self) -> usize {
    self.adjacency.len()
  }
  fn add_edge(&mut self, source: usize, target: usize) -> Result<()> {
    if self.adjacency.insert(source, target)? {
      self.generation += 1;
    }
    Ok(())
  }
  fn exists_path(&mut self, source: usize, target: usize) -> bool {
    self.probe(source, target).reaches
  }
  fn count_descendants(&mut self, source: usize) -> usize {
    if let Some(descendants) = self.cached(source) {
      return descendants;
    }
    let descendants = self.adjacency.probe(source, None, true).descendants;
    self.remember(source, descendants);
    descendants
  }
  fn probe(&mut self, source: usize, target: usize) -> Probe {
    let probe = self.adjacency.probe(source, Some(target), true);
    self.remember(source, probe.descendants);
    probe
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dags::shared_tests;

  #[test]
  fn shared_behaviour() {
    shared_tests::run_all::<CachedDag>();
  }

  #[test]
  fn count_after_path_query_on_parent() {
    let mut dag = CachedDag::new(2);
    dag.add_edge(0, 1).unwrap();
    dag.exists_path(0, 1);
    assert_eq!(dag.count_descendants(0), 1);
  }

  #[test]
  fn count_on_leaf_after_unrelated_query() {
    let mut dag = CachedDag::new(3);
    dag.add_edge(0, 1).unwrap();
    dag.add_edge(0, 2).unwrap();
    dag.exists_path(1, 2);
    assert_eq!(dag.count_descendants(1), 0);
    assert_eq!(dag.count_descendants(0), 2);
  }

  #[test]
  fn cache_is_invalidated_by_new_edges() {
    let mut dag = CachedDag::new(3);
    dag.add_edge(1, 2).unwrap();
    assert_eq!(dag.count_descendants(0), 0);
    dag.add_edge(0, 1).unwrap();
    assert_eq!(dag.count_descendants(0), 2);
    assert!(dag.exists_path(0, 2));
    assert_eq!(dag.count_descendants(0), 2);
  }

  #[test]
  fn probe_fills_the_cache() {
    let mut dag = CachedDag::new(3);
    dag.add_edge(0, 1).unwrap();
    assert_eq!(dag.cached(0), None);
    assert_eq!(dag.probe(0, 2), Probe { reaches: false, descendants: 1 });
    assert_eq!(dag.cached(0), Some(1));
  }

  #[test]
  fn rejected_edges_keep_the_cache() {
    let mut dag = CachedDag::new(2);
    dag.add_edge(0, 1).unwrap();
    assert_eq!(dag.count_descendants(0), 1);
    let generation = dag.generation;
    assert!(dag.add_edge(1, 0).is_err());
    assert!(dag.add_edge(0, 1).is_ok());
    assert_eq!(dag.generation, generation);
    assert_eq!(dag.cached(0), Some(1));
  }
}
