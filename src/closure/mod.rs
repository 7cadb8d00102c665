//! Transitive closure of a DAG maintained under edge insertion, after
//! Italiano, "Amortized efficiency of a path retrieval data structure",
//! Theoretical Computer Science 48 (1986).
//!
//! Every vertex keeps a spanning tree of the vertices it reaches. Path
//! queries are a membership test, O(1). Inserting `i -> j` grafts, for each
//! `x` reaching `i` but not `j`, the part of `j`'s tree that `x` does not
//! reach yet. A graft only ever copies vertices that are new to `x`, so over
//! any sequence of insertions the work is bounded by the size of the final
//! closure plus O(n) probing per insertion.

mod brute;
pub use brute::*;
mod spanning;
pub use spanning::*;

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use crate::basics::Edge;
use crate::dags::Dag;
use crate::error::{AdversaryError, Result};

/// Work counters for the amortised bound.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClosureStats {
  /// Accepted `add_edge` calls, redundant ones included.
  pub insertions: usize,
  /// Insertions whose source already reached the target.
  pub redundant: usize,
  /// Spanning trees that received at least a graft attempt.
  pub melds: usize,
  /// Vertices grafted, i.e. closure pairs added.
  pub grafted: usize,
  /// Worklist entries examined while melding.
  pub visited: usize,
}

pub struct ItalianoDag {
  trees: Vec<SpanningTree>,
  edges: Vec<Edge>,
  pending: Vec<(usize, usize)>,
  stats: ClosureStats,
}

impl ItalianoDag {
  fn reaches(&self, source: usize, target: usize) -> bool {
    self.trees[source].contains(target)
  }

  /// `exists_path` through a shared borrow; O(1).
  pub fn has_path(&self, source: usize, target: usize) -> bool {
    source != target && self.reaches(source, target)
  }

  fn check_insertable(&self, source: usize, target: usize) -> Result<()> {
    AdversaryError::check_range(source, target, self.len())?;
    if self.reaches(target, source) {
      debug!(source, target, "rejected cyclic edge");
      return Err(AdversaryError::cycle(source, target));
    }
    Ok(())
  }

  /// Number of closure pairs that inserting `source -> target` would add,
  /// without inserting it.
  pub fn count_closure_edges(&self, source: usize, target: usize) -> Result<usize> {
    self.check_insertable(source, target)?;
    if self.reaches(source, target) {
      return Ok(0);
    }
    let mut count = 0;
    let mut pending = vec![];
    for x in (0..self.len()).filter(|&x| self.reaches(x, source) && !self.reaches(x, target)) {
      pending.push(target);
      while let Some(w) = pending.pop() {
        if self.reaches(x, w) {
          continue;
        }
        count += 1;
        pending.extend(self.trees[target].children(w));
      }
    }
    Ok(count)
  }

  /// Grafts into `x`'s tree whatever of `target`'s tree `x` does not reach,
  /// hanging `target` itself under `source`.
  fn meld(&mut self, x: usize, source: usize, target: usize) {
    self.stats.melds += 1;
    self.pending.clear();
    self.pending.push((source, target));
    while let Some((parent, w)) = self.pending.pop() {
      self.stats.visited += 1;
      if self.trees[x].contains(w) {
        continue;
      }
      self.trees[x].graft(parent, w);
      self.stats.grafted += 1;
      self.pending.extend(self.trees[target].children(w).map(|child| (w, child)));
    }
  }

  pub fn stats(&self) -> ClosureStats {
    self.stats
  }

  /// Edges that changed the closure, in insertion order.
  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn tree(&self, vertex: usize) -> &SpanningTree {
    &self.trees[vertex]
  }

  /// Number of pairs `(x, y)`, `x != y`, with `x` reaching `y`.
  pub fn closure_size(&self) -> usize {
    self.trees.iter().map(|tree| tree.len() - 1).sum()
  }

  /// Checks reachability against a brute-force closure of the inserted edges
  /// and that every spanning-tree edge is a real edge.
  pub fn verify(&self) -> bool {
    let n = self.len();
    let brute = BruteClosure::new(n, &self.edges);
    let edges = self.edges.iter().map(|edge| (edge.source, edge.target)).collect::<HashSet<_>>();
    (0..n).into_par_iter().all(|x| {
      let tree = &self.trees[x];
      tree.root() == x
        && (0..n).all(|y| brute.reaches(x, y) == (x != y && tree.contains(y)))
        && tree.tree_edges().all(|edge| edges.contains(&edge))
    })
  }
}

impl Dag for ItalianoDag {
  fn new(len: usize) -> Self {
    debug!(len, "italiano dag");
    Self {
      trees: (0..len).map(|root| SpanningTree::new(root, len)).collect(),
      edges: vec![],
      pending: vec![],
      stats: ClosureStats::default(),
    }
  }

  fn len(&self) -> usize {
    self.trees.len()
  }

  fn add_edge(&mut self, source: usize, target: usize) -> Result<()> {
    self.check_insertable(source, target)?;
    self.stats.insertions += 1;
    if self.reaches(source, target) {
      self.stats.redundant += 1;
      return Ok(());
    }
    self.edges.push(Edge::new(source, target));
    for x in 0..self.len() {
      if self.reaches(x, source) && !self.reaches(x, target) {
        self.meld(x, source, target);
      }
    }
    Ok(())
  }

  fn exists_path(&mut self, source: usize, target: usize) -> bool {
    self.has_path(source, target)
  }

  fn count_descendants(&mut self, source: usize) -> usize {
    self.trees[source].len() - 1
  }
}
