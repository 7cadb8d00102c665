//! Reachability backends over "less than" edges, consumed by the DAG-backed
//! adversaries.

mod simple;
pub use simple::*;
mod cached;
pub use cached::*;

use crate::basics::Edge;
use crate::error::{AdversaryError, Result};

/// Outcome of one search from a source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
  pub reaches: bool,
  pub descendants: usize,
}

/// A growing directed acyclic graph where `u -> v` means `u < v`.
pub trait Dag {
  fn new(len: usize) -> Self
  where
    Self: Sized;
  fn len(&self) -> usize;
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
  /// Adds `source -> target`. Fails without mutating anything if `target`
  /// already reaches `source`; a no-op if `source` already reaches `target`.
  fn add_edge(&mut self, source: usize, target: usize) -> Result<()>;
  /// Whether a non-empty path leads from `source` to `target`.
  fn exists_path(&mut self, source: usize, target: usize) -> bool;
  /// Number of vertices `source` reaches, itself excluded.
  fn count_descendants(&mut self, source: usize) -> usize;
  /// `exists_path` and `count_descendants` of `source` together. Search-based
  /// backends answer both in a single pass.
  fn probe(&mut self, source: usize, target: usize) -> Probe {
    Probe {
      reaches: self.exists_path(source, target),
      descendants: self.count_descendants(source),
    }
  }

  fn from_edges<I>(len: usize, edges: I) -> Result<Self>
  where
    Self: Sized,
    I: IntoIterator<Item = Edge>,
  {
    let mut dag = Self::new(len);
    for edge in edges {
      AdversaryError::check_range(edge.source, edge.target, len)?;
      dag.add_edge(edge.source, edge.target)?;
    }
    Ok(dag)
  }
}

/// Records a relation an adversary has already decided is free.
pub(crate) fn commit<D: Dag + ?Sized>(dag: &mut D, source: usize, target: usize) {
  if let Err(error) = dag.add_edge(source, target) {
    panic!("adversary committed to an inconsistent edge: {}", error);
  }
}
