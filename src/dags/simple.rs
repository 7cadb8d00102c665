use tracing::debug;

use super::{Dag, Probe};
use crate::basics::EpochMarks;
use crate::error::{AdversaryError, Result};

/// Adjacency lists plus the scratch state for epoch-stamped searches.
pub(crate) struct Adjacency {
  out: Vec<Vec<usize>>,
  marks: EpochMarks,
  pending: Vec<usize>,
}

impl Adjacency {
  pub fn new(len: usize) -> Self {
    Self {
      out: vec![vec![]; len],
      marks: EpochMarks::new(len),
      pending: Vec::with_capacity(len),
    }
  }

  pub fn len(&self) -> usize {
    self.out.len()
  }

  /// Searches from `source`. Stops at `target` unless `exhaustive`, in which
  /// case `descendants` counts everything `source` reaches.
  pub fn probe(&mut self, source: usize, target: Option<usize>, exhaustive: bool) -> Probe {
    self.marks.advance();
    self.marks.mark(source);
    self.pending.clear();
    self.pending.push(source);
    let mut probe = Probe { reaches: false, descendants: 0 };
    while let Some(u) = self.pending.pop() {
      for &v in &self.out[u] {
        if !self.marks.mark(v) {
          continue;
        }
        probe.descendants += 1;
        if Some(v) == target {
          probe.reaches = true;
          if !exhaustive {
            return probe;
          }
        }
        self.pending.push(v);
      }
    }
    probe
  }

  /// Validates and inserts `source -> target`; returns whether an edge was
  /// actually stored.
  pub fn insert(&mut self, source: usize, target: usize) -> Result<bool> {
    AdversaryError::check_range(source, target, self.len())?;
    if source == target || self.probe(target, Some(source), false).reaches {
      debug!(source, target, "rejected cyclic edge");
      return Err(AdversaryError::cycle(source, target));
    }
    if self.probe(source, Some(target), false).reaches {
      return Ok(false);
    }
    self.out[source].push(target);
    Ok(true)
  }
}

/// Plain adjacency lists; every query is a fresh depth-first search.
pub struct SimpleDag {
  adjacency: Adjacency,
}

impl Dag for SimpleDag {
  fn new(len: usize) -> Self {
    debug!(len, "simple dag");
    Self { adjacency: Adjacency::new(len) }
  }
  fn len(&self) -> usize {
    self.adjacency.len()
  }
  fn add_edge(&mut self, source: usize, target: usize) -> Result<()> {
    self.adjacency.insert(source, target).map(|_| ())
  }
  fn exists_path(&mut self, source: usize, target: usize) -> bool {
    self.adjacency.probe(source, Some(target), false).reaches
  }
  fn count_descendants(&mut self, source: usize) -> usize {
    self.adjacency.probe(source, None, true).descendants
  }
  fn probe(&mut self, source: usize, target: usize) -> Probe {
    self.adjacency.probe(source, Some(target), true)
  }
}
