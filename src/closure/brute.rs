use rayon::prelude::*;
use sucds::bit_vectors::{prelude::*, BitVector};

use crate::basics::Edge;

/// Reference transitive closure: one depth-first search per vertex over a
/// plain edge list, rows kept as bit vectors.
pub struct BruteClosure {
  rows: Vec<BitVector>,
}

impl BruteClosure {
  pub fn new(len: usize, edges: &[Edge]) -> Self {
    let mut out = vec![vec![]; len];
    for edge in edges {
      out[edge.source].push(edge.target);
    }
    let rows = (0..len)
      .into_par_iter()
      .map(|source| {
        let mut seen = vec![false; len];
        let mut pending = out[source].clone();
        while let Some(here) = pending.pop() {
          if seen[here] {
            continue;
          }
          seen[here] = true;
          pending.extend(out[here].iter().filter(|&&next| !seen[next]));
        }
        BitVector::from_bits(seen)
      })
      .collect();
    Self { rows }
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn reaches(&self, source: usize, target: usize) -> bool {
    self.rows[source].access(target).unwrap_or(false)
  }

  pub fn size(&self) -> usize {
    self.rows.par_iter().map(|row| row.iter().filter(|&bit| bit).count()).sum()
  }
}
