//! Error types shared by the DAG backends and adversary configuration.

use thiserror::Error;

/// Errors reported by fallible adversary and DAG operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdversaryError {
  /// The edge `from -> to` would close a cycle: `to` already reaches `from`.
  #[error("edge {from} -> {to} would close a cycle")]
  Cycle { from: usize, to: usize },

  /// A vertex index outside the graph.
  #[error("vertex {vertex} out of range for {len} vertices")]
  VertexOutOfRange { vertex: usize, len: usize },

  /// No adversary of that name.
  #[error("unknown adversary: {0}")]
  UnknownAdversary(String),
}

impl AdversaryError {
  pub fn cycle(from: usize, to: usize) -> Self {
    Self::Cycle { from, to }
  }

  /// Checks that both endpoints of an edge fit in a graph of `len` vertices.
  pub fn check_range(source: usize, target: usize, len: usize) -> Result<()> {
    match [source, target].into_iter().find(|&v| v >= len) {
      Some(vertex) => Err(Self::VertexOutOfRange { vertex, len }),
      None => Ok(()),
    }
  }
}

pub type Result<T> = std::result::Result<T, AdversaryError>;
