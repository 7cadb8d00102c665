use serde::{Deserialize, Serialize};

/// Opaque handle to one of the `n` elements an adversary was built with.
///
/// The index is the element's identity and never changes; any comparable
/// payload lives inside the adversary.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone, Ord, PartialOrd)]
pub struct Element(usize);

impl Element {
  /// Handles reach callers only through `elements` and `current_data`, so an
  /// id is always below the adversary's `n`.
  pub(crate) fn new(id: usize) -> Self {
    Element(id)
  }
  pub fn id(self) -> usize {
    self.0
  }
}

impl std::fmt::Display for Element {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "e{}", self.0)
  }
}

/// The working sequence every adversary starts with: `e0, e1, .., e{n-1}`.
pub fn elements(n: usize) -> Vec<Element> {
  (0..n).map(Element).collect()
}

/// `source -> target` reads "source is less than target".
#[derive(Debug, Hash, Eq, PartialEq, Serialize, Deserialize, Copy, Clone, Ord, PartialOrd)]
pub struct Edge {
  pub source: usize,
  pub target: usize,
}

impl Edge {
  pub fn new(source: usize, target: usize) -> Self {
    Edge { source, target }
  }
}

impl From<(usize, usize)> for Edge {
  fn from((source, target): (usize, usize)) -> Self {
    Edge { source, target }
  }
}

impl std::fmt::Display for Edge {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{} -> {}", self.source, self.target)
  }
}

/// Per-slot "last seen" generation marks, cleared in O(1) by bumping the
/// current generation once per search instead of resetting every slot.
pub struct EpochMarks {
  marks: Vec<u64>,
  current: u64,
}

impl EpochMarks {
  pub fn new(len: usize) -> Self {
    Self { marks: vec![0; len], current: 0 }
  }
  /// Starts a new pass; every slot reads as unmarked afterwards.
  pub fn advance(&mut self) {
    self.current += 1;
  }
  pub fn is_marked(&self, slot: usize) -> bool {
    self.marks[slot] == self.current
  }
  /// Marks `slot`, returning whether it was unmarked before.
  pub fn mark(&mut self, slot: usize) -> bool {
    let fresh = self.marks[slot] != self.current;
    self.marks[slot] = self.current;
    fresh
  }
}
