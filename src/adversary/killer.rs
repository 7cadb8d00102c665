use std::cmp::Ordering;

use tracing::{debug, trace};

use super::Adversary;
use crate::basics::{elements, Element};

/// Whether an element still floats as gas or has been frozen to a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Gas,
  Frozen(usize),
}

/// McIlroy's "A Killer Adversary for Quicksort" (Software: Practice and
/// Experience 29(4), 1999).
///
/// All elements start as gas, tied above every rank. When two gas elements
/// meet, the one most recently suspected of being the pivot is frozen to the
/// next rank, so a quicksort choosing its pivot by position keeps picking the
/// smallest remaining element.
pub struct McIlroyKiller {
  phases: Vec<Phase>,
  candidate: Option<Element>,
  num_frozen: usize,
  data: Vec<Element>,
  comparisons: u64,
}

impl McIlroyKiller {
  pub fn new(n: usize) -> Self {
    debug!(n, "mcilroy killer");
    Self {
      phases: vec![Phase::Gas; n],
      candidate: None,
      num_frozen: 0,
      data: elements(n),
      comparisons: 0,
    }
  }

  pub fn phase(&self, element: Element) -> Phase {
    self.phases[element.id()]
  }

  pub fn is_gas(&self, element: Element) -> bool {
    self.phase(element) == Phase::Gas
  }

  /// The comparable value: the rank, or `n` for gas.
  pub fn value(&self, element: Element) -> usize {
    match self.phase(element) {
      Phase::Gas => self.phases.len(),
      Phase::Frozen(rank) => rank,
    }
  }

  pub fn num_frozen(&self) -> usize {
    self.num_frozen
  }

  pub fn candidate_pivot(&self) -> Option<Element> {
    self.candidate
  }

  fn freeze(&mut self, element: Element) {
    trace!(%element, rank = self.num_frozen, "frozen");
    self.phases[element.id()] = Phase::Frozen(self.num_frozen);
    self.num_frozen += 1;
  }
}

impl Adversary for McIlroyKiller {
  fn name(&self) -> &'static str {
    "McIlroy"
  }

  fn compare(&mut self, x: Element, y: Element) -> Ordering {
    self.comparisons += 1;
    if x == y {
      return Ordering::Equal;
    }
    if self.is_gas(x) && self.is_gas(y) {
      if self.candidate == Some(x) {
        self.freeze(x);
      } else {
        self.freeze(y);
      }
    }
    if self.is_gas(x) {
      self.candidate = Some(x);
    } else if self.is_gas(y) {
      self.candidate = Some(y);
    }
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
