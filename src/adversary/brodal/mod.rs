//! Brodal et al.'s adversary from "The Randomized Complexity of Maintaining
//! the Minimum", Nordic Journal of Computing 3(4), 1996. It was found
//! independently by Borodin, Guibas, Lynch and Yao (IPL 12(2), 1980) and by
//! Richards and Vaidya (BIT 28, 1988).
//!
//! Each element sits on a node of a binary tree, all at the root to begin
//! with. `x < y` is settled iff neither node is an ancestor of the other and
//! `x`'s node comes first in-order. Comparing two elements on the same node
//! pushes them to its left and right children; comparing an element with one
//! sitting on an ancestor pushes the ancestor into the child away from the
//! other element. Equivalently every node is an interval `(j/2^d, (j+1)/2^d)`
//! and a push replaces one endpoint with the midpoint.
//!
//! Every comparison deepens at most two elements by one, so the sum `D` of
//! element depths is at most twice the number of comparisons. Once the order
//! is total the elements sit on distinct incomparable nodes, which forces
//! `D >= n log2 n`, hence at least `n log2 n / 2` comparisons.

mod tree;
pub use tree::*;

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::Adversary;
use crate::basics::{elements, Element};

pub struct BrodalAdversary {
  tree: Tree,
  element_to_node: Vec<usize>,
  pending: Vec<usize>,
  data: Vec<Element>,
  comparisons: u64,
}

impl BrodalAdversary {
  pub fn new(n: usize) -> Self {
    debug!(n, "brodal adversary");
    Self {
      tree: Tree::new(),
      element_to_node: vec![Tree::ROOT; n],
      pending: Vec::with_capacity(n),
      data: elements(n),
      comparisons: 0,
    }
  }

  fn node_of(&self, element: Element) -> usize {
    self.element_to_node[element.id()]
  }

  fn push_down(&mut self, element: Element, side: Side) {
    let node = self.node_of(element);
    let child = self.tree.grow(node, side);
    trace!(%element, ?side, depth = self.tree.depth(child), "pushed down");
    self.element_to_node[element.id()] = child;
  }

  /// Depth of the node `element` currently sits on.
  pub fn depth(&self, element: Element) -> usize {
    self.tree.depth(self.node_of(element))
  }

  pub fn sum_of_depths(&self) -> usize {
    self.element_to_node.iter().map(|&node| self.tree.depth(node)).sum()
  }

  /// Materialised tree nodes.
  pub fn node_count(&self) -> usize {
    self.tree.len()
  }

  /// One in-order walk, stopped as soon as the node of `x` or `y` completes.
  fn resolve(&mut self, x: Element, y: Element) -> Ordering {
    let epoch = self.comparisons;
    let (x_node, y_node) = (self.node_of(x), self.node_of(y));
    self.pending.clear();
    self.pending.push(Tree::ROOT);
    while let Some(&here) = self.pending.last() {
      match self.tree.state(here, epoch) {
        VisitState::Unvisited => {
          self.tree.set_state(here, VisitState::VisitingLeft, epoch);
          self.pending.extend(self.tree.child(here, Side::Left));
        }
        VisitState::VisitingLeft => {
          self.tree.set_state(here, VisitState::VisitingRight, epoch);
          self.pending.extend(self.tree.child(here, Side::Right));
        }
        VisitState::VisitingRight => {
          self.tree.set_state(here, VisitState::Complete, epoch);
        }
        VisitState::Complete => {
          self.pending.pop();
          let here_is_x = here == x_node;
          if !here_is_x && here != y_node {
            continue;
          }
          let other = if here_is_x { y } else { x };
          // whether the element on `here` comes first
          let here_first = match self.tree.state(self.node_of(other), epoch) {
            VisitState::Unvisited => true,
            VisitState::VisitingLeft => {
              self.push_down(other, Side::Right);
              true
            }
            VisitState::VisitingRight => {
              self.push_down(other, Side::Left);
              false
            }
            VisitState::Complete => false,
          };
          return if here_first == here_is_x { Ordering::Less } else { Ordering::Greater };
        }
      }
    }
    panic!("in-order walk finished without reaching {} or {}", x, y);
  }
}

impl Adversary for BrodalAdversary {
  fn name(&self) -> &'static str {
    "Brodal"
  }

  fn compare(&mut self, x: Element, y: Element) -> Ordering {
    self.comparisons += 1;
    if x == y {
      return Ordering::Equal;
    }
    if self.node_of(x) == self.node_of(y) {
      self.push_down(x, Side::Left);
      self.push_down(y, Side::Right);
      return Ordering::Less;
    }
    self.resolve(x, y)
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
