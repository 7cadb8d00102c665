//! The adversary contract and its implementations.

mod random;
pub use random::*;
mod dag;
pub use dag::*;
mod italiano;
pub use italiano::*;
mod brodal;
pub use brodal::*;
mod killer;
pub use killer::*;
mod kind;
pub use kind::*;

use std::cmp::Ordering;

use itertools::Itertools;

use crate::basics::Element;

/// A three-way comparator that commits to an order lazily.
///
/// Answers are always consistent with one total order: repeated queries
/// agree, swapped queries are opposite, and nothing ever forms a cycle. Every
/// call to `compare` counts, including `compare(a, a)`.
pub trait Adversary {
  fn name(&self) -> &'static str;
  fn compare(&mut self, x: Element, y: Element) -> Ordering;
  fn num_comparisons(&self) -> u64;
  /// The working sequence a sort permutes; its length never changes.
  fn current_data(&self) -> &[Element];
  fn current_data_mut(&mut self) -> &mut [Element];

  fn len(&self) -> usize {
    self.current_data().len()
  }
  fn is_empty(&self) -> bool {
    self.current_data().is_empty()
  }
  /// `compare` as `-1`, `0` or `+1`.
  fn compare_sign(&mut self, x: Element, y: Element) -> i32 {
    self.compare(x, y) as i32
  }
}

/// Lends `sort` a copy of the working sequence together with the adversary's
/// comparator, then stores the permuted sequence back.
pub fn sort_with<A, S>(adversary: &mut A, sort: S)
where
  A: Adversary + ?Sized,
  S: FnOnce(&mut [Element], &mut dyn FnMut(Element, Element) -> Ordering),
{
  let mut data = adversary.current_data().to_vec();
  sort(&mut data, &mut |x, y| adversary.compare(x, y));
  adversary.current_data_mut().copy_from_slice(&data);
}

/// Re-queries every adjacent pair of the working sequence.
pub fn is_strictly_sorted<A: Adversary + ?Sized>(adversary: &mut A) -> bool {
  let data = adversary.current_data().to_vec();
  data
    .into_iter()
    .tuple_windows()
    .all(|(x, y)| adversary.compare(x, y) == Ordering::Less)
}
