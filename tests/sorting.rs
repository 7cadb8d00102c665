mod common;

use std::cmp::Ordering;

use adversaries::*;
use common::*;
use itertools::Itertools;

fn lower_bound(n: usize) -> u64 {
  (0.5 * n as f64 * (n as f64).log2()).ceil() as u64
}

fn is_permutation(adversary: &dyn Adversary) -> bool {
  let ids = adversary.current_data().iter().map(|e| e.id()).sorted().collect_vec();
  ids == (0..adversary.len()).collect_vec()
}

#[test]
fn every_adversary_survives_every_sort() {
  init_tracing();
  for kind in AdversaryKind::ALL {
    for (name, sort) in SORTS {
      let mut adversary = kind.build(90, 5);
      sort_with(adversary.as_mut(), sort);
      assert!(is_permutation(adversary.as_ref()), "{} / {}", kind, name);
      assert!(is_strictly_sorted(adversary.as_mut()), "{} / {}", kind, name);
    }
  }
}

#[test]
fn brodal_forces_half_n_log_n() {
  init_tracing();
  for n in [16, 64, 256, 1024] {
    for sort in [std_sort, binary_insertion_sort] {
      let mut adversary = BrodalAdversary::new(n);
      sort_with(&mut adversary, sort);
      assert!(adversary.num_comparisons() >= lower_bound(n), "n = {}", n);
      assert!(adversary.sum_of_depths() as u64 <= 2 * adversary.num_comparisons());
      assert!(is_strictly_sorted(&mut adversary));
    }
  }
}

#[test]
fn dag_adversary_makes_insertion_sort_quadratic() {
  init_tracing();
  let n = 64;
  let mut adversary = DagAdversary::new(n);
  sort_with(&mut adversary, insertion_sort);
  assert_eq!(adversary.num_comparisons(), (n * (n - 1) / 2) as u64);
  assert!(is_strictly_sorted(&mut adversary));
}

#[test]
fn killer_makes_first_pivot_quicksort_quadratic() {
  init_tracing();
  let n = 256;
  let mut killer = McIlroyKiller::new(n);
  sort_with(&mut killer, first_pivot_quicksort);
  assert!(killer.num_comparisons() >= (n * (n - 1) / 4) as u64);
  assert!(is_strictly_sorted(&mut killer));
}

#[test]
fn killer_leaves_at_most_one_gas_element() {
  let n = 64;
  let mut killer = McIlroyKiller::new(n);
  sort_with(&mut killer, median_of_three_quicksort);
  let sorted = killer.current_data().to_vec();
  assert!(killer.num_frozen() >= n - 1);
  assert!(sorted.iter().tuple_windows().all(|(&a, &b)| killer.value(a) < killer.value(b)));
}

/// Runs `sort` through `sort_with`, keeping every answer in call order.
fn sort_recording<A: Adversary + ?Sized>(adversary: &mut A, sort: fn(&mut [Element], Comparator)) -> Vec<Ordering> {
  let mut answers = vec![];
  sort_with(adversary, |data, cmp| {
    sort(data, &mut |x: Element, y: Element| {
      let answer = cmp(x, y);
      answers.push(answer);
      answer
    })
  });
  answers
}

#[test]
fn replaying_the_same_calls_gives_the_same_answers() {
  for kind in AdversaryKind::ALL {
    for (name, sort) in SORTS {
      let mut first = kind.build(128, 17);
      let mut second = kind.build(128, 17);
      let answers = sort_recording(first.as_mut(), sort);
      assert_eq!(sort_recording(second.as_mut(), sort), answers, "{} / {}", kind, name);
      assert_eq!(first.current_data(), second.current_data(), "{} / {}", kind, name);
      assert_eq!(first.num_comparisons(), answers.len() as u64);
      assert_eq!(second.num_comparisons(), answers.len() as u64);
    }
  }
}

#[test]
fn replaying_the_same_calls_rebuilds_the_same_structure() {
  let n = 64;

  let (mut first, mut second) = (BrodalAdversary::new(n), BrodalAdversary::new(n));
  assert_eq!(sort_recording(&mut first, std_sort), sort_recording(&mut second, std_sort));
  assert_eq!(first.node_count(), second.node_count());
  assert_eq!(first.sum_of_depths(), second.sum_of_depths());
  assert!(elements(n).into_iter().all(|e| first.depth(e) == second.depth(e)));

  let (mut first, mut second) = (ClosureAdversary::new(n), ClosureAdversary::new(n));
  assert_eq!(
    sort_recording(&mut first, binary_insertion_sort),
    sort_recording(&mut second, binary_insertion_sort)
  );
  assert_eq!(first.dag().edges(), second.dag().edges());
  assert_eq!(first.dag().stats(), second.dag().stats());
  assert_eq!(first.dag().closure_size(), second.dag().closure_size());

  let (mut first, mut second) = (McIlroyKiller::new(n), McIlroyKiller::new(n));
  assert_eq!(
    sort_recording(&mut first, median_of_three_quicksort),
    sort_recording(&mut second, median_of_three_quicksort)
  );
  assert!(elements(n).into_iter().all(|e| first.phase(e) == second.phase(e)));
  assert_eq!(first.num_frozen(), second.num_frozen());
  assert_eq!(first.candidate_pivot(), second.candidate_pivot());
}

#[test]
fn closure_adversary_keeps_a_valid_closure() {
  let mut adversary = ClosureAdversary::new(40);
  sort_with(&mut adversary, binary_insertion_sort);
  let dag = adversary.dag();
  assert!(dag.verify());
  assert_eq!(dag.closure_size(), 40 * 39 / 2);
  assert_eq!(dag.stats().grafted, dag.closure_size());
}
