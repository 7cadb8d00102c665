#![allow(dead_code)]

use std::cmp::Ordering;

use adversaries::Element;
use tracing_subscriber::EnvFilter;

pub type Comparator<'a> = &'a mut dyn FnMut(Element, Element) -> Ordering;

// LOG_LEVEL takes an env-filter directive, e.g. LOG_LEVEL=adversaries=trace
pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
}

pub fn std_sort(data: &mut [Element], cmp: Comparator) {
  data.sort_by(|a, b| cmp(*a, *b));
}

/// Linear insertion sort; the element being inserted is always the left operand.
pub fn insertion_sort(data: &mut [Element], cmp: Comparator) {
  for i in 1..data.len() {
    let mut j = i;
    while j > 0 && cmp(data[j], data[j - 1]) == Ordering::Less {
      data.swap(j, j - 1);
      j -= 1;
    }
  }
}

pub fn binary_insertion_sort(data: &mut [Element], cmp: Comparator) {
  for i in 1..data.len() {
    let element = data[i];
    let position = data[..i].partition_point(|&placed| cmp(placed, element) == Ordering::Less);
    data[position..=i].rotate_right(1);
  }
}

/// Partitions around `data[0]`, returning where the pivot ends up.
fn partition_first(data: &mut [Element], cmp: Comparator) -> usize {
  let pivot = data[0];
  let mut store = 1;
  for i in 1..data.len() {
    if cmp(data[i], pivot) == Ordering::Less {
      data.swap(i, store);
      store += 1;
    }
  }
  data.swap(0, store - 1);
  store - 1
}

pub fn first_pivot_quicksort(data: &mut [Element], cmp: Comparator) {
  if data.len() <= 1 {
    return;
  }
  let pivot = partition_first(data, &mut *cmp);
  let (left, right) = data.split_at_mut(pivot);
  first_pivot_quicksort(left, &mut *cmp);
  first_pivot_quicksort(&mut right[1..], cmp);
}

pub fn median_of_three_quicksort(data: &mut [Element], cmp: Comparator) {
  let len = data.len();
  if len <= 1 {
    return;
  }
  if len >= 3 {
    let (mid, last) = (len / 2, len - 1);
    if cmp(data[mid], data[0]) == Ordering::Less {
      data.swap(mid, 0);
    }
    if cmp(data[last], data[mid]) == Ordering::Less {
      data.swap(last, mid);
      if cmp(data[mid], data[0]) == Ordering::Less {
        data.swap(mid, 0);
      }
    }
    data.swap(0, mid);
  }
  let pivot = partition_first(data, &mut *cmp);
  let (left, right) = data.split_at_mut(pivot);
  median_of_three_quicksort(left, &mut *cmp);
  median_of_three_quicksort(&mut right[1..], cmp);
}

pub const SORTS: [(&str, fn(&mut [Element], Comparator)); 5] = [
  ("std", std_sort),
  ("insertion", insertion_sort),
  ("binary insertion", binary_insertion_sort),
  ("first pivot quicksort", first_pivot_quicksort),
  ("median of three quicksort", median_of_three_quicksort),
];
