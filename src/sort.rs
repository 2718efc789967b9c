//! In-place comparison sorts. Both are stable and sort ascending.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sorting algorithm selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
        }
    }

    pub fn sort<T: Ord>(&self, items: &mut [T]) {
        match self {
            Algorithm::Bubble => {
                bubble_sort(items);
            }
            Algorithm::Insertion => insertion_sort(items),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bubble sort with early exit.
///
/// Returns the number of passes made; a pass with no swap ends the sort,
/// so already sorted input takes a single pass.
pub fn bubble_sort<T: Ord>(items: &mut [T]) -> usize {
    let n = items.len();
    if n <= 1 {
        return 0;
    }

    let mut passes = 0;
    for i in 0..n - 1 {
        passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    passes
}

pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
