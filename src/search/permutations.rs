//! Lazy lexicographic permutation generator over army indices.
//!
//! Orderings are produced one at a time in lexicographic order of the index
//! vector, so identical armies at different positions still count as
//! distinct orderings. Memory use is O(n) regardless of how many orderings
//! are walked.

/// Returns `n!`, or `None` if it does not fit in a `u64` (n > 20).
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Walks every ordering of `0..n`, optionally with the first index pinned.
#[derive(Debug, Clone)]
pub struct Permutations {
    indices: Vec<usize>,
    start: Vec<usize>,
    fixed: usize,
    started: bool,
    done: bool,
}

impl Permutations {
    /// All `n!` orderings of `0..n`, starting from the identity.
    pub fn new(n: usize) -> Self {
        Self::from_start((0..n).collect(), 0)
    }

    /// The `(n - 1)!` orderings of `0..n` that begin with `first`.
    ///
    /// Concatenating these for `first = 0..n` yields exactly the sequence
    /// produced by [`Permutations::new`].
    pub fn starting_with(n: usize, first: usize) -> Self {
        assert!(first < n, "first index {first} out of range for {n} armies");
        let mut start = Vec::with_capacity(n);
        start.push(first);
        start.extend((0..n).filter(|&i| i != first));
        Self::from_start(start, 1)
    }

    fn from_start(start: Vec<usize>, fixed: usize) -> Self {
        Permutations {
            indices: start.clone(),
            done: start.is_empty(),
            start,
            fixed,
            started: false,
        }
    }

    /// Rewinds to the first ordering.
    pub fn reset(&mut self) {
        self.indices.copy_from_slice(&self.start);
        self.started = false;
        self.done = self.start.is_empty();
    }

    /// Advances to the next ordering and borrows it, without allocating.
    pub fn next_ordering(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.as_slice());
        }
        if next_permutation(&mut self.indices[self.fixed..]) {
            Some(self.indices.as_slice())
        } else {
            self.done = true;
            None
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.next_ordering().map(<[usize]>::to_vec)
    }
}

/// Rearranges `s` into its lexicographic successor. Returns false (leaving
/// `s` untouched) if `s` is already the last ordering.
fn next_permutation(s: &mut [usize]) -> bool {
    let Some(pivot) = s.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let successor = s
        .iter()
        .rposition(|&x| x > s[pivot])
        .unwrap_or(pivot + 1);
    s.swap(pivot, successor);
    s[pivot + 1..].reverse();
    true
}
