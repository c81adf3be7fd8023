//! Combinatorial enumerators over letter slices

/// Every subset of `input` with exactly `count` elements
///
/// Subsets are enumerated as binary numbers: bit `i` of the counter selects
/// `input[i]`. Output is in counter order, letters in input order.
///
/// # Panics
/// Panics if `input` has 64 or more letters (the counter would overflow).
///
/// # Examples
/// ```
/// use wordsift::candidates::choose;
///
/// let picks = choose(&['a', 'b', 'c', 'd', 'e'], 3);
/// assert_eq!(picks.len(), 10);
/// ```
#[must_use]
pub fn choose(input: &[char], count: usize) -> Vec<Vec<char>> {
    assert!(input.len() < 64, "choose supports at most 63 letters");
    if count > input.len() {
        return Vec::new();
    }

    let max = 1u64 << input.len();
    (0..max)
        .filter(|bits| bits.count_ones() as usize == count)
        .map(|bits| {
            input
                .iter()
                .enumerate()
                .filter(|&(index, _)| bits & (1 << index) != 0)
                .map(|(_, &letter)| letter)
                .collect()
        })
        .collect()
}

/// Cartesian power of an alphabet: every length-`count` tuple drawn with replacement
///
/// Tuples are produced lazily in odometer order (last position varies fastest).
/// A `count` of 0 yields a single empty tuple; an empty alphabet with a
/// positive `count` yields nothing.
#[derive(Debug, Clone)]
pub struct CartesianPower<'a> {
    alphabet: &'a [char],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> CartesianPower<'a> {
    #[must_use]
    pub fn new(alphabet: &'a [char], count: usize) -> Self {
        Self {
            alphabet,
            indices: vec![0; count],
            done: alphabet.is_empty() && count > 0,
        }
    }

    /// Advance the odometer; returns false once every tuple has been seen
    fn advance(&mut self) -> bool {
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < self.alphabet.len() {
                return true;
            }
            *index = 0;
        }
        false
    }
}

impl Iterator for CartesianPower<'_> {
    type Item = Vec<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let tuple = self.indices.iter().map(|&i| self.alphabet[i]).collect();
        self.done = !self.advance();
        Some(tuple)
    }
}

/// All length-`count` tuples of `input`, with replacement
#[must_use]
pub fn choose_any(input: &[char], count: usize) -> Vec<Vec<char>> {
    CartesianPower::new(input, count).collect()
}
