//! Binary heap ordered by a caller-supplied comparison
//!
//! The root is always the minimum under `less`. Callers that want maxima first
//! pass a reversed comparison. Ordering is a generic closure, so every heap is
//! monomorphized over its comparison.

/// Binary heap keyed by a strict weak ordering `less(a, b)`
///
/// Invariant: for every non-root index `i` with parent `p`,
/// `!less(values[i], values[p])`.
#[derive(Debug, Clone)]
pub struct Heap<T, F> {
    values: Vec<T>,
    less: F,
    bound: Option<usize>,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty, unbounded heap
    #[must_use]
    pub fn new(less: F) -> Self {
        Self {
            values: Vec::new(),
            less,
            bound: None,
        }
    }

    /// Create a heap that holds at most `limit` items
    ///
    /// Whenever a push makes the heap longer than `limit`, the root is popped.
    /// To keep the K best items, order the heap so the root is the worst.
    #[must_use]
    pub fn bounded(limit: usize, less: F) -> Self {
        Self {
            values: Vec::new(),
            less,
            bound: Some(limit),
        }
    }

    /// Build a heap from arbitrary values in O(n)
    #[must_use]
    pub fn from_vec(values: Vec<T>, less: F) -> Self {
        let mut heap = Self {
            values,
            less,
            bound: None,
        };
        heap.init();
        heap
    }

    /// Re-establish the heap invariant over all values
    ///
    /// Idempotent; call it whenever values were modified out of band.
    /// O(n) in the number of values.
    pub fn init(&mut self) {
        let n = self.values.len();
        for i in (0..n / 2).rev() {
            self.down(i, n);
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in heap (not sorted) order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Push a value, evicting the root if this exceeds the bound
    ///
    /// Returns the evicted value, if any.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.values.push(value);
        self.up(self.values.len() - 1);

        match self.bound {
            Some(limit) if self.values.len() > limit => self.pop(),
            _ => None,
        }
    }

    /// The minimum element, without removing it
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    /// Remove and return the minimum element. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        self.remove(0)
    }

    /// Remove and return the element at index `i`. O(log n).
    pub fn remove(&mut self, i: usize) -> Option<T> {
        if i >= self.values.len() {
            return None;
        }
        let n = self.values.len() - 1;
        if n != i {
            self.values.swap(i, n);
            if !self.down(i, n) {
                self.up(i);
            }
        }
        self.values.pop()
    }

    /// Mutable access to the element at index `i`
    ///
    /// Call `fix(i)` after changing anything the ordering looks at.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.values.get_mut(i)
    }

    /// Re-establish ordering after the element at index `i` changed. O(log n).
    pub fn fix(&mut self, i: usize) {
        if i >= self.values.len() {
            return;
        }
        if !self.down(i, self.values.len()) {
            self.up(i);
        }
    }

    /// Drain the heap in pop order
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.values.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    fn up(&mut self, mut j: usize) {
        while j > 0 {
            let i = (j - 1) / 2; // parent
            if !(self.less)(&self.values[j], &self.values[i]) {
                break;
            }
            self.values.swap(i, j);
            j = i;
        }
    }

    fn down(&mut self, i0: usize, n: usize) -> bool {
        let mut i = i0;
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut j = left;
            let right = left + 1;
            if right < n && (self.less)(&self.values[right], &self.values[left]) {
                j = right;
            }
            if !(self.less)(&self.values[j], &self.values[i]) {
                break;
            }
            self.values.swap(i, j);
            i = j;
        }
        i > i0
    }
}
