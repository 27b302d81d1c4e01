use std::cmp::Ordering;

use crate::SortOrder;

/// In-place heap sort over a borrowed slice.
///
/// The slice is split into two regions: `[0, heap_len)` is a max-heap under
/// the comparator, `[heap_len, len)` holds elements already in their final
/// position. Each [`sort_step`](Self::sort_step) moves the heap maximum to
/// the front of the sorted region.
pub struct HeapSorter<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    data: &'a mut [T],
    compare: F,
    heap_len: usize,
}

impl<'a, T: Ord> HeapSorter<'a, T, fn(&T, &T) -> Ordering> {
    /// Builds a sorter that produces ascending output.
    pub fn new(data: &'a mut [T]) -> Self {
        Self::with_order(data, SortOrder::Natural)
    }

    pub fn with_order(data: &'a mut [T], order: SortOrder) -> Self {
        HeapSorter::by(data, order.comparator())
    }
}

impl<'a, T, F> HeapSorter<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Builds a sorter over `data` ordered by `compare` and heapifies the
    /// whole slice. Nothing is extracted yet.
    pub fn by(data: &'a mut [T], compare: F) -> Self {
        let heap_len = data.len();
        let mut sorter = Self {
            data,
            compare,
            heap_len,
        };
        sorter.build_heap();
        sorter
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements still inside the heap.
    pub fn unsorted_len(&self) -> usize {
        self.heap_len
    }

    pub fn is_finished(&self) -> bool {
        self.heap_len == 0
    }

    /// The unsorted region, laid out as a binary max-heap.
    pub fn heap(&self) -> &[T] {
        &self.data[..self.heap_len]
    }

    /// The finalized region, already in sorted order.
    pub fn sorted_tail(&self) -> &[T] {
        &self.data[self.heap_len..]
    }

    /// Runs the remaining extractions.
    pub fn sort(&mut self) {
        while self.sort_step() {}
    }

    /// Finishes sorting and returns the borrowed slice.
    pub fn into_sorted(mut self) -> &'a mut [T] {
        self.sort();
        self.data
    }

    /// Performs a single extraction: the current maximum moves to the end of
    /// the heap region, which then shrinks by one.
    ///
    /// Returns `false` once the whole slice is in place; further calls do
    /// nothing.
    pub fn sort_step(&mut self) -> bool {
        match self.heap_len {
            0 => return false,
            1 => {
                self.heap_len = 0;
                return false;
            }
            _ => {}
        }

        let last = self.heap_len - 1;
        self.data.swap(0, last);
        if last == 1 {
            self.heap_len = 0;
        } else {
            self.heap_len = last;
            self.sift_down(0);
        }
        self.heap_len > 0
    }

    fn build_heap(&mut self) {
        if self.heap_len < 2 {
            return;
        }
        for parent in (0..=(self.heap_len - 2) / 2).rev() {
            self.sift_down(parent);
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        while let Some((child, true)) = self.heapify(node) {
            node = child;
        }
    }

    /// Single-level repair at `parent`: picks the greater child (the right
    /// one on ties) and swaps it up if it beats the parent.
    ///
    /// Returns the chosen child and whether a swap happened, or `None` when
    /// `parent` has no children inside the heap.
    fn heapify(&mut self, parent: usize) -> Option<(usize, bool)> {
        debug_assert!(parent < self.heap_len);

        let left = 2 * parent + 1;
        let right = left + 1;
        if left >= self.heap_len {
            return None;
        }

        let child = if right >= self.heap_len || self.greater(left, right) {
            left
        } else {
            right
        };

        let swapped = self.greater(child, parent);
        if swapped {
            self.data.swap(parent, child);
        }
        Some((child, swapped))
    }

    #[inline]
    fn greater(&mut self, a: usize, b: usize) -> bool {
        (self.compare)(&self.data[a], &self.data[b]) == Ordering::Greater
    }
}
