/// An array-backed binary min-heap, generic over the items it stores.
/// The priority of an item is derived by a key extraction function
/// supplied at construction, so any item the heap can hold has a
/// priority by construction. Ties between equal priorities are broken
/// arbitrarily by position; no stability is guaranteed.
pub struct MinHeap<T, F> {
    items: Vec<T>,
    priority: F,
}

impl<T, P, F> MinHeap<T, F>
where
    P: PartialOrd,
    F: Fn(&T) -> P,
{
    /// Creates an empty heap whose item priorities are computed by the
    /// given key extraction function.
    pub fn new(priority: F) -> Self {
        MinHeap { items: Vec::new(), priority }
    }

    /// Creates an empty heap with space reserved for `capacity` items.
    pub fn with_capacity(capacity: usize, priority: F) -> Self {
        MinHeap { items: Vec::with_capacity(capacity), priority }
    }

    /// Inserts an item, restoring the heap ordering by sifting the new
    /// item up towards the root. Amortised O(log n).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the item with the smallest priority, or
    /// `None` if the heap is empty. The last item is moved into the
    /// root slot and sifted down to its correct position. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let item = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        item
    }

    /// Returns a reference to the item with the smallest priority
    /// without removing it, or `None` if the heap is empty.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn priority_at(&self, i: usize) -> P {
        (self.priority)(&self.items[i])
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.priority_at(i) < self.priority_at(parent) {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < self.items.len() && self.priority_at(left) < self.priority_at(smallest) {
                smallest = left;
            }
            if right < self.items.len() && self.priority_at(right) < self.priority_at(smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}
