use std::cmp::Ordering;
use thiserror::Error;

const FIRST_ELEMENT_INDEX: usize = 1;

#[derive(Clone, Copy, Debug)]
struct HeapEntry<P> {
    id: usize,
    priority: P,
    /// Insertion stamp, breaks ties between equal priorities (FIFO).
    sequence: u64,
}

impl<P: PartialOrd> HeapEntry<P> {
    #[inline(always)]
    fn precedes(&self, other: &HeapEntry<P>) -> bool {
        match self.priority.partial_cmp(&other.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => self.sequence < other.sequence,
        }
    }
}

/// Indexed binary min-heap keyed by dense element ids.
///
/// Elements with equal priorities come out in insertion order, which keeps
/// the searches built on top of it deterministic.
pub struct PriorityQueue<P> {
    heap: Vec<HeapEntry<P>>,
    positions: Vec<Option<usize>>,
    size: usize,
    next_sequence: u64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PriorityQueueError {
    #[error("Priority queue is empty")]
    Empty,
    #[error("Element {0} already exists in the priority queue")]
    ElementAlreadyExists(usize),
}

impl<P> PriorityQueue<P>
where
    P: PartialOrd + Copy + Default,
{
    pub fn new(capacity: usize) -> Self {
        let mut heap = Vec::with_capacity(capacity + 1);
        heap.push(HeapEntry {
            id: usize::MAX,
            priority: P::default(),
            sequence: 0,
        });
        Self {
            heap,
            positions: vec![None; capacity],
            size: 0,
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn contains(&self, id: usize) -> bool {
        self.positions.get(id).is_some_and(Option::is_some)
    }

    pub fn priority(&self, id: usize) -> Option<P> {
        let position = (*self.positions.get(id)?)?;
        Some(self.heap[position].priority)
    }

    pub fn insert(&mut self, id: usize, priority: P) -> Result<(), PriorityQueueError> {
        if self.contains(id) {
            return Err(PriorityQueueError::ElementAlreadyExists(id));
        }

        if id >= self.positions.len() {
            self.positions.resize(id + 1, None);
        }

        let sequence = self.stamp();
        self.size += 1;
        self.heap.push(HeapEntry {
            id,
            priority,
            sequence,
        });
        self.positions[id] = Some(self.size);
        self.sift_up(self.size);

        Ok(())
    }

    /// Inserts `id` if absent, lowers its priority if `priority` is smaller.
    /// Returns whether the queue changed.
    pub fn decrease_priority(&mut self, id: usize, priority: P) -> bool {
        let Some(position) = self.positions.get(id).copied().flatten() else {
            // The id cannot be present here, insert never fails
            return self.insert(id, priority).is_ok();
        };

        if priority.partial_cmp(&self.heap[position].priority) != Some(Ordering::Less) {
            return false;
        }

        let sequence = self.stamp();
        self.heap[position].priority = priority;
        self.heap[position].sequence = sequence;
        self.sift_up(position);
        true
    }

    pub fn peek(&self) -> Option<(usize, P)> {
        if self.size == 0 {
            return None;
        }

        let entry = &self.heap[FIRST_ELEMENT_INDEX];
        Some((entry.id, entry.priority))
    }

    pub fn pop(&mut self) -> Option<(usize, P)> {
        if self.size == 0 {
            return None;
        }

        let entry = self.heap.swap_remove(FIRST_ELEMENT_INDEX);
        self.size -= 1;

        // Id is removed from the heap
        self.positions[entry.id] = None;

        if self.size > 0 {
            // The last becomes the first element
            self.positions[self.heap[FIRST_ELEMENT_INDEX].id] = Some(FIRST_ELEMENT_INDEX);
            self.sift_down(FIRST_ELEMENT_INDEX);
        }

        Some((entry.id, entry.priority))
    }

    pub fn extract_min(&mut self) -> Result<(usize, P), PriorityQueueError> {
        self.pop().ok_or(PriorityQueueError::Empty)
    }

    pub fn clear(&mut self) {
        self.positions.fill(None);
        self.heap.truncate(FIRST_ELEMENT_INDEX);
        self.size = 0;
        self.next_sequence = 0;
    }

    fn stamp(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }

    fn sift_up(&mut self, element_index: usize) {
        let mut index = element_index;
        while index > FIRST_ELEMENT_INDEX {
            let parent_index = index >> 1;
            if !self.heap[index].precedes(&self.heap[parent_index]) {
                break;
            }

            self.heap.swap(index, parent_index);

            // The position of the previous parent is updated
            self.positions[self.heap[index].id] = Some(index);

            index = parent_index;
        }

        self.positions[self.heap[index].id] = Some(index);
    }

    fn sift_down(&mut self, element_index: usize) {
        let mut index = element_index;

        while index << 1 <= self.size {
            let left_child_index = index << 1;
            let right_child_index = left_child_index + 1;

            let mut child_index = left_child_index;
            if right_child_index <= self.size
                && self.heap[right_child_index].precedes(&self.heap[left_child_index])
            {
                child_index = right_child_index;
            }

            if !self.heap[child_index].precedes(&self.heap[index]) {
                break;
            }

            self.heap.swap(index, child_index);

            // The position of the previous child is updated
            self.positions[self.heap[index].id] = Some(index);

            index = child_index;
        }

        self.positions[self.heap[index].id] = Some(index);
    }
}
