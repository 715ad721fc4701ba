//! Pending-work container with three interchangeable disciplines.
//!
//! FIFO and LIFO ignore the pushed priority. Priority mode pops the smallest
//! priority, breaking ties by push order, so every discipline is fully
//! deterministic for a deterministic push sequence.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::error::FrontierError;
use crate::node::FrontierKey;

/// Pop-order discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// Oldest first (breadth-first).
    Fifo,
    /// Newest first (depth-first).
    Lifo,
    /// Smallest priority first, then oldest (uniform-cost, greedy, A*).
    Priority,
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
            Self::Priority => "priority",
        })
    }
}

/// A priority-mode entry wrapping an item with its ordering key.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop
/// the smallest key first.
#[derive(Debug)]
struct PriorityEntry<T> {
    key: Reverse<FrontierKey>,
    item: T,
}

impl<T> PartialEq for PriorityEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for PriorityEntry<T> {}

impl<T> PartialOrd for PriorityEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for PriorityEntry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Store<T> {
    Fifo(VecDeque<T>),
    Lifo(Vec<T>),
    Priority(BinaryHeap<PriorityEntry<T>>),
}

/// Frontier of pending items.
///
/// Maintains the backing store for its discipline, a monotonic insertion
/// counter (priority tie-break) and the high-water mark of its size.
#[derive(Debug)]
pub struct Frontier<T> {
    store: Store<T>,
    next_insertion: u64,
    high_water: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier with the given discipline.
    #[must_use]
    pub fn new(discipline: Discipline) -> Self {
        let store = match discipline {
            Discipline::Fifo => Store::Fifo(VecDeque::new()),
            Discipline::Lifo => Store::Lifo(Vec::new()),
            Discipline::Priority => Store::Priority(BinaryHeap::new()),
        };
        Self {
            store,
            next_insertion: 0,
            high_water: 0,
        }
    }

    /// The pop-order discipline of this frontier.
    #[must_use]
    pub fn discipline(&self) -> Discipline {
        match self.store {
            Store::Fifo(_) => Discipline::Fifo,
            Store::Lifo(_) => Discipline::Lifo,
            Store::Priority(_) => Discipline::Priority,
        }
    }

    /// Push an item. `priority` is only consulted in priority mode and is
    /// never recomputed afterwards.
    pub fn push(&mut self, item: T, priority: i64) {
        let insertion_order = self.next_insertion;
        self.next_insertion += 1;

        match &mut self.store {
            Store::Fifo(queue) => queue.push_back(item),
            Store::Lifo(stack) => stack.push(item),
            Store::Priority(heap) => heap.push(PriorityEntry {
                key: Reverse(FrontierKey {
                    priority,
                    insertion_order,
                }),
                item,
            }),
        }

        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the next item per discipline.
    ///
    /// # Errors
    ///
    /// Returns [`FrontierError::EmptyPop`] if the frontier is empty; callers
    /// are expected to gate every pop on [`Frontier::is_empty`].
    pub fn pop(&mut self) -> Result<T, FrontierError> {
        let popped = match &mut self.store {
            Store::Fifo(queue) => queue.pop_front(),
            Store::Lifo(stack) => stack.pop(),
            Store::Priority(heap) => heap.pop().map(|entry| entry.item),
        };
        popped.ok_or(FrontierError::EmptyPop {
            discipline: self.discipline(),
        })
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Fifo(queue) => queue.len(),
            Store::Lifo(stack) => stack.len(),
            Store::Priority(heap) => heap.len(),
        }
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
