// Node storage for the list: a slot arena addressed by stable indices.
//
// Slot 0 is the sentinel ("before-begin") node. It never holds a value and
// lives as long as the arena. Every other slot is either a live node on the
// chain or a vacated slot waiting on the free stack.

use std::sync::atomic::{AtomicU64, Ordering};

pub(crate) type Link = Option<usize>;

pub(crate) const SENTINEL: usize = 0;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one node chain. Travels with the arena, so positions keep
/// pointing at their nodes when two lists exchange internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    fn fresh() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Option<T>,
    pub(crate) next: Link,
    // Bumped every time the slot is vacated.
    pub(crate) generation: u32,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Node {
            value: None,
            next: None,
            generation: 0,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Arena<T> {
    id: ListId,
    pub(crate) nodes: Vec<Node<T>>,
    free: Vec<usize>,
    // Starting generation for freshly pushed slots. Raised when trailing
    // slots are dropped so their old positions cannot match again.
    fresh_generation: u32,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node::sentinel());
        Arena {
            id: ListId::fresh(),
            nodes,
            free: Vec::new(),
            fresh_generation: 0,
        }
    }

    pub(crate) fn id(&self) -> ListId {
        self.id
    }

    /// Number of real nodes the arena holds before it has to grow.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity() - 1
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        let needed = additional.saturating_sub(self.free.len());
        self.nodes.reserve(needed);
    }

    /// Drops vacant slots at the tail and trims both vectors. Live slots keep
    /// their indices.
    pub(crate) fn shrink_to_fit(&mut self) {
        while self.nodes.len() > 1 && self.nodes[self.nodes.len() - 1].value.is_none() {
            if let Some(node) = self.nodes.pop() {
                self.fresh_generation = self.fresh_generation.max(node.generation);
            }
        }
        let slots = self.nodes.len();
        self.free.retain(|&index| index < slots);
        self.nodes.shrink_to_fit();
        self.free.shrink_to_fit();
    }

    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn free_slots(&self) -> &[usize] {
        &self.free
    }

    /// Moves `value` into a vacated or fresh slot linked to `next`.
    ///
    /// The new slot is not reachable from the chain until the caller links
    /// it in, so a failed allocation leaves the chain untouched.
    pub(crate) fn alloc(&mut self, value: T, next: Link) -> usize {
        match self.free.pop() {
            Some(index) => {
                let node = &mut self.nodes[index];
                debug_assert!(node.value.is_none(), "free slot {index} still holds a value");
                node.value = Some(value);
                node.next = next;
                index
            }
            None => {
                let index = self.nodes.len();
                self.nodes.push(Node {
                    value: Some(value),
                    next,
                    generation: self.fresh_generation,
                });
                index
            }
        }
    }

    /// Vacates a detached slot and hands back its value.
    pub(crate) fn release(&mut self, index: usize) -> Option<T> {
        debug_assert_ne!(index, SENTINEL, "the sentinel is never released");
        let node = &mut self.nodes[index];
        let value = node.value.take();
        node.next = None;
        node.generation = node.generation.wrapping_add(1);
        self.free.push(index);
        value
    }

    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        &self.nodes[index]
    }

    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        &mut self.nodes[index]
    }

    pub(crate) fn next_of(&self, index: usize) -> Link {
        self.nodes[index].next
    }

    /// Whether `(index, generation)` still names the node it was issued for.
    pub(crate) fn is_live(&self, index: usize, generation: u32) -> bool {
        match self.nodes.get(index) {
            Some(node) if node.generation == generation => {
                index == SENTINEL || node.value.is_some()
            }
            _ => false,
        }
    }
}
