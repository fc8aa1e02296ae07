//! An indexed binary min-heap keyed by Vertex.

use crate::{Cost, VertexID};

/// A min-priority-queue of Vertices with `decrease_key` support.
///
/// The capacity is fixed to the number of Vertices given to [`new`](IndexedMinQueue::new) and
/// every Vertex occupies at most one slot. An auxiliary index from Vertex to heap slot makes
/// [`contains`](IndexedMinQueue::contains) O(1) and
/// [`decrease_key`](IndexedMinQueue::decrease_key) O(log n).
///
/// Among equal priorities no particular order is guaranteed, but the order is deterministic.
///
/// ## Examples
/// ```
/// # use route_planner::queue::IndexedMinQueue;
/// let mut queue = IndexedMinQueue::new(4);
/// queue.insert(0, 10);
/// queue.insert(3, 5);
/// queue.insert(2, 7);
/// queue.decrease_key(0, 1);
///
/// assert_eq!(queue.pop_min(), Some((0, 1)));
/// assert_eq!(queue.pop_min(), Some((3, 5)));
/// assert_eq!(queue.pop_min(), Some((2, 7)));
/// assert_eq!(queue.pop_min(), None);
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinQueue {
	heap: Vec<(VertexID, Cost)>,
	slots: Vec<Option<usize>>,
}

impl IndexedMinQueue {
	/// Creates an empty queue for the Vertices `0..capacity`
	pub fn new(capacity: usize) -> IndexedMinQueue {
		IndexedMinQueue {
			heap: Vec::with_capacity(capacity),
			slots: vec![None; capacity],
		}
	}

	/// The number of queued Vertices
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	/// Returns `true` if no Vertex is queued
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// The maximum number of Vertices this queue can hold
	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	/// Returns `true` if `vertex` is currently queued
	pub fn contains(&self, vertex: VertexID) -> bool {
		matches!(self.slots.get(vertex), Some(Some(_)))
	}

	/// The current priority of `vertex`, if it is queued
	pub fn priority(&self, vertex: VertexID) -> Option<Cost> {
		let slot = (*self.slots.get(vertex)?)?;
		Some(self.heap[slot].1)
	}

	/// Queues `vertex` with `priority`.
	///
	/// Returns `false` and changes nothing if `vertex` is out of range or already queued.
	pub fn insert(&mut self, vertex: VertexID, priority: Cost) -> bool {
		match self.slots.get(vertex) {
			Some(None) => {}
			_ => return false,
		}
		let slot = self.heap.len();
		self.heap.push((vertex, priority));
		self.slots[vertex] = Some(slot);
		self.sift_up(slot);
		true
	}

	/// Lowers the priority of a queued Vertex.
	///
	/// Does nothing if `vertex` is not queued or `priority` is not lower than its current one.
	/// Returns `true` if the priority was changed.
	pub fn decrease_key(&mut self, vertex: VertexID, priority: Cost) -> bool {
		let slot = match self.slots.get(vertex) {
			Some(&Some(slot)) => slot,
			_ => return false,
		};
		if priority >= self.heap[slot].1 {
			return false;
		}
		self.heap[slot].1 = priority;
		self.sift_up(slot);
		true
	}

	/// Removes and returns the Vertex with the lowest priority
	pub fn pop_min(&mut self) -> Option<(VertexID, Cost)> {
		if self.heap.is_empty() {
			return None;
		}
		let min = self.heap.swap_remove(0);
		self.slots[min.0] = None;
		if let Some(&(moved, _)) = self.heap.first() {
			self.slots[moved] = Some(0);
			self.sift_down(0);
		}
		Some(min)
	}

	fn swap(&mut self, a: usize, b: usize) {
		self.heap.swap(a, b);
		self.slots[self.heap[a].0] = Some(a);
		self.slots[self.heap[b].0] = Some(b);
	}

	fn sift_up(&mut self, mut slot: usize) {
		while slot > 0 {
			let parent = (slot - 1) / 2;
			if self.heap[parent].1 <= self.heap[slot].1 {
				break;
			}
			self.swap(parent, slot);
			slot = parent;
		}
	}

	fn sift_down(&mut self, mut slot: usize) {
		loop {
			let mut min = slot;
			for child in [2 * slot + 1, 2 * slot + 2] {
				if child < self.heap.len() && self.heap[child].1 < self.heap[min].1 {
					min = child;
				}
			}
			if min == slot {
				break;
			}
			self.swap(slot, min);
			slot = min;
		}
	}
}
