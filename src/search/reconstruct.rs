use crate::VertexID;

/// Parent pointers of a search: `parents[v]` is the Vertex `v` was reached from.
pub(crate) type Parents = Vec<Option<VertexID>>;

/// Walks the parent pointers back from `goal` to `start` and returns the Vertices in
/// start-to-goal order.
///
/// Fails if the chain of parents never reaches `start`, if it loops, or if the resulting Path
/// would have more than `max_len` Vertices. Nothing is returned in those cases.
pub(crate) fn reconstruct_path(
	start: VertexID,
	goal: VertexID,
	parents: &[Option<VertexID>],
	max_len: usize,
) -> Option<Vec<VertexID>> {
	if max_len == 0 || start >= parents.len() || goal >= parents.len() {
		return None;
	}
	let mut seen = vec![false; parents.len()];
	let mut steps = vec![];
	let mut current = goal;

	loop {
		if std::mem::replace(&mut seen[current], true) {
			log::warn!("parent pointers loop at vertex {}", current);
			return None;
		}
		steps.push(current);
		if current == start {
			break;
		}
		current = parents[current]?;
	}

	if steps.len() > max_len {
		return None;
	}
	steps.reverse();
	Some(steps)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn follows_parents() {
		let parents = vec![None, Some(0), Some(1), Some(1)];
		assert_eq!(reconstruct_path(0, 3, &parents, 10), Some(vec![0, 1, 3]));
		assert_eq!(reconstruct_path(0, 0, &parents, 1), Some(vec![0]));
		assert_eq!(reconstruct_path(1, 2, &parents, 2), Some(vec![1, 2]));
	}

	#[test]
	fn disconnected() {
		let parents = vec![None, Some(0), None, Some(2)];
		assert_eq!(reconstruct_path(0, 3, &parents, 10), None);
	}

	#[test]
	fn cycle_guard() {
		// 3 -> 2 -> 1 -> 2 -> ...
		let parents = vec![None, Some(2), Some(1), Some(2)];
		assert_eq!(reconstruct_path(0, 3, &parents, 10), None);
	}

	#[test]
	fn capacity() {
		let parents: Parents = (0..15).map(|v: VertexID| v.checked_sub(1)).collect();
		assert_eq!(reconstruct_path(0, 14, &parents, 5), None);
		assert_eq!(reconstruct_path(0, 14, &parents, 15).map(|p| p.len()), Some(15));
		assert_eq!(reconstruct_path(0, 0, &parents, 0), None);
	}

	#[test]
	fn out_of_range() {
		let parents = vec![None, Some(0)];
		assert_eq!(reconstruct_path(0, 2, &parents, 10), None);
	}
}
