//! The result type of all searches.

use crate::{Cost, VertexID};

/// The Cost reported for a search that did not produce a Path.
pub const NO_PATH_COST: Cost = -1;

/// A Path through a [`Graph`](crate::graph::Graph)
///
/// Stores a sequence of Vertices in `path` and the total Cost of traversing them in `cost`.
/// The meaning of `cost` depends on the search that produced the Path: the number of Edges for
/// [`bfs_search`](crate::search::bfs_search) and [`dfs_search`](crate::search::dfs_search),
/// the sum of the Edge weights for all others.
///
/// The first element is always the start and the last is always the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P = VertexID> {
	/// the Path
	pub path: Vec<P>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Vertices and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use route_planner::path::Path;
	/// let path = Path::new(vec![0, 3, 2], 42);
	///
	/// assert_eq!(path.path, vec![0, 3, 2]);
	/// assert_eq!(path.cost, 42);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// The number of Edges along the Path
	pub fn hops(&self) -> usize {
		self.path.len().saturating_sub(1)
	}

	/// The first Vertex of the Path
	pub fn start(&self) -> Option<&P> {
		self.path.first()
	}

	/// The last Vertex of the Path
	pub fn goal(&self) -> Option<&P> {
		self.path.last()
	}
}

/// Returns the Cost of `result`, or [`NO_PATH_COST`] if there is no Path.
///
/// ## Examples
/// ```
/// # use route_planner::path::{cost_or_sentinel, Path, NO_PATH_COST};
/// assert_eq!(cost_or_sentinel(Some(&Path::new(vec![0, 1], 4))), 4);
/// assert_eq!(cost_or_sentinel::<usize>(None), NO_PATH_COST);
/// ```
pub fn cost_or_sentinel<P>(result: Option<&Path<P>>) -> Cost {
	result.map_or(NO_PATH_COST, |path| path.cost)
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
	fn cmp(&self, other: &Path<P>) -> Ordering {
		self.cost.cmp(&other.cost)
	}
}

impl<P: Eq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {

	use super::Path;
	#[test]
	fn path_index() {
		let path = Path::new(vec![4, 2, 0], 42);

		assert_eq!(path[0], 4);
		assert_eq!(path[1], 2);
		assert_eq!(path[2], 0);
		assert_eq!(path.hops(), 2);
		assert_eq!(path.start(), Some(&4));
		assert_eq!(path.goal(), Some(&0));
	}

	#[test]
	fn path_display() {
		let path = Path::new(vec![4, 2, 0], -3);

		assert_eq!(&format!("{}", path), "Path[Cost = -3]: 4 -> 2 -> 0");
	}

	#[test]
	fn path_display_empty() {
		let path = Path::new(Vec::<i32>::new(), 0);

		assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
		assert_eq!(path.hops(), 0);
	}

	#[test]
	fn path_order() {
		let cheap: Path = Path::new(vec![0, 1], 2);
		let expensive: Path = Path::new(vec![0], 9);

		assert!(cheap < expensive);
	}
}
