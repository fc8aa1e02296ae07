//! Distance estimators for [`a_star_search`](crate::search::a_star_search)

use crate::{Cost, VertexID};
use std::fmt::Debug;

/// Estimates the remaining Cost from a Vertex to the goal.
///
/// Implementations must return a non-negative estimate. A* only returns optimal Paths if the
/// estimate is admissible (it never overestimates the actual remaining Cost) and consistent.
/// This is not checked; an inadmissible Heuristic simply leads to worse Paths.
///
/// If there is no proper way of estimating the Cost, use [`NoHeuristic`]. This will increase
/// the time it takes to find a Path, but the result will always be optimal.
///
/// Any `Fn(VertexID, VertexID) -> Cost` can be used as a Heuristic:
/// ```
/// # use route_planner::heuristic::Heuristic;
/// let by_index = |vertex: usize, goal: usize| (vertex as i32 - goal as i32).abs();
/// assert_eq!(by_index.estimate(7, 3), 4);
/// ```
pub trait Heuristic {
	/// Gives an estimate for how much it costs to reach `goal` from `vertex`.
	fn estimate(&self, vertex: VertexID, goal: VertexID) -> Cost;
}

impl<F: Fn(VertexID, VertexID) -> Cost> Heuristic for F {
	fn estimate(&self, vertex: VertexID, goal: VertexID) -> Cost {
		self(vertex, goal)
	}
}

/// A Heuristic that always returns `0`. A* with this Heuristic visits Vertices in the same
/// order as [`dijkstra_search`](crate::search::dijkstra_search).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHeuristic;

impl Heuristic for NoHeuristic {
	fn estimate(&self, _: VertexID, _: VertexID) -> Cost {
		0
	}
}

/// A Grid layout where Vertex `i` is located at `(i % width, i / width)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct GridLayout {
	width: usize,
}

impl GridLayout {
	fn new(width: usize) -> GridLayout {
		GridLayout {
			width: width.max(1),
		}
	}

	/// the absolute difference in (x, y) between two Vertices
	fn delta(&self, a: VertexID, b: VertexID) -> (usize, usize) {
		let (ax, ay) = (a % self.width, a / self.width);
		let (bx, by) = (b % self.width, b / self.width);
		(ax.abs_diff(bx), ay.abs_diff(by))
	}
}

fn clamp_cost(value: usize) -> Cost {
	Cost::try_from(value).unwrap_or(Cost::MAX)
}

/// The [Manhattan Distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two
/// Vertices of a Grid with a fixed `width`.
///
/// Admissible for Grids where every step to a horizontal or vertical neighbor costs at least 1.
///
/// ```
/// # use route_planner::heuristic::{Heuristic, ManhattanHeuristic};
/// let heuristic = ManhattanHeuristic::new(5);
/// // 8 = (3, 1), 0 = (0, 0)
/// assert_eq!(heuristic.estimate(8, 0), 3 + 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanHeuristic {
	layout: GridLayout,
}

impl ManhattanHeuristic {
	/// Creates a new ManhattanHeuristic.
	///
	/// `width` is the number of Vertices per row. A width of 0 is treated as 1.
	pub fn new(width: usize) -> ManhattanHeuristic {
		ManhattanHeuristic {
			layout: GridLayout::new(width),
		}
	}

	/// the number of Vertices per row
	pub fn width(&self) -> usize {
		self.layout.width
	}
}

impl Heuristic for ManhattanHeuristic {
	fn estimate(&self, vertex: VertexID, goal: VertexID) -> Cost {
		let (dx, dy) = self.layout.delta(vertex, goal);
		clamp_cost(dx.saturating_add(dy))
	}
}

/// The [Euclidean Distance](https://en.wikipedia.org/wiki/Euclidean_distance) between two
/// Vertices of a Grid with a fixed `width`, rounded to the nearest integer.
///
/// Never larger than the [`ManhattanHeuristic`], so it is admissible wherever that one is.
///
/// ```
/// # use route_planner::heuristic::{EuclideanHeuristic, Heuristic};
/// let heuristic = EuclideanHeuristic::new(5);
/// // 24 = (4, 4), 0 = (0, 0)
/// assert_eq!(heuristic.estimate(24, 0), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EuclideanHeuristic {
	layout: GridLayout,
}

impl EuclideanHeuristic {
	/// Creates a new EuclideanHeuristic.
	///
	/// `width` is the number of Vertices per row. A width of 0 is treated as 1.
	pub fn new(width: usize) -> EuclideanHeuristic {
		EuclideanHeuristic {
			layout: GridLayout::new(width),
		}
	}

	/// the number of Vertices per row
	pub fn width(&self) -> usize {
		self.layout.width
	}
}

impl Heuristic for EuclideanHeuristic {
	fn estimate(&self, vertex: VertexID, goal: VertexID) -> Cost {
		let (dx, dy) = self.layout.delta(vertex, goal);
		let (dx, dy) = (dx as f64, dy as f64);
		let distance = (dx * dx + dy * dy).sqrt().round();
		if distance >= Cost::MAX as f64 {
			Cost::MAX
		} else {
			distance as Cost
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn manhattan() {
		let heuristic = ManhattanHeuristic::new(5);
		assert_eq!(heuristic.estimate(0, 24), 8);
		assert_eq!(heuristic.estimate(24, 0), 8);
		assert_eq!(heuristic.estimate(12, 12), 0);
		// 4 = (4, 0), 5 = (0, 1)
		assert_eq!(heuristic.estimate(4, 5), 5);
	}

	#[test]
	fn euclidean() {
		let heuristic = EuclideanHeuristic::new(5);
		assert_eq!(heuristic.estimate(0, 6), 1);
		assert_eq!(heuristic.estimate(0, 3), 3);
		// (0, 0) -> (2, 3): sqrt(13) = 3.6
		assert_eq!(heuristic.estimate(0, 17), 4);
	}

	#[test]
	fn euclidean_never_exceeds_manhattan() {
		let manhattan = ManhattanHeuristic::new(7);
		let euclidean = EuclideanHeuristic::new(7);
		for a in 0..49 {
			for b in 0..49 {
				let e = euclidean.estimate(a, b);
				assert!(e >= 0);
				assert!(e <= manhattan.estimate(a, b));
			}
		}
	}

	#[test]
	fn zero_width() {
		let heuristic = ManhattanHeuristic::new(0);
		assert_eq!(heuristic.width(), 1);
		assert_eq!(heuristic.estimate(0, 3), 3);
	}

	#[test]
	fn no_heuristic() {
		assert_eq!(NoHeuristic.estimate(0, 1000), 0);
	}
}
