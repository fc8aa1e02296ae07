//! The path search algorithms.
//!
//! Every search takes a [`Graph`], a start and a goal Vertex and returns the [`Path`] it found,
//! or `None` if there is none. `None` is also returned if `start` or `goal` are out of range, if
//! the Path is longer than [`SearchConfig::max_path_len`] allows, and, for
//! [`bellman_ford_search`], if the Cost of reaching the goal is undefined because of a negative
//! cycle. Use [`negative_cycle_reaches`] to tell the last case apart.
//!
//! No search modifies the Graph, and no state is kept between calls.
//!
//! | Search                  | Cost of the Path       | Edge weights             |
//! |-------------------------|------------------------|--------------------------|
//! | [`bfs_search`]          | number of Edges (min.) | ignored                  |
//! | [`dfs_search`]          | number of Edges        | ignored                  |
//! | [`dijkstra_search`]     | sum of weights (min.)  | negative Edges skipped   |
//! | [`a_star_search`]       | sum of weights (min.)  | negative Edges skipped   |
//! | [`bellman_ford_search`] | sum of weights (min.)  | negative weights allowed |

mod config;
pub use self::config::SearchConfig;

mod reconstruct;
use self::reconstruct::{reconstruct_path, Parents};

mod bfs;
mod dfs;
mod dijkstra;
mod a_star;
mod bellman_ford;

use crate::{
	graph::Graph,
	heuristic::{EuclideanHeuristic, Heuristic, ManhattanHeuristic, NoHeuristic},
	path::Path,
	Cost, VertexID,
};
use std::fmt;

/// The Cost of a Path that is measured in Edges
fn hop_cost(steps: &[VertexID]) -> Cost {
	Cost::try_from(steps.len().saturating_sub(1)).unwrap_or(Cost::MAX)
}

fn valid_input(graph: &Graph, start: VertexID, goal: VertexID, config: &SearchConfig) -> bool {
	graph.contains(start) && graph.contains(goal) && config.max_path_len > 0
}

/// Finds the Path with the fewest Edges using a
/// [Breadth-First Search](https://en.wikipedia.org/wiki/Breadth-first_search).
///
/// Edge weights are ignored and the Cost of the returned Path is its number of Edges.
///
/// ## Examples
/// ```
/// # use route_planner::{graph::Graph, search::bfs_search};
/// let mut graph = Graph::new(4).unwrap();
/// graph.add_edge(0, 1, 1, false);
/// graph.add_edge(1, 3, 1, false);
/// graph.add_edge(0, 2, 50, false);
/// graph.add_edge(2, 3, 50, false);
/// graph.add_edge(0, 3, 900, false);
///
/// let path = bfs_search(&graph, 0, 3).unwrap();
/// assert_eq!(path.path, vec![0, 3]);
/// assert_eq!(path.cost, 1);
///
/// assert_eq!(bfs_search(&graph, 3, 0), None);
/// ```
pub fn bfs_search(graph: &Graph, start: VertexID, goal: VertexID) -> Option<Path> {
	find_path(graph, Algorithm::Bfs, start, goal, &SearchConfig::default())
}

/// Finds any Path using a [Depth-First Search](https://en.wikipedia.org/wiki/Depth-first_search).
///
/// The Path is not guaranteed to be the shortest by any measure. Its Cost is its number of
/// Edges. The search uses an explicit stack, so long Paths cannot overflow the call stack.
///
/// ## Examples
/// ```
/// # use route_planner::{graph::Graph, search::dfs_search};
/// let mut graph = Graph::new(4).unwrap();
/// graph.add_unit_edge(0, 1, false);
/// graph.add_unit_edge(1, 3, false);
/// graph.add_unit_edge(0, 2, false);
/// graph.add_unit_edge(2, 3, false);
///
/// let path = dfs_search(&graph, 0, 3).unwrap();
/// assert_eq!(path.first(), Some(&0));
/// assert_eq!(path.last(), Some(&3));
/// ```
pub fn dfs_search(graph: &Graph, start: VertexID, goal: VertexID) -> Option<Path> {
	find_path(graph, Algorithm::Dfs, start, goal, &SearchConfig::default())
}

/// Finds the cheapest Path using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// Edges with a negative weight are treated as if they did not exist. Use
/// [`bellman_ford_search`] for Graphs with negative weights. Costs that exceed [`Cost::MAX`]
/// saturate.
///
/// ## Examples
/// ```
/// # use route_planner::{graph::Graph, search::dijkstra_search};
/// // A     B--2--E
/// // |\
/// // 1  9
/// // |   \
/// // C--6--D
/// let (a, b, c, d, e) = (0, 1, 2, 3, 4);
/// let mut graph = Graph::new(5).unwrap();
/// graph.add_edge(a, c, 1, true);
/// graph.add_edge(a, d, 9, true);
/// graph.add_edge(c, d, 6, true);
/// graph.add_edge(b, e, 2, true);
///
/// let path = dijkstra_search(&graph, a, d).unwrap();
/// assert_eq!(path.path, vec![a, c, d]);
/// assert_eq!(path.cost, 7);
///
/// assert_eq!(dijkstra_search(&graph, a, e), None);
/// ```
pub fn dijkstra_search(graph: &Graph, start: VertexID, goal: VertexID) -> Option<Path> {
	find_path(graph, Algorithm::Dijkstra, start, goal, &SearchConfig::default())
}

/// Finds the cheapest Path using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Like [`dijkstra_search`], but Vertices are expanded in order of their Cost plus the
/// `heuristic` estimate of the remaining Cost. The search ends as soon as the goal is the
/// cheapest queued Vertex. With [`NoHeuristic`] the result has the same Cost as
/// [`dijkstra_search`].
///
/// The returned Path is only guaranteed to be optimal if the Heuristic is admissible and
/// consistent. See [`Heuristic`].
///
/// ## Examples
/// ```
/// # use route_planner::{graph::Graph, heuristic::ManhattanHeuristic, search::a_star_search};
/// // a 3x3 Grid: Vertex i is at (i % 3, i / 3)
/// let mut graph = Graph::new(9).unwrap();
/// for i in 0..9 {
///     if i % 3 < 2 {
///         graph.add_unit_edge(i, i + 1, true);
///     }
///     if i < 6 {
///         graph.add_unit_edge(i, i + 3, true);
///     }
/// }
///
/// let path = a_star_search(&graph, 0, 8, &ManhattanHeuristic::new(3)).unwrap();
/// assert_eq!(path.cost, 4);
/// assert_eq!(path.len(), 5);
/// ```
pub fn a_star_search<H: Heuristic + ?Sized>(
	graph: &Graph,
	start: VertexID,
	goal: VertexID,
	heuristic: &H,
) -> Option<Path> {
	let config = SearchConfig::default();
	if !valid_input(graph, start, goal, &config) {
		return None;
	}
	let result = a_star::a_star(graph, start, goal, heuristic, &config);
	log_result("A*", start, goal, result.as_ref());
	result
}

/// Finds the cheapest Path in a Graph that may have negative weights using the
/// [Bellman-Ford Algorithm](https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm).
///
/// If the goal can be reached from a negative cycle, its Cost is unbounded and `None` is
/// returned, even though a Path exists. [`negative_cycle_reaches`] tells this case apart from an
/// unreachable goal. If `start == goal`, the trivial Path `[start]` with Cost `0` is returned
/// without searching.
///
/// Intermediate sums are calculated in `i64` and clamped to the range of [`Cost`].
///
/// ## Examples
/// ```
/// # use route_planner::{graph::Graph, search::{bellman_ford_search, negative_cycle_reaches}};
/// let mut graph = Graph::new(4).unwrap();
/// graph.add_edge(0, 1, 6, false);
/// graph.add_edge(1, 2, 5, false);
/// graph.add_edge(2, 3, -4, false);
/// graph.add_edge(0, 3, 8, false);
///
/// let path = bellman_ford_search(&graph, 0, 3).unwrap();
/// assert_eq!(path.path, vec![0, 1, 2, 3]);
/// assert_eq!(path.cost, 7);
///
/// // 1 -> 2 -> 1 costs -1
/// graph.add_edge(2, 1, -6, false);
/// assert_eq!(bellman_ford_search(&graph, 0, 3), None);
/// assert!(negative_cycle_reaches(&graph, 0, 3));
/// ```
pub fn bellman_ford_search(graph: &Graph, start: VertexID, goal: VertexID) -> Option<Path> {
	find_path(graph, Algorithm::BellmanFord, start, goal, &SearchConfig::default())
}

/// Returns `true` if the Cost of reaching `goal` from `start` is undefined, because `goal` can be
/// reached from a negative cycle that `start` can reach.
///
/// Returns `false` for out-of-range Vertices.
pub fn negative_cycle_reaches(graph: &Graph, start: VertexID, goal: VertexID) -> bool {
	graph.contains(start)
		&& graph.contains(goal)
		&& bellman_ford::negative_cycle_reaches(graph, start, goal)
}

/// The bundled Heuristics for [`Algorithm::AStar`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicKind {
	/// see [`NoHeuristic`]
	None,
	/// see [`ManhattanHeuristic`]. Holds the width of the Grid.
	Manhattan(usize),
	/// see [`EuclideanHeuristic`]. Holds the width of the Grid.
	Euclidean(usize),
}

/// Selects one of the searches for [`find_path`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
	/// see [`bfs_search`]
	Bfs,
	/// see [`dfs_search`]
	Dfs,
	/// see [`dijkstra_search`]
	Dijkstra,
	/// see [`a_star_search`]
	AStar(HeuristicKind),
	/// see [`bellman_ford_search`]
	BellmanFord,
}

impl Algorithm {
	/// A human-readable name
	pub fn name(&self) -> &'static str {
		match self {
			Algorithm::Bfs => "BFS",
			Algorithm::Dfs => "DFS",
			Algorithm::Dijkstra => "Dijkstra",
			Algorithm::AStar(HeuristicKind::None) => "A* (no heuristic)",
			Algorithm::AStar(HeuristicKind::Manhattan(_)) => "A* (Manhattan)",
			Algorithm::AStar(HeuristicKind::Euclidean(_)) => "A* (Euclidean)",
			Algorithm::BellmanFord => "Bellman-Ford",
		}
	}

	/// `true` if the Cost of the found Paths is a number of Edges rather than a sum of weights
	pub fn reports_hops(&self) -> bool {
		matches!(self, Algorithm::Bfs | Algorithm::Dfs)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "{}", self.name())
	}
}

/// Runs `algorithm` from `start` to `goal` with the options in `config`.
///
/// ## Examples
/// ```
/// # use route_planner::{graph::Graph, search::{find_path, Algorithm, SearchConfig}};
/// let mut graph = Graph::new(15).unwrap();
/// for i in 0..14 {
///     graph.add_edge(i, i + 1, 1, false);
/// }
///
/// let config = SearchConfig::with_max_path_len(5);
/// assert!(find_path(&graph, Algorithm::Dijkstra, 0, 4, &config).is_some());
/// // the Path would have 15 Vertices
/// assert_eq!(find_path(&graph, Algorithm::Dijkstra, 0, 14, &config), None);
/// ```
pub fn find_path(
	graph: &Graph,
	algorithm: Algorithm,
	start: VertexID,
	goal: VertexID,
	config: &SearchConfig,
) -> Option<Path> {
	if !valid_input(graph, start, goal, config) {
		log::debug!("{}: invalid input {} -> {}", algorithm, start, goal);
		return None;
	}
	let result = match algorithm {
		Algorithm::Bfs => bfs::bfs(graph, start, goal, config),
		Algorithm::Dfs => dfs::dfs(graph, start, goal, config),
		Algorithm::Dijkstra => dijkstra::dijkstra(graph, start, goal, config),
		Algorithm::AStar(HeuristicKind::None) => {
			a_star::a_star(graph, start, goal, &NoHeuristic, config)
		}
		Algorithm::AStar(HeuristicKind::Manhattan(width)) => {
			a_star::a_star(graph, start, goal, &ManhattanHeuristic::new(width), config)
		}
		Algorithm::AStar(HeuristicKind::Euclidean(width)) => {
			a_star::a_star(graph, start, goal, &EuclideanHeuristic::new(width), config)
		}
		Algorithm::BellmanFord => bellman_ford::bellman_ford(graph, start, goal, config),
	};
	log_result(algorithm.name(), start, goal, result.as_ref());
	result
}

fn log_result(name: &str, start: VertexID, goal: VertexID, result: Option<&Path>) {
	match result {
		Some(path) => log::debug!(
			"{}: {} -> {} found {} vertices, cost {}",
			name,
			start,
			goal,
			path.len(),
			path.cost
		),
		None => log::debug!("{}: no path {} -> {}", name, start, goal),
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	/// ```text
	/// 0 --1--> 1 --4--> 3
	/// |        ^        ^
	/// 2        1        2
	/// v        |        |
	/// 2 --1--> 4 ------'
	///          |
	///          7
	///          v
	///          5
	/// ```
	/// plus `2 -> 1` with weight 1.
	pub fn small_graph() -> Graph {
		let mut graph = Graph::new(6).unwrap();
		graph.add_edge(0, 1, 1, false);
		graph.add_edge(0, 2, 2, false);
		graph.add_edge(1, 3, 4, false);
		graph.add_edge(2, 4, 1, false);
		graph.add_edge(4, 3, 2, false);
		graph.add_edge(4, 5, 7, false);
		graph.add_edge(2, 1, 1, false);
		graph.set_name(0, Some("Start"));
		graph.set_name(3, Some("Goal"));
		graph.set_name(5, Some("End"));
		graph
	}

	/// an undirected Grid with unit weights where Vertex `i` is at `(i % width, i / width)`
	pub fn grid_graph(width: usize, height: usize) -> Graph {
		let mut graph = Graph::new(width * height).unwrap();
		for i in 0..width * height {
			if i % width < width - 1 {
				graph.add_unit_edge(i, i + 1, true);
			}
			if i + width < width * height {
				graph.add_unit_edge(i, i + width, true);
			}
		}
		graph
	}

	#[track_caller]
	pub fn assert_valid_path(graph: &Graph, path: &Path, start: VertexID, goal: VertexID) {
		assert_eq!(path.first(), Some(&start));
		assert_eq!(path.last(), Some(&goal));
		for step in path.windows(2) {
			assert!(
				graph.edges(step[0]).any(|e| e.to == step[1]),
				"no edge {} -> {}",
				step[0],
				step[1]
			);
		}
	}

	#[test]
	fn invalid_input() {
		let graph = Graph::new(3).unwrap();
		let config = SearchConfig::default();

		for algorithm in [
			Algorithm::Bfs,
			Algorithm::Dfs,
			Algorithm::Dijkstra,
			Algorithm::AStar(HeuristicKind::Manhattan(3)),
			Algorithm::BellmanFord,
		] {
			assert_eq!(find_path(&graph, algorithm, 0, 5, &config), None);
			assert_eq!(find_path(&graph, algorithm, 3, 0, &config), None);
			assert_eq!(
				find_path(&graph, algorithm, 0, 0, &SearchConfig::with_max_path_len(0)),
				None
			);
		}
		assert_eq!(a_star_search(&graph, 0, 9, &NoHeuristic), None);
		assert!(!negative_cycle_reaches(&graph, 0, 9));
	}

	#[test]
	fn start_is_goal() {
		let graph = small_graph();
		let config = SearchConfig::with_max_path_len(1);
		for algorithm in [
			Algorithm::Bfs,
			Algorithm::Dfs,
			Algorithm::Dijkstra,
			Algorithm::AStar(HeuristicKind::None),
			Algorithm::BellmanFord,
		] {
			let path = find_path(&graph, algorithm, 4, 4, &config).unwrap();
			assert_eq!(path.path, vec![4], "{}", algorithm);
			assert_eq!(path.cost, 0, "{}", algorithm);
		}
	}

	#[test]
	fn algorithm_names() {
		assert_eq!(Algorithm::BellmanFord.to_string(), "Bellman-Ford");
		assert!(Algorithm::Dfs.reports_hops());
		assert!(!Algorithm::AStar(HeuristicKind::Euclidean(5)).reports_hops());
	}
}
