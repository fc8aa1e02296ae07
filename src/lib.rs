#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find Paths between two Vertices of a weighted, directed Graph.
//!
//! ## Introduction
//! Every Vertex of a [`Graph`](graph::Graph) is identified by its index and may carry a name.
//! Edges are directed and have an integer weight, which may be negative. An undirected
//! connection is simply stored as two Edges.
//!
//! Five searches are provided, all of which take the Graph, a start and a goal and return
//! `Option<Path>`:
//!
//! - [`bfs_search`](search::bfs_search): the Path with the fewest Edges
//! - [`dfs_search`](search::dfs_search): any Path
//! - [`dijkstra_search`](search::dijkstra_search): the cheapest Path, ignoring negative Edges
//! - [`a_star_search`](search::a_star_search): the cheapest Path, guided by a
//!   [`Heuristic`](heuristic::Heuristic)
//! - [`bellman_ford_search`](search::bellman_ford_search): the cheapest Path with negative
//!   weights, rejecting goals whose Cost is undefined because of a negative cycle
//!
//! The Heuristics in [`heuristic`] assume that the Vertices are laid out on a Grid of a given
//! width, where Vertex `i` is at `(i % width, i / width)`.
//!
//! ## Examples
//! ```
//! use route_planner::prelude::*;
//!
//! let mut graph = Graph::new(4).unwrap();
//! graph.set_name(0, Some("Berlin"));
//! graph.set_name(3, Some("Munich"));
//! graph.add_edge(0, 1, 180, true);
//! graph.add_edge(1, 3, 400, true);
//! graph.add_edge(0, 2, 300, true);
//! graph.add_edge(2, 3, 250, true);
//!
//! let start = graph.find_by_name("Berlin").unwrap();
//! let goal = graph.find_by_name("Munich").unwrap();
//!
//! let fewest_hops = bfs_search(&graph, start, goal).unwrap();
//! assert_eq!(fewest_hops.cost, 2);
//!
//! let fastest = dijkstra_search(&graph, start, goal).unwrap();
//! assert_eq!(fastest.path, vec![0, 2, 3]);
//! assert_eq!(fastest.cost, 550);
//!
//! let report = PathReport::new(&graph, Some(&fastest), Algorithm::Dijkstra);
//! assert_eq!(
//!     report.to_string(),
//!     "Path found (3 vertices): Berlin → (unnamed) → Munich\nTravel time: 550 minutes (optimal)\n"
//! );
//! ```
//!
//! Graphs can also be loaded from a simple text format, see [`loader`]:
//! ```
//! # use route_planner::prelude::*;
//! let graph = parse_graph("3 2 1\n0 a\n1 b\n2 c\n0 1 5\n1 2 -2\n").unwrap();
//!
//! assert_eq!(bellman_ford_search(&graph, 0, 2).unwrap().cost, 3);
//! assert_eq!(cost_or_sentinel(dijkstra_search(&graph, 0, 2).as_ref()), NO_PATH_COST);
//! ```
//!
//! ## Configuration
//! [`find_path`](search::find_path) runs any of the searches selected by an
//! [`Algorithm`](search::Algorithm) with a [`SearchConfig`](search::SearchConfig), which limits
//! the length of returned Paths and the depth of [`dfs_search`](search::dfs_search).
//!
//! ## Logging
//! The searches and the loader emit [`log`] records at `debug` and `trace` level. The
//! `route_planner` binary prints them through `env_logger`, filtered by the `ROUTE_PLANNER_LOG`
//! environment variable.

/// The Type used to reference a Vertex in a [`Graph`](graph::Graph)
pub type VertexID = usize;

/// The Type of Edge weights and Path costs
pub type Cost = i32;

pub mod graph;

pub mod path;

pub mod queue;

pub mod heuristic;

pub mod search;

pub mod loader;

pub mod render;

pub mod console;

/// The most commonly used items of this crate
pub mod prelude {
	pub use crate::{
		console::Console,
		graph::{Edge, Graph},
		heuristic::{EuclideanHeuristic, Heuristic, ManhattanHeuristic, NoHeuristic},
		loader::{load_graph, parse_graph, LoadError},
		path::{cost_or_sentinel, Path, NO_PATH_COST},
		queue::IndexedMinQueue,
		render::PathReport,
		search::{
			a_star_search, bellman_ford_search, bfs_search, dfs_search, dijkstra_search,
			find_path, negative_cycle_reaches, Algorithm, HeuristicKind, SearchConfig,
		},
		Cost, VertexID,
	};
}
