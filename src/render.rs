//! Human-readable output of search results.

use crate::{graph::Graph, path::Path, search::Algorithm, Cost};
use std::fmt;

/// The separator between Vertex names of a rendered Path
pub const ARROW: &str = " → ";

/// Renders the result of a search, using the Vertex names of `graph`.
///
/// ## Examples
/// ```
/// # use route_planner::{graph::Graph, render::PathReport, search::{dijkstra_search, Algorithm}};
/// let mut graph = Graph::new(3).unwrap();
/// graph.set_name(0, Some("Berlin"));
/// graph.set_name(2, Some("Munich"));
/// graph.add_edge(0, 1, 200, false);
/// graph.add_edge(1, 2, 300, false);
///
/// let path = dijkstra_search(&graph, 0, 2);
/// let report = PathReport::new(&graph, path.as_ref(), Algorithm::Dijkstra);
/// assert_eq!(
///     report.to_string(),
///     "Path found (3 vertices): Berlin → (unnamed) → Munich\nTravel time: 500 minutes (optimal)\n"
/// );
///
/// let report = PathReport::new(&graph, None, Algorithm::Dijkstra);
/// assert_eq!(report.to_string(), "No path found from start to goal.\n");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PathReport<'a> {
	graph: &'a Graph,
	path: Option<&'a Path>,
	algorithm: Algorithm,
}

impl<'a> PathReport<'a> {
	/// Creates a report for the result of running `algorithm` on `graph`
	pub fn new(graph: &'a Graph, path: Option<&'a Path>, algorithm: Algorithm) -> Self {
		PathReport {
			graph,
			path,
			algorithm,
		}
	}

	fn write_names(&self, fmt: &mut fmt::Formatter, path: &Path) -> fmt::Result {
		for (i, &vertex) in path.iter().enumerate() {
			if i > 0 {
				write!(fmt, "{}", ARROW)?;
			}
			write!(fmt, "{}", self.graph.name(vertex).unwrap_or("(unnamed)"))?;
		}
		writeln!(fmt)
	}

	/// Sums up the actual weights along a hop-count Path, warning about missing Edges
	fn write_hops(&self, fmt: &mut fmt::Formatter, path: &Path) -> fmt::Result {
		let mut travel_time: Cost = 0;
		let mut all_edges_found = true;

		for step in path.windows(2) {
			let (from, to) = (step[0], step[1]);
			match self.graph.edge_weight(from, to) {
				Some(weight) => travel_time = travel_time.saturating_add(weight),
				None => {
					all_edges_found = false;
					writeln!(
						fmt,
						"Warning: no direct edge found between {} ({}) and {} ({})",
						from,
						self.graph.name(from).unwrap_or("?"),
						to,
						self.graph.name(to).unwrap_or("?"),
					)?;
				}
			}
		}

		write!(fmt, "Hops: {}{}", path.cost, ARROW)?;
		if all_edges_found {
			writeln!(fmt, "actual travel time along this path: {} minutes", travel_time)?;
		} else {
			writeln!(fmt, "could not calculate exact time (missing some edges)")?;
		}
		writeln!(fmt, "Tip: For shortest travel time use Dijkstra or A* (option 3 or 4)")
	}
}

impl fmt::Display for PathReport<'_> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		let path = match self.path {
			Some(path) if !path.is_empty() => path,
			_ => return writeln!(fmt, "No path found from start to goal."),
		};

		write!(fmt, "Path found ({} vertices): ", path.len())?;
		self.write_names(fmt, path)?;

		if self.algorithm.reports_hops() {
			self.write_hops(fmt, path)
		} else {
			writeln!(fmt, "Travel time: {} minutes (optimal)", path.cost)
		}
	}
}
