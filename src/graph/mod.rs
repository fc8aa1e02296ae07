//! The Graph Store that all searches run on.

mod edge;
pub use self::edge::Edge;

use crate::{Cost, VertexID};
use std::fmt;

/// A directed Multigraph with a fixed number of Vertices and optional Vertex names.
///
/// Vertices are identified by their index in `0..len()`. Each Vertex owns a list of outgoing
/// [`Edge`]s. Parallel Edges between the same pair of Vertices are allowed and kept separately.
///
/// ## Edge order
/// [`edges`](Graph::edges) yields the Edges of a Vertex **most-recently-added first**.
/// This order decides which of several equally good Paths a search returns.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use route_planner::graph::{Edge, Graph};
/// let mut graph = Graph::new(3).unwrap();
/// graph.add_edge(0, 1, 5, false);
/// graph.add_edge(0, 2, 7, true);
/// graph.set_name(2, Some("Berlin"));
///
/// assert_eq!(graph.edges(0).collect::<Vec<_>>(), vec![&Edge::new(2, 7), &Edge::new(1, 5)]);
/// assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![&Edge::new(0, 7)]);
/// assert_eq!(graph.find_by_name("Berlin"), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
	edges: Vec<Vec<Edge>>,
	names: Vec<Option<String>>,
}

impl Graph {
	/// Creates a Graph with `vertices` Vertices and no Edges.
	///
	/// Returns `None` if `vertices == 0`, since empty Graphs are not supported.
	pub fn new(vertices: usize) -> Option<Graph> {
		if vertices == 0 {
			return None;
		}
		Some(Graph {
			edges: vec![Vec::new(); vertices],
			names: vec![None; vertices],
		})
	}

	/// The number of Vertices in the Graph
	pub fn len(&self) -> usize {
		self.edges.len()
	}

	/// Always `false`, since a Graph has at least one Vertex.
	pub fn is_empty(&self) -> bool {
		self.edges.is_empty()
	}

	/// Returns `true` if `id` refers to a Vertex of this Graph
	pub fn contains(&self, id: VertexID) -> bool {
		id < self.len()
	}

	/// The total number of stored Edges. An undirected Edge counts twice.
	pub fn edge_count(&self) -> usize {
		self.edges.iter().map(Vec::len).sum()
	}

	/// Adds an Edge from `source` to `destination`.
	///
	/// If `undirected` is set, a second, independent Edge from `destination` back to `source`
	/// with the same weight is added as well.
	///
	/// Out-of-range Vertices are silently ignored and nothing is added.
	pub fn add_edge(
		&mut self,
		source: VertexID,
		destination: VertexID,
		weight: Cost,
		undirected: bool,
	) {
		if !self.contains(source) || !self.contains(destination) {
			return;
		}
		self.edges[source].push(Edge::new(destination, weight));
		if undirected {
			self.edges[destination].push(Edge::new(source, weight));
		}
	}

	/// Adds an Edge with weight `1`. See [`add_edge`](Graph::add_edge).
	pub fn add_unit_edge(&mut self, source: VertexID, destination: VertexID, undirected: bool) {
		self.add_edge(source, destination, 1, undirected);
	}

	/// Iterates over the outgoing Edges of `id`, most-recently-added first.
	///
	/// Yields nothing for out-of-range Vertices.
	pub fn edges(&self, id: VertexID) -> impl DoubleEndedIterator<Item = &Edge> + '_ {
		self.edges
			.get(id)
			.map(|list| list.as_slice())
			.unwrap_or_default()
			.iter()
			.rev()
	}

	/// Returns the weight of the first Edge from `from` to `to` in [`edges`](Graph::edges) order
	pub fn edge_weight(&self, from: VertexID, to: VertexID) -> Option<Cost> {
		self.edges(from).find(|e| e.to == to).map(|e| e.weight)
	}

	/// Returns `true` if an Edge `from -> to` with exactly `weight` exists
	pub fn has_edge(&self, from: VertexID, to: VertexID, weight: Cost) -> bool {
		self.edges(from).any(|e| e.to == to && e.weight == weight)
	}

	/// Sets or removes the name of a Vertex.
	///
	/// `None` or an empty name removes the name. Out-of-range ids are ignored.
	pub fn set_name(&mut self, id: VertexID, name: Option<&str>) {
		if let Some(slot) = self.names.get_mut(id) {
			*slot = name.filter(|n| !n.is_empty()).map(str::to_owned);
		}
	}

	/// The name of a Vertex, if it has one
	pub fn name(&self, id: VertexID) -> Option<&str> {
		self.names.get(id).and_then(|n| n.as_deref())
	}

	/// Returns the first Vertex whose name is exactly `name` (case-sensitive)
	pub fn find_by_name(&self, name: &str) -> Option<VertexID> {
		self.names
			.iter()
			.position(|n| n.as_deref() == Some(name))
	}
}

impl fmt::Display for Graph {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for id in 0..self.len() {
			write!(fmt, "Vertex {}", id)?;
			if let Some(name) = self.name(id) {
				write!(fmt, " ({})", name)?;
			}
			write!(fmt, ":")?;
			for edge in self.edges(id) {
				write!(fmt, " -> {}(w={})", edge.to, edge.weight)?;
			}
			writeln!(fmt)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_graph_is_rejected() {
		assert_eq!(Graph::new(0), None);

		let graph = Graph::new(1).unwrap();
		assert_eq!(graph.len(), 1);
		assert_eq!(graph.edges(0).count(), 0);
		assert_eq!(graph.name(0), None);
	}

	#[test]
	fn directed_and_undirected() {
		let mut graph = Graph::new(4).unwrap();
		graph.add_edge(0, 1, 5, false);
		graph.add_edge(2, 3, 7, true);

		assert_eq!(graph.edges(0).collect::<Vec<_>>(), vec![&Edge::new(1, 5)]);
		assert_eq!(graph.edges(1).count(), 0);
		assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![&Edge::new(3, 7)]);
		assert_eq!(graph.edges(3).collect::<Vec<_>>(), vec![&Edge::new(2, 7)]);
		assert_eq!(graph.edge_count(), 3);
	}

	#[test]
	fn parallel_edges_most_recent_first() {
		let mut graph = Graph::new(2).unwrap();
		graph.add_edge(0, 1, 4, false);
		graph.add_edge(0, 1, 7, false);

		assert_eq!(
			graph.edges(0).collect::<Vec<_>>(),
			vec![&Edge::new(1, 7), &Edge::new(1, 4)],
		);
		assert_eq!(graph.edge_weight(0, 1), Some(7));
		assert!(graph.has_edge(0, 1, 4));
	}

	#[test]
	fn zero_and_negative_weights() {
		let mut graph = Graph::new(3).unwrap();
		graph.add_edge(0, 1, 0, true);
		graph.add_edge(1, 2, -5, true);

		assert_eq!(
			graph.edges(1).collect::<Vec<_>>(),
			vec![&Edge::new(2, -5), &Edge::new(0, 0)],
		);
		assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![&Edge::new(1, -5)]);
	}

	#[test]
	fn out_of_range_is_ignored() {
		let mut graph = Graph::new(2).unwrap();
		graph.add_edge(0, 2, 1, true);
		graph.add_edge(5, 0, 1, false);
		graph.set_name(9, Some("nowhere"));

		assert_eq!(graph.edge_count(), 0);
		assert_eq!(graph.edges(7).count(), 0);
		assert_eq!(graph.find_by_name("nowhere"), None);
	}

	#[test]
	fn names() {
		let mut graph = Graph::new(5).unwrap();
		graph.set_name(0, Some("Berlin"));
		graph.set_name(4, Some("Munich"));
		graph.set_name(2, Some("Munich"));

		assert_eq!(graph.name(0), Some("Berlin"));
		assert_eq!(graph.find_by_name("Berlin"), Some(0));
		assert_eq!(graph.find_by_name("Munich"), Some(2));
		assert_eq!(graph.find_by_name("berlin"), None);

		graph.set_name(0, Some("Hamburg"));
		assert_eq!(graph.name(0), Some("Hamburg"));
		assert_eq!(graph.find_by_name("Berlin"), None);

		graph.set_name(0, Some(""));
		assert_eq!(graph.name(0), None);
		graph.set_name(4, None);
		assert_eq!(graph.name(4), None);
		assert_eq!(graph.find_by_name("Munich"), Some(2));
	}

	#[test]
	fn display() {
		let mut graph = Graph::new(2).unwrap();
		graph.set_name(0, Some("A"));
		graph.add_edge(0, 1, 3, false);
		graph.add_edge(0, 1, -2, false);

		assert_eq!(
			&format!("{}", graph),
			"Vertex 0 (A): -> 1(w=-2) -> 1(w=3)\nVertex 1:\n"
		);
	}
}
