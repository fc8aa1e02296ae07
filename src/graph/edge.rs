use crate::{Cost, VertexID};

/// A directed, weighted Edge owned by its source Vertex.
///
/// The source is implicit: an Edge is only ever reachable through the edge list of the Vertex it
/// starts at. Two Edges with the same `to` and `weight` are indistinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// the Vertex this Edge leads to
	pub to: VertexID,
	/// the Cost of traversing this Edge. May be negative or zero.
	pub weight: Cost,
}

impl Edge {
	/// creates a new Edge leading to `to`
	pub fn new(to: VertexID, weight: Cost) -> Edge {
		Edge { to, weight }
	}
}
