use super::{hop_cost, reconstruct_path, Parents, SearchConfig};
use crate::{graph::Graph, path::Path, VertexID};

use std::collections::VecDeque;

pub(crate) fn bfs(
	graph: &Graph,
	start: VertexID,
	goal: VertexID,
	config: &SearchConfig,
) -> Option<Path> {
	let n = graph.len();
	let mut visited = vec![false; n];
	let mut parents: Parents = vec![None; n];
	let mut next = VecDeque::with_capacity(n);

	visited[start] = true;
	next.push_back(start);

	while let Some(current) = next.pop_front() {
		if current == goal {
			break;
		}
		for edge in graph.edges(current) {
			if !visited[edge.to] {
				visited[edge.to] = true;
				parents[edge.to] = Some(current);
				next.push_back(edge.to);
			}
		}
	}

	let steps = reconstruct_path(start, goal, &parents, config.max_path_len)?;
	let cost = hop_cost(&steps);
	Some(Path::new(steps, cost))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::tests::small_graph;

	#[test]
	fn fewest_hops() {
		let graph = small_graph();
		let path = bfs(&graph, 0, 3, &SearchConfig::default()).unwrap();

		assert_eq!(path.path, vec![0, 1, 3]);
		assert_eq!(path.cost, 2);
	}

	#[test]
	fn ignores_weights() {
		let mut graph = Graph::new(3).unwrap();
		graph.add_edge(0, 1, 1, false);
		graph.add_edge(1, 2, 1, false);
		graph.add_edge(0, 2, 1000, false);

		let path = bfs(&graph, 0, 2, &SearchConfig::default()).unwrap();
		assert_eq!(path.path, vec![0, 2]);
		assert_eq!(path.cost, 1);
	}

	#[test]
	fn disconnected() {
		let mut graph = Graph::new(5).unwrap();
		graph.add_unit_edge(0, 1, true);
		graph.add_unit_edge(1, 2, true);

		assert_eq!(bfs(&graph, 0, 4, &SearchConfig::default()), None);
	}

	#[test]
	fn start_is_goal() {
		let graph = small_graph();
		let path = bfs(&graph, 2, 2, &SearchConfig::default()).unwrap();
		assert_eq!(path.path, vec![2]);
		assert_eq!(path.cost, 0);
	}
}
