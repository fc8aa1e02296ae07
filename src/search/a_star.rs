use super::{reconstruct_path, Parents, SearchConfig};
use crate::{graph::Graph, heuristic::Heuristic, path::Path, queue::IndexedMinQueue, Cost, VertexID};

pub(crate) fn a_star<H: Heuristic + ?Sized>(
	graph: &Graph,
	start: VertexID,
	goal: VertexID,
	heuristic: &H,
	config: &SearchConfig,
) -> Option<Path> {
	let n = graph.len();
	let mut distance: Vec<Option<Cost>> = vec![None; n];
	let mut parents: Parents = vec![None; n];
	let mut next = IndexedMinQueue::new(n);

	let estimate = |vertex: VertexID| heuristic.estimate(vertex, goal).max(0);

	distance[start] = Some(0);
	next.insert(start, estimate(start));

	while let Some((current, _)) = next.pop_min() {
		let current_cost = distance[current]?;
		if current == goal {
			let steps = reconstruct_path(start, goal, &parents, config.max_path_len)?;
			return Some(Path::new(steps, current_cost));
		}

		for edge in graph.edges(current) {
			if edge.weight < 0 {
				continue;
			}
			let other_cost = current_cost.saturating_add(edge.weight);
			if distance[edge.to].map_or(false, |prev| prev <= other_cost) {
				continue;
			}
			distance[edge.to] = Some(other_cost);
			parents[edge.to] = Some(current);

			let priority = other_cost.saturating_add(estimate(edge.to));
			if next.contains(edge.to) {
				next.decrease_key(edge.to, priority);
			} else {
				next.insert(edge.to, priority);
			}
		}
	}

	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::heuristic::{EuclideanHeuristic, ManhattanHeuristic, NoHeuristic};
	use crate::search::tests::{assert_valid_path, grid_graph, small_graph};

	#[test]
	fn manhattan_on_grid() {
		let graph = grid_graph(5, 5);
		let path = a_star(&graph, 0, 24, &ManhattanHeuristic::new(5), &SearchConfig::default())
			.unwrap();

		assert_eq!(path.cost, 8);
		assert!(path.len() <= 9);
		assert_valid_path(&graph, &path, 0, 24);
	}

	#[test]
	fn euclidean_on_grid() {
		let graph = grid_graph(5, 5);
		let config = SearchConfig::default();
		let euclidean = a_star(&graph, 0, 24, &EuclideanHeuristic::new(5), &config).unwrap();
		let manhattan = a_star(&graph, 0, 24, &ManhattanHeuristic::new(5), &config).unwrap();

		assert_eq!(euclidean.cost, 8);
		assert_eq!(euclidean.len(), manhattan.len());
	}

	#[test]
	fn no_heuristic() {
		let graph = small_graph();
		let path = a_star(&graph, 0, 5, &NoHeuristic, &SearchConfig::default()).unwrap();

		assert_eq!(path.path, vec![0, 2, 4, 5]);
		assert_eq!(path.cost, 10);
	}

	#[test]
	fn decrease_key_finds_cheaper_route() {
		// 0 -> 2 is queued with cost 10 first, then improved to 2 via 1
		let mut graph = Graph::new(4).unwrap();
		graph.add_edge(0, 1, 1, false);
		graph.add_edge(0, 2, 10, false);
		graph.add_edge(1, 2, 1, false);
		graph.add_edge(2, 3, 1, false);

		let path = a_star(&graph, 0, 3, &NoHeuristic, &SearchConfig::default()).unwrap();
		assert_eq!(path.path, vec![0, 1, 2, 3]);
		assert_eq!(path.cost, 3);
	}

	#[test]
	fn closure_heuristic() {
		let graph = grid_graph(4, 3);
		let heuristic = |vertex: VertexID, goal: VertexID| {
			let (x, y) = ((vertex % 4) as Cost, (vertex / 4) as Cost);
			let (gx, gy) = ((goal % 4) as Cost, (goal / 4) as Cost);
			(x - gx).abs().max((y - gy).abs())
		};
		let path = a_star(&graph, 11, 0, &heuristic, &SearchConfig::default()).unwrap();
		assert_eq!(path.cost, 5);
	}

	#[test]
	fn unreachable() {
		let graph = small_graph();
		assert_eq!(a_star(&graph, 5, 0, &NoHeuristic, &SearchConfig::default()), None);
	}
}
