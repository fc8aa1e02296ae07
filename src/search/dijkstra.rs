use super::{reconstruct_path, Parents, SearchConfig};
use crate::{graph::Graph, path::Path, Cost, VertexID};

/// O(V²) Dijkstra: every round scans all Vertices for the closest unvisited one.
/// Ties go to the lowest index. Negative Edges are skipped.
pub(crate) fn dijkstra(
	graph: &Graph,
	start: VertexID,
	goal: VertexID,
	config: &SearchConfig,
) -> Option<Path> {
	let n = graph.len();
	let mut distance: Vec<Option<Cost>> = vec![None; n];
	let mut parents: Parents = vec![None; n];
	let mut visited = vec![false; n];

	distance[start] = Some(0);

	for _ in 0..n {
		let closest = (0..n)
			.filter(|&v| !visited[v])
			.filter_map(|v| distance[v].map(|d| (v, d)))
			.fold(None, |best: Option<(VertexID, Cost)>, (v, d)| match best {
				Some((_, best_d)) if best_d <= d => best,
				_ => Some((v, d)),
			});
		let (current, current_cost) = match closest {
			Some(c) => c,
			None => break,
		};
		visited[current] = true;
		if current == goal {
			break;
		}

		for edge in graph.edges(current) {
			if edge.weight < 0 || visited[edge.to] {
				continue;
			}
			let other_cost = current_cost.saturating_add(edge.weight);
			if distance[edge.to].map_or(true, |prev| other_cost < prev) {
				distance[edge.to] = Some(other_cost);
				parents[edge.to] = Some(current);
			}
		}
	}

	let cost = distance[goal]?;
	let steps = reconstruct_path(start, goal, &parents, config.max_path_len)?;
	Some(Path::new(steps, cost))
}
