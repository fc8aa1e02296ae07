use super::{hop_cost, reconstruct_path, Parents, SearchConfig};
use crate::{graph::Graph, path::Path, VertexID};

/// Depth-first search with an explicit stack.
///
/// Each stack frame holds a Vertex and the iterator over its remaining Edges, so Vertices are
/// explored in the same order a recursive search would explore them. The stack never holds more
/// than `min(graph.len(), config.max_dfs_depth)` frames.
pub(crate) fn dfs(
	graph: &Graph,
	start: VertexID,
	goal: VertexID,
	config: &SearchConfig,
) -> Option<Path> {
	let n = graph.len();
	let max_depth = config.max_dfs_depth.min(n);
	let mut visited = vec![false; n];
	let mut parents: Parents = vec![None; n];

	visited[start] = true;
	let mut found = start == goal;
	let mut stack = Vec::with_capacity(max_depth.min(64));
	if !found && max_depth > 0 {
		stack.push((start, graph.edges(start)));
	}

	while !found {
		let step = match stack.last_mut() {
			Some((current, edges)) => edges.next().map(|edge| (*current, edge.to)),
			None => break,
		};
		match step {
			Some((current, other)) => {
				if visited[other] {
					continue;
				}
				if other == goal {
					parents[other] = Some(current);
					found = true;
				} else if stack.len() < max_depth {
					visited[other] = true;
					parents[other] = Some(current);
					stack.push((other, graph.edges(other)));
				}
			}
			None => {
				stack.pop();
			}
		}
	}

	if !found {
		return None;
	}
	let steps = reconstruct_path(start, goal, &parents, config.max_path_len)?;
	let cost = hop_cost(&steps);
	Some(Path::new(steps, cost))
}
