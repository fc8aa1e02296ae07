use super::{reconstruct_path, Parents, SearchConfig};
use crate::{graph::Graph, path::Path, Cost, VertexID};

/// Tentative distances and parent pointers after the relaxation rounds.
///
/// Distances are kept in `i64` so that sums below [`Cost::MIN`] still compare correctly.
struct Relaxed {
	distance: Vec<Option<i64>>,
	parents: Parents,
}

fn improves(candidate: i64, current: Option<i64>) -> bool {
	current.map_or(true, |current| candidate < current)
}

/// Clamps a distance into the range of [`Cost`]
fn clamp_cost(distance: i64) -> Cost {
	distance.clamp(i64::from(Cost::MIN), i64::from(Cost::MAX)) as Cost
}

/// Runs up to `|V| - 1` rounds of relaxation over all Edges, stopping early once a round
/// changes nothing.
fn relax(graph: &Graph, start: VertexID) -> Relaxed {
	let n = graph.len();
	let mut distance: Vec<Option<i64>> = vec![None; n];
	let mut parents: Parents = vec![None; n];
	distance[start] = Some(0);

	for round in 0..n.saturating_sub(1) {
		let mut changed = false;
		for current in 0..n {
			let current_cost = match distance[current] {
				Some(cost) => cost,
				None => continue,
			};
			for edge in graph.edges(current) {
				let candidate = current_cost.saturating_add(i64::from(edge.weight));
				if improves(candidate, distance[edge.to]) {
					distance[edge.to] = Some(candidate);
					parents[edge.to] = Some(current);
					changed = true;
				}
			}
		}
		if !changed {
			log::trace!("bellman-ford converged after {} rounds", round + 1);
			break;
		}
	}

	Relaxed { distance, parents }
}

/// Marks every Vertex whose cost is unbounded below because a negative cycle reaches it.
///
/// First, every Vertex that could still be relaxed is marked. Then the mark is spread along
/// all outgoing Edges until nothing changes.
fn cycle_affected(graph: &Graph, relaxed: &Relaxed) -> Vec<bool> {
	let n = graph.len();
	let mut affected = vec![false; n];

	for current in 0..n {
		let current_cost = match relaxed.distance[current] {
			Some(cost) => cost,
			None => continue,
		};
		for edge in graph.edges(current) {
			let candidate = current_cost.saturating_add(i64::from(edge.weight));
			if improves(candidate, relaxed.distance[edge.to]) {
				affected[edge.to] = true;
			}
		}
	}

	for _ in 0..n {
		let mut changed = false;
		for current in 0..n {
			if !affected[current] {
				continue;
			}
			for edge in graph.edges(current) {
				if !affected[edge.to] {
					affected[edge.to] = true;
					changed = true;
				}
			}
		}
		if !changed {
			break;
		}
	}

	affected
}

pub(crate) fn bellman_ford(
	graph: &Graph,
	start: VertexID,
	goal: VertexID,
	config: &SearchConfig,
) -> Option<Path> {
	if start == goal {
		return Some(Path::new(vec![start], 0));
	}

	let relaxed = relax(graph, start);
	if cycle_affected(graph, &relaxed)[goal] {
		log::debug!("cost of vertex {} is undefined: reachable from a negative cycle", goal);
		return None;
	}

	let cost = clamp_cost(relaxed.distance[goal]?);
	let steps = reconstruct_path(start, goal, &relaxed.parents, config.max_path_len)?;
	Some(Path::new(steps, cost))
}

/// Returns `true` if `goal` can be reached from a negative cycle that is itself reachable
/// from `start`.
pub(crate) fn negative_cycle_reaches(graph: &Graph, start: VertexID, goal: VertexID) -> bool {
	let relaxed = relax(graph, start);
	cycle_affected(graph, &relaxed)[goal]
}
