//! Loading a [`Graph`] from its text format.
//!
//! ```text
//! # comment lines and blank lines are skipped
//! <vertices> <edges> [directed]   header. `directed` defaults to 0 (undirected)
//! <id> <name>                      exactly `vertices` lines
//! <from> <to> <weight>             exactly `edges` lines
//! ```
//!
//! Anything after the last declared Edge is ignored. Any error rejects the whole file.

use crate::{graph::Graph, Cost, VertexID};
use std::str::FromStr;

/// Reasons why a Graph could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// the file could not be read
	#[error("failed to read graph file: {0}")]
	Io(#[from] std::io::Error),
	/// the input contains no header line
	#[error("missing graph header (line {line})")]
	MissingHeader {
		/// the last line that was read
		line: usize,
	},
	/// the header is malformed or declares no Vertices
	#[error("invalid graph header (line {line})")]
	InvalidHeader {
		/// the line of the header
		line: usize,
	},
	/// the input ended before all Vertices were declared
	#[error("unexpected end of input while reading vertices (line {line})")]
	MissingVertices {
		/// the last line that was read
		line: usize,
	},
	/// a Vertex line is malformed or its id is out of range
	#[error("invalid vertex definition (line {line})")]
	InvalidVertex {
		/// the offending line
		line: usize,
	},
	/// an Edge line is malformed or refers to an unknown Vertex
	#[error("invalid edge definition (line {line})")]
	InvalidEdge {
		/// the offending line
		line: usize,
	},
	/// the input ended before all declared Edges were read
	#[error("edge count mismatch: expected {expected}, found {found} (line {line})")]
	EdgeCountMismatch {
		/// the number of Edges declared in the header
		expected: usize,
		/// the number of Edges actually read
		found: usize,
		/// the last line that was read
		line: usize,
	},
}

/// Iterates over the non-blank, non-comment lines together with their 1-based line number
struct DataLines<'a> {
	lines: std::iter::Enumerate<std::str::Lines<'a>>,
	last: usize,
}

impl<'a> DataLines<'a> {
	fn new(text: &'a str) -> Self {
		DataLines {
			lines: text.lines().enumerate(),
			last: 0,
		}
	}
}

impl<'a> Iterator for DataLines<'a> {
	type Item = (usize, Vec<&'a str>);
	fn next(&mut self) -> Option<Self::Item> {
		for (index, line) in self.lines.by_ref() {
			self.last = index + 1;
			if line.trim().is_empty() || line.starts_with('#') {
				continue;
			}
			return Some((self.last, line.split_whitespace().collect()));
		}
		None
	}
}

fn field<T: FromStr>(fields: &[&str], index: usize) -> Option<T> {
	fields.get(index)?.parse().ok()
}

/// Parses a Graph from its text format. See the [module documentation](self).
///
/// ## Examples
/// ```
/// # use route_planner::loader::parse_graph;
/// let graph = parse_graph(
///     "3 2 1
///      0 Berlin
///      1 Hamburg
///      2 Munich
///      0 1 289
///      0 2 585",
/// ).unwrap();
///
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.find_by_name("Munich"), Some(2));
/// assert_eq!(graph.edge_weight(0, 2), Some(585));
/// assert_eq!(graph.edge_weight(2, 0), None);
/// ```
pub fn parse_graph(text: &str) -> Result<Graph, LoadError> {
	let result = parse(text);
	match &result {
		Ok(graph) => log::debug!(
			"loaded graph with {} vertices and {} edges",
			graph.len(),
			graph.edge_count()
		),
		Err(err) => log::warn!("parse error: {}", err),
	}
	result
}

fn parse(text: &str) -> Result<Graph, LoadError> {
	let mut lines = DataLines::new(text);

	let (line, header) = lines
		.next()
		.ok_or(LoadError::MissingHeader { line: lines.last })?;
	let vertices: usize = field(&header, 0).ok_or(LoadError::InvalidHeader { line })?;
	let edges: usize = field(&header, 1).ok_or(LoadError::InvalidHeader { line })?;
	let directed = match header.get(2) {
		Some(value) => value.parse::<i64>().map_err(|_| LoadError::InvalidHeader { line })? != 0,
		None => false,
	};
	let mut graph = Graph::new(vertices).ok_or(LoadError::InvalidHeader { line })?;

	for _ in 0..vertices {
		let (line, fields) = lines
			.next()
			.ok_or(LoadError::MissingVertices { line: lines.last })?;
		let id: VertexID = field(&fields, 0)
			.filter(|&id| graph.contains(id))
			.ok_or(LoadError::InvalidVertex { line })?;
		let name = fields.get(1).ok_or(LoadError::InvalidVertex { line })?;
		graph.set_name(id, Some(*name));
	}

	let mut found = 0;
	while found < edges {
		let (line, fields) = match lines.next() {
			Some(next) => next,
			None => break,
		};
		let from: VertexID = field(&fields, 0)
			.filter(|&id| graph.contains(id))
			.ok_or(LoadError::InvalidEdge { line })?;
		let to: VertexID = field(&fields, 1)
			.filter(|&id| graph.contains(id))
			.ok_or(LoadError::InvalidEdge { line })?;
		let weight: Cost = field(&fields, 2).ok_or(LoadError::InvalidEdge { line })?;
		graph.add_edge(from, to, weight, !directed);
		found += 1;
	}

	if found != edges {
		return Err(LoadError::EdgeCountMismatch {
			expected: edges,
			found,
			line: lines.last,
		});
	}
	Ok(graph)
}

/// Reads and parses a Graph file. See [`parse_graph`].
pub fn load_graph(path: impl AsRef<std::path::Path>) -> Result<Graph, LoadError> {
	let text = std::fs::read_to_string(path.as_ref())?;
	parse_graph(&text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::Edge;

	const SAMPLE: &str = "\
# cities
4 3 0

0 Berlin
1 Hamburg
2 Munich
3 Cologne
# highways
0 1 289
0 2 585
1 3 -4
";

	#[test]
	fn undirected_sample() {
		let graph = parse_graph(SAMPLE).unwrap();

		assert_eq!(graph.len(), 4);
		assert_eq!(graph.name(3), Some("Cologne"));
		assert_eq!(graph.edge_count(), 6);
		assert_eq!(
			graph.edges(0).collect::<Vec<_>>(),
			vec![&Edge::new(2, 585), &Edge::new(1, 289)]
		);
		assert_eq!(graph.edge_weight(3, 1), Some(-4));
	}

	#[test]
	fn directed_flag() {
		let graph = parse_graph("2 1 1\n0 a\n1 b\n0 1 7\n").unwrap();
		assert_eq!(graph.edge_weight(0, 1), Some(7));
		assert_eq!(graph.edge_weight(1, 0), None);
	}

	#[test]
	fn missing_directed_flag_means_undirected() {
		let graph = parse_graph("2 1\n0 a\n1 b\n0 1 7\n").unwrap();
		assert_eq!(graph.edge_weight(1, 0), Some(7));
	}

	#[test]
	fn trailing_lines_are_ignored() {
		let graph = parse_graph("2 1 1\n0 a\n1 b\n0 1 7\n1 0 3\ngarbage\n").unwrap();
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn errors() {
		assert!(matches!(parse_graph(""), Err(LoadError::MissingHeader { line: 0 })));
		assert!(matches!(
			parse_graph("# only a comment\n"),
			Err(LoadError::MissingHeader { line: 1 })
		));
		assert!(matches!(parse_graph("x 1"), Err(LoadError::InvalidHeader { line: 1 })));
		assert!(matches!(parse_graph("0 0"), Err(LoadError::InvalidHeader { line: 1 })));
		assert!(matches!(parse_graph("3 -1"), Err(LoadError::InvalidHeader { line: 1 })));
		assert!(matches!(
			parse_graph("2 0\n0 a\n"),
			Err(LoadError::MissingVertices { line: 2 })
		));
		assert!(matches!(
			parse_graph("2 0\n0 a\n2 b\n"),
			Err(LoadError::InvalidVertex { line: 3 })
		));
		assert!(matches!(
			parse_graph("2 0\n0 a\n1\n"),
			Err(LoadError::InvalidVertex { line: 3 })
		));
		assert!(matches!(
			parse_graph("2 1\n0 a\n1 b\n0 5 1\n"),
			Err(LoadError::InvalidEdge { line: 4 })
		));
		assert!(matches!(
			parse_graph("2 1\n0 a\n1 b\n0 1 heavy\n"),
			Err(LoadError::InvalidEdge { line: 4 })
		));
		assert!(matches!(
			parse_graph("2 2\n0 a\n1 b\n0 1 1\n"),
			Err(LoadError::EdgeCountMismatch {
				expected: 2,
				found: 1,
				..
			})
		));
	}

	#[test]
	fn missing_file() {
		let result = load_graph("this/file/does/not/exist.txt");
		assert!(matches!(result, Err(LoadError::Io(_))));
	}

	#[test]
	fn error_messages() {
		let err = parse_graph("2 1\n0 a\n1 b\n0 5 1\n").unwrap_err();
		assert_eq!(err.to_string(), "invalid edge definition (line 4)");
	}
}
