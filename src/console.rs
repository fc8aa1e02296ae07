//! The interactive route planner console.

use crate::{
	graph::Graph,
	render::PathReport,
	search::{find_path, negative_cycle_reaches, Algorithm, HeuristicKind, SearchConfig},
	VertexID,
};
use std::io::{self, BufRead, Write};

/// The Grid width assumed by the bundled A* Heuristics unless configured otherwise
pub const DEFAULT_GRID_WIDTH: usize = 5;

/// An interactive prompt loop that lets a user pick an [`Algorithm`], a start and a goal, and
/// prints the resulting Path.
///
/// Reads commands line by line from `input` and writes everything to `output`. The loop ends
/// when the user chooses `0` or `input` runs out.
///
/// ## Examples
/// ```
/// # use route_planner::{console::Console, graph::Graph};
/// let mut graph = Graph::new(2).unwrap();
/// graph.set_name(0, Some("Berlin"));
/// graph.set_name(1, Some("Munich"));
/// graph.add_edge(0, 1, 585, true);
///
/// // Dijkstra, start by id 0, goal by name "Munich", then exit
/// let input = "3\n1\n0\n2\nMunich\n0\n";
/// let mut output = Vec::new();
/// Console::new(input.as_bytes(), &mut output).run(&graph).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("Berlin → Munich"));
/// assert!(output.contains("Travel time: 585 minutes"));
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
	input: R,
	output: W,
	grid_width: usize,
	config: SearchConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
	/// Creates a Console reading from `input` and writing to `output`
	pub fn new(input: R, output: W) -> Self {
		Console {
			input,
			output,
			grid_width: DEFAULT_GRID_WIDTH,
			config: SearchConfig::default(),
		}
	}

	/// Sets the Grid width passed to the Manhattan and Euclidean Heuristics
	pub fn with_grid_width(mut self, grid_width: usize) -> Self {
		self.grid_width = grid_width;
		self
	}

	/// Sets the options every search is run with
	pub fn with_config(mut self, config: SearchConfig) -> Self {
		self.config = config;
		self
	}

	/// Runs the prompt loop until the user exits or the input ends
	pub fn run(&mut self, graph: &Graph) -> io::Result<()> {
		loop {
			let algorithm = match self.select_algorithm()? {
				Some(algorithm) => algorithm,
				None => {
					writeln!(self.output, "Exiting route planner. Goodbye!")?;
					return Ok(());
				}
			};
			let start = match self.prompt_vertex(graph, "Start vertex")? {
				Some(start) => start,
				None => return Ok(()),
			};
			let goal = match self.prompt_vertex(graph, "Goal vertex")? {
				Some(goal) => goal,
				None => return Ok(()),
			};

			if start == goal {
				writeln!(self.output, "Start and goal are the same vertex.")?;
				writeln!(
					self.output,
					"Trivial path: {} (ID {})",
					graph.name(start).unwrap_or("(unnamed)"),
					start
				)?;
				continue;
			}

			let path = find_path(graph, algorithm, start, goal, &self.config);
			write!(
				self.output,
				"{}",
				PathReport::new(graph, path.as_ref(), algorithm)
			)?;
			if path.is_none()
				&& algorithm == Algorithm::BellmanFord
				&& negative_cycle_reaches(graph, start, goal)
			{
				writeln!(self.output, "Note: the goal is reachable from a negative cycle, so its cost is undefined.")?;
			}
		}
	}

	/// Reads one line without the line break. `None` at the end of the input.
	fn read_line(&mut self) -> io::Result<Option<String>> {
		self.output.flush()?;
		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		let trimmed = line.trim_end_matches(['\r', '\n']).len();
		line.truncate(trimmed);
		Ok(Some(line))
	}

	/// `None` means exit
	fn select_algorithm(&mut self) -> io::Result<Option<Algorithm>> {
		loop {
			writeln!(self.output, "\nSelect routing mode:")?;
			writeln!(self.output, "  1) Fewest hops (BFS)")?;
			writeln!(self.output, "  2) Any path (DFS)")?;
			writeln!(self.output, "  3) Shortest travel time (Dijkstra – non-negative weights)")?;
			writeln!(self.output, "  4) Shortest travel time with heuristic (A*)")?;
			writeln!(self.output, "     4.1) No heuristic (same as Dijkstra)")?;
			writeln!(self.output, "     4.2) Manhattan heuristic")?;
			writeln!(self.output, "     4.3) Euclidean heuristic")?;
			writeln!(self.output, "  5) Shortest time with negative weights (Bellman-Ford)")?;
			writeln!(self.output, "  0) Exit")?;
			write!(self.output, "Enter choice (0–5 or 4.1–4.3): ")?;

			let line = match self.read_line()? {
				Some(line) => line,
				None => return Ok(None),
			};
			let algorithm = match line.trim() {
				"0" => return Ok(None),
				"1" => Algorithm::Bfs,
				"2" => Algorithm::Dfs,
				"3" => Algorithm::Dijkstra,
				"4" | "4.1" => Algorithm::AStar(HeuristicKind::None),
				"4.2" => Algorithm::AStar(HeuristicKind::Manhattan(self.grid_width)),
				"4.3" => Algorithm::AStar(HeuristicKind::Euclidean(self.grid_width)),
				"5" => Algorithm::BellmanFord,
				other if other.parse::<i64>().is_ok() => {
					writeln!(self.output, "Please enter a valid choice.")?;
					continue;
				}
				_ => {
					writeln!(self.output, "Invalid input.")?;
					continue;
				}
			};
			return Ok(Some(algorithm));
		}
	}

	fn prompt_vertex(&mut self, graph: &Graph, prompt: &str) -> io::Result<Option<VertexID>> {
		loop {
			writeln!(self.output, "\nAvailable vertices:")?;
			for id in 0..graph.len() {
				writeln!(
					self.output,
					"  {:>3} : {}",
					id,
					graph.name(id).unwrap_or("(unnamed)")
				)?;
			}
			writeln!(self.output, "\nSelect {} by:", prompt)?;
			writeln!(self.output, "  1 = numeric ID")?;
			writeln!(self.output, "  2 = name (exact match)")?;
			write!(self.output, "Choice (1 or 2): ")?;

			let line = match self.read_line()? {
				Some(line) => line,
				None => return Ok(None),
			};
			match line.trim() {
				"1" => return self.prompt_vertex_id(graph, prompt),
				"2" => return self.prompt_vertex_name(graph, prompt),
				_ => writeln!(self.output, "Invalid input.")?,
			}
		}
	}

	fn prompt_vertex_id(&mut self, graph: &Graph, prompt: &str) -> io::Result<Option<VertexID>> {
		let last = graph.len() - 1;
		loop {
			write!(self.output, "{} (numeric ID 0–{}): ", prompt, last)?;
			let line = match self.read_line()? {
				Some(line) => line,
				None => return Ok(None),
			};
			match line.trim().parse::<VertexID>() {
				Ok(id) if graph.contains(id) => return Ok(Some(id)),
				Ok(_) => writeln!(self.output, "ID must be between 0 and {}. Try again.", last)?,
				Err(_) => writeln!(self.output, "Invalid number. Try again.")?,
			}
		}
	}

	fn prompt_vertex_name(
		&mut self,
		graph: &Graph,
		prompt: &str,
	) -> io::Result<Option<VertexID>> {
		loop {
			write!(self.output, "{} (exact name): ", prompt)?;
			let name = match self.read_line()? {
				Some(line) => line,
				None => return Ok(None),
			};
			if name.is_empty() {
				writeln!(self.output, "Name cannot be empty. Try again.")?;
				continue;
			}
			match graph.find_by_name(&name) {
				Some(id) => {
					writeln!(self.output, "Found: \"{}\" → ID {}", name, id)?;
					return Ok(Some(id));
				}
				None => writeln!(self.output, "No vertex named \"{}\". Try again.", name)?,
			}
		}
	}
}
