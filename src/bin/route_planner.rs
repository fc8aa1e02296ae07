use env_logger::Env;
use route_planner::{console::Console, loader::load_graph};
use std::io;
use std::process::ExitCode;

const DEFAULT_GRAPH_FILE: &str = "data/sample_graph.txt";

fn print_usage(program: &str) {
	println!("Usage: {} [graph_file]\n", program);
	println!("Options:");
	println!("  graph_file     Path to graph file (default: {})", DEFAULT_GRAPH_FILE);
	println!("  --help, -h     Show this help message");
	println!();
	println!("Logging is controlled by ROUTE_PLANNER_LOG (e.g. ROUTE_PLANNER_LOG=debug).");
}

fn main() -> ExitCode {
	let env = Env::default()
		.filter_or("ROUTE_PLANNER_LOG", "warn")
		.write_style_or("ROUTE_PLANNER_LOG_STYLE", "auto");
	env_logger::init_from_env(env);

	let mut args = std::env::args();
	let program = args.next().unwrap_or_else(|| "route_planner".to_owned());
	let filename = match args.next() {
		Some(arg) if arg == "--help" || arg == "-h" => {
			print_usage(&program);
			return ExitCode::SUCCESS;
		}
		Some(arg) => arg,
		None => DEFAULT_GRAPH_FILE.to_owned(),
	};

	println!("Route Planner");
	println!("-------------");
	println!("Loading graph from: {}", filename);

	let graph = match load_graph(&filename) {
		Ok(graph) => graph,
		Err(err) => {
			eprintln!("Error: {}", err);
			eprintln!("  → Expected header: num_vertices num_edges directed");
			eprintln!("  → Then vertex lines: id name");
			eprintln!("  → Then edge lines: from to weight");
			return ExitCode::FAILURE;
		}
	};

	println!("Graph loaded successfully!");
	println!("  → {} vertices, {} edges\n", graph.len(), graph.edge_count());
	print!("{}", graph);

	let stdin = io::stdin();
	let stdout = io::stdout();
	if let Err(err) = Console::new(stdin.lock(), stdout.lock()).run(&graph) {
		eprintln!("Error: {}", err);
		return ExitCode::FAILURE;
	}
	ExitCode::SUCCESS
}
