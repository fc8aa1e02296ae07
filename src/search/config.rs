/// Options for running a search through [`find_path`](crate::search::find_path)
///
/// Default options:
/// ```
/// # use route_planner::search::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		max_path_len: usize::MAX,
/// 		max_dfs_depth: usize::MAX,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The maximum number of Vertices (including start and goal) a returned Path may have
	/// (defaults to `usize::MAX`).
	///
	/// A search whose Path would be longer fails instead of returning a truncated Path.
	/// `0` is invalid and makes every search fail before doing any work.
	pub max_path_len: usize,
	/// The maximum depth of the explicit stack used by
	/// [`dfs_search`](crate::search::dfs_search) (defaults to `usize::MAX`).
	///
	/// The depth is always limited by the number of Vertices as well. Vertices that would have
	/// to be explored beyond this depth are skipped.
	pub max_dfs_depth: usize,
}

impl SearchConfig {
	/// a SearchConfig without any limits. Same as `Default::default()`.
	pub const UNBOUNDED: SearchConfig = SearchConfig {
		max_path_len: usize::MAX,
		max_dfs_depth: usize::MAX,
	};

	/// Creates a SearchConfig with the given `max_path_len` and defaults for everything else
	///
	/// ```
	/// # use route_planner::search::SearchConfig;
	/// assert_eq!(SearchConfig::with_max_path_len(5).max_path_len, 5);
	/// ```
	pub fn with_max_path_len(max_path_len: usize) -> SearchConfig {
		SearchConfig {
			max_path_len,
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::UNBOUNDED
	}
}
