//! CLI command handlers, one file per command family.

mod cwd;
mod join;
mod move_to;
mod normalize;
mod parse;
mod project;
mod split;

pub use cwd::run_cwd;
pub use join::run_join;
pub use move_to::run_move;
pub use normalize::run_normalize;
pub use parse::run_parse;
pub use project::{run_project, Projection};
pub use split::run_split;

use locpath_core::navigation::MemoryHistory;
use locpath_core::Locator;

/// Locator the CLI drives: in-memory history seeded from config or `--location`.
pub type CliLocator = Locator<MemoryHistory>;
