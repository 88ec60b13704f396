//! POSIX-style path algebra over `/`-separated strings.
//!
//! Everything here is total: any input string produces a defined result.
//! Paths embedding a URL (`http://host/x`) keep their `://` separator.

mod join;
mod normalize;
mod segment;

pub use join::join_with;
pub use normalize::{is_absolute, normalize};
pub use segment::{is_protocol_segment, reduce};

/// Splits `path` into its reduced segments without rejoining them.
///
/// ```
/// use locpath_core::path::split;
///
/// assert_eq!(split("/a/b/../c"), vec!["a", "c"]);
/// assert_eq!(split("../a"), vec!["..", "a"]);
/// ```
pub fn split(path: &str) -> Vec<String> {
    reduce(path.split('/'), !is_absolute(path))
}
