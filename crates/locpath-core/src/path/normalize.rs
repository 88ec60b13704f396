//! Canonical string form of a `/`-separated path.

use super::segment::reduce;

/// True when `path` starts at the root (`/`).
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
}

/// Normalizes `path`: collapses repeated slashes, resolves `.` and `..`, and
/// keeps the leading and trailing slash of the input.
///
/// A relative path that reduces to nothing becomes `.`. An absolute path can
/// never climb above `/`.
///
/// ```
/// use locpath_core::path::normalize;
///
/// assert_eq!(normalize("/foo/bar/../baz"), "/foo/baz");
/// assert_eq!(normalize("foo/../../bar"), "../bar");
/// assert_eq!(normalize(""), ".");
/// ```
pub fn normalize(path: &str) -> String {
    let absolute = is_absolute(path);
    let trailing_slash = path.ends_with('/');

    let mut out = reduce(path.split('/'), !absolute).join("/");

    if out.is_empty() && !absolute {
        out.push('.');
    }
    if !out.is_empty() && trailing_slash {
        out.push('/');
    }

    if absolute {
        format!("/{out}")
    } else {
        out
    }
}
