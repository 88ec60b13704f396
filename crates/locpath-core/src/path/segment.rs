//! Segment reduction: the stack walk behind normalize, split and join.

/// Prefixes that mark a segment as the scheme of an embedded URL.
const PROTOCOL_PREFIXES: [&str; 2] = ["http:", "https:"];

/// Returns true when `segment` is the scheme part of a URL that was split on `/`
/// (e.g. `http:` out of `http://host/x`).
pub fn is_protocol_segment(segment: &str) -> bool {
    PROTOCOL_PREFIXES.iter().any(|p| segment.starts_with(p))
}

/// Reduces `/`-split segments, resolving `.` and `..` left to right.
///
/// - Empty segments and `.` are dropped.
/// - `..` cancels the previous real segment. With nothing to cancel it is kept
///   when `allow_above_root` is true (relative paths) and dropped otherwise.
/// - Protocol segments get a trailing `/` so that rejoining with `/` restores
///   the `://` separator.
pub fn reduce<I, S>(segments: I, allow_above_root: bool) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();

    for segment in segments {
        let segment = segment.as_ref();
        match segment {
            "" | "." => continue,
            ".." => {
                if out.last().is_some_and(|top| top != "..") {
                    out.pop();
                } else if allow_above_root {
                    out.push("..".to_string());
                }
            }
            s if is_protocol_segment(s) => out.push(format!("{s}/")),
            s => out.push(s.to_string()),
        }
    }

    out
}
