//! Joining path fragments.

use super::normalize::normalize;

/// Joins `fragments` with `/` and normalizes the result.
///
/// With fewer than two fragments, `cwd` is used as the base, so
/// `join_with(cwd, ["x"])` means "`x` relative to `cwd`". Empty leading
/// fragments add no separator.
pub fn join_with<I, S>(cwd: &str, fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let fragments: Vec<S> = fragments.into_iter().collect();

    let mut joined = String::new();
    if fragments.len() < 2 {
        joined.push_str(cwd);
    }
    for fragment in &fragments {
        if !joined.is_empty() {
            joined.push('/');
        }
        joined.push_str(fragment.as_ref());
    }

    normalize(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_and_resolves_parent() {
        assert_eq!(join_with("/cwd", ["/root/foo", "../bar"]), "/root/bar");
    }

    #[test]
    fn single_fragment_is_relative_to_cwd() {
        assert_eq!(join_with("/root/foo", ["bar"]), "/root/foo/bar");
        assert_eq!(join_with("/root/foo", ["../x"]), "/root/x");
    }

    #[test]
    fn no_fragments_normalizes_cwd() {
        assert_eq!(join_with("/root//foo/", Vec::<&str>::new()), "/root/foo/");
        assert_eq!(join_with("", Vec::<&str>::new()), ".");
    }

    #[test]
    fn empty_cwd_keeps_fragment_relative() {
        assert_eq!(join_with("", ["a/b"]), "a/b");
    }

    #[test]
    fn leading_empty_fragments_vanish() {
        assert_eq!(join_with("/cwd", ["", "a", "b"]), "a/b");
    }

    #[test]
    fn joins_urls() {
        assert_eq!(
            join_with("/cwd", ["http://example.com/a", "../b"]),
            "http://example.com/b"
        );
    }

    #[test]
    fn nested_join_matches_flat_join_for_absolute_base() {
        let cases = [
            ("/a", "b", "c"),
            ("/a/", "../b/", "./c"),
            ("/", "..", "x"),
            ("/x/y", "", "z/"),
        ];
        for (a, b, c) in cases {
            let flat = join_with("/cwd", [a, b, c]);
            let nested = join_with("/cwd", [join_with("/cwd", [a, b]).as_str(), c]);
            assert_eq!(flat, nested, "{a:?} {b:?} {c:?}");
        }
    }
}
