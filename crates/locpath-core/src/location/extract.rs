//! Directory, basename and extension extraction from a decoded path.
//!
//! These work on raw substrings; the caller decodes each result once more.

/// Everything before the last `/` that precedes any `?` or `#`.
///
/// `"/foo/bar/index.html"` gives `"/foo/bar"`, `"/index.html"` gives `""`.
pub fn dir_part(path: &str) -> &str {
    let limit = path
        .find(|c: char| matches!(c, '?' | '#'))
        .unwrap_or(path.len());
    match path[..limit].rfind('/') {
        Some(slash) => &path[..slash],
        None => "",
    }
}

/// Everything after the last `/`, `?` or `#`.
pub fn base_part(path: &str) -> &str {
    match path.rfind(|c: char| matches!(c, '/' | '?' | '#')) {
        Some(sep) => &path[sep + 1..],
        None => path,
    }
}

/// The final `.xxx` suffix of `base`, dot included.
///
/// The dot must be directly preceded by a character other than `.`, so
/// `".gitignore"` and `"a..txt"` have no extension while `"a.b.c"` has `".c"`.
pub fn ext_part(base: &str) -> &str {
    let Some(dot) = base.rfind('.') else {
        return "";
    };
    let ext = &base[dot..];
    let stem_ends_cleanly = base[..dot]
        .chars()
        .next_back()
        .is_some_and(|c: char| c != '.' && c != '/');

    if ext.len() > 1 && stem_ends_cleanly {
        ext
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_of_nested_file() {
        assert_eq!(dir_part("/foo/bar/index.html"), "/foo/bar");
        assert_eq!(dir_part("/foo/bar/"), "/foo/bar");
        assert_eq!(dir_part("/index.html"), "");
        assert_eq!(dir_part("/"), "");
        assert_eq!(dir_part("no-slash"), "");
    }

    #[test]
    fn dir_keeps_doubled_slash_prefix() {
        assert_eq!(dir_part("/a/b//c"), "/a/b/");
    }

    #[test]
    fn dir_stops_at_query_or_hash_characters() {
        assert_eq!(dir_part("/a/b?c/d"), "/a");
        assert_eq!(dir_part("/x#y/z"), "");
    }

    #[test]
    fn base_is_last_segment() {
        assert_eq!(base_part("/foo/bar/index.html"), "index.html");
        assert_eq!(base_part("/foo/bar/"), "");
        assert_eq!(base_part("file"), "file");
        assert_eq!(base_part("/a/b?c/d"), "d");
        assert_eq!(base_part("/a/b?c"), "c");
    }

    #[test]
    fn ext_of_base() {
        assert_eq!(ext_part("index.html"), ".html");
        assert_eq!(ext_part("archive.tar.gz"), ".gz");
        assert_eq!(ext_part("README"), "");
        assert_eq!(ext_part(""), "");
    }

    #[test]
    fn ext_requires_a_clean_stem() {
        assert_eq!(ext_part(".gitignore"), "");
        assert_eq!(ext_part("a..txt"), "");
        assert_eq!(ext_part("x.y.z"), ".z");
    }

    #[test]
    fn ext_requires_a_suffix() {
        assert_eq!(ext_part("trailing."), "");
        assert_eq!(ext_part("."), "");
        assert_eq!(ext_part(".."), "");
    }
}
