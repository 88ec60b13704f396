//! [`Query`] -> query string.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{Query, QueryValue};

/// Everything except the RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes `query` as `key=value` pairs joined by `&`, without a leading `?`.
///
/// ```
/// use locpath_core::query::{encode, Query, QueryValue};
///
/// let mut q = Query::new();
/// q.insert("page".to_string(), QueryValue::from("2"));
/// q.insert("tag".to_string(), QueryValue::from(vec!["a b", "c"]));
/// assert_eq!(encode(&q), "page=2&tag%5B0%5D=a%20b&tag%5B1%5D=c");
/// ```
pub fn encode(query: &Query) -> String {
    let mut pairs = Vec::new();
    for (key, value) in query {
        push_pairs(key, value, &mut pairs);
    }
    pairs.join("&")
}

fn push_pairs(key: &str, value: &QueryValue, pairs: &mut Vec<String>) {
    match value {
        QueryValue::String(s) => pairs.push(format!(
            "{}={}",
            utf8_percent_encode(key, COMPONENT),
            utf8_percent_encode(s, COMPONENT)
        )),
        QueryValue::List(items) => {
            for (i, item) in items.iter().enumerate() {
                push_pairs(&format!("{key}[{i}]"), item, pairs);
            }
        }
        QueryValue::Map(entries) => {
            for (sub, item) in entries {
                push_pairs(&format!("{key}[{sub}]"), item, pairs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{decode, QueryOptions};
    use std::collections::BTreeMap;

    #[test]
    fn empty_query_encodes_to_empty_string() {
        assert_eq!(encode(&Query::new()), "");
    }

    #[test]
    fn keeps_unreserved_characters() {
        let q = Query::from([("k-._~".to_string(), QueryValue::from("v-._~"))]);
        assert_eq!(encode(&q), "k-._~=v-._~");
    }

    #[test]
    fn escapes_reserved_characters() {
        let q = Query::from([("q".to_string(), QueryValue::from("a&b=c/d?"))]);
        assert_eq!(encode(&q), "q=a%26b%3Dc%2Fd%3F");
    }

    #[test]
    fn nested_map_uses_brackets() {
        let inner = BTreeMap::from([("id".to_string(), QueryValue::from("7"))]);
        let q = Query::from([("user".to_string(), QueryValue::Map(inner))]);
        assert_eq!(encode(&q), "user%5Bid%5D=7");
    }

    #[test]
    fn empty_collections_emit_nothing() {
        let q = Query::from([
            ("a".to_string(), QueryValue::List(Vec::new())),
            ("b".to_string(), QueryValue::Map(BTreeMap::new())),
            ("c".to_string(), QueryValue::from("1")),
        ]);
        assert_eq!(encode(&q), "c=1");
    }

    #[test]
    fn decode_reads_back_nested_structures() {
        let inner = BTreeMap::from([
            ("name".to_string(), QueryValue::from("Ann Lee")),
            ("tags".to_string(), QueryValue::from(vec!["x", "y"])),
        ]);
        let q = Query::from([
            ("user".to_string(), QueryValue::Map(inner)),
            ("page".to_string(), QueryValue::from("3")),
        ]);
        assert_eq!(decode(&encode(&q), &QueryOptions::default()), q);
    }
}
