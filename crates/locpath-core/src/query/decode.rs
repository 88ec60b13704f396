//! `search` string -> [`Query`].

use std::collections::BTreeMap;

use url::form_urlencoded;

use super::{Query, QueryOptions, QueryValue};

/// One step below the top-level key.
#[derive(Debug, PartialEq, Eq)]
enum KeySegment {
    Key(String),
    Push,
    Index(usize),
}

/// Decoding tree; `Indexed` collapses into a list once decoding is done.
#[derive(Debug)]
enum Node {
    Leaf(String),
    List(Vec<Node>),
    Map(BTreeMap<String, Node>),
    Indexed(BTreeMap<usize, Node>),
}

/// Decodes a query string (without the leading `?`).
///
/// ```
/// use locpath_core::query::{decode, QueryOptions, QueryValue};
///
/// let q = decode("x=1&tag=a&tag=b", &QueryOptions::default());
/// assert_eq!(q["x"], QueryValue::from("1"));
/// assert_eq!(q["tag"], QueryValue::from(vec!["a", "b"]));
/// ```
pub fn decode(search: &str, options: &QueryOptions) -> Query {
    let mut root: BTreeMap<String, Node> = BTreeMap::new();

    for (key, value) in form_urlencoded::parse(search.as_bytes()) {
        let Some((head, rest)) = split_key(&key, options) else {
            continue;
        };
        let node = rest
            .into_iter()
            .rev()
            .fold(Node::Leaf(value.into_owned()), wrap);
        insert(&mut root, head, node);
    }

    root.into_iter().map(|(k, v)| (k, finish(v))).collect()
}

/// Splits `a[b][]` into the top-level key and the segments below it.
fn split_key(key: &str, options: &QueryOptions) -> Option<(String, Vec<KeySegment>)> {
    if key.is_empty() {
        return None;
    }

    let (mut head, mut rest) = match key.find('[') {
        Some(0) | None => (String::new(), key),
        Some(open) => (key[..open].to_string(), &key[open..]),
    };

    let mut segments = Vec::new();
    let mut bracketed = false;
    while let Some(group) = rest.strip_prefix('[') {
        if segments.len() >= options.depth {
            break;
        }
        let Some(close) = group.find(']') else {
            break;
        };
        let inner = &group[..close];
        if inner.contains('[') {
            break;
        }
        if head.is_empty() {
            head = inner.to_string();
        } else {
            segments.push(classify(inner, options));
        }
        bracketed = true;
        rest = &group[close + 1..];
    }

    if !bracketed {
        return Some((key.to_string(), Vec::new()));
    }
    if head.is_empty() {
        head = rest.to_string();
    } else if !rest.is_empty() {
        segments.push(KeySegment::Key(rest.to_string()));
    }

    if head.is_empty() {
        None
    } else {
        Some((head, segments))
    }
}

fn classify(inner: &str, options: &QueryOptions) -> KeySegment {
    if inner.is_empty() {
        return KeySegment::Push;
    }
    match inner.parse::<usize>() {
        Ok(n) if n <= options.array_limit && n.to_string() == inner => KeySegment::Index(n),
        _ => KeySegment::Key(inner.to_string()),
    }
}

fn wrap(node: Node, segment: KeySegment) -> Node {
    match segment {
        KeySegment::Push => Node::List(vec![node]),
        KeySegment::Index(n) => Node::Indexed(BTreeMap::from([(n, node)])),
        KeySegment::Key(k) => Node::Map(BTreeMap::from([(k, node)])),
    }
}

fn insert<K: Ord>(map: &mut BTreeMap<K, Node>, key: K, node: Node) {
    let merged = match map.remove(&key) {
        Some(existing) => merge(existing, node),
        None => node,
    };
    map.insert(key, merged);
}

fn merge(target: Node, source: Node) -> Node {
    match (target, source) {
        (Node::Map(mut target), Node::Map(source)) => {
            for (k, v) in source {
                insert(&mut target, k, v);
            }
            Node::Map(target)
        }
        (Node::Indexed(mut target), Node::Indexed(source)) => {
            for (i, v) in source {
                insert(&mut target, i, v);
            }
            Node::Indexed(target)
        }
        (Node::Map(mut target), Node::Indexed(source)) => {
            for (i, v) in source {
                insert(&mut target, i.to_string(), v);
            }
            Node::Map(target)
        }
        (Node::Indexed(target), Node::Map(source)) => {
            let mut map: BTreeMap<String, Node> = target
                .into_iter()
                .map(|(i, v)| (i.to_string(), v))
                .collect();
            for (k, v) in source {
                insert(&mut map, k, v);
            }
            Node::Map(map)
        }
        (target, source) => {
            let mut items = into_items(target);
            items.extend(into_items(source));
            Node::List(items)
        }
    }
}

fn into_items(node: Node) -> Vec<Node> {
    match node {
        Node::List(items) => items,
        Node::Indexed(entries) => entries.into_values().collect(),
        other => vec![other],
    }
}

fn finish(node: Node) -> QueryValue {
    match node {
        Node::Leaf(s) => QueryValue::String(s),
        Node::List(items) => QueryValue::List(items.into_iter().map(finish).collect()),
        Node::Indexed(entries) => QueryValue::List(entries.into_values().map(finish).collect()),
        Node::Map(entries) => {
            QueryValue::Map(entries.into_iter().map(|(k, v)| (k, finish(v))).collect())
        }
    }
}
