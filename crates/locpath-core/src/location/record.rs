//! Immutable snapshot of a parsed location.

use serde::Serialize;

use super::decode::decode_component;
use super::extract::{base_part, dir_part, ext_part};
use crate::error::ParseError;
use crate::query::{self, Query, QueryOptions};
use crate::resolver::ResolvedUrl;

/// Parsed, decoded view of a URL.
///
/// Built once per parse and never mutated; a new location always means a new
/// record. `LocationRecord::default()` has every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationRecord {
    url: String,
    protocol: String,
    domain: String,
    port: String,
    host: String,
    path: String,
    hash: String,
    dir: String,
    base: String,
    ext: String,
    query: Query,
}

impl LocationRecord {
    /// Derives every field from resolved URL components.
    ///
    /// `dir`, `base` and `ext` are cut out of the already-decoded path and
    /// decoded once more, so a path segment escaped twice (`%2541`) ends up
    /// fully decoded in those fields.
    pub fn from_resolved(src: &ResolvedUrl, options: &QueryOptions) -> Result<Self, ParseError> {
        let path = decode_component(&src.pathname)?;
        let hash = decode_component(src.hash.strip_prefix('#').unwrap_or(&src.hash))?;

        let base_raw = base_part(&path);
        let dir = decode_component(dir_part(&path))?;
        let base = decode_component(base_raw)?;
        let ext = decode_component(ext_part(base_raw))?;

        let search = src.search.strip_prefix('?').unwrap_or(&src.search);
        let query = query::decode(search, options);

        Ok(Self {
            url: src.href.clone(),
            protocol: src.protocol.clone(),
            domain: src.hostname.clone(),
            port: src.port.clone(),
            host: src.host.clone(),
            path,
            hash,
            dir,
            base,
            ext,
            query,
        })
    }

    /// Full resolved URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Scheme with trailing colon.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Hostname without port.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Decoded path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded fragment without `#`.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Directory of [`path`](Self::path), without trailing slash.
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Final path segment.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Extension of [`base`](Self::base) including the dot.
    pub fn ext(&self) -> &str {
        &self.ext
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}
