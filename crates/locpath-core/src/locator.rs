//! The public facade: location parsing, navigation and path algebra bound to
//! an active location.

use crate::error::ParseError;
use crate::location::LocationRecord;
use crate::navigation::{ChangeNotifier, Navigator};
use crate::path;
use crate::query::{self, Query, QueryOptions};
use crate::resolver::{BaseUrlResolver, UrlResolver};

/// Parses URLs relative to the navigator's active location and moves it.
#[derive(Debug)]
pub struct Locator<N, R = BaseUrlResolver> {
    navigator: N,
    resolver: R,
    notifier: ChangeNotifier,
    query_options: QueryOptions,
}

impl<N: Navigator> Locator<N> {
    pub fn new(navigator: N) -> Self {
        Self::with_resolver(navigator, BaseUrlResolver)
    }
}

impl<N: Navigator, R: UrlResolver> Locator<N, R> {
    pub fn with_resolver(navigator: N, resolver: R) -> Self {
        Self {
            navigator,
            resolver,
            notifier: ChangeNotifier::new(),
            query_options: QueryOptions::default(),
        }
    }

    pub fn with_query_options(mut self, options: QueryOptions) -> Self {
        self.query_options = options;
        self
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Listeners registered here run after every successful [`move_to`](Self::move_to).
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Parses `url`, resolved against the active location.
    pub fn parse(&self, url: &str) -> Result<LocationRecord, ParseError> {
        let base = self.navigator.current_url();
        let resolved = self.resolver.resolve(url, Some(&base))?;
        let record = LocationRecord::from_resolved(&resolved, &self.query_options)?;
        tracing::debug!("parsed {} -> {}", url, record.url());
        Ok(record)
    }

    /// Pushes `path` (plus `query`, when non-empty) as the new active location
    /// and then notifies listeners. Nothing changes if `path` cannot be resolved.
    pub fn move_to(&self, path: &str, query: &Query) -> Result<(), ParseError> {
        let mut url = path.to_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query::encode(query));
        }

        self.navigator.push_state(&url)?;
        tracing::debug!("moved to {}", self.navigator.current_url());
        self.notifier.notify();
        Ok(())
    }

    /// `"/foo/bar/index.html"` gives `"index.html"`.
    pub fn get_base(&self, path: &str) -> Result<String, ParseError> {
        Ok(self.parse(path)?.base().to_string())
    }

    /// `"/foo/bar/index.html"` gives `".html"`.
    pub fn get_ext(&self, path: &str) -> Result<String, ParseError> {
        Ok(self.parse(path)?.ext().to_string())
    }

    /// `"/foo/bar/index.html"` gives `"/foo/bar"`.
    pub fn get_dir(&self, path: &str) -> Result<String, ParseError> {
        Ok(self.parse(path)?.dir().to_string())
    }

    /// Absolute URL of `path`.
    pub fn to_url(&self, path: &str) -> Result<String, ParseError> {
        Ok(self.parse(path)?.url().to_string())
    }

    /// `"http://localhost:5000/foo/bar/index.html"` gives `"/foo/bar/index.html"`.
    pub fn to_path(&self, url: &str) -> Result<String, ParseError> {
        Ok(self.parse(url)?.path().to_string())
    }

    /// Directory of the active location, climbed `climb_steps` levels.
    ///
    /// With the active path `/root/foo/var/page.html`, `cwd(0)` is
    /// `/root/foo/var` and `cwd(2)` is `/root`.
    pub fn cwd(&self, climb_steps: usize) -> Result<String, ParseError> {
        let current = self.parse(&self.navigator.current_url())?;
        Ok(climb(current.dir(), climb_steps).to_string())
    }

    /// Joins `fragments`; a single fragment is joined onto [`cwd`](Self::cwd).
    pub fn join<I, S>(&self, fragments: I) -> Result<String, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fragments: Vec<S> = fragments.into_iter().collect();
        let cwd = if fragments.len() < 2 {
            self.cwd(0)?
        } else {
            String::new()
        };
        Ok(path::join_with(&cwd, fragments))
    }

    pub fn split(&self, path: &str) -> Vec<String> {
        path::split(path)
    }
}

/// Strips up to `steps` trailing `/name` groups (a slash run plus the
/// non-slash run after it). Climbing past the first slash leaves whatever
/// precedes it, usually `""`.
fn climb(dir: &str, steps: usize) -> &str {
    let mut end = dir.len();
    for _ in 0..steps {
        let without_name = dir[..end].trim_end_matches(|c: char| c != '/');
        if !without_name.ends_with('/') {
            break;
        }
        end = without_name.trim_end_matches('/').len();
    }
    &dir[..end]
}
