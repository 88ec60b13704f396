//! In-memory session history.

use std::sync::{PoisonError, RwLock};

use url::Url;

use super::{LocationSource, Navigator};
use crate::error::ParseError;

/// Session history kept in memory. The last entry is the active location.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RwLock<Vec<Url>>,
}

impl MemoryHistory {
    /// Starts a history whose only entry is `initial`, which must be absolute.
    pub fn new(initial: &str) -> Result<Self, ParseError> {
        let url = Url::parse(initial).map_err(|source| match source {
            url::ParseError::RelativeUrlWithoutBase => ParseError::MissingBase {
                input: initial.to_string(),
            },
            source => ParseError::InvalidUrl {
                input: initial.to_string(),
                source,
            },
        })?;

        Ok(Self {
            entries: RwLock::new(vec![url]),
        })
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|u| u.as_str().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Never true: a history always holds its initial entry.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl LocationSource for MemoryHistory {
    fn current_url(&self) -> String {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .map(|u| u.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Navigator for MemoryHistory {
    fn push_state(&self, url: &str) -> Result<(), ParseError> {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let next = match entries.last() {
            Some(current) => current.join(url),
            None => Url::parse(url),
        }
        .map_err(|source| ParseError::InvalidUrl {
            input: url.to_string(),
            source,
        })?;

        tracing::debug!("history push {}", next);
        entries.push(next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_entry() {
        let history = MemoryHistory::new("http://localhost/app/index.html").unwrap();
        assert_eq!(history.current_url(), "http://localhost/app/index.html");
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
    }

    #[test]
    fn rejects_relative_initial_entry() {
        let err = MemoryHistory::new("/app").unwrap_err();
        assert!(matches!(err, ParseError::MissingBase { .. }));
    }

    #[test]
    fn push_resolves_against_current() {
        let history = MemoryHistory::new("http://localhost/app/index.html").unwrap();
        history.push_state("settings?tab=1").unwrap();
        assert_eq!(history.current_url(), "http://localhost/app/settings?tab=1");
        history.push_state("/root").unwrap();
        assert_eq!(
            history.entries(),
            vec![
                "http://localhost/app/index.html",
                "http://localhost/app/settings?tab=1",
                "http://localhost/root",
            ]
        );
    }

    #[test]
    fn failed_push_keeps_current_entry() {
        let history = MemoryHistory::new("http://localhost/").unwrap();
        assert!(history.push_state("http://[::1").is_err());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_url(), "http://localhost/");
    }
}
