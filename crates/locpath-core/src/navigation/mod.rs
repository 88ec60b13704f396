//! Navigation capabilities: reading the active location, pushing a new one,
//! and telling listeners that it changed.
//!
//! The locator depends only on these traits. [`MemoryHistory`] is the
//! in-process implementation used by the CLI and tests.

mod history;
mod notifier;

pub use history::MemoryHistory;
pub use notifier::{ChangeNotifier, Listener, SubscriptionId};

use crate::error::ParseError;

/// Read-only access to the active location.
pub trait LocationSource {
    /// Absolute URL of the active location.
    fn current_url(&self) -> String;
}

/// Replaces the active location with history-push semantics: a new entry is
/// added and nothing is reloaded.
pub trait Navigator: LocationSource {
    /// `url` may be relative; it is resolved against the current location.
    fn push_state(&self, url: &str) -> Result<(), ParseError>;
}

impl<T: LocationSource + ?Sized> LocationSource for &T {
    fn current_url(&self) -> String {
        (**self).current_url()
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn push_state(&self, url: &str) -> Result<(), ParseError> {
        (**self).push_state(url)
    }
}
