//! Path algebra and URL location parsing.
//!
//! [`path`] holds the pure string algebra (normalize, split, join).
//! [`Locator`] binds it to an active location: parsing URLs into
//! [`LocationRecord`]s, climbing the current directory, and moving to a new
//! location through a [`navigation::Navigator`].

pub mod config;
pub mod logging;

pub mod error;
pub mod location;
pub mod locator;
pub mod navigation;
pub mod path;
pub mod query;
pub mod resolver;

pub use error::ParseError;
pub use location::LocationRecord;
pub use locator::Locator;
