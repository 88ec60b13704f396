//! `locpath move <path> [--query KEY=VALUE]...` – push a new active location.

use anyhow::Result;
use locpath_core::navigation::LocationSource;
use locpath_core::query::{self, Query, QueryOptions};

use super::CliLocator;

/// Builds a query from repeated `KEY=VALUE` arguments. Bracketed keys nest and
/// repeated keys collect into lists, exactly as in a URL query string.
pub fn query_from_args(args: &[String], options: &QueryOptions) -> Query {
    query::decode(&args.join("&"), options)
}

pub fn run_move(
    locator: &CliLocator,
    path: &str,
    args: &[String],
    options: &QueryOptions,
) -> Result<()> {
    let query = query_from_args(args, options);
    let id = locator
        .notifier()
        .subscribe(|| tracing::info!("location changed"));

    let moved = locator.move_to(path, &query);
    locator.notifier().unsubscribe(id);
    moved?;

    for entry in locator.navigator().entries() {
        println!("{entry}");
    }
    tracing::debug!("active location {}", locator.navigator().current_url());
    Ok(())
}
