//! `locpath join <fragment>...`.

use anyhow::Result;

use super::CliLocator;

pub fn run_join(locator: &CliLocator, fragments: &[String]) -> Result<()> {
    println!("{}", locator.join(fragments)?);
    Ok(())
}
