//! `locpath cwd [--climb N]`.

use anyhow::Result;

use super::CliLocator;

pub fn run_cwd(locator: &CliLocator, climb: usize) -> Result<()> {
    println!("{}", locator.cwd(climb)?);
    Ok(())
}
