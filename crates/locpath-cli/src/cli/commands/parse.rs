//! `locpath parse <url>` – print every location field as JSON.

use anyhow::Result;

use super::CliLocator;

pub fn run_parse(locator: &CliLocator, url: &str) -> Result<()> {
    let record = locator.parse(url)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
