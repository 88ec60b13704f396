//! `locpath base|ext|dir|to-url|to-path <input>` – print one location field.

use anyhow::Result;

use super::CliLocator;

/// Which location field a projection command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Base,
    Ext,
    Dir,
    Url,
    Path,
}

pub fn project(locator: &CliLocator, projection: Projection, input: &str) -> Result<String> {
    let value = match projection {
        Projection::Base => locator.get_base(input)?,
        Projection::Ext => locator.get_ext(input)?,
        Projection::Dir => locator.get_dir(input)?,
        Projection::Url => locator.to_url(input)?,
        Projection::Path => locator.to_path(input)?,
    };
    Ok(value)
}

pub fn run_project(locator: &CliLocator, projection: Projection, input: &str) -> Result<()> {
    println!("{}", project(locator, projection, input)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use locpath_core::navigation::MemoryHistory;
    use locpath_core::Locator;

    #[test]
    fn projects_each_field() {
        let locator = Locator::new(MemoryHistory::new("http://localhost:5000/app/").unwrap());
        let input = "docs/index.html";
        assert_eq!(project(&locator, Projection::Base, input).unwrap(), "index.html");
        assert_eq!(project(&locator, Projection::Ext, input).unwrap(), ".html");
        assert_eq!(project(&locator, Projection::Dir, input).unwrap(), "/app/docs");
        assert_eq!(
            project(&locator, Projection::Url, input).unwrap(),
            "http://localhost:5000/app/docs/index.html"
        );
        assert_eq!(
            project(&locator, Projection::Path, input).unwrap(),
            "/app/docs/index.html"
        );
    }
}
