use crate::{Error, Result};
use url::Url;

/// Where an operation is addressed.
///
/// Local drivers resolve rows by table name; a remote content endpoint is
/// addressed by URL instead. Query construction is identical for both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Table(String),
    Endpoint(Url),
}

impl Target {
    pub fn table(name: impl Into<String>) -> Target {
        Target::Table(name.into())
    }

    /// Parses `url` into an endpoint target.
    pub fn endpoint(url: &str) -> Result<Target> {
        let url = Url::parse(url).map_err(|err| {
            Error::invalid_connection_url(format!("{url}: {err}"))
        })?;
        Ok(Target::Endpoint(url))
    }

    pub fn as_table(&self) -> Option<&str> {
        match self {
            Target::Table(name) => Some(name),
            Target::Endpoint(_) => None,
        }
    }

    pub fn is_endpoint(&self) -> bool {
        matches!(self, Target::Endpoint(_))
    }
}

impl core::fmt::Display for Target {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Target::Table(name) => f.write_str(name),
            Target::Endpoint(url) => core::fmt::Display::fmt(url, f),
        }
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        Target::Table(name.to_string())
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        Target::Table(name)
    }
}

impl From<Url> for Target {
    fn from(url: Url) -> Self {
        Target::Endpoint(url)
    }
}
