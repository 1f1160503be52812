use crate::error::{MapError, Result};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where an input document lives: an `http(s)` URL or a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    Local(PathBuf),
}

impl Source {
    pub fn parse(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Remote(value.to_string())
        } else {
            Source::Local(PathBuf::from(value))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }

    /// Fetch the whole document as text.
    pub async fn fetch_text(&self, client: &reqwest::Client) -> Result<String> {
        match self {
            Source::Remote(url) => {
                tracing::debug!(url = %url, "GET");
                let response = client.get(url).send().await?.error_for_status()?;
                Ok(response.text().await?)
            }
            Source::Local(path) => {
                tracing::debug!(path = %path.display(), "Reading local file");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| MapError::InvalidSource {
                        source_ref: path.display().to_string(),
                        message: e.to_string(),
                    })
            }
        }
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Source::parse(s))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => write!(f, "{}", url),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
