//! Source registry: the restaurants to scrape and the parser family for each.
//!
//! The registry is an explicit, immutable value handed to the aggregator.
//! It comes either from [`SourceRegistry::builtin`] or from a YAML file:
//!
//! ```yaml
//! sources:
//!   - name: Bistro 22
//!     parser: bistro
//!     url: https://bistro22.cz
//! ```
//!
//! Loading validates every entry, so a misconfigured parser key surfaces as
//! [`MenuError::UnknownSourceType`] at startup rather than during a run.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use url::Url;

use crate::error::{MenuError, Result};

/// Parser family of a source. Each variant has exactly one parser in
/// [`crate::scrapers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserKey {
    /// Bistro 22 weekly planner.
    Bistro,
    /// VUT Brno canteens (KaM).
    Canteen,
    Cookpoint,
    Kanas,
    /// Nepál, dated day sections.
    Nepal,
}

impl ParserKey {
    pub const ALL: [ParserKey; 5] = [
        ParserKey::Bistro,
        ParserKey::Canteen,
        ParserKey::Cookpoint,
        ParserKey::Kanas,
        ParserKey::Nepal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParserKey::Bistro => "bistro",
            ParserKey::Canteen => "canteen",
            ParserKey::Cookpoint => "cookpoint",
            ParserKey::Kanas => "kanas",
            ParserKey::Nepal => "nepal",
        }
    }
}

impl fmt::Display for ParserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParserKey {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        ParserKey::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == key)
            .ok_or_else(|| MenuError::UnknownSourceType(s.to_string()))
    }
}

/// One restaurant feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub name: String,
    pub parser: ParserKey,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, parser: ParserKey, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parser,
            url: url.into(),
        }
    }
}

/// Registry entry as written in YAML, before the parser key is checked.
#[derive(Debug, Deserialize)]
struct RawSource {
    name: String,
    parser: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RawRegistry {
    #[serde(default)]
    sources: Vec<RawSource>,
}

/// Ordered, validated list of sources. Order is the output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    /// Build a registry from sources, validating every entry.
    pub fn new(sources: Vec<Source>) -> Result<Self> {
        let registry = Self { sources };
        registry.validate()?;
        Ok(registry)
    }

    /// The restaurants around the VUT Brno campus.
    pub fn builtin() -> Self {
        Self {
            sources: vec![
                Source::new("Bistro 22", ParserKey::Bistro, "https://bistro22.cz"),
                Source::new(
                    "Menza Mozzarella",
                    ParserKey::Canteen,
                    "https://www.kam.vutbr.cz/21default.aspx?p=menu&provoz=18",
                ),
                Source::new(
                    "Menza Kolejní",
                    ParserKey::Canteen,
                    "https://www.kam.vutbr.cz/21default.aspx?p=menu&provoz=20",
                ),
                Source::new("Cookpoint", ParserKey::Cookpoint, "http://www.cookpoint.cz"),
                Source::new("Kanas", ParserKey::Kanas, "https://jidelna100chuti.cz/"),
                Source::new("Nepál", ParserKey::Nepal, "https://nepalbrno.cz/poledni.php"),
            ],
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let raw: RawRegistry = serde_yaml::from_str(yaml)?;
        let sources = raw
            .sources
            .into_iter()
            .map(|entry| -> Result<Source> {
                Ok(Source {
                    parser: entry.parser.parse()?,
                    name: entry.name.trim().to_string(),
                    url: entry.url.trim().to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(sources)
    }

    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        let registry = Self::from_yaml_str(&yaml)?;
        info!(count = registry.len(), "Loaded source registry");
        Ok(registry)
    }

    /// Check names are present and unique and URLs are absolute http(s).
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(MenuError::InvalidRegistry {
                message: "no sources configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.name.trim().is_empty() {
                return Err(MenuError::InvalidRegistry {
                    message: format!("source with url {} has an empty name", source.url),
                });
            }
            if !seen.insert(source.name.as_str()) {
                return Err(MenuError::InvalidRegistry {
                    message: format!("duplicate source name {:?}", source.name),
                });
            }
            let parsed = Url::parse(&source.url).map_err(|e| MenuError::InvalidUrl {
                url: source.url.clone(),
                message: e.to_string(),
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(MenuError::InvalidUrl {
                    url: source.url.clone(),
                    message: format!("unsupported scheme {:?}", parsed.scheme()),
                });
            }
        }
        Ok(())
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
