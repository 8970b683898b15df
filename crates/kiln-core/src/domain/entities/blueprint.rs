//! Blueprint records as published in a registry database.

use serde::{Deserialize, Serialize};

use crate::domain::version::Version;

/// A named, versioned project template and where to get it.
///
/// Field names follow the registry database format
/// (`{name, version, description, tags, downloadURL, repo, path}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(rename = "downloadURL", default)]
    pub download_url: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub path: String,
}

impl Blueprint {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: String::new(),
            tags: Vec::new(),
            download_url: String::new(),
            repo: String::new(),
            path: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = url.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = repo.into();
        self
    }

    /// Parsed form of [`Self::version`].
    pub fn parsed_version(&self) -> Version {
        Version::parse(&self.version)
    }

    /// Exact, case-insensitive tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match against name, description or any
    /// tag. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

/// Filter applied by `list` and `search`.
///
/// Both parts are optional; an empty filter accepts every blueprint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlueprintFilter {
    pub tag: Option<String>,
    pub query: Option<String>,
}

impl BlueprintFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag = (!tag.is_empty()).then_some(tag);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        let query = query.into().trim().to_string();
        self.query = (!query.is_empty()).then_some(query);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.query.is_none()
    }

    /// Tag filter (exact, case-insensitive) AND substring query.
    pub fn accepts(&self, blueprint: &Blueprint) -> bool {
        if let Some(tag) = &self.tag {
            if !blueprint.has_tag(tag) {
                return false;
            }
        }
        self.query
            .as_deref()
            .is_none_or(|q| blueprint.matches_query(q))
    }
}

/// One registry's set of blueprints. Loaded fresh on every invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub blueprints: Vec<Blueprint>,
}

impl Database {
    pub fn new(blueprints: Vec<Blueprint>) -> Self {
        Self { blueprints }
    }

    /// First blueprint with exactly this name.
    pub fn find(&self, name: &str) -> Option<&Blueprint> {
        self.blueprints.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }
}

/// `null` in the published JSON is treated like an absent list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
