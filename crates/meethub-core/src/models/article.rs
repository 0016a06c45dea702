use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MeetHubError;

/// Categories offered when filing an article. Stored values outside this list
/// are kept as-is and ranked like any other text.
pub const KNOWN_CATEGORIES: [&str; 8] = [
    "Incident Management",
    "Observability",
    "Deployment",
    "Infrastructure",
    "Reliability Testing",
    "Business Continuity",
    "External Resources",
    "Other",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Team-owned page on the internal wiki.
    #[default]
    Internal,
    External,
}

impl SourceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = MeetHubError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            // Older catalogs labelled internal pages by the wiki product name.
            "internal" | "confluence" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            other => Err(MeetHubError::Validation(format!(
                "invalid source type: {other} (expected internal|external)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: String,
    pub url: String,
    pub source_type: SourceType,
    /// Comma-separated tag list, kept verbatim.
    pub tags: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub category: String,
    pub description: String,
    pub url: String,
    pub source_type: SourceType,
    pub tags: String,
}

impl NewArticle {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            description: String::new(),
            url: url.into(),
            source_type: SourceType::Internal,
            tags: String::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    #[must_use]
    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub source_type: Option<SourceType>,
    pub tags: Option<String>,
}

impl ArticlePatch {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.url.is_none()
            && self.source_type.is_none()
            && self.tags.is_none()
    }
}
