use std::fmt;

use serde::{Deserialize, Serialize};

use super::article::Article;

/// Coarse SRE topic inferred from keywords in a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Incident,
    Monitoring,
    Deployment,
    Infrastructure,
    Reliability,
    Postmortem,
}

impl Intent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incident => "incident",
            Self::Monitoring => "monitoring",
            Self::Deployment => "deployment",
            Self::Infrastructure => "infrastructure",
            Self::Reliability => "reliability",
            Self::Postmortem => "postmortem",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which branch of the assistant produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    EmptyQuery,
    Greeting,
    Help,
    Results,
    NoResults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub kind: ResponseKind,
    pub message: String,
    pub articles: Vec<Article>,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub intents: Vec<Intent>,
}

/// One article with its weighted relevance total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredArticle {
    pub score: f32,
    pub article: Article,
}
