use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::AssistantConfig;
use crate::error::Result;
use crate::models::{Article, AssistantResponse, ResponseKind, SourceType};

use super::intent::classify_intents;
use super::scoring::rank_articles;
use super::source::ArticleSource;
use super::suggestions::follow_up_suggestions;
use super::vocabulary::{
    EMPTY_QUERY_MESSAGE, EMPTY_QUERY_SUGGESTIONS, GREETING_MESSAGE, GREETING_SUGGESTIONS,
    GREETINGS, HELP_MESSAGE, HELP_PHRASES, HELP_SUGGESTIONS,
};

/// Answers questions against an [`ArticleSource`].
#[derive(Debug, Clone)]
pub struct Assistant<S> {
    source: S,
    config: AssistantConfig,
}

impl<S: ArticleSource> Assistant<S> {
    pub fn new(source: S, config: AssistantConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub const fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Every input produces a response; only failures of the article source
    /// are returned as errors.
    pub fn respond(&self, user_input: &str) -> Result<AssistantResponse> {
        let query = user_input.trim();
        if query.is_empty() {
            debug!("empty query");
            return Ok(self.canned(
                ResponseKind::EmptyQuery,
                EMPTY_QUERY_MESSAGE,
                &EMPTY_QUERY_SUGGESTIONS,
            ));
        }

        let lowered = query.to_lowercase();
        // Substring match, so "hi" also fires inside longer words.
        if GREETINGS.iter().any(|greeting| lowered.contains(greeting)) {
            debug!(query, "greeting");
            return Ok(self.canned(
                ResponseKind::Greeting,
                GREETING_MESSAGE,
                &GREETING_SUGGESTIONS,
            ));
        }
        if HELP_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
            debug!(query, "help request");
            return Ok(self.canned(ResponseKind::Help, HELP_MESSAGE, &HELP_SUGGESTIONS));
        }

        self.search(query)
    }

    fn search(&self, query: &str) -> Result<AssistantResponse> {
        let keyword_hits = self.source.keyword_search(query)?;
        let ranked = rank_articles(query, self.source.list_all_articles()?, &self.config);
        let keyword_count = keyword_hits.len();

        let mut seen = HashSet::new();
        let articles = keyword_hits
            .into_iter()
            .chain(ranked.into_iter().map(|hit| hit.article))
            .filter(|article| seen.insert(article.id))
            .take(self.config.max_articles)
            .collect::<Vec<_>>();

        let intents = classify_intents(query);
        let suggestions = follow_up_suggestions(query, &intents, self.config.max_suggestions);

        let (kind, message) = if articles.is_empty() {
            (
                ResponseKind::NoResults,
                format!(
                    "🤔 I couldn't find articles matching *\"{query}\"*. \
                     Try different keywords or browse the suggestions below."
                ),
            )
        } else {
            (
                ResponseKind::Results,
                format!(
                    "📚 Found **{}** relevant {} for *\"{query}\"*:",
                    articles.len(),
                    source_label(&articles)
                ),
            )
        };

        info!(
            query,
            keyword_hits = keyword_count,
            returned = articles.len(),
            intents = ?intents,
            "answered knowledge-base query"
        );
        Ok(AssistantResponse {
            kind,
            message,
            articles,
            suggestions,
            intents,
        })
    }

    fn canned(
        &self,
        kind: ResponseKind,
        message: &str,
        suggestions: &[&str],
    ) -> AssistantResponse {
        AssistantResponse {
            kind,
            message: message.to_string(),
            articles: Vec::new(),
            suggestions: suggestions
                .iter()
                .take(self.config.max_suggestions)
                .map(ToString::to_string)
                .collect(),
            intents: Vec::new(),
        }
    }
}

fn source_label(articles: &[Article]) -> &'static str {
    let internal = articles
        .iter()
        .any(|article| article.source_type == SourceType::Internal);
    let external = articles
        .iter()
        .any(|article| article.source_type == SourceType::External);
    match (internal, external) {
        (true, true) => "internal pages and external resources",
        (true, false) => "internal pages",
        _ => "external resources",
    }
}
