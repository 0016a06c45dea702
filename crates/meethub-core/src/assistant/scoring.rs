use std::cmp::Ordering;

use tracing::debug;

use crate::config::AssistantConfig;
use crate::models::{Article, ScoredArticle};

use super::similarity::sequence_ratio;

/// Relevance of `text` to `query` in `[0, 1]`.
///
/// Each whitespace token of the query found inside `text` adds
/// `substring_bonus`; the gestalt similarity of the two whole strings is added
/// on top and the sum is capped at 1.0. Comparison is case-insensitive and a
/// blank `text` always scores 0.
#[must_use]
pub fn fuzzy_score(query: &str, text: &str, substring_bonus: f32) -> f32 {
    if text.trim().is_empty() {
        return 0.0;
    }
    let query = query.to_lowercase();
    let text = text.to_lowercase();

    let token_hits = query
        .split_whitespace()
        .filter(|token| text.contains(token))
        .count();
    let substring_score = token_hits as f32 * substring_bonus;

    (substring_score + sequence_ratio(&query, &text)).min(1.0)
}

/// Weighted sum of the per-field fuzzy scores of one article.
#[must_use]
pub fn article_score(query: &str, article: &Article, config: &AssistantConfig) -> f32 {
    let bonus = config.substring_bonus;
    let weights = config.weights;
    fuzzy_score(query, &article.title, bonus) * weights.title
        + fuzzy_score(query, &article.tags, bonus) * weights.tags
        + fuzzy_score(query, &article.description, bonus) * weights.description
        + fuzzy_score(query, &article.category, bonus) * weights.category
}

/// Scores every article, orders them by descending total and keeps those
/// strictly above the admission threshold. Equal totals keep input order.
#[must_use]
pub fn rank_articles(
    query: &str,
    articles: Vec<Article>,
    config: &AssistantConfig,
) -> Vec<ScoredArticle> {
    let mut scored = articles
        .into_iter()
        .map(|article| ScoredArticle {
            score: article_score(query, &article, config),
            article,
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let considered = scored.len();
    scored.retain(|hit| hit.score > config.admission_threshold);
    debug!(
        considered,
        admitted = scored.len(),
        threshold = config.admission_threshold,
        "ranked articles"
    );
    scored
}
