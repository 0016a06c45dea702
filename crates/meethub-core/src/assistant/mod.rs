//! Knowledge-base assistant: turns a free-text question into a short list of
//! relevant articles plus follow-up suggestions.
//!
//! The pipeline is deterministic. Keyword hits from the article source come
//! first, fuzzy-ranked articles fill the remaining slots, and intent keywords
//! drive the suggestions.

mod intent;
mod responder;
mod scoring;
mod similarity;
mod source;
mod suggestions;
pub(crate) mod vocabulary;

pub use intent::classify_intents;
pub use responder::Assistant;
pub use scoring::{article_score, fuzzy_score, rank_articles};
pub use similarity::sequence_ratio;
pub use source::{ArticleSource, InMemoryArticles};
pub use suggestions::follow_up_suggestions;
pub use vocabulary::EMPTY_QUERY_MESSAGE;
