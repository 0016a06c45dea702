use crate::models::Intent;

use super::vocabulary::{GENERIC_SUGGESTIONS, suggestions_for};

/// Follow-up topics for a general query.
///
/// Phrases of every matched intent are concatenated in intent order, falling
/// back to the generic list when nothing matched. Phrases that already contain
/// the query are dropped and at most `limit` remain.
#[must_use]
pub fn follow_up_suggestions(query: &str, intents: &[Intent], limit: usize) -> Vec<String> {
    let mut phrases = intents
        .iter()
        .flat_map(|intent| suggestions_for(*intent).iter().copied())
        .collect::<Vec<_>>();
    if phrases.is_empty() {
        phrases = GENERIC_SUGGESTIONS.to_vec();
    }

    let query = query.to_lowercase();
    phrases
        .into_iter()
        .filter(|phrase| !phrase.to_lowercase().contains(&query))
        .take(limit)
        .map(ToString::to_string)
        .collect()
}
