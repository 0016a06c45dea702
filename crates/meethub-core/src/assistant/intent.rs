use crate::models::Intent;

use super::vocabulary::INTENT_KEYWORDS;

/// Every intent with at least one keyword occurring in the query, in
/// vocabulary order.
#[must_use]
pub fn classify_intents(query: &str) -> Vec<Intent> {
    let query = query.to_lowercase();
    INTENT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|keyword| query.contains(keyword)))
        .map(|(intent, _)| *intent)
        .collect()
}
