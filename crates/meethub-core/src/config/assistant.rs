use super::env::{read_env_f32, read_env_usize};

const ENV_TITLE_WEIGHT: &str = "MEETHUB_TITLE_WEIGHT";
const ENV_TAGS_WEIGHT: &str = "MEETHUB_TAGS_WEIGHT";
const ENV_DESCRIPTION_WEIGHT: &str = "MEETHUB_DESCRIPTION_WEIGHT";
const ENV_CATEGORY_WEIGHT: &str = "MEETHUB_CATEGORY_WEIGHT";
const ENV_ADMISSION_THRESHOLD: &str = "MEETHUB_ADMISSION_THRESHOLD";
const ENV_SUBSTRING_BONUS: &str = "MEETHUB_SUBSTRING_BONUS";
const ENV_MAX_ARTICLES: &str = "MEETHUB_MAX_ARTICLES";
const ENV_MAX_SUGGESTIONS: &str = "MEETHUB_MAX_SUGGESTIONS";

pub const DEFAULT_TITLE_WEIGHT: f32 = 2.0;
pub const DEFAULT_TAGS_WEIGHT: f32 = 1.8;
pub const DEFAULT_DESCRIPTION_WEIGHT: f32 = 1.5;
pub const DEFAULT_CATEGORY_WEIGHT: f32 = 1.2;
pub const DEFAULT_ADMISSION_THRESHOLD: f32 = 0.5;
pub const DEFAULT_SUBSTRING_BONUS: f32 = 0.3;
pub const DEFAULT_MAX_ARTICLES: usize = 5;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 4;

/// Per-field multipliers applied to the fuzzy score of each article field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    pub title: f32,
    pub tags: f32,
    pub description: f32,
    pub category: f32,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_WEIGHT,
            tags: DEFAULT_TAGS_WEIGHT,
            description: DEFAULT_DESCRIPTION_WEIGHT,
            category: DEFAULT_CATEGORY_WEIGHT,
        }
    }
}

/// Tuning constants for the knowledge-base assistant.
///
/// The defaults are empirical; an article is admitted only when its weighted
/// total is strictly greater than `admission_threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssistantConfig {
    pub weights: FieldWeights,
    pub admission_threshold: f32,
    pub substring_bonus: f32,
    pub max_articles: usize,
    pub max_suggestions: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            admission_threshold: DEFAULT_ADMISSION_THRESHOLD,
            substring_bonus: DEFAULT_SUBSTRING_BONUS,
            max_articles: DEFAULT_MAX_ARTICLES,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl AssistantConfig {
    #[must_use]
    pub(super) fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            weights: FieldWeights {
                title: read_env_f32(ENV_TITLE_WEIGHT, defaults.weights.title),
                tags: read_env_f32(ENV_TAGS_WEIGHT, defaults.weights.tags),
                description: read_env_f32(ENV_DESCRIPTION_WEIGHT, defaults.weights.description),
                category: read_env_f32(ENV_CATEGORY_WEIGHT, defaults.weights.category),
            },
            admission_threshold: read_env_f32(
                ENV_ADMISSION_THRESHOLD,
                defaults.admission_threshold,
            ),
            substring_bonus: read_env_f32(ENV_SUBSTRING_BONUS, defaults.substring_bonus),
            max_articles: read_env_usize(ENV_MAX_ARTICLES, defaults.max_articles, 1),
            max_suggestions: read_env_usize(ENV_MAX_SUGGESTIONS, defaults.max_suggestions, 1),
        }
    }
}
