mod assistant;
mod env;

pub use assistant::{
    AssistantConfig, DEFAULT_ADMISSION_THRESHOLD, DEFAULT_CATEGORY_WEIGHT,
    DEFAULT_DESCRIPTION_WEIGHT, DEFAULT_MAX_ARTICLES, DEFAULT_MAX_SUGGESTIONS,
    DEFAULT_SUBSTRING_BONUS, DEFAULT_TAGS_WEIGHT, DEFAULT_TITLE_WEIGHT, FieldWeights,
};

const ENV_SEED_KB: &str = "MEETHUB_SEED_KB";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub assistant: AssistantConfig,
    /// Populate the article catalog with the default SRE resources when it is empty.
    pub seed_kb: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assistant: AssistantConfig::default(),
            seed_kb: true,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            assistant: AssistantConfig::from_env(),
            seed_kb: env::parse_enabled_default_true(std::env::var(ENV_SEED_KB).ok().as_deref()),
        }
    }
}
