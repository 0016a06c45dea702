use crate::assistant::Assistant;
use crate::error::{MeetHubError, Result};
use crate::models::{Article, ArticlePatch, AssistantResponse, CategoryCount, NewArticle};

use super::MeetHub;

impl MeetHub {
    pub fn add_article(&self, article: &NewArticle) -> Result<Article> {
        let id = self.state.add_article(article)?;
        self.require_article(id)
    }

    pub fn get_article(&self, id: i64) -> Result<Option<Article>> {
        self.state.get_article(id)
    }

    pub fn list_articles(&self) -> Result<Vec<Article>> {
        self.state.list_articles()
    }

    pub fn search_articles(&self, query: &str) -> Result<Vec<Article>> {
        self.state.search_articles(query)
    }

    pub fn update_article(&self, id: i64, patch: &ArticlePatch) -> Result<Article> {
        self.state.update_article(id, patch)?;
        self.require_article(id)
    }

    pub fn delete_article(&self, id: i64) -> Result<()> {
        self.state.delete_article(id)
    }

    pub fn article_categories(&self) -> Result<Vec<CategoryCount>> {
        self.state.article_category_counts()
    }

    /// Answers a free-text question from the knowledge base.
    pub fn ask(&self, query: &str) -> Result<AssistantResponse> {
        Assistant::new(&self.state, self.config.assistant).respond(query)
    }

    fn require_article(&self, id: i64) -> Result<Article> {
        self.state
            .get_article(id)?
            .ok_or_else(|| MeetHubError::missing("article", id))
    }
}
