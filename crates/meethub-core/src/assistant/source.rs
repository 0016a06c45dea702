use crate::error::Result;
use crate::models::Article;
use crate::state::SqliteStateStore;

/// Read-only view of the article catalog used by the assistant.
pub trait ArticleSource {
    /// All articles ordered by category, then title.
    fn list_all_articles(&self) -> Result<Vec<Article>>;

    /// Articles where any whitespace token of `query` occurs (case-insensitive)
    /// in the title, description, tags or category; same ordering as
    /// [`ArticleSource::list_all_articles`].
    fn keyword_search(&self, query: &str) -> Result<Vec<Article>>;
}

impl<T: ArticleSource + ?Sized> ArticleSource for &T {
    fn list_all_articles(&self) -> Result<Vec<Article>> {
        (**self).list_all_articles()
    }

    fn keyword_search(&self, query: &str) -> Result<Vec<Article>> {
        (**self).keyword_search(query)
    }
}

impl ArticleSource for SqliteStateStore {
    fn list_all_articles(&self) -> Result<Vec<Article>> {
        self.list_articles()
    }

    fn keyword_search(&self, query: &str) -> Result<Vec<Article>> {
        self.search_articles(query)
    }
}

/// Fixed in-memory catalog with the same search rule as the SQLite store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticles {
    articles: Vec<Article>,
}

impl InMemoryArticles {
    #[must_use]
    pub fn new(mut articles: Vec<Article>) -> Self {
        articles.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then_with(|| a.title.cmp(&b.title))
        });
        Self { articles }
    }
}

impl ArticleSource for InMemoryArticles {
    fn list_all_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.clone())
    }

    fn keyword_search(&self, query: &str) -> Result<Vec<Article>> {
        let terms = query
            .to_lowercase()
            .split_whitespace()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if terms.is_empty() {
            return self.list_all_articles();
        }
        Ok(self
            .articles
            .iter()
            .filter(|article| {
                let fields = [
                    article.title.to_lowercase(),
                    article.description.to_lowercase(),
                    article.tags.to_lowercase(),
                    article.category.to_lowercase(),
                ];
                terms
                    .iter()
                    .any(|term| fields.iter().any(|field| field.contains(term.as_str())))
            })
            .cloned()
            .collect())
    }
}
