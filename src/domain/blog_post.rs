use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Domain representation of a blog article.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    /// Unique URL-safe identifier used in `/blog/{slug}`.
    pub slug: String,
    /// Article body as HTML.
    pub content: String,
    /// Short teaser shown in listings.
    pub excerpt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub keywords: Option<String>,
    pub featured_image: Option<String>,
    /// Whether the article is visible on the public site.
    pub published: bool,
    pub published_at: Option<NaiveDateTime>,
    pub author: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new blog article.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub keywords: Option<String>,
    pub featured_image: Option<String>,
    pub published: bool,
    pub published_at: Option<NaiveDateTime>,
    pub author: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewBlogPost {
    /// Build an unpublished article with the supplied title, slug and body.
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            title: title.into(),
            slug: slug.into(),
            content: content.into(),
            excerpt: None,
            meta_title: None,
            meta_desc: None,
            keywords: None,
            featured_image: None,
            published: false,
            published_at: None,
            author: None,
            updated_at: now,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_seo(
        mut self,
        meta_title: impl Into<String>,
        meta_desc: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        self.meta_title = Some(meta_title.into());
        self.meta_desc = Some(meta_desc.into());
        self.keywords = Some(keywords.into());
        self
    }

    pub fn with_featured_image(mut self, featured_image: impl Into<String>) -> Self {
        self.featured_image = Some(featured_image.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Mark the article published at the given timestamp.
    pub fn published_at(mut self, at: NaiveDateTime) -> Self {
        self.published = true;
        self.published_at = Some(at);
        self
    }
}

/// Query definition used to list blog articles, newest first.
#[derive(Debug, Clone, Default)]
pub struct BlogPostListQuery {
    /// Whether unpublished articles should be included in the results.
    pub include_unpublished: bool,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl BlogPostListQuery {
    /// Construct a query matching all published articles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include unpublished articles in the results.
    pub fn include_unpublished(mut self) -> Self {
        self.include_unpublished = true;
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
