use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a catalog category.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Unique URL-safe identifier used in `/produits?category={slug}`.
    pub slug: String,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new category.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            slug: slug.into(),
            description: None,
            meta_title: None,
            meta_desc: None,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_seo(
        mut self,
        meta_title: impl Into<String>,
        meta_desc: impl Into<String>,
    ) -> Self {
        self.meta_title = Some(meta_title.into());
        self.meta_desc = Some(meta_desc.into());
        self
    }
}
