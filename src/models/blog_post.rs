use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::blog_post::{BlogPost as DomainBlogPost, NewBlogPost as DomainNewBlogPost};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::blog_posts)]
pub struct BlogPost {
    pub id: i32,
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::blog_posts)]
pub struct NewBlogPost<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub content: &'a str,
    pub excerpt: Option<&'a str>,
    pub meta_title: Option<&'a str>,
    pub meta_desc: Option<&'a str>,
    pub keywords: Option<&'a str>,
    pub featured_image: Option<&'a str>,
    pub published: bool,
    pub published_at: Option<NaiveDateTime>,
    pub author: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<BlogPost> for DomainBlogPost {
    fn from(value: BlogPost) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            content: value.content,
            excerpt: value.excerpt,
            meta_title: value.meta_title,
            meta_desc: value.meta_desc,
            keywords: value.keywords,
            featured_image: value.featured_image,
            published: value.published,
            published_at: value.published_at,
            author: value.author,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewBlogPost> for NewBlogPost<'a> {
    fn from(value: &'a DomainNewBlogPost) -> Self {
        Self {
            title: value.title.as_str(),
            slug: value.slug.as_str(),
            content: value.content.as_str(),
            excerpt: value.excerpt.as_deref(),
            meta_title: value.meta_title.as_deref(),
            meta_desc: value.meta_desc.as_deref(),
            keywords: value.keywords.as_deref(),
            featured_image: value.featured_image.as_deref(),
            published: value.published,
            published_at: value.published_at,
            author: value.author.as_deref(),
            updated_at: value.updated_at,
        }
    }
}
