use serde::Deserialize;

use crate::domain::blog_post::{BlogPost, BlogPostListQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::BlogPostReader;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the blog index page.
#[derive(Debug, Default, Deserialize)]
pub struct BlogQuery {
    pub page: Option<usize>,
}

/// Loads the published articles for the blog index, newest first.
pub fn load_blog_page<R>(repo: &R, query: BlogQuery) -> ServiceResult<Paginated<BlogPost>>
where
    R: BlogPostReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let list_query = BlogPostListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    let (total, posts) = repo
        .list_blog_posts(list_query)
        .map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    Ok(Paginated::new(posts, page, total_pages))
}

/// Loads one article for its detail page; unpublished articles answer the
/// same way a missing slug does.
pub fn load_blog_post_page<R>(repo: &R, slug: &str) -> ServiceResult<BlogPost>
where
    R: BlogPostReader + ?Sized,
{
    let post = repo
        .get_blog_post_by_slug(slug)
        .map_err(ServiceError::from)?
        .filter(|post| post.published)
        .ok_or(ServiceError::NotFound)?;

    Ok(post)
}
