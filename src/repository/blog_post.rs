use diesel::prelude::*;

use crate::domain::blog_post::{
    BlogPost as DomainBlogPost, BlogPostListQuery, NewBlogPost as DomainNewBlogPost,
};
use crate::models::blog_post::{BlogPost as DbBlogPost, NewBlogPost as DbNewBlogPost};
use crate::repository::{BlogPostReader, BlogPostWriter, DieselRepository, RepositoryResult};

impl BlogPostReader for DieselRepository {
    fn get_blog_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<DomainBlogPost>> {
        use crate::schema::blog_posts;

        let mut conn = self.conn()?;
        let post = blog_posts::table
            .filter(blog_posts::slug.eq(slug))
            .first::<DbBlogPost>(&mut conn)
            .optional()?;

        Ok(post.map(Into::into))
    }

    fn list_blog_posts(
        &self,
        query: BlogPostListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainBlogPost>)> {
        use crate::schema::blog_posts;

        let mut conn = self.conn()?;

        let mut count_query = blog_posts::table.into_boxed::<diesel::sqlite::Sqlite>();
        if !query.include_unpublished {
            count_query = count_query.filter(blog_posts::published.eq(true));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = blog_posts::table.into_boxed::<diesel::sqlite::Sqlite>();
        if !query.include_unpublished {
            items = items.filter(blog_posts::published.eq(true));
        }

        items = items.order(blog_posts::published_at.desc());

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset() as i64)
                .limit(pagination.per_page as i64);
        }

        let rows = items.load::<DbBlogPost>(&mut conn)?;

        Ok((total, rows.into_iter().map(Into::into).collect()))
    }
}

impl BlogPostWriter for DieselRepository {
    fn create_blog_post(&self, new_post: &DomainNewBlogPost) -> RepositoryResult<DomainBlogPost> {
        use crate::schema::blog_posts;

        let mut conn = self.conn()?;
        let db_new = DbNewBlogPost::from(new_post);

        let created = diesel::insert_into(blog_posts::table)
            .values(&db_new)
            .get_result::<DbBlogPost>(&mut conn)?;

        Ok(created.into())
    }
}
