use thiserror::Error;

use crate::db::{DbConnection, DbPool};
use crate::domain::admin::{Admin, NewAdmin};
use crate::domain::blog_post::{BlogPost, BlogPostListQuery, NewBlogPost};
use crate::domain::category::{Category, NewCategory};
use crate::domain::product::{NewProduct, Product, ProductListQuery};
use crate::domain::submission::{NewSubmission, Submission, SubmissionListQuery};

pub mod admin;
pub mod blog_post;
pub mod category;
pub mod product;
pub mod submission;

#[cfg(test)]
pub mod mock;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }

    /// Delete every row from every table, children before parents.
    ///
    /// Used by the seed binary before repopulating.
    pub fn clear_all(&self) -> RepositoryResult<()> {
        use crate::schema::{
            admins, blog_posts, categories, product_categories, products, submissions,
        };
        use diesel::prelude::*;

        let mut conn = self.conn()?;
        diesel::delete(product_categories::table).execute(&mut conn)?;
        diesel::delete(submissions::table).execute(&mut conn)?;
        diesel::delete(blog_posts::table).execute(&mut conn)?;
        diesel::delete(products::table).execute(&mut conn)?;
        diesel::delete(categories::table).execute(&mut conn)?;
        diesel::delete(admins::table).execute(&mut conn)?;
        Ok(())
    }
}

/// Read-only operations over catalog products.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over catalog products (seed tooling only).
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    fn assign_category(&self, product_id: i32, category_id: i32) -> RepositoryResult<()>;
}

/// Read-only operations over catalog categories.
pub trait CategoryReader {
    fn get_category_by_slug(&self, slug: &str) -> RepositoryResult<Option<Category>>;
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations over catalog categories (seed tooling only).
pub trait CategoryWriter {
    fn create_category(&self, new_category: &NewCategory) -> RepositoryResult<Category>;
}

/// Read-only operations over supplier submissions.
pub trait SubmissionReader {
    fn get_submission_by_id(&self, id: i32) -> RepositoryResult<Option<Submission>>;
    fn list_submissions(
        &self,
        query: SubmissionListQuery,
    ) -> RepositoryResult<(usize, Vec<Submission>)>;
}

/// Write operations over supplier submissions.
pub trait SubmissionWriter {
    fn create_submission(&self, new_submission: &NewSubmission) -> RepositoryResult<Submission>;
}

/// Read-only operations over blog articles.
pub trait BlogPostReader {
    fn get_blog_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<BlogPost>>;
    fn list_blog_posts(&self, query: BlogPostListQuery)
    -> RepositoryResult<(usize, Vec<BlogPost>)>;
}

/// Write operations over blog articles (seed tooling only).
pub trait BlogPostWriter {
    fn create_blog_post(&self, new_post: &NewBlogPost) -> RepositoryResult<BlogPost>;
}

/// Read-only operations over admin accounts.
pub trait AdminReader {
    fn get_admin_by_email(&self, email: &str) -> RepositoryResult<Option<Admin>>;
}

/// Write operations over admin accounts (seed tooling only).
pub trait AdminWriter {
    fn create_admin(&self, new_admin: &NewAdmin) -> RepositoryResult<Admin>;
}
