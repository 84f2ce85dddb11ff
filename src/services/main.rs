use crate::domain::blog_post::{BlogPost, BlogPostListQuery};
use crate::domain::product::{Product, ProductListQuery};
use crate::repository::{BlogPostReader, ProductReader};
use crate::services::{ServiceError, ServiceResult};

/// Number of featured products shown on the home page.
const FEATURED_PRODUCTS: usize = 4;
/// Number of recent articles shown on the home page.
const RECENT_POSTS: usize = 3;

/// Data required to render the home page template.
pub struct IndexPageData {
    /// Featured, active products.
    pub featured_products: Vec<Product>,
    /// Most recent published articles.
    pub recent_posts: Vec<BlogPost>,
}

/// Loads the home page: featured products and the latest blog articles.
pub fn load_index_page<R>(repo: &R) -> ServiceResult<IndexPageData>
where
    R: ProductReader + BlogPostReader + ?Sized,
{
    let (_, featured_products) = repo
        .list_products(
            ProductListQuery::new()
                .featured_only()
                .paginate(1, FEATURED_PRODUCTS),
        )
        .map_err(ServiceError::from)?;

    let (_, recent_posts) = repo
        .list_blog_posts(BlogPostListQuery::new().paginate(1, RECENT_POSTS))
        .map_err(ServiceError::from)?;

    Ok(IndexPageData {
        featured_products,
        recent_posts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repository::RepositoryResult;
    use crate::repository::mock::{MockBlogPostReader, MockProductReader};

    struct FakeRepo {
        products: MockProductReader,
        posts: MockBlogPostReader,
    }

    impl ProductReader for FakeRepo {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
            self.products.get_product_by_id(id)
        }

        fn get_product_by_slug(&self, slug: &str) -> RepositoryResult<Option<Product>> {
            self.products.get_product_by_slug(slug)
        }

        fn list_products(
            &self,
            query: ProductListQuery,
        ) -> RepositoryResult<(usize, Vec<Product>)> {
            self.products.list_products(query)
        }
    }

    impl BlogPostReader for FakeRepo {
        fn get_blog_post_by_slug(&self, slug: &str) -> RepositoryResult<Option<BlogPost>> {
            self.posts.get_blog_post_by_slug(slug)
        }

        fn list_blog_posts(
            &self,
            query: BlogPostListQuery,
        ) -> RepositoryResult<(usize, Vec<BlogPost>)> {
            self.posts.list_blog_posts(query)
        }
    }

    #[test]
    fn index_requests_featured_products_and_recent_posts() {
        let mut products = MockProductReader::new();
        products
            .expect_list_products()
            .times(1)
            .withf(|query| {
                assert!(query.featured_only);
                assert!(!query.include_inactive);
                true
            })
            .returning(|_| Ok((0, Vec::new())));

        let mut posts = MockBlogPostReader::new();
        posts
            .expect_list_blog_posts()
            .times(1)
            .withf(|query| {
                assert!(!query.include_unpublished);
                true
            })
            .returning(|_| Ok((0, Vec::new())));

        let repo = FakeRepo { products, posts };

        let data = load_index_page(&repo).expect("expected success");
        assert!(data.featured_products.is_empty());
        assert!(data.recent_posts.is_empty());
    }
}
